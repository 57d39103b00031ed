use std::path::PathBuf;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::config::MergeConfig;
use crate::usecase::services::merge_service::MergeOutcome;

pub struct AppState {
    pub sku_header: Signal<String>,
    pub variation_attribute: Signal<String>,
    pub theme_name: Signal<String>,
    pub master_path: Signal<Option<PathBuf>>,
    pub plan_path: Signal<Option<PathBuf>>,
    pub outcome: Signal<Option<MergeOutcome>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        let MergeConfig {
            sku_header,
            variation_attribute,
            theme_name,
        } = MergeConfig::default();

        Self {
            sku_header: use_signal(move || sku_header),
            variation_attribute: use_signal(move || variation_attribute),
            theme_name: use_signal(move || theme_name),
            master_path: use_signal(|| None::<PathBuf>),
            plan_path: use_signal(|| None::<PathBuf>),
            outcome: use_signal(|| None::<MergeOutcome>),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
