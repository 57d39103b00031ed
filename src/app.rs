use std::path::PathBuf;

use chrono::Local;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::config::MergeConfig;
use crate::domain::entities::sheet::TabularData;
use crate::infra::export::tsv::TsvExporter;
use crate::infra::export::xlsx::XlsxExporter;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::export::ResultExporter;
use crate::usecase::services::merge_service::run_merge;
use crate::usecase::services::template_service::write_plan_template;

const PREVIEW_ROW_LIMIT: usize = 50;
const TEMPLATE_FILE_NAME: &str = "Plan_Template.xlsx";

fn default_output_name(extension: &str) -> String {
    format!(
        "READY_TO_UPLOAD_{}.{}",
        Local::now().format("%m%d"),
        extension
    )
}

fn picked_file_label(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .and_then(|path| path.file_name())
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .unwrap_or_else(|| "(not selected)".to_string())
}

fn save_result(exporter: &dyn ResultExporter, data: &TabularData) -> String {
    let Some(target) = FileDialog::new()
        .add_filter(exporter.label(), &[exporter.extension()])
        .set_file_name(default_output_name(exporter.extension()))
        .save_file()
    else {
        return "Save cancelled".to_string();
    };

    match run_blocking(|| exporter.export(data, &target)) {
        Ok(()) => format!("Saved {}", target.display()),
        Err(err) => format!("Save failed: {err}"),
    }
}

#[component]
pub fn App() -> Element {
    let state = AppState::new();

    let mut sku_header = state.sku_header;
    let mut variation_attribute = state.variation_attribute;
    let mut theme_name = state.theme_name;
    let mut master_path = state.master_path;
    let mut plan_path = state.plan_path;
    let mut outcome = state.outcome;
    let mut busy = state.busy;
    let mut status = state.status;

    let master_label = picked_file_label(&master_path());
    let plan_label = picked_file_label(&plan_path());

    let current_outcome = outcome();
    let result_row_count = current_outcome
        .as_ref()
        .map(|result| result.data.rows.len())
        .unwrap_or(0);
    let xlsx_save_data = current_outcome.as_ref().map(|result| result.data.clone());
    let txt_save_data = xlsx_save_data.clone();

    rsx! {
        div {
            style: "font-family: sans-serif; max-width: 960px; margin: 0 auto; padding: 12px;",

            h2 { "Variation Creator" }
            p {
                "Merge a planning file of new variations into a master category listing report. "
                "Row 2 of the plan is the new parent SKU, rows 3+ are existing child SKUs."
            }

            div {
                style: "display: flex; gap: 16px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                span { "Column settings:" }
                label {
                    "SKU header "
                    input {
                        r#type: "text",
                        value: sku_header(),
                        onchange: move |event| *sku_header.write() = event.value(),
                    }
                }
                label {
                    "Variation attribute "
                    input {
                        r#type: "text",
                        value: variation_attribute(),
                        onchange: move |event| *variation_attribute.write() = event.value(),
                    }
                }
                label {
                    "Theme name "
                    input {
                        r#type: "text",
                        value: theme_name(),
                        onchange: move |event| *theme_name.write() = event.value(),
                    }
                }
            }

            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let Some(target) = FileDialog::new()
                            .add_filter("Excel", &["xlsx"])
                            .set_file_name(TEMPLATE_FILE_NAME)
                            .save_file()
                        else {
                            *status.write() = "Template save cancelled".to_string();
                            return;
                        };

                        *status.write() = match write_plan_template(&target) {
                            Ok(()) => format!("Plan template saved to {}", target.display()),
                            Err(err) => format!("Template save failed: {err}"),
                        };
                    },
                    "Download Plan Template"
                }

                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let Some(file_path) = FileDialog::new()
                            .add_filter("Excel", &["xlsx"])
                            .pick_file()
                        else {
                            *status.write() = "Master file selection cancelled".to_string();
                            return;
                        };
                        *master_path.write() = Some(file_path);
                        *outcome.write() = None;
                        *status.write() = "Master file selected".to_string();
                    },
                    "Select Master Report"
                }
                span { "{master_label}" }

                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let Some(file_path) = FileDialog::new()
                            .add_filter("Excel", &["xlsx"])
                            .pick_file()
                        else {
                            *status.write() = "Plan file selection cancelled".to_string();
                            return;
                        };
                        *plan_path.write() = Some(file_path);
                        *outcome.write() = None;
                        *status.write() = "Plan file selected".to_string();
                    },
                    "Select Plan File"
                }
                span { "{plan_label}" }
            }

            div {
                style: "padding: 8px 0;",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let (Some(master), Some(plan)) = (master_path(), plan_path()) else {
                            *status.write() =
                                "Select both the master file and the plan file first".to_string();
                            return;
                        };

                        let config = MergeConfig {
                            sku_header: sku_header(),
                            variation_attribute: variation_attribute(),
                            theme_name: theme_name(),
                        };

                        *busy.write() = true;
                        *status.write() = "Processing...".to_string();

                        match run_blocking(|| run_merge(&master, &plan, &config)) {
                            Ok(result) => {
                                *status.write() = if result.parent_created {
                                    format!(
                                        "Success. Processed {} children and created 1 parent row",
                                        result.children_matched
                                    )
                                } else {
                                    format!(
                                        "Success. Processed {} children (no parent row: the first child SKU had no match)",
                                        result.children_matched
                                    )
                                };
                                *outcome.write() = Some(result);
                            }
                            Err(err) => {
                                *outcome.write() = None;
                                *status.write() = format!("Merge failed: {err}");
                            }
                        }

                        *busy.write() = false;
                    },
                    "Run Merge"
                }
            }

            if let Some(result) = current_outcome {
                div {
                    style: "display: flex; gap: 12px; align-items: center; padding: 8px 0;",
                    span { "Download results ({result_row_count} rows):" }
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            let Some(data) = xlsx_save_data.as_ref() else {
                                return;
                            };
                            *status.write() = save_result(&XlsxExporter, data);
                        },
                        "Save Excel (.xlsx)"
                    }
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            let Some(data) = txt_save_data.as_ref() else {
                                return;
                            };
                            *status.write() = save_result(&TsvExporter, data);
                        },
                        "Save Text (.txt) - recommended"
                    }
                }

                table {
                    style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb;",
                    thead {
                        tr {
                            for header in result.data.columns.iter() {
                                th {
                                    style: "border: 1px solid #bbb; padding: 6px; background: #f2f2f2;",
                                    "{header}"
                                }
                            }
                        }
                    }
                    tbody {
                        for cells in result.data.rows.iter().take(PREVIEW_ROW_LIMIT) {
                            tr {
                                for cell in cells.iter() {
                                    td {
                                        style: "border: 1px solid #bbb; padding: 6px;",
                                        "{cell}"
                                    }
                                }
                            }
                        }
                    }
                }
                if result_row_count > PREVIEW_ROW_LIMIT {
                    p { "Preview limited to the first {PREVIEW_ROW_LIMIT} rows" }
                }
            }

            div {
                style: "padding: 8px 0; color: #555;",
                "{status}"
            }
        }
    }
}
