use std::path::Path;

use crate::domain::entities::sheet::TabularData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    Message(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ExportError {}

// Both output encodings carry the identical final row set; only the
// container format differs.
pub trait ResultExporter {
    fn label(&self) -> &'static str;
    fn extension(&self) -> &'static str;
    fn export(&self, data: &TabularData, path: &Path) -> Result<(), ExportError>;
}
