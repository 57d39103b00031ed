use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::sheet::TabularData;
use crate::usecase::ports::export::{ExportError, ResultExporter};

// Tab-delimited text sidesteps spreadsheet formatting on marketplace upload.
pub fn write_tsv(data: &TabularData, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("failed to create txt: {}", path.display()))?;

    writer
        .write_record(&data.columns)
        .context("failed to write txt header")?;
    for row in &data.rows {
        writer.write_record(row).context("failed to write txt row")?;
    }
    writer.flush().context("failed to flush txt output")?;

    Ok(())
}

pub struct TsvExporter;

impl ResultExporter for TsvExporter {
    fn label(&self) -> &'static str {
        "Text (.txt)"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn export(&self, data: &TabularData, path: &Path) -> Result<(), ExportError> {
        write_tsv(data, path).map_err(|err| ExportError::Message(err.to_string()))
    }
}
