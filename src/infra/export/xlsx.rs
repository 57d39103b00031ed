use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::domain::entities::sheet::TabularData;
use crate::usecase::ports::export::{ExportError, ResultExporter};

pub fn write_xlsx(data: &TabularData, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, name) in data.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, name)?;
    }
    for (row_idx, row) in data.rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col_idx as u16, value)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save xlsx: {}", path.display()))?;

    Ok(())
}

pub struct XlsxExporter;

impl ResultExporter for XlsxExporter {
    fn label(&self) -> &'static str {
        "Excel (.xlsx)"
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn export(&self, data: &TabularData, path: &Path) -> Result<(), ExportError> {
        write_xlsx(data, path).map_err(|err| ExportError::Message(err.to_string()))
    }
}
