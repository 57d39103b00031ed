use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, Workbook};

const TEMPLATE_COLUMNS: [&str; 5] = ["SKU", "Size", "Color", "Price", "Quantity"];

// Row 1 is the new parent, rows 2+ are existing child SKUs.
const TEMPLATE_ROWS: [[&str; 5]; 3] = [
    ["NEW-PARENT-SKU", "", "", "", ""],
    ["EXISTING-CHILD-SKU-1", "Small", "Red", "19.99", "10"],
    ["EXISTING-CHILD-SKU-2", "Medium", "Blue", "19.99", "15"],
];

pub fn write_plan_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, name) in TEMPLATE_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, *name)?;
    }

    let parent_highlight = Format::new().set_background_color(Color::Yellow);
    for (row_offset, row) in TEMPLATE_ROWS.iter().enumerate() {
        let row_idx = row_offset as u32 + 1;
        for (col_idx, value) in row.iter().enumerate() {
            if row_offset == 0 && col_idx == 0 {
                worksheet.write_string_with_format(row_idx, 0, *value, &parent_highlight)?;
            } else {
                worksheet.write_string(row_idx, col_idx as u16, *value)?;
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save plan template: {}", path.display()))?;

    Ok(())
}
