use std::path::Path;

use anyhow::{anyhow, bail, Result};

use crate::domain::entities::config::MergeConfig;
use crate::domain::entities::plan::VariationPlan;
use crate::domain::entities::sheet::{MasterSheet, TabularData};
use crate::infra::import::xlsx::read_first_sheet_rows;

const HEADER_SCAN_LIMIT: usize = 10;
const PLAN_SKU_HEADER: &str = "SKU";

const COL_PARENT_SKU: &str = "Parent SKU";
const COL_PARENTAGE_LEVEL: &str = "Parentage Level";
const COL_VARIATION_THEME: &str = "Variation Theme Name";
const COL_LISTING_ACTION: &str = "Listing Action";
const COL_ITEM_NAME: &str = "Item Name";

const LEVEL_CHILD: &str = "Child";
const LEVEL_PARENT: &str = "Parent";
const ACTION_EDIT: &str = "Edit (Partial Update)";
const ACTION_CREATE: &str = "Create or Replace (Full Update)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub data: TabularData,
    pub children_matched: usize,
    pub parent_created: bool,
}

pub fn find_header_row(preview: &[Vec<String>], sku_header: &str) -> Option<usize> {
    preview
        .iter()
        .take(HEADER_SCAN_LIMIT)
        .position(|row| row.iter().any(|cell| cell == sku_header))
}

pub fn load_master(raw_rows: Vec<Vec<String>>, config: &MergeConfig) -> Result<MasterSheet> {
    let header_idx = find_header_row(&raw_rows, &config.sku_header).ok_or_else(|| {
        anyhow!(
            "could not find column '{}' in the first {} rows of the master file",
            config.sku_header,
            HEADER_SCAN_LIMIT
        )
    })?;

    let columns = raw_rows[header_idx].clone();
    let data_rows = raw_rows[header_idx + 1..].to_vec();
    let sku_col = columns
        .iter()
        .position(|column| column == &config.sku_header)
        .ok_or_else(|| anyhow!("master header row lost column '{}'", config.sku_header))?;

    Ok(MasterSheet::new(columns, data_rows, sku_col))
}

pub fn load_plan(raw_rows: Vec<Vec<String>>, config: &MergeConfig) -> Result<VariationPlan> {
    let Some(columns) = raw_rows.first().cloned() else {
        bail!("plan file must have a '{PLAN_SKU_HEADER}' column (case-sensitive)");
    };
    let Some(sku_col) = columns.iter().position(|column| column == PLAN_SKU_HEADER) else {
        bail!("plan file must have a '{PLAN_SKU_HEADER}' column (case-sensitive)");
    };

    let data_rows = &raw_rows[1..];
    if data_rows.len() < 2 {
        bail!("plan file must contain a parent row plus at least one child row");
    }

    let attribute_col = columns
        .iter()
        .position(|column| column == &config.variation_attribute);

    Ok(VariationPlan::new(
        data_rows[0].clone(),
        data_rows[1..].to_vec(),
        sku_col,
        attribute_col,
    ))
}

pub fn apply_children(
    master: &mut MasterSheet,
    plan: &VariationPlan,
    config: &MergeConfig,
) -> usize {
    let parent_sku = plan.parent_sku();
    let mut children_matched = 0;

    for child in &plan.children {
        let child_sku = plan.child_sku(child);
        let matches = master.rows_matching_sku(&child_sku);
        if matches.is_empty() {
            continue;
        }

        let attribute_value = plan.attribute_for(child).into_value();
        let col_parent = master.ensure_column(COL_PARENT_SKU);
        let col_level = master.ensure_column(COL_PARENTAGE_LEVEL);
        let col_theme = master.ensure_column(COL_VARIATION_THEME);
        let col_action = master.ensure_column(COL_LISTING_ACTION);
        // The variation attribute is only written when the master already
        // carries that column; it is never added to the schema.
        let col_attribute = master.column_index(&config.variation_attribute);

        for row_idx in matches {
            master.set(row_idx, col_parent, parent_sku.clone());
            master.set(row_idx, col_level, LEVEL_CHILD);
            master.set(row_idx, col_theme, config.theme_name.clone());
            if let Some(col) = col_attribute {
                master.set(row_idx, col, attribute_value.clone());
            }
            master.set(row_idx, col_action, ACTION_EDIT);
            master.mark_touched(row_idx);
        }

        children_matched += 1;
    }

    children_matched
}

// The parent listing is cloned from the first master row matching the first
// child spec. No match means no parent, and the run still succeeds.
pub fn synthesize_parent(
    master: &mut MasterSheet,
    plan: &VariationPlan,
    config: &MergeConfig,
) -> bool {
    let Some(first_child) = plan.children.first() else {
        return false;
    };
    let first_child_sku = plan.child_sku(first_child);
    let Some(template_idx) = master.rows_matching_sku(&first_child_sku).first().copied() else {
        return false;
    };

    let parent_sku = plan.parent_sku();
    let col_parent = master.ensure_column(COL_PARENT_SKU);
    let col_level = master.ensure_column(COL_PARENTAGE_LEVEL);
    let col_theme = master.ensure_column(COL_VARIATION_THEME);
    let col_action = master.ensure_column(COL_LISTING_ACTION);
    let col_item_name = master.ensure_column(COL_ITEM_NAME);
    let col_attribute = master.column_index(&config.variation_attribute);

    let Some(template) = master.row(template_idx) else {
        return false;
    };
    let mut row = template.to_vec();
    row.resize(master.columns().len(), String::new());

    row[master.sku_col()] = parent_sku.clone();
    row[col_level] = LEVEL_PARENT.to_string();
    row[col_parent] = String::new();
    row[col_theme] = config.theme_name.clone();
    row[col_action] = ACTION_CREATE.to_string();
    row[col_item_name] = format!("PARENT - {parent_sku} - RENAME ME");
    if let Some(col) = col_attribute {
        row[col] = String::new();
    }

    master.push_touched_row(row);
    true
}

pub fn merge_plan_into_master(
    mut master: MasterSheet,
    plan: &VariationPlan,
    config: &MergeConfig,
) -> MergeOutcome {
    let children_matched = apply_children(&mut master, plan, config);
    let parent_created = synthesize_parent(&mut master, plan, config);

    MergeOutcome {
        data: master.into_touched(),
        children_matched,
        parent_created,
    }
}

pub fn run_merge(
    master_path: &Path,
    plan_path: &Path,
    config: &MergeConfig,
) -> Result<MergeOutcome> {
    let master = load_master(read_first_sheet_rows(master_path)?, config)?;
    let plan = load_plan(read_first_sheet_rows(plan_path)?, config)?;
    Ok(merge_plan_into_master(master, &plan, config))
}
