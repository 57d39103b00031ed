#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// The master catalog during a merge run. Touched flags live beside the rows,
// never inside the column schema, and are consumed by `into_touched`.
#[derive(Debug, Clone)]
pub struct MasterSheet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    touched: Vec<bool>,
    sku_col: usize,
}

impl MasterSheet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>, sku_col: usize) -> Self {
        let width = columns.len();
        let mut rows = rows;
        for row in &mut rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
            if let Some(cell) = row.get_mut(sku_col) {
                *cell = cell.trim().to_string();
            }
        }
        let touched = vec![false; rows.len()];
        Self {
            columns,
            rows,
            touched,
            sku_col,
        }
    }

    pub fn sku_col(&self) -> usize {
        self.sku_col
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }

    pub fn rows_matching_sku(&self, sku: &str) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.get(self.sku_col).map(String::as_str) == Some(sku))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn row(&self, row_idx: usize) -> Option<&[String]> {
        self.rows.get(row_idx).map(Vec::as_slice)
    }

    pub fn set(&mut self, row_idx: usize, col_idx: usize, value: impl Into<String>) {
        if let Some(cell) = self
            .rows
            .get_mut(row_idx)
            .and_then(|row| row.get_mut(col_idx))
        {
            *cell = value.into();
        }
    }

    pub fn mark_touched(&mut self, row_idx: usize) {
        if let Some(flag) = self.touched.get_mut(row_idx) {
            *flag = true;
        }
    }

    pub fn push_touched_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
        self.touched.push(true);
    }

    pub fn into_touched(self) -> TabularData {
        let rows = self
            .rows
            .into_iter()
            .zip(self.touched)
            .filter(|(_, touched)| *touched)
            .map(|(row, _)| row)
            .collect();
        TabularData {
            columns: self.columns,
            rows,
        }
    }
}
