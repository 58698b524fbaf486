//! Dynamic tabular data.
//!
//! A `Table` holds whatever columns the source file declared; nothing is
//! typed or validated. Combining tables with different column sets keeps
//! the union of the columns, and cells a source table never had stay
//! absent (`None`, no fill value).

use serde::{Deserialize, Serialize};

/// An ordered set of named columns plus rows of textual cells.
///
/// Invariant: every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create an empty table with the given column list.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. The cell count must match the column count.
    pub fn push_row(&mut self, cells: Vec<Option<String>>) {
        assert_eq!(
            cells.len(),
            self.columns.len(),
            "row width does not match column count"
        );
        self.rows.push(cells);
    }

    /// Set every row's cell in `name` to `value`, appending the column if
    /// the table does not have it yet.
    pub fn push_const_column(&mut self, name: &str, value: &str) {
        match self.columns.iter().position(|c| c == name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = Some(value.to_string());
                }
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(Some(value.to_string()));
                }
            }
        }
    }

    /// Row-wise concatenation, preserving input order.
    ///
    /// The combined column list is the union of the inputs' columns in
    /// first-seen order. Where a source table lacks one of the union's
    /// columns, its rows get absent cells there.
    pub fn concat(tables: Vec<Table>) -> Table {
        let mut columns: Vec<String> = Vec::new();
        for table in &tables {
            for col in &table.columns {
                if !columns.iter().any(|have| have == col) {
                    columns.push(col.clone());
                }
            }
        }

        let mut out = Table::new(columns);
        for table in tables {
            // Source column position → combined column position.
            let targets: Vec<usize> = table
                .columns
                .iter()
                .map(|col| out.columns.iter().position(|have| have == col).unwrap())
                .collect();

            for row in table.rows {
                let mut cells = vec![None; out.columns.len()];
                for (i, cell) in row.into_iter().enumerate() {
                    cells[targets[i]] = cell;
                }
                out.rows.push(cells);
            }
        }
        out
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (row, column name). `None` for an absent cell, an unknown
    /// column, or a row out of range.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// All cells of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| row[idx].as_deref()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|v| Some(v.to_string())).collect());
        }
        t
    }

    #[test]
    fn const_column_is_appended_to_every_row() {
        let mut t = table(&["Date", "Close"], &[&["2024-01-02", "101.0"], &["2024-01-03", "102.5"]]);
        t.push_const_column("Company", "AAPL");

        assert_eq!(t.columns(), ["Date", "Close", "Company"]);
        assert_eq!(t.get(0, "Company"), Some("AAPL"));
        assert_eq!(t.get(1, "Company"), Some("AAPL"));
        // Existing cells untouched
        assert_eq!(t.get(1, "Close"), Some("102.5"));
    }

    #[test]
    fn const_column_overwrites_an_existing_column() {
        let mut t = table(&["Date", "Company"], &[&["2024-01-02", "stale"]]);
        t.push_const_column("Company", "MSFT");

        assert_eq!(t.n_cols(), 2);
        assert_eq!(t.get(0, "Company"), Some("MSFT"));
    }

    #[test]
    fn concat_stacks_rows_in_input_order() {
        let a = table(&["Date", "Close"], &[&["2024-01-02", "1"], &["2024-01-03", "2"]]);
        let b = table(&["Date", "Close"], &[&["2024-01-02", "3"]]);

        let combined = Table::concat(vec![a, b]);

        assert_eq!(combined.n_rows(), 3);
        assert_eq!(combined.columns(), ["Date", "Close"]);
        assert_eq!(
            combined.column("Close").unwrap(),
            vec![Some("1"), Some("2"), Some("3")]
        );
    }

    #[test]
    fn concat_unions_columns_and_leaves_absent_cells() {
        let a = table(&["Date", "Close"], &[&["2024-01-02", "1"]]);
        let b = table(&["Date", "AdjClose"], &[&["2024-01-02", "9"]]);

        let combined = Table::concat(vec![a, b]);

        assert_eq!(combined.columns(), ["Date", "Close", "AdjClose"]);
        assert_eq!(combined.get(0, "Close"), Some("1"));
        assert_eq!(combined.get(0, "AdjClose"), None);
        assert_eq!(combined.get(1, "Close"), None);
        assert_eq!(combined.get(1, "AdjClose"), Some("9"));
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        let combined = Table::concat(Vec::new());
        assert!(combined.is_empty());
        assert_eq!(combined.n_cols(), 0);
    }

    #[test]
    fn get_is_none_outside_the_table() {
        let t = table(&["Date"], &[&["2024-01-02"]]);
        assert_eq!(t.get(0, "Close"), None);
        assert_eq!(t.get(5, "Date"), None);
        assert!(t.column("Close").is_none());
    }
}
