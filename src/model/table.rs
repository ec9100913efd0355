//! Tabular input types.

use serde::{Deserialize, Serialize};

/// A rectangular table of text cells with named columns.
///
/// Every row holds exactly one value per column; [`Table::push_row`] pads
/// short rows with empty strings and truncates long ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in header order
    columns: Vec<String>,

    /// Row values in source order
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, fitting it to the column count.
    pub fn push_row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = values.into_iter().map(Into::into).collect();
        if row.len() > self.columns.len() {
            log::warn!(
                "row {} has {} values for {} columns; extra values dropped",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            );
        }
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Builder-style variant of [`Table::push_row`].
    pub fn with_row<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(values);
        self
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Check whether a column with exactly this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows (the header is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell by row and column index.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Iterate over the rows as [`Record`] views.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        (0..self.rows.len()).map(move |index| Record { table: self, index })
    }

    /// Get a single row view (0-indexed).
    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        (index < self.rows.len()).then_some(Record { table: self, index })
    }

    /// Build a new table with every cell passed through `f`.
    ///
    /// Column names are kept as they are.
    pub fn map_cells<F>(&self, mut f: F) -> Table
    where
        F: FnMut(&str) -> String,
    {
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|cell| f(cell)).collect())
                .collect(),
        }
    }
}

/// A borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Record<'a> {
    /// Position of this row in the table (0-indexed).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of the named column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let column = self.table.column_index(column)?;
        self.get_at(column)
    }

    /// Value at a column index.
    pub fn get_at(&self, column: usize) -> Option<&'a str> {
        self.table.cell(self.index, column)
    }

    /// All values in column order.
    pub fn values(&self) -> &'a [String] {
        &self.table.rows[self.index]
    }
}
