//! In-memory tabular dataset
//!
//! A minimal column-oriented table: named, equal-length columns of typed
//! cells, row-index aligned. This is the dataset surface consumed by the
//! column anonymizer; reading and writing happens by column name only.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    /// Missing value
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Borrow the text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this cell carries a value
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// A named column of cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Cell values, row-index aligned
    pub cells: Vec<Cell>,
}

/// A column-oriented in-memory table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (length of every column)
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.cells.len()).unwrap_or(0)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Append a new column
    ///
    /// The column must match the table's row count (unless the table is
    /// empty) and its name must be unused.
    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<Cell>) -> Result<()> {
        let name = name.into();

        if self.column(&name).is_some() {
            return Err(Error::Validation(format!(
                "Column already exists: {name}"
            )));
        }

        if !self.columns.is_empty() && cells.len() != self.row_count() {
            return Err(Error::Validation(format!(
                "Column '{}' has {} rows, table has {}",
                name,
                cells.len(),
                self.row_count()
            )));
        }

        self.columns.push(Column { name, cells });
        Ok(())
    }

    /// Replace an existing column or append a new one
    ///
    /// Callers must pass row-count-aligned cells.
    pub(crate) fn set_column(&mut self, name: &str, cells: Vec<Cell>) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.name == name) {
            column.cells = cells;
        } else {
            self.columns.push(Column {
                name: name.to_string(),
                cells,
            });
        }
    }
}
