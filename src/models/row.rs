//! Tabular row model.
//!
//! Uploaded entity data arrives as loosely-typed tables: each row maps a
//! column name to a raw cell value, either a string or a number, exactly as
//! the file-parsing boundary delivered it. Normalization of list-valued and
//! JSON-valued cells is deliberately left to the validation passes, which
//! know which columns carry which encoding.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw cell value.
///
/// Spreadsheet parsers deliver numbers natively; everything else arrives as
/// text, including list and JSON encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell.
    Number(f64),
    /// Textual cell.
    Text(String),
}

impl CellValue {
    /// String form of the cell, as a user would see it in the grid.
    pub fn display(&self) -> String {
        match self {
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Numeric coercion: numbers pass through, text is parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Whether the cell holds only whitespace.
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.trim().is_empty())
    }
}

/// Renders whole numbers without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

/// One row of an entity table.
///
/// Columns are kept in a sorted map so serialization and iteration are
/// deterministic regardless of upload order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(flatten)]
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a cell.
    pub fn with_field(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    /// Adds or replaces a cell in place.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// The raw cell under `column`, if present.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Whether the row carries `column` at all (possibly blank).
    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Column names present on this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Display form of a cell; `None` when the column is absent.
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).map(CellValue::display)
    }

    /// Numeric coercion of a cell; `None` when absent or non-numeric.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(CellValue::as_number)
    }

    /// Whether the cell is absent or holds only whitespace.
    pub fn is_blank(&self, column: &str) -> bool {
        self.get(column).is_none_or(CellValue::is_blank)
    }

    /// The identity used to key reported errors for this row: the value of
    /// the entity's ID column, falling back to the positional index when the
    /// column is absent or blank.
    pub fn identity(&self, id_column: &str, index: usize) -> String {
        match self.get(id_column) {
            Some(value) if !value.is_blank() => value.display(),
            _ => index.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_builder() {
        let row = Row::new()
            .with_field("ClientID", "C1")
            .with_field("PriorityLevel", 3);

        assert_eq!(row.text("ClientID"), Some("C1".to_string()));
        assert_eq!(row.number("PriorityLevel"), Some(3.0));
        assert!(row.has_column("ClientID"));
        assert!(!row.has_column("GroupTag"));
    }

    #[test]
    fn test_numeric_coercion_from_text() {
        let row = Row::new().with_field("Duration", " 12 ");
        assert_eq!(row.number("Duration"), Some(12.0));

        let row = Row::new().with_field("Duration", "twelve");
        assert_eq!(row.number("Duration"), None);
    }

    #[test]
    fn test_blank_cells() {
        let row = Row::new().with_field("GroupTag", "  ");
        assert!(row.is_blank("GroupTag"));
        assert!(row.is_blank("Missing"));
        assert!(!Row::new().with_field("GroupTag", "alpha").is_blank("GroupTag"));
        assert!(!Row::new().with_field("GroupTag", 0).is_blank("GroupTag"));
    }

    #[test]
    fn test_identity_fallback() {
        let row = Row::new().with_field("ClientID", "C7");
        assert_eq!(row.identity("ClientID", 4), "C7");

        let row = Row::new().with_field("ClientID", "");
        assert_eq!(row.identity("ClientID", 4), "4");

        assert_eq!(Row::new().identity("ClientID", 0), "0");
    }

    #[test]
    fn test_number_display_drops_fraction() {
        let row = Row::new().with_field("TaskID", 7);
        assert_eq!(row.text("TaskID"), Some("7".to_string()));

        let row = Row::new().with_field("Weight", 2.5);
        assert_eq!(row.text("Weight"), Some("2.5".to_string()));
    }

    #[test]
    fn test_serde_round_trip() {
        let row = Row::new()
            .with_field("WorkerID", "W1")
            .with_field("QualificationLevel", 2);

        let json = serde_json::to_string(&row).unwrap();
        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }
}
