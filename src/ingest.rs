//! Boundary conversions from upstream collaborators.
//!
//! File parsing and natural-language rule translation happen outside this
//! crate; both hand over `serde_json` values. This module converts those
//! payloads into domain types and owns the error taxonomy for payloads the
//! engine cannot accept ("could not parse rule", "expected a table").
//! The engine itself never fails — see [`crate::validation`].

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{CellValue, Row, Rule};

/// A payload from an upstream collaborator could not be converted.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The row payload was not a JSON array of objects.
    #[error("expected a JSON array of row objects, found {found}")]
    NotARowTable { found: &'static str },

    /// A row entry was not a JSON object.
    #[error("row {index} is not an object, found {found}")]
    NotARowObject { index: usize, found: &'static str },

    /// The rule payload was not a JSON array.
    #[error("expected a JSON array of rules, found {found}")]
    NotARuleList { found: &'static str },

    /// A rule object could not be translated into a known rule kind.
    #[error("could not parse rule at index {index}: {source}")]
    UnknownRule {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Converts parsed file records into entity rows.
///
/// Numbers stay numeric, null cells are dropped (so the schema pass sees
/// them as absent columns), and every other value is carried as text —
/// including nested objects and arrays, whose JSON form is exactly what the
/// list and JSON field checks expect to decode.
pub fn rows_from_records(records: &[Map<String, Value>]) -> Vec<Row> {
    records.iter().map(row_from_record).collect()
}

/// Converts a whole row payload (a JSON array of objects) into rows.
pub fn rows_from_value(value: &Value) -> Result<Vec<Row>, IngestError> {
    let items = value.as_array().ok_or(IngestError::NotARowTable {
        found: json_kind(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object()
                .map(row_from_record)
                .ok_or(IngestError::NotARowObject {
                    index,
                    found: json_kind(item),
                })
        })
        .collect()
}

/// Converts a rule payload (for example the rule translator's reply) into
/// typed rules.
pub fn rules_from_value(value: &Value) -> Result<Vec<Rule>, IngestError> {
    let items = value.as_array().ok_or(IngestError::NotARuleList {
        found: json_kind(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item.clone())
                .map_err(|source| IngestError::UnknownRule { index, source })
        })
        .collect()
}

fn row_from_record(record: &Map<String, Value>) -> Row {
    let mut row = Row::new();
    for (column, value) in record {
        let cell = match value {
            Value::Null => continue,
            Value::Number(n) => CellValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        };
        row.set(column.clone(), cell);
    }
    row
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_keep_numbers_and_stringify_the_rest() {
        let rows = rows_from_value(&json!([
            {
                "ClientID": "C1",
                "PriorityLevel": 3,
                "RequestedTaskIDs": ["T1", "T2"],
                "AttributesJSON": {"tier": "gold"},
                "GroupTag": null,
            }
        ]))
        .unwrap();

        let row = &rows[0];
        assert_eq!(row.number("PriorityLevel"), Some(3.0));
        assert_eq!(row.text("RequestedTaskIDs"), Some(r#"["T1","T2"]"#.to_string()));
        assert_eq!(row.text("AttributesJSON"), Some(r#"{"tier":"gold"}"#.to_string()));
        assert!(!row.has_column("GroupTag"));
    }

    #[test]
    fn test_non_array_row_payload_rejected() {
        let err = rows_from_value(&json!({"ClientID": "C1"})).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_non_object_row_rejected_with_index() {
        let err = rows_from_value(&json!([{"ClientID": "C1"}, 42])).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_rules_from_translator_reply() {
        let rules = rules_from_value(&json!([
            {"type": "coRun", "tasks": ["T1", "T2"]},
            {"type": "loadLimit", "group": "sales", "maxSlotsPerPhase": 2},
        ]))
        .unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], Rule::co_run(["T1", "T2"]));
        assert_eq!(rules[1].kind(), "loadLimit");
    }

    #[test]
    fn test_untranslatable_rule_rejected_with_index() {
        let err = rules_from_value(&json!([
            {"type": "coRun", "tasks": []},
            {"type": "banEverything"},
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("rule at index 1"));
    }
}
