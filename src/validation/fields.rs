//! Cell-format checks: list encodings, numeric ranges, JSON attributes.
//!
//! All three checks skip blank cells — presence is the schema pass's
//! concern, and range/format semantics only apply to values that exist.

use crate::models::{parse_list, split_numeric, EntityKind, Row};

use super::ValidationOutcome;

/// Checks a list-valued column.
///
/// Undecodable cells are flagged as invalid list format and skipped. When
/// `numeric` is set, every token must be all-digits; offenders are reported
/// together in one message naming each bad token.
pub(super) fn check_list_format(
    entity: EntityKind,
    rows: &[Row],
    column: &str,
    numeric: bool,
    outcome: &mut ValidationOutcome,
) {
    let id_column = entity.id_column();
    for (index, row) in rows.iter().enumerate() {
        if row.is_blank(column) {
            continue;
        }
        let raw = row.text(column).unwrap_or_default();
        let row_id = row.identity(id_column, index);

        let tokens = match parse_list(&raw) {
            Ok(tokens) => tokens,
            Err(_) => {
                outcome.flag(entity, &row_id, column, "Invalid list format");
                outcome.note(format!("{entity} {row_id}: {column} has an invalid list format"));
                continue;
            }
        };

        if numeric {
            let (_, offenders) = split_numeric(&tokens);
            if !offenders.is_empty() {
                let listed = offenders.join(", ");
                outcome.flag(entity, &row_id, column, format!("Non-numeric entries: {listed}"));
                outcome.note(format!(
                    "{entity} {row_id}: {column} contains non-numeric entries: {listed}"
                ));
            }
        }
    }
}

/// Checks that a numeric column falls within the closed interval `[min, max]`.
pub(super) fn check_numeric_range(
    entity: EntityKind,
    rows: &[Row],
    column: &str,
    min: f64,
    max: f64,
    outcome: &mut ValidationOutcome,
) {
    let id_column = entity.id_column();
    for (index, row) in rows.iter().enumerate() {
        if row.is_blank(column) {
            continue;
        }
        match row.number(column) {
            Some(n) if n >= min && n <= max => {}
            _ => {
                let row_id = row.identity(id_column, index);
                outcome.flag(
                    entity,
                    &row_id,
                    column,
                    format!("{column} must be a number between {min} and {max}"),
                );
                outcome.note(format!(
                    "{entity} {row_id}: {column} is out of range [{min}, {max}]"
                ));
            }
        }
    }
}

/// Checks that a free-form JSON column parses.
pub(super) fn check_json_format(
    entity: EntityKind,
    rows: &[Row],
    column: &str,
    outcome: &mut ValidationOutcome,
) {
    let id_column = entity.id_column();
    for (index, row) in rows.iter().enumerate() {
        if row.is_blank(column) {
            continue;
        }
        let raw = row.text(column).unwrap_or_default();
        if serde_json::from_str::<serde_json::Value>(&raw).is_err() {
            let row_id = row.identity(id_column, index);
            outcome.flag(entity, &row_id, column, "Invalid JSON format");
            outcome.note(format!("{entity} {row_id}: {column} is not valid JSON"));
        }
    }
}
