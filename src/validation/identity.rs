//! Duplicate primary-key check.

use std::collections::HashMap;

use crate::models::{EntityKind, Row};

use super::ValidationOutcome;

/// Detects primary-key values shared by more than one row.
///
/// Rows with an absent or blank ID are excluded from grouping (their
/// emptiness is the schema pass's concern). Each duplicate value yields one
/// grouped summary line listing the 1-based row numbers involved, and every
/// participating row is flagged on the ID column.
pub(super) fn check_duplicate_ids(
    entity: EntityKind,
    rows: &[Row],
    outcome: &mut ValidationOutcome,
) {
    let id_column = entity.id_column();

    // Group row indices by ID value, remembering first-occurrence order so
    // the summary reads in upload order.
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let Some(value) = row.get(id_column) else { continue };
        if value.is_blank() {
            continue;
        }
        let key = value.display();
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(index);
    }

    for key in &order {
        let indices = &groups[key];
        if indices.len() < 2 {
            continue;
        }

        let row_numbers = indices
            .iter()
            .map(|index| (index + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        outcome.note(format!(
            "Duplicate {id_column} '{key}' in {entity} rows {row_numbers}"
        ));

        for &index in indices {
            let row_id = rows[index].identity(id_column, index);
            outcome.flag(
                entity,
                &row_id,
                id_column,
                format!("Duplicate {id_column} '{key}'"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str) -> Row {
        Row::new().with_field("ClientID", id)
    }

    #[test]
    fn test_unique_ids_pass() {
        let rows = vec![client("C1"), client("C2"), client("C3")];
        let mut outcome = ValidationOutcome::default();
        check_duplicate_ids(EntityKind::Clients, &rows, &mut outcome);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_one_grouped_message_per_duplicate_value() {
        let rows = vec![client("C1"), client("C2"), client("C1"), client("C1")];
        let mut outcome = ValidationOutcome::default();
        check_duplicate_ids(EntityKind::Clients, &rows, &mut outcome);

        assert_eq!(outcome.summary.len(), 1);
        assert!(outcome.summary[0].contains("'C1'"));
        assert!(outcome.summary[0].contains("1, 3, 4"));
        assert!(outcome
            .cell_error(EntityKind::Clients, "C1", "ClientID")
            .is_some());
    }

    #[test]
    fn test_blank_ids_are_not_grouped() {
        let rows = vec![client(""), client(""), client("  ")];
        let mut outcome = ValidationOutcome::default();
        check_duplicate_ids(EntityKind::Clients, &rows, &mut outcome);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_two_duplicate_values_two_messages() {
        let rows = vec![client("A"), client("B"), client("A"), client("B")];
        let mut outcome = ValidationOutcome::default();
        check_duplicate_ids(EntityKind::Clients, &rows, &mut outcome);

        assert_eq!(outcome.summary.len(), 2);
        assert!(outcome.summary[0].contains("'A'"));
        assert!(outcome.summary[1].contains("'B'"));
    }
}
