//! Required-column check.

use crate::models::{EntityKind, Row};

use super::ValidationOutcome;

/// Verifies that every required column for `entity` is present.
///
/// Schema is inferred from the first row's key set only; later rows are
/// assumed to share it. Heterogeneous uploads whose rows legitimately carry
/// differing optional columns will be mis-flagged — a documented limitation
/// of the column-presence model, kept as-is. Empty collections are a no-op:
/// there is nothing to infer a schema from.
pub(super) fn check_required_columns(
    entity: EntityKind,
    rows: &[Row],
    outcome: &mut ValidationOutcome,
) {
    let Some(first) = rows.first() else { return };

    let missing: Vec<&str> = entity
        .required_columns()
        .iter()
        .copied()
        .filter(|column| !first.has_column(column))
        .collect();
    if missing.is_empty() {
        return;
    }

    outcome.note(format!(
        "{entity} is missing required column(s): {}",
        missing.join(", ")
    ));

    let id_column = entity.id_column();
    for (index, row) in rows.iter().enumerate() {
        let row_id = row.identity(id_column, index);
        for column in &missing {
            outcome.flag(entity, &row_id, column, "Missing required column");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_a_no_op() {
        let mut outcome = ValidationOutcome::default();
        check_required_columns(EntityKind::Clients, &[], &mut outcome);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_complete_first_row_passes() {
        let row = EntityKind::Tasks
            .required_columns()
            .iter()
            .fold(Row::new(), |row, column| row.with_field(*column, "x"));

        let mut outcome = ValidationOutcome::default();
        check_required_columns(EntityKind::Tasks, &[row], &mut outcome);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_missing_columns_reported_once_but_flagged_per_row() {
        let rows = vec![
            Row::new().with_field("WorkerID", "W1"),
            Row::new().with_field("WorkerID", "W2"),
        ];

        let mut outcome = ValidationOutcome::default();
        check_required_columns(EntityKind::Workers, &rows, &mut outcome);

        assert_eq!(outcome.summary.len(), 1);
        assert!(outcome.summary[0].contains("workers"));
        assert!(outcome.summary[0].contains("Skills"));
        for row_id in ["W1", "W2"] {
            assert_eq!(
                outcome.cell_error(EntityKind::Workers, row_id, "AvailableSlots"),
                Some("Missing required column")
            );
        }
    }

    #[test]
    fn test_rows_without_id_fall_back_to_index() {
        let rows = vec![Row::new().with_field("TaskName", "only a name")];

        let mut outcome = ValidationOutcome::default();
        check_required_columns(EntityKind::Tasks, &rows, &mut outcome);

        assert_eq!(
            outcome.cell_error(EntityKind::Tasks, "0", "TaskID"),
            Some("Missing required column")
        );
    }
}
