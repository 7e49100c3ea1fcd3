//! Cross-entity reference checks.
//!
//! Two passes with entity-specific logic: requested task IDs must exist in
//! the task collection, and every skill a task requires must be possessed
//! by at least one worker. Cells the format pass already rejected are
//! skipped silently here.

use std::collections::HashSet;

use crate::models::{parse_list, EntityKind, Row};

use super::ValidationOutcome;

/// Flags requested task IDs that do not exist in the task collection.
///
/// One message per unmatched ID; a client's cell accumulates a clause for
/// each of its unknown references.
pub(super) fn check_requested_tasks(
    clients: &[Row],
    tasks: &[Row],
    outcome: &mut ValidationOutcome,
) {
    let known: HashSet<String> = tasks.iter().filter_map(|task| task.text("TaskID")).collect();

    for (index, client) in clients.iter().enumerate() {
        if client.is_blank("RequestedTaskIDs") {
            continue;
        }
        let raw = client.text("RequestedTaskIDs").unwrap_or_default();
        let Ok(requested) = parse_list(&raw) else { continue };

        let row_id = client.identity("ClientID", index);
        for task_id in requested {
            if task_id.is_empty() || known.contains(&task_id) {
                continue;
            }
            outcome.flag_append(
                EntityKind::Clients,
                &row_id,
                "RequestedTaskIDs",
                &format!("Unknown TaskID '{task_id}'"),
            );
            outcome.note(format!(
                "clients {row_id}: requested TaskID '{task_id}' does not exist"
            ));
        }
    }
}

/// Flags required skills that no worker possesses.
///
/// The skill pool is the union of every worker's parsed skill list. A
/// task's cell grows one clause per uncovered skill, displayed as a single
/// accumulated string.
pub(super) fn check_skill_coverage(
    tasks: &[Row],
    workers: &[Row],
    outcome: &mut ValidationOutcome,
) {
    let mut pool: HashSet<String> = HashSet::new();
    for worker in workers {
        if worker.is_blank("Skills") {
            continue;
        }
        let raw = worker.text("Skills").unwrap_or_default();
        if let Ok(skills) = parse_list(&raw) {
            pool.extend(skills);
        }
    }

    for (index, task) in tasks.iter().enumerate() {
        if task.is_blank("RequiredSkills") {
            continue;
        }
        let raw = task.text("RequiredSkills").unwrap_or_default();
        let Ok(required) = parse_list(&raw) else { continue };

        let row_id = task.identity("TaskID", index);
        for skill in required {
            if skill.is_empty() || pool.contains(&skill) {
                continue;
            }
            outcome.flag_append(
                EntityKind::Tasks,
                &row_id,
                "RequiredSkills",
                &format!("No worker has skill '{skill}'"),
            );
            outcome.note(format!(
                "tasks {row_id}: required skill '{skill}' is not covered by any worker"
            ));
        }
    }
}
