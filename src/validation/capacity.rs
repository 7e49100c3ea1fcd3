//! Capacity feasibility checks.
//!
//! Two independent simulations of resource-vs-demand balance: a worker must
//! have at least as many available slots as the load it declares per phase,
//! and a task cannot run at a higher concurrency than the number of workers
//! qualified for it. A worker qualifies for a task with at least one shared
//! skill — full coverage is not required.

use std::collections::HashSet;

use crate::models::{parse_list, parse_numeric_list, EntityKind, Row};

use super::ValidationOutcome;

/// Flags workers whose declared per-phase load exceeds their own slot count.
///
/// Workers whose `AvailableSlots` cell fails to decode are skipped silently;
/// the format pass has already reported them.
pub(super) fn check_worker_overload(workers: &[Row], outcome: &mut ValidationOutcome) {
    for (index, worker) in workers.iter().enumerate() {
        let raw = worker.text("AvailableSlots").unwrap_or_default();
        let Ok(slots) = parse_numeric_list(&raw) else { continue };

        let max_load = declared_or_one(worker, "MaxLoadPerPhase");
        if (slots.len() as i64) < max_load {
            let row_id = worker.identity("WorkerID", index);
            outcome.flag(
                EntityKind::Workers,
                &row_id,
                "AvailableSlots",
                format!(
                    "Worker is overloaded: {} available slot(s) for MaxLoadPerPhase {max_load}",
                    slots.len()
                ),
            );
            outcome.note(format!(
                "workers {row_id}: only {} available slot(s) but MaxLoadPerPhase is {max_load}",
                slots.len()
            ));
        }
    }
}

/// Flags tasks whose `MaxConcurrent` exceeds the number of qualified workers.
pub(super) fn check_concurrency(tasks: &[Row], workers: &[Row], outcome: &mut ValidationOutcome) {
    // Parse each worker's skill set once; undecodable skill cells count as
    // no skills (the worker qualifies for nothing).
    let skill_sets: Vec<HashSet<String>> = workers
        .iter()
        .map(|worker| {
            let raw = worker.text("Skills").unwrap_or_default();
            parse_list(&raw)
                .map(|skills| skills.into_iter().collect())
                .unwrap_or_default()
        })
        .collect();

    for (index, task) in tasks.iter().enumerate() {
        let raw = task.text("RequiredSkills").unwrap_or_default();
        let Ok(required) = parse_list(&raw) else { continue };

        let max_concurrent = declared_or_one(task, "MaxConcurrent");
        let qualified = skill_sets
            .iter()
            .filter(|skills| required.iter().any(|skill| skills.contains(skill)))
            .count() as i64;

        if qualified < max_concurrent {
            let row_id = task.identity("TaskID", index);
            outcome.flag(
                EntityKind::Tasks,
                &row_id,
                "MaxConcurrent",
                format!("Only {qualified} qualified worker(s) for MaxConcurrent {max_concurrent}"),
            );
            outcome.note(format!(
                "tasks {row_id}: {qualified} qualified worker(s) but MaxConcurrent is {max_concurrent}"
            ));
        }
    }
}

/// Declared numeric value of a cell, defaulting to 1 when absent or
/// non-numeric.
fn declared_or_one(row: &Row, column: &str) -> i64 {
    row.number(column).map_or(1, |n| n as i64)
}
