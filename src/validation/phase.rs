//! Phase saturation check.
//!
//! Aggregates total available capacity per phase (from workers) against
//! total demand per phase (from tasks) and reports any phase where demand
//! exceeds capacity. A worker contributes its full `MaxLoadPerPhase` to
//! every phase it is available in — capacity is counted per phase, not
//! spread across phases. A task contributes its `Duration` to every phase
//! it prefers.

use std::collections::BTreeMap;

use crate::models::{parse_numeric_list, Row};

use super::ValidationOutcome;

#[derive(Default)]
struct PhaseLoad {
    total: i64,
    used: i64,
}

pub(super) fn check_phase_saturation(
    workers: &[Row],
    tasks: &[Row],
    outcome: &mut ValidationOutcome,
) {
    let mut loads: BTreeMap<i64, PhaseLoad> = BTreeMap::new();

    for worker in workers {
        let raw = worker.text("AvailableSlots").unwrap_or_default();
        let Ok(phases) = parse_numeric_list(&raw) else { continue };
        let capacity = worker.number("MaxLoadPerPhase").map_or(1, |n| n as i64);
        for phase in phases {
            loads.entry(phase).or_default().total += capacity;
        }
    }

    for task in tasks {
        let raw = task.text("PreferredPhases").unwrap_or_default();
        let Ok(phases) = parse_numeric_list(&raw) else { continue };
        let demand = task.number("Duration").map_or(1, |n| n as i64);
        for phase in phases {
            loads.entry(phase).or_default().used += demand;
        }
    }

    for (phase, load) in &loads {
        if load.used > load.total {
            outcome.note(format!(
                "Phase {phase} is oversaturated: demand {} exceeds capacity {}",
                load.used, load.total
            ));
            outcome.suggest(format!(
                "Spread tasks preferring phase {phase} across other phases or add worker availability"
            ));
        }
    }
}
