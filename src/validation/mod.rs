//! Multi-pass validation engine.
//!
//! Runs a fixed sequence of checks over the three entity collections and
//! the rule list, accumulating findings into one [`ValidationOutcome`]:
//!
//! 1. **Schema** — required columns present, per entity
//! 2. **Identity** — duplicate primary-key values
//! 3. **Field formats** — list encodings, numeric ranges, JSON attributes
//! 4. **Cross-references** — requested task IDs, skill coverage
//! 5. **Capacity feasibility** — worker overload, task concurrency
//! 6. **Rule graph** — co-run cycle detection
//! 7. **Phase saturation** — aggregate capacity vs. demand per phase
//!
//! Every finding is advisory text for the presentation layer, not a
//! structured code. Malformed input never aborts a run: each pass isolates
//! its own parse failures, and a complete outcome is returned even when
//! every row is invalid. Re-running on unchanged input yields an identical
//! outcome — all intermediate maps are ordered, and message order follows
//! check-execution order.

mod capacity;
mod cross_ref;
mod fields;
mod identity;
mod phase;
mod rule_graph;
mod schema;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{EntityKind, Row, Rule};

/// Snapshot of entities and rules for one validation run.
///
/// The engine borrows the snapshot for the duration of the call only; the
/// returned outcome owns all of its data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationInput {
    pub clients: Vec<Row>,
    pub workers: Vec<Row>,
    pub tasks: Vec<Row>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl ValidationInput {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client rows.
    pub fn with_clients(mut self, rows: Vec<Row>) -> Self {
        self.clients = rows;
        self
    }

    /// Sets the worker rows.
    pub fn with_workers(mut self, rows: Vec<Row>) -> Self {
        self.workers = rows;
        self
    }

    /// Sets the task rows.
    pub fn with_tasks(mut self, rows: Vec<Row>) -> Self {
        self.tasks = rows;
        self
    }

    /// Sets the rule list (defaults to empty).
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    fn rows(&self, entity: EntityKind) -> &[Row] {
        match entity {
            EntityKind::Clients => &self.clients,
            EntityKind::Workers => &self.workers,
            EntityKind::Tasks => &self.tasks,
        }
    }
}

/// Column-level error messages for one row, keyed by column name.
pub type RowErrors = BTreeMap<String, String>;

/// Findings of one validation run.
///
/// `errors` carries cell-addressable messages for grid rendering; `summary`
/// and `suggestions` carry free-text panel content in check-execution order
/// (duplicates allowed). A fresh outcome is built on every run — findings
/// are never incrementally updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// entity → row identity → column → message. Last write wins when two
    /// checks target the same cell.
    pub errors: BTreeMap<EntityKind, BTreeMap<String, RowErrors>>,
    /// Problem descriptions, appended in check order.
    pub summary: Vec<String>,
    /// Remediation hints.
    pub suggestions: Vec<String>,
}

impl ValidationOutcome {
    /// Records a cell-level message, replacing any earlier message for the
    /// same cell.
    fn flag(&mut self, entity: EntityKind, row_id: &str, column: &str, message: impl Into<String>) {
        self.errors
            .entry(entity)
            .or_default()
            .entry(row_id.to_string())
            .or_default()
            .insert(column.to_string(), message.into());
    }

    /// Appends a cell-level message, extending any earlier message for the
    /// same cell so one cell can accumulate several clauses.
    fn flag_append(&mut self, entity: EntityKind, row_id: &str, column: &str, message: &str) {
        let slot = self
            .errors
            .entry(entity)
            .or_default()
            .entry(row_id.to_string())
            .or_default()
            .entry(column.to_string())
            .or_default();
        if !slot.is_empty() {
            slot.push_str("; ");
        }
        slot.push_str(message);
    }

    /// Appends a summary line.
    fn note(&mut self, message: impl Into<String>) {
        self.summary.push(message.into());
    }

    /// Appends a remediation hint.
    fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    /// Whether the run produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.summary.is_empty() && self.suggestions.is_empty()
    }

    /// The message recorded for one cell, if any.
    pub fn cell_error(&self, entity: EntityKind, row_id: &str, column: &str) -> Option<&str> {
        self.errors
            .get(&entity)?
            .get(row_id)?
            .get(column)
            .map(String::as_str)
    }

    /// Total number of flagged cells across all entities.
    pub fn error_count(&self) -> usize {
        self.errors
            .values()
            .flat_map(|rows| rows.values())
            .map(|cells| cells.len())
            .sum()
    }
}

/// Runs the full validation pipeline over one input snapshot.
///
/// Synchronous, single-threaded, and side-effect-free: the only output is
/// the returned outcome. Never fails — well-formed-but-invalid business
/// data produces findings, not errors.
pub fn validate(input: &ValidationInput) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    for entity in EntityKind::ALL {
        schema::check_required_columns(entity, input.rows(entity), &mut outcome);
    }
    for entity in EntityKind::ALL {
        identity::check_duplicate_ids(entity, input.rows(entity), &mut outcome);
    }

    fields::check_list_format(
        EntityKind::Clients,
        &input.clients,
        "RequestedTaskIDs",
        false,
        &mut outcome,
    );
    fields::check_list_format(EntityKind::Workers, &input.workers, "Skills", false, &mut outcome);
    fields::check_list_format(
        EntityKind::Workers,
        &input.workers,
        "AvailableSlots",
        true,
        &mut outcome,
    );
    fields::check_list_format(
        EntityKind::Tasks,
        &input.tasks,
        "RequiredSkills",
        false,
        &mut outcome,
    );
    fields::check_list_format(
        EntityKind::Tasks,
        &input.tasks,
        "PreferredPhases",
        true,
        &mut outcome,
    );

    fields::check_numeric_range(
        EntityKind::Clients,
        &input.clients,
        "PriorityLevel",
        1.0,
        5.0,
        &mut outcome,
    );
    fields::check_numeric_range(
        EntityKind::Workers,
        &input.workers,
        "MaxLoadPerPhase",
        1.0,
        10.0,
        &mut outcome,
    );
    fields::check_numeric_range(EntityKind::Tasks, &input.tasks, "Duration", 1.0, 100.0, &mut outcome);
    fields::check_numeric_range(
        EntityKind::Tasks,
        &input.tasks,
        "MaxConcurrent",
        1.0,
        10.0,
        &mut outcome,
    );

    fields::check_json_format(EntityKind::Clients, &input.clients, "AttributesJSON", &mut outcome);

    cross_ref::check_requested_tasks(&input.clients, &input.tasks, &mut outcome);
    cross_ref::check_skill_coverage(&input.tasks, &input.workers, &mut outcome);

    capacity::check_worker_overload(&input.workers, &mut outcome);
    capacity::check_concurrency(&input.tasks, &input.workers, &mut outcome);

    rule_graph::check_co_run_cycles(&input.rules, &mut outcome);

    phase::check_phase_saturation(&input.workers, &input.tasks, &mut outcome);

    outcome
}
