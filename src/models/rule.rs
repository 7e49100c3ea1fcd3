//! Allocation rule catalog.
//!
//! Rules arrive from manual construction or from an external
//! natural-language translator as `type`-tagged JSON objects. They are
//! carried through the engine as one tagged union; checkers pattern-match
//! the kinds they understand and ignore the rest, so new kinds are additive.
//! Today only [`Rule::CoRun`] feeds a dedicated checker (cycle detection);
//! the remaining kinds are validated structurally at the ingest boundary
//! and passed through.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An allocation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Rule {
    /// Listed tasks must execute together.
    CoRun { tasks: Vec<String> },

    /// A worker group must retain a minimum number of common slots.
    SlotRestriction { group: String, min_common_slots: u32 },

    /// Caps the slots a worker group may fill in any one phase.
    LoadLimit { group: String, max_slots_per_phase: u32 },

    /// Restricts a task to an allowed set of phases.
    PhaseWindow { task: String, phases: Vec<i64> },

    /// Free-form pattern rule emitted by the rule translator.
    PatternMatch {
        regex: String,
        template: String,
        #[serde(default)]
        params: BTreeMap<String, serde_json::Value>,
    },

    /// Orders global rule IDs against specific overrides.
    PrecedenceOverride {
        #[serde(default)]
        global: Vec<String>,
        #[serde(default)]
        specific: Vec<String>,
    },
}

impl Rule {
    /// Creates a co-run rule over the given tasks.
    pub fn co_run<I, S>(tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rule::CoRun {
            tasks: tasks.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a slot-restriction rule.
    pub fn slot_restriction(group: impl Into<String>, min_common_slots: u32) -> Self {
        Rule::SlotRestriction {
            group: group.into(),
            min_common_slots,
        }
    }

    /// Creates a load-limit rule.
    pub fn load_limit(group: impl Into<String>, max_slots_per_phase: u32) -> Self {
        Rule::LoadLimit {
            group: group.into(),
            max_slots_per_phase,
        }
    }

    /// Creates a phase-window rule.
    pub fn phase_window(task: impl Into<String>, phases: Vec<i64>) -> Self {
        Rule::PhaseWindow {
            task: task.into(),
            phases,
        }
    }

    /// The external `type` tag for this rule kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::CoRun { .. } => "coRun",
            Rule::SlotRestriction { .. } => "slotRestriction",
            Rule::LoadLimit { .. } => "loadLimit",
            Rule::PhaseWindow { .. } => "phaseWindow",
            Rule::PatternMatch { .. } => "patternMatch",
            Rule::PrecedenceOverride { .. } => "precedenceOverride",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_co_run_wire_shape() {
        let rule = Rule::co_run(["T1", "T2"]);
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value, json!({"type": "coRun", "tasks": ["T1", "T2"]}));
    }

    #[test]
    fn test_camel_case_field_tags() {
        let rule = Rule::slot_restriction("sales", 2);
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value,
            json!({"type": "slotRestriction", "group": "sales", "minCommonSlots": 2})
        );

        let rule = Rule::load_limit("sales", 4);
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value,
            json!({"type": "loadLimit", "group": "sales", "maxSlotsPerPhase": 4})
        );
    }

    #[test]
    fn test_deserialize_tagged_rule() {
        let rule: Rule =
            serde_json::from_value(json!({"type": "phaseWindow", "task": "T9", "phases": [1, 2]}))
                .unwrap();
        assert_eq!(rule, Rule::phase_window("T9", vec![1, 2]));
        assert_eq!(rule.kind(), "phaseWindow");
    }

    #[test]
    fn test_extended_kinds_round_trip() {
        let pattern: Rule = serde_json::from_value(json!({
            "type": "patternMatch",
            "regex": "^T[0-9]+$",
            "template": "flag",
        }))
        .unwrap();
        assert_eq!(pattern.kind(), "patternMatch");

        let precedence: Rule =
            serde_json::from_value(json!({"type": "precedenceOverride", "global": ["R1"]}))
                .unwrap();
        assert_eq!(
            precedence,
            Rule::PrecedenceOverride {
                global: vec!["R1".to_string()],
                specific: Vec::new(),
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: Result<Rule, _> = serde_json::from_value(json!({"type": "banAllTasks"}));
        assert!(result.is_err());
    }
}
