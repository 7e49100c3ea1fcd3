//! Co-run rule graph cycle detection.
//!
//! Co-run rules are expanded into one shared undirected graph: every task in
//! a group is linked to every other task in the same group (a clique, not a
//! path), and edges from all rules are merged. A depth-first traversal then
//! looks for a loop — including loops that close transitively across
//! independent groups sharing tasks. Only the first cycle is reported; one
//! finding is enough to send the user back to the rule list.
//!
//! A lone co-run pair is not a cycle: the traversal ignores the edge back to
//! the node it just came from, so a loop needs at least three tasks.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::Rule;

use super::ValidationOutcome;

pub(super) fn check_co_run_cycles(rules: &[Rule], outcome: &mut ValidationOutcome) {
    // Ordered adjacency keeps the traversal, and therefore the implicated
    // task named in the message, deterministic.
    let mut adjacency: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for rule in rules {
        let Rule::CoRun { tasks } = rule else { continue };
        for a in tasks {
            for b in tasks {
                if a != b {
                    adjacency.entry(a).or_default().insert(b);
                }
            }
        }
    }

    let mut visited: BTreeSet<&str> = BTreeSet::new();
    for &start in adjacency.keys() {
        if visited.contains(start) {
            continue;
        }
        let mut on_path = BTreeSet::new();
        if let Some(task) = find_cycle(start, None, &adjacency, &mut visited, &mut on_path) {
            outcome.note(format!(
                "Circular co-run dependency detected involving task '{task}'"
            ));
            outcome.suggest(
                "Review the co-run rules and break the loop so the tasks can run together",
            );
            return;
        }
    }
}

/// Depth-first search over the undirected co-run graph, returning a task on
/// a cycle if one is reachable from `node`.
///
/// Recursion depth is bounded by the number of distinct tasks appearing in
/// co-run rules, and the visited/path bookkeeping guarantees termination.
fn find_cycle<'a>(
    node: &'a str,
    parent: Option<&'a str>,
    adjacency: &BTreeMap<&'a str, BTreeSet<&'a str>>,
    visited: &mut BTreeSet<&'a str>,
    on_path: &mut BTreeSet<&'a str>,
) -> Option<&'a str> {
    visited.insert(node);
    on_path.insert(node);

    if let Some(neighbors) = adjacency.get(node) {
        for &next in neighbors {
            if Some(next) == parent {
                continue;
            }
            if on_path.contains(next) {
                return Some(next); // Back edge
            }
            if !visited.contains(next) {
                if let Some(found) = find_cycle(next, Some(node), adjacency, visited, on_path) {
                    return Some(found);
                }
            }
        }
    }

    on_path.remove(node);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_no_findings() {
        let mut outcome = ValidationOutcome::default();
        check_co_run_cycles(&[], &mut outcome);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_lone_pair_is_not_a_cycle() {
        let rules = vec![Rule::co_run(["T1", "T2"])];
        let mut outcome = ValidationOutcome::default();
        check_co_run_cycles(&rules, &mut outcome);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_disjoint_pairs_are_not_a_cycle() {
        let rules = vec![Rule::co_run(["T1", "T2"]), Rule::co_run(["T3", "T4"])];
        let mut outcome = ValidationOutcome::default();
        check_co_run_cycles(&rules, &mut outcome);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_chain_through_a_shared_task_is_not_a_cycle() {
        let rules = vec![Rule::co_run(["T1", "T2"]), Rule::co_run(["T2", "T3"])];
        let mut outcome = ValidationOutcome::default();
        check_co_run_cycles(&rules, &mut outcome);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_triangle_of_pairs_is_a_cycle() {
        let rules = vec![
            Rule::co_run(["T1", "T2"]),
            Rule::co_run(["T2", "T3"]),
            Rule::co_run(["T3", "T1"]),
        ];
        let mut outcome = ValidationOutcome::default();
        check_co_run_cycles(&rules, &mut outcome);

        assert_eq!(outcome.summary.len(), 1);
        assert!(outcome.summary[0].contains("Circular"));
        assert_eq!(outcome.suggestions.len(), 1);
    }

    #[test]
    fn test_three_task_group_expands_to_a_clique_cycle() {
        // Clique expansion links all three tasks mutually, which closes a loop.
        let rules = vec![Rule::co_run(["T1", "T2", "T3"])];
        let mut outcome = ValidationOutcome::default();
        check_co_run_cycles(&rules, &mut outcome);
        assert_eq!(outcome.summary.len(), 1);
    }

    #[test]
    fn test_only_first_cycle_reported() {
        let rules = vec![
            Rule::co_run(["A1", "A2", "A3"]),
            Rule::co_run(["B1", "B2", "B3"]),
        ];
        let mut outcome = ValidationOutcome::default();
        check_co_run_cycles(&rules, &mut outcome);
        assert_eq!(outcome.summary.len(), 1);
        assert_eq!(outcome.suggestions.len(), 1);
    }

    #[test]
    fn test_non_co_run_rules_are_ignored() {
        let rules = vec![
            Rule::phase_window("T1", vec![1, 2]),
            Rule::load_limit("sales", 3),
        ];
        let mut outcome = ValidationOutcome::default();
        check_co_run_cycles(&rules, &mut outcome);
        assert!(outcome.is_clean());
    }
}
