//! Inheritance-aware ordering of class records.

use crate::model::ClassRecord;
use std::collections::HashMap;

/// Order records so that every base precedes its derived classes, with a
/// deterministic, reader-friendly layout: roots in name order, children in
/// name order, pre-order depth-first so each subtree stays grouped behind
/// its parent.
///
/// Base names with no matching record are treated as external and ignored.
/// Records left unreachable by the root sweep (bases forming a cycle) are
/// picked up afterwards in name order, so the result is always a
/// permutation of the input.
pub fn sort_classes(records: Vec<ClassRecord>) -> Vec<ClassRecord> {
    let index: HashMap<&str, usize> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (r.name.as_str(), i))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut is_root = vec![true; records.len()];
    for (i, record) in records.iter().enumerate() {
        for base in &record.base_names {
            if let Some(&b) = index.get(base.as_str()) {
                is_root[i] = false;
                children[b].push(i);
            }
        }
    }
    for list in &mut children {
        list.sort_by(|&a, &b| records[a].name.cmp(&records[b].name));
        list.dedup();
    }

    let mut by_name: Vec<usize> = (0..records.len()).collect();
    by_name.sort_by(|&a, &b| records[a].name.cmp(&records[b].name));

    let mut visited = vec![false; records.len()];
    let mut order = Vec::with_capacity(records.len());
    for &i in by_name.iter().filter(|&&i| is_root[i]) {
        visit(i, &children, &mut visited, &mut order);
    }
    // cycles have no root; sweep whatever is left, still in name order
    for &i in &by_name {
        visit(i, &children, &mut visited, &mut order);
    }

    let mut slots: Vec<Option<ClassRecord>> = records.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}

fn visit(i: usize, children: &[Vec<usize>], visited: &mut [bool], order: &mut Vec<usize>) {
    if visited[i] {
        return;
    }
    visited[i] = true;
    order.push(i);
    for &c in &children[i] {
        visit(c, children, visited, order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, bases: &[&str]) -> ClassRecord {
        ClassRecord {
            name: name.to_string(),
            base_names: bases.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    fn names(records: &[ClassRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn preorder_groups_subtrees() {
        let sorted = sort_classes(vec![
            rec("C", &["A"]),
            rec("D", &["B"]),
            rec("A", &[]),
            rec("B", &["A"]),
        ]);
        assert_eq!(names(&sorted), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn pure_cycle_terminates_with_all_records() {
        let sorted = sort_classes(vec![rec("Y", &["X"]), rec("X", &["Y"])]);
        assert_eq!(names(&sorted), vec!["X", "Y"]);
    }

    #[test]
    fn external_base_still_makes_a_root() {
        let sorted = sort_classes(vec![rec("Z", &["SDL_Surface"]), rec("A", &[])]);
        assert_eq!(names(&sorted), vec!["A", "Z"]);
    }

    #[test]
    fn diamond_appears_once_at_first_reach() {
        let sorted = sort_classes(vec![
            rec("D", &["B", "C"]),
            rec("B", &["A"]),
            rec("C", &["A"]),
            rec("A", &[]),
        ]);
        assert_eq!(names(&sorted), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn roots_are_name_ordered() {
        let sorted = sort_classes(vec![rec("Zed", &[]), rec("Mid", &[]), rec("Arc", &[])]);
        assert_eq!(names(&sorted), vec!["Arc", "Mid", "Zed"]);
    }

    #[test]
    fn cycle_hanging_off_a_root_is_not_lost() {
        // P -> Q, while Q and R reference each other
        let sorted = sort_classes(vec![
            rec("P", &[]),
            rec("Q", &["P", "R"]),
            rec("R", &["Q"]),
        ]);
        assert_eq!(names(&sorted), vec!["P", "Q", "R"]);
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(sort_classes(Vec::new()).is_empty());
    }
}
