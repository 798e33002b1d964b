//! Coloring (solution) model.
//!
//! A coloring maps each vertex to a non-negative slot index. It is a
//! disposable snapshot: recomputed from scratch whenever the graph changes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A vertex → time slot assignment.
///
/// Produced by the greedy colorer, but any source may build one (for
/// example to validate a hand-made timetable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coloring {
    assignments: HashMap<String, usize>,
}

impl Coloring {
    /// Creates an empty coloring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `slot` to `vertex`, replacing any previous assignment.
    pub fn assign(&mut self, vertex: impl Into<String>, slot: usize) {
        self.assignments.insert(vertex.into(), slot);
    }

    /// Sets a slot (builder form of [`assign`](Self::assign)).
    pub fn with(mut self, vertex: impl Into<String>, slot: usize) -> Self {
        self.assign(vertex, slot);
        self
    }

    /// Slot of `vertex`, if assigned.
    pub fn get(&self, vertex: &str) -> Option<usize> {
        self.assignments.get(vertex).copied()
    }

    /// Whether `vertex` has a slot.
    pub fn contains(&self, vertex: &str) -> bool {
        self.assignments.contains_key(vertex)
    }

    /// Number of assigned vertices.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no vertex is assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates over `(vertex, slot)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.assignments.iter().map(|(v, &c)| (v.as_str(), c))
    }

    /// Size of the slot range used: highest slot + 1, or 0 when empty.
    ///
    /// This is not the number of distinct slots. Greedy first-fit output is
    /// dense from 0, so the two agree there; for a sparse coloring such as
    /// `{A: 0, B: 5}` this reports 6. See [`distinct_colors`](Self::distinct_colors).
    pub fn color_count(&self) -> usize {
        self.assignments.values().max().map_or(0, |&max| max + 1)
    }

    /// Number of distinct slots actually used.
    pub fn distinct_colors(&self) -> usize {
        self.assignments.values().collect::<BTreeSet<_>>().len()
    }

    /// Groups vertices by slot.
    ///
    /// Slots are ascending; vertices inside a slot are sorted.
    pub fn slots(&self) -> BTreeMap<usize, Vec<&str>> {
        let mut slots: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for (v, &c) in &self.assignments {
            slots.entry(c).or_default().push(v.as_str());
        }
        for members in slots.values_mut() {
            members.sort_unstable();
        }
        slots
    }

    /// Sorted vertices assigned to `slot`.
    pub fn vertices_in_slot(&self, slot: usize) -> Vec<&str> {
        let mut members: Vec<&str> = self
            .assignments
            .iter()
            .filter(|&(_, &c)| c == slot)
            .map(|(v, _)| v.as_str())
            .collect();
        members.sort_unstable();
        members
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for Coloring {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().map(|(v, c)| (v.into(), c)).collect(),
        }
    }
}

/// Size of the slot range used by `coloring` (highest slot + 1, 0 if empty).
pub fn color_count(coloring: &Coloring) -> usize {
    coloring.color_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coloring() -> Coloring {
        Coloring::new()
            .with("CS101", 0)
            .with("PHYS101", 0)
            .with("CS102", 1)
            .with("MATH201", 1)
            .with("ENG101", 1)
    }

    #[test]
    fn test_empty_color_count() {
        let c = Coloring::new();
        assert_eq!(c.color_count(), 0);
        assert_eq!(color_count(&c), 0);
        assert_eq!(c.distinct_colors(), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn test_color_count_dense() {
        let c = sample_coloring();
        assert_eq!(c.color_count(), 2);
        assert_eq!(c.distinct_colors(), 2);
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn test_color_count_sparse_overcounts() {
        let c: Coloring = [("A", 0), ("B", 5)].into_iter().collect();
        assert_eq!(c.color_count(), 6);
        assert_eq!(c.distinct_colors(), 2);
    }

    #[test]
    fn test_assign_replaces() {
        let mut c = Coloring::new();
        c.assign("A", 3);
        c.assign("A", 1);
        assert_eq!(c.get("A"), Some(1));
        assert_eq!(c.get("B"), None);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_slots_grouped_and_sorted() {
        let c = sample_coloring();
        let slots = c.slots();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[&0], ["CS101", "PHYS101"]);
        assert_eq!(slots[&1], ["CS102", "ENG101", "MATH201"]);
    }

    #[test]
    fn test_vertices_in_slot() {
        let c = sample_coloring();
        assert_eq!(c.vertices_in_slot(0), ["CS101", "PHYS101"]);
        assert!(c.vertices_in_slot(7).is_empty());
    }

    #[test]
    fn test_serialize_as_plain_map() {
        let c = Coloring::new().with("A", 2);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"A":2}"#);
        let back: Coloring = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
