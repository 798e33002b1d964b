//! Coloring quality metrics.
//!
//! Summarizes a coloring against the graph it was computed for.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slots used | Highest slot + 1 |
//! | Distinct colors | Number of different slots actually assigned |
//! | Largest slot | Most vertices sharing one slot |
//! | Max degree | Highest vertex degree; greedy never needs more than max degree + 1 slots |
//! | Valid | Whether the coloring is proper |

use crate::models::{Coloring, Graph};
use crate::validation::validate;

/// Coloring quality summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringStats {
    /// Number of graph vertices.
    pub vertex_count: usize,
    /// Number of conflicts.
    pub edge_count: usize,
    /// Slot range used (highest slot + 1).
    pub slots_used: usize,
    /// Distinct slots actually assigned. Less than `slots_used` only for sparse colorings.
    pub distinct_colors: usize,
    /// Size of the most crowded slot.
    pub largest_slot: usize,
    /// Highest vertex degree.
    pub max_degree: usize,
    /// Whether the coloring is proper for the graph.
    pub is_valid: bool,
}

impl ColoringStats {
    /// Computes statistics for `coloring` over `graph`.
    pub fn calculate(graph: &Graph, coloring: &Coloring) -> Self {
        let largest_slot = coloring
            .slots()
            .values()
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            slots_used: coloring.color_count(),
            distinct_colors: coloring.distinct_colors(),
            largest_slot,
            max_degree: graph.max_degree(),
            is_valid: validate(graph, coloring),
        }
    }

    /// Whether the slot count is within the greedy bound of max degree + 1.
    ///
    /// Always true for greedy output; a false result flags a coloring
    /// from another source that wastes slots.
    pub fn within_degree_bound(&self) -> bool {
        self.vertex_count == 0 || self.slots_used <= self.max_degree + 1
    }

    /// Whether the coloring is valid and uses at most `max_slots` slots.
    pub fn meets_slot_limit(&self, max_slots: usize) -> bool {
        self.is_valid && self.slots_used <= max_slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::color;

    #[test]
    fn test_stats_star() {
        let g = Graph::from_edges([("A", "B"), ("A", "C")]);
        let stats = ColoringStats::calculate(&g, &color(&g));
        assert_eq!(stats.vertex_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.slots_used, 2);
        assert_eq!(stats.distinct_colors, 2);
        assert_eq!(stats.largest_slot, 2); // B and C
        assert_eq!(stats.max_degree, 2);
        assert!(stats.is_valid);
        assert!(stats.within_degree_bound());
    }

    #[test]
    fn test_stats_empty() {
        let stats = ColoringStats::calculate(&Graph::new(), &Coloring::new());
        assert_eq!(stats.vertex_count, 0);
        assert_eq!(stats.slots_used, 0);
        assert_eq!(stats.largest_slot, 0);
        assert!(stats.is_valid);
        assert!(stats.within_degree_bound());
    }

    #[test]
    fn test_stats_sparse_input() {
        let g = Graph::from_edges([("A", "B")]);
        let c = Coloring::new().with("A", 0).with("B", 4);
        let stats = ColoringStats::calculate(&g, &c);
        assert_eq!(stats.slots_used, 5);
        assert_eq!(stats.distinct_colors, 2);
        assert!(stats.is_valid);
        assert!(!stats.within_degree_bound());
    }

    #[test]
    fn test_meets_slot_limit() {
        let g = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
        let stats = ColoringStats::calculate(&g, &color(&g));
        assert!(stats.meets_slot_limit(3));
        assert!(!stats.meets_slot_limit(2));

        let invalid = ColoringStats::calculate(&g, &Coloring::new());
        assert!(!invalid.meets_slot_limit(10));
    }
}
