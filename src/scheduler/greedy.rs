//! Greedy first-fit coloring.
//!
//! # Algorithm
//!
//! 1. Fix a visiting order (largest degree first by default, ties in
//!    insertion order).
//! 2. For each vertex, collect the slots of neighbors colored so far.
//! 3. Assign the smallest slot not in that set.
//!
//! The candidate scan for a vertex `v` tries at most `degree(v) + 1` slots,
//! so the loop always terminates and every vertex receives a slot.
//!
//! # Complexity
//! O(V log V) for the ordering plus O(V + E) for the assignment.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a graph
//! and its application to timetabling problems"

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Coloring, Graph};

/// Order in which the greedy colorer visits vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VertexOrder {
    /// Highest degree first, ties in insertion order (Welsh–Powell).
    #[default]
    LargestDegreeFirst,
    /// Plain insertion order.
    Insertion,
}

/// Greedy first-fit colorer.
///
/// Deterministic: the same graph (same insertion order of vertices and
/// edges) always yields the same coloring. Not optimal; the chromatic
/// number problem is NP-hard and this is a fast approximation.
///
/// # Example
///
/// ```
/// use slot_coloring::models::Graph;
/// use slot_coloring::scheduler::GreedyColorer;
///
/// let graph = Graph::from_edges([("A", "B"), ("A", "C")]);
/// let coloring = GreedyColorer::new().color(&graph);
///
/// assert_eq!(coloring.get("A"), Some(0));
/// assert_eq!(coloring.get("B"), Some(1));
/// assert_eq!(coloring.get("C"), Some(1));
/// assert_eq!(coloring.color_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyColorer {
    order: VertexOrder,
}

impl GreedyColorer {
    /// Creates a colorer using largest-degree-first order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the visiting order.
    pub fn with_order(mut self, order: VertexOrder) -> Self {
        self.order = order;
        self
    }

    /// The configured visiting order.
    pub fn order(&self) -> VertexOrder {
        self.order
    }

    /// Colors every vertex of `graph`.
    ///
    /// An empty graph yields an empty coloring.
    pub fn color(&self, graph: &Graph) -> Coloring {
        let mut coloring = Coloring::new();
        if graph.is_empty() {
            return coloring;
        }

        let order = self.visit_order(graph);
        let mut used: HashSet<usize> = HashSet::new();

        for v in order {
            used.clear();
            used.extend(graph.neighbors(v).iter().filter_map(|n| coloring.get(n)));

            let mut slot = 0;
            while used.contains(&slot) {
                slot += 1;
            }
            coloring.assign(v, slot);
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            slots = coloring.color_count(),
            order = ?self.order,
            "greedy coloring complete"
        );
        coloring
    }

    fn visit_order<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        match self.order {
            VertexOrder::LargestDegreeFirst => graph.vertices_by_descending_degree(),
            VertexOrder::Insertion => graph.vertices().iter().map(String::as_str).collect(),
        }
    }
}

/// Colors `graph` with the default largest-degree-first greedy heuristic.
pub fn color(graph: &Graph) -> Coloring {
    GreedyColorer::new().color(graph)
}
