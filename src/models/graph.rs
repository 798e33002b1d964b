//! Conflict graph model.
//!
//! An undirected, unweighted graph over string identifiers. Vertices are
//! entities that need a time slot (courses); an edge is a conflict that
//! forbids two vertices from sharing a slot.
//!
//! All operations are total: unknown identifiers yield empty/zero results,
//! repeated adds are no-ops.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::trace;

/// An undirected conflict graph.
///
/// Vertex order is insertion order. Neighbor lists keep the order in which
/// edges were added and never contain duplicates. Adjacency is always
/// symmetric.
///
/// # Example
///
/// ```
/// use slot_coloring::models::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge("CS101", "CS102");
/// graph.add_edge("CS101", "MATH201");
///
/// assert_eq!(graph.degree("CS101"), 2);
/// assert_eq!(graph.vertices_by_descending_degree()[0], "CS101");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GraphData", into = "GraphData")]
pub struct Graph {
    vertices: Vec<String>,
    adjacency: HashMap<String, Vec<String>>,
}

/// Serialized form of a [`Graph`]: vertex list plus each conflict once.
///
/// Deserialization replays `add_vertex`/`add_edge`, so any input produces
/// a graph that satisfies the symmetry invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GraphData {
    #[serde(default)]
    vertices: Vec<String>,
    #[serde(default)]
    edges: Vec<(String, String)>,
}

impl From<GraphData> for Graph {
    fn from(data: GraphData) -> Self {
        let mut graph = Graph::new();
        for v in data.vertices {
            graph.add_vertex(v);
        }
        for (a, b) in data.edges {
            graph.add_edge(a, b);
        }
        graph
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        let edges = graph
            .edges()
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        Self {
            vertices: graph.vertices,
            edges,
        }
    }
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a list of conflicts.
    ///
    /// Equivalent to calling [`add_edge`](Self::add_edge) for each pair in order.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Adds vertices in order.
    pub fn with_vertices<I, S>(mut self, vertices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for v in vertices {
            self.add_vertex(v);
        }
        self
    }

    /// Adds a conflict.
    pub fn with_edge(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.add_edge(a, b);
        self
    }

    /// Inserts a vertex with no neighbors. No-op if already present.
    pub fn add_vertex(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.adjacency.contains_key(&id) {
            self.adjacency.insert(id.clone(), Vec::new());
            self.vertices.push(id);
        }
    }

    /// Adds an undirected conflict between `a` and `b`.
    ///
    /// Missing endpoints are created first, `a` then `b`. Repeating the
    /// same pair (in either order) has no further effect. A self-edge only
    /// ensures the vertex exists.
    pub fn add_edge(&mut self, a: impl Into<String>, b: impl Into<String>) {
        let a = a.into();
        let b = b.into();
        self.add_vertex(a.clone());
        self.add_vertex(b.clone());

        if a == b {
            trace!(vertex = %a, "ignoring self-conflict");
            return;
        }

        if let Some(list) = self.adjacency.get_mut(&a) {
            if !list.contains(&b) {
                list.push(b.clone());
            }
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            if !list.contains(&a) {
                list.push(a);
            }
        }
    }

    /// Number of distinct neighbors of `v` (0 if unknown).
    pub fn degree(&self, v: &str) -> usize {
        self.adjacency.get(v).map_or(0, Vec::len)
    }

    /// Neighbors of `v` in edge insertion order (empty if unknown).
    pub fn neighbors(&self, v: &str) -> &[String] {
        self.adjacency.get(v).map_or(&[], Vec::as_slice)
    }

    /// All vertices ordered by degree, highest first.
    ///
    /// Ties keep insertion order (stable sort), which makes coloring
    /// output reproducible.
    pub fn vertices_by_descending_degree(&self) -> Vec<&str> {
        let mut order: Vec<&str> = self.vertices.iter().map(String::as_str).collect();
        order.sort_by_key(|v| Reverse(self.degree(v)));
        order
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains(&self, v: &str) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected conflicts.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Largest vertex degree (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Every conflict exactly once.
    ///
    /// A pair is reported from the endpoint that was inserted first, in
    /// vertex insertion order and then neighbor order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let position: HashMap<&str, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.as_str(), i))
            .collect();

        let mut edges = Vec::with_capacity(self.edge_count());
        for (i, v) in self.vertices.iter().enumerate() {
            for n in self.neighbors(v) {
                if position.get(n.as_str()).is_some_and(|&j| j > i) {
                    edges.push((v.as_str(), n.as_str()));
                }
            }
        }
        edges
    }
}
