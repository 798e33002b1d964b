//! Conflict graph builders.
//!
//! Standard graph families with known coloring behavior, plus random
//! graphs for property testing and benchmarking. Vertices are labeled
//! `V0..V{n-1}` and inserted in index order.
//!
//! | Family | Greedy slots |
//! |--------|--------------|
//! | `empty(n)` | 1 (0 if n = 0) |
//! | `complete(n)` | n |
//! | `cycle(n)` | 2 if n even, 3 if n odd (n ≥ 3) |

use rand::Rng;

use crate::models::Graph;

fn label(i: usize) -> String {
    format!("V{i}")
}

/// `n` vertices, no conflicts.
pub fn empty(n: usize) -> Graph {
    Graph::new().with_vertices((0..n).map(label))
}

/// `n` vertices, every pair in conflict.
pub fn complete(n: usize) -> Graph {
    let mut graph = empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(label(i), label(j));
        }
    }
    graph
}

/// Ring `V0 - V1 - ... - V{n-1} - V0`.
///
/// For `n < 3` this degenerates to a path (or a lone vertex).
pub fn cycle(n: usize) -> Graph {
    let mut graph = empty(n);
    for i in 0..n {
        let j = (i + 1) % n;
        if i != j {
            graph.add_edge(label(i), label(j));
        }
    }
    graph
}

/// Erdős–Rényi G(n, p): each pair conflicts independently with probability `p`.
///
/// `p` is clamped to `[0, 1]`.
pub fn random<R: Rng>(n: usize, p: f64, rng: &mut R) -> Graph {
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let mut graph = empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                graph.add_edge(label(i), label(j));
            }
        }
    }
    graph
}
