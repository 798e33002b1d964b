//! Coloring validation.
//!
//! Checks that a coloring is a proper time-slot assignment for a graph:
//! - Every vertex has a slot
//! - No two conflicting vertices share a slot
//!
//! Works for colorings from any source, not only the greedy colorer. An
//! invalid greedy result indicates a bug, so every violation is logged at
//! error level.

use thiserror::Error;
use tracing::error;

use crate::models::{Coloring, Graph};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ColoringViolation>>;

/// A coloring violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ColoringViolation {
    /// Violation category.
    pub kind: ColoringViolationKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of coloring violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColoringViolationKind {
    /// A graph vertex has no slot.
    Uncolored {
        /// The vertex without a slot.
        vertex: String,
    },
    /// Two conflicting vertices share a slot.
    AdjacentConflict {
        /// First endpoint (earlier in insertion order).
        a: String,
        /// Second endpoint.
        b: String,
        /// The shared slot.
        slot: usize,
    },
}

impl ColoringViolation {
    fn uncolored(vertex: &str) -> Self {
        Self {
            kind: ColoringViolationKind::Uncolored {
                vertex: vertex.to_string(),
            },
            message: format!("Vertex '{vertex}' has no slot"),
        }
    }

    fn adjacent_conflict(a: &str, b: &str, slot: usize) -> Self {
        Self {
            kind: ColoringViolationKind::AdjacentConflict {
                a: a.to_string(),
                b: b.to_string(),
                slot,
            },
            message: format!("Conflicting vertices '{a}' and '{b}' share slot {slot}"),
        }
    }
}

/// Checks a coloring and reports every violation.
///
/// Checks:
/// 1. Each vertex of `graph` appears in `coloring`
/// 2. For each conflict whose endpoints are both colored, the slots differ
///
/// Each conflict is reported once. Extra entries in `coloring` for
/// vertices outside the graph are ignored.
///
/// # Returns
/// `Ok(())` if the coloring is proper, `Err(violations)` otherwise.
pub fn check_coloring(graph: &Graph, coloring: &Coloring) -> ValidationResult {
    let mut violations = Vec::new();

    for v in graph.vertices() {
        if !coloring.contains(v) {
            violations.push(ColoringViolation::uncolored(v));
        }
    }

    for (a, b) in graph.edges() {
        if let (Some(ca), Some(cb)) = (coloring.get(a), coloring.get(b)) {
            if ca == cb {
                violations.push(ColoringViolation::adjacent_conflict(a, b, ca));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        for v in &violations {
            error!(kind = ?v.kind, "invalid coloring: {}", v.message);
        }
        Err(violations)
    }
}

/// Whether `coloring` is a proper coloring of `graph`.
///
/// True vacuously for an empty graph.
pub fn validate(graph: &Graph, coloring: &Coloring) -> bool {
    check_coloring(graph, coloring).is_ok()
}
