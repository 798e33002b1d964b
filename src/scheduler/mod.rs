//! Greedy coloring and quality metrics.
//!
//! # Algorithm
//!
//! `GreedyColorer` visits vertices largest-degree-first (Welsh–Powell) and
//! gives each the smallest slot unused by its already-colored neighbors.
//! It is not optimal, but fast and deterministic.
//!
//! # Stats
//!
//! `ColoringStats` summarizes slot usage and validity.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - de Werra (1985), "An introduction to timetabling"

mod greedy;
mod stats;

pub use greedy::{color, GreedyColorer, VertexOrder};
pub use stats::ColoringStats;
