//! Conflict-free time-slot assignment via graph coloring.
//!
//! Entities that need a time slot (courses, exams) are vertices; a conflict
//! between two of them is an undirected edge. Assigning slots so that no
//! conflicting pair shares one is vertex coloring, and the goal is to use
//! few slots.
//!
//! # Modules
//!
//! - **`models`**: `Graph` (the conflict graph) and `Coloring` (the slot assignment)
//! - **`scheduler`**: Largest-degree-first greedy coloring and `ColoringStats`
//! - **`validation`**: Proper-coloring checks for colorings from any source
//! - **`generators`**: Standard and random conflict graphs
//!
//! # Example
//!
//! ```
//! use slot_coloring::models::Graph;
//! use slot_coloring::scheduler::color;
//! use slot_coloring::validation::validate;
//!
//! let mut graph = Graph::new();
//! for course in ["CS101", "CS102", "MATH201"] {
//!     graph.add_vertex(course);
//! }
//! graph.add_edge("CS101", "CS102");
//! graph.add_edge("CS101", "MATH201");
//!
//! let coloring = color(&graph);
//! assert_eq!(coloring.color_count(), 2);
//! assert!(validate(&graph, &coloring));
//! ```
//!
//! # Concurrency
//!
//! Everything is synchronous. Coloring only reads the graph; callers that
//! share a `Graph` across threads must serialize mutations themselves.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph
//!   and its application to timetabling problems"
//! - Jensen & Toft (1995), "Graph Coloring Problems"

pub mod generators;
pub mod models;
pub mod scheduler;
pub mod validation;
