//! Time-slot assignment domain models.
//!
//! Provides the conflict graph (the problem) and the coloring (the
//! solution).
//!
//! # Domain Mappings
//!
//! | slot-coloring | Course Timetabling | Exams | Register Allocation |
//! |---------------|--------------------|-------|---------------------|
//! | Vertex | Course | Exam | Virtual register |
//! | Edge | Shared students | Shared candidates | Overlapping live ranges |
//! | Color | Time slot | Exam period | Physical register |

mod coloring;
mod graph;

pub use coloring::{color_count, Coloring};
pub use graph::Graph;
