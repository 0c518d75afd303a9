//! # ras-matrix
//!
//! Maps risk items onto the urgency (x) / cost (y) triage matrix.
//! Urgency is an ordinal lookup, cost a log10 scale; both axes get a small
//! deterministic jitter so coincident items stay distinguishable, then are
//! clamped away from the plot border.

pub mod axis;
pub mod engine;
pub mod input;
pub mod jitter;
pub mod marker;
pub mod point;

pub use engine::MatrixEngine;
pub use input::PlotInput;
pub use point::MatrixPoint;
