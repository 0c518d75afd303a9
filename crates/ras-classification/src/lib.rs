//! # ras-classification
//!
//! Pure functions partitioning a collection into triage buckets and deriving
//! the summary metrics. Nothing here is cached; every call reads the slice it
//! is given.

pub mod deadlines;
pub mod engine;
pub mod filter;
pub mod metrics;
pub mod quadrants;

pub use engine::{ClassificationEngine, DashboardView};
pub use filter::BoardFilter;
pub use metrics::{AreaBudget, StatusSlice};
pub use quadrants::{Quadrant, QuadrantBuckets};
