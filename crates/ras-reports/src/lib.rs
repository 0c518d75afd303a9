//! # ras-reports
//!
//! Selects the rows and totals each report needs from a collection snapshot.
//! Rendering the rows into a document is left to the caller.

pub mod kind;
pub mod rows;
pub mod selection;

pub use kind::ReportKind;
pub use rows::{PlanningRow, PriorityResolution, PriorityResolutionRow, SummaryRow};
pub use selection::{planning_rows, priority_resolution, select, summary_rows, ReportSelection};
