//! # ras-core
//!
//! Foundation crate for the risk register engine.
//! Defines the risk item model, validation, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod models;
pub mod traits;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use config::RasConfig;
pub use errors::{RasError, RasResult};
pub use item::{
    advance_status, collections_content_eq, Area, CostRange, LegalRisk, Priority, RiskItem,
    Status, Urgency, WireEnum,
};
pub use models::DashboardMetrics;
