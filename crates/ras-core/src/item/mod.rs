pub mod base;
pub mod priority;
pub mod status;
pub mod taxonomy;
pub mod wire;

pub use base::{collections_content_eq, RiskItem};
pub use priority::Priority;
pub use status::{advance_status, Status};
pub use taxonomy::{Area, CostRange, LegalRisk, Urgency};
pub use wire::WireEnum;
