//! Data model: the stop/route registry and the owning model facade.

pub mod catalogue;
pub mod transit_model;
pub mod types;

pub use catalogue::TransitCatalogue;
pub use transit_model::TransitModel;
pub use types::{Route, RoutingConfig, Stop};
