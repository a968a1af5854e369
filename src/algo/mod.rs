//! Read-only statistics queries over the catalogue.

pub mod stats;

pub use stats::{route_stats, stop_stats, RouteStats};
