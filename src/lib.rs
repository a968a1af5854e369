//! Transit catalogue with a time-expanded routing graph.
//!
//! The crate keeps a registry of named stops, routes and measured road
//! distances ([`TransitCatalogue`]), compiles it once into a weighted
//! directed graph that separates waiting at a stop from riding a vehicle
//! ([`graph`]), and answers statistics and fastest-itinerary queries
//! against the immutable result ([`algo`], [`routing`]).
//!
//! [`TransitModel`] is the facade that enforces the phase order:
//! populate the catalogue, build the graph exactly once, then query.

pub mod algo;
pub mod error;
pub mod graph;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use algo::{route_stats, stop_stats, RouteStats};
pub use error::Error;
pub use graph::{TransitGraph, VertexKind};
pub use loading::process_document;
pub use model::{Route, RoutingConfig, Stop, TransitCatalogue, TransitModel};
pub use routing::{find_itinerary, Itinerary, ItineraryLeg};

/// Index of a stop in catalogue insertion order.
pub type StopId = usize;
/// Index of a route in catalogue insertion order.
pub type RouteId = usize;
/// Travel time in minutes.
pub type Time = f64;
