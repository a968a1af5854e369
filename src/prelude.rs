// Re-export key components
pub use crate::algo::{route_stats, stop_stats, RouteStats};
pub use crate::error::Error;
pub use crate::graph::{build_transit_graph, TransitGraph, VertexKind};
pub use crate::loading::process_document;
pub use crate::model::{Route, RoutingConfig, Stop, TransitCatalogue, TransitModel};
pub use crate::routing::{dijkstra_path, find_itinerary, Itinerary, ItineraryLeg};

// Core index types
pub use crate::RouteId;
pub use crate::StopId;
pub use crate::Time; // minutes
