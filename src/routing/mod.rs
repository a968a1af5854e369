//! Shortest-path search and itinerary reconstruction.

pub mod dijkstra;
pub mod itinerary;

pub use dijkstra::{dijkstra_path, TracedPath};
pub use itinerary::{find_itinerary, Itinerary, ItineraryLeg};
