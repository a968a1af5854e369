//! Time-expanded routing graph compiled from the catalogue.
//!
//! Every stop is split into an arrival and a departure vertex; the wait
//! edge between them carries the fixed boarding delay, and ride edges
//! run from one stop's departure vertex to another stop's arrival
//! vertex for every pair a single vehicle covers without reboarding.

pub mod builder;

pub use builder::build_transit_graph;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::{RouteId, StopId, Time};

/// Which of a stop's two vertices this is.
///
/// Paths enter a stop at its arrival vertex and leave from its
/// departure vertex. The kind is stored explicitly; the builder still
/// keeps departure = arrival + 1 in id space, but nothing reads ids to
/// classify a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    Arrival,
    Departure,
}

/// A vertex of the time-expanded graph.
#[derive(Debug, Clone, Copy)]
pub struct TransitVertex {
    pub stop: StopId,
    pub kind: VertexKind,
}

/// A weighted edge of the time-expanded graph. Ride edges carry the
/// route that generated them; wait edges carry none. Distinct routes
/// over the same stop pair produce separate parallel edges.
#[derive(Debug, Clone, Copy)]
pub struct TransitEdge {
    /// Traversal time in minutes.
    pub time: Time,
    pub route: Option<RouteId>,
}

/// Arrival/departure vertex pair of one stop.
#[derive(Debug, Clone, Copy)]
pub struct StopVertices {
    pub arrival: NodeIndex,
    pub departure: NodeIndex,
}

/// The compiled graph plus the stop-to-vertex index.
///
/// Immutable once built; queries borrow it read-only.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    pub(crate) graph: DiGraph<TransitVertex, TransitEdge>,
    pub(crate) stop_vertices: Vec<StopVertices>,
}

impl TransitGraph {
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertex pair of a stop id.
    pub fn vertices_of(&self, stop: StopId) -> StopVertices {
        self.stop_vertices[stop]
    }

    /// The underlying weighted directed graph.
    pub fn inner(&self) -> &DiGraph<TransitVertex, TransitEdge> {
        &self.graph
    }
}
