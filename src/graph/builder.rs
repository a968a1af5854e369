use fixedbitset::FixedBitSet;
use log::debug;
use petgraph::graph::DiGraph;

use super::{StopVertices, TransitEdge, TransitGraph, TransitVertex, VertexKind};
use crate::{Error, Route, RouteId, RoutingConfig, StopId, TransitCatalogue};

/// Compiles the catalogue into the time-expanded routing graph.
///
/// Fails with [`Error::UnknownStop`] when a route lists a stop that was
/// never registered; a missing stop is never fabricated.
pub fn build_transit_graph(
    catalogue: &TransitCatalogue,
    config: RoutingConfig,
) -> Result<TransitGraph, Error> {
    let stop_count = catalogue.stops().len();
    let mut assembler = Assembler {
        catalogue,
        config,
        graph: DiGraph::with_capacity(2 * stop_count, stop_count),
        stop_vertices: Vec::with_capacity(stop_count),
        wait_edge_added: FixedBitSet::with_capacity(stop_count),
    };

    // Arrival first, departure right after it, in catalogue order.
    for stop_id in 0..stop_count {
        let arrival = assembler.graph.add_node(TransitVertex {
            stop: stop_id,
            kind: VertexKind::Arrival,
        });
        let departure = assembler.graph.add_node(TransitVertex {
            stop: stop_id,
            kind: VertexKind::Departure,
        });
        debug_assert_eq!(departure.index(), arrival.index() + 1);
        assembler.stop_vertices.push(StopVertices { arrival, departure });
    }

    for (route_id, route) in catalogue.routes().iter().enumerate() {
        assembler.route_edges(route_id, route)?;
        debug!(
            "Route {}: {} edges so far",
            route.name,
            assembler.graph.edge_count()
        );
    }

    Ok(TransitGraph {
        graph: assembler.graph,
        stop_vertices: assembler.stop_vertices,
    })
}

struct Assembler<'a> {
    catalogue: &'a TransitCatalogue,
    config: RoutingConfig,
    graph: DiGraph<TransitVertex, TransitEdge>,
    stop_vertices: Vec<StopVertices>,
    wait_edge_added: FixedBitSet,
}

impl Assembler<'_> {
    fn route_edges(&mut self, route_id: RouteId, route: &Route) -> Result<(), Error> {
        let names: Vec<&str> = route.stops.iter().map(String::as_str).collect();
        let ids = names
            .iter()
            .map(|&name| self.resolve(name))
            .collect::<Result<Vec<_>, _>>()?;

        self.forward_pass(route_id, &names, &ids);
        if !route.is_roundtrip {
            self.backward_pass(route_id, &names, &ids);
        }
        Ok(())
    }

    /// Forward sweep over the listed sequence: one wait edge per
    /// visited stop, ride edges from each position to every later one.
    fn forward_pass(&mut self, route_id: RouteId, names: &[&str], ids: &[StopId]) {
        for i in 0..ids.len() {
            self.wait_edge(ids[i]);
            let mut metres = 0u32;
            for j in i + 1..ids.len() {
                metres += self
                    .catalogue
                    .road_distance(names[j - 1], names[j])
                    .unwrap_or(0);
                self.ride_edge(route_id, ids[i], ids[j], metres);
            }
        }
    }

    /// Mirrored sweep for a back-and-forth route, using the distances
    /// measured against the listed direction. A separate sweep rather
    /// than one pass over the full mirrored traversal: a single ride
    /// never continues through the turn-around stop.
    fn backward_pass(&mut self, route_id: RouteId, names: &[&str], ids: &[StopId]) {
        for i in (0..ids.len()).rev() {
            let mut metres = 0u32;
            for j in (0..i).rev() {
                metres += self
                    .catalogue
                    .road_distance(names[j + 1], names[j])
                    .unwrap_or(0);
                self.ride_edge(route_id, ids[i], ids[j], metres);
            }
        }
    }

    /// Adds the wait edge of a stop once, no matter how many routes or
    /// positions visit it.
    fn wait_edge(&mut self, stop: StopId) {
        if self.wait_edge_added.contains(stop) {
            return;
        }
        self.wait_edge_added.insert(stop);
        let StopVertices { arrival, departure } = self.stop_vertices[stop];
        self.graph.add_edge(
            arrival,
            departure,
            TransitEdge {
                time: f64::from(self.config.wait_time),
                route: None,
            },
        );
    }

    fn ride_edge(&mut self, route_id: RouteId, from: StopId, to: StopId, metres: u32) {
        self.graph.add_edge(
            self.stop_vertices[from].departure,
            self.stop_vertices[to].arrival,
            TransitEdge {
                time: f64::from(metres) / self.config.velocity,
                route: Some(route_id),
            },
        );
    }

    fn resolve(&self, name: &str) -> Result<StopId, Error> {
        self.catalogue
            .stop_id(name)
            .ok_or_else(|| Error::UnknownStop(name.to_string()))
    }
}
