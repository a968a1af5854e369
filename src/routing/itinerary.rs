use itertools::Itertools;
use serde::Serialize;

use super::dijkstra::dijkstra_path;
use crate::graph::{TransitGraph, VertexKind};
use crate::{Error, Route, Time, TransitCatalogue};

/// One leg of a computed itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItineraryLeg {
    /// Waiting at a stop for the next departure.
    Wait { stop: String, time: Time },
    /// Riding one vehicle of a route across `span_count` stops.
    Ride {
        route: String,
        span_count: usize,
        time: Time,
    },
}

/// A computed itinerary: ordered wait/ride legs and the summed time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub legs: Vec<ItineraryLeg>,
    pub total_time: Time,
}

/// Fastest itinerary between two registered stops, `Ok(None)` when no
/// connection exists. Unregistered stop names are a caller fault, not a
/// "not found" result.
pub fn find_itinerary(
    catalogue: &TransitCatalogue,
    graph: &TransitGraph,
    from: &str,
    to: &str,
) -> Result<Option<Itinerary>, Error> {
    let from_id = catalogue
        .stop_id(from)
        .ok_or_else(|| Error::UnknownStop(from.to_string()))?;
    let to_id = catalogue
        .stop_id(to)
        .ok_or_else(|| Error::UnknownStop(to.to_string()))?;

    let source = graph.vertices_of(from_id).arrival;
    let target = graph.vertices_of(to_id).arrival;
    let Some(path) = dijkstra_path(&graph.graph, source, target, |edge| edge.time) else {
        return Ok(None);
    };

    let mut legs = Vec::with_capacity(path.edges.len());
    for &edge_id in &path.edges {
        let Some((source, target)) = graph.graph.edge_endpoints(edge_id) else {
            unreachable!("path edge missing from the graph")
        };
        let edge = &graph.graph[edge_id];

        let leg = match graph.graph[source].kind {
            VertexKind::Arrival => ItineraryLeg::Wait {
                stop: catalogue.stops()[graph.graph[source].stop].name.clone(),
                time: edge.time,
            },
            VertexKind::Departure => {
                let Some(route_id) = edge.route else {
                    unreachable!("ride edge without an owning route")
                };
                let route = &catalogue.routes()[route_id];
                let boarded = catalogue.stops()[graph.graph[source].stop].name.as_str();
                let alighted = catalogue.stops()[graph.graph[target].stop].name.as_str();
                ItineraryLeg::Ride {
                    route: route.name.clone(),
                    span_count: span_count(route, boarded, alighted),
                    time: edge.time,
                }
            }
        };
        legs.push(leg);
    }

    Ok(Some(Itinerary {
        legs,
        total_time: path.total_cost,
    }))
}

/// Stops traveled by a ride from `from` to `to` on `route`: the
/// shortest forward hop between any position of `from` and any not
/// earlier position of `to` on the effective traversal. A route may
/// visit either stop several times; boarding and alighting at the same
/// stop counts as zero spans.
pub(crate) fn span_count(route: &Route, from: &str, to: &str) -> usize {
    if from == to {
        return 0;
    }

    let mut from_positions = Vec::new();
    let mut to_positions = Vec::new();
    for (position, stop) in route.effective_traversal().enumerate() {
        if stop == from {
            from_positions.push(position);
        }
        if stop == to {
            to_positions.push(position);
        }
    }

    from_positions
        .iter()
        .cartesian_product(&to_positions)
        .filter(|&(&a, &b)| b >= a)
        .map(|(&a, &b)| b - a)
        .min()
        .unwrap_or(0)
}
