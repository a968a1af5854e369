use std::collections::BTreeSet;

use geo::Point;
use hashbrown::HashMap;

use crate::{Route, RouteId, Stop, StopId};

/// In-memory registry of stops, routes and measured road distances.
///
/// The catalogue is append/overwrite only: re-registering a name
/// replaces its payload, nothing is ever removed. Road distances are
/// directed; recording one direction defaults the opposite direction to
/// the same value until an explicit entry overrides it. Pairs never
/// recorded stay absent and contribute zero wherever distances are
/// summed — compatibility behavior, not an error.
#[derive(Debug, Clone, Default)]
pub struct TransitCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,
    routes: Vec<Route>,
    route_index: HashMap<String, RouteId>,
    /// Routes serving each stop name. Keyed by name rather than id:
    /// a route may list a stop before the stop itself is registered.
    stop_routes: HashMap<String, BTreeSet<String>>,
    /// Directed measured road distance in metres, `from -> to -> metres`.
    distances: HashMap<String, HashMap<String, u32>>,
}

impl TransitCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stop or moves an already registered one. Routes that
    /// reference the name keep referencing it.
    pub fn add_stop(&mut self, name: &str, coordinate: Point<f64>) {
        match self.stop_index.get(name) {
            Some(&id) => self.stops[id].geometry = coordinate,
            None => {
                let id = self.stops.len();
                self.stops.push(Stop {
                    name: name.to_string(),
                    geometry: coordinate,
                });
                self.stop_index.insert(name.to_string(), id);
            }
        }
    }

    /// Records the measured road distance from `from` to `to`. The
    /// opposite direction defaults to the same value unless it already
    /// has an entry of its own.
    pub fn add_road_distance(&mut self, from: &str, to: &str, metres: u32) {
        self.distances
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), metres);
        self.distances
            .entry(to.to_string())
            .or_default()
            .entry(from.to_string())
            .or_insert(metres);
    }

    /// Registers a route. The last registration for a name wins, but a
    /// stop once listed keeps the route in its serving set.
    pub fn add_route(&mut self, name: &str, stops: Vec<String>, is_roundtrip: bool) {
        for stop in &stops {
            self.stop_routes
                .entry(stop.clone())
                .or_default()
                .insert(name.to_string());
        }
        let route = Route {
            name: name.to_string(),
            stops,
            is_roundtrip,
        };
        match self.route_index.get(name) {
            Some(&id) => self.routes[id] = route,
            None => {
                let id = self.routes.len();
                self.routes.push(route);
                self.route_index.insert(name.to_string(), id);
            }
        }
    }

    /// All stops in registration order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.route_index.get(name).map(|&id| &self.routes[id])
    }

    /// Measured road distance from `from` to `to`, if any was recorded.
    pub fn road_distance(&self, from: &str, to: &str) -> Option<u32> {
        self.distances.get(from).and_then(|m| m.get(to)).copied()
    }

    /// Names of routes listing a stop name, sorted and duplicate free.
    pub fn routes_for_stop(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.stop_routes.get(name)
    }
}
