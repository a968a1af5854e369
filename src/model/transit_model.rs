use geo::Point;
use log::info;

use crate::algo::{route_stats, stop_stats, RouteStats};
use crate::graph::{build_transit_graph, TransitGraph};
use crate::routing::{find_itinerary, Itinerary};
use crate::{Error, RoutingConfig, TransitCatalogue};

/// Owning facade over the catalogue and its compiled routing graph.
///
/// Enforces the phase order required by the query engine: populate the
/// catalogue, build the graph exactly once, then serve read-only
/// queries. Mutation after the build and a second build are rejected.
#[derive(Debug, Default)]
pub struct TransitModel {
    catalogue: TransitCatalogue,
    graph: Option<TransitGraph>,
}

impl TransitModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalogue(&self) -> &TransitCatalogue {
        &self.catalogue
    }

    pub fn graph(&self) -> Option<&TransitGraph> {
        self.graph.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.graph.is_some()
    }

    /// Registers or moves a stop and records its measured road
    /// distances to other stops, which need not be registered yet.
    pub fn add_stop(
        &mut self,
        name: &str,
        lat: f64,
        lon: f64,
        road_distances: &[(&str, u32)],
    ) -> Result<(), Error> {
        self.ensure_mutable()?;
        self.catalogue.add_stop(name, Point::new(lon, lat));
        for &(other, metres) in road_distances {
            self.catalogue.add_road_distance(name, other, metres);
        }
        Ok(())
    }

    pub fn add_route(
        &mut self,
        name: &str,
        stops: Vec<String>,
        is_roundtrip: bool,
    ) -> Result<(), Error> {
        self.ensure_mutable()?;
        self.catalogue.add_route(name, stops, is_roundtrip);
        Ok(())
    }

    /// Compiles the catalogue into the time-expanded routing graph.
    /// Must be called exactly once, after all stops and routes are
    /// final.
    pub fn build_graph(&mut self, config: RoutingConfig) -> Result<(), Error> {
        if self.graph.is_some() {
            return Err(Error::GraphAlreadyBuilt);
        }
        config.validate()?;
        let graph = build_transit_graph(&self.catalogue, config)?;
        info!(
            "Routing graph built: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        self.graph = Some(graph);
        Ok(())
    }

    /// Statistics for a route name, `Ok(None)` when the route is
    /// unknown. Fails if the route lists a stop that was never
    /// registered.
    pub fn route_stats(&self, name: &str) -> Result<Option<RouteStats>, Error> {
        route_stats(&self.catalogue, name)
    }

    /// Serving routes for a stop, `None` when the stop was never
    /// registered. A registered stop served by no route yields an
    /// empty list.
    pub fn stop_stats(&self, name: &str) -> Option<Vec<String>> {
        stop_stats(&self.catalogue, name)
    }

    /// Fastest itinerary between two registered stops, `Ok(None)` when
    /// they are not connected.
    pub fn find_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, Error> {
        let graph = self.graph.as_ref().ok_or(Error::GraphNotBuilt)?;
        find_itinerary(&self.catalogue, graph, from, to)
    }

    fn ensure_mutable(&self) -> Result<(), Error> {
        if self.graph.is_some() {
            Err(Error::CatalogueFrozen)
        } else {
            Ok(())
        }
    }
}
