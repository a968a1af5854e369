use geo::Point;
use itertools::Itertools;
use serde::Serialize;

use crate::{Error, Route, TransitCatalogue};

/// Mean Earth radius, metres.
const EARTH_RADIUS: f64 = 6_371_000.0;

/// Aggregate statistics of one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStats {
    /// Stops on the effective traversal, repeats included.
    pub stop_count: usize,
    /// Distinct stop names on the listed sequence.
    pub unique_stop_count: usize,
    /// Measured road length of the effective traversal, metres.
    /// Unmeasured legs contribute zero.
    pub route_length: u32,
    /// Ratio of the measured length to the great-circle length.
    pub curvature: f64,
}

/// Statistics for a route name, `Ok(None)` when the route is unknown.
/// Fails if the route lists a stop that was never registered: the
/// great-circle length needs its coordinate.
pub fn route_stats(catalogue: &TransitCatalogue, name: &str) -> Result<Option<RouteStats>, Error> {
    let Some(route) = catalogue.route(name) else {
        return Ok(None);
    };

    let route_length = real_length(catalogue, route);
    let geo_length = geo_length(catalogue, route)?;

    Ok(Some(RouteStats {
        stop_count: route.stop_count(),
        unique_stop_count: route.stops.iter().unique().count(),
        route_length,
        curvature: f64::from(route_length) / geo_length,
    }))
}

/// Serving routes for a stop name, sorted and duplicate free. `None`
/// when the stop was never registered; an empty list when it is
/// registered but no route lists it.
pub fn stop_stats(catalogue: &TransitCatalogue, name: &str) -> Option<Vec<String>> {
    catalogue.stop_id(name)?;
    Some(
        catalogue
            .routes_for_stop(name)
            .map(|routes| routes.iter().cloned().collect())
            .unwrap_or_default(),
    )
}

fn real_length(catalogue: &TransitCatalogue, route: &Route) -> u32 {
    route
        .effective_traversal()
        .tuple_windows()
        .map(|(a, b)| catalogue.road_distance(a, b).unwrap_or(0))
        .sum()
}

fn geo_length(catalogue: &TransitCatalogue, route: &Route) -> Result<f64, Error> {
    let mut total = 0.0;
    for (a, b) in route.effective_traversal().tuple_windows() {
        total += great_circle_distance(stop_point(catalogue, a)?, stop_point(catalogue, b)?);
    }
    Ok(total)
}

fn stop_point(catalogue: &TransitCatalogue, name: &str) -> Result<Point<f64>, Error> {
    catalogue
        .stop_id(name)
        .map(|id| catalogue.stops()[id].geometry)
        .ok_or_else(|| Error::UnknownStop(name.to_string()))
}

/// Great-circle distance by the spherical law of cosines.
fn great_circle_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let (lat_a, lon_a) = (a.y().to_radians(), a.x().to_radians());
    let (lat_b, lon_b) = (b.y().to_radians(), b.x().to_radians());
    let cos_angle =
        lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * (lon_a - lon_b).abs().cos();
    // Rounding may push the cosine just outside [-1, 1].
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use geo::Point;

    use super::*;

    #[test]
    fn great_circle_distance_matches_reference_values() {
        // One degree of longitude on the equator.
        let d = great_circle_distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_approx_eq!(d, 111_194.926_644_547_64, 1e-6);

        // Two neighbouring stops of the reference data set.
        let d = great_circle_distance(
            Point::new(37.208_29, 55.611_087),
            Point::new(37.209_755, 55.595_884),
        );
        assert_approx_eq!(d, 1_692.999_398_767_086_4, 1e-6);
    }

    #[test]
    fn great_circle_distance_of_a_point_to_itself_is_zero() {
        let p = Point::new(37.0, 55.0);
        assert_eq!(great_circle_distance(p, p), 0.0);
    }

    #[test]
    fn route_length_follows_the_mirrored_traversal() {
        let mut catalogue = TransitCatalogue::new();
        catalogue.add_stop("a", Point::new(37.0, 55.0));
        catalogue.add_stop("b", Point::new(37.1, 55.1));
        catalogue.add_road_distance("a", "b", 1000);
        catalogue.add_road_distance("b", "a", 900);
        catalogue.add_route("1", vec!["a".to_string(), "b".to_string()], false);

        let stats = route_stats(&catalogue, "1").unwrap().unwrap();
        assert_eq!(stats.stop_count, 3);
        assert_eq!(stats.unique_stop_count, 2);
        assert_eq!(stats.route_length, 1900);
    }

    #[test]
    fn unknown_route_is_none() {
        let catalogue = TransitCatalogue::new();
        assert!(route_stats(&catalogue, "751").unwrap().is_none());
    }

    #[test]
    fn route_with_an_unregistered_stop_is_an_error() {
        let mut catalogue = TransitCatalogue::new();
        catalogue.add_stop("a", Point::new(37.0, 55.0));
        catalogue.add_route("1", vec!["a".to_string(), "ghost".to_string()], true);
        assert!(matches!(
            route_stats(&catalogue, "1"),
            Err(Error::UnknownStop(_))
        ));
    }

    #[test]
    fn stop_stats_distinguishes_unknown_from_unserved() {
        let mut catalogue = TransitCatalogue::new();
        catalogue.add_stop("served", Point::new(37.0, 55.0));
        catalogue.add_stop("lonely", Point::new(37.1, 55.1));
        catalogue.add_route("828", vec!["served".to_string()], true);
        catalogue.add_route("256", vec!["served".to_string()], true);

        assert_eq!(
            stop_stats(&catalogue, "served"),
            Some(vec!["256".to_string(), "828".to_string()])
        );
        assert_eq!(stop_stats(&catalogue, "lonely"), Some(vec![]));
        assert_eq!(stop_stats(&catalogue, "nowhere"), None);
    }
}
