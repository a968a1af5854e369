use geo::Point;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A named stop with its geographic position.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: String,
    /// x = longitude, y = latitude, in degrees.
    pub geometry: Point<f64>,
}

/// A named route over the catalogue's stops.
///
/// `stops` is the raw listed sequence. A round-trip route follows the
/// sequence as-is; any other route runs to the last listed stop and
/// services the same stops on the way back.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

impl Route {
    /// The full ordered stop sequence a vehicle actually follows: the
    /// listed sequence, mirrored back through its predecessors for a
    /// back-and-forth route.
    pub fn effective_traversal(&self) -> impl Iterator<Item = &str> + '_ {
        let mirrored = if self.is_roundtrip {
            &[] as &[String]
        } else {
            &self.stops[..self.stops.len().saturating_sub(1)]
        };
        self.stops.iter().chain(mirrored.iter().rev()).map(String::as_str)
    }

    /// Number of stops on the effective traversal.
    pub fn stop_count(&self) -> usize {
        if self.is_roundtrip {
            self.stops.len()
        } else {
            (2 * self.stops.len()).saturating_sub(1)
        }
    }
}

/// Routing settings applied when the time-expanded graph is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Fixed boarding delay at every stop, in minutes.
    pub wait_time: u32,
    /// Vehicle speed, in metres per minute.
    pub velocity: f64,
}

impl RoutingConfig {
    /// Settings with the vehicle speed given in km/h, the unit used by
    /// input documents.
    pub fn from_kmh(wait_time: u32, velocity_kmh: f64) -> Self {
        Self {
            wait_time,
            velocity: velocity_kmh * 1000.0 / 60.0,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !self.velocity.is_finite() || self.velocity <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "velocity must be positive, got {}",
                self.velocity
            )));
        }
        Ok(())
    }
}
