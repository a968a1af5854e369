use std::collections::BTreeMap;

use log::info;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::routing::ItineraryLeg;
use crate::{Error, RoutingConfig, TransitModel};

/// Routing settings as they appear on the wire: velocity in km/h.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RoutingSettings {
    pub bus_wait_time: u32,
    pub bus_velocity: f64,
}

impl From<RoutingSettings> for RoutingConfig {
    fn from(settings: RoutingSettings) -> Self {
        RoutingConfig::from_kmh(settings.bus_wait_time, settings.bus_velocity)
    }
}

/// A request that populates the catalogue.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// A read-only query against the built model.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: u64, name: String },
    Stop { id: u64, name: String },
    Route { id: u64, from: String, to: String },
}

/// A complete input document.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitDocument {
    pub routing_settings: RoutingSettings,
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Applies base requests to the model in document order.
pub fn apply_base_requests(
    model: &mut TransitModel,
    requests: &[BaseRequest],
) -> Result<(), Error> {
    for request in requests {
        match request {
            BaseRequest::Stop {
                name,
                latitude,
                longitude,
                road_distances,
            } => {
                let roads: Vec<(&str, u32)> = road_distances
                    .iter()
                    .map(|(other, &metres)| (other.as_str(), metres))
                    .collect();
                model.add_stop(name, *latitude, *longitude, &roads)?;
            }
            BaseRequest::Bus {
                name,
                stops,
                is_roundtrip,
            } => {
                model.add_route(name, stops.clone(), *is_roundtrip)?;
            }
        }
    }
    Ok(())
}

/// Answers stat requests against the built model, preserving document
/// order. Not-found results become `error_message` responses; naming a
/// stop that was never registered is a document fault and fails the
/// whole batch.
pub fn answer_stat_requests(
    model: &TransitModel,
    requests: &[StatRequest],
) -> Result<Vec<Value>, Error> {
    requests.iter().map(|request| answer(model, request)).collect()
}

/// Runs a whole document: populate, build once, query. Returns the
/// response array serialized in request order.
pub fn process_document(input: &str) -> Result<String, Error> {
    let document: TransitDocument = serde_json::from_str(input)?;

    let mut model = TransitModel::new();
    apply_base_requests(&mut model, &document.base_requests)?;
    info!(
        "Catalogue loaded: {} stops, {} routes",
        model.catalogue().stops().len(),
        model.catalogue().routes().len()
    );
    model.build_graph(document.routing_settings.into())?;

    let responses = answer_stat_requests(&model, &document.stat_requests)?;
    Ok(serde_json::to_string_pretty(&Value::Array(responses))?)
}

fn answer(model: &TransitModel, request: &StatRequest) -> Result<Value, Error> {
    match request {
        StatRequest::Bus { id, name } => Ok(match model.route_stats(name)? {
            Some(stats) => json!({
                "request_id": id,
                "curvature": stats.curvature,
                "route_length": stats.route_length,
                "stop_count": stats.stop_count,
                "unique_stop_count": stats.unique_stop_count,
            }),
            None => not_found(*id),
        }),
        StatRequest::Stop { id, name } => Ok(match model.stop_stats(name) {
            Some(buses) => json!({ "request_id": id, "buses": buses }),
            None => not_found(*id),
        }),
        StatRequest::Route { id, from, to } => Ok(match model.find_route(from, to)? {
            Some(itinerary) => json!({
                "request_id": id,
                "total_time": itinerary.total_time,
                "items": itinerary.legs.iter().map(leg_to_value).collect::<Vec<_>>(),
            }),
            None => not_found(*id),
        }),
    }
}

fn leg_to_value(leg: &ItineraryLeg) -> Value {
    match leg {
        ItineraryLeg::Wait { stop, time } => json!({
            "type": "Wait",
            "stop_name": stop,
            "time": time,
        }),
        ItineraryLeg::Ride {
            route,
            span_count,
            time,
        } => json!({
            "type": "Bus",
            "bus": route,
            "span_count": span_count,
            "time": time,
        }),
    }
}

fn not_found(id: u64) -> Value {
    json!({ "request_id": id, "error_message": "not found" })
}
