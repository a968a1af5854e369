//! JSON document interface.
//!
//! A document carries routing settings, base requests that populate the
//! catalogue, and stat requests answered against the built model, in
//! this shape:
//!
//! ```json
//! {
//!   "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
//!   "base_requests": [
//!     {"type": "Stop", "name": "...", "latitude": 0.0, "longitude": 0.0,
//!      "road_distances": {"other": 1200}},
//!     {"type": "Bus", "name": "...", "stops": ["..."], "is_roundtrip": true}
//!   ],
//!   "stat_requests": [
//!     {"id": 1, "type": "Bus", "name": "..."},
//!     {"id": 2, "type": "Stop", "name": "..."},
//!     {"id": 3, "type": "Route", "from": "...", "to": "..."}
//!   ]
//! }
//! ```

pub mod document;

pub use document::{
    answer_stat_requests, apply_base_requests, process_document, BaseRequest, RoutingSettings,
    StatRequest, TransitDocument,
};
