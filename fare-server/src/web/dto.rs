//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, Stop, StopKey};

/// Request to search routes for the type-ahead list.
#[derive(Debug, Deserialize)]
pub struct RouteSearchRequest {
    /// Free-text query; empty or missing matches every route
    #[serde(default)]
    pub q: String,

    /// Optional cap on the number of results
    pub limit: Option<usize>,
}

/// A route in search results.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Canonical key, used for follow-up requests
    pub route_name: String,

    /// Human-displayed label
    pub output_name: String,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            route_name: route.route_name.as_str().to_string(),
            output_name: route.output_name.clone(),
        }
    }
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    pub routes: Vec<RouteResult>,
}

/// Query for a route's stop listing.
#[derive(Debug, Deserialize)]
pub struct RouteStopsRequest {
    pub route_name: String,
}

/// A stop in a stop listing.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Stable selection key
    pub key: StopKey,

    /// Position along the direction
    pub seq: u32,

    /// Display name
    pub name: String,

    /// Boarding segment number
    pub boarding: u32,

    /// Alighting segment number
    pub alighting: u32,

    /// Pass-through entry, not an actual passenger stop
    pub phantom: bool,
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            key: stop.key(),
            seq: stop.sequence,
            name: stop.name.clone(),
            boarding: stop.boarding,
            alighting: stop.alighting,
            phantom: stop.is_phantom(),
        }
    }
}

/// Response for a route's stop listing.
#[derive(Debug, Serialize)]
pub struct RouteStopsResponse {
    pub outbound: Vec<StopResult>,
    pub inbound: Vec<StopResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_dest: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_dest: Option<String>,

    /// Backend data-quality warning, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Request to compute trip segments between two stops.
///
/// Stops are addressed by their stable (direction, sequence) key, not
/// by flattened index; indices have no meaning across reloads.
#[derive(Debug, Deserialize)]
pub struct SegmentsRequest {
    pub route_name: String,
    pub start: StopKey,
    pub end: StopKey,
}

/// Response with the derived segment count.
#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub segments: u32,
}

/// One trip entry of a by-type fare request.
#[derive(Debug, Deserialize)]
pub struct TypeTrip {
    pub bus_type: String,
    pub trip_count: u32,
}

/// Request for the by-type fare calculator.
#[derive(Debug, Deserialize)]
pub struct TypeFareRequest {
    pub fare_type: String,
    pub bus_trips: Vec<TypeTrip>,
}

/// One trip entry of a by-line fare request.
#[derive(Debug, Deserialize)]
pub struct LineTrip {
    pub line_name: String,
    pub trip_count: u32,
}

/// Request for the by-line fare calculator.
#[derive(Debug, Deserialize)]
pub struct LineFareRequest {
    pub fare_type: String,
    pub bus_trips: Vec<LineTrip>,
}

/// Response of both fare calculators.
#[derive(Debug, Serialize)]
pub struct FareResponse {
    pub total_fare: f64,
}

/// Backend liveness as seen from this server.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub backend: &'static str,
}

/// Error body for every non-2xx response of this server.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    #[test]
    fn segments_request_shape() {
        let json = r#"{
            "route_name": "307",
            "start": {"direction": "outbound", "sequence": 2},
            "end": {"direction": "inbound", "sequence": 5}
        }"#;
        let req: SegmentsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.route_name, "307");
        assert_eq!(req.start.direction, Direction::Outbound);
        assert_eq!(req.end.sequence, 5);
    }

    #[test]
    fn search_request_defaults_to_empty_query() {
        let req: RouteSearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.q, "");
        assert!(req.limit.is_none());
    }

    #[test]
    fn stop_result_carries_phantom_flag() {
        let stop = Stop {
            sequence: 3,
            name: "重陽橋(虛擬站不停靠)".to_string(),
            boarding: 1,
            alighting: 1,
            direction: Direction::Outbound,
        };
        let result = StopResult::from_stop(&stop);
        assert!(result.phantom);
        assert_eq!(result.key.sequence, 3);
    }
}
