//! Wire types for the fare backend API.
//!
//! Field names and casings here are the backend's, not ours; keep them
//! exactly as documented or requests will silently stop matching.

use serde::{Deserialize, Serialize};

/// One route entry from `GET /api/routes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    #[serde(rename = "RouteName")]
    pub route_name: String,

    #[serde(rename = "OutputName")]
    pub output_name: String,
}

/// One stop entry within a `GET /api/route_stops` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub seq: u32,
    pub name: String,
    pub boarding: u32,
    pub alighting: u32,
}

/// Response body of `GET /api/route_stops`.
///
/// Either direction list may be empty (loop routes report a single
/// side). The destination headers and the warning are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteStopsDto {
    #[serde(default)]
    pub outbound: Vec<StopDto>,

    #[serde(default)]
    pub inbound: Vec<StopDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_dest: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_dest: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// One trip entry for `POST /type_calculate_fare`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeTripDto {
    pub bus_type: String,
    pub trip_count: u32,
}

/// Request body of `POST /type_calculate_fare`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeFareRequestDto {
    pub fare_type: String,
    pub bus_trips: Vec<TypeTripDto>,
}

/// One trip entry for `POST /line_calculate_fare`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineTripDto {
    pub line_name: String,
    pub trip_count: u32,
}

/// Request body of `POST /line_calculate_fare`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineFareRequestDto {
    pub fare_type: String,
    pub bus_trips: Vec<LineTripDto>,
}

/// Success body of both fare calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareResponseDto {
    pub total_fare: f64,
}

/// Error body the backend uses on every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBodyDto {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_dto_uses_backend_casing() {
        let json = r#"{"RouteName": "225區", "OutputName": "225區(副)"}"#;
        let dto: RouteDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.route_name, "225區");
        assert_eq!(dto.output_name, "225區(副)");
    }

    #[test]
    fn route_stops_optional_fields_default() {
        let json = r#"{"outbound": [{"seq": 1, "name": "甲站", "boarding": 1, "alighting": 1}]}"#;
        let dto: RouteStopsDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.outbound.len(), 1);
        assert!(dto.inbound.is_empty());
        assert!(dto.outbound_dest.is_none());
        assert!(dto.warning.is_none());
    }

    #[test]
    fn route_stops_full_shape() {
        let json = r#"{
            "outbound": [{"seq": 1, "name": "甲站", "boarding": 1, "alighting": 1}],
            "inbound": [{"seq": 1, "name": "乙站", "boarding": 2, "alighting": 2}],
            "outbound_dest": "乙地",
            "inbound_dest": "甲地",
            "warning": "此路線分段資料尚未校對"
        }"#;
        let dto: RouteStopsDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.outbound_dest.as_deref(), Some("乙地"));
        assert_eq!(dto.inbound_dest.as_deref(), Some("甲地"));
        assert!(dto.warning.is_some());
    }

    #[test]
    fn type_fare_request_shape() {
        let req = TypeFareRequestDto {
            fare_type: "full_fare".to_string(),
            bus_trips: vec![TypeTripDto {
                bus_type: "幹線公車".to_string(),
                trip_count: 2,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["fare_type"], "full_fare");
        assert_eq!(json["bus_trips"][0]["bus_type"], "幹線公車");
        assert_eq!(json["bus_trips"][0]["trip_count"], 2);
    }

    #[test]
    fn line_fare_request_shape() {
        let req = LineFareRequestDto {
            fare_type: "student_fare".to_string(),
            bus_trips: vec![LineTripDto {
                line_name: "307".to_string(),
                trip_count: 1,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["bus_trips"][0]["line_name"], "307");
    }

    #[test]
    fn fare_response_accepts_numbers() {
        let dto: FareResponseDto = serde_json::from_str(r#"{"total_fare": 45}"#).unwrap();
        assert_eq!(dto.total_fare, 45.0);
    }
}
