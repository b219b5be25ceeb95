//! Conversion from backend wire types to validated domain types.

use crate::domain::{Direction, FlattenedStops, Route, RouteName, Stop};

use super::error::BackendError;
use super::types::{RouteDto, RouteStopsDto, StopDto};

/// A route's stop listing, converted and direction-tagged.
#[derive(Debug, Clone, Default)]
pub struct RouteStops {
    pub outbound: Vec<Stop>,
    pub inbound: Vec<Stop>,
    pub outbound_dest: Option<String>,
    pub inbound_dest: Option<String>,
    /// Backend data-quality warning, passed through to the display.
    pub warning: Option<String>,
}

impl RouteStops {
    /// Build the flattened selection sequence: outbound stops first,
    /// then inbound stops, both in original order.
    pub fn flattened(&self) -> FlattenedStops {
        FlattenedStops::new(self.outbound.clone(), self.inbound.clone())
    }
}

/// Convert the `/api/routes` payload into domain routes.
///
/// An empty route name anywhere in the payload is a backend bug, not
/// a skippable entry; it fails the whole conversion.
pub fn convert_routes(dtos: Vec<RouteDto>) -> Result<Vec<Route>, BackendError> {
    dtos.into_iter()
        .map(|dto| {
            let route_name =
                RouteName::parse(&dto.route_name).map_err(|e| BackendError::InvalidPayload {
                    message: e.to_string(),
                })?;
            Ok(Route::new(route_name, dto.output_name))
        })
        .collect()
}

/// Convert a `/api/route_stops` payload into direction-tagged stops.
pub fn convert_route_stops(dto: RouteStopsDto) -> Result<RouteStops, BackendError> {
    Ok(RouteStops {
        outbound: convert_stops(dto.outbound, Direction::Outbound)?,
        inbound: convert_stops(dto.inbound, Direction::Inbound)?,
        outbound_dest: dto.outbound_dest,
        inbound_dest: dto.inbound_dest,
        warning: dto.warning,
    })
}

fn convert_stops(dtos: Vec<StopDto>, direction: Direction) -> Result<Vec<Stop>, BackendError> {
    dtos.into_iter()
        .map(|dto| {
            if dto.seq == 0 {
                return Err(BackendError::InvalidPayload {
                    message: format!("stop \"{}\" has non-positive seq", dto.name),
                });
            }
            Ok(Stop {
                sequence: dto.seq,
                name: dto.name,
                boarding: dto.boarding,
                alighting: dto.alighting,
                direction,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_dto(seq: u32, name: &str) -> StopDto {
        StopDto {
            seq,
            name: name.to_string(),
            boarding: 1,
            alighting: 1,
        }
    }

    #[test]
    fn convert_routes_valid() {
        let routes = convert_routes(vec![
            RouteDto {
                route_name: "307".to_string(),
                output_name: "307".to_string(),
            },
            RouteDto {
                route_name: "225區".to_string(),
                output_name: "225區(副)".to_string(),
            },
        ])
        .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[1].route_name.as_str(), "225區");
        assert_eq!(routes[1].output_name, "225區(副)");
    }

    #[test]
    fn convert_routes_rejects_empty_name() {
        let result = convert_routes(vec![RouteDto {
            route_name: "  ".to_string(),
            output_name: "?".to_string(),
        }]);
        assert!(matches!(result, Err(BackendError::InvalidPayload { .. })));
    }

    #[test]
    fn convert_stops_tags_directions() {
        let dto = RouteStopsDto {
            outbound: vec![stop_dto(1, "甲"), stop_dto(2, "乙")],
            inbound: vec![stop_dto(1, "乙")],
            ..Default::default()
        };

        let stops = convert_route_stops(dto).unwrap();
        assert!(stops.outbound.iter().all(|s| s.direction == Direction::Outbound));
        assert!(stops.inbound.iter().all(|s| s.direction == Direction::Inbound));

        let flat = stops.flattened();
        assert_eq!(flat.len(), 3);
        assert_eq!(flat.get(2).unwrap().direction, Direction::Inbound);
    }

    #[test]
    fn convert_stops_rejects_zero_seq() {
        let dto = RouteStopsDto {
            outbound: vec![stop_dto(0, "甲")],
            ..Default::default()
        };
        assert!(matches!(
            convert_route_stops(dto),
            Err(BackendError::InvalidPayload { .. })
        ));
    }
}
