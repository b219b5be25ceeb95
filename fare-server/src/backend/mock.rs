//! Mock fare backend for development without network access.
//!
//! Loads a route collection and per-route stop listings from JSON
//! files shaped exactly like the real API's responses, and serves them
//! through the same method signatures as [`super::BackendClient`].

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{Route, RouteName};

use super::convert::{RouteStops, convert_route_stops, convert_routes};
use super::error::BackendError;
use super::types::{RouteDto, RouteStopsDto};

/// Mock backend serving data from a directory.
///
/// Expects `routes.json` (the `/api/routes` array) at the top level
/// and one `stops/{RouteName}.json` file (a `/api/route_stops` object)
/// per route with stop data.
#[derive(Debug, Clone)]
pub struct MockBackend {
    routes: Vec<Route>,
    stops: HashMap<RouteName, RouteStops>,
}

impl MockBackend {
    /// Load mock data from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, BackendError> {
        let data_dir = data_dir.as_ref();

        let routes_json = std::fs::read_to_string(data_dir.join("routes.json")).map_err(|e| {
            BackendError::Api {
                status: 0,
                message: format!("failed to read routes.json: {e}"),
            }
        })?;
        let route_dtos: Vec<RouteDto> =
            serde_json::from_str(&routes_json).map_err(|e| BackendError::Json {
                message: format!("routes.json: {e}"),
            })?;
        let routes = convert_routes(route_dtos)?;

        let mut stops = HashMap::new();
        let stops_dir = data_dir.join("stops");
        if stops_dir.is_dir() {
            let entries = std::fs::read_dir(&stops_dir).map_err(|e| BackendError::Api {
                status: 0,
                message: format!("failed to read stops directory: {e}"),
            })?;

            for entry in entries {
                let path = entry
                    .map_err(|e| BackendError::Api {
                        status: 0,
                        message: format!("failed to read directory entry: {e}"),
                    })?
                    .path();
                if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                    continue;
                }

                // Filename stem is the route name, e.g. "307.json".
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .ok_or_else(|| BackendError::Api {
                        status: 0,
                        message: format!("invalid filename: {path:?}"),
                    })?;
                let route_name =
                    RouteName::parse(name).map_err(|e| BackendError::InvalidPayload {
                        message: format!("{path:?}: {e}"),
                    })?;

                let json = std::fs::read_to_string(&path).map_err(|e| BackendError::Api {
                    status: 0,
                    message: format!("failed to read {path:?}: {e}"),
                })?;
                let dto: RouteStopsDto =
                    serde_json::from_str(&json).map_err(|e| BackendError::Json {
                        message: format!("{path:?}: {e}"),
                    })?;

                stops.insert(route_name, convert_route_stops(dto)?);
            }
        }

        if routes.is_empty() {
            return Err(BackendError::Api {
                status: 0,
                message: format!("no mock routes found in {data_dir:?}"),
            });
        }

        Ok(Self { routes, stops })
    }

    /// Mimics `BackendClient::get_routes`.
    pub async fn get_routes(&self) -> Result<Vec<Route>, BackendError> {
        Ok(self.routes.clone())
    }

    /// Mimics `BackendClient::get_route_stops`.
    pub async fn get_route_stops(&self, route: &RouteName) -> Result<RouteStops, BackendError> {
        self.stops
            .get(route)
            .cloned()
            .ok_or_else(|| BackendError::Api {
                status: 404,
                message: format!("no stop data for route {route}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn load_mock_data() {
        let backend = MockBackend::new("data/mock").unwrap();
        let routes = backend.get_routes().await.unwrap();

        assert!(routes.iter().any(|r| r.route_name.as_str() == "307"));
        assert!(routes.iter().any(|r| r.route_name.as_str() == "225區"));
    }

    #[tokio::test]
    async fn get_stops_for_known_route() {
        let backend = MockBackend::new("data/mock").unwrap();
        let name = RouteName::parse("307").unwrap();

        let stops = backend.get_route_stops(&name).await.unwrap();
        assert!(!stops.outbound.is_empty());
        assert!(!stops.flattened().is_empty());
    }

    #[tokio::test]
    async fn unknown_route_returns_error() {
        let backend = MockBackend::new("data/mock").unwrap();
        let name = RouteName::parse("does-not-exist").unwrap();

        let result = backend.get_route_stops(&name).await;
        assert!(matches!(result, Err(BackendError::Api { status: 404, .. })));
    }

    #[test]
    fn missing_routes_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockBackend::new(dir.path()).is_err());
    }

    #[test]
    fn malformed_routes_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("routes.json")).unwrap();
        writeln!(file, "not json").unwrap();

        assert!(matches!(
            MockBackend::new(dir.path()),
            Err(BackendError::Json { .. })
        ));
    }
}
