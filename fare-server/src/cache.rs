//! Caching layer for fare backend responses.
//!
//! The route collection changes rarely and is needed on every search
//! keystroke, so it is fetched once and reused for the session. Stop
//! listings are cached per route so rapid route reselection does not
//! hammer the backend. Fare calculations and health probes are never
//! cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::backend::{
    BackendClient, BackendError, LineFareRequestDto, RouteStops, TypeFareRequestDto,
};
use crate::domain::{Route, RouteName};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the cached route collection.
    pub routes_ttl: Duration,

    /// TTL for cached per-route stop listings.
    pub stops_ttl: Duration,

    /// Maximum number of cached stop listings.
    pub stops_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            routes_ttl: Duration::from_secs(10 * 60),
            stops_ttl: Duration::from_secs(10 * 60),
            stops_capacity: 500,
        }
    }
}

/// Fare backend client with caching.
///
/// Wraps a [`BackendClient`] and caches the route collection and the
/// per-route stop listings.
pub struct CachedBackendClient {
    client: BackendClient,

    /// The session's route collection. Single entry under a unit key.
    routes: MokaCache<(), Arc<Vec<Route>>>,

    /// Stop listings keyed by route name.
    stops: MokaCache<RouteName, Arc<RouteStops>>,
}

impl CachedBackendClient {
    /// Create a new cached client.
    pub fn new(client: BackendClient, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.routes_ttl)
            .max_capacity(1)
            .build();
        let stops = MokaCache::builder()
            .time_to_live(config.stops_ttl)
            .max_capacity(config.stops_capacity)
            .build();

        Self {
            client,
            routes,
            stops,
        }
    }

    /// Get the full route collection, fetching on a cold cache.
    pub async fn get_routes(&self) -> Result<Arc<Vec<Route>>, BackendError> {
        if let Some(cached) = self.routes.get(&()).await {
            return Ok(cached);
        }

        let routes = Arc::new(self.client.get_routes().await?);
        self.routes.insert((), routes.clone()).await;
        Ok(routes)
    }

    /// Get the stop listing for one route, fetching on a cold cache.
    pub async fn get_route_stops(
        &self,
        route: &RouteName,
    ) -> Result<Arc<RouteStops>, BackendError> {
        if let Some(cached) = self.stops.get(route).await {
            return Ok(cached);
        }

        let stops = Arc::new(self.client.get_route_stops(route).await?);
        self.stops.insert(route.clone(), stops.clone()).await;
        Ok(stops)
    }

    /// Run the bus-type fare calculator (never cached).
    pub async fn calculate_fare_by_type(
        &self,
        request: &TypeFareRequestDto,
    ) -> Result<f64, BackendError> {
        self.client.calculate_fare_by_type(request).await
    }

    /// Run the route-line fare calculator (never cached).
    pub async fn calculate_fare_by_line(
        &self,
        request: &LineFareRequestDto,
    ) -> Result<f64, BackendError> {
        self.client.calculate_fare_by_line(request).await
    }

    /// Probe backend liveness (never cached).
    pub async fn health(&self) -> Result<(), BackendError> {
        self.client.health().await
    }

    /// Number of cached stop listings (for monitoring).
    pub fn stops_entry_count(&self) -> u64 {
        self.stops.entry_count()
    }
}
