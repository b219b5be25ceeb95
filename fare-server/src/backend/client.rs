//! Fare backend HTTP client.
//!
//! Async methods for the remote fare-estimation API: the route list,
//! per-route stop listings, the two fare calculators and the liveness
//! probe. A semaphore bounds concurrent requests; the free-tier host
//! the backend runs on throttles aggressively.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use crate::domain::{Route, RouteName};

use super::convert::{RouteStops, convert_route_stops, convert_routes};
use super::error::BackendError;
use super::types::{
    ErrorBodyDto, FareResponseDto, LineFareRequestDto, RouteDto, RouteStopsDto, TypeFareRequestDto,
};

/// Default base URL for the fare backend.
const DEFAULT_BASE_URL: &str = "https://xwjwpiy-traffic-estimator-testing-api.onrender.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the fare backend client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }
}

impl BackendConfig {
    /// Set a custom base URL (for testing or self-hosted backends).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Fare backend API client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl BackendClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch the full route collection.
    pub async fn get_routes(&self) -> Result<Vec<Route>, BackendError> {
        let url = format!("{}/api/routes", self.base_url);
        let _permit = self.acquire().await?;

        let response = self.http.get(&url).send().await?;
        let dtos: Vec<RouteDto> = decode_response(response).await?;
        convert_routes(dtos)
    }

    /// Fetch the stop listing for one route.
    pub async fn get_route_stops(&self, route: &RouteName) -> Result<RouteStops, BackendError> {
        let url = format!("{}/api/route_stops", self.base_url);
        let _permit = self.acquire().await?;

        let response = self
            .http
            .get(&url)
            .query(&[("route_name", route.as_str())])
            .send()
            .await?;
        let dto: RouteStopsDto = decode_response(response).await?;
        convert_route_stops(dto)
    }

    /// Run the bus-type fare calculator.
    pub async fn calculate_fare_by_type(
        &self,
        request: &TypeFareRequestDto,
    ) -> Result<f64, BackendError> {
        let url = format!("{}/type_calculate_fare", self.base_url);
        let _permit = self.acquire().await?;

        let response = self.http.post(&url).json(request).send().await?;
        let body: FareResponseDto = decode_response(response).await?;
        Ok(body.total_fare)
    }

    /// Run the route-line fare calculator.
    pub async fn calculate_fare_by_line(
        &self,
        request: &LineFareRequestDto,
    ) -> Result<f64, BackendError> {
        let url = format!("{}/line_calculate_fare", self.base_url);
        let _permit = self.acquire().await?;

        let response = self.http.post(&url).json(request).send().await?;
        let body: FareResponseDto = decode_response(response).await?;
        Ok(body.total_fare)
    }

    /// Probe backend liveness. Any 2xx counts as alive.
    pub async fn health(&self) -> Result<(), BackendError> {
        let url = format!("{}/health", self.base_url);
        let _permit = self.acquire().await?;

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: "health probe failed".to_string(),
            });
        }
        Ok(())
    }

    async fn acquire(&self) -> Result<tokio::sync::SemaphorePermit<'_>, BackendError> {
        self.semaphore
            .acquire()
            .await
            .map_err(|_| BackendError::Api {
                status: 0,
                message: "semaphore closed".to_string(),
            })
    }
}

/// Decode a backend response: on non-2xx the body is `{ error }`, on
/// 2xx it is the expected payload.
async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = match serde_json::from_str::<ErrorBodyDto>(&body) {
            Ok(err) => err.error,
            // Not the documented error shape; keep a bounded prefix.
            Err(_) => body.chars().take(200).collect(),
        };
        return Err(BackendError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| BackendError::Json {
        message: e.to_string(),
    })
}
