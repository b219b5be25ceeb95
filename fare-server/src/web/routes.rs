//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::backend::{BackendError, LineFareRequestDto, LineTripDto, TypeFareRequestDto, TypeTripDto};
use crate::config::{BUS_TYPES, FARE_TYPES, is_known_bus_type, is_known_fare_type};
use crate::domain::{FlattenedStops, Route, RouteName, StopKey};
use crate::fare::{compute_segments, rank_routes};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/fare/by-type", get(fare_by_type_page))
        .route("/fare/by-line", get(fare_by_line_page))
        .route("/stops", get(route_stops_page))
        .route("/api/status", get(backend_status))
        .route("/api/routes/search", get(search_routes))
        .route("/api/route_stops", get(route_stops))
        .route("/api/segments", post(trip_segments))
        .route("/api/fare/by-type", post(fare_by_type))
        .route("/api/fare/by-line", post(fare_by_line))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint for this server.
async fn health() -> &'static str {
    "ok"
}

/// Home page.
async fn index_page() -> IndexTemplate {
    IndexTemplate
}

/// Fare-by-bus-type calculator page.
async fn fare_by_type_page() -> FareByTypeTemplate {
    FareByTypeTemplate {
        fare_types: FARE_TYPES,
        bus_types: BUS_TYPES,
    }
}

/// Fare-by-route calculator page.
async fn fare_by_line_page() -> FareByLineTemplate {
    FareByLineTemplate {
        fare_types: FARE_TYPES,
    }
}

/// Route stop listing page.
async fn route_stops_page() -> RouteStopsTemplate {
    RouteStopsTemplate
}

/// Backend liveness as seen from this server. Never errors; a dead
/// backend is a displayable state, not a failure of this endpoint.
async fn backend_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let backend = match state.backend.health().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!("backend health probe failed: {e}");
            "disconnected"
        }
    };
    Json(StatusResponse { backend })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Rank the collection against the query and apply the optional
/// result cap. The cap truncates after ranking, so it never changes
/// which routes come first.
fn search_results(routes: &[Route], query: &str, limit: Option<usize>) -> Vec<Route> {
    let mut ranked = rank_routes(routes, query);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Search routes for the type-ahead dropdown.
///
/// Ranks against the full cached collection on every call, never a
/// previously filtered result.
async fn search_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteSearchRequest>,
) -> Result<Response, AppError> {
    let routes = state.backend.get_routes().await.map_err(AppError::from)?;

    let ranked = search_results(&routes, &req.q, req.limit);

    if accepts_html(&headers) {
        let views: Vec<RouteView> = ranked.iter().map(RouteView::from_route).collect();
        let template = RouteListTemplate { routes: views };
        let html = template.render().map_err(AppError::template)?;
        Ok(Html(html).into_response())
    } else {
        let results: Vec<RouteResult> = ranked.iter().map(RouteResult::from_route).collect();
        Ok(Json(RouteSearchResponse { routes: results }).into_response())
    }
}

/// Get the stop listing for one route.
async fn route_stops(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteStopsRequest>,
) -> Result<Response, AppError> {
    let route_name = RouteName::parse(&req.route_name).map_err(|_| AppError::BadRequest {
        message: format!("invalid route name: {:?}", req.route_name),
    })?;

    let stops = state
        .backend
        .get_route_stops(&route_name)
        .await
        .map_err(AppError::from)?;

    if accepts_html(&headers) {
        let template = StopListTemplate::from_route_stops(&stops);
        let html = template.render().map_err(AppError::template)?;
        Ok(Html(html).into_response())
    } else {
        let response = RouteStopsResponse {
            outbound: stops.outbound.iter().map(StopResult::from_stop).collect(),
            inbound: stops.inbound.iter().map(StopResult::from_stop).collect(),
            outbound_dest: stops.outbound_dest.clone(),
            inbound_dest: stops.inbound_dest.clone(),
            warning: stops.warning.clone(),
        };
        Ok(Json(response).into_response())
    }
}

/// Resolve a start/end stop key pair against a flattened sequence.
///
/// Both keys must name a stop of the sequence, and the end stop must
/// come strictly after the start stop in flattened order. Anything
/// else is a client error, caught here so the calculator downstream
/// only ever sees a valid index pair.
fn resolve_segment_span(
    flat: &FlattenedStops,
    start: StopKey,
    end: StopKey,
) -> Result<(usize, usize), AppError> {
    let start = flat.index_of(start).ok_or_else(|| AppError::BadRequest {
        message: "unknown start stop".to_string(),
    })?;
    let end = flat.index_of(end).ok_or_else(|| AppError::BadRequest {
        message: "unknown end stop".to_string(),
    })?;

    if start >= end {
        return Err(AppError::BadRequest {
            message: "end stop must come after the start stop".to_string(),
        });
    }

    Ok((start, end))
}

/// Compute the trip segment count between two chosen stops.
///
/// Stops are addressed by stable (direction, sequence) keys; this
/// handler resolves them to flattened indices, enforces that the end
/// stop comes strictly after the start stop, and only then invokes the
/// trusting calculator.
async fn trip_segments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SegmentsRequest>,
) -> Result<Response, AppError> {
    let route_name = RouteName::parse(&req.route_name).map_err(|_| AppError::BadRequest {
        message: format!("invalid route name: {:?}", req.route_name),
    })?;

    let stops = state
        .backend
        .get_route_stops(&route_name)
        .await
        .map_err(AppError::from)?;
    let flat = stops.flattened();

    let (start, end) = resolve_segment_span(&flat, req.start, req.end)?;
    let segments = compute_segments(flat.as_slice(), start, end);

    if accepts_html(&headers) {
        let template = SegmentResultTemplate { segments };
        let html = template.render().map_err(AppError::template)?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(SegmentsResponse { segments }).into_response())
    }
}

/// Format a fare for display: whole dollars without a trailing ".0".
fn format_fare(total_fare: f64) -> String {
    if total_fare.fract() == 0.0 {
        format!("{}", total_fare as i64)
    } else {
        format!("{total_fare}")
    }
}

fn validate_trip_count(trip_count: u32) -> Result<(), AppError> {
    if !(1..=99).contains(&trip_count) {
        return Err(AppError::BadRequest {
            message: "trip count must be between 1 and 99".to_string(),
        });
    }
    Ok(())
}

/// Run the by-type fare calculation through the backend.
async fn fare_by_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<TypeFareRequest>,
) -> Result<Response, AppError> {
    if !is_known_fare_type(&req.fare_type) {
        return Err(AppError::BadRequest {
            message: format!("unknown fare type: {:?}", req.fare_type),
        });
    }
    if req.bus_trips.is_empty() {
        return Err(AppError::BadRequest {
            message: "at least one trip is required".to_string(),
        });
    }

    let mut trips = Vec::with_capacity(req.bus_trips.len());
    for trip in &req.bus_trips {
        if !is_known_bus_type(&trip.bus_type) {
            return Err(AppError::BadRequest {
                message: format!("unknown bus type: {:?}", trip.bus_type),
            });
        }
        validate_trip_count(trip.trip_count)?;
        trips.push(TypeTripDto {
            bus_type: trip.bus_type.clone(),
            trip_count: trip.trip_count,
        });
    }

    let request = TypeFareRequestDto {
        fare_type: req.fare_type,
        bus_trips: trips,
    };
    let total_fare = state
        .backend
        .calculate_fare_by_type(&request)
        .await
        .map_err(AppError::from)?;

    fare_response(&headers, total_fare)
}

/// Run the by-line fare calculation through the backend.
async fn fare_by_line(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LineFareRequest>,
) -> Result<Response, AppError> {
    if !is_known_fare_type(&req.fare_type) {
        return Err(AppError::BadRequest {
            message: format!("unknown fare type: {:?}", req.fare_type),
        });
    }
    if req.bus_trips.is_empty() {
        return Err(AppError::BadRequest {
            message: "at least one trip is required".to_string(),
        });
    }

    let mut trips = Vec::with_capacity(req.bus_trips.len());
    for trip in &req.bus_trips {
        let line = RouteName::parse(&trip.line_name).map_err(|_| AppError::BadRequest {
            message: format!("invalid route name: {:?}", trip.line_name),
        })?;
        validate_trip_count(trip.trip_count)?;
        trips.push(LineTripDto {
            line_name: line.as_str().to_string(),
            trip_count: trip.trip_count,
        });
    }

    let request = LineFareRequestDto {
        fare_type: req.fare_type,
        bus_trips: trips,
    };
    let total_fare = state
        .backend
        .calculate_fare_by_line(&request)
        .await
        .map_err(AppError::from)?;

    fare_response(&headers, total_fare)
}

/// Shared response shaping for both fare calculators.
fn fare_response(headers: &HeaderMap, total_fare: f64) -> Result<Response, AppError> {
    if accepts_html(headers) {
        let template = FareResultTemplate {
            total_fare: format_fare(total_fare),
        };
        let html = template.render().map_err(AppError::template)?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(FareResponse { total_fare }).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn template(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("template error: {e}"),
        }
    }
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        match e {
            // The backend answers 404 with { error } for unknown routes.
            BackendError::Api { status: 404, message } => AppError::NotFound { message },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
