//! Fare backend HTTP client.
//!
//! The fare-pricing rules live server-side in a remote backend; this
//! module speaks its HTTP+JSON contract and converts the wire shapes
//! into domain types.

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{BackendClient, BackendConfig};
pub use convert::{RouteStops, convert_route_stops, convert_routes};
pub use error::BackendError;
pub use types::{
    ErrorBodyDto, FareResponseDto, LineFareRequestDto, LineTripDto, RouteDto, RouteStopsDto,
    StopDto, TypeFareRequestDto, TypeTripDto,
};
