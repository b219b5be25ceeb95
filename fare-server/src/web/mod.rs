//! Web layer for the fare estimation server.
//!
//! Serves the calculator pages and the JSON/fragment APIs that expose
//! route search, stop listings and segment derivation.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
