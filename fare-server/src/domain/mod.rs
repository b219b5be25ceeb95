//! Domain types for the fare estimation server.
//!
//! These types represent validated bus route data. Invariants are
//! enforced at construction time, so code that receives them can trust
//! their validity.

mod route;
mod stop;

pub use route::{InvalidRouteName, Route, RouteName};
pub use stop::{Direction, FlattenedStops, Stop, StopKey};
