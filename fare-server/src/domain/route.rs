//! Route identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid route name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route name: {reason}")]
pub struct InvalidRouteName {
    reason: &'static str,
}

/// The canonical machine key for a bus route.
///
/// Route names are free-form (numeric like "307", suffixed like "225區",
/// or fully textual like "紅5"), but never empty and never padded with
/// whitespace. This type guarantees both by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RouteName(String);

impl RouteName {
    /// Parse a route name from a string.
    ///
    /// Leading and trailing whitespace is trimmed; an empty result is
    /// rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidRouteName {
                reason: "must not be empty",
            });
        }
        Ok(RouteName(trimmed.to_string()))
    }

    /// Returns the route name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RouteName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RouteName::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A selectable bus line: canonical key plus human-displayed label.
///
/// Routes are immutable, fetched once per session and cached; the
/// display label may differ from the key (e.g. "225區" vs "225區(副)").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Canonical machine key, used as the request parameter and as the
    /// stable search/sort key.
    pub route_name: RouteName,

    /// Human-displayed label.
    pub output_name: String,
}

impl Route {
    pub fn new(route_name: RouteName, output_name: impl Into<String>) -> Self {
        Self {
            route_name,
            output_name: output_name.into(),
        }
    }
}
