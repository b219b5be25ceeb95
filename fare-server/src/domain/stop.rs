//! Stop and stop-sequence types.
//!
//! A route's stops arrive split into outbound and inbound directions.
//! For the trip-segment picker they are flattened into one ordered
//! sequence (all outbound stops first, then all inbound stops). The
//! flattened index is only meaningful inside one render cycle, so the
//! selection surface carries `StopKey` (direction + sequence) instead
//! and resolves it to an index immediately before computing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phantom stop marker, half-width parenthesis form.
const PHANTOM_MARKER: &str = "(虛擬站不停靠)";

/// Phantom stop marker, full-width parenthesis form.
const PHANTOM_MARKER_FULLWIDTH: &str = "（虛擬站不停靠）";

/// Travel direction along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    /// Single-character display label (去 / 返).
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Outbound => "去",
            Direction::Inbound => "返",
        }
    }

    /// Full display label for column headings (去程 / 返程).
    pub fn heading(&self) -> &'static str {
        match self {
            Direction::Outbound => "去程",
            Direction::Inbound => "返程",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One stopping point on a route, in one travel direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Position along the direction, starting at 1.
    pub sequence: u32,

    /// Display name. May carry the phantom-stop marker.
    pub name: String,

    /// Fare segment number assigned to a rider boarding here.
    pub boarding: u32,

    /// Fare segment number assigned to a rider alighting here.
    pub alighting: u32,

    /// Which direction of the route this stop belongs to.
    pub direction: Direction,
}

impl Stop {
    /// Whether this is a pass-through entry rather than an actual
    /// passenger stop. Display-only; fare logic ignores it.
    pub fn is_phantom(&self) -> bool {
        self.name.contains(PHANTOM_MARKER) || self.name.contains(PHANTOM_MARKER_FULLWIDTH)
    }

    /// The stable composite key for this stop.
    pub fn key(&self) -> StopKey {
        StopKey {
            direction: self.direction,
            sequence: self.sequence,
        }
    }
}

/// Stable composite key for a stop within one route load.
///
/// Unlike a flattened index this survives re-rendering, so it is what
/// the selection API exchanges with clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StopKey {
    pub direction: Direction,
    pub sequence: u32,
}

/// The flattened stop sequence of one route: all outbound stops in
/// original order, then all inbound stops in original order.
///
/// Indices are contiguous in `[0, len)`. Rebuilt every time a route is
/// (re)loaded; never persisted.
#[derive(Debug, Clone, Default)]
pub struct FlattenedStops {
    stops: Vec<Stop>,
}

impl FlattenedStops {
    /// Build from the per-direction stop lists, preserving order.
    pub fn new(outbound: Vec<Stop>, inbound: Vec<Stop>) -> Self {
        let mut stops = outbound;
        stops.extend(inbound);
        Self { stops }
    }

    /// The full flattened sequence, outbound before inbound.
    pub fn as_slice(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// Resolve a stop key to its flattened index.
    ///
    /// Sequence numbers are not required to be unique within a
    /// direction (the backend assigns them), so this returns the first
    /// match in flattened order.
    pub fn index_of(&self, key: StopKey) -> Option<usize> {
        self.stops
            .iter()
            .position(|s| s.direction == key.direction && s.sequence == key.sequence)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }
}
