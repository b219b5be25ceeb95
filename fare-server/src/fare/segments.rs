//! Trip segment derivation.
//!
//! The fare backend assigns every stop a boarding segment number and an
//! alighting segment number. The number of chargeable segments for a
//! trip leg is derived purely from those two values; this module does
//! no I/O and holds no state.

use crate::domain::Stop;

/// Compute the fare-segment count between two stops of a flattened
/// stop sequence.
///
/// `segments = alighting(end) - boarding(start) + 1`, clamped to a
/// minimum of 1: segment numbering is backend-assigned and can be
/// non-monotonic near route boundaries or phantom stops, and a
/// chargeable trip must never report zero or negative segments.
///
/// Callers must uphold `start < end < stops.len()`. The caller only
/// ever offers end stops strictly after the chosen start stop, so a
/// start in Outbound with an end in Inbound is permitted and simply
/// uses whatever segment numbers those stops carry.
pub fn compute_segments(stops: &[Stop], start: usize, end: usize) -> u32 {
    debug_assert!(start < end && end < stops.len());

    let raw = i64::from(stops[end].alighting) - i64::from(stops[start].boarding) + 1;
    raw.max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    fn stops(segments: &[(u32, u32)]) -> Vec<Stop> {
        segments
            .iter()
            .enumerate()
            .map(|(i, &(boarding, alighting))| Stop {
                sequence: i as u32 + 1,
                name: format!("站{}", i + 1),
                boarding,
                alighting,
                direction: Direction::Outbound,
            })
            .collect()
    }

    #[test]
    fn spans_multiple_segments() {
        // boarding 1 at the start, alighting 5 at the end: 5 - 1 + 1
        let s = stops(&[(1, 2), (2, 3), (3, 5)]);
        assert_eq!(compute_segments(&s, 0, 2), 5);
    }

    #[test]
    fn single_segment_trip() {
        let s = stops(&[(1, 1), (1, 1)]);
        assert_eq!(compute_segments(&s, 0, 1), 1);
    }

    #[test]
    fn clamps_zero_to_one() {
        // alighting(end) - boarding(start) + 1 == 0
        let s = stops(&[(3, 1), (3, 2)]);
        assert_eq!(compute_segments(&s, 0, 1), 1);
    }

    #[test]
    fn clamps_negative_to_one() {
        // Non-monotonic numbering around a route boundary.
        let s = stops(&[(9, 9), (1, 1)]);
        assert_eq!(compute_segments(&s, 0, 1), 1);
    }

    #[test]
    fn adjacent_stops() {
        let s = stops(&[(1, 1), (1, 2), (2, 2)]);
        assert_eq!(compute_segments(&s, 1, 2), 2);
    }

    #[test]
    fn crosses_direction_boundary() {
        // Start outbound, end inbound: the formula applies unchanged.
        let mut s = stops(&[(1, 1), (2, 2)]);
        s.push(Stop {
            sequence: 1,
            name: "返站".to_string(),
            boarding: 3,
            alighting: 4,
            direction: Direction::Inbound,
        });
        assert_eq!(compute_segments(&s, 0, 2), 4);
    }
}
