//! Domain records for one train's schedule.

use super::{StationId, TimetableTime};
use std::fmt;

/// Direction of travel along the route.
///
/// The feed encodes this as 0 (down / clockwise) or 1 (up /
/// counter-clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Direction flag 0.
    Down,
    /// Direction flag 1.
    Up,
}

impl Direction {
    /// Decode the feed's numeric direction flag.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Direction::Down),
            1 => Some(Direction::Up),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Down => f.write_str("down"),
            Direction::Up => f.write_str("up"),
        }
    }
}

/// Metadata identifying one train run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainMeta {
    /// Timetable train number (e.g. "152").
    pub train_no: String,

    /// Vehicle class identifier (e.g. "1108" for Tze-Chiang EMU).
    pub car_class: String,

    /// Route identifier the run is scheduled on.
    pub route_id: String,

    /// Direction of travel.
    pub direction: Direction,
}

/// One scheduled visit to a station.
///
/// Times are `None` when the feed omitted them or sent a value that failed
/// the HH:MM format check; the normalizer substitutes the sibling value in
/// that case. A record with both times missing is unusable and rejected
/// there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRecord {
    /// Station being visited.
    pub station: StationId,

    /// Display name of the station.
    pub name: String,

    /// Position of this stop in the train's schedule (1-based in the feed).
    pub sequence: u32,

    /// Scheduled arrival time, if well-formed.
    pub arrival: Option<TimetableTime>,

    /// Scheduled departure time, if well-formed.
    pub departure: Option<TimetableTime>,
}

/// A single train's validated schedule: metadata plus its ordered stops.
///
/// Stop order is the published timetable order; the pipeline never
/// re-sorts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTimetable {
    /// Train run metadata.
    pub meta: TrainMeta,

    /// Stops in published timetable order.
    pub stops: Vec<StopRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_flag() {
        assert_eq!(Direction::from_flag(0), Some(Direction::Down));
        assert_eq!(Direction::from_flag(1), Some(Direction::Up));
        assert_eq!(Direction::from_flag(2), None);
        assert_eq!(Direction::from_flag(255), None);
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Down.to_string(), "down");
        assert_eq!(Direction::Up.to_string(), "up");
    }
}
