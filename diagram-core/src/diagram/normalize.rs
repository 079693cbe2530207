//! Timetable normalizer.
//!
//! Published stop records routinely carry only one usable time: origin
//! stations have no arrival, termini no departure, and some feeds send
//! placeholder strings that fail the format check. Normalization resolves
//! every stop to a concrete (arrival, departure) pair so the rest of the
//! pipeline never sees an absent time.

use indexmap::IndexMap;

use crate::domain::{StationId, StopRecord, TimetableTime};

use super::error::DiagramError;

/// A stop with both times resolved.
///
/// A stop for which only one time was recorded is treated as
/// instantaneous: the well-formed time stands in for the missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedStop {
    /// Station being visited.
    pub station: StationId,

    /// Display name of the station.
    pub name: String,

    /// Position of this stop in the train's schedule.
    pub sequence: u32,

    /// Resolved arrival time.
    pub arrival: TimetableTime,

    /// Resolved departure time.
    pub departure: TimetableTime,
}

/// Normalize one train's stop records into a station-keyed table.
///
/// Pure function of its input. Iteration order of the result is the input
/// (timetable) order, which later stages rely on; a station appearing
/// twice keeps its first position but takes its later timing.
///
/// Returns [`DiagramError::MalformedStop`] when a record has no usable
/// time at all; the caller decides whether to skip the stop or abort the
/// train.
pub fn normalize_stops(
    stops: &[StopRecord],
) -> Result<IndexMap<StationId, NormalizedStop>, DiagramError> {
    let mut timetable = IndexMap::with_capacity(stops.len());

    for stop in stops {
        let (arrival, departure) = match (stop.arrival, stop.departure) {
            (Some(arr), Some(dep)) => (arr, dep),
            (Some(arr), None) => (arr, arr),
            (None, Some(dep)) => (dep, dep),
            (None, None) => {
                return Err(DiagramError::MalformedStop {
                    station: stop.station.clone(),
                    sequence: stop.sequence,
                });
            }
        };

        timetable.insert(
            stop.station.clone(),
            NormalizedStop {
                station: stop.station.clone(),
                name: stop.name.clone(),
                sequence: stop.sequence,
                arrival,
                departure,
            },
        );
    }

    Ok(timetable)
}
