//! Station event expander.
//!
//! Each normalized stop becomes two passage events, arrival then
//! departure, each already projected onto the horizontal axis. From here
//! on the pipeline works in diagram coordinates, not clock times.

use indexmap::IndexMap;

use crate::domain::StationId;

use super::axis::TimeAxis;
use super::error::DiagramError;
use super::normalize::NormalizedStop;

/// One arrival or departure instant at a station, with its time already
/// projected to a horizontal-axis value.
#[derive(Debug, Clone, PartialEq)]
pub struct PassageEvent {
    /// Station the event happens at.
    pub station: StationId,

    /// Display name of the station.
    pub name: String,

    /// Stop sequence of the originating timetable record.
    pub sequence: u32,

    /// Projected horizontal-axis value.
    pub time: f64,
}

/// Expand a normalized timetable into its chronological event sequence.
///
/// Emits two events per stop in the table's iteration order, which is the
/// timetable order; the projector downstream trusts this ordering and
/// never re-sorts.
///
/// The axis table is expected to cover every valid time of the operating
/// day, so a missing key is a fatal [`DiagramError::UnmappedTime`], never
/// a silently dropped point.
pub fn expand_events(
    timetable: &IndexMap<StationId, NormalizedStop>,
    axis: &TimeAxis,
) -> Result<Vec<PassageEvent>, DiagramError> {
    let mut events = Vec::with_capacity(timetable.len() * 2);

    for stop in timetable.values() {
        for time in [stop.arrival, stop.departure] {
            let x = axis.project(&time).ok_or_else(|| DiagramError::UnmappedTime {
                station: stop.station.clone(),
                time: time.axis_key(),
            })?;
            events.push(PassageEvent {
                station: stop.station.clone(),
                name: stop.name.clone(),
                sequence: stop.sequence,
                time: x,
            });
        }
    }

    Ok(events)
}
