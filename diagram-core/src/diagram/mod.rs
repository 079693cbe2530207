//! Space-time trace pipeline.
//!
//! Turns one train's validated timetable into per-operating-line traces
//! for a distance-time diagram, in four stages:
//!
//! 1. normalize: resolve every stop to an (arrival, departure) pair;
//! 2. expand: two passage events per stop, projected onto the time axis;
//! 3. project: assign global stop orders, then fan events out to lines;
//! 4. assemble: package non-empty lines into the final [`TrainResult`].
//!
//! The pipeline is synchronous, stateless and pure apart from log output:
//! lookup tables and the timetable arrive as materialized read-only
//! values, and nothing survives a call. Batching many trains is the
//! caller's concern; every invocation is independent.

mod assemble;
mod axis;
mod error;
mod expand;
mod normalize;
mod project;


pub use assemble::{LineRun, LineTrace, TrainResult, assemble};
pub use axis::{LineStations, StationSlot, TimeAxis};
pub use error::DiagramError;
pub use expand::{PassageEvent, expand_events};
pub use normalize::{NormalizedStop, normalize_stops};
pub use project::{OrderedEvent, StopMarker, TracePoint, assign_stop_order, fan_out};

use crate::domain::TrainTimetable;
use crate::tdx::{self, types::DailyTrainTimetable};

/// Build a train's per-line space-time traces.
///
/// Processes exactly one train; any error aborts it without emitting a
/// partial result.
pub fn trace_train(
    train: &TrainTimetable,
    axis: &TimeAxis,
    lines: &LineStations,
) -> Result<TrainResult, DiagramError> {
    let timetable = normalize_stops(&train.stops)?;
    let events = expand_events(&timetable, axis)?;
    let ordered = assign_stop_order(events);
    let per_line = fan_out(&ordered, lines);
    Ok(assemble(&train.meta, per_line))
}

/// Build traces straight from a raw feed record.
///
/// Convenience over [`trace_train`] for callers holding the undecoded
/// feed DTO; structural violations surface as
/// [`DiagramError::Contract`].
pub fn trace_daily_timetable(
    raw: &DailyTrainTimetable,
    axis: &TimeAxis,
    lines: &LineStations,
) -> Result<TrainResult, DiagramError> {
    let train = tdx::convert_timetable(raw)?;
    trace_train(&train, axis, lines)
}
