//! Trace assembler.
//!
//! Packages the projector's per-line point lists into the final result:
//! one [`LineRun`] per line the train actually touches, alongside the
//! train's metadata. Point records stay rows here; a tabular or columnar
//! rendering belongs to whatever consumes the result.

use indexmap::IndexMap;
use tracing::warn;

use crate::domain::{LineId, TrainMeta};

use super::project::TracePoint;

/// The ordered, projected trace of one train on one operating line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTrace {
    points: Vec<TracePoint>,
}

impl LineTrace {
    /// The trace's rows, in chronological event order.
    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trace has no rows.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One train's trace on one line, with the identifying metadata a
/// renderer needs to label it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRun {
    /// Operating line the trace belongs to.
    pub line: LineId,

    /// Timetable train number.
    pub train_no: String,

    /// Vehicle class identifier.
    pub car_class: String,

    /// Route identifier of the run.
    pub route_id: String,

    /// The projected trace.
    pub trace: LineTrace,
}

/// The full result for one train.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainResult {
    /// One entry per line the train traverses. Configured lines the train
    /// never touches are omitted here.
    pub train_data: Vec<LineRun>,

    /// Reserved for split traces of midnight-crossing runs. Currently
    /// always empty: rollover is detected and flagged (see the warning in
    /// [`assemble`]) but the trace is emitted unsplit.
    pub after_midnight: Vec<LineRun>,
}

/// Assemble the final result from the projector's per-line points.
///
/// Lines with an empty point list are dropped from emission; they existed
/// in the intermediate map so "configured but not traversed" was
/// distinguishable, but a renderer only wants lines the train touches.
pub fn assemble(meta: &TrainMeta, per_line: IndexMap<LineId, Vec<TracePoint>>) -> TrainResult {
    let mut train_data = Vec::new();

    for (line, points) in per_line {
        if points.is_empty() {
            continue;
        }

        if let Some(at) = first_time_decrease(&points) {
            // Midnight rollover is an unresolved extension: flag the run
            // and emit the trace unsplit.
            warn!(
                train = %meta.train_no,
                line = %line,
                stop_order = points[at].stop_order,
                "projected time decreases mid-trace; possible midnight \
                 rollover, trace emitted unsplit"
            );
        }

        train_data.push(LineRun {
            line,
            train_no: meta.train_no.clone(),
            car_class: meta.car_class.clone(),
            route_id: meta.route_id.clone(),
            trace: LineTrace { points },
        });
    }

    TrainResult {
        train_data,
        after_midnight: Vec::new(),
    }
}

/// Index of the first point whose time is below its predecessor's, if any.
fn first_time_decrease(points: &[TracePoint]) -> Option<usize> {
    points
        .windows(2)
        .position(|pair| pair[1].time < pair[0].time)
        .map(|i| i + 1)
}
