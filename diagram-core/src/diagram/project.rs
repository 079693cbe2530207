//! Line projector.
//!
//! Splits a train's event sequence across the configured operating lines.
//! Order assignment and line-membership filtering are two separate passes:
//! [`assign_stop_order`] attaches one stop-order value per distinct event,
//! then [`fan_out`] replicates each ordered event into every line that
//! contains its station. A junction station therefore lands in several
//! lines' traces at the *same* stop order, which is what keeps the lines'
//! renderings horizontally aligned at shared stations. That shared order
//! is the one invariant nothing here may break.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::domain::{LineId, StationId};

use super::axis::LineStations;
use super::expand::PassageEvent;

/// A passage event with its position in the global event sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedEvent {
    /// The projected passage event.
    pub event: PassageEvent,

    /// Global chronological index: 0, 1, 2, ... over the event sequence.
    pub stop_order: u64,
}

/// Marker distinguishing scheduled stops from computed pass-throughs.
///
/// The pipeline only emits [`StopMarker::Stop`]: every event comes from a
/// scheduled stop record. `Pass` exists for interpolated passage points at
/// non-stopping stations, which are computed outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMarker {
    /// The train is scheduled to call at this station.
    Stop,
    /// The train passes without stopping.
    Pass,
}

/// One row of a line's trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePoint {
    /// Display name of the station.
    pub name: String,

    /// Station identifier.
    pub station: StationId,

    /// Horizontal (time) coordinate.
    pub time: f64,

    /// Vertical (line-position) coordinate.
    pub position: f64,

    /// Stop/pass marker.
    pub marker: StopMarker,

    /// Global stop-order index shared across all lines.
    pub stop_order: u64,
}

/// Attach stop-order values to an event sequence.
///
/// A plain fold: the n-th event of the input gets order n. Events are
/// taken strictly in input order; the expander already emitted them
/// chronologically and no re-sorting by time happens here.
pub fn assign_stop_order(events: Vec<PassageEvent>) -> Vec<OrderedEvent> {
    events
        .into_iter()
        .zip(0u64..)
        .map(|(event, stop_order)| OrderedEvent { event, stop_order })
        .collect()
}

/// Replicate ordered events into every owning line's point list.
///
/// Every configured line gets an entry, even when no event lands in it:
/// callers can then distinguish "configured but not traversed" from "not
/// configured". An event whose station is on no configured line simply
/// contributes no point anywhere; that is the normal case for stations
/// outside the diagram's corridors, not an error.
pub fn fan_out(
    events: &[OrderedEvent],
    lines: &LineStations,
) -> IndexMap<LineId, Vec<TracePoint>> {
    let mut per_line: IndexMap<LineId, Vec<TracePoint>> = lines
        .line_ids()
        .map(|id| (id.clone(), Vec::new()))
        .collect();

    for ordered in events {
        let event = &ordered.event;
        for line in lines.line_ids() {
            let Some(slot) = lines.slot(line, &event.station) else {
                continue;
            };
            trace!(
                line = %line,
                station = %event.station,
                stop_order = ordered.stop_order,
                "appending trace point"
            );
            per_line[line].push(TracePoint {
                name: event.name.clone(),
                station: event.station.clone(),
                time: event.time,
                position: slot.y,
                marker: StopMarker::Stop,
                stop_order: ordered.stop_order,
            });
        }
    }

    debug!(
        events = events.len(),
        lines = per_line.len(),
        points = per_line.values().map(Vec::len).sum::<usize>(),
        "projected events onto lines"
    );

    per_line
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::diagram::axis::StationSlot;
    use proptest::prelude::*;

    fn station(i: usize) -> StationId {
        StationId::parse(&format!("{:04}", 1000 + i)).unwrap()
    }

    fn arbitrary_events(max: usize) -> impl Strategy<Value = Vec<PassageEvent>> {
        prop::collection::vec((0usize..8, 0.0f64..2000.0), 0..max).prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (st, time))| PassageEvent {
                    station: station(st),
                    name: format!("station {st}"),
                    sequence: i as u32 + 1,
                    time,
                })
                .collect()
        })
    }

    /// Membership table putting even stations on one line, all on another.
    fn two_line_table() -> LineStations {
        let mut lines = LineStations::new();
        let all = LineId::parse("ALL").unwrap();
        let even = LineId::parse("EVEN").unwrap();
        for i in 0..8 {
            lines.insert(all.clone(), &station(i), StationSlot { y: i as f64 });
            if i % 2 == 0 {
                lines.insert(even.clone(), &station(i), StationSlot { y: i as f64 });
            }
        }
        lines
    }

    proptest! {
        /// Stop order over the input sequence is exactly 0, 1, 2, ...
        /// never skipping and never repeating.
        #[test]
        fn stop_order_is_dense_and_strict(events in arbitrary_events(30)) {
            let ordered = assign_stop_order(events);
            for (i, o) in ordered.iter().enumerate() {
                prop_assert_eq!(o.stop_order, i as u64);
            }
        }

        /// Within any one line's trace, stop order is strictly increasing;
        /// replication into other lines never disturbs it.
        #[test]
        fn per_line_order_strictly_increasing(events in arbitrary_events(30)) {
            let lines = two_line_table();
            let ordered = assign_stop_order(events);
            let per_line = fan_out(&ordered, &lines);

            for points in per_line.values() {
                for pair in points.windows(2) {
                    prop_assert!(pair[0].stop_order < pair[1].stop_order);
                }
            }
        }

        /// A line containing every station receives every event, at the
        /// event's own global order.
        #[test]
        fn full_line_receives_all_events(events in arbitrary_events(30)) {
            let lines = two_line_table();
            let n = events.len();
            let ordered = assign_stop_order(events);
            let per_line = fan_out(&ordered, &lines);

            let all = &per_line[&LineId::parse("ALL").unwrap()];
            prop_assert_eq!(all.len(), n);
            for (i, point) in all.iter().enumerate() {
                prop_assert_eq!(point.stop_order, i as u64);
            }
        }

        /// Every point in a partial line also exists in the full line with
        /// the same stop order and time (replication consistency).
        #[test]
        fn partial_line_is_a_subsequence(events in arbitrary_events(30)) {
            let lines = two_line_table();
            let ordered = assign_stop_order(events);
            let per_line = fan_out(&ordered, &lines);

            let all = &per_line[&LineId::parse("ALL").unwrap()];
            let even = &per_line[&LineId::parse("EVEN").unwrap()];

            for point in even {
                let twin = &all[point.stop_order as usize];
                prop_assert_eq!(&twin.station, &point.station);
                prop_assert_eq!(twin.time, point.time);
                prop_assert_eq!(twin.stop_order, point.stop_order);
            }
        }
    }
}
