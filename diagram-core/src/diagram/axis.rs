//! Lookup tables supplied by the diagram configuration.
//!
//! Both tables are materialized read-only inputs: the pipeline never
//! performs I/O. They derive serde support so a caller can load them from
//! the diagram's JSON configuration.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::{LineId, StationId, TimetableTime};

/// The horizontal (time) axis of the diagram.
///
/// Maps "HH:MM:SS" strings to a horizontal coordinate. The table must be
/// dense enough to cover every time appearing in a timetable on the
/// operating day; a missing key is a fatal lookup failure, not a value to
/// interpolate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TimeAxis {
    entries: HashMap<String, f64>,
}

impl TimeAxis {
    /// Create an empty axis table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A uniform axis covering every minute of the day.
    ///
    /// Maps "00:00:00" to 0.0 and each subsequent minute to a further
    /// `per_minute` units. Useful as a default when the configuration
    /// does not supply a hand-tuned axis.
    pub fn uniform(per_minute: f64) -> Self {
        let mut entries = HashMap::with_capacity(24 * 60);
        for hour in 0..24 {
            for minute in 0..60 {
                let key = format!("{hour:02}:{minute:02}:00");
                entries.insert(key, (hour * 60 + minute) as f64 * per_minute);
            }
        }
        Self { entries }
    }

    /// Load an axis table from its JSON configuration form: an object
    /// mapping "HH:MM:SS" keys to coordinates.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Set the coordinate for one "HH:MM:SS" key.
    pub fn insert(&mut self, key: impl Into<String>, x: f64) {
        self.entries.insert(key.into(), x);
    }

    /// Look up the horizontal coordinate for a timetable time.
    pub fn project(&self, time: &TimetableTime) -> Option<f64> {
        self.entries.get(&time.axis_key()).copied()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A station's placement on one operating line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StationSlot {
    /// Vertical coordinate of the station on this line's band.
    pub y: f64,
}

/// The line-membership table: which stations each operating line contains
/// and where each sits vertically on that line's band.
///
/// A station may belong to more than one line (junction stations), in
/// which case its passage events are replicated into each owning line's
/// trace. Iteration order is configuration order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LineStations {
    lines: IndexMap<LineId, IndexMap<String, StationSlot>>,
}

impl LineStations {
    /// Create an empty membership table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a membership table from its JSON configuration form: an
    /// object of line identifiers, each mapping station identifiers to
    /// their placement.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Register a line with no stations yet.
    ///
    /// Configured-but-untraversed lines still appear (empty) in the
    /// projector's output, so registration matters even without stations.
    pub fn add_line(&mut self, line: LineId) {
        self.lines.entry(line).or_default();
    }

    /// Place a station on a line.
    pub fn insert(&mut self, line: LineId, station: &StationId, slot: StationSlot) {
        self.lines
            .entry(line)
            .or_default()
            .insert(station.as_str().to_owned(), slot);
    }

    /// Iterate the configured line identifiers, in configuration order.
    pub fn line_ids(&self) -> impl Iterator<Item = &LineId> {
        self.lines.keys()
    }

    /// Look up a station's placement on a line.
    pub fn slot(&self, line: &LineId, station: &StationId) -> Option<StationSlot> {
        self.lines.get(line)?.get(station.as_str()).copied()
    }

    /// Number of configured lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines are configured.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    #[test]
    fn uniform_axis_covers_the_day() {
        let axis = TimeAxis::uniform(2.0);
        assert_eq!(axis.len(), 1440);

        let midnight = TimetableTime::parse_hhmm("00:00").unwrap();
        assert_eq!(axis.project(&midnight), Some(0.0));

        let t = TimetableTime::parse_hhmm("08:30").unwrap();
        assert_eq!(axis.project(&t), Some((8 * 60 + 30) as f64 * 2.0));

        let last = TimetableTime::parse_hhmm("23:59").unwrap();
        assert_eq!(axis.project(&last), Some(1439.0 * 2.0));
    }

    #[test]
    fn missing_key_projects_to_none() {
        let mut axis = TimeAxis::new();
        axis.insert("08:00:00", 10.0);

        let known = TimetableTime::parse_hhmm("08:00").unwrap();
        assert_eq!(axis.project(&known), Some(10.0));

        let unknown = TimetableTime::parse_hhmm("08:01").unwrap();
        assert_eq!(axis.project(&unknown), None);
    }

    #[test]
    fn axis_deserializes_from_json_object() {
        let axis = TimeAxis::from_json(r#"{ "08:00:00": 960.0, "08:01:00": 962.0 }"#).unwrap();
        assert_eq!(axis.len(), 2);
        let t = TimetableTime::parse_hhmm("08:01").unwrap();
        assert_eq!(axis.project(&t), Some(962.0));
    }

    #[test]
    fn membership_lookup() {
        let mut lines = LineStations::new();
        lines.insert(line("WL"), &station("1000"), StationSlot { y: 0.0 });
        lines.insert(line("WL"), &station("4220"), StationSlot { y: 5.0 });
        lines.insert(line("PX"), &station("4220"), StationSlot { y: 1.5 });

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines.slot(&line("WL"), &station("4220")),
            Some(StationSlot { y: 5.0 })
        );
        assert_eq!(
            lines.slot(&line("PX"), &station("4220")),
            Some(StationSlot { y: 1.5 })
        );
        assert_eq!(lines.slot(&line("PX"), &station("1000")), None);
        assert_eq!(lines.slot(&line("NW"), &station("1000")), None);
    }

    #[test]
    fn line_order_is_configuration_order() {
        let mut lines = LineStations::new();
        lines.add_line(line("WL"));
        lines.add_line(line("PX"));
        lines.add_line(line("NW"));

        let ids: Vec<&str> = lines.line_ids().map(LineId::as_str).collect();
        assert_eq!(ids, vec!["WL", "PX", "NW"]);
    }

    #[test]
    fn membership_deserializes_from_json_object() {
        let lines = LineStations::from_json(
            r#"{
                "WL": { "1000": { "y": 0.0 }, "4220": { "y": 5.0 } },
                "PX": {}
            }"#,
        )
        .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines.slot(&line("WL"), &station("1000")),
            Some(StationSlot { y: 0.0 })
        );
        let ids: Vec<&str> = lines.line_ids().map(LineId::as_str).collect();
        assert_eq!(ids, vec!["WL", "PX"]);
    }
}
