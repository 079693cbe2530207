//! TDX daily-timetable DTOs.
//!
//! These types map directly to the TDX rail daily-timetable JSON feed.
//! They use `Option` liberally because the feed omits fields rather than
//! sending null values in many cases (origin stations have no arrival
//! time, termini no departure time).

use serde::Deserialize;

/// One train's entry in the daily timetable feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyTrainTimetable {
    /// Metadata for the train run.
    pub train_info: TrainInfo,

    /// Scheduled stops, in timetable order.
    pub stop_times: Vec<StopTime>,
}

/// Train run metadata as published by the feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainInfo {
    /// Timetable train number.
    pub train_no: String,

    /// Vehicle class identifier.
    #[serde(rename = "TrainTypeID")]
    pub train_type_id: String,

    /// Route identifier.
    #[serde(rename = "RouteID")]
    pub route_id: String,

    /// Direction flag: 0 down, 1 up.
    pub direction: u8,
}

/// One scheduled stop as published by the feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopTime {
    /// Station identifier.
    #[serde(rename = "StationID")]
    pub station_id: String,

    /// Localized station display name.
    pub station_name: StationName,

    /// Position of this stop in the schedule (1-based).
    pub stop_sequence: u32,

    /// Scheduled arrival, "HH:MM". Absent at the origin station.
    pub arrival_time: Option<String>,

    /// Scheduled departure, "HH:MM". Absent at the terminus.
    pub departure_time: Option<String>,
}

/// Localized station name pair.
#[derive(Debug, Clone, Deserialize)]
pub struct StationName {
    /// Traditional Chinese name; the feed always provides this.
    #[serde(rename = "Zh_tw")]
    pub zh_tw: String,

    /// English name, when available.
    #[serde(rename = "En")]
    pub en: Option<String>,
}
