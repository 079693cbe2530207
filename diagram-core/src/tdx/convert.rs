//! Conversion from TDX DTOs to domain types.
//!
//! This module handles the transformation of raw feed records into our
//! validated domain types. Structural violations are fatal; malformed
//! time strings are not, they collapse to `None` and are resolved by the
//! normalizer's substitution rule.

use crate::domain::{Direction, StationId, StopRecord, TimetableTime, TrainMeta, TrainTimetable};

use super::types::{DailyTrainTimetable, StopTime};

/// Structural violations of the feed's input contract.
///
/// Any of these aborts processing of the train; there is no recovery
/// (a partially converted schedule would produce a corrupted trace).
#[derive(Debug, Clone, thiserror::Error)]
pub enum InputContractError {
    /// The train number field is empty
    #[error("train number must not be empty")]
    EmptyTrainNo,

    /// The direction flag is not 0 or 1
    #[error("train {train_no}: invalid direction flag {flag}")]
    InvalidDirection { train_no: String, flag: u8 },

    /// A stop record carries an unusable station identifier
    #[error("stop sequence {sequence}: invalid station id {value:?}")]
    InvalidStationId { value: String, sequence: u32 },
}

/// Convert a raw feed record into a validated timetable.
///
/// Time strings failing the strict HH:MM check are mapped to `None`, the
/// same as an absent field; everything structural must be present and
/// valid.
pub fn convert_timetable(
    raw: &DailyTrainTimetable,
) -> Result<TrainTimetable, InputContractError> {
    let info = &raw.train_info;

    if info.train_no.is_empty() {
        return Err(InputContractError::EmptyTrainNo);
    }

    let direction =
        Direction::from_flag(info.direction).ok_or_else(|| InputContractError::InvalidDirection {
            train_no: info.train_no.clone(),
            flag: info.direction,
        })?;

    let meta = TrainMeta {
        train_no: info.train_no.clone(),
        car_class: info.train_type_id.clone(),
        route_id: info.route_id.clone(),
        direction,
    };

    let stops = raw
        .stop_times
        .iter()
        .map(convert_stop)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TrainTimetable { meta, stops })
}

/// Convert a single stop record.
fn convert_stop(stop: &StopTime) -> Result<StopRecord, InputContractError> {
    let station = StationId::parse(&stop.station_id).map_err(|_| {
        InputContractError::InvalidStationId {
            value: stop.station_id.clone(),
            sequence: stop.stop_sequence,
        }
    })?;

    Ok(StopRecord {
        station,
        name: stop.station_name.zh_tw.clone(),
        sequence: stop.stop_sequence,
        arrival: parse_lenient(stop.arrival_time.as_deref()),
        departure: parse_lenient(stop.departure_time.as_deref()),
    })
}

/// Parse a time field that may be absent or malformed.
fn parse_lenient(time: Option<&str>) -> Option<TimetableTime> {
    TimetableTime::parse_hhmm(time?).ok()
}
