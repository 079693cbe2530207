//! Pipeline error types.
//!
//! Any of these aborts the current train: downstream rendering assumes a
//! complete, internally consistent trace per line, so a partial trace is
//! never emitted.

use crate::domain::StationId;
use crate::tdx::InputContractError;

/// Errors raised while building a train's space-time trace.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DiagramError {
    /// A stop record has neither a usable arrival nor departure time
    #[error("stop {sequence} at station {station}: no usable arrival or departure time")]
    MalformedStop { station: StationId, sequence: u32 },

    /// A normalized time has no entry in the time-axis table
    #[error("station {station}: time {time} has no entry in the time axis")]
    UnmappedTime { station: StationId, time: String },

    /// The raw feed record violated its structural contract
    #[error(transparent)]
    Contract(#[from] InputContractError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DiagramError::MalformedStop {
            station: StationId::parse("1000").unwrap(),
            sequence: 3,
        };
        assert_eq!(
            err.to_string(),
            "stop 3 at station 1000: no usable arrival or departure time"
        );

        let err = DiagramError::UnmappedTime {
            station: StationId::parse("4220").unwrap(),
            time: "26:00:00".into(),
        };
        assert_eq!(
            err.to_string(),
            "station 4220: time 26:00:00 has no entry in the time axis"
        );

        let err = DiagramError::from(InputContractError::EmptyTrainNo);
        assert_eq!(err.to_string(), "train number must not be empty");
    }
}
