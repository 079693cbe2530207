//! Timetable time handling.
//!
//! The timetable feed provides times as "HH:MM" strings. This module
//! provides a validated clock-time type for them. No date is carried:
//! the pipeline processes a single operating day, and midnight-crossing
//! runs are an unresolved extension (see the assembler's rollover flag).

use chrono::{NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A clock time from a published timetable.
///
/// Parsed strictly from "HH:MM" (hour 0-23, minute 0-59). The feed's
/// malformed values ("", "-", out-of-range digits) all fail the parse and
/// are handled by the normalizer's substitution rule, never carried here.
///
/// # Examples
///
/// ```
/// use diagram_core::domain::TimetableTime;
///
/// let t = TimetableTime::parse_hhmm("08:02").unwrap();
/// assert_eq!(t.to_string(), "08:02");
/// assert_eq!(t.axis_key(), "08:02:00");
///
/// assert!(TimetableTime::parse_hhmm("802").is_err());
/// assert!(TimetableTime::parse_hhmm("25:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimetableTime(NaiveTime);

impl TimetableTime {
    /// Parse a time from "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Renders the "HH:MM:SS" key used by the time-axis lookup table.
    ///
    /// Timetable times have minute granularity, so the seconds field is a
    /// fixed ":00" suffix; the axis table is keyed at second granularity.
    pub fn axis_key(&self) -> String {
        format!("{:02}:{:02}:00", self.hour(), self.minute())
    }
}

impl Ord for TimetableTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for TimetableTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for TimetableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimetableTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimetableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
