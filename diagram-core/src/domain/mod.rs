//! Domain types for the space-time trace builder.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod line;
mod station;
mod time;
mod train;

pub use line::{InvalidLineId, LineId};
pub use station::{InvalidStationId, StationId};
pub use time::{TimeError, TimetableTime};
pub use train::{Direction, StopRecord, TrainMeta, TrainTimetable};
