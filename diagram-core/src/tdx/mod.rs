//! TDX daily-timetable feed: raw DTOs and conversion to domain types.
//!
//! Fetching the feed is the caller's concern; this module only describes
//! its JSON shape and validates it into the domain model.

mod convert;
pub mod types;

pub use convert::{InputContractError, convert_timetable};
