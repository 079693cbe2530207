//! Space-time trace builder for railway timetable diagrams.
//!
//! Converts one train's published station timetable into per-operating-line
//! traces of (time, position) points, ready for plotting on a distance-time
//! diagram.

pub mod diagram;
pub mod domain;
pub mod tdx;
