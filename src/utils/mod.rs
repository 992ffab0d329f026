//! Utility functions

pub mod time;

pub use time::{duration_nanos, format_nanos, time_nanos};
