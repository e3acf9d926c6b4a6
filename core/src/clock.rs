//! Timestamp source for the simulation history.
//!
//! A record is stamped once at save time and never restamped.
//! The trait seam exists so tests can pin the timestamp.

use chrono::Local;

/// Render format of every stored timestamp: "YYYY-MM-DD HH:MM:SS".
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait Clock: Send {
    /// Current time, already rendered in TIMESTAMP_FORMAT.
    fn timestamp(&self) -> String;
}

/// Production clock — local wall time.
#[derive(Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Returns the same instant forever. Tests only.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
