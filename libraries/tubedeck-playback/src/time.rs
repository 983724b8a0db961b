//! Elapsed/total time display

use serde::{Deserialize, Serialize};
use std::fmt;

/// Format seconds as `minutes:seconds`
///
/// Seconds are zero-padded to two digits and truncated, never rounded.
/// Minutes keep counting past an hour (`3600.0` is `"60:00"`).
/// Negative and NaN inputs render as `"0:00"`.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Elapsed and total time of the current track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDisplay {
    /// Elapsed seconds
    pub elapsed: f64,
    /// Track length in seconds
    pub total: f64,
}

impl fmt::Display for TimeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", format_time(self.elapsed), format_time(self.total))
    }
}
