// File: src/core/stats.rs
use serde::{Deserialize, Serialize};

/// Success/failure counters for one word. Counters saturate instead of
/// wrapping, so a huge count read from disk can never reset to zero.
///
/// Field names are capitalised on disk to stay compatible with existing
/// `stats.json` files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStat {
    #[serde(rename = "Success")]
    pub success: u32,
    #[serde(rename = "Failure")]
    pub failure: u32,
}

impl WordStat {
    pub fn new(success: u32, failure: u32) -> Self {
        Self { success, failure }
    }

    pub fn total(&self) -> u32 {
        self.success.saturating_add(self.failure)
    }

    pub fn incr_success(self) -> Self {
        Self { success: self.success.saturating_add(1), ..self }
    }

    pub fn incr_failure(self) -> Self {
        Self { failure: self.failure.saturating_add(1), ..self }
    }

    /// Returns a number between 0 and 1; 0 when nothing was recorded.
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.success) / f64::from(total),
        }
    }
}
