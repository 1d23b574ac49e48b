//! telemetry/snapshot.rs
//!
//! Immutable result of one share or playback call.
//!
//! Design notes:
//! - `compression_ratio` is compressed / text, `reduction_percent` its complement
//!   in percent. Both are 0 for empty text.
//! - The ratio is not capped: tiny recordings can grow under compression.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub bytes_text: u64,
    pub bytes_compressed: u64,
    pub token_chars: u64,
    pub compression_ratio: f64,
    pub reduction_percent: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let compression_ratio = if counters.bytes_text > 0 {
            counters.bytes_compressed as f64 / counters.bytes_text as f64
        } else {
            0.0
        };
        let reduction_percent = if counters.bytes_text > 0 {
            (1.0 - compression_ratio) * 100.0
        } else {
            0.0
        };

        Self {
            bytes_text: counters.bytes_text,
            bytes_compressed: counters.bytes_compressed,
            token_chars: counters.token_chars,
            compression_ratio,
            reduction_percent,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times,
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// `Original: 1.2KB → Compressed: 0.4KB (66.7% reduction)`
    pub fn summary(&self) -> String {
        format!(
            "Original: {:.1}KB → Compressed: {:.1}KB ({:.1}% reduction)",
            self.bytes_text as f64 / 1024.0,
            self.bytes_compressed as f64 / 1024.0,
            self.reduction_percent,
        )
    }
}
