//! telemetry/counters.rs
//! Mutable counters used during one share or playback call.
//!
//! Summary: Collects text, payload and token sizes.
//! Converted into immutable TelemetrySnapshot at the end of the call.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// UTF-8 bytes of the recording text.
    pub bytes_text: u64,
    /// Bytes of the compressed payload.
    pub bytes_compressed: u64,
    /// Characters in the base-62 token.
    pub token_chars: u64,
}

impl TelemetryCounters {
    pub fn add_text(&mut self, text_len: usize) {
        self.bytes_text += text_len as u64;
    }

    pub fn add_compressed(&mut self, payload_len: usize) {
        self.bytes_compressed += payload_len as u64;
    }

    pub fn add_token(&mut self, token_len: usize) {
        self.token_chars += token_len as u64;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.bytes_text += other.bytes_text;
        self.bytes_compressed += other.bytes_compressed;
        self.token_chars += other.token_chars;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
