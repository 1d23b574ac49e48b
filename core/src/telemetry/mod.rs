//! Per-call telemetry for share and playback.
//!
//! Each call owns its counters and timer and hands back an immutable
//! `TelemetrySnapshot`; nothing is global.

mod counters;
mod snapshot;
mod timers;

pub use counters::TelemetryCounters;
pub use snapshot::TelemetrySnapshot;
pub use timers::{Stage, StageTimes, TelemetryTimer};
