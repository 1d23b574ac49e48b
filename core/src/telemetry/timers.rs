//! telemetry/timers.rs
//! Wall-clock accounting for the five pipeline stages.
//!
//! A share call touches validate, compress and encode; playback touches
//! decode and decompress. Stages that never ran stay `None`.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Validate,
    Compress,
    Encode,
    Decode,
    Decompress,
}

impl Stage {
    pub const ALL: [Stage; 5] =
        [Stage::Validate, Stage::Compress, Stage::Encode, Stage::Decode, Stage::Decompress];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Validate => "validate",
            Stage::Compress => "compress",
            Stage::Encode => "encode",
            Stage::Decode => "decode",
            Stage::Decompress => "decompress",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decode: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decompress: Option<Duration>,
}

impl StageTimes {
    fn slot(&mut self, stage: Stage) -> &mut Option<Duration> {
        match stage {
            Stage::Validate => &mut self.validate,
            Stage::Compress => &mut self.compress,
            Stage::Encode => &mut self.encode,
            Stage::Decode => &mut self.decode,
            Stage::Decompress => &mut self.decompress,
        }
    }

    /// Recorded time for `stage`, if it ran.
    pub fn recorded(&self, stage: Stage) -> Option<Duration> {
        match stage {
            Stage::Validate => self.validate,
            Stage::Compress => self.compress,
            Stage::Encode => self.encode,
            Stage::Decode => self.decode,
            Stage::Decompress => self.decompress,
        }
    }

    /// Charge `dur` to `stage`; repeated calls accumulate.
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        let slot = self.slot(stage);
        *slot = Some(slot.unwrap_or(Duration::ZERO) + dur);
    }

    pub fn get(&self, stage: Stage) -> Duration {
        self.recorded(stage).unwrap_or(Duration::ZERO)
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    pub fn total(&self) -> Duration {
        self.iter().map(|(_, dur)| dur).sum()
    }

    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|stage| self.recorded(*stage).is_some())
    }

    /// Stages that ran, in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        Stage::ALL
            .into_iter()
            .filter_map(move |stage| self.recorded(stage).map(|dur| (stage, dur)))
    }
}

/// Timer for one share or playback call.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    started: Instant,
    stopped: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { started: Instant::now(), stopped: None, stage_times: StageTimes::default() }
    }

    /// Freeze `elapsed()`. Later calls keep the first stop time.
    pub fn finish(&mut self) {
        self.stopped.get_or_insert_with(Instant::now);
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.add_stage_time(stage, started.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(Instant::now).duration_since(self.started)
    }
}
