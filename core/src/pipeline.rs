//! pipeline.rs
//! Share and playback: the two compositions of the codec stages.
//!
//! share:    text -> validate -> compress -> encode -> URL
//! playback: URL/token -> extract -> decode -> decompress -> text

use tracing::{debug, info};
use url::Url;

use crate::{
    cast::validate_recording,
    compression::{check_level, compress_with, decompress_with, stream::check_chunk_size, CompressionCodec},
    constants::{DEFAULT_BASE_URL, DEFAULT_CHUNK_SIZE, DEFAULT_QUERY_PARAM},
    link::ShareLink,
    radix,
    telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer},
    types::LinkError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Codec for new links. `Auto` means the default codec.
    /// Playback always sniffs the payload format.
    pub codec: CompressionCodec,

    /// Compression level; `None` selects the codec maximum.
    pub level: Option<i32>,

    /// Streaming block size for the compressor.
    pub chunk_size: usize,

    /// Page the share link points at.
    pub base_url: String,

    /// Query-string parameter carrying the token.
    pub query_param: String,

    /// Run the first-line JSON check before sharing.
    pub validate_cast: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            codec: CompressionCodec::default(),
            level: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            base_url: DEFAULT_BASE_URL.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            validate_cast: true,
        }
    }
}

impl ApiConfig {
    pub fn new(
        codec: Option<CompressionCodec>,
        level: Option<i32>,
        base_url: Option<String>,
        query_param: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            codec: codec.unwrap_or(defaults.codec),
            level,
            base_url: base_url.unwrap_or(defaults.base_url),
            query_param: query_param.unwrap_or(defaults.query_param),
            ..defaults
        }
    }

    /// Check every field before any work starts.
    pub fn validate(&self) -> Result<(), LinkError> {
        check_chunk_size(self.chunk_size)?;
        check_level(self.codec as u16, self.level)?;
        self.share_link()?;
        Ok(())
    }

    pub fn share_link(&self) -> Result<ShareLink, LinkError> {
        ShareLink::new(&self.base_url, self.query_param.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ShareOutcome {
    pub token: String,
    pub url: Url,
    pub snapshot: TelemetrySnapshot,
}

#[derive(Debug, Clone)]
pub struct PlaybackOutcome {
    pub text: String,
    pub snapshot: TelemetrySnapshot,
}

/// Build a share link for a recording.
///
/// Surrounding whitespace is trimmed before anything else, matching what a
/// paste box hands over.
pub fn share(text: &str, config: &ApiConfig) -> Result<ShareOutcome, LinkError> {
    config.validate()?;
    let link = config.share_link()?;
    let text = text.trim();

    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new();
    counters.add_text(text.len());

    if config.validate_cast {
        let header = timer.time(Stage::Validate, || validate_recording(text))?;
        debug!(version = ?header.version, width = ?header.width, height = ?header.height, "recording header ok");
    }

    let payload = timer.time(Stage::Compress, || {
        compress_with(text, config.codec, config.level, config.chunk_size)
    })?;
    counters.add_compressed(payload.len());

    let token = timer.time(Stage::Encode, || radix::encode(&payload));
    counters.add_token(token.len());

    let url = link.build(&token);
    timer.finish();
    let snapshot = TelemetrySnapshot::from(&counters, &timer);
    info!(
        text_bytes = snapshot.bytes_text,
        compressed_bytes = snapshot.bytes_compressed,
        token_chars = snapshot.token_chars,
        "share link ready"
    );

    Ok(ShareOutcome { token, url, snapshot })
}

/// Recover a recording from a share link or a bare token.
pub fn playback(input: &str, config: &ApiConfig) -> Result<PlaybackOutcome, LinkError> {
    check_chunk_size(config.chunk_size)?;
    let link = config.share_link()?;
    let token = link.extract(input)?;

    let mut counters = TelemetryCounters::default();
    let mut timer = TelemetryTimer::new();
    counters.add_token(token.len());

    let payload = timer.time(Stage::Decode, || radix::decode(&token))?;
    counters.add_compressed(payload.len());

    let text = timer.time(Stage::Decompress, || {
        decompress_with(&payload, CompressionCodec::Auto, config.chunk_size)
    })?;
    counters.add_text(text.len());

    timer.finish();
    let snapshot = TelemetrySnapshot::from(&counters, &timer);
    info!(
        token_chars = snapshot.token_chars,
        text_bytes = snapshot.bytes_text,
        "recording recovered"
    );

    Ok(PlaybackOutcome { text, snapshot })
}
