use thiserror::Error;

use crate::{cast::CastError, compression::CompressionError, radix::RadixError};

/// Unified link error covering input validation, radix, compression and URL handling.
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - The wrapped module error stays reachable through `source()`.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Recording failed the first-line JSON check.
    #[error(transparent)]
    InvalidInputFormat(#[from] CastError),

    /// Token could not be decoded (bad character, empty token).
    #[error(transparent)]
    Radix(#[from] RadixError),

    /// Compression or decompression failed.
    #[error(transparent)]
    Compression(#[from] CompressionError),

    /// Base URL or share link did not parse.
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Share link has no token in the expected query parameter.
    #[error("no '{param}' parameter in link")]
    MissingToken { param: String },

    /// Generic configuration problem with a descriptive message.
    #[error("configuration error: {0}")]
    Config(String),
}

impl LinkError {
    /// True when the failure came from the user's recording or link rather
    /// than from a compressor.
    pub fn is_input_error(&self) -> bool {
        match self {
            LinkError::InvalidInputFormat(_)
            | LinkError::Radix(_)
            | LinkError::InvalidUrl { .. }
            | LinkError::MissingToken { .. } => true,
            LinkError::Compression(CompressionError::DecompressionFailed { .. }) => true,
            LinkError::Compression(_) | LinkError::Config(_) => false,
        }
    }
}
