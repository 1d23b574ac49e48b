//! compression/types.rs
//! Codec identifiers, errors and the compressor/decompressor traits.
use std::{fmt, io, str::FromStr};

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::compression::constants::{codec_ids, XZ_MAGIC, ZLIB_CMF_DEFLATE_32K, ZSTD_MAGIC};

/// Compression codec identifiers.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionCodec {
    Auto    = codec_ids::AUTO,
    Xz      = codec_ids::XZ,
    Zstd    = codec_ids::ZSTD,
    Deflate = codec_ids::DEFLATE,
}

impl Default for CompressionCodec {
    fn default() -> Self {
        CompressionCodec::Xz
    }
}

impl CompressionCodec {
    pub fn verify(raw: u16) -> Result<Self, CompressionError> {
        Self::try_from_primitive(raw).map_err(|_| CompressionError::UnsupportedCodec { codec_id: raw })
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressionCodec::Auto    => "auto",
            CompressionCodec::Xz      => "xz",
            CompressionCodec::Zstd    => "zstd",
            CompressionCodec::Deflate => "deflate",
        }
    }

    /// Identify a compressed stream by its leading bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(&XZ_MAGIC) {
            return Some(CompressionCodec::Xz);
        }
        if data.starts_with(&ZSTD_MAGIC) {
            return Some(CompressionCodec::Zstd);
        }
        // zlib: CMF/FLG pair is a multiple of 31.
        if data.len() >= 2
            && data[0] == ZLIB_CMF_DEFLATE_32K
            && (u16::from(data[0]) << 8 | u16::from(data[1])) % 31 == 0
        {
            return Some(CompressionCodec::Deflate);
        }
        None
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionCodec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto"            => Ok(CompressionCodec::Auto),
            "xz"              => Ok(CompressionCodec::Xz),
            "zstd"            => Ok(CompressionCodec::Zstd),
            "deflate" | "zlib" => Ok(CompressionCodec::Deflate),
            other => Err(format!("unknown codec '{other}' (expected auto, xz, zstd or deflate)")),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("unsupported compression codec: 0x{codec_id:04x}")]
    UnsupportedCodec { codec_id: u16 },

    #[error("invalid {codec} level {level} (allowed {min}..={max})")]
    InvalidLevel { codec: &'static str, level: i32, min: i32, max: i32 },

    #[error("compression failed ({codec}): {source}")]
    CompressionFailed {
        codec: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("decompression failed ({codec}): {source}")]
    DecompressionFailed {
        codec: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("invalid chunk size {have} (allowed 1..={max})")]
    ChunkSize { have: usize, max: usize },

    #[error("compression state error: {0}")]
    StateError(String),
}

impl CompressionError {
    pub(crate) fn compress(codec: &'static str, source: io::Error) -> Self {
        CompressionError::CompressionFailed { codec, source }
    }

    pub(crate) fn decompress(codec: &'static str, source: io::Error) -> Self {
        CompressionError::DecompressionFailed { codec, source }
    }
}

// Require Send so trait objects can cross thread boundaries.
pub trait Compressor: Send {
    /// Compress a chunk, appending whatever output the encoder released to `out`.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
    /// Flush pending state and close the stream. Further calls fail.
    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError>;
    /// Announce the total input length before the first chunk so the encoder
    /// can size its tables. Ignored by codecs without such tuning.
    fn set_input_size(&mut self, _total: u64) -> Result<(), CompressionError> {
        Ok(())
    }
}

/// Decompressors buffer their input and decode in `finish`, so a truncated or
/// corrupt stream fails as a whole and never hands out partial output.
pub trait Decompressor: Send {
    /// Accept a chunk of compressed input.
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
    /// Decode the complete stream into `out`.
    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
