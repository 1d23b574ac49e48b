//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{auto, deflate, xz, zstd};
use crate::compression::constants::{codec_ids, MAX_LEVEL_DEFLATE, MAX_LEVEL_XZ, MAX_LEVEL_ZSTD};
use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub min_level: i32,
    pub max_level: i32,
    /// Levels default to the maximum: links favour ratio over speed.
    pub default_level: i32,
}

pub fn resolve(codec_id: u16) -> Result<CodecInfo, CompressionError> {
    match codec_id {
        // Auto compresses with the default codec.
        x if x == codec_ids::AUTO => resolve(CompressionCodec::default() as u16),
        x if x == codec_ids::XZ =>
            Ok(CodecInfo { name: "xz", min_level: 0, max_level: MAX_LEVEL_XZ, default_level: MAX_LEVEL_XZ }),
        x if x == codec_ids::ZSTD =>
            Ok(CodecInfo { name: "zstd", min_level: 1, max_level: MAX_LEVEL_ZSTD, default_level: MAX_LEVEL_ZSTD }),
        x if x == codec_ids::DEFLATE =>
            Ok(CodecInfo { name: "deflate", min_level: 0, max_level: MAX_LEVEL_DEFLATE, default_level: MAX_LEVEL_DEFLATE }),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}

/// Check an optional level against the codec range without building an encoder.
pub fn check_level(codec_id: u16, level: Option<i32>) -> Result<i32, CompressionError> {
    let info = resolve(codec_id)?;
    let level = level.unwrap_or(info.default_level);
    if level < info.min_level || level > info.max_level {
        return Err(CompressionError::InvalidLevel {
            codec: info.name,
            level,
            min: info.min_level,
            max: info.max_level,
        });
    }
    Ok(level)
}

pub fn create_compressor(codec_id: u16, level: Option<i32>)
    -> Result<Box<dyn Compressor + Send>, CompressionError>
{
    let level = check_level(codec_id, level)?;
    match codec_id {
        x if x == codec_ids::AUTO => create_compressor(CompressionCodec::default() as u16, Some(level)),
        x if x == codec_ids::XZ => xz::XzCompressor::new(level),
        x if x == codec_ids::ZSTD => zstd::ZstdCompressor::new(level),
        x if x == codec_ids::DEFLATE => deflate::DeflateCompressor::new(level),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}

pub fn create_decompressor(codec_id: u16)
    -> Result<Box<dyn Decompressor + Send>, CompressionError>
{
    match codec_id {
        x if x == codec_ids::AUTO => Ok(Box::new(auto::AutoDecompressor::new())),
        x if x == codec_ids::XZ => xz::XzDecompressor::new(),
        x if x == codec_ids::ZSTD => zstd::ZstdDecompressor::new(),
        x if x == codec_ids::DEFLATE => deflate::DeflateDecompressor::new(),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}
