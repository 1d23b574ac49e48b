//! src/compression/codecs/zstd.rs
//!
//! Zstd streaming compressor/decompressor.
//!
//! Design notes:
//! - Wraps the zstd streaming encoder with the uniform `Compressor` trait.
//! - Frames carry a content checksum so corruption is caught on decode.
//! - Errors are mapped into `CompressionError` variants with codec context.
//! - The decoder rejects a frame that ends early ("incomplete frame").
//! - A pledged input size lets level 22 pick tables fitting the input
//!   instead of its 128 MiB window defaults.

use std::io::{Read, Write};

use crate::compression::constants::MAX_LEVEL_ZSTD;
use crate::compression::types::{CompressionError, Compressor, Decompressor};

const CODEC: &str = "zstd";

/// Zstd streaming compressor.
/// - Holds an encoder writing into an internal Vec.
pub struct ZstdCompressor {
    encoder: Option<zstd::stream::Encoder<'static, Vec<u8>>>, // wrapped in Option to allow finish()
}

impl ZstdCompressor {
    /// Create a new Zstd compressor with given level.
    ///
    /// # Errors
    /// - `CompressionError::InvalidLevel` outside `1..=22`.
    /// - `CompressionError::CompressionFailed` if encoder initialization fails.
    pub fn new(level: i32) -> Result<Box<dyn Compressor + Send>, CompressionError> {
        if !(1..=MAX_LEVEL_ZSTD).contains(&level) {
            return Err(CompressionError::InvalidLevel { codec: CODEC, level, min: 1, max: MAX_LEVEL_ZSTD });
        }
        let mut encoder = zstd::stream::Encoder::new(Vec::new(), level)
            .map_err(|e| CompressionError::compress(CODEC, e))?;
        encoder.include_checksum(true)
            .map_err(|e| CompressionError::compress(CODEC, e))?;
        Ok(Box::new(Self { encoder: Some(encoder) }))
    }
}

impl Compressor for ZstdCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let encoder = self.encoder.as_mut()
            .ok_or_else(|| CompressionError::StateError("zstd encoder already finished".into()))?;
        encoder.write_all(input).map_err(|e| CompressionError::compress(CODEC, e))?;
        out.append(encoder.get_mut());
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let encoder = self.encoder.take()
            .ok_or_else(|| CompressionError::StateError("zstd encoder already finished".into()))?;
        let tail = encoder.finish().map_err(|e| CompressionError::compress(CODEC, e))?;
        out.extend_from_slice(&tail);
        Ok(())
    }

    fn set_input_size(&mut self, total: u64) -> Result<(), CompressionError> {
        let encoder = self.encoder.as_mut()
            .ok_or_else(|| CompressionError::StateError("zstd encoder already finished".into()))?;
        encoder.set_pledged_src_size(Some(total)).map_err(|e| CompressionError::compress(CODEC, e))
    }
}

/// Zstd decompressor.
/// - Buffers compressed input, decodes the whole frame on finish.
#[derive(Default)]
pub struct ZstdDecompressor {
    pending: Vec<u8>,
}

impl ZstdDecompressor {
    pub fn new() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        Ok(Box::new(Self::default()))
    }
}

impl Decompressor for ZstdDecompressor {
    fn decompress_chunk(&mut self, input: &[u8], _out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.pending.extend_from_slice(input);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let pending = std::mem::take(&mut self.pending);
        let mut decoder = zstd::stream::read::Decoder::new(pending.as_slice())
            .map_err(|e| CompressionError::decompress(CODEC, e))?;
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).map_err(|e| CompressionError::decompress(CODEC, e))?;
        out.append(&mut decoded);
        Ok(())
    }
}
