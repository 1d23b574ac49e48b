//! src/compression/codecs/xz.rs
//!
//! XZ (LZMA2) compressor/decompressor.
//!
//! Design notes:
//! - Output is a plain `.xz` stream with a CRC64 check, the format existing
//!   share links carry.
//! - The encoder writes into an internal Vec which is drained after every chunk.
//! - The decoder reports a stream that ends before its footer as an error.

use std::io::{self, Read, Write};

use xz2::read::XzDecoder;
use xz2::stream::{Check, Filters, LzmaOptions, Stream};
use xz2::write::XzEncoder;

use crate::compression::constants::MAX_LEVEL_XZ;
use crate::compression::types::{CompressionError, Compressor, Decompressor};

const CODEC: &str = "xz";

/// liblzma rejects dictionaries below 4 KiB.
const MIN_DICT_SIZE: u32 = 4096;

/// Dictionary size of each `xz -0` .. `xz -9` preset.
const PRESET_DICT_SIZES: [u32; 10] = [
    256 << 10, 1 << 20, 2 << 20, 4 << 20, 4 << 20,
    8 << 20, 8 << 20, 16 << 20, 32 << 20, 64 << 20,
];

fn lzma_error(e: xz2::stream::Error) -> CompressionError {
    CompressionError::compress(CODEC, io::Error::new(io::ErrorKind::Other, e))
}

pub struct XzCompressor {
    level: u32,
    encoder: Option<XzEncoder<Vec<u8>>>, // wrapped in Option to allow finish()
    started: bool,
}

impl XzCompressor {
    /// # Errors
    /// - `CompressionError::InvalidLevel` outside `0..=9`.
    /// - `CompressionError::CompressionFailed` if liblzma cannot set up the encoder.
    pub fn new(level: i32) -> Result<Box<dyn Compressor + Send>, CompressionError> {
        if !(0..=MAX_LEVEL_XZ).contains(&level) {
            return Err(CompressionError::InvalidLevel { codec: CODEC, level, min: 0, max: MAX_LEVEL_XZ });
        }
        let level = level as u32;
        let stream = Stream::new_easy_encoder(level, Check::Crc64).map_err(lzma_error)?;
        Ok(Box::new(Self {
            level,
            encoder: Some(XzEncoder::new_stream(Vec::new(), stream)),
            started: false,
        }))
    }
}

impl Compressor for XzCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let encoder = self.encoder.as_mut()
            .ok_or_else(|| CompressionError::StateError("xz encoder already finished".into()))?;
        self.started = true;
        encoder.write_all(input).map_err(|e| CompressionError::compress(CODEC, e))?;
        out.append(encoder.get_mut());
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let encoder = self.encoder.take()
            .ok_or_else(|| CompressionError::StateError("xz encoder already finished".into()))?;
        let tail = encoder.finish().map_err(|e| CompressionError::compress(CODEC, e))?;
        out.extend_from_slice(&tail);
        Ok(())
    }

    /// Rebuild the encoder with a dictionary no larger than the input.
    /// The preset's other settings stay as they are.
    fn set_input_size(&mut self, total: u64) -> Result<(), CompressionError> {
        if self.started || self.encoder.is_none() {
            return Err(CompressionError::StateError("xz input size set after first chunk".into()));
        }
        let mut options = LzmaOptions::new_preset(self.level).map_err(lzma_error)?;
        let preset_dict = PRESET_DICT_SIZES[self.level as usize];
        let dict_size = u32::try_from(total).unwrap_or(u32::MAX).clamp(MIN_DICT_SIZE, preset_dict);
        options.dict_size(dict_size);
        let mut filters = Filters::new();
        filters.lzma2(&options);
        let stream = Stream::new_stream_encoder(&filters, Check::Crc64).map_err(lzma_error)?;
        self.encoder = Some(XzEncoder::new_stream(Vec::new(), stream));
        Ok(())
    }
}

#[derive(Default)]
pub struct XzDecompressor {
    pending: Vec<u8>,
}

impl XzDecompressor {
    pub fn new() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        Ok(Box::new(Self::default()))
    }
}

impl Decompressor for XzDecompressor {
    fn decompress_chunk(&mut self, input: &[u8], _out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.pending.extend_from_slice(input);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let pending = std::mem::take(&mut self.pending);
        let mut decoder = XzDecoder::new(pending.as_slice());
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).map_err(|e| CompressionError::decompress(CODEC, e))?;
        out.append(&mut decoded);
        Ok(())
    }
}
