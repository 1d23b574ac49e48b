//! codecs/auto.rs
//! Format-sniffing decompressor.
//!
//! Compression under `Auto` resolves to the default codec in the registry; this
//! file only handles the decode side, picking the codec from the stream magic.

use tracing::debug;

use crate::compression::registry::create_decompressor;
use crate::compression::types::{CompressionCodec, CompressionError, Decompressor};

#[derive(Default)]
pub struct AutoDecompressor {
    pending: Vec<u8>,
}

impl AutoDecompressor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decompressor for AutoDecompressor {
    fn decompress_chunk(&mut self, input: &[u8], _out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.pending.extend_from_slice(input);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let pending = std::mem::take(&mut self.pending);
        let codec = CompressionCodec::detect(&pending).ok_or_else(|| {
            CompressionError::decompress(
                "auto",
                std::io::Error::new(std::io::ErrorKind::InvalidData, "unrecognized compressed stream format"),
            )
        })?;
        debug!(%codec, bytes = pending.len(), "detected payload codec");

        let mut inner = create_decompressor(codec as u16)?;
        inner.decompress_chunk(&pending, out)?;
        inner.finish(out)
    }
}
