//! compression/text.rs
//! Text <-> compressed bytes, the adapter used by the link pipeline.

use std::io;

use tracing::{debug, warn};

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::compression::registry::{create_compressor, create_decompressor};
use crate::compression::stream::{collect_chunks, compress_stream, decompress_stream};
use crate::compression::types::{CompressionCodec, CompressionError};

/// Compress UTF-8 text with the default codec at its highest preset.
pub fn compress(text: &str) -> Result<Vec<u8>, CompressionError> {
    compress_with(text, CompressionCodec::default(), None, DEFAULT_CHUNK_SIZE)
}

/// Decompress a payload produced by any registered codec back into text.
pub fn decompress(data: &[u8]) -> Result<String, CompressionError> {
    decompress_with(data, CompressionCodec::Auto, DEFAULT_CHUNK_SIZE)
}

/// Compress `text` with an explicit codec, level (codec maximum when `None`)
/// and streaming chunk size.
pub fn compress_with(
    text: &str,
    codec: CompressionCodec,
    level: Option<i32>,
    chunk_size: usize,
) -> Result<Vec<u8>, CompressionError> {
    let mut compressor = create_compressor(codec as u16, level)?;
    compressor.set_input_size(text.len() as u64)?;
    let compressed = collect_chunks(compress_stream(text.as_bytes(), chunk_size, compressor)?)?;

    debug!(%codec, text_bytes = text.len(), compressed_bytes = compressed.len(), "compressed text");
    if compressed.len() >= text.len() && !text.is_empty() {
        warn!(text_bytes = text.len(), compressed_bytes = compressed.len(), "compression did not shrink input");
    }
    Ok(compressed)
}

/// Decompress `data` with an explicit codec (`Auto` sniffs the stream magic).
/// The result must be valid UTF-8.
pub fn decompress_with(
    data: &[u8],
    codec: CompressionCodec,
    chunk_size: usize,
) -> Result<String, CompressionError> {
    let decompressor = create_decompressor(codec as u16)?;
    let raw = collect_chunks(decompress_stream(data, chunk_size, decompressor)?)?;
    debug!(%codec, compressed_bytes = data.len(), text_bytes = raw.len(), "decompressed payload");

    String::from_utf8(raw).map_err(|e| {
        CompressionError::decompress(codec.name(), io::Error::new(io::ErrorKind::InvalidData, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_round_trips() {
        let packed = compress("").unwrap();
        assert_eq!(decompress(&packed).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_payload_is_rejected() {
        let compressor = create_compressor(CompressionCodec::Xz as u16, None).unwrap();
        let packed = collect_chunks(compress_stream(&[0xC3u8, 0x28][..], 16, compressor).unwrap()).unwrap();
        assert!(matches!(
            decompress(&packed),
            Err(CompressionError::DecompressionFailed { .. })
        ));
    }
}
