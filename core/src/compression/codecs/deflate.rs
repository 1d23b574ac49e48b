//! Deflate (zlib wrapper) via flate2 with streaming enc, whole-stream dec.

use std::io::{self, Write};

use flate2::{write::ZlibEncoder, Compression, Decompress, FlushDecompress, Status};

use crate::compression::constants::MAX_LEVEL_DEFLATE;
use crate::compression::types::{CompressionError, Compressor, Decompressor};

const CODEC: &str = "deflate";

pub struct DeflateCompressor {
    encoder: Option<ZlibEncoder<Vec<u8>>>,
}

impl DeflateCompressor {
    pub fn new(level: i32) -> Result<Box<dyn Compressor + Send>, CompressionError> {
        if !(0..=MAX_LEVEL_DEFLATE).contains(&level) {
            return Err(CompressionError::InvalidLevel { codec: CODEC, level, min: 0, max: MAX_LEVEL_DEFLATE });
        }
        let encoder = ZlibEncoder::new(Vec::new(), Compression::new(level as u32));
        Ok(Box::new(Self { encoder: Some(encoder) }))
    }
}

impl Compressor for DeflateCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let encoder = self.encoder.as_mut()
            .ok_or_else(|| CompressionError::StateError("deflate encoder already finished".into()))?;
        encoder.write_all(input).map_err(|e| CompressionError::compress(CODEC, e))?;
        out.append(encoder.get_mut());
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let encoder = self.encoder.take()
            .ok_or_else(|| CompressionError::StateError("deflate encoder already finished".into()))?;
        let tail = encoder.finish().map_err(|e| CompressionError::compress(CODEC, e))?;
        out.extend_from_slice(&tail);
        Ok(())
    }
}

#[derive(Default)]
pub struct DeflateDecompressor {
    pending: Vec<u8>,
}

impl DeflateDecompressor {
    pub fn new() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        Ok(Box::new(Self::default()))
    }
}

impl Decompressor for DeflateDecompressor {
    fn decompress_chunk(&mut self, input: &[u8], _out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.pending.extend_from_slice(input);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let pending = std::mem::take(&mut self.pending);
        let mut decoded = inflate_zlib(&pending).map_err(|e| CompressionError::decompress(CODEC, e))?;
        out.append(&mut decoded);
        Ok(())
    }
}

/// Inflate one complete zlib stream.
///
/// The buffered `ZlibDecoder` readers report a cut-off stream as a clean EOF,
/// so this drives `Decompress` directly and requires `Status::StreamEnd`.
/// `FlushDecompress::None` keeps the inflater resumable while `out` grows.
fn inflate_zlib(input: &[u8]) -> io::Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(input.len().saturating_mul(4).max(1024));

    loop {
        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let status = inflater
            .decompress_vec(&input[before_in as usize..], &mut out, FlushDecompress::None)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        match status {
            Status::StreamEnd => return Ok(out),
            _ if out.len() == out.capacity() => out.reserve(out.capacity()),
            _ if inflater.total_in() == before_in && inflater.total_out() == before_out => {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated zlib stream"));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zlib(data: &[u8]) -> Vec<u8> {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn inflate_grows_output_buffer() {
        let data = vec![b'x'; 1 << 20];
        assert_eq!(inflate_zlib(&zlib(&data)).unwrap(), data);
    }

    #[test]
    fn inflate_rejects_cut_stream() {
        let stream = zlib(b"a recording line that is long enough to matter\n");
        let err = inflate_zlib(&stream[..stream.len() - 3]).unwrap_err();
        assert!(matches!(err.kind(), io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData));
    }
}
