//! compression/stream.rs
//! Streaming helpers that respect chunk_size discipline.
use std::io::{ErrorKind, Read};

use crate::constants::MAX_CHUNK_SIZE;
use crate::compression::types::{CompressionError, Compressor, Decompressor};

/// Reject chunk sizes outside `1..=MAX_CHUNK_SIZE`.
pub fn check_chunk_size(chunk_size: usize) -> Result<(), CompressionError> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(CompressionError::ChunkSize { have: chunk_size, max: MAX_CHUNK_SIZE });
    }
    Ok(())
}

/// Summary: Compress data read from R in chunk_size blocks, yielding compressed chunks.
/// - Empty encoder output for a block is skipped rather than yielded.
/// - Calls compressor.finish() once after EOF to flush pending state.
/// - The first error ends the stream.
pub fn compress_stream<R: Read>(
    mut r: R,
    chunk_size: usize,
    mut compressor: Box<dyn Compressor>,
) -> Result<impl Iterator<Item = Result<Vec<u8>, CompressionError>>, CompressionError> {
    check_chunk_size(chunk_size)?;
    let mut buf = vec![0u8; chunk_size];
    let mut done = false;

    Ok(std::iter::from_fn(move || {
        while !done {
            match r.read(&mut buf) {
                Ok(0) => {
                    done = true;
                    let mut out = Vec::new();
                    return match compressor.finish(&mut out) {
                        Ok(()) if out.is_empty() => None,
                        Ok(()) => Some(Ok(out)),
                        Err(e) => Some(Err(e)),
                    };
                }
                Ok(n) => {
                    let mut out = Vec::new();
                    if let Err(e) = compressor.compress_chunk(&buf[..n], &mut out) {
                        done = true;
                        return Some(Err(e));
                    }
                    if !out.is_empty() {
                        return Some(Ok(out));
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    done = true;
                    return Some(Err(CompressionError::StateError(format!("read error: {e}"))));
                }
            }
        }
        None
    }))
}

/// Summary: Feed data read from R in chunk_size blocks to a decompressor.
/// - Output is only produced once the whole stream has been read and verified,
///   so the iterator yields at most one chunk.
pub fn decompress_stream<R: Read>(
    mut r: R,
    chunk_size: usize,
    mut decompressor: Box<dyn Decompressor>,
) -> Result<impl Iterator<Item = Result<Vec<u8>, CompressionError>>, CompressionError> {
    check_chunk_size(chunk_size)?;
    let mut buf = vec![0u8; chunk_size];
    let mut done = false;

    Ok(std::iter::from_fn(move || {
        while !done {
            let mut out = Vec::new();
            let step = match r.read(&mut buf) {
                Ok(0) => {
                    done = true;
                    decompressor.finish(&mut out)
                }
                Ok(n) => decompressor.decompress_chunk(&buf[..n], &mut out),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => Err(CompressionError::StateError(format!("read error: {e}"))),
            };
            match step {
                Ok(()) if out.is_empty() => {}
                Ok(()) => return Some(Ok(out)),
                Err(e) => {
                    done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }))
}

/// Drain a chunk iterator into one buffer, stopping at the first error.
pub fn collect_chunks<I>(chunks: I) -> Result<Vec<u8>, CompressionError>
where
    I: Iterator<Item = Result<Vec<u8>, CompressionError>>,
{
    chunks.into_iter().try_fold(Vec::new(), |mut acc, chunk| {
        acc.extend_from_slice(&chunk?);
        Ok(acc)
    })
}
