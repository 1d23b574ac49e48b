//! compression/mod.rs
//! Text compression for link payloads.
//!
//! Notes:
//! - Codecs are external compressors (xz, zstd, zlib) behind uniform traits.
//! - Every codec defaults to its highest preset.
//! - The registry resolves codec IDs to implementations; `Auto` sniffs on decode.
//! - Decompression is all-or-nothing: a cut or corrupt stream is an error.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod stream;
pub mod text;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use text::*;
