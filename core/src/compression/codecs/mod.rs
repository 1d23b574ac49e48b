//! compression/codecs/mod.rs
//! Codec implementations behind the `Compressor` / `Decompressor` traits.

pub mod auto;
pub mod deflate;
pub mod xz;
pub mod zstd;

pub use self::auto::*;
pub use self::deflate::*;
pub use self::xz::*;
pub use self::zstd::*;
