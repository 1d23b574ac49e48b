//! radix/mod.rs
//! Integer-radix codec: byte sequences <-> base-62 tokens.
//!
//! Design notes:
//! - Bytes are read as one unsigned big-endian integer; the token is its base-62
//!   representation, most significant digit first.
//! - Conversion is value based. Leading zero bytes do not survive a round trip,
//!   and both `[]` and `[0]` encode to `"0"`.
//! - Large values are split recursively by precomputed powers of 62, so the cost
//!   follows big-integer multiplication rather than a digit-by-digit long division.

pub mod types;
pub mod powers;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
