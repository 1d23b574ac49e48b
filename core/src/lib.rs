//! castlink-core
//!
//! Turns asciicast recordings into compact share-link tokens and back.
//! Pure Rust, blocking calls, no global state.
//!
//! The four codec operations live at the crate root:
//!
//! ```
//! let payload = castlink_core::compress("{\"version\":2}\n")?;
//! let token = castlink_core::encode(&payload);
//! let text = castlink_core::decompress(&castlink_core::decode(&token)?)?;
//! assert_eq!(text, "{\"version\":2}\n");
//! # Ok::<(), castlink_core::LinkError>(())
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec stages
pub mod radix;
pub mod compression;

// Link handling
pub mod cast;
pub mod link;
pub mod pipeline;
pub mod telemetry;

pub use compression::{compress, decompress, CompressionCodec, CompressionError};
pub use radix::{decode, encode, RadixError};
pub use types::LinkError;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::cast::{validate_recording, CastError, CastHeader};
    pub use crate::compression::{CompressionCodec, CompressionError};
    pub use crate::link::ShareLink;
    pub use crate::pipeline::{playback, share, ApiConfig, PlaybackOutcome, ShareOutcome};
    pub use crate::radix::RadixError;
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::LinkError;
    pub use crate::{compress, decode, decompress, encode};
}
