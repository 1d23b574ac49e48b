/// Token alphabet. The ordinal of each symbol is its digit value.
/// Encoders and decoders on both ends of a link must agree on it byte for byte.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Radix of the token representation.
pub const RADIX: u64 = 62;

/// Base-62 digits that always fit in a `u64` (62^10 < 2^64 < 62^11).
pub const DIGITS_PER_WORD: usize = 10;

/// 62^DIGITS_PER_WORD, the leaf of the divide-and-conquer conversion.
pub const WORD_RADIX: u64 = 839_299_365_868_340_224;

/// Query-string parameter that carries the token in a share link.
pub const DEFAULT_QUERY_PARAM: &str = "cast";

/// Base URL used when no share page is configured.
pub const DEFAULT_BASE_URL: &str = "https://asciicast.link/";

/// Defaults when Option<T> is None
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64 KiB
/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;
