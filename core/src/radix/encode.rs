//! src/radix/encode.rs
//!
//! Byte sequence -> base-62 token.
//!
//! Design notes:
//! - The value is split by the largest power of 62 below it into a high and a
//!   low half; the low half is always written at its full, zero-padded width.
//! - Leaves are below 62^10 and are converted with plain `u64` arithmetic.
//! - Encoding never fails; an empty or all-zero input yields `"0"`.

use ibig::{ops::DivRem, UBig};
use tracing::trace;

use crate::constants::{ALPHABET, DIGITS_PER_WORD, RADIX};
use crate::radix::powers::RadixPowers;
use crate::radix::types::digit_symbol;

/// Encode `bytes` (read as an unsigned big-endian integer) as a base-62 token.
pub fn encode(bytes: &[u8]) -> String {
    let value = UBig::from_be_bytes(bytes);
    let powers = RadixPowers::covering(&value);
    trace!(bytes = bytes.len(), levels = powers.len(), "radix encode");

    // ~1.34 digits per byte; a little slack avoids regrowth.
    let mut out = Vec::with_capacity(bytes.len() * 4 / 3 + DIGITS_PER_WORD);
    write_digits(&value, powers.top_level(), false, &powers, &mut out);

    if out.is_empty() {
        out.push(ALPHABET[0]);
    }

    // Every byte comes from ALPHABET, which is ASCII.
    out.into_iter().map(char::from).collect()
}

/// Write `value` (< powers[level]) in base 62.
/// `pad` forces exactly `RadixPowers::digits_at(level)` digits.
fn write_digits(value: &UBig, level: usize, pad: bool, powers: &RadixPowers, out: &mut Vec<u8>) {
    if level == 0 {
        write_word(word_of(value), pad, out);
        return;
    }

    let (high, low) = value.div_rem(powers.get(level - 1));
    if !pad && high == UBig::from(0u8) {
        write_digits(&low, level - 1, false, powers, out);
    } else {
        write_digits(&high, level - 1, pad, powers, out);
        write_digits(&low, level - 1, true, powers, out);
    }
}

fn write_word(mut word: u64, pad: bool, out: &mut Vec<u8>) {
    let mut buf = [ALPHABET[0]; DIGITS_PER_WORD];
    let mut pos = DIGITS_PER_WORD;
    while word > 0 {
        pos -= 1;
        buf[pos] = digit_symbol((word % RADIX) as u8);
        word /= RADIX;
    }
    let start = if pad { 0 } else { pos };
    out.extend_from_slice(&buf[start..]);
}

// Leaves are < 62^10 and therefore fit in eight bytes.
fn word_of(value: &UBig) -> u64 {
    let bytes = value.to_be_bytes();
    debug_assert!(bytes.len() <= 8);
    bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits() {
        assert_eq!(encode(&[1]), "1");
        assert_eq!(encode(&[10]), "a");
        assert_eq!(encode(&[36]), "A");
        assert_eq!(encode(&[61]), "Z");
        assert_eq!(encode(&[62]), "10");
    }

    #[test]
    fn multi_byte_values() {
        // 0x0100 = 256 = 4 * 62 + 8
        assert_eq!(encode(&[0x01, 0x00]), "48");
        // 0xFFFF = 65535 = 17 * 3844 + 3 * 62 + 1
        assert_eq!(encode(&[0xFF, 0xFF]), "h31");
    }

    #[test]
    fn word_boundary_is_padded() {
        // 62^10 is "1" followed by ten zeros.
        let bytes = UBig::from(crate::constants::WORD_RADIX).to_be_bytes();
        assert_eq!(encode(&bytes), format!("1{}", "0".repeat(10)));
    }
}
