//! src/radix/decode.rs
//!
//! Base-62 token -> byte sequence.
//!
//! Design notes:
//! - Every character is checked against the alphabet before any arithmetic;
//!   the first offending character is reported with its position.
//! - The digit string is split so the low part spans exactly one power of 62
//!   from the table: `value = high * 62^len(low) + low`.
//! - Output is the minimal big-endian representation of the value, with a
//!   single zero byte for a zero value.

use ibig::UBig;
use tracing::trace;

use crate::constants::{DIGITS_PER_WORD, RADIX};
use crate::radix::powers::RadixPowers;
use crate::radix::types::{digit_value, RadixError};

/// Decode a base-62 token into bytes.
///
/// # Errors
/// - `RadixError::EmptyToken` for `""`.
/// - `RadixError::InvalidTokenCharacter` for any symbol outside `0-9a-zA-Z`.
pub fn decode(token: &str) -> Result<Vec<u8>, RadixError> {
    let digits = token_digits(token)?;
    let powers = RadixPowers::for_digit_count(digits.len());
    trace!(digits = digits.len(), levels = powers.len(), "radix decode");

    let value = parse_digits(&digits, &powers);
    let bytes = value.to_be_bytes();
    if bytes.is_empty() {
        return Ok(vec![0]);
    }
    Ok(bytes)
}

/// Map a token to digit values, rejecting anything outside the alphabet.
pub fn token_digits(token: &str) -> Result<Vec<u8>, RadixError> {
    if token.is_empty() {
        return Err(RadixError::EmptyToken);
    }
    token
        .char_indices()
        .map(|(position, ch)| {
            digit_value(ch).ok_or(RadixError::InvalidTokenCharacter { ch, position })
        })
        .collect()
}

fn parse_digits(digits: &[u8], powers: &RadixPowers) -> UBig {
    if digits.len() <= DIGITS_PER_WORD {
        let word = digits.iter().fold(0u64, |acc, d| acc * RADIX + u64::from(*d));
        return UBig::from(word);
    }

    // Largest level whose span is still shorter than the digit string.
    let mut level = 0;
    while RadixPowers::digits_at(level + 1) < digits.len() {
        level += 1;
    }
    let split = digits.len() - RadixPowers::digits_at(level);

    let high = parse_digits(&digits[..split], powers);
    let low = parse_digits(&digits[split..], powers);
    high * powers.get(level) + low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_digits_are_ignored() {
        assert_eq!(decode("0005").unwrap(), vec![5]);
        assert_eq!(decode("00").unwrap(), vec![0]);
    }

    #[test]
    fn reports_first_bad_character() {
        assert_eq!(
            decode("ab-c+").unwrap_err(),
            RadixError::InvalidTokenCharacter { ch: '-', position: 2 }
        );
    }

    #[test]
    fn non_ascii_position_is_byte_offset() {
        assert_eq!(
            decode("aé").unwrap_err(),
            RadixError::InvalidTokenCharacter { ch: 'é', position: 1 }
        );
    }

    #[test]
    fn empty_token_is_rejected() {
        assert_eq!(decode("").unwrap_err(), RadixError::EmptyToken);
    }

    #[test]
    fn values_past_one_word() {
        // "1" followed by ten zeros is 62^10.
        let token = format!("1{}", "0".repeat(10));
        assert_eq!(
            decode(&token).unwrap(),
            UBig::from(crate::constants::WORD_RADIX).to_be_bytes()
        );
    }
}
