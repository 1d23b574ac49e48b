//! radix/types.rs
//! Alphabet lookup and radix errors.

use thiserror::Error;

use crate::constants::ALPHABET;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadixError {
    /// Tokens carry at least one digit.
    #[error("token is empty")]
    EmptyToken,

    /// A character outside `0-9a-zA-Z`. `position` is the byte offset in the token.
    #[error("invalid token character {ch:?} at position {position}")]
    InvalidTokenCharacter { ch: char, position: usize },
}

/// Digit value of an alphabet symbol, `None` for anything else.
#[inline]
pub fn digit_value(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'a'..='z' => Some(ch as u8 - b'a' + 10),
        'A'..='Z' => Some(ch as u8 - b'A' + 36),
        _ => None,
    }
}

/// Alphabet symbol for a digit value in `0..62`.
#[inline]
pub fn digit_symbol(value: u8) -> u8 {
    ALPHABET[value as usize]
}

/// True when every character of `s` belongs to the token alphabet.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|ch| digit_value(ch).is_some())
}
