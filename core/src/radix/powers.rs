//! radix/powers.rs
//! Power table for divide-and-conquer radix conversion.
//!
//! `powers[k] = 62^(DIGITS_PER_WORD * 2^k)`. Each entry is the square of the
//! previous one, so building the table costs a handful of big multiplications.

use ibig::UBig;

use crate::constants::{DIGITS_PER_WORD, WORD_RADIX};

pub struct RadixPowers {
    powers: Vec<UBig>,
}

impl RadixPowers {
    fn seed() -> Self {
        Self { powers: vec![UBig::from(WORD_RADIX)] }
    }

    fn push_square(&mut self) {
        let last = &self.powers[self.powers.len() - 1];
        let next = last * last;
        self.powers.push(next);
    }

    /// Table whose last entry is strictly greater than `value`.
    pub fn covering(value: &UBig) -> Self {
        let mut table = Self::seed();
        while table.top() <= value {
            table.push_square();
        }
        table
    }

    /// Table with every power needed to split a token of `digits` digits.
    pub fn for_digit_count(digits: usize) -> Self {
        let mut table = Self::seed();
        while Self::digits_at(table.powers.len()) < digits {
            table.push_square();
        }
        table
    }

    /// Number of base-62 digits spanned by `powers[level]`.
    #[inline]
    pub fn digits_at(level: usize) -> usize {
        DIGITS_PER_WORD << level
    }

    pub fn get(&self, level: usize) -> &UBig {
        &self.powers[level]
    }

    pub fn top(&self) -> &UBig {
        &self.powers[self.powers.len() - 1]
    }

    /// Index of the last entry.
    pub fn top_level(&self) -> usize {
        self.powers.len() - 1
    }

    pub fn len(&self) -> usize {
        self.powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_exceeds_value() {
        let value = UBig::from(WORD_RADIX) * UBig::from(WORD_RADIX);
        let table = RadixPowers::covering(&value);
        assert!(table.top() > &value);
        assert_eq!(table.top_level(), 2);
    }

    #[test]
    fn small_values_need_one_entry() {
        let table = RadixPowers::covering(&UBig::from(12345u32));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn digit_count_table_spans_token() {
        let table = RadixPowers::for_digit_count(45);
        // 10, 20 and 40 digits are all shorter than 45, 80 is not needed.
        assert_eq!(table.len(), 3);
        assert_eq!(RadixPowers::digits_at(table.top_level()), 40);
        assert_eq!(table.get(1), &(UBig::from(62u8).pow(20)));
    }
}
