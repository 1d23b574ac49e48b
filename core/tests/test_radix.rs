// Base-62 token codec: alphabet, value semantics, error positions and large inputs.

#[cfg(test)]
mod tests {
    use castlink_core::constants::ALPHABET;
    use castlink_core::radix::{decode, encode, is_token, token_digits, RadixError};
    use proptest::prelude::*;

    fn pseudo_random(len: usize, mut seed: u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            out.extend_from_slice(&seed.to_be_bytes());
        }
        out.truncate(len);
        out
    }

    #[test]
    fn alphabet_is_digits_lower_upper() {
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(&ALPHABET[..10], b"0123456789");
        assert_eq!(&ALPHABET[10..36], b"abcdefghijklmnopqrstuvwxyz");
        assert_eq!(&ALPHABET[36..], b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn known_vectors() {
        assert_eq!(encode(&[1]), "1");
        assert_eq!(encode(&[61]), "Z");
        assert_eq!(encode(&[62]), "10");
        assert_eq!(encode(&[255]), "47");
        assert_eq!(encode(&[1, 0]), "48");

        assert_eq!(decode("Z").unwrap(), vec![61]);
        assert_eq!(decode("10").unwrap(), vec![62]);
        assert_eq!(decode("48").unwrap(), vec![1, 0]);
    }

    #[test]
    fn zero_value_collides() {
        assert_eq!(encode(&[]), "0");
        assert_eq!(encode(&[0]), "0");
        assert_eq!(encode(&[0, 0, 0]), "0");
        assert_eq!(decode("0").unwrap(), vec![0]);
    }

    #[test]
    fn leading_zero_bytes_are_not_preserved() {
        assert_eq!(encode(&[0, 0, 7]), encode(&[7]));
        assert_eq!(decode(&encode(&[0, 0, 7])).unwrap(), vec![7]);
    }

    #[test]
    fn leading_zero_digits_are_ignored() {
        assert_eq!(decode("00048").unwrap(), vec![1, 0]);
    }

    #[test]
    fn rejects_character_outside_alphabet() {
        match decode("!") {
            Err(RadixError::InvalidTokenCharacter { ch, position }) => {
                assert_eq!(ch, '!');
                assert_eq!(position, 0);
            }
            other => panic!("unexpected: {other:?}"),
        }

        match decode("abc-def") {
            Err(RadixError::InvalidTokenCharacter { ch, position }) => {
                assert_eq!(ch, '-');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_token() {
        assert!(matches!(decode(""), Err(RadixError::EmptyToken)));
        assert!(!is_token(""));
    }

    #[test]
    fn token_digits_maps_symbols() {
        assert_eq!(token_digits("09azAZ").unwrap(), vec![0, 9, 10, 35, 36, 61]);
    }

    #[test]
    fn error_display_names_character() {
        let msg = decode("ab+").unwrap_err().to_string();
        assert!(msg.contains('+'), "{msg}");
    }

    #[test]
    fn multi_megabyte_round_trip() {
        let mut data = pseudo_random(2 * 1024 * 1024, 0x5eed);
        data[0] |= 0x80;

        let token = encode(&data);
        assert!(is_token(&token));
        let expected = (data.len() as f64 * 256f64.ln() / 62f64.ln()).ceil() as usize;
        assert!(token.len().abs_diff(expected) <= 2, "{} vs {}", token.len(), expected);

        assert_eq!(decode(&token).unwrap(), data);
    }

    #[test]
    fn word_boundary_values() {
        // 62^10 - 1 and 62^10 straddle the leaf size of the conversion.
        let below = "Z".repeat(10);
        let at = format!("1{}", "0".repeat(10));
        let below_bytes = decode(&below).unwrap();
        let at_bytes = decode(&at).unwrap();
        assert_eq!(encode(&below_bytes), below);
        assert_eq!(encode(&at_bytes), at);
    }

    proptest! {
        #[test]
        fn round_trip_without_leading_zero(mut data in proptest::collection::vec(any::<u8>(), 1..512)) {
            if data[0] == 0 {
                data[0] = 1;
            }
            let token = encode(&data);
            prop_assert!(is_token(&token));
            prop_assert_eq!(decode(&token).unwrap(), data);
        }

        #[test]
        fn token_uses_alphabet_only(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let token = encode(&data);
            prop_assert!(!token.is_empty());
            prop_assert!(token.bytes().all(|b| ALPHABET.contains(&b)));
        }

        #[test]
        fn canonical_tokens_survive_decode(token in "[1-9a-zA-Z][0-9a-zA-Z]{0,80}") {
            let bytes = decode(&token).unwrap();
            prop_assert_eq!(encode(&bytes), token);
        }
    }
}
