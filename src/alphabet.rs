// src/alphabet.rs
// The 36-symbol International Morse alphabet, usable in both directions

use crate::error::{MorseError, Result};

const TABLE: [(char, &str); 36] = [
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
];

/// Looks up the dot/dash string for a letter or digit, ignoring case.
///
/// Space is not part of the table; word boundaries are the encoder's job.
pub fn encode_char(c: char) -> Result<&'static str> {
    let key = c.to_ascii_lowercase();
    TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, token)| *token)
        .ok_or(MorseError::UnknownCharacter(c))
}

/// Reverse lookup. Tokens that are not an exact table entry yield `None`.
pub fn decode_token(token: &str) -> Option<char> {
    TABLE
        .iter()
        .find(|(_, t)| *t == token)
        .map(|(k, _)| *k)
}

pub fn entries() -> impl Iterator<Item = (char, &'static str)> {
    TABLE.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_a_bijection() {
        let keys: HashSet<char> = entries().map(|(k, _)| k).collect();
        let tokens: HashSet<&str> = entries().map(|(_, t)| t).collect();
        assert_eq!(keys.len(), 36);
        assert_eq!(tokens.len(), 36);
        for (_, token) in entries() {
            assert!((1..=5).contains(&token.len()));
            assert!(token.chars().all(|g| g == '.' || g == '-'));
        }
    }

    #[test]
    fn test_encode_char() {
        assert_eq!(encode_char('s').unwrap(), "...");
        assert_eq!(encode_char('O').unwrap(), "---");
        assert_eq!(encode_char('0').unwrap(), "-----");
    }

    #[test]
    fn test_encode_unknown_character() {
        for c in [' ', '?', 'é', '\n'] {
            let err = encode_char(c).unwrap_err();
            assert!(matches!(err, MorseError::UnknownCharacter(x) if x == c));
        }
    }

    #[test]
    fn test_decode_token() {
        for (key, token) in entries() {
            assert_eq!(decode_token(token), Some(key));
        }
        assert_eq!(decode_token("......"), None);
        assert_eq!(decode_token(""), None);
        assert_eq!(decode_token(".- "), None);
    }
}
