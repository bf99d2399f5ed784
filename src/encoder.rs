// src/encoder.rs
// Conversion between plain text and the dot/dash/space symbol string

use crate::alphabet::{decode_token, encode_char};
use crate::error::Result;

const LETTER_SEPARATOR: &str = " ";
const WORD_SEPARATOR: &str = "  ";

/// One element of an encoded Morse string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseToken {
    Dot,
    Dash,
    /// A single space.
    LetterGap,
    /// Two consecutive spaces.
    WordGap,
}

/// Encodes text as a symbol string.
///
/// Every letter is followed by one space and every space in the input adds
/// one more, so letters end up one space apart and words two spaces apart.
/// Characters outside the alphabet fail the whole call.
pub fn to_morse(text: &str) -> Result<String> {
    let mut morse = String::with_capacity(text.len() * 5);
    for c in text.to_lowercase().chars() {
        if c == ' ' {
            morse.push(' ');
        } else {
            morse.push_str(encode_char(c)?);
            morse.push(' ');
        }
    }
    Ok(morse)
}

/// Decodes a symbol string back to lowercase text. Tokens that match no
/// letter are dropped rather than reported.
pub fn to_text(morse: &str) -> String {
    morse
        .split(WORD_SEPARATOR)
        .map(|word| {
            word.trim()
                .split(LETTER_SEPARATOR)
                .filter_map(decode_token)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a symbol string into tokens. A run of two spaces is one word gap;
/// glyphs other than `.`, `-` and space are skipped.
pub fn tokenize(morse: &str) -> Vec<MorseToken> {
    let mut tokens = Vec::with_capacity(morse.len());
    let mut chars = morse.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '.' => tokens.push(MorseToken::Dot),
            '-' => tokens.push(MorseToken::Dash),
            ' ' => {
                if chars.peek() == Some(&' ') {
                    chars.next();
                    tokens.push(MorseToken::WordGap);
                } else {
                    tokens.push(MorseToken::LetterGap);
                }
            }
            other => log::warn!("Ignoring unexpected glyph {:?} in Morse string", other),
        }
    }
    tokens
}
