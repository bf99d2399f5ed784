//! Error types for morsewave.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    #[error("Invalid configuration value for {key}: {message}")]
    Configuration { key: &'static str, message: String },

    #[error("Character {0:?} has no Morse encoding")]
    UnknownCharacter(char),

    #[error("Audio buffer is empty, cannot decode")]
    EmptyAudio,

    #[error("Unsupported WAV format: {0}")]
    UnsupportedFormat(String),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, MorseError>;
