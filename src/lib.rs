// src/lib.rs
// Library interface for morsewave

pub mod alphabet;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod pitch;
pub mod segmenter;
pub mod timing;
pub mod wav;

pub use config::CodecConfig;
pub use decoder::{MorseDecoder, Transcript};
pub use encoder::{to_morse, to_text};
pub use error::{MorseError, Result};
pub use generator::MorseGenerator;
pub use wav::WavAudio;

use std::path::Path;

/// Reads a WAV file and decodes it at the file's own sample rate.
pub fn decode_wav_file<P: AsRef<Path>>(path: P) -> Result<Transcript> {
    let audio = wav::read_wav(path)?;
    let mut decoder = MorseDecoder::new(audio.sample_rate)?;
    decoder.process(&audio.samples);
    decoder.finalize()
}
