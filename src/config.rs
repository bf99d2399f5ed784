// src/config.rs
// Validated codec parameters shared by the generator and the CLI

use crate::error::{MorseError, Result};
use std::ops::RangeInclusive;

pub const DEFAULT_WPM: u32 = 20;
pub const DEFAULT_TONE_HZ: u32 = 700;
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
// "PARIS " is 50 dot-equivalents long. Some operators time against 40.
pub const PARIS_DOTS_PER_WORD: u32 = 50;

pub const WPM_RANGE: RangeInclusive<u32> = 5..=25;
pub const TONE_RANGE_HZ: RangeInclusive<u32> = 500..=1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    wpm: u32,
    tone_hz: u32,
    sample_rate: u32,
    dots_per_word: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            tone_hz: DEFAULT_TONE_HZ,
            sample_rate: DEFAULT_SAMPLE_RATE,
            dots_per_word: PARIS_DOTS_PER_WORD,
        }
    }
}

impl CodecConfig {
    /// Builds a configuration at the default sample rate, rejecting a speed or
    /// tone outside the supported ranges.
    pub fn new(wpm: u32, tone_hz: u32) -> Result<Self> {
        let config = Self {
            wpm,
            tone_hz,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Any rate above twice the tone is accepted for synthesis. The decoder's
    /// zero-crossing repair assumes crossings inside a tone are at most 0.01 s
    /// apart, which holds around 44.1 kHz; at lower rates such as 22050 Hz
    /// many tones cross zero less often and their audio decodes to nothing.
    pub fn with_sample_rate(self, sample_rate: u32) -> Result<Self> {
        let config = Self {
            sample_rate,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_dots_per_word(self, dots_per_word: u32) -> Result<Self> {
        let config = Self {
            dots_per_word,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !WPM_RANGE.contains(&self.wpm) {
            return Err(MorseError::Configuration {
                key: "wpm",
                message: format!(
                    "must be between {} and {}, got {}",
                    WPM_RANGE.start(),
                    WPM_RANGE.end(),
                    self.wpm
                ),
            });
        }
        if !TONE_RANGE_HZ.contains(&self.tone_hz) {
            return Err(MorseError::Configuration {
                key: "tone_hz",
                message: format!(
                    "must be between {} and {} Hz, got {}",
                    TONE_RANGE_HZ.start(),
                    TONE_RANGE_HZ.end(),
                    self.tone_hz
                ),
            });
        }
        if self.sample_rate <= 2 * self.tone_hz {
            return Err(MorseError::Configuration {
                key: "sample_rate",
                message: format!(
                    "{} Hz cannot represent a {} Hz tone",
                    self.sample_rate, self.tone_hz
                ),
            });
        }
        if self.dots_per_word == 0 {
            return Err(MorseError::Configuration {
                key: "dots_per_word",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn tone_hz(&self) -> u32 {
        self.tone_hz
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn dots_per_word(&self) -> u32 {
        self.dots_per_word
    }

    /// Length of one dot in seconds: `60 / (wpm * dots_per_word)`.
    pub fn unit_seconds(&self) -> f64 {
        60.0 / (self.wpm as f64 * self.dots_per_word as f64)
    }
}
