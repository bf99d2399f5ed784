// src/generator.rs
// PCM16 synthesis of Morse symbol strings

use crate::config::CodecConfig;
use crate::encoder::{MorseToken, to_morse, tokenize};
use crate::error::Result;
use crate::wav::{WavAudio, write_wav};
use std::f64::consts::PI;
use std::path::Path;

const FULL_SCALE: f64 = i16::MAX as f64;

pub struct MorseGenerator {
    config: CodecConfig,
    frequency: f64,
    dot_duration: f64,
    dash_duration: f64,
    element_gap: f64,
    letter_gap: f64,
}

impl MorseGenerator {
    /// Fails with a configuration error when the tone or speed is out of range.
    pub fn new(sample_rate: u32, tone_hz: u32, wpm: u32) -> Result<Self> {
        let config = CodecConfig::new(wpm, tone_hz)?.with_sample_rate(sample_rate)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: CodecConfig) -> Self {
        let dot_duration = config.unit_seconds();
        Self {
            config,
            frequency: config.tone_hz() as f64,
            dot_duration,
            dash_duration: 3.0 * dot_duration,
            element_gap: dot_duration,
            letter_gap: 3.0 * dot_duration,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate()
    }

    pub fn dot_duration(&self) -> f64 {
        self.dot_duration
    }

    pub fn dash_duration(&self) -> f64 {
        self.dash_duration
    }

    pub fn letter_gap(&self) -> f64 {
        self.letter_gap
    }

    /// Renders an encoded Morse string. Every dot or dash carries its own
    /// one-unit trailing silence; each space adds three units on top.
    pub fn render_symbols(&self, morse: &str) -> Vec<i16> {
        let rate = self.sample_rate();
        let dot = render_tone(self.frequency, self.dot_duration, rate);
        let dash = render_tone(self.frequency, self.dash_duration, rate);
        let element_gap = render_silence(self.element_gap, rate);
        let letter_gap = render_silence(self.letter_gap, rate);

        let mut pcm = Vec::new();
        for token in tokenize(morse) {
            match token {
                MorseToken::Dot => {
                    pcm.extend_from_slice(&dot);
                    pcm.extend_from_slice(&element_gap);
                }
                MorseToken::Dash => {
                    pcm.extend_from_slice(&dash);
                    pcm.extend_from_slice(&element_gap);
                }
                MorseToken::LetterGap => pcm.extend_from_slice(&letter_gap),
                MorseToken::WordGap => {
                    pcm.extend_from_slice(&letter_gap);
                    pcm.extend_from_slice(&letter_gap);
                }
            }
        }
        log::debug!(
            "Rendered {} samples ({:.3}s) for {:?}",
            pcm.len(),
            pcm.len() as f64 / rate as f64,
            morse
        );
        pcm
    }

    pub fn render_text(&self, text: &str) -> Result<Vec<i16>> {
        let morse = to_morse(text)?;
        Ok(self.render_symbols(&morse))
    }

    pub fn generate_wav_file<P: AsRef<Path>>(&self, text: &str, path: P) -> Result<()> {
        let audio = WavAudio {
            sample_rate: self.sample_rate(),
            samples: self.render_text(text)?,
        };
        write_wav(path, &audio)
    }
}

fn sample_count(duration: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration).floor() as usize
}

/// A full-scale sine starting at phase zero, `floor(rate * duration)` samples long.
pub fn render_tone(frequency_hz: f64, duration: f64, sample_rate: u32) -> Vec<i16> {
    let samples_per_cycle = sample_rate as f64 / frequency_hz;
    (0..sample_count(duration, sample_rate))
        .map(|i| {
            let phase = 2.0 * PI * (i as f64 / samples_per_cycle);
            (phase.sin() * FULL_SCALE).round() as i16
        })
        .collect()
}

pub fn render_silence(duration: f64, sample_rate: u32) -> Vec<i16> {
    vec![0; sample_count(duration, sample_rate)]
}
