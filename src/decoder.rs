// src/decoder.rs
// Recovers text from a fully buffered PCM16 Morse recording

use crate::encoder::to_text;
use crate::error::{MorseError, Result};
use crate::pitch::estimate_tone_hz;
use crate::segmenter::{Segment, SegmentKind, segment};
use crate::timing::{TimingProfile, drop_leading_off, repair_zero_crossings};

/// The result of one decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Dot/dash string, one space between letters, two between words.
    pub morse: String,
    pub text: String,
    pub profile: TimingProfile,
    /// Segments left after zero-crossing repair.
    pub segment_count: usize,
}

impl Transcript {
    /// Sending speed implied by the canonical dot length.
    pub fn estimated_wpm(&self, dots_per_word: u32) -> Option<f64> {
        self.profile
            .dot()
            .filter(|&dot| dot > 0.0)
            .map(|dot| 60.0 / (dots_per_word as f64 * dot))
    }
}

/// Turns classified segments into a symbol string.
///
/// The shortest tone is a dot and every other tone a dash. Of the gaps, the
/// shortest is implicit between elements, the second shortest is a letter
/// break and anything else is a word break.
pub fn segments_to_morse(segments: &[Segment], profile: &TimingProfile) -> String {
    let mut morse = String::with_capacity(segments.len());
    for seg in segments {
        match seg.kind {
            SegmentKind::On if profile.dot() == Some(seg.duration) => morse.push('.'),
            SegmentKind::On => morse.push('-'),
            SegmentKind::Off if profile.letter_gap() == Some(seg.duration) => morse.push(' '),
            SegmentKind::Off if profile.intra_symbol_gap() == Some(seg.duration) => {}
            SegmentKind::Off => morse.push_str("  "),
        }
    }
    morse
}

// --- Main Decoder ---
pub struct MorseDecoder {
    sample_rate: u32,
    audio_buffer: Vec<i16>,
}

impl MorseDecoder {
    pub fn new(sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(MorseError::Configuration {
                key: "sample_rate",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            sample_rate,
            audio_buffer: Vec::new(),
        })
    }

    /// Appends a chunk of samples to the internal buffer.
    pub fn process(&mut self, chunk: &[i16]) {
        self.audio_buffer.extend_from_slice(chunk);
    }

    /// Decodes everything passed to `process` and clears the buffer.
    pub fn finalize(&mut self) -> Result<Transcript> {
        if self.audio_buffer.is_empty() {
            return Err(MorseError::EmptyAudio);
        }
        let samples = std::mem::take(&mut self.audio_buffer);
        Ok(self.decode(&samples))
    }

    pub fn decode(&self, samples: &[i16]) -> Transcript {
        if log::log_enabled!(log::Level::Debug) {
            if let Some(pitch) = estimate_tone_hz(samples, self.sample_rate) {
                log::debug!("Estimated pitch: {:.2} Hz", pitch);
            }
        }

        let mut raw = segment(samples, self.sample_rate);
        log::debug!("Segmented {} samples into {} runs", samples.len(), raw.len());

        // A tone at the very start of the buffer opens on its phase-zero
        // sample. Dropping that run here measures it from its first interior
        // zero-crossing, like every later tone.
        drop_leading_off(&mut raw);
        let mut segments = repair_zero_crossings(&raw, self.sample_rate);
        drop_leading_off(&mut segments);
        let profile = TimingProfile::classify(&mut segments);

        let morse = segments_to_morse(&segments, &profile);
        let text = to_text(&morse);
        log::info!("Decoded {:?} -> {:?}", morse, text);

        Transcript {
            morse,
            text,
            profile,
            segment_count: segments.len(),
        }
    }
}
