// src/wav.rs
// Mono PCM16 WAV storage

use crate::error::{MorseError, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::Read;
use std::path::Path;

/// A mono PCM16 buffer together with its sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAudio {
    pub sample_rate: u32,
    pub samples: Vec<i16>,
}

impl WavAudio {
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

pub fn write_wav<P: AsRef<Path>>(path: P, audio: &WavAudio) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in &audio.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WavAudio> {
    log::info!("Opening WAV file: {:?}", path.as_ref());
    read_wav_from(WavReader::open(path)?)
}

/// Reads 16-bit integer or 32-bit float audio, averaging channels to mono.
pub fn read_wav_from<R: Read>(mut reader: WavReader<R>) -> Result<WavAudio> {
    let spec = reader.spec();
    log::info!("WAV spec: {:?}", spec);

    let interleaved: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .collect::<std::result::Result<_, _>>()?,
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .map(|s| s.map(float_to_pcm16))
            .collect::<std::result::Result<_, _>>()?,
        (format, bits) => {
            return Err(MorseError::UnsupportedFormat(format!(
                "{} bit {:?}; only 16-bit Int and 32-bit Float are supported",
                bits, format
            )));
        }
    };

    // Convert to mono by averaging channels if necessary
    let samples = if spec.channels > 1 {
        interleaved
            .chunks_exact(spec.channels as usize)
            .map(|frame| {
                let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                (sum / spec.channels as i32) as i16
            })
            .collect()
    } else {
        interleaved
    };

    Ok(WavAudio {
        sample_rate: spec.sample_rate,
        samples,
    })
}

fn float_to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16
}
