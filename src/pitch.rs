// src/pitch.rs
// Dominant tone estimate for diagnostics and `info` reports

use rustfft::{FftPlanner, num_complex::Complex};

// --- DSP Constants ---
const FREQ_MIN_HZ: f32 = 200.0;
const FREQ_MAX_HZ: f32 = 1200.0;
const MAX_FFT_SIZE: usize = 4096;
const MIN_FFT_SIZE: usize = 256;

/// Averages Hamming-windowed spectra over the buffer and returns the strongest
/// bin between 200 and 1200 Hz. `None` when the buffer is too short or silent.
pub fn estimate_tone_hz(samples: &[i16], sample_rate: u32) -> Option<f32> {
    let fft_size = fft_size_for(samples.len())?;
    let step_size = fft_size / 4;
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);
    let window: Vec<f32> = (0..fft_size)
        .map(|i| 0.54 - 0.46 * (2.0 * std::f32::consts::PI * i as f32 / fft_size as f32).cos()) // Hamming window
        .collect();

    let mut spectrum_sum = vec![0.0f32; fft_size / 2];
    let mut count = 0;
    for chunk in samples.windows(fft_size).step_by(step_size) {
        let mut buffer: Vec<Complex<f32>> = chunk
            .iter()
            .zip(window.iter())
            .map(|(&s, w)| Complex::new(s as f32 / i16::MAX as f32 * w, 0.0))
            .collect();
        fft.process(&mut buffer);
        for (i, v) in buffer.iter().take(fft_size / 2).enumerate() {
            spectrum_sum[i] += v.norm_sqr();
        }
        count += 1;
    }
    if count == 0 {
        return None;
    }

    let df = sample_rate as f32 / fft_size as f32;
    let (max_idx, max_power) =
        spectrum_sum
            .iter()
            .enumerate()
            .fold((0, 0.0), |(max_i, max_p), (i, &p)| {
                let freq = i as f32 * df;
                if (FREQ_MIN_HZ..=FREQ_MAX_HZ).contains(&freq) && p > max_p {
                    (i, p)
                } else {
                    (max_i, max_p)
                }
            });

    if max_power == 0.0 {
        return None;
    }
    Some(max_idx as f32 * df)
}

// Largest power of two that fits the buffer, capped at MAX_FFT_SIZE.
fn fft_size_for(len: usize) -> Option<usize> {
    if len < MIN_FFT_SIZE {
        return None;
    }
    let mut size = MIN_FFT_SIZE;
    while size * 2 <= len && size < MAX_FFT_SIZE {
        size *= 2;
    }
    Some(size)
}
