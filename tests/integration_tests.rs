// tests/integration_tests.rs
// Synthesize -> WAV -> decode suite for the Morse codec

use anyhow::Result;
use morsewave::{CodecConfig, MorseDecoder, MorseGenerator, decode_wav_file, to_morse, to_text};

#[derive(Debug)]
struct TestCase {
    name: &'static str,
    text: &'static str,
    tone_hz: u32,
    wpm: u32,
    sample_rate: u32,
    dots_per_word: u32,
}

const TEST_CASES: &[TestCase] = &[
    // Basic tests
    TestCase {
        name: "simple_sos",
        text: "sos",
        tone_hz: 700,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    TestCase {
        name: "hello_world",
        text: "hello world",
        tone_hz: 700,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    TestCase {
        name: "alphabet",
        text: "abcdefghijklmnopqrstuvwxyz",
        tone_hz: 700,
        wpm: 15,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    // Different tones
    TestCase {
        name: "tone_600",
        text: "paris",
        tone_hz: 600,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    TestCase {
        name: "tone_900",
        text: "test",
        tone_hz: 900,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    TestCase {
        name: "tone_500",
        text: "paris",
        tone_hz: 500,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    TestCase {
        name: "tone_1000",
        text: "paris",
        tone_hz: 1000,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    TestCase {
        name: "tone_1000_slow",
        text: "rate",
        tone_hz: 1000,
        wpm: 10,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    // Different WPM speeds
    TestCase {
        name: "slow_wpm",
        text: "slow",
        tone_hz: 700,
        wpm: 5,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    TestCase {
        name: "fast_wpm",
        text: "fast",
        tone_hz: 700,
        wpm: 25,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    // Numbers
    TestCase {
        name: "numbers",
        text: "12345",
        tone_hz: 700,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    // Mixed content, starting on a dash
    TestCase {
        name: "mixed",
        text: "cq de w1aw",
        tone_hz: 700,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 50,
    },
    // Different sample rates and word lengths
    TestCase {
        name: "telephone_rate",
        text: "sos",
        tone_hz: 500,
        wpm: 20,
        sample_rate: 8000,
        dots_per_word: 50,
    },
    TestCase {
        name: "half_rate",
        text: "sos",
        tone_hz: 700,
        wpm: 20,
        sample_rate: 22050,
        dots_per_word: 50,
    },
    TestCase {
        name: "forty_dot_word",
        text: "paris",
        tone_hz: 700,
        wpm: 20,
        sample_rate: 44100,
        dots_per_word: 40,
    },
];

fn generator_for(test_case: &TestCase) -> Result<MorseGenerator> {
    let config = CodecConfig::new(test_case.wpm, test_case.tone_hz)?
        .with_sample_rate(test_case.sample_rate)?
        .with_dots_per_word(test_case.dots_per_word)?;
    Ok(MorseGenerator::from_config(config))
}

fn run_single_test(test_case: &TestCase, dir: &std::path::Path) -> Result<String> {
    let wav_path = dir.join(format!("{}.wav", test_case.name));
    generator_for(test_case)?.generate_wav_file(test_case.text, &wav_path)?;
    let transcript = decode_wav_file(&wav_path)?;
    Ok(transcript.text)
}

#[test]
fn run_comprehensive_test_suite() -> Result<()> {
    env_logger::try_init().ok();
    let dir = tempfile::tempdir()?;

    let mut failures = Vec::new();
    for test_case in TEST_CASES {
        let decoded = run_single_test(test_case, dir.path())?;
        if decoded == test_case.text {
            println!("  ✓ {} - '{}'", test_case.name, decoded);
        } else {
            println!(
                "  ✗ {} - expected '{}', decoded '{}'",
                test_case.name, test_case.text, decoded
            );
            failures.push(test_case.name);
        }
    }

    assert!(failures.is_empty(), "failed cases: {:?}", failures);
    Ok(())
}

#[test]
fn every_tone_and_speed_decodes_at_cd_rate() -> Result<()> {
    env_logger::try_init().ok();

    let mut failures = Vec::new();
    for text in ["paris", "hello world", "sos"] {
        for tone_hz in (500..=1000).step_by(50) {
            for wpm in 5..=25 {
                let test_case = TestCase {
                    name: "sweep",
                    text,
                    tone_hz,
                    wpm,
                    sample_rate: 44100,
                    dots_per_word: 50,
                };
                let pcm = generator_for(&test_case)?.render_text(text)?;
                let transcript = MorseDecoder::new(test_case.sample_rate)?.decode(&pcm);
                if transcript.text != text {
                    failures.push(format!(
                        "{} Hz {} wpm {:?} -> {:?}",
                        tone_hz, wpm, text, transcript.text
                    ));
                }
            }
        }
    }

    assert!(failures.is_empty(), "failed configs: {:#?}", failures);
    Ok(())
}

#[test]
fn paris_at_twenty_wpm_round_trips() -> Result<()> {
    let generator = MorseGenerator::new(44100, 700, 20)?;
    let pcm = generator.render_text("paris")?;
    let transcript = MorseDecoder::new(44100)?.decode(&pcm);
    assert_eq!(transcript.morse, to_morse("paris")?);
    assert_eq!(to_text(&transcript.morse), "paris");
    Ok(())
}

#[test]
fn stretched_letter_gap_is_still_a_letter_gap() -> Result<()> {
    let generator = MorseGenerator::new(44100, 700, 20)?;
    // the silence after a letter is its last element's trailing unit plus
    // the three-unit letter gap
    let letter_gap_samples =
        (44100.0 * (generator.dot_duration() + generator.letter_gap())).round() as usize;

    // "p", then a letter gap 8% longer than the others, then "aris"
    let mut pcm = generator.render_symbols(".--. ");
    pcm.extend(vec![0i16; letter_gap_samples * 8 / 100]);
    pcm.extend(generator.render_symbols(".- .-. .. ... "));

    let transcript = MorseDecoder::new(44100)?.decode(&pcm);
    assert_eq!(transcript.text, "paris");
    assert_eq!(transcript.profile.off.len(), 2);
    Ok(())
}

#[test]
fn word_gap_survives_the_wav_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("hi_there.wav");
    MorseGenerator::new(44100, 700, 12)?.generate_wav_file("Hi There", &path)?;

    let transcript = decode_wav_file(&path)?;
    assert_eq!(transcript.text, "hi there");
    assert_eq!(transcript.morse.matches("  ").count(), 1);
    Ok(())
}

#[test]
fn unknown_characters_stop_synthesis() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("never_written.wav");
    let generator = MorseGenerator::new(44100, 700, 20)?;

    assert!(generator.generate_wav_file("sos!", &path).is_err());
    assert!(!path.exists());
    Ok(())
}

#[test]
fn empty_wav_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("empty.wav");
    morsewave::wav::write_wav(
        &path,
        &morsewave::WavAudio {
            sample_rate: 44100,
            samples: Vec::new(),
        },
    )?;

    assert!(matches!(
        decode_wav_file(&path),
        Err(morsewave::MorseError::EmptyAudio)
    ));
    Ok(())
}
