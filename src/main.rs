use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use morsewave::config::{DEFAULT_SAMPLE_RATE, DEFAULT_TONE_HZ, DEFAULT_WPM, PARIS_DOTS_PER_WORD};
use morsewave::{CodecConfig, MorseGenerator, decode_wav_file, pitch, to_morse, to_text, wav};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text as Morse, optionally writing the audio to a WAV file
    Encode {
        /// Text to encode (letters, digits and spaces)
        text: String,

        /// Path of the WAV file to write
        #[arg(short, long, value_name = "WAV_FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        codec: CodecArgs,
    },
    /// Decode a mono PCM16 WAV file back to text
    Decode {
        /// Path to the input WAV file
        #[arg(value_name = "WAV_FILE")]
        wav_file: PathBuf,

        /// Dot-equivalents per word used to report the sending speed
        #[arg(long, default_value_t = PARIS_DOTS_PER_WORD)]
        dots_per_word: u32,
    },
    /// Convert a dot/dash string (one space between letters, two between words) to text
    Text {
        #[arg(value_name = "MORSE")]
        morse: String,
    },
    /// Show sample count, duration and dominant tone of a WAV file
    Info {
        #[arg(value_name = "WAV_FILE")]
        wav_file: PathBuf,
    },
}

#[derive(Args)]
struct CodecArgs {
    /// Sending speed in words per minute (5-25)
    #[arg(long, default_value_t = DEFAULT_WPM)]
    wpm: u32,

    /// Tone frequency in Hz (500-1000)
    #[arg(long, default_value_t = DEFAULT_TONE_HZ)]
    tone: u32,

    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Dot-equivalents per word: 50 for PARIS, 40 for the short standard
    #[arg(long, default_value_t = PARIS_DOTS_PER_WORD)]
    dots_per_word: u32,
}

impl CodecArgs {
    fn to_config(&self) -> Result<CodecConfig> {
        Ok(CodecConfig::new(self.wpm, self.tone)?
            .with_sample_rate(self.sample_rate)?
            .with_dots_per_word(self.dots_per_word)?)
    }
}

fn main() -> Result<()> {
    // Set up logging. Use `RUST_LOG=info` or `RUST_LOG=debug` to see output.
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            text,
            output,
            codec,
        } => {
            // Validate before touching any output file
            let config = codec.to_config()?;
            let morse = to_morse(&text)?;
            println!("{}", morse);

            if let Some(path) = output {
                let generator = MorseGenerator::from_config(config);
                generator.generate_wav_file(&text, &path)?;
                let written = generator.config();
                log::info!(
                    "Wrote {:?} at {} WPM, {} Hz, {} Hz sample rate",
                    path,
                    written.wpm(),
                    written.tone_hz(),
                    written.sample_rate()
                );
            }
        }
        Command::Decode {
            wav_file,
            dots_per_word,
        } => {
            if dots_per_word == 0 {
                bail!("--dots-per-word must be greater than zero");
            }
            let transcript = decode_wav_file(&wav_file)?;
            if let Some(wpm) = transcript.estimated_wpm(dots_per_word) {
                log::info!("Estimated speed: {:.1} WPM", wpm);
            }

            println!("\n--- Decoded Morse ---");
            println!("{}", transcript.morse);
            println!("\n--- Decoded Text ---");
            println!("{}", transcript.text);
        }
        Command::Text { morse } => {
            println!("{}", to_text(&morse));
        }
        Command::Info { wav_file } => {
            let audio = wav::read_wav(&wav_file)?;
            println!("Number of samples: {}", audio.samples.len());
            println!("Sample rate: {} Hz", audio.sample_rate);
            println!("Duration: {:.2}s", audio.duration_seconds());
            match pitch::estimate_tone_hz(&audio.samples, audio.sample_rate) {
                Some(hz) => println!("Estimated tone: {:.1} Hz", hz),
                None => println!("Estimated tone: none detected"),
            }
        }
    }

    Ok(())
}
