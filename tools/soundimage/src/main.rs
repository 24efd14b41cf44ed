//! soundimage - store audio in images
//!
//! Encodes WAV audio into PNG pixel grids (header row + packed samples) and
//! decodes them back.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use soundimage::convert;

#[derive(Parser)]
#[command(name = "soundimage")]
#[command(about = "Convert WAV audio to PNG images and back")]
#[command(version)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a WAV file into a PNG image
    Encode {
        /// Input WAV file
        input: PathBuf,

        /// Output PNG file (default: <input>.png, made unique)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bit depth used to choose the pixel format (default: from the WAV)
        #[arg(short, long)]
        bit_depth: Option<BitDepth>,
    },

    /// Decode a PNG image back into a WAV file
    Decode {
        /// Input PNG file
        input: PathBuf,

        /// Output WAV file (default: <input>_decoded.wav, made unique)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode a WAV file, then decode the produced image
    Roundtrip {
        /// Input WAV file
        input: PathBuf,

        /// Directory for the outputs (default: next to the input)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Bit depth used to choose the pixel format (default: from the WAV)
        #[arg(short, long)]
        bit_depth: Option<BitDepth>,
    },
}

/// Bit depth accepted by `--bit-depth`
#[derive(Clone, Copy, Debug, ValueEnum)]
enum BitDepth {
    #[value(name = "8")]
    Eight,
    #[value(name = "16")]
    Sixteen,
}

impl From<BitDepth> for u8 {
    fn from(depth: BitDepth) -> u8 {
        match depth {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (--verbose forces debug, otherwise RUST_LOG or info)
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Encode {
            input,
            output,
            bit_depth,
        } => {
            let output = output.unwrap_or_else(|| convert::default_image_path(&input));
            tracing::info!("Converting {:?} -> {:?}", input, output);
            convert::encode_file(&input, &output, bit_depth.map(u8::from))?;
            tracing::info!("Done!");
        }

        Commands::Decode { input, output } => {
            let output = output.unwrap_or_else(|| convert::default_audio_path(&input));
            tracing::info!("Converting {:?} -> {:?}", input, output);
            convert::decode_file(&input, &output)?;
            tracing::info!("Done!");
        }

        Commands::Roundtrip {
            input,
            dir,
            bit_depth,
        } => {
            let outputs = convert::roundtrip(&input, dir.as_deref(), bit_depth.map(u8::from))?;
            tracing::info!(
                "Round trip complete: {:?} -> {:?} -> {:?}",
                input,
                outputs.image,
                outputs.audio
            );
        }
    }

    Ok(())
}
