// CLI configuration
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Opusogg - write Ogg Opus streams
#[derive(Parser, Debug)]
#[command(name = "opusogg")]
#[command(about = "Encode test tones and silence into Ogg Opus files", long_about = None)]
#[command(version)]
pub struct Config {
    /// Encoder configuration file (JSON); defaults to 48 kHz stereo audio
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for the summary
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Quiet mode (suppress the summary)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Pretty,
    /// Compact JSON
    Json,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a sine tone
    Tone {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of blocks (one page each)
        #[arg(short = 'n', long, default_value_t = 10)]
        blocks: usize,

        /// Block length in milliseconds (2.5, 5, 10, 20, 40 or 60)
        #[arg(short, long, default_value_t = 40.0)]
        block_ms: f32,

        /// Tone frequency in Hz
        #[arg(long, default_value_t = 440.0)]
        frequency: f32,
    },

    /// Encode a span of silence as a single page
    Silence {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Duration in milliseconds
        #[arg(short, long, default_value_t = 500)]
        millis: u64,
    },
}
