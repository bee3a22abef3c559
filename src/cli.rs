//! Command-line interface for digit_recall.

use clap::Parser;
use std::path::PathBuf;

/// Digit Recall - memorize a random number, then type it back
#[derive(Parser, Debug, Clone)]
#[command(name = "digit_recall")]
#[command(about = "Terminal memory game for random numbers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "digit_recall.toml")]
    pub config: PathBuf,

    /// Initial number of digits (free text, validated on start)
    #[arg(short, long)]
    pub digits: Option<String>,

    /// Initial seconds to memorize (free text, validated on start)
    #[arg(short, long)]
    pub seconds: Option<String>,

    /// Directory holding start/correct/incorrect sound files
    #[arg(long)]
    pub sounds_dir: Option<PathBuf>,

    /// Disable audio cues
    #[arg(long)]
    pub mute: bool,

    /// File that receives tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
