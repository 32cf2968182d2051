use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How summaries are written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Compute distance, speed and calories from fitness sensor packages"
)]
pub struct Cli {
    /// JSON file with packages, e.g. `[["RUN", [15000, 1, 75]]]`.
    ///
    /// Without it the built-in sample packages are processed.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Prefix text lines with index, type code and HH:MM:SS duration
    #[arg(long)]
    pub details: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
