use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table followed by the dataset summary
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json
}

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Puzzle Stats",
    author = "Puzzle Stats",
    long_about = "Buckets a chess puzzle dataset into rating bands and reports per-band statistics"
)]
pub struct Args {
    /// Path to the puzzle CSV. The file must have a header row containing
    /// at least the `Rating` and `NbPlays` columns.
    #[arg(
        value_name = "CSV",
        env = "PUZZLES_CSV",
        default_value = "./static/puzzles.csv",
        help = "Puzzle dataset to read"
    )]
    pub input: PathBuf,

    /// Report layout written to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Hides the progress bar while the dataset loads
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
