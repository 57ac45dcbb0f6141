use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use gildedrose_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "gilded-rose")]
#[command(about = "Advance a Gilded Rose inventory day by day and print each day")]
#[command(version)]
pub struct Cli {
    /// Days to simulate after printing day 0
    #[arg(short, long, env = "GILDED_ROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// JSON file holding an array of items (default: built-in fixture)
    #[arg(short, long, env = "GILDED_ROSE_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Output format for the daily listing
    #[arg(short, long, env = "GILDED_ROSE_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log format on stderr
    #[arg(long, env = "GILDED_ROSE_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "GILDED_ROSE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
