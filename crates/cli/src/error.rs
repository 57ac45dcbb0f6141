use std::path::PathBuf;

use thiserror::Error;

/// Failures of the fixture runner. The inventory rules themselves never fail.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read inventory file {path}: {source}")]
    ReadInventory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory in {path}: {source}")]
    ParseInventory {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode day {day}: {source}")]
    Encode {
        day: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
