use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the edges of the canvas core.
///
/// Ordinary editing never fails: unknown ids, invalid drops and history
/// boundaries are all modeled as values or no-ops. Only configuration loading
/// and event delivery can go wrong.
#[derive(Error, Debug)]
pub enum CollageError {
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to read configuration file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Event queue is closed")]
    QueueClosed,
}

pub type Result<T, E = CollageError> = std::result::Result<T, E>;
