use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration in {path}: {reason}")]
    ConfigError { path: PathBuf, reason: String },

    #[error("Config already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Failed to start agent '{program}': {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install interrupt handler: {0}")]
    SignalError(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, LauncherError>;
