use std::path::PathBuf;

use derive_more::From;
use thiserror::Error;

use crate::config::ConfigError;
use crate::keys::KeyScriptError;

#[derive(Debug, From, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(ConfigError),

    #[error("Failed to read '{path}': {error}")]
    #[from(skip)]
    ReadFile {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Invalid key script: {0}")]
    KeyScript(KeyScriptError),

    #[error("Failed to write report: {0}")]
    Report(toml::ser::Error),
}

/// Reads a file, keeping its path for the error message
pub fn read_to_string(path: PathBuf) -> Result<String, AppError> {
    std::fs::read_to_string(&path).map_err(|error| AppError::ReadFile { path, error })
}
