use std::result::Result as StdResult;

use thiserror::Error;

/// Error type for the storage and configuration layers.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, WizardError>;

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        WizardError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        WizardError::Storage(err.to_string())
    }
}
