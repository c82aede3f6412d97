//! Error types for the proofer

use aamva_core::AamvaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProoferError {
    #[error(transparent)]
    Core(#[from] AamvaError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<::config::ConfigError> for ProoferError {
    fn from(err: ::config::ConfigError) -> Self {
        ProoferError::Config(err.to_string())
    }
}

impl ProoferError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ProoferError::Core(AamvaError::InvalidInput(_)))
    }
}
