//! Error types.

use std::borrow::Cow;

use thiserror::Error;

/// Errors raised while constructing widgets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The widget was requested from decoded data, which it does not support.
    #[error("{widget} cannot be constructed from decoded data; use its explicit margin constructor")]
    UnsupportedConstructionPath { widget: &'static str },
}

/// A type alias for handling configuration errors.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// The errors that can happen while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error when there is an IO exception.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An error due to parsing.
    #[error("Parsing error: {0}")]
    Parsing(Cow<'static, str>),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parsing(err.to_string().into())
    }
}
