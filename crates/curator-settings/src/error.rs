//! Settings error types

use thiserror::Error;

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Import payload was not well-formed JSON or did not resolve into the
    /// settings shape
    #[error("Failed to parse settings payload: {message}")]
    Deserialization { message: String },

    /// The in-memory aggregate could not be serialized
    #[error("Failed to serialize settings: {message}")]
    Serialization { message: String },

    /// The persistence gateway reported a failure
    #[error("Persistence failed: {source}")]
    Persistence {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SettingsError {
    /// Create a deserialization error
    pub fn deserialization(message: impl Into<String>) -> Self {
        SettingsError::Deserialization {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        SettingsError::Serialization {
            message: message.into(),
        }
    }

    /// Wrap a gateway failure
    pub fn persistence(source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        SettingsError::Persistence { source }
    }
}
