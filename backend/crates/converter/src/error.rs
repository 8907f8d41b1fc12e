//! Converter Error Types
//!
//! Two failure modes: the key is missing, or the value under it was
//! rejected. Rejections carry the collaborator's [`AppError`] unchanged.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Converter result type alias
pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The record has no such key
    #[error("Property or key '{key}' not found")]
    NotFound { key: String },

    /// The value exists but could not be converted
    #[error(transparent)]
    Validation(#[from] AppError),
}

impl ConvertError {
    pub fn not_found(key: impl Into<String>) -> Self {
        ConvertError::NotFound { key: key.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ConvertError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ConvertError::Validation(_))
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::NotFound { .. } => ErrorKind::NotFound,
            ConvertError::Validation(err) => err.kind(),
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            ConvertError::NotFound { key } => {
                AppError::not_found(format!("Property or key '{}' not found", key))
            }
            ConvertError::Validation(err) => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self, key: &str) {
        match self {
            ConvertError::NotFound { .. } => {
                tracing::debug!(key, "Record key not found");
            }
            ConvertError::Validation(err) if err.is_server_error() => {
                tracing::error!(key, error = %err, "Record value conversion failed");
            }
            ConvertError::Validation(err) => {
                tracing::debug!(key, error = %err, "Record value rejected");
            }
        }
    }
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        err.into_app_error()
    }
}
