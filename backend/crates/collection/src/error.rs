//! Collection Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Collection result type alias
pub type CollectionResult<T> = Result<T, CollectionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The item was rejected by the collection's type guard
    #[error("Item is not an instance of {expected}")]
    TypeMismatch { expected: String },

    /// `add` has no key left after `usize::MAX`
    #[error("Next key is already occupied")]
    KeysExhausted,
}

impl CollectionError {
    pub fn type_mismatch(expected: impl Into<String>) -> Self {
        CollectionError::TypeMismatch {
            expected: expected.into(),
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, CollectionError::TypeMismatch { .. })
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectionError::TypeMismatch { .. } | CollectionError::KeysExhausted => {
                ErrorKind::UnprocessableEntity
            }
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        let message = self.to_string();
        match self {
            CollectionError::TypeMismatch { .. } => AppError::unprocessable(message)
                .with_action("Only store items admitted by the collection's type guard"),
            CollectionError::KeysExhausted => AppError::unprocessable(message)
                .with_action("Use set() with an explicit key or clear the collection"),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            CollectionError::TypeMismatch { expected } => {
                tracing::debug!(expected = %expected, "Collection rejected item");
            }
            CollectionError::KeysExhausted => {
                tracing::debug!("Collection has no free key left");
            }
        }
    }
}

impl From<CollectionError> for AppError {
    fn from(err: CollectionError) -> Self {
        err.into_app_error()
    }
}
