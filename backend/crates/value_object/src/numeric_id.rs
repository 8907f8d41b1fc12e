//! Numeric Identity Value Object
//!
//! Database-style integer identity. Zero and negatives are rejected.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct NumericId(i64);

impl NumericId {
    pub fn new(value: i64) -> AppResult<Self> {
        if value <= 0 {
            return Err(AppError::bad_request(format!(
                "Numeric id must be positive (got {})",
                value
            )));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for NumericId {
    type Error = AppError;

    fn try_from(value: i64) -> AppResult<Self> {
        NumericId::new(value)
    }
}

impl From<NumericId> for i64 {
    fn from(id: NumericId) -> Self {
        id.0
    }
}

impl fmt::Display for NumericId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
