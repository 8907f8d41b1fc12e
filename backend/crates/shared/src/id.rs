//! Common ID Types
//!
//! Type-safe UUID wrappers. The marker parameter keeps identifiers of
//! different entities from being mixed up at compile time.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::app_error::{AppError, AppResult};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type AccountId = Id<markers::Entity>;
///
/// let id = AccountId::parse_str("00000000-0000-0000-0000-000000000000").unwrap();
/// assert!(id.is_nil());
/// ```
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse the hyphenated, simple, braced or URN textual form
    pub fn parse_str(s: &str) -> AppResult<Self> {
        Ok(Self::from_uuid(Uuid::parse_str(s.trim())?))
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }

    pub fn is_nil(&self) -> bool {
        self.value.is_nil()
    }
}

// Manual impls: derives would put bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::parse_str(s)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for identifiers whose entity is not known to the caller
    pub struct Entity;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Account;
    struct Invoice;

    #[test]
    fn test_id_type_safety() {
        let account_id: Id<Account> = Id::new();
        let invoice_id: Id<Invoice> = Id::new();

        // These are different types, cannot be mixed
        let _a: Uuid = account_id.into_uuid();
        let _i: Uuid = invoice_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: Id<Account> = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_parse_str() {
        let id: Id<Account> = Id::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");

        let nil: Id<Account> = " 00000000-0000-0000-0000-000000000000 ".parse().unwrap();
        assert!(nil.is_nil());
    }

    #[test]
    fn test_parse_str_invalid() {
        let err = Id::<Account>::parse_str("not-a-uuid").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_value_equality() {
        let a: Id<Account> = Id::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let b: Id<Account> = Id::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        assert_eq!(a, b);
    }
}
