//! Typed access to loosely typed records
//!
//! A [`Converter`] wraps one record (a JSON object, a string-keyed map or a
//! serialized struct) and hands out typed values per key. Every target
//! type has two accessors:
//!
//! - `email(key)` fails with [`ConvertError::NotFound`] when the key is
//!   missing, and with [`ConvertError::Validation`] when the value cannot
//!   become an [`Email`](value_object::Email).
//! - `email_or_null(key)` returns `Ok(None)` when the key is missing or
//!   holds `null`, and otherwise behaves exactly like `email(key)`.
//!
//! ```rust
//! use converter::Converter;
//! use serde_json::json;
//!
//! let user = Converter::from_value(json!({
//!     "firstName": "John",
//!     "age": "42",
//!     "address": { "city": "Lisbon" },
//!     "email": null,
//! }))?;
//!
//! assert_eq!(user.string("firstName")?, "John");
//! assert_eq!(user.int("age")?, 42);
//! assert_eq!(user.converter("address")?.string("city")?, "Lisbon");
//! assert!(user.email_or_null("email")?.is_none());
//! assert!(user.email("phone").unwrap_err().is_not_found());
//! # Ok::<(), converter::ConvertError>(())
//! ```

pub mod coerce;
pub mod config;
pub mod converter;
pub mod error;
pub mod record;
pub mod temporal;

#[cfg(test)]
mod tests;

pub use config::ConverterConfig;
pub use converter::{Converter, MapRecord};
pub use error::{ConvertError, ConvertResult};
pub use record::{FieldRecord, MutableRecord, Record};
