//! Record adapters
//!
//! A record is a string-keyed association of JSON values. Each input shape
//! implements [`Record`] once, and the converter only talks to the trait.
//!
//! Presence and nullness are separate facts: a key mapped to
//! [`Value::Null`] is present.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce;

/// Read access by key
pub trait Record {
    /// Raw value under `key`, `None` when the key is absent
    fn get(&self, key: &str) -> Option<&Value>;

    /// True iff `key` is present, whatever its value
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Present keys, in the record's own order
    fn keys(&self) -> Vec<&str>;
}

/// Records whose backing association can be upserted into
pub trait MutableRecord: Record {
    fn insert(&mut self, key: String, value: Value);
}

// ============================================================================
// Map origin
// ============================================================================

impl Record for Map<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }

    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn keys(&self) -> Vec<&str> {
        Map::keys(self).map(String::as_str).collect()
    }
}

impl MutableRecord for Map<String, Value> {
    fn insert(&mut self, key: String, value: Value) {
        Map::insert(self, key, value);
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    fn get(&self, key: &str) -> Option<&Value> {
        HashMap::get(self, key)
    }

    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn keys(&self) -> Vec<&str> {
        HashMap::keys(self).map(String::as_str).collect()
    }
}

impl<S: BuildHasher> MutableRecord for HashMap<String, Value, S> {
    fn insert(&mut self, key: String, value: Value) {
        HashMap::insert(self, key, value);
    }
}

impl Record for BTreeMap<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        BTreeMap::get(self, key)
    }

    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn keys(&self) -> Vec<&str> {
        BTreeMap::keys(self).map(String::as_str).collect()
    }
}

impl MutableRecord for BTreeMap<String, Value> {
    fn insert(&mut self, key: String, value: Value) {
        BTreeMap::insert(self, key, value);
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn get(&self, key: &str) -> Option<&Value> {
        (**self).get(key)
    }

    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }

    fn keys(&self) -> Vec<&str> {
        (**self).keys()
    }
}

// ============================================================================
// Named-field origin
// ============================================================================

/// Named-field structure adapter
///
/// Built once from any `Serialize` struct. `Option::None` fields stay
/// present as `null`; fields skipped by `#[serde(skip_serializing_if)]` are
/// absent. Read-only: there is no [`MutableRecord`] impl.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRecord {
    type_name: &'static str,
    fields: Map<String, Value>,
}

impl FieldRecord {
    pub fn from_struct<S: Serialize + ?Sized>(value: &S) -> AppResult<Self> {
        let type_name = std::any::type_name::<S>();
        match serde_json::to_value(value)? {
            Value::Object(fields) => Ok(Self { type_name, fields }),
            other => Err(AppError::bad_request(format!(
                "{} is not a named-field structure (serialized as {})",
                type_name,
                coerce::type_name(&other)
            ))),
        }
    }

    /// Rust type the record was built from
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Record for FieldRecord {
    fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn keys(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}
