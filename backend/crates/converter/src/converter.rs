//! Converter
//!
//! Typed accessors over a [`Record`]. Each target type comes as a pair:
//!
//! * `T(key)` reads through [`Converter::get_or_throw`] and converts. A
//!   missing key is [`ConvertError::NotFound`]; a value that does not convert
//!   is [`ConvertError::Validation`] carrying the collaborator's error as is.
//! * `T_or_null(key)` returns `Ok(None)` when the key is absent or holds
//!   `null`, and otherwise delegates to `T(key)`, failures included.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use kernel::error::app_error::{AppError, AppResult, OptionExt};
use kernel::id::Id;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use value_object::{Email, Hash, Identifier, NumericId, Password, PasswordHash, Phone};

use crate::coerce;
use crate::config::ConverterConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::record::{FieldRecord, MutableRecord, Record};
use crate::temporal;

/// Record type produced by nested access and [`Converter::from_value`]
pub type MapRecord = Map<String, Value>;

/// Typed accessor over one record
#[derive(Debug, Clone)]
pub struct Converter<R = MapRecord> {
    record: R,
    config: Arc<ConverterConfig>,
}

impl Converter<MapRecord> {
    /// Wrap a decoded JSON object
    pub fn from_value(value: Value) -> ConvertResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            other => Err(coerce::unexpected("record", &other).into()),
        }
    }
}

impl Converter<FieldRecord> {
    /// Wrap a named-field struct, serialized once up front
    pub fn from_struct<S: Serialize + ?Sized>(value: &S) -> ConvertResult<Self> {
        Ok(Self::new(FieldRecord::from_struct(value)?))
    }
}

impl<R: Record> Converter<R> {
    pub fn new(record: R) -> Self {
        Self::with_config(record, ConverterConfig::default())
    }

    pub fn with_config(record: R, config: ConverterConfig) -> Self {
        Self {
            record,
            config: Arc::new(config),
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn into_record(self) -> R {
        self.record
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn keys(&self) -> Vec<&str> {
        self.record.keys()
    }

    // ========================================================================
    // Raw access
    // ========================================================================

    /// True iff the record contains `key`, including keys holding `null`
    pub fn has(&self, key: &str) -> bool {
        self.record.has(key)
    }

    /// Raw value, `None` only when the key is absent
    pub fn get_or_null(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    /// Raw value, or [`ConvertError::NotFound`]
    pub fn get_or_throw(&self, key: &str) -> ConvertResult<&Value> {
        self.record.get(key).ok_or_else(|| {
            let err = ConvertError::not_found(key);
            err.log(key);
            err
        })
    }

    fn convert<T>(&self, key: &str, f: impl FnOnce(&Value) -> AppResult<T>) -> ConvertResult<T> {
        let value = self.get_or_throw(key)?;
        f(value).map_err(|source| {
            let err = ConvertError::Validation(source);
            err.log(key);
            err
        })
    }

    fn optional<T>(
        &self,
        key: &str,
        accessor: impl FnOnce(&Self, &str) -> ConvertResult<T>,
    ) -> ConvertResult<Option<T>> {
        match self.record.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => accessor(self, key).map(Some),
        }
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    pub fn string(&self, key: &str) -> ConvertResult<String> {
        self.convert(key, coerce::to_string)
    }

    pub fn string_or_null(&self, key: &str) -> ConvertResult<Option<String>> {
        self.optional(key, Self::string)
    }

    pub fn int(&self, key: &str) -> ConvertResult<i64> {
        self.convert(key, coerce::to_i64)
    }

    pub fn int_or_null(&self, key: &str) -> ConvertResult<Option<i64>> {
        self.optional(key, Self::int)
    }

    pub fn float(&self, key: &str) -> ConvertResult<f32> {
        self.convert(key, coerce::to_f32)
    }

    pub fn float_or_null(&self, key: &str) -> ConvertResult<Option<f32>> {
        self.optional(key, Self::float)
    }

    pub fn double(&self, key: &str) -> ConvertResult<f64> {
        self.convert(key, coerce::to_f64)
    }

    pub fn double_or_null(&self, key: &str) -> ConvertResult<Option<f64>> {
        self.optional(key, Self::double)
    }

    pub fn bool(&self, key: &str) -> ConvertResult<bool> {
        self.convert(key, coerce::to_bool)
    }

    /// Returns the converted flag when the key holds a value
    pub fn bool_or_null(&self, key: &str) -> ConvertResult<Option<bool>> {
        self.optional(key, Self::bool)
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// UTC instant; see [`temporal`] for the accepted inputs
    pub fn datetime(&self, key: &str) -> ConvertResult<DateTime<Utc>> {
        self.convert(key, |value| temporal::parse_datetime(value, &self.config))
    }

    pub fn datetime_or_null(&self, key: &str) -> ConvertResult<Option<DateTime<Utc>>> {
        self.optional(key, Self::datetime)
    }

    /// IANA zone name, `UTC` or `Z`
    ///
    /// Fixed offsets such as `+02:00` are rejected; use [`Converter::datetime`]
    /// with an RFC 3339 offset instead.
    pub fn timezone(&self, key: &str) -> ConvertResult<Tz> {
        self.convert(key, temporal::parse_timezone)
    }

    pub fn timezone_or_null(&self, key: &str) -> ConvertResult<Option<Tz>> {
        self.optional(key, Self::timezone)
    }

    // ========================================================================
    // Nested records
    // ========================================================================

    /// Converter over the object stored under `key`
    ///
    /// The nested converter owns a copy of the object and shares this
    /// converter's configuration.
    pub fn converter(&self, key: &str) -> ConvertResult<Converter<MapRecord>> {
        let fields = self.convert(key, |value| {
            value
                .as_object()
                .cloned()
                .ok_or_bad_request(format!("Expected record, found {}", coerce::type_name(value)))
        })?;

        tracing::trace!(key, fields = fields.len(), "Nested converter created");
        Ok(Converter {
            record: fields,
            config: Arc::clone(&self.config),
        })
    }

    pub fn converter_or_null(&self, key: &str) -> ConvertResult<Option<Converter<MapRecord>>> {
        self.optional(key, Self::converter)
    }

    // ========================================================================
    // Value objects
    // ========================================================================

    pub fn numeric_id(&self, key: &str) -> ConvertResult<NumericId> {
        self.convert(key, |value| NumericId::new(coerce::to_i64(value)?))
    }

    pub fn numeric_id_or_null(&self, key: &str) -> ConvertResult<Option<NumericId>> {
        self.optional(key, Self::numeric_id)
    }

    pub fn uuid(&self, key: &str) -> ConvertResult<Identifier> {
        self.id(key)
    }

    pub fn uuid_or_null(&self, key: &str) -> ConvertResult<Option<Identifier>> {
        self.id_or_null(key)
    }

    /// UUID identifier typed by entity marker `M`
    pub fn id<M>(&self, key: &str) -> ConvertResult<Id<M>> {
        self.convert(key, |value| Id::parse_str(&coerce::to_string(value)?))
    }

    pub fn id_or_null<M>(&self, key: &str) -> ConvertResult<Option<Id<M>>> {
        self.optional(key, Self::id::<M>)
    }

    pub fn email(&self, key: &str) -> ConvertResult<Email> {
        self.convert(key, |value| Email::new(coerce::to_string(value)?))
    }

    pub fn email_or_null(&self, key: &str) -> ConvertResult<Option<Email>> {
        self.optional(key, Self::email)
    }

    pub fn phone(&self, key: &str) -> ConvertResult<Phone> {
        self.convert(key, |value| Phone::new(coerce::to_string(value)?))
    }

    pub fn phone_or_null(&self, key: &str) -> ConvertResult<Option<Phone>> {
        self.optional(key, Self::phone)
    }

    pub fn password(&self, key: &str) -> ConvertResult<Password> {
        self.convert(key, |value| Password::new(coerce::to_string(value)?))
    }

    pub fn password_or_null(&self, key: &str) -> ConvertResult<Option<Password>> {
        self.optional(key, Self::password)
    }

    pub fn password_hash(&self, key: &str) -> ConvertResult<PasswordHash> {
        self.convert(key, |value| PasswordHash::new(coerce::to_string(value)?))
    }

    pub fn password_hash_or_null(&self, key: &str) -> ConvertResult<Option<PasswordHash>> {
        self.optional(key, Self::password_hash)
    }

    pub fn hash(&self, key: &str) -> ConvertResult<Hash> {
        self.convert(key, |value| Hash::new(coerce::to_string(value)?))
    }

    pub fn hash_or_null(&self, key: &str) -> ConvertResult<Option<Hash>> {
        self.optional(key, Self::hash)
    }

    // ========================================================================
    // serde
    // ========================================================================

    /// Deserialize the value under `key` into any `DeserializeOwned` type
    ///
    /// ```rust
    /// use converter::Converter;
    /// use serde_json::json;
    ///
    /// let c = Converter::from_value(json!({ "tags": ["a", "b"] }))?;
    /// let tags: Vec<String> = c.get_as("tags")?;
    /// assert_eq!(tags, ["a", "b"]);
    /// # Ok::<(), converter::ConvertError>(())
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> ConvertResult<T> {
        self.convert(key, |value| {
            serde_json::from_value(value.clone()).map_err(AppError::from)
        })
    }

    pub fn get_as_or_null<T: DeserializeOwned>(&self, key: &str) -> ConvertResult<Option<T>> {
        self.optional(key, Self::get_as::<T>)
    }
}

impl<R: MutableRecord> Converter<R> {
    /// Insert or overwrite `key` in the backing record
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.record.insert(key.into(), value.into());
        self
    }
}

impl<R: Record> From<R> for Converter<R> {
    fn from(record: R) -> Self {
        Self::new(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn sample() -> Converter {
        Converter::from_value(json!({
            "name": "Ada",
            "age": "36",
            "ratio": 0.5,
            "active": "yes",
            "nothing": null,
            "nested": { "deeper": { "leaf": 1 } },
        }))
        .unwrap()
    }

    #[test]
    fn test_has_vs_get_or_null() {
        let c = sample();
        assert!(c.has("nothing"));
        assert_eq!(c.get_or_null("nothing"), Some(&Value::Null));
        assert!(!c.has("missing"));
        assert_eq!(c.get_or_null("missing"), None);
    }

    #[test]
    fn test_get_or_throw() {
        let c = sample();
        assert_eq!(c.get_or_throw("name").unwrap(), &json!("Ada"));
        assert_eq!(c.get_or_throw("nothing").unwrap(), &Value::Null);
        assert!(c.get_or_throw("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_primitive_accessors() {
        let c = sample();
        assert_eq!(c.string("name").unwrap(), "Ada");
        assert_eq!(c.int("age").unwrap(), 36);
        assert_eq!(c.float("ratio").unwrap(), 0.5f32);
        assert_eq!(c.double("ratio").unwrap(), 0.5);
        assert!(c.bool("active").unwrap());
    }

    #[test]
    fn test_or_null_delegates_when_present() {
        let c = sample();
        assert_eq!(c.int_or_null("age").unwrap(), Some(36));
        assert_eq!(c.bool_or_null("active").unwrap(), Some(true));
        assert_eq!(c.string_or_null("missing").unwrap(), None);
        assert_eq!(c.double_or_null("nothing").unwrap(), None);

        // Present but malformed still fails
        assert!(c.int_or_null("name").unwrap_err().is_validation());
    }

    #[test]
    fn test_present_null_fails_non_null_accessor() {
        let c = sample();
        let err = c.string("nothing").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn test_nested_converters() {
        let c = sample();
        let leaf = c.converter("nested").unwrap().converter("deeper").unwrap().int("leaf");
        assert_eq!(leaf.unwrap(), 1);

        assert!(c.converter_or_null("missing").unwrap().is_none());
        assert!(c.converter_or_null("nothing").unwrap().is_none());
        assert!(c.converter("name").unwrap_err().is_validation());
    }

    #[test]
    fn test_nested_shares_config() {
        let config = ConverterConfig::default().with_default_timezone(Tz::Asia__Tokyo);
        let Value::Object(map) = json!({ "inner": { "at": "2020-01-01 09:00:00" } }) else {
            unreachable!()
        };
        let c = Converter::with_config(map, config);
        let inner = c.converter("inner").unwrap();
        assert_eq!(inner.config().default_timezone, Tz::Asia__Tokyo);
        assert_eq!(inner.datetime("at").unwrap().to_rfc3339(), "2020-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_add_upserts() {
        let mut c = Converter::new(HashMap::<String, Value>::new());
        c.add("count", 1).add("label", "x");
        assert_eq!(c.int("count").unwrap(), 1);

        c.add("count", "2");
        assert_eq!(c.int("count").unwrap(), 2);
        assert_eq!(c.keys().len(), 2);
    }

    #[test]
    fn test_typed_id() {
        struct Order;
        let c = Converter::from_value(json!({ "order": "67e55044-10b1-426f-9247-bb680e5fe0c8" }))
            .unwrap();
        let id: Id<Order> = c.id("order").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!(c.id_or_null::<Order>("other").unwrap().is_none());
    }

    #[test]
    fn test_get_as() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Leaf {
            leaf: i32,
        }

        let c = sample();
        let deeper: Leaf = c.converter("nested").unwrap().get_as("deeper").unwrap();
        assert_eq!(deeper, Leaf { leaf: 1 });
        assert!(c.get_as::<Leaf>("name").unwrap_err().is_validation());
        assert_eq!(c.get_as_or_null::<Leaf>("nothing").unwrap(), None);
    }

    #[test]
    fn test_from_value_requires_object() {
        assert!(Converter::from_value(json!([1, 2])).unwrap_err().is_validation());
    }
}
