//! Primitive coercion
//!
//! Best-effort conversion of a JSON value into a Rust primitive. Anything
//! that cannot be converted without guessing is rejected with a
//! `BadRequest` [`AppError`]; nothing silently becomes `0` or `""`.

use kernel::error::app_error::{AppError, AppResult, OptionExt};
use serde_json::Value;

/// 2^63, the first f64 above `i64::MAX`
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// JSON type name used in error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn unexpected(expected: &str, found: &Value) -> AppError {
    AppError::bad_request(format!("Expected {}, found {}", expected, type_name(found)))
}

/// Strings as-is, numbers in shortest form (`1.0` becomes `"1"`), booleans
/// as `true`/`false`
pub fn to_string(value: &Value) -> AppResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(unexpected("string", other)),
    }
}

/// Integral numbers, integral numeric strings and booleans
pub fn to_i64(value: &Value) -> AppResult<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Err(AppError::bad_request(format!("Integer {} is out of range", n)))
            } else {
                integral(n.as_f64().ok_or_bad_request("Invalid number")?)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().or_else(|err| match s.parse::<f64>() {
                Ok(f) if f.is_finite() => integral(f),
                _ => Err(AppError::from(err)),
            })
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(unexpected("integer", other)),
    }
}

fn integral(f: f64) -> AppResult<i64> {
    if f.fract() != 0.0 {
        return Err(AppError::bad_request(format!("{} is not an integer", f)));
    }
    if !(-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&f) {
        return Err(AppError::bad_request(format!("Integer {} is out of range", f)));
    }
    Ok(f as i64)
}

/// Numbers, numeric strings and booleans; NaN and infinities are rejected
pub fn to_f64(value: &Value) -> AppResult<f64> {
    let f = match value {
        Value::Number(n) => n.as_f64().ok_or_bad_request("Invalid number")?,
        Value::String(s) => s.trim().parse::<f64>()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        other => return Err(unexpected("number", other)),
    };

    if !f.is_finite() {
        return Err(AppError::bad_request("Number must be finite"));
    }
    Ok(f)
}

/// Same rules as [`to_f64`], narrowed to `f32`
pub fn to_f32(value: &Value) -> AppResult<f32> {
    let f = to_f64(value)? as f32;
    if !f.is_finite() {
        return Err(AppError::bad_request("Number is out of range for float"));
    }
    Ok(f)
}

/// Booleans, numbers (non-zero is true) and the usual textual spellings
pub fn to_bool(value: &Value) -> AppResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" | "" => Ok(false),
            _ => Err(AppError::bad_request(format!("'{}' is not a boolean", s))),
        },
        other => Err(unexpected("boolean", other)),
    }
}
