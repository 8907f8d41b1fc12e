//! Phone Value Object
//!
//! Phone numbers in E.164 form: a leading `+`, then 8 to 15 digits with
//! no leading zero. Spaces, dashes, dots and parentheses are accepted on
//! input and stripped.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> AppResult<Self> {
        let raw = phone.into();
        let compact: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();

        let Some(digits) = compact.strip_prefix('+') else {
            return Err(Self::invalid("Phone number must start with '+' and a country code"));
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(Self::invalid("Phone number must contain only digits"));
        }

        if digits.starts_with('0') {
            return Err(Self::invalid("Country code cannot start with 0"));
        }

        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(Self::invalid(format!(
                "Phone number must have between {} and {} digits (got {})",
                MIN_DIGITS,
                MAX_DIGITS,
                digits.len()
            )));
        }

        Ok(Self(compact))
    }

    fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> AppError {
        AppError::bad_request(message).with_action("Use the international format, e.g. +5511999999999")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits without the leading `+`
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl FromStr for Phone {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Phone::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Phone::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("+5511999999999").unwrap();
        assert_eq!(phone.as_str(), "+5511999999999");
        assert_eq!(phone.digits(), "5511999999999");
    }

    #[test]
    fn test_phone_strips_formatting() {
        let phone = Phone::new(" +55 (11) 99999-9999 ").unwrap();
        assert_eq!(phone, Phone::new("+5511999999999").unwrap());
    }

    #[test]
    fn test_phone_invalid() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("5511999999999").is_err());
        assert!(Phone::new("+55 11 abc").is_err());
        assert!(Phone::new("+0511999999").is_err());
        assert!(Phone::new("+1234567").is_err());
        assert!(Phone::new("+1234567890123456").is_err());
    }

    #[test]
    fn test_phone_error_kind() {
        assert!(Phone::new("12").unwrap_err().is_validation());
    }
}
