//! Password Value Object
//!
//! Clear-text password as received from input, checked against a
//! NIST SP 800-63B style policy:
//! - Unicode NFKC normalization before any check
//! - 8 to 128 code points
//! - No control characters other than space, tab and newline
//! - Not empty or whitespace-only
//! - Not a trivially guessable pattern
//!
//! The buffer is zeroized on drop and never printed.

use std::borrow::Cow;
use std::fmt;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use kernel::error::app_error::{AppError, AppResult};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::password_hash::PasswordHash;

/// Minimum password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password policy violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

impl PasswordPolicyError {
    fn action(&self) -> &'static str {
        match self {
            PasswordPolicyError::TooShort { .. } => "Please choose a longer password",
            PasswordPolicyError::TooLong { .. } => "Please choose a shorter password",
            PasswordPolicyError::EmptyOrWhitespace => "Please enter a password",
            PasswordPolicyError::InvalidCharacter => {
                "Please remove any special control characters"
            }
            PasswordPolicyError::CommonPattern => "Please choose a more unique password",
        }
    }
}

impl From<PasswordPolicyError> for AppError {
    fn from(err: PasswordPolicyError) -> Self {
        let action = err.action();
        AppError::bad_request(err.to_string()).with_action(action)
    }
}

/// Clear-text password
///
/// Does not implement `Clone`, `PartialEq` compares the normalized text.
#[derive(Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Validate and normalize a password
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let mut raw = raw.into();
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        let password = Self(normalized);
        password.check_policy()?;
        Ok(password)
    }

    fn check_policy(&self) -> Result<(), PasswordPolicyError> {
        let text = self.0.as_str();

        if text.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // NIST: count code points, not bytes
        let char_count = text.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if text
            .chars()
            .any(|ch| ch.is_control() && !matches!(ch, ' ' | '\t' | '\n'))
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if is_weak(text) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Expose the normalized text (e.g. to hand it to a hasher)
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Number of code points after normalization
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Hash with Argon2id and a random 128-bit salt
    pub fn hash(&self) -> AppResult<PasswordHash> {
        let salt = SaltString::generate(OsRng);
        let phc = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

        PasswordHash::new(phc.to_string())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl TryFrom<String> for Password {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Password::new(value)
    }
}

/// Same-character runs, digit sequences, keyboard rows and a short list
/// of the most common passwords.
fn is_weak(password: &str) -> bool {
    let lower: Cow<'_, str> = if password.chars().any(char::is_uppercase) {
        Cow::Owned(password.to_lowercase())
    } else {
        Cow::Borrowed(password)
    };

    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if chars.all(|c| c == first) {
            return true;
        }
    }

    let digits: Vec<u32> = lower.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() == lower.chars().count() && digits.len() >= 4 {
        let ascending = digits.windows(2).all(|w| (w[0] + 1) % 10 == w[1]);
        let descending = digits.windows(2).all(|w| (w[1] + 1) % 10 == w[0]);
        if ascending || descending {
            return true;
        }
    }

    const KEYBOARD_ROWS: &[&str] = &["qwerty", "asdfgh", "zxcvbn", "qazwsx", "1qaz2wsx"];
    if KEYBOARD_ROWS.iter().any(|row| lower.contains(row)) {
        return true;
    }

    const COMMON: &[&str] = &[
        "password",
        "password1",
        "password123",
        "abcdefgh",
        "letmein1",
        "welcome1",
        "admin123",
        "iloveyou",
        "sunshine",
        "football",
        "baseball",
        "trustno1",
    ];
    COMMON.contains(&&*lower)
}
