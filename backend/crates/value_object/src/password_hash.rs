//! Password Hash Value Object
//!
//! A password hash in PHC string format
//! (`$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`). Only the format is
//! checked on construction; any PHC algorithm is accepted so hashes from
//! older schemes can still be loaded and flagged with [`PasswordHash::needs_rehash`].

use std::fmt;
use std::str::FromStr;

use argon2::{Argon2, PasswordVerifier};
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::password::Password;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(phc: impl Into<String>) -> AppResult<Self> {
        let phc = phc.into();
        argon2::PasswordHash::new(&phc).map_err(|e| {
            AppError::bad_request(format!("Invalid password hash format: {}", e))
        })?;
        Ok(Self(phc))
    }

    pub fn as_phc_string(&self) -> &str {
        &self.0
    }

    /// Algorithm identifier, e.g. `argon2id`
    pub fn algorithm(&self) -> &str {
        self.0
            .strip_prefix('$')
            .and_then(|rest| rest.split('$').next())
            .unwrap_or("")
    }

    /// Verify a password against this hash
    ///
    /// Argon2 compares in constant time.
    pub fn verify(&self, password: &Password) -> bool {
        let Ok(parsed) = argon2::PasswordHash::new(&self.0) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// True when the hash was not produced by Argon2id
    pub fn needs_rehash(&self) -> bool {
        self.algorithm() != argon2::Algorithm::Argon2id.ident().as_str()
    }
}

impl FromStr for PasswordHash {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        PasswordHash::new(s)
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        PasswordHash::new(value)
    }
}

impl From<PasswordHash> for String {
    fn from(hash: PasswordHash) -> Self {
        hash.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("algorithm", &self.algorithm())
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
