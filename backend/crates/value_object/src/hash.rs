//! Generic Hash Value Object
//!
//! A hex-encoded digest such as a content checksum or a token fingerprint.
//! The length must match a known digest size; the text is stored in
//! lowercase so equal digests compare equal regardless of input case.

use std::fmt;
use std::str::FromStr;

use kernel::error::{
    app_error::{AppError, AppResult, ResultExt},
    kind::ErrorKind,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Digest family inferred from the hex length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// 128-bit (MD5 sized)
    Bits128,
    /// 160-bit (SHA-1 sized)
    Bits160,
    /// 256-bit (SHA-256 sized)
    Bits256,
    /// 512-bit (SHA-512 sized)
    Bits512,
}

impl HashAlgorithm {
    fn from_hex_len(len: usize) -> Option<Self> {
        match len {
            32 => Some(Self::Bits128),
            40 => Some(Self::Bits160),
            64 => Some(Self::Bits256),
            128 => Some(Self::Bits512),
            _ => None,
        }
    }

    pub const fn bits(&self) -> usize {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits256 => 256,
            Self::Bits512 => 512,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, std::hash::Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hash(String);

impl Hash {
    pub fn new(hex_digest: impl Into<String>) -> AppResult<Self> {
        let digest = hex_digest.into().trim().to_ascii_lowercase();

        if HashAlgorithm::from_hex_len(digest.len()).is_none() {
            return Err(AppError::bad_request(format!(
                "Hash must be 32, 40, 64 or 128 hex characters (got {})",
                digest.len()
            )));
        }

        hex::decode(&digest).map_app_err(ErrorKind::BadRequest, "Hash must be hexadecimal")?;

        Ok(Self(digest))
    }

    /// SHA-256 of `data`
    pub fn sha256(data: &[u8]) -> Self {
        let digest: [u8; 32] = Sha256::digest(data).into();
        Self(hex::encode(digest))
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        // Length was checked on construction
        HashAlgorithm::from_hex_len(self.0.len()).unwrap_or(HashAlgorithm::Bits256)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        hex::decode(&self.0).unwrap_or_default()
    }
}

impl FromStr for Hash {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Hash::new(s)
    }
}

impl TryFrom<String> for Hash {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Hash::new(value)
    }
}

impl From<Hash> for String {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Hash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
