//! Value Objects
//!
//! Small immutable types built from a validated primitive. Every
//! constructor takes one argument and returns [`AppResult`], failing with a
//! `BadRequest` [`AppError`] when the primitive is malformed.
//!
//! | type            | primitive | rule                                   |
//! |-----------------|-----------|----------------------------------------|
//! | [`Identifier`]  | string    | UUID textual form                      |
//! | [`NumericId`]   | integer   | strictly positive                      |
//! | [`Email`]       | string    | `local@domain.tld`, normalized         |
//! | [`Phone`]       | string    | E.164 after stripping formatting       |
//! | [`Password`]    | string    | length/charset policy, NFKC            |
//! | [`PasswordHash`]| string    | PHC string                             |
//! | [`Hash`]        | string    | hex digest of a known length           |
//!
//! [`AppResult`]: kernel::error::app_error::AppResult
//! [`AppError`]: kernel::error::app_error::AppError

pub mod email;
pub mod hash;
pub mod identifier;
pub mod numeric_id;
pub mod password;
pub mod password_hash;
pub mod phone;

pub use email::Email;
pub use hash::{Hash, HashAlgorithm};
pub use identifier::Identifier;
pub use numeric_id::NumericId;
pub use password::Password;
pub use password_hash::PasswordHash;
pub use phone::Phone;
