//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every other crate in the workspace
//! agrees on:
//! - The unified error type ([`error::app_error::AppError`]) and its kinds
//! - Conversions from parse/serialization errors into that type
//! - Typed identifiers ([`id::Id`])
//!
//! Value objects, the record converter and the guarded collection all
//! report failures through these types, so callers handle one error shape.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
