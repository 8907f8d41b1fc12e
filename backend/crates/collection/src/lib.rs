//! Ordered, type-guarded collection
//!
//! | item type                 | constraint                                   |
//! |---------------------------|----------------------------------------------|
//! | `Collection<Triangle>`    | compile time, no guard needed                |
//! | `Collection<Arc<dyn Shape>>` | compile time, any `Shape` implementor     |
//! | `Collection<AnyItem>`     | runtime [`TypeGuard`] (concrete or capability) |
//!
//! ```rust
//! use std::sync::Arc;
//! use collection::{AnyItem, Collection, TypeGuard};
//!
//! let mut names: Collection<AnyItem> = Collection::constrained(TypeGuard::concrete::<String>());
//! names.add(Arc::new(String::from("a")))?;
//!
//! let err = names.add(Arc::new(42_i32)).unwrap_err();
//! assert!(err.is_type_mismatch());
//! assert_eq!(names.count(), 1);
//! # Ok::<(), collection::CollectionError>(())
//! ```

pub mod collection;
pub mod error;
pub mod guard;
pub mod identity;


pub use collection::{Collection, Iter};
pub use error::{CollectionError, CollectionResult};
pub use guard::{AnyItem, TypeGuard};
pub use identity::Identical;
