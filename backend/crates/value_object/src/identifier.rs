//! Identifier Value Object
//!
//! UUID identifier for entities whose concrete type the caller does not
//! track. Callers that do should use `kernel::id::Id<Marker>` directly.

use kernel::id::{Id, markers};

/// Untyped entity identifier
pub type Identifier = Id<markers::Entity>;
