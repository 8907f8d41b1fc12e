//! Runtime type guards
//!
//! A [`TypeGuard`] is a named predicate over the collection's item type.
//! Statically typed collections do not need one; guards exist for
//! heterogeneous collections of [`AnyItem`] where membership is decided at
//! runtime, either by concrete type or by an abstract capability.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Type-erased shared item
pub type AnyItem = Arc<dyn Any + Send + Sync>;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub struct TypeGuard<T> {
    name: Cow<'static, str>,
    predicate: Predicate<T>,
}

impl<T> TypeGuard<T> {
    /// `name` is what a [`TypeMismatch`](crate::CollectionError::TypeMismatch)
    /// reports as the expected type.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn admits(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

impl<T: 'static> TypeGuard<T> {
    /// Admits an item when at least one of `guards` does
    pub fn any_of(guards: impl IntoIterator<Item = TypeGuard<T>>) -> Self {
        let guards: Vec<TypeGuard<T>> = guards.into_iter().collect();
        let name = guards
            .iter()
            .map(TypeGuard::name)
            .collect::<Vec<_>>()
            .join(" | ");

        Self::new(name, move |item: &T| {
            guards.iter().any(|guard| guard.admits(item))
        })
    }
}

impl TypeGuard<AnyItem> {
    /// Admits items whose concrete type is exactly `U`
    pub fn concrete<U: Any>() -> Self {
        Self::new(type_name::<U>(), |item: &AnyItem| (**item).is::<U>())
    }

    /// Admits items for which `probe` recognizes the capability `name`
    ///
    /// ```rust
    /// use collection::{AnyItem, TypeGuard};
    /// use std::sync::Arc;
    ///
    /// let numeric = TypeGuard::capability("Numeric", |item| item.is::<i32>() || item.is::<f64>());
    /// assert!(numeric.admits(&(Arc::new(1.5_f64) as AnyItem)));
    /// assert!(!numeric.admits(&(Arc::new("1") as AnyItem)));
    /// ```
    pub fn capability(
        name: impl Into<Cow<'static, str>>,
        probe: impl Fn(&(dyn Any + Send + Sync)) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, move |item: &AnyItem| probe(&**item))
    }
}

impl<T> Clone for TypeGuard<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for TypeGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeGuard").field("name", &self.name).finish()
    }
}

impl<T> fmt::Display for TypeGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
