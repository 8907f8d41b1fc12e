//! Collection
//!
//! Items are addressed by an integer key. Keys are never compacted:
//! removing an item vacates its key and later items keep theirs. Iteration
//! follows insertion order, which is what [`Collection::first`] and
//! [`Collection::last`] report, independent of numeric key order.
//!
//! A constrained collection checks every incoming item against its
//! [`TypeGuard`]. The check runs in one place, shared by `add`, `set`,
//! `remove` and `contains`.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{CollectionError, CollectionResult};
use crate::guard::TypeGuard;
use crate::identity::Identical;

pub struct Collection<T> {
    entries: Vec<(usize, T)>,
    guard: Option<TypeGuard<T>>,
    /// One past the largest key ever assigned, `None` once `usize::MAX` is taken
    next_key: Option<usize>,
}

impl<T> Collection<T> {
    /// Unconstrained, empty
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            guard: None,
            next_key: Some(0),
        }
    }

    /// Empty, every stored item must pass `guard`
    pub fn constrained(guard: TypeGuard<T>) -> Self {
        Self {
            guard: Some(guard),
            ..Self::new()
        }
    }

    /// Constrained collection holding `items` at keys `0..n`
    ///
    /// Fails on the first item the guard rejects.
    pub fn from_items(
        items: impl IntoIterator<Item = T>,
        guard: TypeGuard<T>,
    ) -> CollectionResult<Self> {
        let mut collection = Self::constrained(guard);
        for item in items {
            collection.add(item)?;
        }
        Ok(collection)
    }

    pub fn guard(&self) -> Option<&TypeGuard<T>> {
        self.guard.as_ref()
    }

    fn check(&self, item: &T) -> CollectionResult<()> {
        match &self.guard {
            Some(guard) if !guard.admits(item) => {
                let err = CollectionError::type_mismatch(guard.name());
                err.log();
                Err(err)
            }
            _ => Ok(()),
        }
    }

    fn position(&self, key: usize) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Item at `key`, `None` when the key is vacant or was never used
    pub fn get(&self, key: usize) -> Option<&T> {
        self.position(key).map(|pos| &self.entries[pos].1)
    }

    /// Store `item` at `key`
    ///
    /// An existing key is replaced in place and keeps its iteration
    /// position; a new key goes to the end of iteration order.
    pub fn set(&mut self, key: usize, item: T) -> CollectionResult<&mut Self> {
        self.check(&item)?;

        // Keys at or past the counter have never been assigned
        let existing = match self.next_key {
            Some(next) if key >= next => None,
            _ => self.position(key),
        };

        match existing {
            Some(pos) => self.entries[pos].1 = item,
            None => {
                self.entries.push((key, item));
                self.next_key = match (self.next_key, key.checked_add(1)) {
                    (Some(next), Some(after)) => Some(next.max(after)),
                    _ => None,
                };
            }
        }
        Ok(self)
    }

    /// Append `item` at the next free key
    ///
    /// Keys vacated by [`remove`](Self::remove) are not reused. Fails with
    /// [`CollectionError::KeysExhausted`] once `usize::MAX` has been assigned.
    pub fn add(&mut self, item: T) -> CollectionResult<&mut Self> {
        let Some(key) = self.next_key else {
            let err = CollectionError::KeysExhausted;
            err.log();
            return Err(err);
        };
        self.set(key, item)
    }

    /// Empties the collection and restarts keys at 0; the guard is kept
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self.next_key = Some(0);
        self
    }

    // ========================================================================
    // Ends and size
    // ========================================================================

    pub fn first(&self) -> Option<&T> {
        self.entries.first().map(|(_, item)| item)
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.last().map(|(_, item)| item)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_greater_than(&self, n: usize) -> bool {
        self.count() > n
    }

    pub fn is_less_than(&self, n: usize) -> bool {
        self.count() < n
    }

    pub fn is_greater_than_or_equal_to(&self, n: usize) -> bool {
        self.count() >= n
    }

    pub fn is_less_than_or_equal_to(&self, n: usize) -> bool {
        self.count() <= n
    }

    // ========================================================================
    // Iteration and export
    // ========================================================================

    /// `(key, item)` pairs in iteration order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Live items in iteration order
    pub fn to_array(&self) -> Vec<&T> {
        self.entries.iter().map(|(_, item)| item).collect()
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// New unconstrained collection of `f(item)`, keyed `0..n`
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Collection<U> {
        self.entries.iter().map(|(_, item)| f(item)).collect()
    }

    /// New unconstrained collection of the items `f` keeps, keyed `0..n`
    pub fn filter(&self, mut f: impl FnMut(&T) -> bool) -> Collection<T>
    where
        T: Clone,
    {
        self.entries
            .iter()
            .filter(|(_, item)| f(item))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// New unconstrained collection: this collection's items, then `other`'s
    pub fn merge(&self, other: &Collection<T>) -> Collection<T>
    where
        T: Clone,
    {
        self.entries
            .iter()
            .chain(other.entries.iter())
            .map(|(_, item)| item.clone())
            .collect()
    }
}

impl<T: Identical> Collection<T> {
    /// Remove the first item identical to `item`
    ///
    /// The guard runs before the search; an item that is not stored leaves
    /// the collection unchanged.
    pub fn remove(&mut self, item: &T) -> CollectionResult<&mut Self> {
        self.check(item)?;

        if let Some(pos) = self
            .entries
            .iter()
            .position(|(_, stored)| stored.is_identical(item))
        {
            let (key, _) = self.entries.remove(pos);
            tracing::trace!(key, "Collection key vacated");
        }
        Ok(self)
    }

    pub fn contains(&self, item: &T) -> CollectionResult<bool> {
        self.check(item)?;
        Ok(self
            .entries
            .iter()
            .any(|(_, stored)| stored.is_identical(item)))
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            guard: self.guard.clone(),
            next_key: self.next_key,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("entries", &self.entries)
            .field("guard", &self.guard)
            .finish()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let entries: Vec<(usize, T)> = iter.into_iter().enumerate().collect();
        Self {
            next_key: Some(entries.len()),
            entries,
            guard: None,
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, &item)` returned by [`Collection::iter`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, (usize, T)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, item)| (*key, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, item)| (*key, item))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
