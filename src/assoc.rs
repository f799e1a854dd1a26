//! Key-unique persistent maps with functional transforms.
//!
//! [`Assoc`] is a thin wrapper around the `im` crate's persistent hash map.
//! Iteration order is unspecified; operations that traverse pairs
//! ([`Assoc::keys`], [`Assoc::values`], [`Assoc::fold`],
//! [`Assoc::for_each`]) inherit that order. [`Assoc::fold_sorted`] is the
//! deterministic alternative for fold functions that are not
//! order-independent.

use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::seq::Seq;

/// Persistent key-unique map. Iteration order unspecified.
///
/// Two maps are equal iff they have the same key set and an equal value
/// for every key.
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
pub struct Assoc<K, V>(im::HashMap<K, V>)
where
    K: Clone + Eq + Hash,
    V: Clone;

impl<K: Clone + Eq + Hash, V: Clone> Assoc<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns true if the map contains the key, regardless of value.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.0.contains_key(key)
    }

    /// Returns a new map with the key-value pair inserted.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let mut new = self.0.clone();
        new.insert(key, value);
        Self(new)
    }

    /// Returns a new map with the key removed.
    ///
    /// No-op if the key was already absent.
    #[must_use]
    pub fn remove(&self, key: &K) -> Self {
        let mut new = self.0.clone();
        new.remove(key);
        Self(new)
    }

    /// Returns an iterator over key-value pairs, order unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter()
    }

    /// Returns a new map containing only the pairs for which `pred` is
    /// true.
    #[must_use]
    pub fn filter(&self, mut pred: impl FnMut(&K, &V) -> bool) -> Self {
        let mut out = im::HashMap::new();
        for (k, v) in self.0.iter() {
            if pred(k, v) {
                out.insert(k.clone(), v.clone());
            }
        }
        Self(out)
    }

    /// Returns a new map with the same keys and each value replaced by
    /// `f(key, value)`.
    #[must_use]
    pub fn map_values<V2: Clone>(&self, mut f: impl FnMut(&K, &V) -> V2) -> Assoc<K, V2> {
        let mut out = im::HashMap::new();
        for (k, v) in self.0.iter() {
            out.insert(k.clone(), f(k, v));
        }
        Assoc(out)
    }

    /// Folds over the pairs in unspecified order.
    ///
    /// For a deterministic result, `f` must be order-independent; this is
    /// a caller obligation, not something the operation enforces. Use
    /// [`Assoc::fold_sorted`] when it is not.
    pub fn fold<U>(&self, init: U, f: impl FnMut(U, (&K, &V)) -> U) -> U {
        self.0.iter().fold(init, f)
    }

    /// Folds over the pairs in ascending key order.
    pub fn fold_sorted<U>(&self, init: U, f: impl FnMut(U, (&K, &V)) -> U) -> U
    where
        K: Ord,
    {
        let mut pairs: Vec<(&K, &V)> = self.0.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs.into_iter().fold(init, f)
    }

    /// Returns the keys as a sequence, each exactly once, order
    /// unspecified.
    #[must_use]
    pub fn keys(&self) -> Seq<K> {
        self.0.keys().cloned().collect()
    }

    /// Returns the values as a sequence, one per pair, order unspecified.
    ///
    /// Duplicate values are preserved when several keys share one.
    #[must_use]
    pub fn values(&self) -> Seq<V> {
        self.0.values().cloned().collect()
    }

    /// Returns the union of both maps. On key collision `other`'s value
    /// wins. Neither input is mutated.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut out = self.0.clone();
        for (k, v) in other.0.iter() {
            out.insert(k.clone(), v.clone());
        }
        Self(out)
    }

    /// Like [`Assoc::merge`], but on key collision the result value is
    /// `f(key, left, right)`. Non-colliding keys from either side pass
    /// through unchanged.
    #[must_use]
    pub fn merge_with(&self, other: &Self, mut f: impl FnMut(&K, &V, &V) -> V) -> Self {
        let mut out = self.0.clone();
        for (k, v) in other.0.iter() {
            let merged = match out.get(k) {
                Some(existing) => f(k, existing, v),
                None => v.clone(),
            };
            out.insert(k.clone(), merged);
        }
        Self(out)
    }

    /// Calls `f` once per pair for its side effect, order unspecified.
    /// `f`'s result is discarded.
    pub fn for_each<R>(&self, mut f: impl FnMut(&K, &V) -> R) {
        for (k, v) in self.0.iter() {
            let _ = f(k, v);
        }
    }

    /// Returns a new map with the value at `key` replaced by `f(value)`.
    ///
    /// If the key is absent, the result is value-equal to `self`.
    #[must_use]
    pub fn update(&self, key: &K, f: impl FnOnce(&V) -> V) -> Self {
        match self.0.get(key) {
            Some(value) => {
                let mut new = self.0.clone();
                new.insert(key.clone(), f(value));
                Self(new)
            }
            None => self.clone(),
        }
    }

    /// Replaces the value at `key` with `f(value)`, mutating this map.
    ///
    /// No-op if the key is absent. This is the explicit opt-in for
    /// in-place semantics; [`Assoc::update`] is the pure form.
    pub fn update_in_place(&mut self, key: &K, f: impl FnOnce(&V) -> V) {
        if let Some(value) = self.0.get_mut(key) {
            let next = f(value);
            *value = next;
        }
    }
}

impl<K: Clone + Eq + Hash + fmt::Debug, V: Clone + fmt::Debug> fmt::Debug for Assoc<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Clone + Eq + Hash, V: Clone + PartialEq> PartialEq for Assoc<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Clone + Eq + Hash, V: Clone + Eq> Eq for Assoc<K, V> {}

impl<K: Clone + Eq + Hash, V: Clone> FromIterator<(K, V)> for Assoc<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(im::HashMap::from_iter(iter))
    }
}
