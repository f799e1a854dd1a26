//! Ordered persistent sequences with functional transforms.
//!
//! [`Seq`] is a thin wrapper around the `im` crate's persistent vector.
//! Every transform takes `&self` and returns a freshly built sequence;
//! inputs are never mutated. Cloning is O(1) via structural sharing, and a
//! clone is value-independent of its source.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, 0-indexed persistent sequence. Duplicates allowed.
///
/// Two sequences are equal iff they have the same length and pairwise
/// equal elements at every index.
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
pub struct Seq<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> Seq<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a new sequence with the element appended.
    #[must_use]
    pub fn push_back(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.push_back(value);
        Self(new)
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.back()
    }

    /// Returns true if some element equals `value`.
    ///
    /// Linear scan; stops at the first match.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.0.iter().any(|item| item == value)
    }

    /// Returns a new sequence of the elements for which `pred` is true,
    /// preserving relative order.
    ///
    /// An empty input or an all-false predicate yields an empty sequence.
    #[must_use]
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Self {
        Self(self.0.iter().filter(|item| pred(item)).cloned().collect())
    }

    /// Returns a new sequence of the same length with `f` applied to each
    /// element, in index order.
    #[must_use]
    pub fn map<U: Clone>(&self, f: impl FnMut(&T) -> U) -> Seq<U> {
        Seq(self.0.iter().map(f).collect())
    }

    /// Left-folds the sequence in index order.
    ///
    /// An empty sequence returns `init` unchanged.
    pub fn fold<U>(&self, init: U, f: impl FnMut(U, &T) -> U) -> U {
        self.0.iter().fold(init, f)
    }

    /// Returns a new sequence with the elements in opposite index order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().cloned().collect())
    }

    /// Returns a new sequence with later duplicates dropped, preserving
    /// first-occurrence order.
    #[must_use]
    pub fn unique(&self) -> Self
    where
        T: PartialEq,
    {
        let mut out = im::Vector::new();
        for item in self.0.iter() {
            if !out.iter().any(|seen| seen == item) {
                out.push_back(item.clone());
            }
        }
        Self(out)
    }

    /// Returns a new sequence alternating elements of `self` and `other`:
    /// `self[0], other[0], self[1], other[1], …`.
    ///
    /// When the lengths differ, the exhausted side stops contributing and
    /// the longer side continues alone. The result length is always
    /// `self.len() + other.len()`.
    #[must_use]
    pub fn interleave(&self, other: &Self) -> Self {
        let mut out = im::Vector::new();
        let mut left = self.0.iter();
        let mut right = other.0.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => break,
                (a, b) => {
                    if let Some(item) = a {
                        out.push_back(item.clone());
                    }
                    if let Some(item) = b {
                        out.push_back(item.clone());
                    }
                }
            }
        }
        Self(out)
    }
}

impl<T: Clone> Seq<Seq<T>> {
    /// Concatenates all inner sequences in outer-then-inner order.
    #[must_use]
    pub fn flatten(&self) -> Seq<T> {
        let mut out = im::Vector::new();
        for inner in self.0.iter() {
            out.append(inner.0.clone());
        }
        Seq(out)
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for Seq<T> {}

impl<T: Clone + Hash> Hash for Seq<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
