// Path: crates/types/src/kv/int64.rs

//! Integer-valued pairs. Ordered like [`super::Pairs`], with a numeric tie-break.

use crate::wire;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An immutable key/value pair carrying a signed 64-bit value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default, Encode, Decode)]
pub struct Int64Pair {
    #[serde(default, with = "wire::base64_bytes")]
    key: Vec<u8>,
    #[serde(default, with = "wire::i64_string")]
    value: i64,
}

impl Int64Pair {
    /// Creates a pair.
    pub fn new(key: impl Into<Vec<u8>>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Key as unsigned bytes, then value numerically.
pub fn compare_int64_pairs(a: &Int64Pair, b: &Int64Pair) -> Ordering {
    a.key
        .as_slice()
        .cmp(b.key.as_slice())
        .then_with(|| a.value.cmp(&b.value))
}

impl Ord for Int64Pair {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_int64_pairs(self, other)
    }
}

impl PartialOrd for Int64Pair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An ordered collection of [`Int64Pair`]s. Has no canonical string form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default, Encode, Decode)]
#[serde(transparent)]
pub struct Int64Pairs(Vec<Int64Pair>);

impl Int64Pairs {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the pair at `i` sorts strictly before the pair at `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn less(&self, i: usize, j: usize) -> bool {
        compare_int64_pairs(&self.0[i], &self.0[j]) == Ordering::Less
    }

    /// Exchanges the pairs at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Puts the collection into canonical order, in place.
    pub fn sort(&mut self) {
        self.0.sort_by(compare_int64_pairs);
    }

    /// Appends a pair. Does not re-sort.
    pub fn push(&mut self, pair: Int64Pair) {
        self.0.push(pair);
    }

    /// Iterates over the pairs in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Int64Pair> {
        self.0.iter()
    }

    /// The pairs as a slice, in their current order.
    pub fn as_slice(&self) -> &[Int64Pair] {
        &self.0
    }
}

impl From<Vec<Int64Pair>> for Int64Pairs {
    fn from(pairs: Vec<Int64Pair>) -> Self {
        Self(pairs)
    }
}

impl FromIterator<Int64Pair> for Int64Pairs {
    fn from_iter<I: IntoIterator<Item = Int64Pair>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Int64Pairs {
    type Item = Int64Pair;
    type IntoIter = std::vec::IntoIter<Int64Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
