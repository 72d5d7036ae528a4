// Path: crates/types/src/kv/mod.rs

//! Key/value pairs and their canonical ordering.
//!
//! Attribute data is assembled from non-deterministic iteration (transaction
//! execution, validator set diffs, shard roots). Before anything is hashed or
//! rendered it is put into canonical order: ascending unsigned byte order of the
//! key, then of the value. Sorting is explicit; mutation never sorts eagerly.
//!
//! The canonical string form is `key1:hex(value1)|key2:hex(value2)|...|`. Every
//! pair is terminated by `|` and an empty collection renders as the empty string.
//! Keys are written verbatim and never escaped, so a key containing `:` or `|`
//! does not survive a round trip. The output must stay byte-stable across
//! versions.

mod int64;

pub use int64::{compare_int64_pairs, Int64Pair, Int64Pairs};

use crate::error::PairsError;
use crate::wire;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Separates a key from its hex-encoded value in the canonical string form.
pub const KEY_VALUE_SEPARATOR: u8 = b':';
/// Terminates every pair in the canonical string form.
pub const PAIR_TERMINATOR: u8 = b'|';

/// An immutable key/value byte pair.
///
/// Keys are not unique within a collection; duplicates are legal and kept.
/// Nodes omit empty fields from JSON, so both decode as empty when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default, Encode, Decode)]
pub struct Pair {
    #[serde(default, with = "wire::base64_bytes")]
    key: Vec<u8>,
    #[serde(default, with = "wire::base64_bytes")]
    value: Vec<u8>,
}

impl Pair {
    /// Creates a pair from anything convertible into owned bytes.
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The value bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

/// The canonical comparator: key first, then value, both as unsigned bytes.
pub fn compare_pairs(a: &Pair, b: &Pair) -> Ordering {
    a.key
        .as_slice()
        .cmp(b.key.as_slice())
        .then_with(|| a.value.as_slice().cmp(b.value.as_slice()))
}

impl Ord for Pair {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_pairs(self, other)
    }
}

impl PartialOrd for Pair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An ordered, byte-valued collection of [`Pair`]s.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default, Encode, Decode)]
#[serde(transparent)]
pub struct Pairs(Vec<Pair>);

impl Pairs {
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
        compare_pairs(&self.0[i], &self.0[j]) == Ordering::Less
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
    ///
    /// Pairs that compare equal are byte-identical, so every node sorting the
    /// same multiset ends up with the same sequence.
    pub fn sort(&mut self) {
        self.0.sort_by(compare_pairs);
    }

    /// Whether the collection is already in canonical order.
    pub fn is_sorted(&self) -> bool {
        self.0
            .windows(2)
            .all(|w| matches!(w, [a, b] if compare_pairs(a, b) != Ordering::Greater))
    }

    /// Appends a pair. Does not re-sort.
    pub fn push(&mut self, pair: Pair) {
        self.0.push(pair);
    }

    /// Iterates over the pairs in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.0.iter()
    }

    /// The pairs as a slice, in their current order.
    pub fn as_slice(&self) -> &[Pair] {
        &self.0
    }

    /// Sorts the collection, then renders it as canonical bytes.
    ///
    /// This is the exact byte form; keys are copied verbatim even when they are
    /// not valid UTF-8.
    pub fn to_canonical_bytes(&mut self) -> Vec<u8> {
        self.sort();
        let mut out = Vec::new();
        for pair in &self.0 {
            out.extend_from_slice(&pair.key);
            out.push(KEY_VALUE_SEPARATOR);
            out.extend_from_slice(hex::encode(&pair.value).as_bytes());
            out.push(PAIR_TERMINATOR);
        }
        out
    }

    /// Sorts the collection, then renders it as a canonical string.
    ///
    /// Non-UTF-8 key bytes are replaced with U+FFFD; use
    /// [`Pairs::to_canonical_bytes`] where the exact bytes matter.
    pub fn to_canonical_string(&mut self) -> String {
        String::from_utf8_lossy(&self.to_canonical_bytes()).into_owned()
    }

    /// Parses the canonical byte form.
    ///
    /// Empty segments are skipped, which covers both the trailing terminator and
    /// the empty input. Each remaining segment is split on `:`; the first field
    /// is the key and the second is the hex-encoded value. Any further fields are
    /// ignored. Parsing keeps the input order; it does not sort.
    pub fn from_canonical_bytes(input: &[u8]) -> Result<Self, PairsError> {
        let mut pairs = Vec::new();
        for segment in input.split(|b| *b == PAIR_TERMINATOR) {
            if segment.is_empty() {
                continue;
            }
            let mut fields = segment.split(|b| *b == KEY_VALUE_SEPARATOR);
            let key = fields.next().unwrap_or_default();
            let value_hex = fields.next().ok_or_else(|| PairsError::MissingSeparator {
                segment: String::from_utf8_lossy(segment).into_owned(),
            })?;
            let value = hex::decode(value_hex).map_err(|e| PairsError::InvalidHex {
                segment: String::from_utf8_lossy(segment).into_owned(),
                reason: e.to_string(),
            })?;
            pairs.push(Pair::new(key, value));
        }
        Ok(Self(pairs))
    }

    /// Parses the canonical string form. See [`Pairs::from_canonical_bytes`].
    pub fn from_canonical_str(input: &str) -> Result<Self, PairsError> {
        Self::from_canonical_bytes(input.as_bytes())
    }
}

impl FromStr for Pairs {
    type Err = PairsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical_str(s)
    }
}

impl From<Vec<Pair>> for Pairs {
    fn from(pairs: Vec<Pair>) -> Self {
        Self(pairs)
    }
}

impl From<Pairs> for Vec<Pair> {
    fn from(pairs: Pairs) -> Self {
        pairs.0
    }
}

impl FromIterator<Pair> for Pairs {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Pair> for Pairs {
    fn extend<I: IntoIterator<Item = Pair>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Pairs {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pairs {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[Pair]> for Pairs {
    fn as_ref(&self) -> &[Pair] {
        &self.0
    }
}
