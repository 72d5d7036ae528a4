// Path: crates/types/src/app/consensus.rs

use crate::wire;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A typed public key as it appears in a validator update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default, Encode, Decode)]
pub struct PubKey {
    /// The key algorithm name (e.g. "ed25519").
    #[serde(rename = "type", default)]
    pub key_type: String,
    /// The raw public key bytes.
    #[serde(default, with = "wire::base64_bytes")]
    pub data: Vec<u8>,
}

/// A change to a single validator's voting power.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default, Encode, Decode)]
pub struct ValidatorUpdate {
    /// The validator's public key.
    pub pub_key: PubKey,
    /// The new voting power. Zero removes the validator and is omitted from
    /// JSON by other nodes, so an absent field decodes as zero.
    #[serde(default, with = "wire::i64_string")]
    pub power: i64,
}

impl ValidatorUpdate {
    /// Creates an update for a key of the given type.
    pub fn new(key_type: impl Into<String>, data: impl Into<Vec<u8>>, power: i64) -> Self {
        Self {
            pub_key: PubKey {
                key_type: key_type.into(),
                data: data.into(),
            },
            power,
        }
    }
}

/// A list of validator updates ordered by raw public key bytes.
///
/// The order does not look at `power`: two updates for the same key compare
/// equal whatever their power. Consensus code downstream relies on exactly this
/// order, so it is not extended into a total order over the whole record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
#[serde(transparent)]
pub struct ValidatorUpdates(Vec<ValidatorUpdate>);

impl ValidatorUpdates {
    /// The number of updates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the key at `i` is not greater than the key at `j`.
    ///
    /// This is the non-strict `<=` predicate: it holds in both directions for
    /// equal keys. [`ValidatorUpdates::sort`] does not use it.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn less(&self, i: usize, j: usize) -> bool {
        compare_validator_keys(&self.0[i], &self.0[j]) != Ordering::Greater
    }

    /// Exchanges the updates at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Sorts by public key bytes, ascending.
    ///
    /// Uses a stable sort over the strict key order, so updates sharing a key
    /// keep their relative input order.
    pub fn sort(&mut self) {
        self.0.sort_by(compare_validator_keys);
    }

    /// Appends an update. Does not re-sort.
    pub fn push(&mut self, update: ValidatorUpdate) {
        self.0.push(update);
    }

    /// Iterates over the updates in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidatorUpdate> {
        self.0.iter()
    }

    /// The updates as a slice, in their current order.
    pub fn as_slice(&self) -> &[ValidatorUpdate] {
        &self.0
    }
}

/// Orders two updates by their public key bytes only.
pub fn compare_validator_keys(a: &ValidatorUpdate, b: &ValidatorUpdate) -> Ordering {
    a.pub_key.data.as_slice().cmp(b.pub_key.data.as_slice())
}

impl From<Vec<ValidatorUpdate>> for ValidatorUpdates {
    fn from(updates: Vec<ValidatorUpdate>) -> Self {
        Self(updates)
    }
}

impl From<ValidatorUpdates> for Vec<ValidatorUpdate> {
    fn from(updates: ValidatorUpdates) -> Self {
        updates.0
    }
}

impl FromIterator<ValidatorUpdate> for ValidatorUpdates {
    fn from_iter<I: IntoIterator<Item = ValidatorUpdate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidatorUpdates {
    type Item = ValidatorUpdate;
    type IntoIter = std::vec::IntoIter<ValidatorUpdate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(key: u8, power: i64) -> ValidatorUpdate {
        ValidatorUpdate::new("ed25519", vec![key], power)
    }

    #[test]
    fn test_sort_partitions_by_key() {
        let mut v: ValidatorUpdates =
            vec![update(0x02, 1), update(0x01, 1), update(0x01, 5), update(0x01, 9)].into();
        v.sort();

        let keys: Vec<u8> = v.iter().map(|u| u.pub_key.data[0]).collect();
        assert_eq!(keys, vec![0x01, 0x01, 0x01, 0x02]);

        // Only the partition is asserted; order among equal keys is not part of
        // the contract.
        let mut powers: Vec<i64> = v.iter().take(3).map(|u| u.power).collect();
        powers.sort();
        assert_eq!(powers, vec![1, 5, 9]);
    }

    #[test]
    fn test_less_is_non_strict() {
        let v: ValidatorUpdates = vec![update(0x01, 5), update(0x01, 9), update(0x02, 1)].into();
        assert!(v.less(0, 1));
        assert!(v.less(1, 0));
        assert!(v.less(0, 2));
        assert!(!v.less(2, 0));
    }

    #[test]
    fn test_swap() {
        let mut v: ValidatorUpdates = vec![update(0x02, 1), update(0x01, 1)].into();
        v.swap(0, 1);
        assert_eq!(v.as_slice()[0].pub_key.data, vec![0x01]);
    }

    #[test]
    fn test_json_shape() {
        let u = ValidatorUpdate::new("ed25519", vec![0x01, 0x02], 10);
        let json = serde_json::to_string(&u).unwrap();
        assert_eq!(
            json,
            r#"{"pub_key":{"type":"ed25519","data":"AQI="},"power":"10"}"#
        );
        let back: ValidatorUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, u);
    }

    #[test]
    fn test_removal_without_power_field_decodes() {
        let u: ValidatorUpdate =
            serde_json::from_str(r#"{"pub_key":{"type":"ed25519","data":"AQ=="}}"#).unwrap();
        assert_eq!(u, ValidatorUpdate::new("ed25519", vec![0x01], 0));

        let u: ValidatorUpdate = serde_json::from_str(r#"{"pub_key":{}}"#).unwrap();
        assert_eq!(u.pub_key, PubKey::default());
    }
}
