// Path: crates/types/src/app/commit.rs

use crate::codec;
use crate::error::CodecError;
use crate::kv::Pairs;
use crate::wire;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A versioned state root together with the per-shard roots it covers.
///
/// The state-commit layer builds these; no validation of hash length or pair
/// contents happens here. Once populated, the sharding pairs follow the
/// canonical order of [`Pairs`] whenever they are sorted, encoded or hashed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
pub struct CommitId {
    /// The tree version number.
    #[serde(with = "wire::i64_string")]
    pub version: i64,
    /// The merkle root of the tree at `version`.
    #[serde(with = "wire::base64_bytes")]
    pub hash: Vec<u8>,
    /// Shard name to shard root.
    #[serde(deserialize_with = "wire::null_as_default")]
    pub sharding_hash: Pairs,
}

impl CommitId {
    /// Creates a commit identifier. Performs no validation.
    pub fn new(version: i64, hash: impl Into<Vec<u8>>, sharding_hash: impl Into<Pairs>) -> Self {
        Self {
            version,
            hash: hash.into(),
            sharding_hash: sharding_hash.into(),
        }
    }

    /// Decodes a commit identifier from its JSON wire form.
    ///
    /// `version`, `hash` and `sharding_hash` are all required; a missing or
    /// mistyped field is a [`CodecError::Json`].
    pub fn from_json(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::from_json(bytes)
    }

    /// Encodes the commit identifier in its JSON wire form.
    pub fn to_json(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_json(self)
    }

    /// Decodes a commit identifier from its SCALE form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::from_bytes_canonical(bytes)
    }

    /// Encodes the commit identifier in its SCALE form.
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::to_bytes_canonical(self)
    }

    /// Sorts the sharding pairs in place and returns their canonical string.
    pub fn canonical_sharding_string(&mut self) -> String {
        self.sharding_hash.to_canonical_string()
    }

    /// SHA-256 of the canonical bytes of the sharding pairs.
    ///
    /// Works on a sorted copy, so `self` is left untouched and any two
    /// identifiers holding the same multiset of pairs produce the same digest.
    pub fn sharding_digest(&self) -> [u8; 32] {
        let mut sorted = self.sharding_hash.clone();
        let digest = Sha256::digest(sorted.to_canonical_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        out
    }
}
