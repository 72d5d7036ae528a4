// Path: crates/types/src/codec.rs

//! Defines the canonical binary codec and the JSON wire codec.
//!
//! The binary form wraps `parity-scale-codec` (SCALE) for its compact and
//! deterministic encoding. The JSON form is field-compatible with the structures
//! other nodes exchange (`version`, `hash`, `sharding_hash`, ...). Centralizing
//! both here keeps every component on the exact same representation.

use crate::error::CodecError;
use parity_scale_codec::{Decode, DecodeAll, Encode};
use serde::{de::DeserializeOwned, Serialize};

/// Encodes a value into its deterministic, canonical SCALE byte representation.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Vec<u8> {
    v.encode()
}

/// Decodes a value from its canonical SCALE byte representation.
///
/// Fails fast on any decoding error, including trailing bytes after a
/// complete value.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, CodecError> {
    T::decode_all(&mut &*b).map_err(|e| CodecError::Scale(format!("canonical decode failed: {}", e)))
}

/// Serializes a value to compact JSON bytes.
pub fn to_json<T: Serialize>(v: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(v)?)
}

/// Serializes a value to indented JSON bytes.
pub fn to_json_pretty<T: Serialize>(v: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec_pretty(v)?)
}

/// Deserializes a value from JSON bytes. Missing required fields and
/// mistyped fields are reported as [`CodecError::Json`].
pub fn from_json<T: DeserializeOwned>(b: &[u8]) -> Result<T, CodecError> {
    Ok(serde_json::from_slice(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Event, ValidatorUpdate, ValidatorUpdates, DEFAULT_EVENT};
    use crate::kv::{Pair, Pairs};

    #[test]
    fn test_canonical_codec_roundtrip() {
        let event = Event::new(
            DEFAULT_EVENT,
            vec![Pair::new("sender", "alice"), Pair::new("amount", vec![0x0a])],
        );
        let encoded = to_bytes_canonical(&event);
        assert!(!encoded.is_empty());
        assert_eq!(from_bytes_canonical::<Event>(&encoded).unwrap(), event);

        let updates: ValidatorUpdates = vec![
            ValidatorUpdate::new("ed25519", vec![0x02], 1),
            ValidatorUpdate::new("ed25519", vec![0x01], 0),
        ]
        .into();
        let encoded = to_bytes_canonical(&updates);
        assert_eq!(
            from_bytes_canonical::<ValidatorUpdates>(&encoded).unwrap(),
            updates
        );
    }

    #[test]
    fn test_sorting_fixes_the_encoding() {
        let mut a: Pairs = vec![Pair::new("b", vec![2]), Pair::new("a", vec![1])].into();
        let mut b: Pairs = vec![Pair::new("a", vec![1]), Pair::new("b", vec![2])].into();
        assert_ne!(to_bytes_canonical(&a), to_bytes_canonical(&b));
        a.sort();
        b.sort();
        assert_eq!(to_bytes_canonical(&a), to_bytes_canonical(&b));
    }

    #[test]
    fn test_json_pretty_and_compact_agree() {
        let pairs: Pairs = vec![Pair::new("a", vec![1])].into();
        let compact: Pairs = from_json(&to_json(&pairs).unwrap()).unwrap();
        let pretty: Pairs = from_json(&to_json_pretty(&pairs).unwrap()).unwrap();
        assert_eq!(compact, pretty);
        assert!(to_json_pretty(&pairs).unwrap().contains(&b'\n'));
    }

    #[test]
    fn test_canonical_decode_failure() {
        let pairs: Pairs = vec![Pair::new("k", vec![1, 2, 3])].into();
        let mut encoded = to_bytes_canonical(&pairs);
        encoded.pop();

        let err = from_bytes_canonical::<Pairs>(&encoded).unwrap_err();
        assert!(matches!(err, CodecError::Scale(ref m) if m.contains("canonical decode failed")));
    }

    #[test]
    fn test_canonical_decode_rejects_trailing_bytes() {
        let mut encoded = to_bytes_canonical(&7u32);
        encoded.push(0);
        assert!(from_bytes_canonical::<u32>(&encoded).is_err());
    }

    #[test]
    fn test_json_type_mismatch_is_codec_error() {
        let err = from_json::<Pairs>(br#"{"not":"a list"}"#).unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }
}
