// Path: crates/types/tests/wire_compat.rs

//! Decodes JSON produced by existing nodes and checks that the canonical
//! forms derived from it are stable.

use kvorder_types::app::{
    all_attributes, default_attributes, find_attribute, merge_into_default, CommitId, Event,
    ValidatorUpdates, DEFAULT_EVENT,
};
use kvorder_types::codec;
use kvorder_types::error::{CodecError, ErrorCode};
use kvorder_types::kv::{Pair, Pairs};

const COMMIT_ID_JSON: &str = r#"{
  "version": "42",
  "hash": "3q2+7w==",
  "sharding_hash": [
    {"key": "c2hhcmQtYg==", "value": "Ag=="},
    {"key": "c2hhcmQtYQ==", "value": "AQ=="}
  ]
}"#;

#[test]
fn commit_id_from_node_json() {
    let mut id = CommitId::from_json(COMMIT_ID_JSON.as_bytes()).unwrap();
    assert_eq!(id.version, 42);
    assert_eq!(id.hash, vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(id.sharding_hash.len(), 2);

    let digest_before = id.sharding_digest();
    assert_eq!(id.canonical_sharding_string(), "shard-a:01|shard-b:02|");
    assert_eq!(id.sharding_digest(), digest_before);
}

#[test]
fn commit_id_missing_field_reports_code() {
    let err = CommitId::from_json(br#"{"version":"1","hash":""}"#).unwrap_err();
    assert!(matches!(err, CodecError::Json(ref m) if m.contains("sharding_hash")));
    assert_eq!(err.code(), "CODEC_JSON_ERROR");
}

#[test]
fn validator_updates_from_json_sort_by_key() {
    let json = r#"[
        {"pub_key": {"type": "ed25519", "data": "Ag=="}, "power": "1"},
        {"pub_key": {"type": "ed25519", "data": "AQ=="}, "power": "5"},
        {"pub_key": {"type": "ed25519", "data": "AQ=="}, "power": 9}
    ]"#;
    let mut updates: ValidatorUpdates = codec::from_json(json.as_bytes()).unwrap();
    updates.sort();
    let keys: Vec<Vec<u8>> = updates.iter().map(|u| u.pub_key.data.clone()).collect();
    assert_eq!(keys, vec![vec![0x01], vec![0x01], vec![0x02]]);
}

#[test]
fn event_index_over_decoded_events() {
    let json = r#"[
        {"type": "transfer", "attributes": [{"key": "YQ==", "value": "eA=="}]},
        {"type": "origin-tags", "attributes": [{"key": "YQ==", "value": "MQ=="}]}
    ]"#;
    let events: Vec<Event> = codec::from_json(json.as_bytes()).unwrap();
    assert_eq!(find_attribute(&events, "a").map(Pair::value), Some(&b"1"[..]));

    let events = merge_into_default(events, [Pair::new("b", "2")]);
    let mut tags = default_attributes(&events);
    assert_eq!(tags.to_canonical_string(), "a:31|b:32|");
    assert_eq!(all_attributes(&events).len(), 3);
    assert_eq!(events.iter().filter(|e| e.kind == DEFAULT_EVENT).count(), 1);
}

#[test]
fn canonical_string_is_byte_stable() {
    let mut pairs: Pairs = vec![
        Pair::new("height", vec![0x00, 0x10]),
        Pair::new("app", vec![0xff]),
        Pair::new("height", vec![0x00, 0x01]),
    ]
    .into();
    assert_eq!(pairs.to_canonical_string(), "app:ff|height:0001|height:0010|");

    let scale = codec::to_bytes_canonical(&pairs);
    let back: Pairs = codec::from_bytes_canonical(&scale).unwrap();
    assert_eq!(back, pairs);
}
