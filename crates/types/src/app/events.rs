// Path: crates/types/src/app/events.rs

//! Events and the default-event attribute index.
//!
//! A block result carries a list of [`Event`]s. One of them, identified by
//! [`DEFAULT_EVENT`], aggregates the "origin" tags; the rest are custom groups.
//! Uniqueness of the default event is not enforced: merging appends to every
//! default-typed event, while lookups stop at the first.

use crate::kv::{Pair, Pairs};
use crate::wire;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The reserved type of the default event.
pub const DEFAULT_EVENT: &str = "origin-tags";

/// A named group of attribute pairs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
pub struct Event {
    /// The event type. [`DEFAULT_EVENT`] marks the default group.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// The attributes, in insertion order.
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub attributes: Pairs,
}

impl Event {
    /// Creates an event of the given type.
    pub fn new(kind: impl Into<String>, attributes: impl Into<Pairs>) -> Self {
        Self {
            kind: kind.into(),
            attributes: attributes.into(),
        }
    }

    /// Creates an empty default event.
    pub fn default_event() -> Self {
        Self::new(DEFAULT_EVENT, Pairs::new())
    }

    /// Whether this is a default-typed event.
    pub fn is_default(&self) -> bool {
        self.kind == DEFAULT_EVENT
    }
}

/// Returns the first attribute whose key equals `key`, searching only
/// default-typed events, in order.
pub fn find_attribute<'a>(events: &'a [Event], key: impl AsRef<[u8]>) -> Option<&'a Pair> {
    let key = key.as_ref();
    events
        .iter()
        .filter(|event| event.is_default())
        .flat_map(|event| event.attributes.iter())
        .find(|pair| pair.key() == key)
}

/// Appends `pairs`, in order, to every default-typed event.
///
/// An empty list first gains a single empty default event. A non-empty list
/// without a default event is returned unchanged. Takes the list by value and
/// hands back the updated one.
pub fn merge_into_default<I>(mut events: Vec<Event>, pairs: I) -> Vec<Event>
where
    I: IntoIterator<Item = Pair>,
{
    if events.is_empty() {
        events.push(Event::default_event());
    }
    let pairs: Vec<Pair> = pairs.into_iter().collect();
    for event in events.iter_mut().filter(|event| event.is_default()) {
        event.attributes.extend(pairs.iter().cloned());
    }
    events
}

/// Returns a copy of the first default event's attributes, unsorted.
/// Empty when no default event exists.
pub fn default_attributes(events: &[Event]) -> Pairs {
    events
        .iter()
        .find(|event| event.is_default())
        .map(|event| event.attributes.clone())
        .unwrap_or_default()
}

/// Returns a copy of every event's attributes, concatenated in event order.
/// No deduplication, no sorting.
pub fn all_attributes(events: &[Event]) -> Pairs {
    events
        .iter()
        .flat_map(|event| event.attributes.iter().cloned())
        .collect()
}
