// Path: crates/types/src/wire.rs

//! Serde field adapters for the JSON wire format.
//!
//! Existing nodes emit raw bytes as standard base64 strings and 64-bit integers
//! as decimal strings. These adapters reproduce that shape on output and accept
//! both the string and the plain-number form on input.

use serde::{Deserialize, Deserializer};

/// Raw bytes as a standard (padded) base64 string. `null` decodes as empty.
pub mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes any byte container as a base64 string.
    pub fn serialize<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        serializer.serialize_str(&STANDARD.encode(bytes.as_ref()))
    }

    /// Deserializes a base64 string (or `null`) into bytes.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Vec::new()),
            Some(s) => STANDARD
                .decode(s.as_bytes())
                .map_err(|e| de::Error::custom(format!("invalid base64: {}", e))),
        }
    }
}

/// A signed 64-bit integer as a decimal string.
pub mod i64_string {
    use super::IntRepr;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes the integer as its decimal string.
    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Deserializes from either a decimal string or a JSON number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match IntRepr::deserialize(deserializer)? {
            IntRepr::Number(n) => Ok(n),
            IntRepr::Text(s) => s
                .parse::<i64>()
                .map_err(|e| de::Error::custom(format!("invalid integer string {:?}: {}", s, e))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntRepr {
    Number(i64),
    Text(String),
}

/// Treats an explicit `null` as `T::default()`. The field itself stays required
/// unless it is also marked `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
