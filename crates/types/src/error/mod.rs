// Path: crates/types/src/error/mod.rs
//! Core error types for kvorder.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors produced while parsing the canonical `key:hex(value)|` string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairsError {
    /// A non-empty segment carried no `:` between key and value.
    #[error("Missing ':' separator in segment {segment:?}")]
    MissingSeparator {
        /// The offending segment, lossily converted to UTF-8.
        segment: String,
    },
    /// The value half of a segment was not valid hex.
    #[error("Invalid hex value in segment {segment:?}: {reason}")]
    InvalidHex {
        /// The offending segment, lossily converted to UTF-8.
        segment: String,
        /// The underlying hex decoder message.
        reason: String,
    },
}

impl ErrorCode for PairsError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingSeparator { .. } => "PAIRS_MISSING_SEPARATOR",
            Self::InvalidHex { .. } => "PAIRS_INVALID_HEX",
        }
    }
}

/// Errors from the JSON and SCALE wire codecs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The JSON input was structurally invalid (missing field, wrong type, bad encoding).
    #[error("JSON codec error: {0}")]
    Json(String),
    /// The SCALE input could not be decoded, or had trailing bytes.
    #[error("SCALE codec error: {0}")]
    Scale(String),
}

impl ErrorCode for CodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::Json(_) => "CODEC_JSON_ERROR",
            Self::Scale(_) => "CODEC_SCALE_ERROR",
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_messages() {
        let err = PairsError::MissingSeparator {
            segment: "abc".into(),
        };
        assert_eq!(err.code(), "PAIRS_MISSING_SEPARATOR");
        assert_eq!(err.to_string(), "Missing ':' separator in segment \"abc\"");

        let err = CodecError::Scale("eof".into());
        assert_eq!(err.code(), "CODEC_SCALE_ERROR");
        assert_eq!(err.to_string(), "SCALE codec error: eof");

        let err: CodecError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert_eq!(err.code(), "CODEC_JSON_ERROR");
    }
}
