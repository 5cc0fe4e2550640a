//! Error types for the JSON codec.

use text::{ColorParseError, UnknownNameError};
use thiserror::Error;

/// Errors that can occur when decoding a component from JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value does not match any component schema.
    #[error("malformed component: {0}")]
    Malformed(String),

    /// A field required by the discriminated variant is absent.
    #[error("missing field `{field}` in {context}")]
    MissingField {
        field: &'static str,
        context: &'static str,
    },

    /// A field is present but has the wrong JSON type.
    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// A `#`-prefixed color that is not valid hex.
    #[error("invalid hex color: {0}")]
    InvalidColor(String),

    /// A color, decoration or action name not in its table.
    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),

    /// The input text is not JSON at all.
    #[error("JSON syntax error: {0}")]
    Syntax(#[from] serde_json::Error),
}

impl JsonError {
    /// True for the unknown-enum-name kind, false for every malformed-input
    /// kind.
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, JsonError::UnknownName(_))
    }
}

impl From<ColorParseError> for JsonError {
    fn from(err: ColorParseError) -> Self {
        match err {
            ColorParseError::InvalidHex(hex) => JsonError::InvalidColor(hex),
            ColorParseError::UnknownName(err) => JsonError::UnknownName(err),
        }
    }
}
