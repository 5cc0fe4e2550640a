//! Error types for the component model.

use thiserror::Error;

/// A string did not match any entry of a name table.
///
/// Raised by every enumerated lookup (colors, decorations, click and hover
/// actions). `table` names the table that was searched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {table} name: {name:?}")]
pub struct UnknownNameError {
    /// Which table was searched (e.g. `"color"`, `"click action"`).
    pub table: &'static str,
    /// The offending input.
    pub name: String,
}

impl UnknownNameError {
    pub fn new(table: &'static str, name: impl Into<String>) -> Self {
        Self {
            table,
            name: name.into(),
        }
    }
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Unknown color name.
    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),
}
