//! Error types for tag markup parsing.

use text::{ColorParseError, UnknownNameError};
use text_json::JsonError;
use thiserror::Error;

/// Errors that can occur when parsing tag markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Unclosed tag (missing `>`).
    #[error("unclosed tag starting at position {0}")]
    UnclosedTag(usize),

    /// Empty tag content, `<>` or `</>`.
    #[error("empty tag at position {0}")]
    EmptyTag(usize),

    /// A tag name that is neither built in nor a template key.
    #[error("unknown tag: <{0}>")]
    UnknownTag(String),

    /// A closing tag with no open tag of the same kind.
    #[error("closing tag </{0}> has no matching open tag")]
    UnmatchedClose(String),

    /// The argument list could not be split.
    #[error("invalid arguments in tag <{0}>")]
    InvalidArguments(String),

    /// A tag that needs an argument was given none.
    #[error("tag <{0}> is missing an argument")]
    MissingArgument(String),

    /// Invalid color specification.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// Unknown decoration, click or hover action name.
    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),

    /// A structured hover payload that is not valid JSON hover contents.
    #[error("invalid hover contents: {0}")]
    Json(#[from] JsonError),
}

impl MarkupError {
    /// True when the input was well formed but named something that does
    /// not exist in one of the name tables.
    pub fn is_unknown_name(&self) -> bool {
        match self {
            MarkupError::UnknownName(_) => true,
            MarkupError::InvalidColor(ColorParseError::UnknownName(_)) => true,
            MarkupError::Json(err) => err.is_unknown_name(),
            _ => false,
        }
    }
}
