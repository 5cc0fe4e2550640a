use markup::MarkupError;
use text::{ColorParseError, UnknownNameError};
use text_json::JsonError;
use thiserror::Error;

/// Any failure raised by the codecs or the model.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),

    #[error("Color error: {0}")]
    Color(#[from] ColorParseError),

    #[error("JSON error: {0}")]
    Json(#[from] JsonError),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),
}

impl Error {
    /// True when the input named a color, decoration or action that does
    /// not exist. Everything else is malformed input.
    pub fn is_unknown_name(&self) -> bool {
        match self {
            Error::UnknownName(_) => true,
            Error::Color(err) => matches!(err, ColorParseError::UnknownName(_)),
            Error::Json(err) => err.is_unknown_name(),
            Error::Markup(err) => err.is_unknown_name(),
        }
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
