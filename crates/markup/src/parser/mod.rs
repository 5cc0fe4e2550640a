//! Parser for tag markup.
//!
//! This module contains the lexer, tag parser, and main markup parser.

mod lexer;
mod markup;
mod tag;

pub use lexer::{Lexer, Token};
pub use markup::parse;
pub use tag::{FrameKind, TagContent, TagKind};

pub(crate) use tag::{CLICK, COLOR, HOVER, INSERTION, KEYBIND, TRANSLATABLE};
