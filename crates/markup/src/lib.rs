//! Tag markup codec for component text.
//!
//! This crate converts between [`text::Component`] trees and a
//! human-writable markup with XML-like tags, and resolves a small markdown
//! dialect down to the same markup.
//!
//! # Overview
//!
//! - `<red>text</red>` - palette color; `<#ff8800>` or `<color:#ff8800>` for hex
//! - `<bold>`, `<italic>`, `<underlined>`, `<strikethrough>`, `<obfuscated>`
//! - `<click:run_command:"/spawn">` - click event
//! - `<hover:show_text:"<red>tip">` - hover event
//! - `<insertion:"text">` - shift-click insertion
//! - `<key:key.jump>`, `<lang:block.minecraft.stone>` - keybind and translatable
//! - `<reset>` - close everything
//! - `\<` - escaped bracket (literal `<`)
//!
//! Closing tags remove the most recent matching open tag, so
//! `<red><bold>a</red>b</bold>` is valid. `</color>` closes any color;
//! `</red>` only a red one.
//!
//! # Usage
//!
//! ```
//! use markup::{MiniMessage, Template};
//! use text::NamedTextColor;
//!
//! let component = MiniMessage::instance()
//!     .parse("<red>Hello <name>", &[Template::string("name", "Steve")])
//!     .unwrap();
//! assert_eq!(component.to_plain_string(), "Hello Steve");
//! assert_eq!(component.style().color, Some(NamedTextColor::Red.into()));
//!
//! assert_eq!(markup::serialize(&component), "<red>Hello Steve</red>");
//! ```

pub mod error;
pub mod markdown;
mod minimessage;
pub mod parser;
mod serializer;
mod template;

// Re-export main types at crate root
pub use error::MarkupError;
pub use minimessage::{MiniMessage, MiniMessageBuilder};
pub use serializer::serialize;
pub use template::{Template, TemplateValue};

use text::Component;

/// Parse markup with the shared instance.
pub fn deserialize(input: &str) -> Result<Component, MarkupError> {
    MiniMessage::instance().deserialize(input)
}

/// Parse markup with templates with the shared instance.
pub fn parse(input: &str, templates: &[Template]) -> Result<Component, MarkupError> {
    MiniMessage::instance().parse(input, templates)
}
