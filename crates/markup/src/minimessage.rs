//! Configured entry point for the tag markup codec.

use once_cell::sync::Lazy;
use text::Component;

use crate::error::MarkupError;
use crate::template::Template;
use crate::{markdown, parser, serializer};

static INSTANCE: Lazy<MiniMessage> = Lazy::new(|| MiniMessage::builder().build());

static WITH_MARKDOWN: Lazy<MiniMessage> =
    Lazy::new(|| MiniMessage::builder().markdown(true).build());

/// Builder for [`MiniMessage`].
#[derive(Clone, Debug, Default)]
pub struct MiniMessageBuilder {
    markdown: bool,
}

impl MiniMessageBuilder {
    /// Resolve markdown-lite markers before parsing.
    pub fn markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    pub fn build(self) -> MiniMessage {
        MiniMessage {
            markdown: self.markdown,
        }
    }
}

/// Parses and serializes tag markup.
///
/// # Example
///
/// ```
/// use markup::MiniMessage;
/// use text::{Component, NamedTextColor, TextDecoration};
///
/// let component = MiniMessage::with_markdown().deserialize("**<red>BOLD**").unwrap();
/// assert_eq!(
///     component,
///     Component::text("BOLD")
///         .decorate(TextDecoration::Bold)
///         .color(NamedTextColor::Red)
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MiniMessage {
    markdown: bool,
}

impl MiniMessage {
    pub fn builder() -> MiniMessageBuilder {
        MiniMessageBuilder::default()
    }

    /// Shared instance without markdown.
    pub fn instance() -> &'static MiniMessage {
        &INSTANCE
    }

    /// Shared instance with markdown.
    pub fn with_markdown() -> &'static MiniMessage {
        &WITH_MARKDOWN
    }

    pub fn markdown_enabled(&self) -> bool {
        self.markdown
    }

    /// Parse markup without templates.
    pub fn deserialize(&self, input: &str) -> Result<Component, MarkupError> {
        self.parse(input, &[])
    }

    /// Parse markup, splicing `templates` where their keys appear as tags.
    pub fn parse(&self, input: &str, templates: &[Template]) -> Result<Component, MarkupError> {
        if self.markdown {
            parser::parse(&markdown::parse(input), templates)
        } else {
            parser::parse(input, templates)
        }
    }

    /// Parse markup with string placeholders given as key/value pairs.
    pub fn parse_placeholders(
        &self,
        input: &str,
        placeholders: &[(&str, &str)],
    ) -> Result<Component, MarkupError> {
        let templates = Template::from_pairs(placeholders.iter().copied());
        self.parse(input, &templates)
    }

    pub fn serialize(&self, component: &Component) -> String {
        serializer::serialize(component)
    }

    /// Remove markdown-lite markers without producing tags.
    pub fn strip_markdown(&self, input: &str) -> String {
        markdown::strip(input)
    }
}
