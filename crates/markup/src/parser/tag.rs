//! Tag content parser for tag markup.
//!
//! Parses the content inside `<...>` tags into a name and arguments, and
//! maps names onto the built-in tag vocabulary.

use std::collections::HashMap;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_till,
    character::complete::{char, one_of},
    combinator::{all_consuming, map},
    multi::separated_list1,
};
use once_cell::sync::Lazy;
use text::{Named, NamedTextColor, TextDecoration};

use crate::error::MarkupError;

/// The name and arguments of a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagContent {
    /// Tag name as written.
    pub name: String,
    /// Arguments, unquoted and unescaped.
    pub args: Vec<String>,
}

impl TagContent {
    /// Parse tag content (the text inside `<...>`).
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::parser::TagContent;
    ///
    /// let tag = TagContent::parse(r#"click:run_command:"/tell a:b""#).unwrap();
    /// assert_eq!(tag.name, "click");
    /// assert_eq!(tag.args, vec!["run_command", "/tell a:b"]);
    /// ```
    pub fn parse(content: &str) -> Result<Self, MarkupError> {
        let (_, parts) = all_consuming(arguments)(content)
            .map_err(|_| MarkupError::InvalidArguments(content.to_string()))?;

        let mut parts = parts.into_iter();
        let name = parts.next().unwrap_or_default();
        Ok(Self {
            name,
            args: parts.collect(),
        })
    }

    /// Lowercased name used for vocabulary lookups.
    pub fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    /// The argument at `index`.
    pub fn arg(&self, index: usize) -> Result<&str, MarkupError> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| MarkupError::MissingArgument(self.name.clone()))
    }

    /// Arguments from `index` on, re-joined with `:`. Values such as URLs
    /// may be written unquoted and still contain colons.
    pub fn rest(&self, index: usize) -> Result<String, MarkupError> {
        if index >= self.args.len() {
            return Err(MarkupError::MissingArgument(self.name.clone()));
        }
        Ok(self.args[index..].join(":"))
    }
}

fn arguments(input: &str) -> IResult<&str, Vec<String>> {
    separated_list1(char(':'), alt((quoted_arg, unquoted_arg)))(input)
}

fn unquoted_arg(input: &str) -> IResult<&str, String> {
    map(take_till(|c: char| c == ':'), String::from)(input)
}

/// A `"` or `'` delimited argument; backslash escapes the next character.
fn quoted_arg(input: &str) -> IResult<&str, String> {
    let (body, quote) = one_of::<_, _, nom::error::Error<&str>>("\"'")(input)?;

    let mut value = String::new();
    let mut chars = body.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            c if c == quote => return Ok((&body[index + 1..], value)),
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => break,
            },
            c => value.push(c),
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// What a tag does, looked up by its lowercased name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    /// A palette name: `<red>`.
    NamedColor(NamedTextColor),
    /// `<#rrggbb>`.
    HexColor,
    /// `<color:...>`.
    Color,
    Decoration(TextDecoration),
    Hover,
    Click,
    Insertion,
    Keybind,
    Translatable,
    Reset,
}

/// The style attribute a frame-opening tag controls. Closing tags remove
/// the most recent frame of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Color,
    Decoration(TextDecoration),
    Hover,
    Click,
    Insertion,
}

pub const COLOR: &str = "color";
pub const HOVER: &str = "hover";
pub const CLICK: &str = "click";
pub const INSERTION: &str = "insertion";
pub const KEYBIND: &str = "key";
pub const TRANSLATABLE: &str = "lang";
pub const RESET: &str = "reset";

static TAG_KINDS: Lazy<HashMap<&'static str, TagKind>> = Lazy::new(|| {
    let mut kinds = HashMap::new();

    for color in NamedTextColor::values() {
        kinds.insert(color.name(), TagKind::NamedColor(*color));
    }
    for name in [COLOR, "colour", "c"] {
        kinds.insert(name, TagKind::Color);
    }

    for decoration in TextDecoration::values() {
        kinds.insert(decoration.name(), TagKind::Decoration(*decoration));
    }
    let aliases = [
        ("b", TextDecoration::Bold),
        ("i", TextDecoration::Italic),
        ("em", TextDecoration::Italic),
        ("u", TextDecoration::Underlined),
        ("st", TextDecoration::Strikethrough),
        ("obf", TextDecoration::Obfuscated),
    ];
    for (alias, decoration) in aliases {
        kinds.insert(alias, TagKind::Decoration(decoration));
    }

    kinds.insert(HOVER, TagKind::Hover);
    kinds.insert(CLICK, TagKind::Click);
    kinds.insert(INSERTION, TagKind::Insertion);
    kinds.insert("insert", TagKind::Insertion);
    kinds.insert(KEYBIND, TagKind::Keybind);
    kinds.insert("keybind", TagKind::Keybind);
    kinds.insert(TRANSLATABLE, TagKind::Translatable);
    kinds.insert("translate", TagKind::Translatable);
    kinds.insert("tr", TagKind::Translatable);
    kinds.insert(RESET, TagKind::Reset);

    kinds
});

impl TagKind {
    /// Look up a lowercased tag name.
    pub fn lookup(key: &str) -> Option<TagKind> {
        if key.starts_with('#') {
            return Some(TagKind::HexColor);
        }
        TAG_KINDS.get(key).copied()
    }

    /// The frame this tag opens, if it opens one.
    pub fn frame_kind(self) -> Option<FrameKind> {
        match self {
            TagKind::NamedColor(_) | TagKind::HexColor | TagKind::Color => Some(FrameKind::Color),
            TagKind::Decoration(decoration) => Some(FrameKind::Decoration(decoration)),
            TagKind::Hover => Some(FrameKind::Hover),
            TagKind::Click => Some(FrameKind::Click),
            TagKind::Insertion => Some(FrameKind::Insertion),
            TagKind::Keybind | TagKind::Translatable | TagKind::Reset => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_name() {
        let tag = TagContent::parse("bold").unwrap();
        assert_eq!(tag.name, "bold");
        assert!(tag.args.is_empty());
    }

    #[test]
    fn parse_unquoted_args() {
        let tag = TagContent::parse("click:open_url:https://example.com").unwrap();
        assert_eq!(tag.args, vec!["open_url", "https", "//example.com"]);
        assert_eq!(tag.rest(1).unwrap(), "https://example.com");
    }

    #[test]
    fn parse_quoted_args() {
        let tag = TagContent::parse(r#"hover:show_text:'it\'s <red>red'"#).unwrap();
        assert_eq!(tag.args, vec!["show_text", "it's <red>red"]);
    }

    #[test]
    fn parse_empty_argument() {
        let tag = TagContent::parse("insertion:").unwrap();
        assert_eq!(tag.args, vec![""]);
    }

    #[test]
    fn trailing_text_after_quote_is_invalid() {
        let result = TagContent::parse(r#"insertion:"a"b"#);
        assert!(matches!(result, Err(MarkupError::InvalidArguments(_))));
    }

    #[test]
    fn missing_argument() {
        let tag = TagContent::parse("click:run_command").unwrap();
        assert_eq!(tag.arg(0).unwrap(), "run_command");
        assert!(matches!(tag.arg(1), Err(MarkupError::MissingArgument(name)) if name == "click"));
    }

    #[test]
    fn vocabulary_lookup() {
        assert_eq!(
            TagKind::lookup("dark_red"),
            Some(TagKind::NamedColor(NamedTextColor::DarkRed))
        );
        assert_eq!(TagKind::lookup("#ff00ff"), Some(TagKind::HexColor));
        assert_eq!(TagKind::lookup("colour"), Some(TagKind::Color));
        assert_eq!(
            TagKind::lookup("em"),
            Some(TagKind::Decoration(TextDecoration::Italic))
        );
        assert_eq!(TagKind::lookup("tr"), Some(TagKind::Translatable));
        assert_eq!(TagKind::lookup("blink"), None);
    }

    #[test]
    fn only_style_tags_open_frames() {
        assert_eq!(TagKind::Hover.frame_kind(), Some(FrameKind::Hover));
        assert_eq!(TagKind::HexColor.frame_kind(), Some(FrameKind::Color));
        assert_eq!(TagKind::Keybind.frame_kind(), None);
        assert_eq!(TagKind::Reset.frame_kind(), None);
    }
}
