//! Main markup parser.
//!
//! Combines the lexer and tag parser to produce a component tree.

use text::{
    ClickAction, ClickEvent, Component, HoverAction, HoverEvent, Named, Style, TextColor,
};
use text_json::JsonError;

use crate::error::MarkupError;
use crate::template::{Template, TemplateValue};

use super::lexer::{Lexer, Token};
use super::tag::{FrameKind, TagContent, TagKind};

/// Parses tag markup into a component.
///
/// Text between tags becomes flat children of an empty root, each carrying
/// the full style in effect at that point. A result with a single child is
/// returned as that child.
///
/// # Examples
///
/// ```
/// use markup::parser::parse;
/// use text::{NamedTextColor, TextDecoration};
///
/// let component = parse("<red>Hello <bold>World", &[]).unwrap();
/// assert_eq!(component.children().len(), 2);
///
/// let world = &component.children()[1];
/// assert_eq!(world.style().color, Some(NamedTextColor::Red.into()));
/// assert!(world.style().has_decoration(TextDecoration::Bold));
/// ```
pub fn parse(input: &str, templates: &[Template]) -> Result<Component, MarkupError> {
    // Collect tokens first
    let tokens: Result<Vec<_>, _> = Lexer::new(input).collect();
    let tokens = tokens?;

    // Then process them
    let mut parser = Parser::new(templates);
    for token in tokens {
        parser.process_token(token)?;
    }

    Ok(parser.finish())
}

/// The main parser state.
struct Parser<'t> {
    templates: &'t [Template],
    /// Open frames, oldest first.
    frames: Vec<Frame>,
    /// Text not yet emitted.
    buffer: String,
    /// Emitted children.
    children: Vec<Component>,
}

/// A style delta opened by a tag.
#[derive(Clone, Debug)]
struct Frame {
    kind: FrameKind,
    style: Style,
}

impl<'t> Parser<'t> {
    fn new(templates: &'t [Template]) -> Self {
        Self {
            templates,
            frames: Vec::new(),
            buffer: String::new(),
            children: Vec::new(),
        }
    }

    /// Process a single token.
    fn process_token(&mut self, token: Token<'_>) -> Result<(), MarkupError> {
        match token {
            Token::Text(text) => {
                self.buffer.push_str(text);
            }
            Token::Escaped(c) => {
                self.buffer.push(c);
            }
            Token::OpenTag(content) => {
                self.process_open_tag(content)?;
            }
            Token::CloseTag(content) => {
                self.process_close_tag(content)?;
            }
        }
        Ok(())
    }

    /// Process an opening tag.
    fn process_open_tag(&mut self, content: &str) -> Result<(), MarkupError> {
        let tag = TagContent::parse(content)?;

        if let Some(template) = self.templates.iter().find(|t| t.key() == tag.name) {
            self.splice_template(template);
            return Ok(());
        }

        let kind = TagKind::lookup(&tag.key()).ok_or_else(|| {
            log::debug!("rejecting unknown tag <{}>", content);
            MarkupError::UnknownTag(tag.name.clone())
        })?;

        let style = match kind {
            TagKind::Reset => {
                self.flush();
                self.frames.clear();
                return Ok(());
            }
            TagKind::Keybind => {
                let keybind = Component::keybind(tag.rest(0)?);
                self.insert(keybind);
                return Ok(());
            }
            TagKind::Translatable => {
                let key = tag.arg(0)?;
                let args = tag.args[1..]
                    .iter()
                    .map(|arg| parse(arg, self.templates))
                    .collect::<Result<Vec<_>, _>>()?;
                self.insert(Component::translatable(key, args));
                return Ok(());
            }
            TagKind::NamedColor(color) => Style::new().with_color(color),
            TagKind::HexColor => Style::new().with_color(TextColor::parse(&tag.name)?),
            TagKind::Color => Style::new().with_color(TextColor::parse(tag.arg(0)?)?),
            TagKind::Decoration(decoration) => Style::new().with_decoration(decoration, true),
            TagKind::Hover => Style::new().with_hover_event(self.hover_event(&tag)?),
            TagKind::Click => {
                let action = ClickAction::from_name(&tag.arg(0)?.to_ascii_lowercase())?;
                Style::new().with_click_event(ClickEvent::new(action, tag.rest(1)?))
            }
            TagKind::Insertion => Style::new().with_insertion(tag.rest(0)?),
        };

        if let Some(frame_kind) = kind.frame_kind() {
            self.flush();
            self.frames.push(Frame {
                kind: frame_kind,
                style,
            });
        }

        Ok(())
    }

    fn hover_event(&self, tag: &TagContent) -> Result<HoverEvent, MarkupError> {
        let action = HoverAction::from_name(&tag.arg(0)?.to_ascii_lowercase())?;
        let value = tag.rest(1)?;

        match action {
            HoverAction::ShowText => Ok(HoverEvent::show_text(parse(&value, self.templates)?)),
            HoverAction::ShowItem | HoverAction::ShowEntity => {
                let contents: serde_json::Value =
                    serde_json::from_str(&value).map_err(JsonError::from)?;
                Ok(text_json::decode_hover_contents(action, &contents)?)
            }
        }
    }

    /// Process a closing tag.
    fn process_close_tag(&mut self, content: &str) -> Result<(), MarkupError> {
        let tag = TagContent::parse(content)?;

        let kind = TagKind::lookup(&tag.key())
            .ok_or_else(|| MarkupError::UnknownTag(tag.name.clone()))?;
        let frame_kind = kind
            .frame_kind()
            .ok_or_else(|| MarkupError::UnmatchedClose(tag.name.clone()))?;

        // `</red>` and `</#hex>` only close that color; `</color>` closes any.
        let color = match kind {
            TagKind::NamedColor(color) => Some(TextColor::from(color)),
            TagKind::HexColor => Some(TextColor::parse(&tag.name)?),
            TagKind::Color if !tag.args.is_empty() => Some(TextColor::parse(&tag.rest(0)?)?),
            _ => None,
        };

        let index = self
            .frames
            .iter()
            .rposition(|frame| {
                frame.kind == frame_kind
                    && color.is_none_or(|color| frame.style.color == Some(color))
            })
            .ok_or_else(|| MarkupError::UnmatchedClose(tag.name.clone()))?;

        self.flush();
        self.frames.remove(index);
        Ok(())
    }

    fn splice_template(&mut self, template: &Template) {
        log::trace!("splicing template <{}>", template.key());

        match template.value() {
            TemplateValue::Text(text) => self.buffer.push_str(text),
            TemplateValue::Component(component) => {
                self.flush();
                let style = self.effective_style().apply(component.style());
                self.children.push(component.clone().with_style(style));
            }
        }
    }

    /// Emit a standalone component under the current style.
    fn insert(&mut self, component: Component) {
        self.flush();
        let style = self.effective_style().apply(component.style());
        self.children.push(component.with_style(style));
    }

    /// The ordered fold of every open frame.
    fn effective_style(&self) -> Style {
        self.frames
            .iter()
            .fold(Style::new(), |style, frame| style.apply(&frame.style))
    }

    /// Emit buffered text as a child.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        self.children
            .push(Component::text(text).with_style(self.effective_style()));
    }

    fn finish(mut self) -> Component {
        self.flush();

        match self.children.len() {
            0 => Component::empty(),
            1 => self.children.remove(0),
            _ => Component::empty().with_children(self.children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text::{NamedTextColor, TextDecoration};

    #[test]
    fn parse_plain_text() {
        let parsed = parse("Hello World", &[]).unwrap();
        assert_eq!(parsed, Component::text("Hello World"));
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse("", &[]).unwrap(), Component::empty());
    }

    #[test]
    fn parse_single_style() {
        let parsed = parse("<bold>Hello</bold>", &[]).unwrap();
        assert_eq!(parsed, Component::text("Hello").decorate(TextDecoration::Bold));
    }

    #[test]
    fn parse_nested_styles() {
        let parsed = parse("<bold><red>text</red>more</bold>", &[]).unwrap();
        assert_eq!(parsed.children().len(), 2);
        assert_eq!(
            parsed.children()[0].style().color,
            Some(NamedTextColor::Red.into())
        );
        assert_eq!(parsed.children()[1].style().color, None);
        assert!(parsed.children()[1].style().has_decoration(TextDecoration::Bold));
    }

    #[test]
    fn close_removes_most_recent_of_kind() {
        let parsed = parse("<red><bold>a</red>b</bold>", &[]).unwrap();
        let b = &parsed.children()[1];
        assert_eq!(b.style().color, None);
        assert!(b.style().has_decoration(TextDecoration::Bold));
    }

    #[test]
    fn inner_color_wins_then_outer_returns() {
        let parsed = parse("<red>a<blue>b</blue>c", &[]).unwrap();
        let colors: Vec<_> = parsed
            .children()
            .iter()
            .map(|child| child.style().color)
            .collect();
        assert_eq!(
            colors,
            vec![
                Some(NamedTextColor::Red.into()),
                Some(NamedTextColor::Blue.into()),
                Some(NamedTextColor::Red.into()),
            ]
        );
    }

    #[test]
    fn reset_closes_everything() {
        let parsed = parse("<red><bold>a<reset>b", &[]).unwrap();
        assert_eq!(parsed.children()[1], Component::text("b"));
    }

    #[test]
    fn parse_unmatched_close() {
        let result = parse("a</bold>", &[]);
        assert!(matches!(result, Err(MarkupError::UnmatchedClose(name)) if name == "bold"));
    }

    #[test]
    fn parse_unknown_tag() {
        let result = parse("<blink>a", &[]);
        assert!(matches!(result, Err(MarkupError::UnknownTag(name)) if name == "blink"));
    }

    #[test]
    fn parse_unicode() {
        let parsed = parse("<bold>日本語</bold>", &[]).unwrap();
        assert_eq!(parsed.to_plain_string(), "日本語");
    }
}
