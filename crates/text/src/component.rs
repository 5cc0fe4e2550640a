//! The component tree.
//!
//! A [`Component`] is an immutable node: a [`Style`], a [`Content`] payload
//! and an ordered list of children. Style is inherited from ancestors; the
//! effective style of a node is the fold of [`Style::apply`] from the root
//! down to it.

use std::fmt;

use crate::color::TextColor;
use crate::decoration::{TextDecoration, TriState};
use crate::event::{ClickEvent, HoverEvent};
use crate::style::Style;

/// Where an NBT component reads its data from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NbtSource {
    /// Block coordinates, e.g. `~ ~1 ~`.
    Block(String),
    /// Entity selector, e.g. `@p`.
    Entity(String),
    /// Command storage identifier.
    Storage(String),
}

/// The payload of a component.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Content {
    /// Literal text.
    Text(String),
    /// A translation key with ordered arguments.
    Translatable { key: String, args: Vec<Component> },
    /// A keybind identifier, e.g. `key.jump`.
    Keybind(String),
    /// A scoreboard value.
    Score {
        name: String,
        objective: String,
        value: Option<String>,
    },
    /// An entity selector.
    Selector(String),
    /// A path into block, entity or storage NBT.
    Nbt {
        path: String,
        interpret: bool,
        source: NbtSource,
    },
}

impl Content {
    /// A plain-text rendering of this payload without children.
    ///
    /// Content that cannot be resolved without a game (translations,
    /// keybinds, selectors) is rendered as its key.
    pub fn plain(&self) -> &str {
        match self {
            Content::Text(text) => text,
            Content::Translatable { key, .. } => key,
            Content::Keybind(keybind) => keybind,
            Content::Score { value, .. } => value.as_deref().unwrap_or(""),
            Content::Selector(pattern) => pattern,
            Content::Nbt { .. } => "",
        }
    }
}

/// An immutable styled text node.
///
/// # Examples
///
/// ```
/// use text::{Component, NamedTextColor, TextDecoration};
///
/// let message = Component::text("Hello ")
///     .color(NamedTextColor::Yellow)
///     .append(Component::text("world").decorate(TextDecoration::Bold));
///
/// assert_eq!(message.to_plain_string(), "Hello world");
/// assert_eq!(message.children().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Component {
    content: Content,
    style: Style,
    children: Vec<Component>,
}

impl Component {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()))
    }

    /// An empty text component.
    pub fn empty() -> Self {
        Self::text("")
    }

    pub fn translatable(key: impl Into<String>, args: Vec<Component>) -> Self {
        Self::new(Content::Translatable {
            key: key.into(),
            args,
        })
    }

    pub fn keybind(keybind: impl Into<String>) -> Self {
        Self::new(Content::Keybind(keybind.into()))
    }

    pub fn score(name: impl Into<String>, objective: impl Into<String>) -> Self {
        Self::new(Content::Score {
            name: name.into(),
            objective: objective.into(),
            value: None,
        })
    }

    pub fn selector(pattern: impl Into<String>) -> Self {
        Self::new(Content::Selector(pattern.into()))
    }

    pub fn nbt(path: impl Into<String>, interpret: bool, source: NbtSource) -> Self {
        Self::new(Content::Nbt {
            path: path.into(),
            interpret,
            source,
        })
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Returns true for an empty text node without style or children.
    pub fn is_empty(&self) -> bool {
        matches!(&self.content, Content::Text(text) if text.is_empty())
            && self.style.is_empty()
            && self.children.is_empty()
    }

    /// Replace the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the content, keeping style and children.
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children = children;
        self
    }

    /// Append a child.
    pub fn append(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn color(mut self, color: impl Into<TextColor>) -> Self {
        self.style = self.style.with_color(color);
        self
    }

    /// Set `decoration` to [`TriState::True`].
    pub fn decorate(self, decoration: TextDecoration) -> Self {
        self.decoration(decoration, TriState::True)
    }

    pub fn decoration(mut self, decoration: TextDecoration, state: impl Into<TriState>) -> Self {
        self.style = self.style.with_decoration(decoration, state);
        self
    }

    pub fn click_event(mut self, event: ClickEvent) -> Self {
        self.style = self.style.with_click_event(event);
        self
    }

    pub fn hover_event(mut self, event: HoverEvent) -> Self {
        self.style = self.style.with_hover_event(event);
        self
    }

    pub fn insertion(mut self, insertion: impl Into<String>) -> Self {
        self.style = self.style.with_insertion(insertion);
        self
    }

    /// Every node in pre-order (parent before its descendants) paired with
    /// its effective style.
    pub fn flatten(&self) -> Vec<(&Component, Style)> {
        let mut nodes = Vec::new();
        self.flatten_into(&Style::default(), &mut nodes);
        nodes
    }

    fn flatten_into<'a>(&'a self, parent: &Style, nodes: &mut Vec<(&'a Component, Style)>) {
        let effective = parent.apply(&self.style);
        nodes.push((self, effective.clone()));
        for child in &self.children {
            child.flatten_into(&effective, nodes);
        }
    }

    /// The concatenated plain text of the whole tree.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        out.push_str(self.content.plain());
        for child in &self.children {
            child.write_plain(out);
        }
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::text(text)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}
