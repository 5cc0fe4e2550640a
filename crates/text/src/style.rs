//! Style type for components.
//!
//! A Style combines a color, decorations, events and an insertion string.
//! Every field may be unset, in which case the value is inherited from the
//! parent component.

use crate::color::TextColor;
use crate::decoration::{DecorationSet, Decorations, TextDecoration, TriState};
use crate::event::{ClickEvent, HoverEvent};

/// Complete style specification of a component.
///
/// The default value is the empty style, which is the identity of
/// [`Style::apply`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Text color.
    pub color: Option<TextColor>,
    /// Tri-state decorations.
    pub decorations: Decorations,
    /// Action run when the text is clicked.
    pub click_event: Option<ClickEvent>,
    /// Tooltip shown when the text is hovered.
    pub hover_event: Option<HoverEvent>,
    /// Text inserted into the chat input on shift-click.
    pub insertion: Option<String>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.decorations.is_empty()
            && self.click_event.is_none()
            && self.hover_event.is_none()
            && self.insertion.is_none()
    }

    /// Apply a child style on top of this one.
    ///
    /// Set values in `child` override values in `self`; unset decorations
    /// and absent color, events and insertion fall through.
    pub fn apply(&self, child: &Style) -> Style {
        Style {
            color: child.color.or(self.color),
            decorations: self.decorations.apply(&child.decorations),
            click_event: child
                .click_event
                .clone()
                .or_else(|| self.click_event.clone()),
            hover_event: child
                .hover_event
                .clone()
                .or_else(|| self.hover_event.clone()),
            insertion: child.insertion.clone().or_else(|| self.insertion.clone()),
        }
    }

    pub fn decoration(&self, decoration: TextDecoration) -> TriState {
        self.decorations.get(decoration)
    }

    /// Returns true only if `decoration` is explicitly on.
    pub fn has_decoration(&self, decoration: TextDecoration) -> bool {
        self.decoration(decoration) == TriState::True
    }

    /// The set of decorations explicitly on.
    pub fn enabled_decorations(&self) -> DecorationSet {
        self.decorations.enabled()
    }

    pub fn with_color(mut self, color: impl Into<TextColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_color_if_absent(mut self, color: impl Into<TextColor>) -> Self {
        if self.color.is_none() {
            self.color = Some(color.into());
        }
        self
    }

    pub fn without_color(mut self) -> Self {
        self.color = None;
        self
    }

    pub fn with_decoration(mut self, decoration: TextDecoration, state: impl Into<TriState>) -> Self {
        self.decorations = self.decorations.with(decoration, state.into());
        self
    }

    pub fn with_click_event(mut self, event: ClickEvent) -> Self {
        self.click_event = Some(event);
        self
    }

    pub fn with_hover_event(mut self, event: HoverEvent) -> Self {
        self.hover_event = Some(event);
        self
    }

    pub fn with_insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }
}

impl From<TextColor> for Style {
    fn from(color: TextColor) -> Self {
        Style::new().with_color(color)
    }
}

impl From<TextDecoration> for Style {
    fn from(decoration: TextDecoration) -> Self {
        Style::new().with_decoration(decoration, TriState::True)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedTextColor;

    #[test]
    fn empty_is_identity() {
        let style = Style::new()
            .with_color(NamedTextColor::Red)
            .with_decoration(TextDecoration::Bold, true)
            .with_insertion("hi");

        assert_eq!(Style::new().apply(&style), style);
        assert_eq!(style.apply(&Style::new()), style);
    }

    #[test]
    fn style_apply() {
        let base = Style::new()
            .with_color(NamedTextColor::Red)
            .with_decoration(TextDecoration::Bold, true)
            .with_click_event(ClickEvent::run_command("/spawn"));

        let overlay = Style::new()
            .with_color(NamedTextColor::Blue)
            .with_decoration(TextDecoration::Italic, true)
            .with_decoration(TextDecoration::Bold, false);

        let combined = base.apply(&overlay);
        assert_eq!(combined.color, Some(NamedTextColor::Blue.into()));
        assert_eq!(combined.decoration(TextDecoration::Bold), TriState::False);
        assert!(combined.has_decoration(TextDecoration::Italic));
        assert_eq!(combined.click_event, Some(ClickEvent::run_command("/spawn")));
    }

    #[test]
    fn style_is_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::from(TextDecoration::Bold).is_empty());
        assert!(!Style::new().with_insertion("").is_empty());
    }

    #[test]
    fn with_color_if_absent_keeps_existing() {
        let style = Style::new()
            .with_color(NamedTextColor::Red)
            .with_color_if_absent(NamedTextColor::Blue);
        assert_eq!(style.color, Some(NamedTextColor::Red.into()));
    }
}
