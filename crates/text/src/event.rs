//! Click and hover events.

use phf::phf_map;

use crate::component::Component;
use crate::names::Named;

/// What happens when the text is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

static CLICK_ACTIONS: phf::Map<&'static str, ClickAction> = phf_map! {
    "open_url" => ClickAction::OpenUrl,
    "open_file" => ClickAction::OpenFile,
    "run_command" => ClickAction::RunCommand,
    "suggest_command" => ClickAction::SuggestCommand,
    "change_page" => ClickAction::ChangePage,
    "copy_to_clipboard" => ClickAction::CopyToClipboard,
};

impl ClickAction {
    pub const ALL: [ClickAction; 6] = [
        ClickAction::OpenUrl,
        ClickAction::OpenFile,
        ClickAction::RunCommand,
        ClickAction::SuggestCommand,
        ClickAction::ChangePage,
        ClickAction::CopyToClipboard,
    ];
}

impl Named for ClickAction {
    const TABLE: &'static str = "click action";

    fn values() -> &'static [Self] {
        &Self::ALL
    }

    fn table() -> &'static phf::Map<&'static str, Self> {
        &CLICK_ACTIONS
    }

    fn name(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }
}

/// A click action and its string payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }

    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::SuggestCommand, command)
    }

    pub fn change_page(page: u32) -> Self {
        Self::new(ClickAction::ChangePage, page.to_string())
    }

    pub fn copy_to_clipboard(text: impl Into<String>) -> Self {
        Self::new(ClickAction::CopyToClipboard, text)
    }
}

/// The kind of a [`HoverEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverAction {
    ShowText,
    ShowItem,
    ShowEntity,
}

static HOVER_ACTIONS: phf::Map<&'static str, HoverAction> = phf_map! {
    "show_text" => HoverAction::ShowText,
    "show_item" => HoverAction::ShowItem,
    "show_entity" => HoverAction::ShowEntity,
};

impl HoverAction {
    pub const ALL: [HoverAction; 3] = [
        HoverAction::ShowText,
        HoverAction::ShowItem,
        HoverAction::ShowEntity,
    ];
}

impl Named for HoverAction {
    const TABLE: &'static str = "hover action";

    fn values() -> &'static [Self] {
        &Self::ALL
    }

    fn table() -> &'static phf::Map<&'static str, Self> {
        &HOVER_ACTIONS
    }

    fn name(self) -> &'static str {
        match self {
            HoverAction::ShowText => "show_text",
            HoverAction::ShowItem => "show_item",
            HoverAction::ShowEntity => "show_entity",
        }
    }
}

/// An item shown in a tooltip.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShowItem {
    /// Item identifier, e.g. `minecraft:diamond`.
    pub item: String,
    pub count: u32,
    /// Serialized item NBT, carried opaquely.
    pub nbt: Option<String>,
}

impl ShowItem {
    pub fn new(item: impl Into<String>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
            nbt: None,
        }
    }

    pub fn with_nbt(mut self, nbt: impl Into<String>) -> Self {
        self.nbt = Some(nbt.into());
        self
    }
}

/// An entity shown in a tooltip.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShowEntity {
    /// Entity type identifier, e.g. `minecraft:pig`.
    pub kind: String,
    /// Entity UUID in its string form.
    pub id: String,
    pub name: Option<Box<Component>>,
}

impl ShowEntity {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: Component) -> Self {
        self.name = Some(Box::new(name));
        self
    }
}

/// What is displayed when the text is hovered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverEvent {
    ShowText(Box<Component>),
    ShowItem(ShowItem),
    ShowEntity(ShowEntity),
}

impl HoverEvent {
    pub fn show_text(text: impl Into<Component>) -> Self {
        HoverEvent::ShowText(Box::new(text.into()))
    }

    pub fn action(&self) -> HoverAction {
        match self {
            HoverEvent::ShowText(_) => HoverAction::ShowText,
            HoverEvent::ShowItem(_) => HoverAction::ShowItem,
            HoverEvent::ShowEntity(_) => HoverAction::ShowEntity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::assert_table_consistent;

    #[test]
    fn name_tables_are_consistent() {
        assert_table_consistent::<ClickAction>();
        assert_table_consistent::<HoverAction>();
    }

    #[test]
    fn unknown_action_reports_table() {
        let err = ClickAction::from_name("explode").unwrap_err();
        assert_eq!(err.table, "click action");
        assert_eq!(err.name, "explode");
    }

    #[test]
    fn hover_event_equality_includes_value() {
        let a = HoverEvent::show_text("a");
        let b = HoverEvent::show_text("b");
        assert_eq!(a.action(), b.action());
        assert_ne!(a, b);
        assert_eq!(a, HoverEvent::show_text("a"));
    }
}
