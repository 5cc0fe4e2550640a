//! Text decorations and their tri-state values.

use bitflags::bitflags;
use phf::phf_map;

use crate::names::Named;

/// A text decoration.
///
/// Declaration order is the legacy format code order (`k` through `o`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

static DECORATIONS: phf::Map<&'static str, TextDecoration> = phf_map! {
    "obfuscated" => TextDecoration::Obfuscated,
    "bold" => TextDecoration::Bold,
    "strikethrough" => TextDecoration::Strikethrough,
    "underlined" => TextDecoration::Underlined,
    "italic" => TextDecoration::Italic,
};

impl TextDecoration {
    pub const ALL: [TextDecoration; 5] = [
        TextDecoration::Obfuscated,
        TextDecoration::Bold,
        TextDecoration::Strikethrough,
        TextDecoration::Underlined,
        TextDecoration::Italic,
    ];

    /// The single bit representing this decoration in a [`DecorationSet`].
    pub const fn flag(self) -> DecorationSet {
        match self {
            TextDecoration::Obfuscated => DecorationSet::OBFUSCATED,
            TextDecoration::Bold => DecorationSet::BOLD,
            TextDecoration::Strikethrough => DecorationSet::STRIKETHROUGH,
            TextDecoration::Underlined => DecorationSet::UNDERLINED,
            TextDecoration::Italic => DecorationSet::ITALIC,
        }
    }
}

impl Named for TextDecoration {
    const TABLE: &'static str = "text decoration";

    fn values() -> &'static [Self] {
        &Self::ALL
    }

    fn table() -> &'static phf::Map<&'static str, Self> {
        &DECORATIONS
    }

    fn name(self) -> &'static str {
        match self {
            TextDecoration::Obfuscated => "obfuscated",
            TextDecoration::Bold => "bold",
            TextDecoration::Strikethrough => "strikethrough",
            TextDecoration::Underlined => "underlined",
            TextDecoration::Italic => "italic",
        }
    }
}

/// The state of a decoration on a style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriState {
    /// Not set here; inherited from the parent.
    #[default]
    NotSet,
    /// Explicitly off.
    False,
    /// Explicitly on.
    True,
}

impl TriState {
    /// `Some(bool)` for explicit states, `None` for [`TriState::NotSet`].
    pub fn to_bool(self) -> Option<bool> {
        match self {
            TriState::NotSet => None,
            TriState::False => Some(false),
            TriState::True => Some(true),
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::True } else { TriState::False }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TriState::NotSet, TriState::from)
    }
}

bitflags! {
    /// A set of decorations.
    ///
    /// ```
    /// use text::{DecorationSet, TextDecoration};
    ///
    /// let set = TextDecoration::Bold.flag() | TextDecoration::Italic.flag();
    /// assert!(set.contains(DecorationSet::BOLD));
    /// assert!(!set.contains(DecorationSet::UNDERLINED));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DecorationSet: u8 {
        const OBFUSCATED    = 0b0000_0001;
        const BOLD          = 0b0000_0010;
        const STRIKETHROUGH = 0b0000_0100;
        const UNDERLINED    = 0b0000_1000;
        const ITALIC        = 0b0001_0000;
    }
}

impl DecorationSet {
    /// Iterate over the decorations in this set, in declaration order.
    pub fn decorations(self) -> impl Iterator<Item = TextDecoration> {
        TextDecoration::ALL
            .into_iter()
            .filter(move |decoration| self.contains(decoration.flag()))
    }
}

/// Tri-state decoration values for all five decorations.
///
/// Stored as two disjoint sets: decorations explicitly on and decorations
/// explicitly off. Anything in neither set is [`TriState::NotSet`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decorations {
    on: DecorationSet,
    off: DecorationSet,
}

impl Decorations {
    pub const fn new() -> Self {
        Self {
            on: DecorationSet::empty(),
            off: DecorationSet::empty(),
        }
    }

    pub fn get(&self, decoration: TextDecoration) -> TriState {
        let flag = decoration.flag();
        if self.on.contains(flag) {
            TriState::True
        } else if self.off.contains(flag) {
            TriState::False
        } else {
            TriState::NotSet
        }
    }

    /// Return a copy with `decoration` set to `state`.
    pub fn with(mut self, decoration: TextDecoration, state: TriState) -> Self {
        let flag = decoration.flag();
        self.on.remove(flag);
        self.off.remove(flag);
        match state {
            TriState::True => self.on.insert(flag),
            TriState::False => self.off.insert(flag),
            TriState::NotSet => {}
        }
        self
    }

    /// Decorations explicitly on.
    pub fn enabled(&self) -> DecorationSet {
        self.on
    }

    /// Decorations explicitly off.
    pub fn disabled(&self) -> DecorationSet {
        self.off
    }

    /// Returns true if every decoration is unset.
    pub fn is_empty(&self) -> bool {
        self.on.is_empty() && self.off.is_empty()
    }

    /// Merge `child` on top of `self`: explicit values in `child` win.
    pub fn apply(&self, child: &Decorations) -> Decorations {
        let explicit = child.on | child.off;
        Decorations {
            on: child.on | (self.on - explicit),
            off: child.off | (self.off - explicit),
        }
    }
}
