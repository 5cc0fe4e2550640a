//! Immutable styled component text.
//!
//! This crate provides the value model shared by every codec in the
//! workspace: a tree of [`Component`]s, each carrying a [`Style`] and a
//! [`Content`] payload.
//!
//! # Overview
//!
//! - [`TextColor`] - a palette color ([`NamedTextColor`]) or arbitrary RGB
//! - [`TextDecoration`] / [`TriState`] - bold, italic, ... each on, off or unset
//! - [`ClickEvent`] / [`HoverEvent`] - interactive events
//! - [`Style`] - all of the above, merged parent-to-child with [`Style::apply`]
//! - [`Component`] - style + content + children
//!
//! Enumerated values are spelled through the [`Named`] tables so every
//! codec agrees on names.
//!
//! # Usage
//!
//! ```
//! use text::{Component, NamedTextColor, Style, TextDecoration};
//!
//! let tree = Component::text("Hello ")
//!     .color(NamedTextColor::Gold)
//!     .append(Component::text("world").decorate(TextDecoration::Bold));
//!
//! let nodes = tree.flatten();
//! assert_eq!(nodes[1].1.color, Some(NamedTextColor::Gold.into()));
//! assert!(nodes[1].1.has_decoration(TextDecoration::Bold));
//! ```

pub mod color;
pub mod component;
pub mod decoration;
pub mod error;
pub mod event;
pub mod names;
pub mod style;

// Re-export main types at crate root
pub use color::{NamedTextColor, TextColor};
pub use component::{Component, Content, NbtSource};
pub use decoration::{DecorationSet, Decorations, TextDecoration, TriState};
pub use error::{ColorParseError, UnknownNameError};
pub use event::{ClickAction, ClickEvent, HoverAction, HoverEvent, ShowEntity, ShowItem};
pub use names::Named;
pub use style::Style;
