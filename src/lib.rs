//! Styled component text and its wire formats.
//!
//! This crate gathers the workspace behind one dependency:
//!
//! - [`text`] - the component tree, colors, decorations and events
//! - [`json`] - the JSON tree format
//! - [`legacy`] - `§` color codes, with hex colors or palette downsampling
//! - [`markup`] - `<tag>` markup with templates and markdown-lite
//!
//! plus the unified [`Error`] and a small delivery surface ([`Audience`],
//! [`Sound`], [`TabView`], [`Skin`], [`Listeners`]).
//!
//! # Usage
//!
//! ```
//! use textcomponent::{LegacySerializer, MiniMessage};
//!
//! # fn main() -> textcomponent::Result<()> {
//! let component = MiniMessage::instance().deserialize("<green>Ready <bold>now")?;
//!
//! let json = textcomponent::json::to_string(&component);
//! assert_eq!(textcomponent::json::from_str(&json)?, component);
//!
//! assert_eq!(LegacySerializer::ampersand().serialize(&component), "&aReady &lnow");
//! # Ok(())
//! # }
//! ```

pub mod audience;
pub mod error;
pub mod listener;
pub mod skin;
pub mod sound;
pub mod tab;

pub use markup;
pub use text;
pub use text_json as json;
pub use text_legacy as legacy;

// Re-export main types at crate root
pub use audience::{Audience, EmptyAudience, ForwardingAudience};
pub use error::{Error, Result};
pub use listener::Listeners;
pub use markup::{MiniMessage, Template};
pub use skin::Skin;
pub use sound::{Sound, SoundSource, SoundStop};
pub use tab::TabView;
pub use text::{
    ClickAction, ClickEvent, Component, Content, HoverAction, HoverEvent, NamedTextColor, Style,
    TextColor, TextDecoration, TriState,
};
pub use text_legacy::LegacySerializer;
