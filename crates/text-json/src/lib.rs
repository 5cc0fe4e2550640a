//! JSON codec for component trees.
//!
//! Encodes [`text::Component`] as the JSON text format used by Minecraft
//! clients, and decodes it back including the lenient shorthand forms
//! (bare strings, numbers and arrays).
//!
//! ```
//! use text::{Component, NamedTextColor};
//!
//! let component = Component::text("hi").color(NamedTextColor::Red);
//! let json = text_json::to_string(&component);
//! assert_eq!(json, r#"{"color":"red","text":"hi"}"#);
//! assert_eq!(text_json::from_str(&json).unwrap(), component);
//! ```

mod decode;
mod encode;
pub mod error;
pub mod keys;

pub use decode::{decode, decode_hover_contents};
pub use encode::{encode, encode_hover_contents};
pub use error::JsonError;

use text::Component;

/// Result type for JSON decoding.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Encode a component as compact JSON text.
pub fn to_string(component: &Component) -> String {
    encode(component).to_string()
}

/// Parse JSON text and decode it as a component.
pub fn from_str(input: &str) -> Result<Component> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    decode(&value)
}

/// A component that serializes through the JSON codec.
///
/// Lets a tree ride inside any other serde document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JsonComponent(pub Component);

impl From<Component> for JsonComponent {
    fn from(component: Component) -> Self {
        JsonComponent(component)
    }
}

impl From<JsonComponent> for Component {
    fn from(component: JsonComponent) -> Self {
        component.0
    }
}

impl serde::Serialize for JsonComponent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        as_json::serialize(&self.0, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for JsonComponent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        as_json::deserialize(deserializer).map(JsonComponent)
    }
}

/// Serde adapter for component fields.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use text::Component;
///
/// #[derive(Serialize, Deserialize)]
/// struct Motd {
///     #[serde(with = "text_json::as_json")]
///     description: Component,
/// }
/// ```
pub mod as_json {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;
    use text::Component;

    pub fn serialize<S: Serializer>(component: &Component, serializer: S) -> Result<S::Ok, S::Error> {
        super::encode(component).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Component, D::Error> {
        let value = Value::deserialize(deserializer)?;
        super::decode(&value).map_err(D::Error::custom)
    }
}
