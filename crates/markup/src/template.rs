//! Placeholders spliced in during a single parse.

use text::Component;

/// What a template is replaced with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateValue {
    /// Literal text, styled like the surrounding text. Never parsed as
    /// markup.
    Text(String),
    /// A component. Its own explicit style wins over the surrounding style.
    Component(Component),
}

/// A named placeholder, written `<key>` in markup.
///
/// ```
/// use markup::Template;
/// use text::{Component, NamedTextColor};
///
/// let name = Template::string("name", "Steve");
/// let badge = Template::component("badge", Component::text("VIP").color(NamedTextColor::Gold));
///
/// let message = markup::parse("<name> <badge>", &[name, badge]).unwrap();
/// assert_eq!(message.to_plain_string(), "Steve VIP");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    key: String,
    value: TemplateValue,
}

impl Template {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: TemplateValue::Text(value.into()),
        }
    }

    pub fn component(key: impl Into<String>, value: Component) -> Self {
        Self {
            key: key.into(),
            value: TemplateValue::Component(value),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &TemplateValue {
        &self.value
    }

    /// Build string templates from key/value pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<Template> {
        pairs
            .into_iter()
            .map(|(key, value)| Template::string(key, value))
            .collect()
    }
}
