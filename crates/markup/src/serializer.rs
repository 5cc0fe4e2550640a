//! Minimal-diff serialization to tag markup.
//!
//! The tree is flattened pre-order with effective styles. A tag is opened
//! only when its attribute differs from the previous node and closed only
//! when it differs on the next node, so runs of nodes sharing an attribute
//! share one tag pair. The output is not strictly nested; the parser closes
//! the most recent tag of a kind, which makes this well defined.

use text::{Component, Content, HoverEvent, Named, NamedTextColor, Style, TextColor, TextDecoration};

use crate::parser::{CLICK, COLOR, HOVER, INSERTION, KEYBIND, TRANSLATABLE};

/// Decoration tag order.
const DECORATION_ORDER: [TextDecoration; 5] = [
    TextDecoration::Bold,
    TextDecoration::Italic,
    TextDecoration::Obfuscated,
    TextDecoration::Strikethrough,
    TextDecoration::Underlined,
];

/// Serialize a component tree to tag markup.
///
/// ```
/// use text::{Component, NamedTextColor, TextDecoration};
///
/// let message = Component::empty()
///     .append(Component::text("Hello ").color(NamedTextColor::Red))
///     .append(Component::text("World").color(NamedTextColor::Red).decorate(TextDecoration::Bold));
///
/// assert_eq!(markup::serialize(&message), "<red>Hello <bold>World</bold></red>");
/// ```
pub fn serialize(component: &Component) -> String {
    let nodes = component.flatten();
    let mut out = String::new();

    for (index, (node, style)) in nodes.iter().enumerate() {
        let prev = index.checked_sub(1).map(|prev| &nodes[prev].1);
        let next = nodes.get(index + 1).map(|(_, next)| next);

        open_tags(style, prev, &mut out);
        write_content(node.content(), &mut out);
        close_tags(style, next, &mut out);
    }

    out
}

fn open_tags(style: &Style, prev: Option<&Style>, out: &mut String) {
    if let Some(color) = &style.color {
        if prev.and_then(|prev| prev.color).as_ref() != Some(color) {
            match NamedTextColor::from_value(color.value()) {
                Some(named) => write_tag(out, named.name(), &[]),
                None => write_tag(out, COLOR, &[color.as_hex_string().as_str()]),
            }
        }
    }

    for decoration in DECORATION_ORDER {
        if style.has_decoration(decoration) && !prev.is_some_and(|prev| prev.has_decoration(decoration)) {
            write_tag(out, decoration.name(), &[]);
        }
    }

    if let Some(hover) = &style.hover_event {
        if prev.and_then(|prev| prev.hover_event.as_ref()) != Some(hover) {
            let value = match hover {
                HoverEvent::ShowText(text) => serialize(text),
                other => text_json::encode_hover_contents(other).to_string(),
            };
            write_tag(out, HOVER, &[hover.action().name(), quote(&value).as_str()]);
        }
    }

    if let Some(click) = &style.click_event {
        if prev.and_then(|prev| prev.click_event.as_ref()) != Some(click) {
            write_tag(out, CLICK, &[click.action.name(), quote(&click.value).as_str()]);
        }
    }

    if let Some(insertion) = &style.insertion {
        if prev.and_then(|prev| prev.insertion.as_ref()) != Some(insertion) {
            write_tag(out, INSERTION, &[quote(insertion).as_str()]);
        }
    }
}

fn close_tags(style: &Style, next: Option<&Style>, out: &mut String) {
    if let Some(insertion) = &style.insertion {
        if next.and_then(|next| next.insertion.as_ref()) != Some(insertion) {
            write_close(out, INSERTION);
        }
    }

    if let Some(click) = &style.click_event {
        if next.and_then(|next| next.click_event.as_ref()) != Some(click) {
            write_close(out, CLICK);
        }
    }

    if let Some(hover) = &style.hover_event {
        if next.and_then(|next| next.hover_event.as_ref()) != Some(hover) {
            write_close(out, HOVER);
        }
    }

    for decoration in DECORATION_ORDER.into_iter().rev() {
        if style.has_decoration(decoration) && !next.is_some_and(|next| next.has_decoration(decoration)) {
            write_close(out, decoration.name());
        }
    }

    if let Some(color) = &style.color {
        if next.and_then(|next| next.color).as_ref() != Some(color) {
            write_close(out, color_close_name(color));
        }
    }
}

fn color_close_name(color: &TextColor) -> &'static str {
    match NamedTextColor::from_value(color.value()) {
        Some(named) => named.name(),
        None => COLOR,
    }
}

fn write_content(content: &Content, out: &mut String) {
    match content {
        Content::Text(text) => escape_text(text, out),
        Content::Keybind(keybind) => write_tag(out, KEYBIND, &[quote(keybind).as_str()]),
        Content::Translatable { key, args } => {
            let mut parts = vec![quote(key)];
            parts.extend(args.iter().map(|arg| quote(&serialize(arg))));
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            write_tag(out, TRANSLATABLE, &parts);
        }
        Content::Score { .. } | Content::Selector(_) | Content::Nbt { .. } => {
            log::trace!("no tag form for {:?}, skipping", content);
        }
    }
}

fn write_tag(out: &mut String, name: &str, args: &[&str]) {
    out.push('<');
    out.push_str(name);
    for arg in args {
        out.push(':');
        out.push_str(arg);
    }
    out.push('>');
}

fn write_close(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        if matches!(c, '<' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Wrap an argument in double quotes, escaping `"` and `\`.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes() {
        assert_eq!(quote(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn text_escapes() {
        let mut out = String::new();
        escape_text(r"a<b\c>", &mut out);
        assert_eq!(out, r"a\<b\\c>");
    }

    #[test]
    fn palette_valued_rgb_uses_name() {
        let component = Component::text("x").color(TextColor::from_value(0xff5555));
        assert_eq!(serialize(&component), "<red>x</red>");
    }

    #[test]
    fn score_emits_nothing() {
        let component = Component::score("@p", "kills").color(NamedTextColor::Red);
        assert_eq!(serialize(&component), "<red></red>");
    }
}
