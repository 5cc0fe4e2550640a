//! Encoding and decoding of legacy code strings.

use once_cell::sync::Lazy;
use text::{Component, DecorationSet, NamedTextColor, Style, TextColor};

use crate::format::{self, HEX_COMPACT_CODE, HEX_REPEATED_CODE, LegacyFormat, RESET_CODE};

/// The section sign, the escape character understood by clients.
pub const SECTION_CHAR: char = '§';

/// The ampersand, the usual escape character in configuration files.
pub const AMPERSAND_CHAR: char = '&';

static SECTION: Lazy<LegacySerializer> = Lazy::new(|| LegacySerializer::builder().build());

static AMPERSAND: Lazy<LegacySerializer> =
    Lazy::new(|| LegacySerializer::builder().character(AMPERSAND_CHAR).build());

/// Settings for a [`LegacySerializer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyOptions {
    /// Escape character preceding each code.
    pub character: char,
    /// Write arbitrary colors as hex instead of downsampling them.
    pub hex_colors: bool,
    /// Write hex colors in the repeated `x` form instead of `#rrggbb`.
    pub unusual_hex_format: bool,
}

impl Default for LegacyOptions {
    fn default() -> Self {
        Self {
            character: SECTION_CHAR,
            hex_colors: false,
            unusual_hex_format: false,
        }
    }
}

/// Builder for [`LegacySerializer`].
#[derive(Clone, Debug, Default)]
pub struct LegacySerializerBuilder {
    options: LegacyOptions,
}

impl LegacySerializerBuilder {
    pub fn character(mut self, character: char) -> Self {
        self.options.character = character;
        self
    }

    /// Keep arbitrary colors when encoding.
    pub fn hex_colors(mut self) -> Self {
        self.options.hex_colors = true;
        self
    }

    /// Encode hex colors as `§x§r§r§g§g§b§b`. Only has an effect together
    /// with [`hex_colors`](Self::hex_colors).
    pub fn use_unusual_x_repeated_character_hex_format(mut self) -> Self {
        self.options.unusual_hex_format = true;
        self
    }

    pub fn build(self) -> LegacySerializer {
        LegacySerializer::new(self.options)
    }
}

/// Converts components to and from legacy code strings.
///
/// # Example
///
/// ```
/// use text::{Component, NamedTextColor, TextDecoration};
/// use text_legacy::LegacySerializer;
///
/// let message = Component::text("Hello ")
///     .color(NamedTextColor::Yellow)
///     .append(Component::text("world").decorate(TextDecoration::Bold));
///
/// let legacy = LegacySerializer::ampersand().serialize(&message);
/// assert_eq!(legacy, "&eHello &lworld");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacySerializer {
    options: LegacyOptions,
}

impl LegacySerializer {
    pub fn new(options: LegacyOptions) -> Self {
        Self { options }
    }

    pub fn builder() -> LegacySerializerBuilder {
        LegacySerializerBuilder::default()
    }

    /// Shared serializer using [`SECTION_CHAR`].
    pub fn section() -> &'static LegacySerializer {
        &SECTION
    }

    /// Shared serializer using [`AMPERSAND_CHAR`].
    pub fn ampersand() -> &'static LegacySerializer {
        &AMPERSAND
    }

    /// Shared serializer for `character`, or a new one for any other
    /// escape.
    pub fn legacy(character: char) -> LegacySerializer {
        match character {
            SECTION_CHAR => SECTION.clone(),
            AMPERSAND_CHAR => AMPERSAND.clone(),
            other => LegacySerializer::builder().character(other).build(),
        }
    }

    pub fn options(&self) -> &LegacyOptions {
        &self.options
    }

    /// Encode a component tree.
    ///
    /// Content other than text is flattened to its plain form; nodes with
    /// nothing to print emit nothing.
    pub fn serialize(&self, component: &Component) -> String {
        let mut out = String::new();
        let mut applied = Applied::default();

        for (node, style) in component.flatten() {
            let text = node.content().plain();
            if text.is_empty() {
                continue;
            }

            let target = Applied::from_style(&style, self.options.hex_colors);
            self.write_transition(&applied, &target, &mut out);
            out.push_str(text);
            applied = target;
        }

        out
    }

    fn write_transition(&self, from: &Applied, to: &Applied, out: &mut String) {
        let mut active = from.decorations;

        if from.color != to.color {
            match &to.color {
                Some(color) => self.write_color(color, out),
                None => self.write_code(RESET_CODE, out),
            }
            active = DecorationSet::empty();
        } else if !(from.decorations - to.decorations).is_empty() {
            self.write_code(RESET_CODE, out);
            if let Some(color) = &to.color {
                self.write_color(color, out);
            }
            active = DecorationSet::empty();
        }

        for decoration in (to.decorations - active).decorations() {
            self.write_code(format::decoration_code(decoration), out);
        }
    }

    fn write_color(&self, color: &TextColor, out: &mut String) {
        if let Some(named) = NamedTextColor::from_value(color.value()) {
            self.write_code(format::color_code(named), out);
            return;
        }

        let hex = format!("{:06x}", color.value());
        if self.options.unusual_hex_format {
            self.write_code(HEX_REPEATED_CODE, out);
            for digit in hex.chars() {
                self.write_code(digit, out);
            }
        } else {
            self.write_code(HEX_COMPACT_CODE, out);
            out.push_str(&hex);
        }
    }

    fn write_code(&self, code: char, out: &mut String) {
        out.push(self.options.character);
        out.push(code);
    }

    /// Decode a legacy string.
    ///
    /// Both hex forms are recognized whatever the options say. Escapes
    /// followed by anything else are kept as literal text.
    pub fn deserialize(&self, input: &str) -> Component {
        let escape = self.options.character;
        let mut runs = Vec::new();
        let mut style = Style::new();
        let mut buffer = String::new();
        let mut rest = input;

        while let Some(index) = rest.find(escape) {
            buffer.push_str(&rest[..index]);
            let after = &rest[index + escape.len_utf8()..];

            match self.read_format(after) {
                Some((format, consumed)) => {
                    if !buffer.is_empty() {
                        let run = std::mem::take(&mut buffer);
                        runs.push(Component::text(run).with_style(style.clone()));
                    }
                    style = apply_format(style, format);
                    rest = &after[consumed..];
                }
                None => {
                    log::trace!(
                        "keeping unrecognized escape at byte {} as text",
                        input.len() - rest.len() + index
                    );
                    buffer.push(escape);
                    rest = after;
                }
            }
        }

        buffer.push_str(rest);
        if !buffer.is_empty() {
            runs.push(Component::text(buffer).with_style(style));
        }

        match runs.len() {
            0 => Component::empty(),
            1 if runs[0].style().is_empty() => runs.remove(0),
            _ => Component::empty().with_children(runs),
        }
    }

    /// Read the code following an escape. Returns the format and how many
    /// bytes of `after` it spans.
    fn read_format(&self, after: &str) -> Option<(LegacyFormat, usize)> {
        let code = after.chars().next()?;

        if code == HEX_COMPACT_CODE {
            let hex = after.get(1..7)?;
            return parse_hex(hex).map(|color| (LegacyFormat::Color(color), 7));
        }

        if code.eq_ignore_ascii_case(&HEX_REPEATED_CODE) {
            if let Some(found) = self.read_repeated_hex(&after[1..]) {
                return Some(found);
            }
        }

        LegacyFormat::from_code(code).map(|format| (format, code.len_utf8()))
    }

    fn read_repeated_hex(&self, input: &str) -> Option<(LegacyFormat, usize)> {
        let mut chars = input.chars();
        let mut hex = String::with_capacity(6);
        for _ in 0..6 {
            if chars.next()? != self.options.character {
                return None;
            }
            hex.push(chars.next()?);
        }

        let color = parse_hex(&hex)?;
        let consumed = 1 + 6 * (self.options.character.len_utf8() + 1);
        Some((LegacyFormat::Color(color), consumed))
    }
}

impl Default for LegacySerializer {
    fn default() -> Self {
        Self::new(LegacyOptions::default())
    }
}

fn parse_hex(hex: &str) -> Option<TextColor> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(TextColor::from_value)
}

fn apply_format(style: Style, format: LegacyFormat) -> Style {
    match format {
        LegacyFormat::Color(color) => Style::new().with_color(color),
        LegacyFormat::Decoration(decoration) => style.with_decoration(decoration, true),
        LegacyFormat::Reset => Style::new(),
    }
}

/// Formatting already written to the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Applied {
    color: Option<TextColor>,
    decorations: DecorationSet,
}

impl Applied {
    fn from_style(style: &Style, hex_colors: bool) -> Self {
        let color = style.color.map(|color| {
            if hex_colors {
                color
            } else {
                NamedTextColor::nearest_to(color).into()
            }
        });

        Self {
            color,
            decorations: style.enabled_decorations(),
        }
    }
}

/// Encode `component` with `options`.
pub fn encode(component: &Component, options: LegacyOptions) -> String {
    LegacySerializer::new(options).serialize(component)
}

/// Decode `input`, treating `character` as the escape.
pub fn decode(input: &str, character: char) -> Component {
    LegacySerializer::builder()
        .character(character)
        .build()
        .deserialize(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use text::TextDecoration;

    #[test]
    fn decoration_turned_off_resets_and_restores_color() {
        let component = Component::empty()
            .color(NamedTextColor::Red)
            .append(Component::text("a").decorate(TextDecoration::Italic))
            .append(Component::text("b"));
        assert_eq!(LegacySerializer::ampersand().serialize(&component), "&c&oa&r&cb");
    }

    #[test]
    fn incomplete_hex_is_literal() {
        let component = LegacySerializer::ampersand().deserialize("&#12zz");
        assert_eq!(component, Component::text("&#12zz"));
    }

    #[test]
    fn repeated_hex_falls_back_when_interrupted() {
        let component = LegacySerializer::ampersand().deserialize("&x&f&fxyz");
        assert_eq!(
            component,
            Component::empty().with_children(vec![
                Component::text("&x"),
                Component::text("xyz").color(NamedTextColor::White),
            ])
        );
    }

    #[test]
    fn dangling_escape_is_literal() {
        assert_eq!(LegacySerializer::section().deserialize("a§"), Component::text("a§"));
    }
}
