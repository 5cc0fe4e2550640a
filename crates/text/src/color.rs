//! Color types for component text.
//!
//! A [`TextColor`] is either one of the sixteen palette colors
//! ([`NamedTextColor`]) or an arbitrary 24-bit RGB value. Two colors are
//! equal when their RGB values are equal, regardless of how they were
//! written.

use std::fmt;
use std::hash::{Hash, Hasher};

use phf::phf_map;

use crate::error::{ColorParseError, UnknownNameError};
use crate::names::Named;

/// The fixed sixteen color palette.
///
/// Declaration order matters: it is the legacy code order (`0`-`f`) and the
/// tie-break order of [`NamedTextColor::nearest_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedTextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

static NAMED_COLORS: phf::Map<&'static str, NamedTextColor> = phf_map! {
    "black" => NamedTextColor::Black,
    "dark_blue" => NamedTextColor::DarkBlue,
    "dark_green" => NamedTextColor::DarkGreen,
    "dark_aqua" => NamedTextColor::DarkAqua,
    "dark_red" => NamedTextColor::DarkRed,
    "dark_purple" => NamedTextColor::DarkPurple,
    "gold" => NamedTextColor::Gold,
    "gray" => NamedTextColor::Gray,
    "dark_gray" => NamedTextColor::DarkGray,
    "blue" => NamedTextColor::Blue,
    "green" => NamedTextColor::Green,
    "aqua" => NamedTextColor::Aqua,
    "red" => NamedTextColor::Red,
    "light_purple" => NamedTextColor::LightPurple,
    "yellow" => NamedTextColor::Yellow,
    "white" => NamedTextColor::White,
};

impl NamedTextColor {
    /// All palette entries in declaration order.
    pub const ALL: [NamedTextColor; 16] = [
        NamedTextColor::Black,
        NamedTextColor::DarkBlue,
        NamedTextColor::DarkGreen,
        NamedTextColor::DarkAqua,
        NamedTextColor::DarkRed,
        NamedTextColor::DarkPurple,
        NamedTextColor::Gold,
        NamedTextColor::Gray,
        NamedTextColor::DarkGray,
        NamedTextColor::Blue,
        NamedTextColor::Green,
        NamedTextColor::Aqua,
        NamedTextColor::Red,
        NamedTextColor::LightPurple,
        NamedTextColor::Yellow,
        NamedTextColor::White,
    ];

    /// The 24-bit RGB value of this palette entry.
    pub const fn value(self) -> u32 {
        match self {
            NamedTextColor::Black => 0x000000,
            NamedTextColor::DarkBlue => 0x0000aa,
            NamedTextColor::DarkGreen => 0x00aa00,
            NamedTextColor::DarkAqua => 0x00aaaa,
            NamedTextColor::DarkRed => 0xaa0000,
            NamedTextColor::DarkPurple => 0xaa00aa,
            NamedTextColor::Gold => 0xffaa00,
            NamedTextColor::Gray => 0xaaaaaa,
            NamedTextColor::DarkGray => 0x555555,
            NamedTextColor::Blue => 0x5555ff,
            NamedTextColor::Green => 0x55ff55,
            NamedTextColor::Aqua => 0x55ffff,
            NamedTextColor::Red => 0xff5555,
            NamedTextColor::LightPurple => 0xff55ff,
            NamedTextColor::Yellow => 0xffff55,
            NamedTextColor::White => 0xffffff,
        }
    }

    /// Find the palette entry with exactly this RGB value.
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|named| named.value() == value)
    }

    /// Find the palette entry nearest to `color`.
    ///
    /// Distance is the squared per-channel difference
    /// `dr² + dg² + db²`. On a tie the entry declared first wins, so
    /// `#000055` (equidistant from black and dark_blue) maps to black.
    pub fn nearest_to(color: TextColor) -> Self {
        if let TextColor::Named(named) = color {
            return named;
        }

        let mut nearest = NamedTextColor::Black;
        let mut nearest_distance = u32::MAX;
        for candidate in Self::ALL {
            let distance = distance_squared(color.value(), candidate.value());
            if distance < nearest_distance {
                nearest = candidate;
                nearest_distance = distance;
            }
            if distance == 0 {
                break;
            }
        }
        nearest
    }
}

/// Squared euclidean distance between two 24-bit RGB values.
pub fn distance_squared(a: u32, b: u32) -> u32 {
    let (ar, ag, ab) = split(a);
    let (br, bg, bb) = split(b);
    let dr = ar as i32 - br as i32;
    let dg = ag as i32 - bg as i32;
    let db = ab as i32 - bb as i32;
    (dr * dr + dg * dg + db * db) as u32
}

fn split(value: u32) -> (u8, u8, u8) {
    (
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

impl Named for NamedTextColor {
    const TABLE: &'static str = "color";

    fn values() -> &'static [Self] {
        &Self::ALL
    }

    fn table() -> &'static phf::Map<&'static str, Self> {
        &NAMED_COLORS
    }

    fn name(self) -> &'static str {
        match self {
            NamedTextColor::Black => "black",
            NamedTextColor::DarkBlue => "dark_blue",
            NamedTextColor::DarkGreen => "dark_green",
            NamedTextColor::DarkAqua => "dark_aqua",
            NamedTextColor::DarkRed => "dark_red",
            NamedTextColor::DarkPurple => "dark_purple",
            NamedTextColor::Gold => "gold",
            NamedTextColor::Gray => "gray",
            NamedTextColor::DarkGray => "dark_gray",
            NamedTextColor::Blue => "blue",
            NamedTextColor::Green => "green",
            NamedTextColor::Aqua => "aqua",
            NamedTextColor::Red => "red",
            NamedTextColor::LightPurple => "light_purple",
            NamedTextColor::Yellow => "yellow",
            NamedTextColor::White => "white",
        }
    }
}

impl fmt::Display for NamedTextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A text color: a palette entry or an arbitrary RGB value.
///
/// # Examples
///
/// ```
/// use text::{NamedTextColor, TextColor};
///
/// let red = TextColor::parse("red").unwrap();
/// let hex = TextColor::parse("#ff5555").unwrap();
/// assert_eq!(red, hex);
/// assert_eq!(red, TextColor::Named(NamedTextColor::Red));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum TextColor {
    /// A palette color with a canonical name.
    Named(NamedTextColor),
    /// An arbitrary color, `0xRRGGBB`.
    Rgb(u32),
}

impl TextColor {
    /// Create an arbitrary color from a `0xRRGGBB` value. Bits above the
    /// low 24 are discarded.
    pub const fn from_value(value: u32) -> Self {
        TextColor::Rgb(value & 0xff_ffff)
    }

    /// Create an arbitrary color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        TextColor::Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Palette names: `red`, `dark_aqua`, ...
    /// - Hex colors: `#RGB`, `#RRGGBB`
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        NamedTextColor::from_name(input)
            .map(TextColor::Named)
            .map_err(ColorParseError::from)
    }

    /// Parse a hex color (without the `#` prefix).
    pub fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(format!("#{}", hex)));
        }

        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ColorParseError::InvalidHex(format!("#{}", hex)))?;

        match hex.len() {
            // #RGB
            3 => {
                let r = (value >> 8) & 0xf;
                let g = (value >> 4) & 0xf;
                let b = value & 0xf;
                Ok(TextColor::Rgb((r * 17) << 16 | (g * 17) << 8 | b * 17))
            }
            // #RRGGBB
            6 => Ok(TextColor::Rgb(value)),
            _ => Err(ColorParseError::InvalidHex(format!("#{}", hex))),
        }
    }

    /// Look a palette color up by name.
    pub fn named(name: &str) -> Result<Self, UnknownNameError> {
        NamedTextColor::from_name(name).map(TextColor::Named)
    }

    /// The 24-bit RGB value.
    pub const fn value(&self) -> u32 {
        match self {
            TextColor::Named(named) => named.value(),
            TextColor::Rgb(value) => *value,
        }
    }

    /// Convert the color to RGB components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        split(self.value())
    }

    /// `#rrggbb`, lowercase.
    pub fn as_hex_string(&self) -> String {
        format!("#{:06x}", self.value())
    }

    /// The palette entry for this color, if it is one.
    pub fn as_named(&self) -> Option<NamedTextColor> {
        match self {
            TextColor::Named(named) => Some(*named),
            TextColor::Rgb(_) => None,
        }
    }
}

impl PartialEq for TextColor {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for TextColor {}

impl Hash for TextColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl From<NamedTextColor> for TextColor {
    fn from(named: NamedTextColor) -> Self {
        TextColor::Named(named)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColor::Named(named) => f.write_str(named.name()),
            TextColor::Rgb(_) => f.write_str(&self.as_hex_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::assert_table_consistent;

    #[test]
    fn name_table_is_consistent() {
        assert_table_consistent::<NamedTextColor>();
    }

    #[test]
    fn parse_named_color() {
        assert_eq!(
            TextColor::parse("red").unwrap(),
            TextColor::Named(NamedTextColor::Red)
        );
        assert_eq!(
            TextColor::parse(" dark_aqua ").unwrap(),
            TextColor::Named(NamedTextColor::DarkAqua)
        );
    }

    #[test]
    fn parse_hex_short() {
        assert_eq!(TextColor::parse("#f00").unwrap().value(), 0xff0000);
        assert_eq!(TextColor::parse("#0f0").unwrap().value(), 0x00ff00);
    }

    #[test]
    fn parse_hex_long() {
        assert_eq!(TextColor::parse("#ff5733").unwrap().value(), 0xff5733);
        assert_eq!(TextColor::parse("#FFEFD5").unwrap().value(), 0xffefd5);
    }

    #[test]
    fn parse_invalid() {
        assert!(matches!(
            TextColor::parse("notacolor"),
            Err(ColorParseError::UnknownName(_))
        ));
        assert!(matches!(
            TextColor::parse("#gg0000"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            TextColor::parse("#ff00"),
            Err(ColorParseError::InvalidHex(_))
        ));
        // Names are case sensitive at this layer.
        assert!(TextColor::parse("RED").is_err());
    }

    #[test]
    fn named_and_rgb_compare_by_value() {
        assert_eq!(
            TextColor::Named(NamedTextColor::Gold),
            TextColor::from_value(0xffaa00)
        );
        assert_ne!(
            TextColor::Named(NamedTextColor::Gold),
            TextColor::from_value(0xffaa01)
        );
    }

    #[test]
    fn to_rgb() {
        assert_eq!(TextColor::Named(NamedTextColor::Red).to_rgb(), (255, 85, 85));
        assert_eq!(TextColor::rgb(10, 20, 30).to_rgb(), (10, 20, 30));
    }

    #[test]
    fn hex_string() {
        assert_eq!(TextColor::from_value(0x0a0b0c).as_hex_string(), "#0a0b0c");
        assert_eq!(TextColor::Named(NamedTextColor::White).to_string(), "white");
    }
}
