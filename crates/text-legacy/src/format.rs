//! The legacy format code table.

use phf::phf_map;
use text::{NamedTextColor, TextColor, TextDecoration};

/// Code that clears color and decorations.
pub const RESET_CODE: char = 'r';

/// Introduces the repeated-character hex form, `§x§r§r§g§g§b§b`.
pub const HEX_REPEATED_CODE: char = 'x';

/// Introduces the compact hex form, `§#rrggbb`.
pub const HEX_COMPACT_CODE: char = '#';

/// What a single legacy code does to the running style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegacyFormat {
    /// Replace the style with just this color.
    Color(TextColor),
    /// Turn a decoration on.
    Decoration(TextDecoration),
    /// Clear everything.
    Reset,
}

static FORMATS: phf::Map<char, LegacyFormat> = phf_map! {
    '0' => LegacyFormat::Color(TextColor::Named(NamedTextColor::Black)),
    '1' => LegacyFormat::Color(TextColor::Named(NamedTextColor::DarkBlue)),
    '2' => LegacyFormat::Color(TextColor::Named(NamedTextColor::DarkGreen)),
    '3' => LegacyFormat::Color(TextColor::Named(NamedTextColor::DarkAqua)),
    '4' => LegacyFormat::Color(TextColor::Named(NamedTextColor::DarkRed)),
    '5' => LegacyFormat::Color(TextColor::Named(NamedTextColor::DarkPurple)),
    '6' => LegacyFormat::Color(TextColor::Named(NamedTextColor::Gold)),
    '7' => LegacyFormat::Color(TextColor::Named(NamedTextColor::Gray)),
    '8' => LegacyFormat::Color(TextColor::Named(NamedTextColor::DarkGray)),
    '9' => LegacyFormat::Color(TextColor::Named(NamedTextColor::Blue)),
    'a' => LegacyFormat::Color(TextColor::Named(NamedTextColor::Green)),
    'b' => LegacyFormat::Color(TextColor::Named(NamedTextColor::Aqua)),
    'c' => LegacyFormat::Color(TextColor::Named(NamedTextColor::Red)),
    'd' => LegacyFormat::Color(TextColor::Named(NamedTextColor::LightPurple)),
    'e' => LegacyFormat::Color(TextColor::Named(NamedTextColor::Yellow)),
    'f' => LegacyFormat::Color(TextColor::Named(NamedTextColor::White)),
    'k' => LegacyFormat::Decoration(TextDecoration::Obfuscated),
    'l' => LegacyFormat::Decoration(TextDecoration::Bold),
    'm' => LegacyFormat::Decoration(TextDecoration::Strikethrough),
    'n' => LegacyFormat::Decoration(TextDecoration::Underlined),
    'o' => LegacyFormat::Decoration(TextDecoration::Italic),
    'r' => LegacyFormat::Reset,
};

impl LegacyFormat {
    /// Look up a code, ignoring ASCII case.
    pub fn from_code(code: char) -> Option<LegacyFormat> {
        FORMATS.get(&code.to_ascii_lowercase()).copied()
    }
}

/// The single-character code of a palette color.
pub const fn color_code(color: NamedTextColor) -> char {
    match color {
        NamedTextColor::Black => '0',
        NamedTextColor::DarkBlue => '1',
        NamedTextColor::DarkGreen => '2',
        NamedTextColor::DarkAqua => '3',
        NamedTextColor::DarkRed => '4',
        NamedTextColor::DarkPurple => '5',
        NamedTextColor::Gold => '6',
        NamedTextColor::Gray => '7',
        NamedTextColor::DarkGray => '8',
        NamedTextColor::Blue => '9',
        NamedTextColor::Green => 'a',
        NamedTextColor::Aqua => 'b',
        NamedTextColor::Red => 'c',
        NamedTextColor::LightPurple => 'd',
        NamedTextColor::Yellow => 'e',
        NamedTextColor::White => 'f',
    }
}

pub const fn decoration_code(decoration: TextDecoration) -> char {
    match decoration {
        TextDecoration::Obfuscated => 'k',
        TextDecoration::Bold => 'l',
        TextDecoration::Strikethrough => 'm',
        TextDecoration::Underlined => 'n',
        TextDecoration::Italic => 'o',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for color in NamedTextColor::ALL {
            assert_eq!(
                LegacyFormat::from_code(color_code(color)),
                Some(LegacyFormat::Color(color.into()))
            );
        }
        for decoration in TextDecoration::ALL {
            assert_eq!(
                LegacyFormat::from_code(decoration_code(decoration)),
                Some(LegacyFormat::Decoration(decoration))
            );
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(
            LegacyFormat::from_code('A'),
            Some(LegacyFormat::Color(NamedTextColor::Green.into()))
        );
        assert_eq!(LegacyFormat::from_code('R'), Some(LegacyFormat::Reset));
        assert_eq!(LegacyFormat::from_code('z'), None);
        assert_eq!(LegacyFormat::from_code(HEX_REPEATED_CODE), None);
    }
}
