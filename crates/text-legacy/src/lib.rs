//! Legacy color-code codec.
//!
//! Legacy strings interleave text with two-character codes: an escape
//! character (`§` on the wire, `&` in most configuration files) followed by
//! a color (`0`-`f`), decoration (`k`-`o`) or reset (`r`) code. Arbitrary
//! colors are written as `§#rrggbb` or `§x§r§r§g§g§b§b` when hex output is
//! enabled, and downsampled to the nearest palette color otherwise.

pub mod format;
mod serializer;

pub use format::LegacyFormat;
pub use serializer::{
    AMPERSAND_CHAR, LegacyOptions, LegacySerializer, LegacySerializerBuilder, SECTION_CHAR,
    decode, encode,
};
