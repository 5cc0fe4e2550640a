//! Bidirectional name tables for enumerated values.
//!
//! Every enumeration that appears on a wire format (colors, decorations,
//! click and hover actions) implements [`Named`]. The forward direction is a
//! `phf` map and the reverse direction an exhaustive `match`, and both are
//! used by every codec so encode and decode agree on spelling.

use crate::error::UnknownNameError;

/// An enumeration with one canonical lowercase name per value.
pub trait Named: Copy + Eq + 'static {
    /// Table name reported in [`UnknownNameError`].
    const TABLE: &'static str;

    /// Every value, in declaration order.
    fn values() -> &'static [Self];

    /// Name to value table.
    fn table() -> &'static phf::Map<&'static str, Self>;

    /// Canonical name of this value.
    fn name(self) -> &'static str;

    /// Look a value up by its exact canonical name.
    fn from_name(name: &str) -> Result<Self, UnknownNameError> {
        Self::table()
            .get(name)
            .copied()
            .ok_or_else(|| UnknownNameError::new(Self::TABLE, name))
    }
}

/// Asserts that both directions of a table agree. Used by the unit tests of
/// each implementor.
#[cfg(test)]
pub(crate) fn assert_table_consistent<T: Named + std::fmt::Debug>() {
    assert_eq!(T::values().len(), T::table().len(), "{} table size", T::TABLE);
    for value in T::values() {
        assert_eq!(T::from_name(value.name()), Ok(*value));
    }
}
