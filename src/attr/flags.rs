//! Text attribute flags.

use bitflags::bitflags;

bitflags! {
    /// Text attributes carried by a [`StyleAttr`](super::StyleAttr).
    ///
    /// The named constants follow the bit layout of [`TablePalette`]; other
    /// backends may hand out any bits they like, as long as they stay clear of
    /// the bits they use for color selectors. Such foreign bits are kept
    /// verbatim through [`Attributes::from_bits_retain`].
    ///
    /// [`TablePalette`]: crate::palette::TablePalette
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u32 {
        const STANDOUT = 1 << 24;
        const UNDERLINE = 1 << 25;
        const REVERSE = 1 << 26;
        const BLINK = 1 << 27;
        const DIM = 1 << 28;
        const BOLD = 1 << 29;

        const _ = !0;
    }
}

/// Attribute names understood in style strings, paired with their flags.
///
/// `normal` is accepted as a token but contributes no bits.
pub const ATTRIBUTE_NAMES: &[(&str, Attributes)] = &[
    ("normal", Attributes::empty()),
    ("blink", Attributes::BLINK),
    ("bold", Attributes::BOLD),
    ("dim", Attributes::DIM),
    ("reverse", Attributes::REVERSE),
    ("standout", Attributes::STANDOUT),
    ("underline", Attributes::UNDERLINE),
];

impl Attributes {
    /// Names of every known attribute fully contained in `self`.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        ATTRIBUTE_NAMES
            .iter()
            .filter(move |(_, bits)| !bits.is_empty() && self.contains(*bits))
            .map(|(name, _)| *name)
    }
}
