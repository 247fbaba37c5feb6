//! The composed style value and its merge rule.

use std::fmt;

use super::flags::Attributes;
use crate::palette::PaletteBackend;

/// Precedence of the empty style every stack resolution starts from.
///
/// It sits below any real contributor so the first color seen always wins.
pub const IDENTITY_PRECEDENCE: i32 = -1;

/// An opaque color selector handed out by a [`PaletteBackend`].
///
/// A selector of `0` means "no color": it never overrides anything when
/// styles are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ColorSelector(u32);

impl ColorSelector {
    /// The "no color" sentinel.
    pub const UNSET: ColorSelector = ColorSelector(0);

    /// Wraps a raw selector value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw selector bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true for the "no color" sentinel.
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

/// One composed style: a color selector, text attributes and a precedence.
///
/// Values are cheap to copy and every operation returns a new value. Two
/// styles are merged with [`StyleAttr::compose`]: attributes always
/// accumulate, while the color goes to whichever side holds the higher
/// precedence.
///
/// # Example
///
/// ```rust
/// use stylestack::{Attributes, ColorSelector, StyleAttr};
///
/// let stripe = StyleAttr::new(ColorSelector::new(0x300), Attributes::empty(), 0);
/// let selected = StyleAttr::new(ColorSelector::new(0x500), Attributes::BOLD, 1);
///
/// let cell = stripe.compose(selected);
/// assert_eq!(cell.color(), ColorSelector::new(0x500));
/// assert!(cell.attributes().contains(Attributes::BOLD));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleAttr {
    color: ColorSelector,
    attributes: Attributes,
    precedence: i32,
}

impl StyleAttr {
    /// Creates a style from its parts.
    pub const fn new(color: ColorSelector, attributes: Attributes, precedence: i32) -> Self {
        Self {
            color,
            attributes,
            precedence,
        }
    }

    /// The neutral starting point of a stack fold: no color, no attributes
    /// and [`IDENTITY_PRECEDENCE`].
    pub const fn identity() -> Self {
        Self::empty(IDENTITY_PRECEDENCE)
    }

    /// A style contributing nothing, at the given precedence.
    pub const fn empty(precedence: i32) -> Self {
        Self::new(ColorSelector::UNSET, Attributes::empty(), precedence)
    }

    /// Splits a packed word into color and attributes using `color_mask`.
    ///
    /// Bits inside the mask become the color selector, everything else the
    /// attributes.
    pub const fn from_packed(packed: u32, color_mask: u32, precedence: i32) -> Self {
        Self::new(
            ColorSelector(packed & color_mask),
            Attributes::from_bits_retain(packed & !color_mask),
            precedence,
        )
    }

    pub const fn color(&self) -> ColorSelector {
        self.color
    }

    pub const fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub const fn precedence(&self) -> i32 {
        self.precedence
    }

    /// Returns true if this style carries a color.
    pub const fn has_color(&self) -> bool {
        !self.color.is_unset()
    }

    /// Returns a copy with the color replaced.
    pub const fn with_color(mut self, color: ColorSelector) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy with extra attribute bits set.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes |= attributes;
        self
    }

    /// Returns a copy with the precedence replaced.
    pub const fn with_precedence(mut self, precedence: i32) -> Self {
        self.precedence = precedence;
        self
    }

    /// The single word a renderer applies: color bits OR attribute bits.
    pub const fn packed(&self) -> u32 {
        self.color.bits() | self.attributes.bits()
    }

    /// Merges `other` into `self` at `other`'s own precedence.
    ///
    /// See [`StyleAttr::compose_at`] for the rule.
    pub fn compose(self, other: StyleAttr) -> StyleAttr {
        self.compose_at(other, other.precedence)
    }

    /// Merges `other` into `self`, treating `other` as ranked `precedence`.
    ///
    /// - Attributes are OR-ed; nothing is ever removed.
    /// - If `self` has no color, or `precedence` is strictly greater than
    ///   `self`'s, the result adopts `precedence` and takes `other`'s color
    ///   when `other` has one.
    /// - Otherwise `self`'s color and precedence are kept.
    ///
    /// Ties keep the left side, so the first contributor in a stack wins.
    pub fn compose_at(self, other: StyleAttr, precedence: i32) -> StyleAttr {
        let mut merged = self;
        merged.attributes |= other.attributes;
        if !merged.has_color() || precedence > merged.precedence {
            if other.has_color() {
                merged.color = other.color;
            }
            merged.precedence = precedence;
        }
        merged
    }

    /// Human-readable rendering using the backend's names.
    ///
    /// Lists the set attribute names and the color name. When none of those
    /// are known the raw selector is shown instead. The packed value follows
    /// in uppercase hex.
    pub fn describe<P: PaletteBackend + ?Sized>(&self, palette: &P) -> String {
        let mut names = palette.attribute_names(self.attributes);
        if let Some(color) = palette.color_name(self.color) {
            names.push(color.to_string());
        }
        render_description(&names, self)
    }
}

impl Default for StyleAttr {
    fn default() -> Self {
        Self::identity()
    }
}

fn render_description(names: &[String], attr: &StyleAttr) -> String {
    let label = if names.is_empty() {
        attr.color.bits().to_string()
    } else {
        names.join(" ")
    };
    format!("{} {:X}", label, attr.packed())
}

impl fmt::Display for StyleAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.attributes.names().map(str::to_string).collect();
        f.write_str(&render_description(&names, self))
    }
}
