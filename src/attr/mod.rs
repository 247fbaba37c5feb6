//! Style values and the merge rule.
//!
//! - [`StyleAttr`]: one composed style (color selector, attributes, precedence)
//! - [`ColorSelector`]: an opaque backend color token
//! - [`Attributes`]: the text-attribute bitset
//!
//! Colors and attributes live in disjoint bit ranges, so a [`StyleAttr`] can
//! always be packed into a single word for the renderer.

mod flags;
mod value;

pub use flags::{Attributes, ATTRIBUTE_NAMES};
pub use value::{ColorSelector, StyleAttr, IDENTITY_PRECEDENCE};
