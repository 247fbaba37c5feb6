//! Palette backends: mapping color and attribute names to numeric tokens.
//!
//! This module provides:
//!
//! - [`PaletteBackend`]: the trait the resolution core calls into
//! - [`PaletteConfig`]: terminal-facing setup options
//! - [`TablePalette`]: a pair-table backend in the curses mould
//! - [`SetupReport`] / [`SetupError`]: non-fatal initialization failures
//!
//! The core never assumes a color count or a bit layout. It only relies on
//! each name mapping to a stable token for the life of a session, and on
//! color tokens staying clear of attribute bits.

mod error;
mod paint;
mod table;

use serde::{Deserialize, Serialize};

use crate::attr::{Attributes, ColorSelector};

pub use error::{SetupError, SetupReport};
pub use table::{Background, TablePalette, COLOR_MASK, NAMED_COLORS, PAIR_SHIFT};

/// Terminal setup options read from the session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Use the terminal's own default background instead of black.
    pub use_default_colors: bool,
    /// Register 256 numbered colors regardless of `colors`.
    pub force_256_colors: bool,
    /// Number of colors the terminal reports.
    pub colors: u16,
    /// Number of color pairs the terminal can hold, pair 0 included.
    pub max_pairs: u32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            use_default_colors: true,
            force_256_colors: false,
            colors: 8,
            max_pairs: 32767,
        }
    }
}

/// Resolves symbolic color and attribute names to numeric tokens.
///
/// Implementations own whatever terminal-specific setup is needed and build
/// their name tables in [`initialize`](PaletteBackend::initialize). Lookups
/// must be cheap and stable until the next initialization.
pub trait PaletteBackend {
    /// Builds the name tables. Calling it again rebuilds them from scratch.
    fn initialize(&mut self, config: &PaletteConfig) -> SetupReport;

    /// The selector for a color name, if the palette knows it.
    fn color_selector(&self, name: &str) -> Option<ColorSelector>;

    /// The bits for an attribute name, if the palette knows it.
    fn attribute_bits(&self, name: &str) -> Option<Attributes>;

    /// Reverse lookup used for diagnostics.
    fn color_name(&self, _selector: ColorSelector) -> Option<&str> {
        None
    }

    /// Names of the attributes set in `attributes`, for diagnostics.
    fn attribute_names(&self, attributes: Attributes) -> Vec<String> {
        attributes.names().map(str::to_string).collect()
    }

    /// Every attribute and color name the palette accepts.
    fn names(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_config_defaults() {
        let config = PaletteConfig::default();
        assert!(config.use_default_colors);
        assert!(!config.force_256_colors);
        assert_eq!(config.colors, 8);
    }

    #[test]
    fn test_palette_config_partial_yaml() {
        let config: PaletteConfig = serde_yaml::from_str("force_256_colors: true").unwrap();
        assert!(config.force_256_colors);
        assert!(config.use_default_colors);
        assert_eq!(config.max_pairs, 32767);
    }
}
