//! Pair-table palette backend.

use std::collections::HashMap;

use tracing::{info, warn};

use super::{PaletteBackend, PaletteConfig, SetupError, SetupReport};
use crate::attr::{Attributes, ColorSelector, ATTRIBUTE_NAMES};

/// Color pairs are stored shifted left by this many bits.
pub const PAIR_SHIFT: u32 = 8;

/// Bits of a packed word holding the color pair.
///
/// Kept clear of every [`Attributes`] flag.
pub const COLOR_MASK: u32 = 0x00ff_ff00;

/// Named colors and their terminal color indices.
pub const NAMED_COLORS: &[(&str, u16)] = &[
    ("red", 1),
    ("green", 2),
    ("yellow", 3),
    ("blue", 4),
    ("magenta", 5),
    ("cyan", 6),
    ("white", 7),
];

/// Background used for every registered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// Whatever the terminal draws by default.
    #[default]
    TerminalDefault,
    Black,
}

/// A palette backed by a table of color pairs.
///
/// Pair `0` is the terminal's default pair and doubles as "no color": the
/// name `black` maps to it. Color `n` gets pair `n + 1`, foreground `n` on
/// the configured [`Background`]. Pairs the terminal cannot hold are skipped
/// and reported in the [`SetupReport`].
///
/// # Example
///
/// ```rust
/// use stylestack::palette::{PaletteBackend, PaletteConfig, TablePalette};
///
/// let mut palette = TablePalette::new();
/// let report = palette.initialize(&PaletteConfig::default());
/// assert!(report.is_complete());
///
/// let red = palette.color_selector("red").unwrap();
/// assert_eq!(palette.color_name(red), Some("red"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TablePalette {
    colors: HashMap<String, ColorSelector>,
    reverse: HashMap<ColorSelector, String>,
    foregrounds: HashMap<u32, u8>,
    background: Background,
}

impl TablePalette {
    /// Creates an empty palette. Nothing resolves until it is initialized.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and initializes a palette in one step.
    pub fn with_config(config: &PaletteConfig) -> (Self, SetupReport) {
        let mut palette = Self::new();
        let report = palette.initialize(config);
        (palette, report)
    }

    /// The selector for a pair number.
    pub const fn pair_selector(pair: u32) -> ColorSelector {
        ColorSelector::new((pair << PAIR_SHIFT) & COLOR_MASK)
    }

    /// The pair number encoded in a selector.
    pub const fn pair_of(selector: ColorSelector) -> u32 {
        (selector.bits() & COLOR_MASK) >> PAIR_SHIFT
    }

    /// Foreground color index of a registered pair.
    pub fn foreground(&self, selector: ColorSelector) -> Option<u8> {
        self.foregrounds.get(&Self::pair_of(selector)).copied()
    }

    pub fn background(&self) -> Background {
        self.background
    }

    fn register(&mut self, name: String, selector: ColorSelector) {
        self.reverse.insert(selector, name.clone());
        self.colors.insert(name, selector);
    }
}

impl PaletteBackend for TablePalette {
    fn initialize(&mut self, config: &PaletteConfig) -> SetupReport {
        self.colors.clear();
        self.reverse.clear();
        self.foregrounds.clear();
        self.background = if config.use_default_colors {
            Background::TerminalDefault
        } else {
            Background::Black
        };

        let mut report = SetupReport::default();
        self.colors.insert("black".to_string(), ColorSelector::UNSET);

        let count = if config.force_256_colors {
            256
        } else {
            config.colors.min(256)
        };

        for color in 0..count {
            let pair = u32::from(color) + 1;
            if pair >= config.max_pairs {
                let failure = SetupError::PairOutOfRange {
                    color,
                    pair,
                    max_pairs: config.max_pairs,
                };
                warn!(%failure, "skipping color");
                report.failures.push(failure);
                continue;
            }
            // count never exceeds 256, so every index fits in a u8
            self.foregrounds.insert(pair, color as u8);
            self.register(color.to_string(), Self::pair_selector(pair));
            report.initialized += 1;
        }

        for (name, index) in NAMED_COLORS {
            let pair = u32::from(*index) + 1;
            if self.foregrounds.contains_key(&pair) {
                self.register((*name).to_string(), Self::pair_selector(pair));
            }
        }

        info!(
            colors = report.initialized,
            skipped = report.failures.len(),
            background = ?self.background,
            "palette initialized"
        );
        report
    }

    fn color_selector(&self, name: &str) -> Option<ColorSelector> {
        self.colors.get(name).copied()
    }

    fn attribute_bits(&self, name: &str) -> Option<Attributes> {
        ATTRIBUTE_NAMES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, bits)| *bits)
    }

    fn color_name(&self, selector: ColorSelector) -> Option<&str> {
        self.reverse.get(&selector).map(String::as_str)
    }

    fn names(&self) -> Vec<String> {
        let mut colors: Vec<String> = self.colors.keys().cloned().collect();
        colors.sort_unstable();
        ATTRIBUTE_NAMES
            .iter()
            .map(|(name, _)| (*name).to_string())
            .chain(colors)
            .collect()
    }
}
