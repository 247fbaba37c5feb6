//! Non-fatal palette setup failures.

use thiserror::Error;

/// A single color that could not be set up during palette initialization.
///
/// These never abort initialization: the affected color is left out of the
/// palette and any style naming it simply contributes no color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The terminal has fewer color pairs than the palette asked for.
    #[error("color {color} needs pair {pair}, but only {max_pairs} pairs are available")]
    PairOutOfRange { color: u16, pair: u32, max_pairs: u32 },
}

/// Outcome of [`PaletteBackend::initialize`](super::PaletteBackend::initialize).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    /// Number of colors registered.
    pub initialized: usize,
    /// Colors that were skipped, in the order they were attempted.
    pub failures: Vec<SetupError>,
}

impl SetupReport {
    /// Returns true if every requested color was set up.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
