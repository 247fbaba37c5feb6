//! Style string parsing and per-option memoization.

use tracing::debug;

use super::cache::StyleCache;
use crate::attr::StyleAttr;
use crate::config::StyleConfig;
use crate::palette::PaletteBackend;

/// Translates style strings into [`StyleAttr`] values and memoizes them by
/// option name.
///
/// A style string is a whitespace-separated list of color and attribute
/// names, e.g. `"bold underline red"`. Options are looked up in the
/// [`StyleConfig`]; an option with no binding is parsed as a style string
/// itself, so callers may pass either `"color_error"` or `"red bold"`.
///
/// Cached entries hold style content only. The precedence passed to
/// [`resolve_named_style`](Self::resolve_named_style) is stamped onto the
/// returned value, so one cached entry serves every precedence.
///
/// # Example
///
/// ```rust
/// use stylestack::config::StyleBindings;
/// use stylestack::palette::{PaletteConfig, TablePalette};
/// use stylestack::{Attributes, StyleRegistry};
///
/// let (palette, _) = TablePalette::with_config(&PaletteConfig::default());
/// let bindings = StyleBindings::new().bind("color_error", "red bold");
/// let registry = StyleRegistry::new(palette, bindings);
///
/// let error = registry.resolve_named_style("color_error", 2);
/// assert!(error.has_color());
/// assert!(error.attributes().contains(Attributes::BOLD));
/// assert_eq!(error.precedence(), 2);
/// ```
#[derive(Debug)]
pub struct StyleRegistry<P, C> {
    palette: P,
    config: C,
    cache: StyleCache<String>,
}

impl<P: PaletteBackend, C: StyleConfig> StyleRegistry<P, C> {
    /// Creates a registry over an initialized palette and a binding store.
    pub fn new(palette: P, config: C) -> Self {
        Self {
            palette,
            config,
            cache: StyleCache::new(),
        }
    }

    /// Parses a style string at the given precedence.
    ///
    /// The first known color wins; later colors in the same string are
    /// ignored. Attributes accumulate. Unknown tokens are skipped, so this
    /// never fails: a string with no known token yields an empty style.
    pub fn parse_style_string(&self, text: &str, precedence: i32) -> StyleAttr {
        let mut attr = StyleAttr::empty(precedence);
        for token in text.split_whitespace() {
            if let Some(color) = self.palette.color_selector(token) {
                if !attr.has_color() {
                    attr = attr.with_color(color);
                }
            } else if let Some(bits) = self.palette.attribute_bits(token) {
                attr = attr.with_attributes(bits);
            }
        }
        attr
    }

    /// Resolves an option name, or a literal style string, at `precedence`.
    pub fn resolve_named_style(&self, option: &str, precedence: i32) -> StyleAttr {
        if let Some(cached) = self.cache.get(option) {
            return cached.with_precedence(precedence);
        }

        let text = self.config.style_binding(option).unwrap_or(option);
        let attr = self.parse_style_string(text, 0);
        debug!(option, style = text, "resolved style option");
        self.cache.insert(option.to_string(), attr);
        attr.with_precedence(precedence)
    }

    /// Drops every memoized option.
    ///
    /// Must be called whenever the palette or the bindings change, otherwise
    /// stale selectors keep being served.
    pub fn clear_cache(&self) {
        let dropped = self.cache.clear();
        debug!(dropped, "cleared style registry cache");
    }

    /// Gives mutable access to the palette and the bindings, then clears the
    /// cache.
    pub fn reconfigure<R>(&mut self, update: impl FnOnce(&mut P, &mut C) -> R) -> R {
        let result = update(&mut self.palette, &mut self.config);
        self.clear_cache();
        result
    }

    pub fn palette(&self) -> &P {
        &self.palette
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Number of memoized options.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
