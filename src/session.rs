//! Session facade tying a palette, bindings and the resolver together.

use tracing::info;

use crate::attr::StyleAttr;
use crate::config::{SessionConfig, StyleBindings};
use crate::palette::{PaletteBackend, SetupReport, TablePalette};
use crate::resolve::{StackResolver, StyleRegistry};

/// One rendering session's styling state.
///
/// Owns a [`TablePalette`], the [`StyleBindings`] and the caches built on
/// top of them. Create one per terminal session and hand out references.
///
/// # Example
///
/// ```rust
/// use stylestack::config::{SessionConfig, StyleBindings};
/// use stylestack::StyleSession;
///
/// let config = SessionConfig {
///     styles: StyleBindings::new()
///         .bind("color_default", "white")
///         .bind("color_error", "red bold"),
///     ..SessionConfig::default()
/// };
/// let (session, report) = StyleSession::new(config);
/// assert!(report.is_complete());
///
/// let cell = session.resolve_stack(&["color_error", "color_default"]);
/// assert_eq!(session.describe(cell), format!("bold red {:X}", cell.packed()));
/// ```
#[derive(Debug)]
pub struct StyleSession {
    resolver: StackResolver<TablePalette, StyleBindings>,
}

impl StyleSession {
    /// Initializes the palette and builds empty caches.
    pub fn new(config: SessionConfig) -> (Self, SetupReport) {
        let (palette, report) = TablePalette::with_config(&config.palette);
        let registry = StyleRegistry::new(palette, config.styles);
        let session = Self {
            resolver: StackResolver::new(registry),
        };
        (session, report)
    }

    /// Resolves an ordered stack of option names, most specific first.
    pub fn resolve_stack<S: AsRef<str>>(&self, names: &[S]) -> StyleAttr {
        self.resolver.resolve_stack(names)
    }

    /// Packed value of a literal style string such as `"bold red"`.
    ///
    /// Literal strings are parsed on every call and never cached.
    pub fn style(&self, text: &str) -> u32 {
        self.resolver
            .registry()
            .parse_style_string(text, 0)
            .packed()
    }

    /// Packed value of a single option, falling back to a literal string.
    pub fn named(&self, option: &str) -> u32 {
        self.resolver
            .registry()
            .resolve_named_style(option, 0)
            .packed()
    }

    /// Every attribute and color name usable in style strings.
    pub fn keys(&self) -> Vec<String> {
        self.resolver.registry().palette().names()
    }

    /// Human-readable rendering of an attribute using this palette's names.
    pub fn describe(&self, attr: StyleAttr) -> String {
        attr.describe(self.resolver.registry().palette())
    }

    /// Resolves `names` and applies the result to `text`.
    pub fn paint<S: AsRef<str>>(&self, text: &str, names: &[S], use_color: bool) -> String {
        let attr = self.resolve_stack(names);
        self.resolver
            .registry()
            .palette()
            .paint(text, attr, use_color)
    }

    /// Reinitializes the palette, swaps in new bindings and clears both
    /// caches.
    pub fn reload(&mut self, config: SessionConfig) -> SetupReport {
        let SessionConfig { palette, styles } = config;
        let report = self.resolver.reconfigure(|table, bindings| {
            *bindings = styles;
            table.initialize(&palette)
        });
        info!(bindings = self.resolver.registry().config().len(), "style session reloaded");
        report
    }

    /// Drops every cached style without changing the configuration.
    pub fn clear_cache(&self) {
        self.resolver.clear_cache();
    }

    pub fn resolver(&self) -> &StackResolver<TablePalette, StyleBindings> {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attributes;
    use crate::palette::PaletteConfig;

    fn session() -> StyleSession {
        let config = SessionConfig {
            styles: StyleBindings::new()
                .bind("color_default", "white")
                .bind("color_error", "red bold")
                .bind("color_selected_row", "reverse"),
            ..SessionConfig::default()
        };
        StyleSession::new(config).0
    }

    #[test]
    fn test_style_parses_literal() {
        let session = session();
        let palette = session.resolver().registry().palette();
        let expected = palette.color_selector("green").unwrap().bits() | Attributes::DIM.bits();
        assert_eq!(session.style("dim green"), expected);
        assert_eq!(session.resolver().registry().cached_len(), 0);
    }

    #[test]
    fn test_named_matches_literal_when_bound() {
        let session = session();
        assert_eq!(session.named("color_error"), session.style("red bold"));
    }

    #[test]
    fn test_keys_include_attributes_and_colors() {
        let keys = session().keys();
        assert!(keys.contains(&"bold".to_string()));
        assert!(keys.contains(&"cyan".to_string()));
        assert!(keys.contains(&"0".to_string()));
    }

    #[test]
    fn test_describe_unknown_color_shows_raw_selector() {
        let session = session();
        let attr = StyleAttr::new(TablePalette::pair_selector(90), Attributes::empty(), 0);
        assert_eq!(session.describe(attr), format!("{} {:X}", 90 << 8, 90 << 8));
    }

    #[test]
    fn test_paint_resolves_stack() {
        let session = session();
        let output = session.paint("row", &["color_selected_row", "color_default"], true);
        assert!(output.contains("\x1b[7m"));
        assert!(output.contains("38;5;7"));
        assert_eq!(
            session.paint("row", &["color_selected_row"], false),
            "row"
        );
    }

    #[test]
    fn test_reload_swaps_bindings_and_palette() {
        let mut session = session();
        session.resolve_stack(&["color_default"]);

        let report = session.reload(SessionConfig {
            palette: PaletteConfig {
                force_256_colors: true,
                ..PaletteConfig::default()
            },
            styles: StyleBindings::new().bind("color_default", "200"),
        });

        assert_eq!(report.initialized, 256);
        let cell = session.resolve_stack(&["color_default"]);
        assert_eq!(
            Some(cell.color()),
            session.resolver().registry().palette().color_selector("200")
        );
    }
}
