//! Folding ordered style stacks into one attribute.

use tracing::debug;

use super::cache::StyleCache;
use super::registry::StyleRegistry;
use crate::attr::StyleAttr;
use crate::config::StyleConfig;
use crate::palette::PaletteBackend;

/// Cache key for a resolved stack: the exact ordered sequence of names.
///
/// Two stacks holding the same names in a different order are different
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackKey(Box<[String]>);

impl StackKey {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self(names.iter().map(|name| name.as_ref().to_string()).collect())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// Resolves stacks of style names into a single [`StyleAttr`].
///
/// A stack lists the styles that apply to one screen region, most specific
/// first: for example `["color_cursor", "color_selected_row",
/// "color_default"]`. Each name is resolved through the owned
/// [`StyleRegistry`] and folded left to right with [`StyleAttr::compose`],
/// starting from [`StyleAttr::identity`]. Every name is resolved at
/// precedence 0, so on equal footing the first color in the stack wins while
/// attributes from every entry accumulate.
///
/// Results are memoized per exact stack. The stack cache and the registry
/// cache are always cleared together.
///
/// # Example
///
/// ```rust
/// use stylestack::config::StyleBindings;
/// use stylestack::palette::{PaletteBackend, PaletteConfig, TablePalette};
/// use stylestack::{Attributes, StackResolver, StyleRegistry};
///
/// let (palette, _) = TablePalette::with_config(&PaletteConfig::default());
/// let bindings = StyleBindings::new()
///     .bind("color_default", "white")
///     .bind("color_selected_row", "reverse");
/// let resolver = StackResolver::new(StyleRegistry::new(palette, bindings));
///
/// let cell = resolver.resolve_stack(&["color_selected_row", "color_default"]);
/// let white = resolver.registry().palette().color_selector("white").unwrap();
/// assert_eq!(cell.color(), white);
/// assert!(cell.attributes().contains(Attributes::REVERSE));
/// ```
#[derive(Debug)]
pub struct StackResolver<P, C> {
    registry: StyleRegistry<P, C>,
    cache: StyleCache<StackKey>,
}

impl<P: PaletteBackend, C: StyleConfig> StackResolver<P, C> {
    pub fn new(registry: StyleRegistry<P, C>) -> Self {
        Self {
            registry,
            cache: StyleCache::new(),
        }
    }

    /// Resolves an ordered stack of option names or literal style strings.
    ///
    /// Never fails: names that resolve to nothing leave the result
    /// unchanged, and an empty stack yields [`StyleAttr::identity`].
    pub fn resolve_stack<S: AsRef<str>>(&self, names: &[S]) -> StyleAttr {
        let key = StackKey::new(names);
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let resolved = names.iter().fold(StyleAttr::identity(), |acc, name| {
            acc.compose(self.registry.resolve_named_style(name.as_ref(), 0))
        });
        debug!(stack = ?key.names(), %resolved, "resolved style stack");
        self.cache.insert(key, resolved);
        resolved
    }

    /// Resolves a stack and returns the packed word for the renderer.
    pub fn resolve_packed<S: AsRef<str>>(&self, names: &[S]) -> u32 {
        self.resolve_stack(names).packed()
    }

    /// Clears the stack cache and the registry cache.
    pub fn clear_cache(&self) {
        let dropped = self.cache.clear();
        debug!(dropped, "cleared style stack cache");
        self.registry.clear_cache();
    }

    /// Gives mutable access to the palette and the bindings, then clears
    /// both caches.
    pub fn reconfigure<R>(&mut self, update: impl FnOnce(&mut P, &mut C) -> R) -> R {
        let result = self.registry.reconfigure(update);
        self.clear_cache();
        result
    }

    pub fn registry(&self) -> &StyleRegistry<P, C> {
        &self.registry
    }

    /// Number of memoized stacks.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
