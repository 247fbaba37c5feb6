//! End-to-end resolution against an instrumented palette.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use stylestack::{
    Attributes, ColorSelector, PaletteBackend, PaletteConfig, SetupReport, StackResolver,
    StyleAttr, StyleBindings, StyleRegistry,
};

/// A palette with a tiny fixed vocabulary that counts every lookup.
#[derive(Debug, Default)]
struct CountingPalette {
    colors: Mutex<HashMap<String, u32>>,
    lookups: AtomicUsize,
}

impl CountingPalette {
    fn new() -> Self {
        let palette = Self::default();
        palette.remap("red", 7);
        palette.remap("blue", 9);
        palette
    }

    fn remap(&self, name: &str, selector: u32) {
        self.colors
            .lock()
            .unwrap()
            .insert(name.to_string(), selector);
    }

    fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl PaletteBackend for CountingPalette {
    fn initialize(&mut self, _config: &PaletteConfig) -> SetupReport {
        SetupReport::default()
    }

    fn color_selector(&self, name: &str) -> Option<ColorSelector> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.colors
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .map(ColorSelector::new)
    }

    fn attribute_bits(&self, name: &str) -> Option<Attributes> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match name {
            "bold" => Some(Attributes::from_bits_retain(0x10)),
            "underline" => Some(Attributes::from_bits_retain(0x20)),
            _ => None,
        }
    }

    fn names(&self) -> Vec<String> {
        let mut names = vec!["bold".to_string(), "underline".to_string()];
        names.extend(self.colors.lock().unwrap().keys().cloned());
        names
    }
}

fn resolver() -> StackResolver<CountingPalette, StyleBindings> {
    let bindings = StyleBindings::new()
        .bind("base", "red")
        .bind("sel", "bold")
        .bind("alt", "blue underline")
        .bind("hidden", "");
    StackResolver::new(StyleRegistry::new(CountingPalette::new(), bindings))
}

#[test]
fn test_selection_over_base() {
    let resolver = resolver();
    let cell = resolver.resolve_stack(&["sel", "base"]);

    assert_eq!(cell.color(), ColorSelector::new(7));
    assert_eq!(cell.attributes().bits(), 0x10);
    assert_eq!(cell.packed(), 0x17);
}

#[test]
fn test_empty_binding_at_tail_is_inert() {
    let resolver = resolver();
    let without = resolver.resolve_stack(&["sel", "base"]);
    let with = resolver.resolve_stack(&["sel", "base", "hidden"]);
    assert_eq!(without, with);
}

#[test]
fn test_first_in_stack_wins_ties() {
    let resolver = resolver();
    let base_first = resolver.resolve_stack(&["base", "alt"]);
    let alt_first = resolver.resolve_stack(&["alt", "base"]);

    assert_eq!(base_first.color(), ColorSelector::new(7));
    assert_eq!(alt_first.color(), ColorSelector::new(9));
    assert_eq!(base_first.attributes(), alt_first.attributes());
}

#[test]
fn test_repeated_stack_never_reaches_backend() {
    let resolver = resolver();
    let first = resolver.resolve_stack(&["sel", "base", "alt"]);
    let lookups = resolver.registry().palette().lookups();
    assert!(lookups > 0);

    let second = resolver.resolve_stack(&["sel", "base", "alt"]);
    assert_eq!(first, second);
    assert_eq!(resolver.registry().palette().lookups(), lookups);
}

#[test]
fn test_new_stack_reuses_registry_entries() {
    let resolver = resolver();
    resolver.resolve_stack(&["sel", "base"]);
    let lookups = resolver.registry().palette().lookups();

    resolver.resolve_stack(&["base", "sel"]);
    assert_eq!(resolver.registry().palette().lookups(), lookups);
    assert_eq!(resolver.cached_len(), 2);
}

#[test]
fn test_clear_cache_picks_up_remapped_color() {
    let resolver = resolver();
    assert_eq!(
        resolver.resolve_stack(&["sel", "base"]).color(),
        ColorSelector::new(7)
    );

    resolver.registry().palette().remap("red", 12);
    assert_eq!(
        resolver.resolve_stack(&["sel", "base"]).color(),
        ColorSelector::new(7)
    );

    resolver.clear_cache();
    assert_eq!(
        resolver.resolve_stack(&["sel", "base"]).color(),
        ColorSelector::new(12)
    );
}

#[test]
fn test_unknown_tokens_are_tolerated() {
    let resolver = resolver();
    let attr = resolver
        .registry()
        .parse_style_string("bold unknownColor123", 0);
    assert_eq!(attr.attributes().bits(), 0x10);
    assert!(!attr.has_color());
}

#[test]
fn test_describe_falls_back_to_raw_selector() {
    let resolver = resolver();
    let cell = resolver.resolve_stack(&["base"]);
    assert_eq!(cell.describe(resolver.registry().palette()), "7 7");
}

#[test]
fn test_concurrent_resolution_is_consistent() {
    let resolver = resolver();
    let stacks: [&[&str]; 3] = [&["sel", "base"], &["alt", "base"], &["base", "alt", "sel"]];

    let results: Vec<Vec<StyleAttr>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    stacks
                        .iter()
                        .map(|stack| resolver.resolve_stack(*stack))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(resolver.cached_len(), 3);
}
