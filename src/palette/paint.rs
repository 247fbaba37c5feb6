//! Rendering composed attributes through `console`.

use console::Style;

use super::{Background, TablePalette};
use crate::attr::{Attributes, StyleAttr};

impl TablePalette {
    /// Converts a composed attribute into a [`console::Style`].
    ///
    /// The foreground comes from the attribute's color pair; a pair the
    /// palette does not know leaves the foreground untouched. `standout` is
    /// drawn as reverse bold.
    pub fn console_style(&self, attr: StyleAttr) -> Style {
        let mut style = Style::new();

        if let Some(fg) = self.foreground(attr.color()) {
            style = style.color256(fg);
            if self.background() == Background::Black {
                style = style.on_black();
            }
        }

        let flags = attr.attributes();
        if flags.contains(Attributes::BOLD) {
            style = style.bold();
        }
        if flags.contains(Attributes::DIM) {
            style = style.dim();
        }
        if flags.contains(Attributes::UNDERLINE) {
            style = style.underlined();
        }
        if flags.contains(Attributes::BLINK) {
            style = style.blink();
        }
        if flags.contains(Attributes::REVERSE) {
            style = style.reverse();
        }
        if flags.contains(Attributes::STANDOUT) {
            style = style.reverse().bold();
        }
        style
    }

    /// Applies `attr` to `text`.
    ///
    /// With `use_color` false the text is returned unchanged.
    pub fn paint(&self, text: &str, attr: StyleAttr, use_color: bool) -> String {
        if !use_color {
            return text.to_string();
        }
        self.console_style(attr)
            .force_styling(true)
            .apply_to(text)
            .to_string()
    }
}
