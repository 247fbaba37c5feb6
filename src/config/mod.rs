//! Style bindings and session configuration.
//!
//! A style binding maps an option name such as `color_selected_row` to a
//! style string such as `"reverse blue"`. The resolution core only reads
//! bindings through [`StyleConfig`]; [`StyleBindings`] is the map-backed
//! implementation loaded from YAML.
//!
//! ```yaml
//! palette:
//!   use_default_colors: false
//!   colors: 256
//! styles:
//!   color_default: normal
//!   color_selected_row: reverse
//!   color_error: red bold
//! ```

mod error;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::palette::PaletteConfig;

pub use error::ConfigError;

/// Read-only source of style strings keyed by option name.
pub trait StyleConfig {
    /// The style string bound to `option`, if any.
    fn style_binding(&self, option: &str) -> Option<&str>;
}

impl StyleConfig for BTreeMap<String, String> {
    fn style_binding(&self, option: &str) -> Option<&str> {
        self.get(option).map(String::as_str)
    }
}

impl StyleConfig for std::collections::HashMap<String, String> {
    fn style_binding(&self, option: &str) -> Option<&str> {
        self.get(option).map(String::as_str)
    }
}

/// Option name to style string bindings.
///
/// # Example
///
/// ```rust
/// use stylestack::config::{StyleBindings, StyleConfig};
///
/// let bindings = StyleBindings::new()
///     .bind("color_error", "red bold")
///     .bind("color_note", "dim");
///
/// assert_eq!(bindings.style_binding("color_error"), Some("red bold"));
/// assert_eq!(bindings.style_binding("color_missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleBindings {
    bindings: BTreeMap<String, String>,
}

impl StyleBindings {
    /// Creates an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding, returning the updated set for chaining.
    pub fn bind(mut self, option: impl Into<String>, style: impl Into<String>) -> Self {
        self.set(option, style);
        self
    }

    /// Adds or replaces a binding in place.
    pub fn set(&mut self, option: impl Into<String>, style: impl Into<String>) {
        self.bindings.insert(option.into(), style.into());
    }

    /// Removes a binding, returning the style string it held.
    pub fn unset(&mut self, option: &str) -> Option<String> {
        self.bindings.remove(option)
    }

    /// Parses bindings from a flat YAML mapping.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over `(option, style)` pairs in option order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(option, style)| (option.as_str(), style.as_str()))
    }
}

impl StyleConfig for StyleBindings {
    fn style_binding(&self, option: &str) -> Option<&str> {
        self.bindings.get(option).map(String::as_str)
    }
}

/// Everything a style session needs: palette setup plus style bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub palette: PaletteConfig,
    pub styles: StyleBindings,
}

impl SessionConfig {
    /// Parses a session configuration from YAML. Missing sections take
    /// their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }
}
