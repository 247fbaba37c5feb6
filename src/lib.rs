//! # Stylestack - precedence-aware terminal style resolution
//!
//! Stylestack turns symbolic style names into the single attribute word a
//! terminal renderer applies to a cell. Many independent rules (base theme,
//! row selection, column highlight, error state, cursor) can each contribute
//! part of a style to the same cell; stylestack merges them deterministically
//! and caches the result.
//!
//! ## Concepts
//!
//! - **Style string**: space-separated color and attribute names, `"bold red"`
//! - **Option**: a name bound to a style string in [`config::StyleBindings`]
//! - **Stack**: an ordered list of options for one region, most specific first
//! - **Precedence**: decides whose *color* wins; attributes always accumulate
//!
//! ## Quick start
//!
//! ```rust
//! use stylestack::config::{SessionConfig, StyleBindings};
//! use stylestack::{Attributes, StyleSession};
//!
//! let config = SessionConfig {
//!     styles: StyleBindings::new()
//!         .bind("color_default", "white")
//!         .bind("color_selected_row", "reverse")
//!         .bind("color_key_col", "cyan underline"),
//!     ..SessionConfig::default()
//! };
//! let (session, _report) = StyleSession::new(config);
//!
//! let cell = session.resolve_stack(&["color_selected_row", "color_key_col", "color_default"]);
//! assert!(cell.attributes().contains(Attributes::REVERSE | Attributes::UNDERLINE));
//! assert!(session.describe(cell).starts_with("reverse underline cyan"));
//! ```
//!
//! ## Merge rule
//!
//! [`StyleAttr::compose`] ORs attribute flags together. The incoming color
//! replaces the current one only when there is no current color or the
//! incoming precedence is strictly higher. A stack is folded left to right
//! from [`StyleAttr::identity`], so on equal precedence the first color wins.
//!
//! ## Caching
//!
//! [`StyleRegistry`] memoizes per option and [`StackResolver`] per exact
//! stack. Call [`StackResolver::clear_cache`] (or reconfigure through the
//! resolver or the session) whenever the palette or bindings change.
//!
//! ## Backends
//!
//! The core talks to the terminal only through [`palette::PaletteBackend`].
//! [`palette::TablePalette`] is a pair-table implementation that can also
//! render composed styles through `console`.

pub mod attr;
pub mod config;
pub mod palette;
pub mod resolve;
mod session;

pub use attr::{Attributes, ColorSelector, StyleAttr, IDENTITY_PRECEDENCE};
pub use config::{ConfigError, SessionConfig, StyleBindings, StyleConfig};
pub use palette::{PaletteBackend, PaletteConfig, SetupError, SetupReport, TablePalette};
pub use resolve::{StackKey, StackResolver, StyleRegistry};
pub use session::StyleSession;
