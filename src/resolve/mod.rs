//! Style resolution: option names to styles, style stacks to one style.
//!
//! - [`StyleRegistry`]: parses style strings and memoizes them per option
//! - [`StackResolver`]: folds ordered stacks and memoizes them per stack
//!
//! Both caches are plain maps behind read-mostly locks, with an explicit
//! `clear_cache` that must follow any palette or binding change.

mod cache;
mod registry;
mod stack;

pub use registry::StyleRegistry;
pub use stack::{StackKey, StackResolver};
