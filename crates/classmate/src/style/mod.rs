//! Inline style handling.
//!
//! This module provides the style primitives used while rendering:
//!
//! - [`StyleDefinition`]: property setters whose values are literals or
//!   functions of props
//! - [`StyleSource`]: a component's style metadata, static or prop-derived
//! - [`StyleSink`]: the per-render collector filled by `style(...)` calls
//!   made from interpolations
//! - [`StyleMap`]: the resolved, hyphenated property map handed to elements
//!
//! Property names are accepted in camel case (`fontSize`) and emitted in
//! CSS form (`font-size`). Custom properties (`--accent`) pass through.

mod definition;
mod sink;

pub use definition::{StyleDefinition, StyleEntry, StyleSource, StyleValue};
pub use sink::StyleSink;

use std::collections::BTreeMap;

/// Resolved inline style: hyphenated property name to value.
pub type StyleMap = BTreeMap<String, String>;

/// Converts a camel-case property name to its CSS form.
///
/// Names starting with `--` are custom properties and are returned as-is.
///
/// ```rust
/// use classmate::style::to_kebab_case;
///
/// assert_eq!(to_kebab_case("outlineColor"), "outline-color");
/// assert_eq!(to_kebab_case("--brandColor"), "--brandColor");
/// assert_eq!(to_kebab_case("color"), "color");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    if out.starts_with('-') {
        out.remove(0);
    }
    out.to_lowercase()
}

/// Normalizes a caller-supplied inline style map to CSS property names.
pub fn normalize_inline_style(style: &StyleMap) -> StyleMap {
    style
        .iter()
        .map(|(name, value)| (to_kebab_case(name), value.clone()))
        .collect()
}
