//! Utility class-list merging.
//!
//! Utility-first CSS frameworks express one visual property per class
//! (`p-4`, `text-blue-800`, `mt-2`). When class lists from several sources
//! are combined, two classes can target the same property and the browser
//! picks one by stylesheet order rather than by position in the `class`
//! attribute. This crate resolves such conflicts by position instead:
//!
//! - Classes are grouped by the property they set ([`ClassMerger`] owns the
//!   group table). For two classes in the same group, the rightmost wins.
//! - Coarse utilities override earlier fine ones: a later `p-4` removes an
//!   earlier `px-2`, but a later `px-2` keeps an earlier `p-4`.
//! - Variant modifiers (`hover:`, `md:`) and the important marker (`!`)
//!   scope the conflict, so `p-2 hover:p-4` keeps both.
//! - Classes the table does not recognize are kept, deduplicated, in order
//!   of first appearance.
//!
//! # Example
//!
//! ```rust
//! use classmate_merge::merge_class_lists;
//!
//! assert_eq!(merge_class_lists(&["mt-2 mt-8 mt-1", ""]), "mt-1");
//! assert_eq!(merge_class_lists(&["p-4 bg-red", "bg-blue"]), "p-4 bg-blue");
//! assert_eq!(merge_class_lists(&["card px-2", "p-4 card"]), "card p-4");
//! ```

mod groups;
mod merger;
mod parse;

pub use merger::ClassMerger;
pub use parse::{parse_class, ParsedClass};

use once_cell::sync::Lazy;

static DEFAULT_MERGER: Lazy<ClassMerger> = Lazy::new(ClassMerger::new);

/// Returns the shared merger with the default conflict table.
pub fn default_merger() -> &'static ClassMerger {
    &DEFAULT_MERGER
}

/// Merges space-separated class lists with the default conflict table.
///
/// Lists are read left to right; within a conflict group the class declared
/// last wins.
pub fn merge_class_lists(lists: &[&str]) -> String {
    DEFAULT_MERGER.merge(lists)
}
