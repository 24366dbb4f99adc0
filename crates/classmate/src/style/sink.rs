//! Per-render style collector.

use std::cell::RefCell;

use super::StyleDefinition;

/// Collects `style(...)` calls made while one render computes its classes.
///
/// A sink is created for a single render and dropped with it, so nothing
/// collected ever leaks into another render or another instance.
#[derive(Debug, Default)]
pub struct StyleSink {
    collected: RefCell<StyleDefinition>,
}

impl StyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `definition` into the collected styles; later calls win.
    pub fn collect(&self, definition: &StyleDefinition) {
        self.collected.borrow_mut().extend_from(definition);
    }

    pub fn is_empty(&self) -> bool {
        self.collected.borrow().is_empty()
    }

    pub fn into_definition(self) -> StyleDefinition {
        self.collected.into_inner()
    }
}
