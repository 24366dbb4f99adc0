//! Style definitions and sources.

use std::fmt;
use std::sync::Arc;

use super::{to_kebab_case, StyleMap};
use crate::props::{format_number, Props};

/// A literal style value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleValue(pub String);

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue(value.to_string())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue(format_number(value))
    }
}

type DeriveValue = Arc<dyn Fn(&Props) -> Option<String> + Send + Sync>;

/// One property setter.
#[derive(Clone)]
pub enum StyleEntry {
    Value(String),
    /// Computed from the effective props at render time; `None` skips the
    /// property.
    Derive(DeriveValue),
}

impl fmt::Debug for StyleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleEntry::Value(value) => f.debug_tuple("Value").field(value).finish(),
            StyleEntry::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// An ordered set of property setters.
///
/// Setting a property twice keeps its first position and the last value.
///
/// # Example
///
/// ```rust
/// use classmate::{Props, StyleDefinition};
///
/// let definition = StyleDefinition::new()
///     .set("fontSize", "12px")
///     .derive("color", |p| Some(if p.flag("$disabled") { "gray" } else { "blue" }.into()));
///
/// let resolved = definition.resolve(&Props::new().with("$disabled", true));
/// assert_eq!(resolved["font-size"], "12px");
/// assert_eq!(resolved["color"], "gray");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleDefinition {
    entries: Vec<(String, StyleEntry)>,
}

impl StyleDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a literal value.
    pub fn set(mut self, property: &str, value: impl Into<StyleValue>) -> Self {
        self.put(property.to_string(), StyleEntry::Value(value.into().0));
        self
    }

    /// Sets a value computed from props at render time.
    pub fn derive<F>(mut self, property: &str, f: F) -> Self
    where
        F: Fn(&Props) -> Option<String> + Send + Sync + 'static,
    {
        self.put(property.to_string(), StyleEntry::Derive(Arc::new(f)));
        self
    }

    /// Copies every entry of `other` over this definition.
    pub fn extend_from(&mut self, other: &StyleDefinition) {
        for (property, entry) in &other.entries {
            self.put(property.clone(), entry.clone());
        }
    }

    fn put(&mut self, property: String, entry: StyleEntry) {
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((property, entry)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Resolves every entry against `props` into a hyphenated map.
    pub fn resolve(&self, props: &Props) -> StyleMap {
        let mut resolved = StyleMap::new();
        for (property, entry) in &self.entries {
            let value = match entry {
                StyleEntry::Value(value) => Some(value.clone()),
                StyleEntry::Derive(f) => f(props),
            };
            if let Some(value) = value {
                resolved.insert(to_kebab_case(property), value);
            }
        }
        resolved
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleDefinition
where
    K: AsRef<str>,
    V: Into<StyleValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries
            .into_iter()
            .fold(StyleDefinition::new(), |def, (k, v)| def.set(k.as_ref(), v))
    }
}

type DeriveDefinition = Arc<dyn Fn(&Props) -> StyleDefinition + Send + Sync>;

/// A component's style metadata.
#[derive(Clone)]
pub enum StyleSource {
    Static(StyleDefinition),
    Derive(DeriveDefinition),
}

impl StyleSource {
    /// A source computed from the effective props.
    pub fn derive<F>(f: F) -> Self
    where
        F: Fn(&Props) -> StyleDefinition + Send + Sync + 'static,
    {
        StyleSource::Derive(Arc::new(f))
    }

    /// Returns the definition for these props.
    pub fn definition(&self, props: &Props) -> StyleDefinition {
        match self {
            StyleSource::Static(definition) => definition.clone(),
            StyleSource::Derive(f) => f(props),
        }
    }

    pub fn resolve(&self, props: &Props) -> StyleMap {
        self.definition(props).resolve(props)
    }
}

impl Default for StyleSource {
    fn default() -> Self {
        StyleSource::Static(StyleDefinition::new())
    }
}

impl From<StyleDefinition> for StyleSource {
    fn from(definition: StyleDefinition) -> Self {
        StyleSource::Static(definition)
    }
}

impl fmt::Debug for StyleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSource::Static(definition) => f.debug_tuple("Static").field(definition).finish(),
            StyleSource::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}
