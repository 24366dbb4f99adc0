//! Props model.
//!
//! Props are a string-keyed map of loosely typed values, mirroring what a
//! host UI framework hands a component. Keys starting with `$` are reserved
//! for style-only communication and are never forwarded to elements.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::node::Node;
use crate::style::StyleMap;

/// Prefix marking a prop as style-only.
pub const SIGIL: char = '$';

/// A single prop value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Explicitly empty; behaves like a missing prop.
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropValue>),
    /// An inline style object.
    Style(StyleMap),
    /// Child nodes, kept as structure.
    Children(Vec<Node>),
}

impl PropValue {
    /// Truthiness as the host language sees it.
    ///
    /// `Null`, `false`, `0`, `NaN` and `""` are falsy; lists, styles and
    /// children are always truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Text(s) => !s.is_empty(),
            PropValue::List(_) | PropValue::Style(_) | PropValue::Children(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_style(&self) -> Option<&StyleMap> {
        match self {
            PropValue::Style(style) => Some(style),
            _ => None,
        }
    }

    /// Returns the value as a lookup key, the way an object key would be
    /// coerced: text as-is, booleans as `"true"`/`"false"`, numbers in
    /// their shortest form. Structured values have no key.
    pub fn as_key(&self) -> Option<String> {
        match self {
            PropValue::Text(s) => Some(s.clone()),
            PropValue::Bool(b) => Some(b.to_string()),
            PropValue::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }

    /// Converts the value into child nodes without flattening structure.
    pub fn into_children(self) -> Vec<Node> {
        match self {
            PropValue::Null | PropValue::Bool(_) | PropValue::Style(_) => Vec::new(),
            PropValue::Number(n) => vec![Node::text(format_number(n))],
            PropValue::Text(s) => vec![Node::text(s)],
            PropValue::List(items) => items
                .into_iter()
                .flat_map(PropValue::into_children)
                .collect(),
            PropValue::Children(nodes) => nodes,
        }
    }
}

/// Formats a number the way it would appear in markup: `3` not `3.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<usize> for PropValue {
    fn from(value: usize) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<StyleMap> for PropValue {
    fn from(value: StyleMap) -> Self {
        PropValue::Style(value)
    }
}

impl From<Vec<Node>> for PropValue {
    fn from(value: Vec<Node>) -> Self {
        PropValue::Children(value)
    }
}

impl From<Node> for PropValue {
    fn from(value: Node) -> Self {
        PropValue::Children(vec![value])
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        PropValue::List(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Null, Into::into)
    }
}

/// JSON objects become inline styles: string and number members are kept,
/// anything else is skipped.
impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => PropValue::Null,
            Value::Bool(b) => PropValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(PropValue::Null, PropValue::Number),
            Value::String(s) => PropValue::Text(s),
            Value::Array(items) => PropValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(members) => PropValue::Style(
                members
                    .into_iter()
                    .filter_map(|(name, value)| match value {
                        Value::String(s) => Some((name, s)),
                        Value::Number(n) => n.as_f64().map(|n| (name, format_number(n))),
                        _ => None,
                    })
                    .collect(),
            ),
        }
    }
}

/// A props snapshot.
///
/// Props are treated as immutable values: every transform in this crate
/// returns a new `Props` and leaves its input untouched.
///
/// # Example
///
/// ```rust
/// use classmate::Props;
///
/// let props = Props::new()
///     .with("$active", true)
///     .with("type", "button");
///
/// assert!(props.flag("$active"));
/// assert_eq!(props.get_str("type"), Some("button"));
/// assert!(!props.is_set("$missing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Whether the prop is present and truthy.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(PropValue::is_truthy)
    }

    /// Whether the prop is present and not `Null`.
    ///
    /// Falsy values such as `false` or `""` count as set.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds props from a JSON object, as a server might receive them.
    ///
    /// Returns `None` when `value` is not an object.
    ///
    /// ```rust
    /// use classmate::Props;
    /// use serde_json::json;
    ///
    /// let props = Props::from_json(json!({"$size": "lg", "style": {"marginTop": 4}})).unwrap();
    /// assert_eq!(props.get_str("$size"), Some("lg"));
    /// assert!(Props::from_json(json!([1, 2])).is_none());
    /// ```
    pub fn from_json(value: serde_json::Value) -> Option<Props> {
        match value {
            serde_json::Value::Object(members) => Some(members.into_iter().collect()),
            _ => None,
        }
    }

    /// Shallow merge: returns a new snapshot where entries of `other`
    /// replace entries of `self`.
    pub fn merged(&self, other: &Props) -> Props {
        let mut merged = self.clone();
        for (key, value) in &other.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Props(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
