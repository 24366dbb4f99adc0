//! Fragment sequences and class-name computation.
//!
//! A [`Fragments`] value is the Rust form of a tagged template: literal
//! strings alternating with [`Interpolation`] slots, always one more string
//! than slots. Computing a class name walks the sequence, appends each
//! literal and each slot's contribution, then collapses whitespace.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::ClassmateError;
use crate::props::Props;
use crate::style::{StyleDefinition, StyleSink};

/// A class-producing function of props.
pub type ClassFn = Arc<dyn Fn(&Scope<'_>) -> String + Send + Sync>;

/// What an interpolation or variant clause sees: the effective props plus
/// the `style` helper bound to the current render's sink.
///
/// `Scope` derefs to [`Props`], so `p.flag("$active")` and
/// `p.get_str("type")` work directly.
pub struct Scope<'a> {
    props: &'a Props,
    sink: &'a StyleSink,
}

impl<'a> Scope<'a> {
    pub fn new(props: &'a Props, sink: &'a StyleSink) -> Self {
        Self { props, sink }
    }

    pub fn props(&self) -> &'a Props {
        self.props
    }

    /// Records inline styles for this render and contributes no class text.
    ///
    /// ```rust
    /// use classmate::{sc, Fragments, Props};
    ///
    /// let button = sc::button().template(
    ///     Fragments::new()
    ///         .lit("text-blue ")
    ///         .derive(|p| p.style([("color", if p.flag("$disabled") { "gray" } else { "blue" })])),
    /// );
    ///
    /// let node = button.render(Props::new().with("$disabled", true));
    /// let element = node.as_element().unwrap();
    /// assert_eq!(element.class, "text-blue");
    /// assert_eq!(element.style_value("color"), Some("gray"));
    /// ```
    pub fn style(&self, definition: impl Into<StyleDefinition>) -> String {
        self.sink.collect(&definition.into());
        String::new()
    }
}

impl Deref for Scope<'_> {
    type Target = Props;

    fn deref(&self) -> &Props {
        self.props
    }
}

/// One interpolation slot.
#[derive(Clone, Default)]
pub enum Interpolation {
    /// Static class text.
    Text(String),
    /// A static boolean. Booleans never contribute text.
    Flag(bool),
    /// Class text derived from props.
    Derive(ClassFn),
    /// Contributes nothing.
    #[default]
    Empty,
}

impl Interpolation {
    pub fn derive<F>(f: F) -> Self
    where
        F: Fn(&Scope<'_>) -> String + Send + Sync + 'static,
    {
        Interpolation::Derive(Arc::new(f))
    }

    fn contribute(&self, scope: &Scope<'_>, out: &mut String) {
        match self {
            Interpolation::Text(text) => out.push_str(text),
            Interpolation::Derive(f) => out.push_str(&f(scope)),
            Interpolation::Flag(_) | Interpolation::Empty => {}
        }
    }
}

impl fmt::Debug for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpolation::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Interpolation::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Interpolation::Derive(_) => f.write_str("Derive(..)"),
            Interpolation::Empty => f.write_str("Empty"),
        }
    }
}

impl From<&str> for Interpolation {
    fn from(text: &str) -> Self {
        Interpolation::Text(text.to_string())
    }
}

impl From<String> for Interpolation {
    fn from(text: String) -> Self {
        Interpolation::Text(text)
    }
}

impl From<bool> for Interpolation {
    fn from(flag: bool) -> Self {
        Interpolation::Flag(flag)
    }
}

impl<T: Into<Interpolation>> From<Option<T>> for Interpolation {
    fn from(value: Option<T>) -> Self {
        value.map_or(Interpolation::Empty, Into::into)
    }
}

/// An alternating sequence of literal strings and interpolation slots.
///
/// The builder keeps the invariant `strings.len() == interpolations.len() + 1`:
/// [`Fragments::lit`] appends to the current literal and
/// [`Fragments::interp`] closes it and opens a new one.
///
/// # Example
///
/// ```rust
/// use classmate::{Fragments, Props, StyleSink};
/// use classmate::interpolation::compute_class_name;
///
/// let fragments = Fragments::new()
///     .lit("absolute top-0 ")
///     .derive(|p| if p.flag("$isActive") { "fade-in".into() } else { "fade-out".into() });
///
/// let props = Props::new().with("$isActive", true);
/// assert_eq!(
///     compute_class_name(&fragments, &props, &StyleSink::new()),
///     "absolute top-0 fade-in"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Fragments {
    strings: Vec<String>,
    interpolations: Vec<Interpolation>,
}

impl Fragments {
    pub fn new() -> Self {
        Self {
            strings: vec![String::new()],
            interpolations: Vec::new(),
        }
    }

    /// Builds a sequence from raw parts, checking the length invariant.
    pub fn from_parts(
        strings: Vec<String>,
        interpolations: Vec<Interpolation>,
    ) -> Result<Self, ClassmateError> {
        if strings.len() != interpolations.len() + 1 {
            return Err(ClassmateError::FragmentArity {
                strings: strings.len(),
                interpolations: interpolations.len(),
            });
        }
        Ok(Self {
            strings,
            interpolations,
        })
    }

    /// Appends literal text to the current string segment.
    pub fn lit(mut self, text: &str) -> Self {
        if let Some(last) = self.strings.last_mut() {
            last.push_str(text);
        }
        self
    }

    /// Appends an interpolation slot.
    pub fn interp(mut self, interpolation: impl Into<Interpolation>) -> Self {
        self.interpolations.push(interpolation.into());
        self.strings.push(String::new());
        self
    }

    /// Appends a slot whose class text is derived from props.
    pub fn derive<F>(self, f: F) -> Self
    where
        F: Fn(&Scope<'_>) -> String + Send + Sync + 'static,
    {
        self.interp(Interpolation::derive(f))
    }

    /// Joins two sequences, separating them with a single space at the seam.
    pub fn concat(&self, other: &Fragments) -> Fragments {
        let mut strings = self.strings.clone();
        let mut rest = other.strings.iter();
        if let (Some(last), Some(first)) = (strings.last_mut(), rest.next()) {
            last.push(' ');
            last.push_str(first);
        }
        strings.extend(rest.cloned());

        let mut interpolations = self.interpolations.clone();
        interpolations.extend(other.interpolations.iter().cloned());

        Fragments {
            strings,
            interpolations,
        }
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn interpolations(&self) -> &[Interpolation] {
        &self.interpolations
    }

    /// Whether the sequence can never produce class text.
    pub fn is_empty(&self) -> bool {
        self.strings.iter().all(|s| s.trim().is_empty())
            && self
                .interpolations
                .iter()
                .all(|i| matches!(i, Interpolation::Empty | Interpolation::Flag(_)))
    }
}

impl Default for Fragments {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Fragments {
    fn from(text: &str) -> Self {
        Fragments::new().lit(text)
    }
}

impl From<String> for Fragments {
    fn from(text: String) -> Self {
        Fragments::new().lit(&text)
    }
}

/// Collapses whitespace runs to one space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Computes the class text of one fragment sequence for one props snapshot.
///
/// `style(...)` calls made by interpolations land in `sink`. The result is
/// the component's own contribution only; ancestor classes and caller
/// classes are merged later.
pub fn compute_class_name(fragments: &Fragments, props: &Props, sink: &StyleSink) -> String {
    let scope = Scope::new(props, sink);
    let mut out = String::new();
    for (i, literal) in fragments.strings.iter().enumerate() {
        out.push_str(literal);
        if let Some(interpolation) = fragments.interpolations.get(i) {
            interpolation.contribute(&scope, &mut out);
        }
    }
    collapse_whitespace(&out)
}
