//! Variant-driven components.
//!
//! A [`VariantsConfig`] describes a base clause plus, for each variant
//! axis, the clause to use for each axis value. On render the base clause
//! comes first, then one clause per axis in declaration order.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::component::{ClassComputer, ComponentMeta, StyledComponent, Tag};
use crate::interpolation::{collapse_whitespace, ClassFn, Scope};
use crate::pipeline::LogicHandler;
use crate::props::{PropValue, Props};
use crate::style::{StyleSink, StyleSource};

/// A class clause: literal text or text derived from props.
#[derive(Clone)]
pub enum Clause {
    Text(String),
    Derive(ClassFn),
}

impl Clause {
    pub fn derive<F>(f: F) -> Self
    where
        F: Fn(&Scope<'_>) -> String + Send + Sync + 'static,
    {
        Clause::Derive(Arc::new(f))
    }

    fn resolve(&self, scope: &Scope<'_>) -> String {
        match self {
            Clause::Text(text) => text.clone(),
            Clause::Derive(f) => f(scope),
        }
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Clause::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

impl From<&str> for Clause {
    fn from(text: &str) -> Self {
        Clause::Text(text.to_string())
    }
}

impl From<String> for Clause {
    fn from(text: String) -> Self {
        Clause::Text(text)
    }
}

/// The clauses of one variant axis, keyed by axis value.
#[derive(Debug, Clone, Default)]
pub struct Variant {
    options: BTreeMap<String, Clause>,
}

impl Variant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the clause used when the axis resolves to `value`.
    pub fn option(mut self, value: &str, clause: impl Into<Clause>) -> Self {
        self.options.insert(value.to_string(), clause.into());
        self
    }

    /// Adds a clause whose class text is derived from props.
    pub fn option_fn<F>(self, value: &str, f: F) -> Self
    where
        F: Fn(&Scope<'_>) -> String + Send + Sync + 'static,
    {
        self.option(value, Clause::derive(f))
    }

    pub fn clause(&self, value: &str) -> Option<&Clause> {
        self.options.get(value)
    }
}

/// Configuration of a variants component.
///
/// # Example
///
/// ```rust
/// use classmate::{sc, Props, Variant, VariantsConfig};
///
/// let alert = sc::div().variants(
///     VariantsConfig::new()
///         .base("p-4 rounded-md")
///         .variant(
///             "$severity",
///             Variant::new()
///                 .option("info", "bg-blue-100 text-blue-800")
///                 .option("warning", "bg-yellow-100 text-yellow-800"),
///         )
///         .default_variant("$severity", "info"),
/// );
///
/// let node = alert.render(Props::new());
/// assert_eq!(node.as_element().unwrap().class, "p-4 rounded-md bg-blue-100 text-blue-800");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariantsConfig {
    base: Option<Clause>,
    variants: Vec<(String, Variant)>,
    defaults: BTreeMap<String, PropValue>,
}

impl VariantsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, clause: impl Into<Clause>) -> Self {
        self.base = Some(clause.into());
        self
    }

    pub fn base_fn<F>(self, f: F) -> Self
    where
        F: Fn(&Scope<'_>) -> String + Send + Sync + 'static,
    {
        self.base(Clause::derive(f))
    }

    /// Declares an axis. Axes are consulted in declaration order;
    /// declaring an axis again replaces its clauses in place.
    pub fn variant(mut self, axis: &str, variant: Variant) -> Self {
        match self.variants.iter_mut().find(|(name, _)| name == axis) {
            Some(slot) => slot.1 = variant,
            None => self.variants.push((axis.to_string(), variant)),
        }
        self
    }

    /// Value used for `axis` when the prop is missing or `Null`.
    pub fn default_variant(mut self, axis: &str, value: impl Into<PropValue>) -> Self {
        self.defaults.insert(axis.to_string(), value.into());
        self
    }

    /// Declared axis names, in declaration order.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(name, _)| name.as_str())
    }

    /// The value `axis` resolves to for these props.
    ///
    /// Only a missing or `Null` prop falls back to the default. A present
    /// but falsy value (`false`, `0`, `""`) resolves to nothing, so the axis
    /// contributes no class.
    pub fn resolve_axis(&self, axis: &str, props: &Props) -> Option<String> {
        match props.get(axis).filter(|value| !value.is_null()) {
            Some(value) if value.is_truthy() => value.as_key(),
            Some(_) => None,
            None => self.defaults.get(axis).and_then(PropValue::as_key),
        }
    }

    /// Computes the class text for one props snapshot.
    pub fn compute_class_name(&self, props: &Props, sink: &StyleSink) -> String {
        let scope = Scope::new(props, sink);
        let mut parts = Vec::with_capacity(self.variants.len() + 1);

        if let Some(base) = &self.base {
            parts.push(base.resolve(&scope));
        }
        for (axis, variant) in &self.variants {
            let clause = self
                .resolve_axis(axis, props)
                .and_then(|value| variant.clause(&value));
            if let Some(clause) = clause {
                parts.push(clause.resolve(&scope));
            }
        }

        collapse_whitespace(&parts.join(" "))
    }
}

/// Builds a variants component rendering `tag`.
///
/// Every declared axis name is kept away from the element.
pub fn create(
    tag: Tag,
    config: VariantsConfig,
    logic_handlers: Vec<LogicHandler>,
    styles: StyleSource,
) -> StyledComponent {
    let display_name = format!("Variants({})", tag.name());
    let props_to_filter = config.axes().map(str::to_string).collect();

    let config = Arc::new(config);
    let compute: ClassComputer = Arc::new(move |props: &Props, sink: &StyleSink| {
        config.compute_class_name(props, sink)
    });

    StyledComponent::new(
        ComponentMeta {
            compute_class_name: compute,
            styles,
            tag,
            logic_handlers,
            props_to_filter,
        },
        display_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::ElementTag;

    fn button_config() -> VariantsConfig {
        VariantsConfig::new()
            .base("font-semibold border rounded")
            .variant(
                "size",
                Variant::new()
                    .option("sm", "text-sm py-1 px-2")
                    .option("md", "text-base py-2 px-4")
                    .option("lg", "text-lg py-3 px-6"),
            )
            .variant(
                "color",
                Variant::new()
                    .option("primary", "bg-blue-500 text-white")
                    .option("secondary", "bg-gray-500 text-white"),
            )
            .default_variant("size", "md")
            .default_variant("color", "primary")
    }

    fn compute(config: &VariantsConfig, props: &Props) -> String {
        config.compute_class_name(props, &StyleSink::new())
    }

    #[test]
    fn test_defaults_apply() {
        assert_eq!(
            compute(&button_config(), &Props::new()),
            "font-semibold border rounded text-base py-2 px-4 bg-blue-500 text-white"
        );
    }

    #[test]
    fn test_explicit_values_win() {
        let props = Props::new().with("size", "lg").with("color", "secondary");
        assert_eq!(
            compute(&button_config(), &props),
            "font-semibold border rounded text-lg py-3 px-6 bg-gray-500 text-white"
        );
    }

    #[test]
    fn test_null_falls_back_but_empty_does_not() {
        let config = button_config();
        let null = Props::new().with("size", PropValue::Null);
        let empty = Props::new().with("size", "");

        assert_eq!(config.resolve_axis("size", &null).as_deref(), Some("md"));
        assert_eq!(config.resolve_axis("size", &empty), None);
        assert_eq!(
            compute(&config, &empty),
            "font-semibold border rounded bg-blue-500 text-white"
        );
    }

    #[test]
    fn test_unknown_value_contributes_nothing() {
        let props = Props::new().with("size", "xl");
        assert_eq!(
            compute(&button_config(), &props),
            "font-semibold border rounded bg-blue-500 text-white"
        );
    }

    #[test]
    fn test_boolean_axis() {
        let config = VariantsConfig::new().variant(
            "$disabled",
            Variant::new()
                .option("true", "opacity-50 cursor-not-allowed")
                .option("false", "cursor-pointer"),
        );
        assert_eq!(
            compute(&config, &Props::new().with("$disabled", true)),
            "opacity-50 cursor-not-allowed"
        );
        assert_eq!(compute(&config, &Props::new().with("$disabled", false)), "");
        assert_eq!(compute(&config, &Props::new()), "");
    }

    #[test]
    fn test_falsy_values_skip_axis_and_default() {
        let config = VariantsConfig::new()
            .base("btn")
            .variant("$disabled", Variant::new().option("false", "cursor-pointer"))
            .variant("$n", Variant::new().option("0", "zero-class").option("3", "three"))
            .default_variant("$disabled", "false")
            .default_variant("$n", 3);

        let falsy = Props::new().with("$disabled", false).with("$n", 0);
        assert_eq!(compute(&config, &falsy), "btn");
        assert_eq!(config.resolve_axis("$n", &falsy), None);

        assert_eq!(compute(&config, &Props::new()), "btn cursor-pointer three");
    }

    #[test]
    fn test_derived_clauses_and_base() {
        let config = VariantsConfig::new()
            .base_fn(|p| if p.flag("$isActive") { "ring".into() } else { String::new() })
            .variant(
                "$severity",
                Variant::new().option_fn("info", |p| {
                    if p.flag("$isActive") {
                        "bg-blue-200".into()
                    } else {
                        "bg-blue-100".into()
                    }
                }),
            );
        let active = Props::new().with("$severity", "info").with("$isActive", true);
        assert_eq!(compute(&config, &active), "ring bg-blue-200");
        assert_eq!(compute(&config, &Props::new().with("$severity", "info")), "bg-blue-100");
    }

    #[test]
    fn test_redeclared_axis_keeps_position() {
        let config = VariantsConfig::new()
            .variant("a", Variant::new().option("x", "first"))
            .variant("b", Variant::new().option("x", "second"))
            .variant("a", Variant::new().option("x", "replaced"));
        assert_eq!(config.axes().collect::<Vec<_>>(), vec!["a", "b"]);
        let props = Props::new().with("a", "x").with("b", "x");
        assert_eq!(compute(&config, &props), "replaced second");
    }

    #[test]
    fn test_create_filters_axes() {
        let component = create(
            Tag::Element(ElementTag::Button),
            button_config(),
            Vec::new(),
            StyleSource::default(),
        );
        assert_eq!(component.display_name(), "Variants(button)");
        assert_eq!(component.meta().props_to_filter(), ["size", "color"]);

        let node = component.render(Props::new().with("size", "sm").with("type", "submit"));
        let element = node.as_element().unwrap();
        assert!(!element.has_attribute("size"));
        assert!(element.has_attribute("type"));
    }
}
