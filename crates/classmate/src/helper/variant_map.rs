use std::collections::{BTreeMap, HashSet};

use crate::component::StyledComponent;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ClassmateError;
use crate::factory::VariantsConfig;
use crate::sc;
use crate::tags::ElementTag;

/// Element used in place of an unsupported tag name.
pub const FALLBACK_ELEMENT: ElementTag = ElementTag::Div;

/// Input of [`create_variant_map`]: element names sharing one config.
#[derive(Debug, Clone)]
pub struct VariantMapOptions {
    elements: Vec<String>,
    config: VariantsConfig,
}

impl VariantMapOptions {
    pub fn new<I, S>(elements: I, config: VariantsConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
            config,
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}

/// Builds one variants component per element, reporting warnings through
/// `tracing`.
///
/// ```rust
/// use classmate::{create_variant_map, Props, Variant, VariantMapOptions, VariantsConfig};
///
/// let config = VariantsConfig::new()
///     .base("font-sans")
///     .variant("$size", Variant::new().option("lg", "text-lg"))
///     .default_variant("$size", "lg");
///
/// let headings = create_variant_map(&VariantMapOptions::new(["h1", "h2"], config)).unwrap();
/// let node = headings["h2"].render(Props::new());
/// let element = node.as_element().unwrap();
/// assert_eq!(element.tag, "h2");
/// assert_eq!(element.class, "font-sans text-lg");
/// ```
pub fn create_variant_map(
    options: &VariantMapOptions,
) -> Result<BTreeMap<String, StyledComponent>, ClassmateError> {
    create_variant_map_with(options, &TracingSink)
}

/// Like [`create_variant_map`], with warnings sent to `diagnostics`.
///
/// Duplicate names fail the whole build and are each listed once, in the
/// order they were first repeated. Unsupported names warn and render
/// [`FALLBACK_ELEMENT`]; the map stays keyed by the name as given.
pub fn create_variant_map_with(
    options: &VariantMapOptions,
    diagnostics: &dyn DiagnosticSink,
) -> Result<BTreeMap<String, StyledComponent>, ClassmateError> {
    let duplicates = find_duplicates(&options.elements);
    if !duplicates.is_empty() {
        return Err(ClassmateError::DuplicateElements { names: duplicates });
    }

    let mut map = BTreeMap::new();
    for name in &options.elements {
        let tag = name.parse::<ElementTag>().unwrap_or_else(|_| {
            diagnostics.warn(&format!(
                "element \"{}\" is not supported; falling back to '{}'",
                name, FALLBACK_ELEMENT
            ));
            FALLBACK_ELEMENT
        });
        map.insert(name.clone(), sc::tag(tag).variants(options.config.clone()));
    }

    tracing::debug!(target: "classmate", elements = map.len(), "built variant map");
    Ok(map)
}

fn find_duplicates(elements: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for name in elements {
        if !seen.insert(name.as_str()) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use crate::factory::Variant;
    use crate::props::Props;

    fn config() -> VariantsConfig {
        VariantsConfig::new()
            .base("leading-tight")
            .variant("$weight", Variant::new().option("bold", "font-bold"))
    }

    #[test]
    fn test_find_duplicates_order() {
        let names: Vec<String> = ["p", "h1", "h1", "p", "h1", "span"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(find_duplicates(&names), vec!["h1", "p"]);
    }

    #[test]
    fn test_duplicates_fail() {
        let options = VariantMapOptions::new(["h1", "p", "h1"], config());
        let err = create_variant_map_with(&options, &RecordingSink::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate elements in variant map: h1. Each element must be unique"
        );
    }

    #[test]
    fn test_unknown_element_falls_back() {
        let sink = RecordingSink::new();
        let options = VariantMapOptions::new(["p", "marquee"], config());
        let map = create_variant_map_with(&options, &sink).unwrap();

        assert_eq!(map.len(), 2);
        let node = map["marquee"].render(Props::new().with("$weight", "bold"));
        let element = node.as_element().unwrap();
        assert_eq!(element.tag, "div");
        assert_eq!(element.class, "leading-tight font-bold");
        assert_eq!(
            sink.warnings(),
            vec!["element \"marquee\" is not supported; falling back to 'div'".to_string()]
        );
    }

    #[test]
    fn test_every_element_gets_its_tag() {
        let sink = RecordingSink::new();
        let options = VariantMapOptions::new(["h1", "h2", "p"], config());
        let map = create_variant_map_with(&options, &sink).unwrap();

        for name in options.elements() {
            assert_eq!(map[name].render(Props::new()).as_element().unwrap().tag, *name);
        }
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_empty_list() {
        let options = VariantMapOptions::new(Vec::<String>::new(), config());
        assert!(create_variant_map(&options).unwrap().is_empty());
    }
}
