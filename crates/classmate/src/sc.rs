//! Keyed entry surface.
//!
//! `sc::tag(ElementTag::Div)` (or the shorthand `sc::div()`) returns a
//! [`TagFactory`] bound to that element. A factory turns a template into a
//! styled component, turns a [`VariantsConfig`] into a variants component,
//! and accumulates logic handlers and a style source along the way.
//! Factories are values: `.logic(..)` and `.styles(..)` return new factories
//! and leave the original untouched.
//!
//! ```rust
//! use classmate::{sc, Fragments, Props};
//!
//! let status = sc::div()
//!     .logic(|p| Some(Props::new().with("$done", p.get_str("state") == Some("done"))))
//!     .template(
//!         Fragments::new()
//!             .lit("rounded ")
//!             .derive(|p| if p.flag("$done") { "line-through".into() } else { String::new() }),
//!     );
//!
//! let node = status.render(Props::new().with("state", "done"));
//! assert_eq!(node.as_element().unwrap().class, "rounded line-through");
//!
//! let card = sc::extend(&status).template("p-4");
//! assert_eq!(card.display_name(), "Extended(Styled(div))");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::component::{Component, StyledComponent, Tag};
use crate::error::ClassmateError;
use crate::factory::{base, extend, variants, ExtendTarget, VariantsConfig};
use crate::interpolation::Fragments;
use crate::pipeline::LogicHandler;
use crate::props::Props;
use crate::style::StyleSource;
use crate::tags::ElementTag;

/// A factory bound to one tag.
#[derive(Clone)]
pub struct TagFactory {
    tag: Tag,
    logic_handlers: Vec<LogicHandler>,
    styles: StyleSource,
}

impl TagFactory {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            logic_handlers: Vec::new(),
            styles: StyleSource::default(),
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns a factory with `handler` appended to the logic handlers.
    pub fn logic<F>(&self, handler: F) -> Self
    where
        F: Fn(&Props) -> Option<Props> + Send + Sync + 'static,
    {
        let mut next = self.clone();
        next.logic_handlers.push(Arc::new(handler));
        next
    }

    /// Returns a factory whose components carry `source` as their style
    /// metadata.
    pub fn styles(&self, source: impl Into<StyleSource>) -> Self {
        let mut next = self.clone();
        next.styles = source.into();
        next
    }

    /// Builds a styled component from a template.
    pub fn template(&self, fragments: impl Into<Fragments>) -> StyledComponent {
        base::create(
            self.tag.clone(),
            fragments.into(),
            self.logic_handlers.clone(),
            self.styles.clone(),
        )
    }

    /// Builds a variants component.
    pub fn variants(&self, config: VariantsConfig) -> StyledComponent {
        variants::create(
            self.tag.clone(),
            config,
            self.logic_handlers.clone(),
            self.styles.clone(),
        )
    }
}

impl fmt::Debug for TagFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagFactory")
            .field("tag", &self.tag)
            .field("logic_handlers", &self.logic_handlers.len())
            .field("styles", &self.styles)
            .finish()
    }
}

/// Extension builder returned by [`extend`].
#[derive(Clone)]
pub struct ExtendBuilder {
    target: ExtendTarget,
    logic_handlers: Vec<LogicHandler>,
}

impl ExtendBuilder {
    /// Returns a builder with `handler` appended after the ancestor's
    /// handlers and any added so far.
    pub fn logic<F>(&self, handler: F) -> Self
    where
        F: Fn(&Props) -> Option<Props> + Send + Sync + 'static,
    {
        let mut next = self.clone();
        next.logic_handlers.push(Arc::new(handler));
        next
    }

    pub fn template(&self, fragments: impl Into<Fragments>) -> StyledComponent {
        extend::create(
            self.target.clone(),
            fragments.into(),
            self.logic_handlers.clone(),
        )
    }
}

impl fmt::Debug for ExtendBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendBuilder")
            .field("target", &self.target)
            .field("logic_handlers", &self.logic_handlers.len())
            .finish()
    }
}

/// Factory for an intrinsic element.
pub fn tag(tag: ElementTag) -> TagFactory {
    TagFactory::new(tag)
}

/// Factory for an element given by name.
pub fn element(name: &str) -> Result<TagFactory, ClassmateError> {
    Ok(TagFactory::new(name.parse::<ElementTag>()?))
}

/// Factory wrapping a plain component.
pub fn component(component: impl Into<Component>) -> TagFactory {
    TagFactory::new(component.into())
}

/// Starts extending a styled or plain component.
pub fn extend(target: impl Into<ExtendTarget>) -> ExtendBuilder {
    ExtendBuilder {
        target: target.into(),
        logic_handlers: Vec::new(),
    }
}

macro_rules! shorthand {
    ($( $name:ident => $variant:ident ),* $(,)?) => {
        $(
            #[doc = concat!("Factory for `<", stringify!($name), ">`.")]
            pub fn $name() -> TagFactory {
                tag(ElementTag::$variant)
            }
        )*
    };
}

shorthand! {
    a => A,
    article => Article,
    aside => Aside,
    button => Button,
    div => Div,
    footer => Footer,
    form => Form,
    h1 => H1,
    h2 => H2,
    h3 => H3,
    header => Header,
    img => Img,
    input => Input,
    label => Label,
    li => Li,
    main => Main,
    nav => Nav,
    p => P,
    section => Section,
    span => Span,
    ul => Ul,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Variant;

    #[test]
    fn test_logic_returns_new_factory() {
        let plain = div();
        let with_logic = plain.logic(|_| None);
        assert_eq!(plain.logic_handlers.len(), 0);
        assert_eq!(with_logic.logic_handlers.len(), 1);
        assert_eq!(with_logic.logic(|_| None).logic_handlers.len(), 2);
    }

    #[test]
    fn test_element_by_name() {
        assert_eq!(element("nav").unwrap().tag().name(), "nav");
        assert!(matches!(
            element("blink"),
            Err(ClassmateError::UnknownElement { .. })
        ));
    }

    #[test]
    fn test_variants_from_factory_keeps_logic() {
        let badge = span()
            .logic(|p| Some(Props::new().with("$tone", if p.flag("urgent") { "red" } else { "gray" })))
            .variants(
                VariantsConfig::new().base("badge").variant(
                    "$tone",
                    Variant::new().option("red", "bg-red-500").option("gray", "bg-gray-200"),
                ),
            );

        assert_eq!(badge.display_name(), "Variants(span)");
        assert_eq!(badge.class_name(&Props::new().with("urgent", true)), "badge bg-red-500");
        assert_eq!(badge.class_name(&Props::new()), "badge bg-gray-200");
    }

    #[test]
    fn test_extend_builder_logic() {
        let base = p().template("text-sm");
        let extended = extend(&base)
            .logic(|_| Some(Props::new().with("$strong", true)))
            .template(crate::Fragments::new().derive(|p| {
                if p.flag("$strong") {
                    "font-bold".into()
                } else {
                    String::new()
                }
            }));
        assert_eq!(extended.class_name(&Props::new()), "text-sm font-bold");
    }
}
