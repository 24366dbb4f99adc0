//! Extension of existing components.
//!
//! An extended component runs its ancestor's class computation, then its
//! own fragments, against one shared style sink. The ancestor computation
//! is captured as a single opaque step, so chains of any depth are
//! flattened at build time and never re-walked while rendering.

use std::sync::Arc;

use crate::component::{ClassComputer, Component, ComponentMeta, StyledComponent, Tag};
use crate::interpolation::{compute_class_name, Fragments};
use crate::pipeline::LogicHandler;
use crate::props::Props;
use crate::style::{StyleSink, StyleSource};

/// What can be extended.
#[derive(Debug, Clone)]
pub enum ExtendTarget {
    /// A component built by one of the factories; its lineage is kept.
    Styled(StyledComponent),
    /// A plain component with no class computation of its own.
    Plain(Component),
}

impl From<StyledComponent> for ExtendTarget {
    fn from(component: StyledComponent) -> Self {
        ExtendTarget::Styled(component)
    }
}

impl From<&StyledComponent> for ExtendTarget {
    fn from(component: &StyledComponent) -> Self {
        ExtendTarget::Styled(component.clone())
    }
}

impl From<Component> for ExtendTarget {
    fn from(component: Component) -> Self {
        ExtendTarget::Plain(component)
    }
}

/// Builds a component that layers `fragments` and `logic_handlers` on top
/// of `target`.
///
/// - class: ancestor result then own result, empty parts skipped
/// - styles: the ancestor's source, with every `style(...)` call of the
///   combined computation layered on top at render time
/// - logic: ancestor handlers first, own handlers appended
/// - filtered props: inherited from the ancestor
pub fn create(
    target: ExtendTarget,
    fragments: Fragments,
    logic_handlers: Vec<LogicHandler>,
) -> StyledComponent {
    let ancestor = match target {
        ExtendTarget::Styled(component) => {
            let display_name = component.display_name().to_string();
            (component.meta().clone(), display_name)
        }
        ExtendTarget::Plain(component) => {
            let display_name = match component.name() {
                "" => "Component".to_string(),
                name => name.to_string(),
            };
            (plain_meta(component), display_name)
        }
    };
    let (meta, ancestor_name) = ancestor;

    let inherited = meta.compute_class_name.clone();
    let compute: ClassComputer = Arc::new(move |props: &Props, sink: &StyleSink| {
        let ancestor_class = inherited(props, sink);
        let own_class = compute_class_name(&fragments, props, sink);
        join_classes(&ancestor_class, &own_class)
    });

    let mut handlers = meta.logic_handlers;
    handlers.extend(logic_handlers);

    StyledComponent::new(
        ComponentMeta {
            compute_class_name: compute,
            styles: meta.styles,
            tag: meta.tag,
            logic_handlers: handlers,
            props_to_filter: meta.props_to_filter,
        },
        format!("Extended({})", ancestor_name),
    )
}

fn plain_meta(component: Component) -> ComponentMeta {
    ComponentMeta {
        compute_class_name: Arc::new(|_: &Props, _: &StyleSink| String::new()),
        styles: StyleSource::default(),
        tag: Tag::Component(component),
        logic_handlers: Vec::new(),
        props_to_filter: Vec::new(),
    }
}

fn join_classes(ancestor: &str, own: &str) -> String {
    match (ancestor.trim(), own.trim()) {
        ("", own) => own.to_string(),
        (ancestor, "") => ancestor.to_string(),
        (ancestor, own) => format!("{} {}", ancestor, own),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::base;
    use crate::node::{Element, Node};
    use crate::pipeline::logic_handler;
    use crate::tags::ElementTag;

    fn styled(fragments: Fragments) -> StyledComponent {
        base::create(
            Tag::Element(ElementTag::Div),
            fragments,
            Vec::new(),
            StyleSource::default(),
        )
    }

    #[test]
    fn test_join_classes_skips_empty_parts() {
        assert_eq!(join_classes("a b", "c"), "a b c");
        assert_eq!(join_classes("", "c"), "c");
        assert_eq!(join_classes("a", "  "), "a");
        assert_eq!(join_classes("", ""), "");
    }

    #[test]
    fn test_extend_without_new_fragments() {
        let parent = styled(Fragments::from("bg-red p-4"));
        let child = create(parent.into(), Fragments::new(), Vec::new());
        assert_eq!(child.class_name(&Props::new()), "bg-red p-4");
    }

    #[test]
    fn test_extend_chain_order() {
        let a = styled(Fragments::from("a"));
        let b = create((&a).into(), Fragments::from("b"), Vec::new());
        let c = create((&b).into(), Fragments::from("c"), Vec::new());

        assert_eq!(c.class_name(&Props::new()), "a b c");
        assert_eq!(c.display_name(), "Extended(Extended(Styled(div)))");
        assert!(matches!(c.meta().tag(), Tag::Element(ElementTag::Div)));
    }

    #[test]
    fn test_logic_handlers_ancestor_first() {
        let parent = base::create(
            Tag::Element(ElementTag::Div),
            Fragments::new().derive(|p| p.get_str("$stage").unwrap_or_default().to_string()),
            vec![logic_handler(|_| Some(Props::new().with("$stage", "parent")))],
            StyleSource::default(),
        );
        let child = create(
            parent.into(),
            Fragments::new(),
            vec![logic_handler(|p| {
                let seen = p.get_str("$stage")?.to_string();
                Some(Props::new().with("$stage", format!("{}-child", seen)))
            })],
        );

        assert_eq!(child.meta().logic_handlers().len(), 2);
        assert_eq!(child.class_name(&Props::new()), "parent-child");
    }

    #[test]
    fn test_extend_plain_component() {
        let plain = Component::new("Card", |props: Props| {
            let mut element = Element::new("article");
            element.class = props.get_str("class").unwrap_or_default().to_string();
            Node::from(element)
        });
        let card = create(plain.into(), Fragments::from("rounded shadow"), Vec::new());

        assert_eq!(card.display_name(), "Extended(Card)");
        let node = card.render(Props::new().with("class", "mt-2"));
        let element = node.as_element().unwrap();
        assert_eq!(element.tag, "article");
        assert_eq!(element.class, "rounded shadow mt-2");
    }

    #[test]
    fn test_unnamed_plain_component() {
        let plain = Component::new("", |_| Node::text(""));
        let extended = create(plain.into(), Fragments::new(), Vec::new());
        assert_eq!(extended.display_name(), "Extended(Component)");
    }
}
