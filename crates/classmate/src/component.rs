//! Styled components and the shared render step.
//!
//! Every factory produces a [`StyledComponent`]: build-time metadata
//! ([`ComponentMeta`]) paired with a render method. Metadata is immutable
//! and shared behind an `Arc`; each render works on its own props snapshot
//! and its own [`StyleSink`], so concurrent renders never interfere.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use classmate_merge::merge_class_lists;

use crate::node::{Element, Node};
use crate::pipeline::{apply_logic_handlers, partition_props, LogicHandler, Partition};
use crate::props::{PropValue, Props};
use crate::style::{normalize_inline_style, StyleSink, StyleSource};
use crate::tags::ElementTag;

/// Computes a component's own class text from effective props, routing
/// `style(...)` calls into the given sink.
pub type ClassComputer = Arc<dyn Fn(&Props, &StyleSink) -> String + Send + Sync>;

/// A plain (non-styled) component: a named render function.
///
/// ```rust
/// use classmate::{Component, Element, Node, Props};
///
/// let input = Component::new("MyInput", |props: Props| {
///     let mut element = Element::new("input");
///     element.class = props.get_str("class").unwrap_or_default().to_string();
///     Node::from(element)
/// });
/// assert_eq!(input.name(), "MyInput");
/// ```
#[derive(Clone)]
pub struct Component {
    name: String,
    render: Arc<dyn Fn(Props) -> Node + Send + Sync>,
}

impl Component {
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(Props) -> Node + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            render: Arc::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, props: Props) -> Node {
        (self.render)(props)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("name", &self.name).finish()
    }
}

/// What a styled component ultimately renders.
#[derive(Debug, Clone)]
pub enum Tag {
    Element(ElementTag),
    Component(Component),
}

impl Tag {
    /// Name used in display names: the tag name or the component name.
    pub fn name(&self) -> &str {
        match self {
            Tag::Element(tag) => tag.as_str(),
            Tag::Component(component) => component.name(),
        }
    }
}

impl From<ElementTag> for Tag {
    fn from(tag: ElementTag) -> Self {
        Tag::Element(tag)
    }
}

impl From<Component> for Tag {
    fn from(component: Component) -> Self {
        Tag::Component(component)
    }
}

/// Build-time metadata of a styled component.
///
/// This is what extension reads from an ancestor: its class computation,
/// style source, underlying tag, accumulated logic handlers and the prop
/// keys it keeps away from the element.
#[derive(Clone)]
pub struct ComponentMeta {
    pub(crate) compute_class_name: ClassComputer,
    pub(crate) styles: StyleSource,
    pub(crate) tag: Tag,
    pub(crate) logic_handlers: Vec<LogicHandler>,
    pub(crate) props_to_filter: Vec<String>,
}

impl ComponentMeta {
    /// Runs the class computation on already-effective props.
    pub fn compute_class_name(&self, props: &Props, sink: &StyleSink) -> String {
        (self.compute_class_name)(props, sink)
    }

    pub fn styles(&self) -> &StyleSource {
        &self.styles
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn logic_handlers(&self) -> &[LogicHandler] {
        &self.logic_handlers
    }

    pub fn props_to_filter(&self) -> &[String] {
        &self.props_to_filter
    }
}

impl fmt::Debug for ComponentMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentMeta")
            .field("styles", &self.styles)
            .field("tag", &self.tag)
            .field("logic_handlers", &self.logic_handlers.len())
            .field("props_to_filter", &self.props_to_filter)
            .finish_non_exhaustive()
    }
}

/// A component whose class list and inline style are computed from props.
///
/// Cloning is cheap; clones share the same metadata.
#[derive(Clone)]
pub struct StyledComponent {
    meta: Arc<ComponentMeta>,
    display_name: String,
}

impl StyledComponent {
    pub(crate) fn new(meta: ComponentMeta, display_name: String) -> Self {
        Self {
            meta: Arc::new(meta),
            display_name,
        }
    }

    pub fn meta(&self) -> &ComponentMeta {
        &self.meta
    }

    /// Diagnostic name such as `Styled(div)` or `Extended(Variants(button))`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The component's computed class text for `props`, before caller
    /// classes are merged in. Logic handlers run first.
    pub fn class_name(&self, props: &Props) -> String {
        let effective = apply_logic_handlers(props, &self.meta.logic_handlers);
        self.meta.compute_class_name(&effective, &StyleSink::new())
    }

    /// Renders the component for one props snapshot.
    ///
    /// 1. logic handlers derive the effective props
    /// 2. the class computation runs against a fresh style sink
    /// 3. style source, collected styles and caller `style` are layered,
    ///    later layers winning
    /// 4. caller `class`/`className` are merged after the computed classes
    /// 5. the tag receives forwarded props, final class, style and children
    pub fn render(&self, props: Props) -> Node {
        let meta = &self.meta;
        let effective = apply_logic_handlers(&props, &meta.logic_handlers);

        let sink = StyleSink::new();
        let computed_class = meta.compute_class_name(&effective, &sink);
        let mut style = meta.styles.resolve(&effective);
        style.extend(sink.into_definition().resolve(&effective));

        let Partition { local, forwarded } = partition_props(&effective, &meta.props_to_filter);

        let incoming = incoming_classes(&local);
        let class = merge_class_lists(&[computed_class.as_str(), incoming.as_str()]);

        if let Some(inline) = local.get("style").and_then(PropValue::as_style) {
            style.extend(normalize_inline_style(inline));
        }

        let children = local.get("children").cloned();

        match &meta.tag {
            Tag::Element(tag) => {
                let attributes: BTreeMap<String, PropValue> = forwarded
                    .into_iter()
                    .filter(|(_, value)| !value.is_null())
                    .collect();
                Node::Element(Element {
                    tag: tag.as_str().to_string(),
                    class,
                    style,
                    attributes,
                    children: children.map(PropValue::into_children).unwrap_or_default(),
                })
            }
            Tag::Component(component) => {
                let mut props = forwarded;
                props.insert("class", class);
                props.insert("style", PropValue::Style(style));
                if let Some(children) = children {
                    props.insert("children", PropValue::Children(children.into_children()));
                }
                component.call(props)
            }
        }
    }
}

impl fmt::Debug for StyledComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledComponent")
            .field("display_name", &self.display_name)
            .field("meta", &self.meta)
            .finish()
    }
}

impl From<StyledComponent> for Component {
    fn from(styled: StyledComponent) -> Self {
        let name = styled.display_name.clone();
        Component::new(name, move |props| styled.render(props))
    }
}

/// Caller `class` then `className`, space-joined.
fn incoming_classes(local: &Props) -> String {
    ["class", "className"]
        .iter()
        .filter_map(|key| local.get_str(key))
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
