//! Leaf styled components.

use std::sync::Arc;

use crate::component::{ClassComputer, ComponentMeta, StyledComponent, Tag};
use crate::interpolation::{compute_class_name, Fragments};
use crate::pipeline::LogicHandler;
use crate::props::Props;
use crate::style::{StyleSink, StyleSource};

/// Builds a styled component that computes its class directly from
/// `fragments`.
pub fn create(
    tag: Tag,
    fragments: Fragments,
    logic_handlers: Vec<LogicHandler>,
    styles: StyleSource,
) -> StyledComponent {
    let display_name = format!("Styled({})", tag.name());
    let compute: ClassComputer = Arc::new(move |props: &Props, sink: &StyleSink| {
        compute_class_name(&fragments, props, sink)
    });

    StyledComponent::new(
        ComponentMeta {
            compute_class_name: compute,
            styles,
            tag,
            logic_handlers,
            props_to_filter: Vec::new(),
        },
        display_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::logic_handler;
    use crate::style::StyleDefinition;
    use crate::tags::ElementTag;

    #[test]
    fn test_display_name() {
        let component = create(
            Tag::Element(ElementTag::Section),
            Fragments::from("p-4"),
            Vec::new(),
            StyleSource::default(),
        );
        assert_eq!(component.display_name(), "Styled(section)");
    }

    #[test]
    fn test_class_name_sees_derived_props() {
        let component = create(
            Tag::Element(ElementTag::Div),
            Fragments::new()
                .lit("flex ")
                .derive(|p| if p.flag("$open") { "block".into() } else { "hidden".into() }),
            vec![logic_handler(|p| {
                Some(Props::new().with("$open", p.get_str("state") == Some("open")))
            })],
            StyleSource::default(),
        );

        assert_eq!(component.class_name(&Props::new().with("state", "open")), "flex block");
        assert_eq!(component.class_name(&Props::new()), "flex hidden");
    }

    #[test]
    fn test_static_styles_reach_element() {
        let component = create(
            Tag::Element(ElementTag::P),
            Fragments::from("text-sm"),
            Vec::new(),
            StyleDefinition::from([("lineHeight", "1.5")]).into(),
        );
        let node = component.render(Props::new());
        assert_eq!(node.as_element().unwrap().style_value("line-height"), Some("1.5"));
    }
}
