//! Property tests for the render pipeline.

use classmate::{sc, Fragments, Interpolation, PropValue, Props, StyledComponent, Variant, VariantsConfig};
use proptest::prelude::*;

/// A generated interpolation slot.
#[derive(Debug, Clone)]
enum Slot {
    Text(String),
    Flag(bool),
    Empty,
    /// Reads a text prop, contributing nothing when it is missing.
    Prop(String),
}

impl Slot {
    fn into_interpolation(self) -> Interpolation {
        match self {
            Slot::Text(text) => Interpolation::from(text),
            Slot::Flag(flag) => Interpolation::from(flag),
            Slot::Empty => Interpolation::Empty,
            Slot::Prop(key) => {
                Interpolation::derive(move |p| p.get_str(&key).unwrap_or_default().to_string())
            }
        }
    }
}

fn slot() -> impl Strategy<Value = Slot> {
    prop_oneof![
        "[a-z]{1,5}( [a-z]{1,5})?".prop_map(Slot::Text),
        any::<bool>().prop_map(Slot::Flag),
        Just(Slot::Empty),
        prop::sample::select(vec!["$a", "$b", "c"]).prop_map(|k| Slot::Prop(k.to_string())),
    ]
}

/// Literal segments and slots, alternating, starting and ending with a literal.
fn fragments() -> impl Strategy<Value = (Vec<String>, Vec<Slot>)> {
    prop::collection::vec(slot(), 0..4).prop_flat_map(|slots| {
        let n = slots.len() + 1;
        (
            prop::collection::vec("[a-z ]{0,8}", n..=n),
            Just(slots),
        )
    })
}

fn build((strings, slots): (Vec<String>, Vec<Slot>)) -> Fragments {
    let interpolations = slots.into_iter().map(Slot::into_interpolation).collect();
    Fragments::from_parts(strings, interpolations).expect("generated with matching arity")
}

fn class_props() -> impl Strategy<Value = Props> {
    (
        prop::option::of("[a-z]{1,4}"),
        prop::option::of("[a-z]{1,4}"),
        prop::option::of("[a-z]{1,4}"),
    )
        .prop_map(|(a, b, c)| {
            Props::new()
                .with("$a", a)
                .with("$b", b)
                .with("c", c)
        })
}

fn prop_value() -> impl Strategy<Value = PropValue> {
    prop_oneof![
        Just(PropValue::Null),
        any::<bool>().prop_map(PropValue::Bool),
        (-5i32..5).prop_map(PropValue::from),
        "[a-z]{0,4}".prop_map(PropValue::from),
    ]
}

fn any_props() -> impl Strategy<Value = Props> {
    prop::collection::btree_map(
        prop_oneof![
            "\\$?[a-z]{1,5}",
            Just("size".to_string()),
            Just("$tone".to_string()),
            Just("class".to_string()),
        ],
        prop_value(),
        0..8,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

fn sized_button() -> StyledComponent {
    sc::button().variants(
        VariantsConfig::new()
            .base("inline-flex")
            .variant("size", Variant::new().option("sm", "h-8").option("lg", "h-12"))
            .variant("$tone", Variant::new().option("true", "ring").option("warm", "bg-orange-100"))
            .default_variant("size", "sm"),
    )
}

proptest! {
    #[test]
    fn rerender_is_idempotent(spec in fragments(), props in any_props()) {
        let component = sc::div().template(build(spec));
        prop_assert_eq!(component.render(props.clone()), component.render(props));
    }

    #[test]
    fn sigil_and_axis_props_never_reach_the_element(props in any_props()) {
        let button = sized_button();
        let extended = sc::extend(&button).template("font-medium");

        for component in [&button, &extended] {
            let node = component.render(props.clone());
            let element = node.as_element().expect("element");
            for key in element.attributes.keys() {
                prop_assert!(!key.starts_with('$'), "leaked {}", key);
                prop_assert!(key != "size", "leaked axis key");
                prop_assert!(key != "class", "leaked class");
            }
        }
    }

    #[test]
    fn extension_is_associative(
        a in fragments(),
        b in fragments(),
        c in fragments(),
        props in class_props(),
    ) {
        let (a, b, c) = (build(a), build(b), build(c));
        let root = sc::span().template(a);

        let chained = sc::extend(&sc::extend(&root).template(b.clone())).template(c.clone());
        let flattened = sc::extend(&root).template(b.concat(&c));

        prop_assert_eq!(chained.class_name(&props), flattened.class_name(&props));
    }

    #[test]
    fn unset_axis_matches_explicit_default(
        default in prop::sample::select(vec!["sm", "md", "lg", "xl"]),
        other in "[a-z]{1,3}",
    ) {
        let component = sc::div().variants(
            VariantsConfig::new()
                .base("box")
                .variant(
                    "$size",
                    Variant::new().option("sm", "p-1").option("md", "p-2").option("lg", "p-4"),
                )
                .default_variant("$size", default)
                .variant("$other", Variant::new().option("ab", "italic")),
        );
        let extra = Props::new().with("$other", other);

        let unset = component.class_name(&extra);
        let explicit = component.class_name(&extra.clone().with("$size", default));
        let nulled = component.class_name(&extra.clone().with("$size", PropValue::Null));
        let empty = component.class_name(&extra.clone().with("$size", ""));

        prop_assert_eq!(&unset, &explicit);
        prop_assert_eq!(&unset, &nulled);
        prop_assert!(!empty.contains("p-"), "empty value fell back: {}", empty);
    }
}
