//! Snapshot of a rendered tree.

use classmate::style::StyleMap;
use classmate::{sc, Element, Node, PropValue, Props};

#[test]
fn test_profile_card_snapshot() {
    let card = sc::article().template("rounded-lg p-4 shadow");

    let mut heading = Element::new("h2");
    heading.children.push(Node::text("Ada"));

    let mut style = StyleMap::new();
    style.insert("marginTop".into(), "8px".into());

    let node = card.render(
        Props::new()
            .with("$elevated", true)
            .with("aria-label", "Profile")
            .with("class", "p-6")
            .with("style", PropValue::Style(style))
            .with(
                "children",
                vec![Node::from(heading), Node::text("Engineer")],
            ),
    );

    insta::assert_json_snapshot!(node, @r###"
    {
      "element": {
        "tag": "article",
        "class": "rounded-lg shadow p-6",
        "style": {
          "margin-top": "8px"
        },
        "attributes": {
          "aria-label": "Profile"
        },
        "children": [
          {
            "element": {
              "tag": "h2",
              "children": [
                {
                  "text": "Ada"
                }
              ]
            }
          },
          {
            "text": "Engineer"
          }
        ]
      }
    }
    "###);
}
