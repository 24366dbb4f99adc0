use classmate_merge::{default_merger, merge_class_lists, ClassMerger};
use proptest::prelude::*;

#[test]
fn test_caller_class_wins_over_computed() {
    let computed = "p-4 rounded-md bg-blue-100 text-blue-800";
    let caller = "bg-green-100";
    assert_eq!(
        merge_class_lists(&[computed, caller]),
        "p-4 rounded-md text-blue-800 bg-green-100"
    );
}

#[test]
fn test_variant_defaults_override_base_spacing() {
    let computed = "mt-5 border-1 transition-all px-5 py-3 bg-blue-800 text-blue-200 text-base py-2 px-4";
    let merged = merge_class_lists(&[computed, ""]);
    assert_eq!(
        merged,
        "mt-5 border-1 transition-all bg-blue-800 text-blue-200 text-base py-2 px-4"
    );
}

#[test]
fn test_default_merger_is_shared() {
    let a = default_merger() as *const ClassMerger;
    let b = default_merger() as *const ClassMerger;
    assert_eq!(a, b);
}

#[test]
fn test_border_width_and_color_kept_apart() {
    assert_eq!(
        merge_class_lists(&["border border-gray-300", "border-2"]),
        "border-gray-300 border-2"
    );
}

fn class_token() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "p-2", "p-4", "px-2", "py-1", "mt-1", "mt-8", "bg-red", "bg-blue", "text-sm",
        "text-white", "hover:p-4", "card", "title", "flex", "block", "border", "border-2",
    ])
    .prop_map(str::to_string)
}

proptest! {
    #[test]
    fn merge_is_idempotent(tokens in prop::collection::vec(class_token(), 0..12)) {
        let input = tokens.join(" ");
        let once = merge_class_lists(&[&input]);
        let twice = merge_class_lists(&[&once]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_never_duplicates_classes(tokens in prop::collection::vec(class_token(), 0..12)) {
        let input = tokens.join(" ");
        let merged = merge_class_lists(&[&input]);
        let classes: Vec<&str> = merged.split(' ').filter(|c| !c.is_empty()).collect();
        let unique: std::collections::HashSet<&str> = classes.iter().copied().collect();
        prop_assert_eq!(classes.len(), unique.len());
    }

    #[test]
    fn rightmost_class_always_survives(
        tokens in prop::collection::vec(class_token(), 1..12),
    ) {
        let input = tokens.join(" ");
        let merged = merge_class_lists(&[&input]);
        let last = tokens.last().unwrap();
        prop_assert!(merged.split(' ').any(|c| c == last));
    }
}
