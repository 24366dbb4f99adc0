use crate::props::Props;

/// Renames prop keys according to `mapping`.
///
/// Keys with an entry in `mapping` are emitted under the mapped name; all
/// other keys pass through unchanged. Typically used to move public props
/// to `$`-prefixed names before handing them to a styled component.
///
/// ```rust
/// use classmate::{convert_props, Props};
///
/// let props = Props::new().with("size", "lg").with("id", "go");
/// let converted = convert_props(&props, &[("size", "$size")]);
///
/// assert_eq!(converted.get_str("$size"), Some("lg"));
/// assert_eq!(converted.get_str("id"), Some("go"));
/// assert!(!converted.contains_key("size"));
/// ```
pub fn convert_props(props: &Props, mapping: &[(&str, &str)]) -> Props {
    props
        .iter()
        .map(|(key, value)| {
            let renamed = mapping
                .iter()
                .find(|(from, _)| *from == key)
                .map_or(key, |(_, to)| *to);
            (renamed, value.clone())
        })
        .collect()
}
