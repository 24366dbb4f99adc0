//! Props pipeline: logic handlers and prop partitioning.

use std::sync::Arc;

use crate::props::{Props, SIGIL};

/// Derives extra props from the accumulated props.
///
/// Returning `None` leaves the accumulator unchanged.
pub type LogicHandler = Arc<dyn Fn(&Props) -> Option<Props> + Send + Sync>;

/// Wraps a closure as a [`LogicHandler`].
pub fn logic_handler<F>(f: F) -> LogicHandler
where
    F: Fn(&Props) -> Option<Props> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Runs `handlers` in order over a copy of `props`.
///
/// Each handler sees the props accumulated so far, and its result is
/// shallow-merged on top. The input snapshot is never modified.
///
/// ```rust
/// use classmate::{Props, pipeline::{apply_logic_handlers, logic_handler}};
///
/// let handlers = vec![
///     logic_handler(|p| Some(Props::new().with("$count", p.len()))),
///     logic_handler(|_| None),
/// ];
/// let props = Props::new().with("label", "Monday");
/// let effective = apply_logic_handlers(&props, &handlers);
///
/// assert_eq!(effective.get("$count").and_then(|v| v.as_number()), Some(1.0));
/// assert!(!props.contains_key("$count"));
/// ```
pub fn apply_logic_handlers(props: &Props, handlers: &[LogicHandler]) -> Props {
    handlers.iter().fold(props.clone(), |acc, handler| match handler(&acc) {
        Some(derived) => acc.merged(&derived),
        None => acc,
    })
}

/// Prop names always consumed by the styling layer itself.
pub const LOCAL_KEYS: &[&str] = &["children", "class", "className", "style"];

/// Whether a key is reserved for style-only communication.
pub fn is_sigil_key(key: &str) -> bool {
    key.starts_with(SIGIL)
}

/// Props split into what the styling layer keeps and what reaches the
/// underlying element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// `children`, `class`, `className`, `style` and declared axis keys.
    pub local: Props,
    /// Everything else except `$`-prefixed keys.
    pub forwarded: Props,
}

/// Splits effective props into local and forwarded parts.
///
/// `$`-prefixed keys end up in neither part unless they are listed in
/// `filtered`, in which case they are local.
pub fn partition_props(props: &Props, filtered: &[String]) -> Partition {
    let mut partition = Partition::default();
    for (key, value) in props.iter() {
        let is_local = LOCAL_KEYS.contains(&key) || filtered.iter().any(|f| f == key);
        if is_local {
            partition.local.insert(key, value.clone());
        } else if !is_sigil_key(key) {
            partition.forwarded.insert(key, value.clone());
        }
    }
    partition
}
