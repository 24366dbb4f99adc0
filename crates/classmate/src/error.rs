//! Construction errors.

/// Error returned when building components or component maps fails.
///
/// Rendering never fails; every variant here is raised while the caller is
/// still assembling components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassmateError {
    /// The same tag name was listed more than once for a variant map.
    #[error("duplicate elements in variant map: {}. Each element must be unique", .names.join(", "))]
    DuplicateElements {
        /// Each duplicated name, once, in order of first repetition.
        names: Vec<String>,
    },

    /// A tag name is not one of the supported intrinsic elements.
    #[error("element \"{name}\" is not a supported intrinsic element")]
    UnknownElement { name: String },

    /// A fragment sequence was built with mismatched parts.
    #[error(
        "fragment sequence needs one more string than interpolations, got {strings} strings and {interpolations} interpolations"
    )]
    FragmentArity {
        strings: usize,
        interpolations: usize,
    },
}
