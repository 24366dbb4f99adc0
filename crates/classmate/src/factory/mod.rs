//! Component factories.
//!
//! - [`base`]: class text from one fragment sequence
//! - [`extend`]: an ancestor's computation followed by new fragments
//! - [`variants`]: a base clause plus one clause per variant axis
//!
//! Factories run once, at build time. Each returns a [`StyledComponent`]
//! whose metadata is never touched again; all per-render work happens in
//! [`StyledComponent::render`].
//!
//! [`StyledComponent`]: crate::component::StyledComponent
//! [`StyledComponent::render`]: crate::component::StyledComponent::render

pub mod base;
pub mod extend;
pub mod variants;

pub use extend::ExtendTarget;
pub use variants::{Clause, Variant, VariantsConfig};
