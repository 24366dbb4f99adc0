//! Helpers built on top of the factories.

mod convert;
mod variant_map;

pub use convert::convert_props;
pub use variant_map::{create_variant_map, create_variant_map_with, VariantMapOptions, FALLBACK_ELEMENT};
