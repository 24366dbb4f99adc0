//! # Classmate - styled components from props
//!
//! Classmate builds components whose class list and inline style are
//! computed from props at render time, while every prop that is not meant
//! for styling is forwarded untouched to the underlying element.
//!
//! ## Core Concepts
//!
//! - [`Fragments`]: a template of literal class text and interpolation slots
//! - [`sc`]: factories bound to an element (`sc::div()`, `sc::tag(..)`),
//!   plus [`sc::extend`] to build on an existing component
//! - [`VariantsConfig`]: a base clause plus one clause per variant axis,
//!   with defaults
//! - [`StyledComponent`]: the built component; [`StyledComponent::render`]
//!   turns [`Props`] into a [`Node`]
//!
//! Props whose names start with `$` are style-only: interpolations can read
//! them but they never reach the rendered element. Caller `class` and
//! `className` are merged after the computed classes, so conflicting
//! utilities supplied by the caller win.
//!
//! ## Quick Example
//!
//! ```rust
//! use classmate::{sc, Fragments, Props, Variant, VariantsConfig};
//!
//! let alert = sc::div().variants(
//!     VariantsConfig::new()
//!         .base("p-4 rounded-md")
//!         .variant(
//!             "$severity",
//!             Variant::new()
//!                 .option("info", "bg-blue-100 text-blue-800")
//!                 .option("error", "bg-red-100 text-red-800"),
//!         )
//!         .default_variant("$severity", "info"),
//! );
//!
//! let node = alert.render(
//!     Props::new()
//!         .with("$severity", "error")
//!         .with("role", "alert")
//!         .with("class", "p-2"),
//! );
//! let element = node.as_element().unwrap();
//!
//! assert_eq!(element.class, "rounded-md bg-red-100 text-red-800 p-2");
//! assert!(element.has_attribute("role"));
//! assert!(!element.has_attribute("$severity"));
//!
//! let loud = sc::extend(&alert).template(Fragments::from("font-bold uppercase"));
//! let node = loud.render(Props::new());
//! assert!(node.as_element().unwrap().has_classes("bg-blue-100 font-bold"));
//! ```
//!
//! ## Styles
//!
//! Interpolations receive a [`Scope`] whose `style(..)` helper records
//! inline styles for the current render. Static or prop-derived style
//! sources can also be attached with [`sc::TagFactory::styles`]. Caller
//! `style` always wins.
//!
//! ## Diagnostics
//!
//! Non-fatal problems go through a [`DiagnosticSink`]. The default,
//! [`TracingSink`], emits `tracing` warnings under the `classmate` target.

pub mod component;
pub mod diagnostics;
pub mod error;
pub mod factory;
pub mod helper;
pub mod interpolation;
pub mod node;
pub mod pipeline;
pub mod props;
pub mod sc;
pub mod style;
pub mod tags;

pub use component::{Component, ComponentMeta, StyledComponent, Tag};
pub use diagnostics::{DiagnosticSink, RecordingSink, TracingSink};
pub use error::ClassmateError;
pub use factory::{Clause, ExtendTarget, Variant, VariantsConfig};
pub use helper::{
    convert_props, create_variant_map, create_variant_map_with, VariantMapOptions,
    FALLBACK_ELEMENT,
};
pub use interpolation::{Fragments, Interpolation, Scope};
pub use node::{Element, Node};
pub use pipeline::{logic_handler, LogicHandler};
pub use props::{PropValue, Props};
pub use style::{StyleDefinition, StyleMap, StyleSink, StyleSource};
pub use tags::ElementTag;

pub use classmate_merge::merge_class_lists;
