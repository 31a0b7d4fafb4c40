//! # Profiles
//!
//! Sections assembled from several primitives.
//!
//! - [`composite`] - placed elements and the parallel-axis aggregation
//! - [`catalog`] - static LNP unequal angle table
//! - [`lnp`] - angle decomposition with corrosion allowance

pub mod catalog;
pub mod composite;
pub mod lnp;

pub use catalog::{CatalogEntry, LNP_PREFIX};
pub use composite::{combine_parts, CompositeSection, PartProperties, SectionElement};
pub use lnp::{LnpDimensions, LnpProfile};
