//! # section_core - Cross-Section Property Engine
//!
//! `section_core` computes geometric properties of structural cross-sections:
//! parametric primitives, composite sections assembled from them, and the
//! LNP unequal angle catalog with a corrosion allowance. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Immutable**: Shapes are validated once at construction and never change
//! - **Closed Form First**: Polylines are only used where no formula exists
//! - **JSON-First**: Result records, materials and errors implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::cross_section::MaterialCrossSection;
//! use section_core::materials::SteelGrade;
//! use section_core::profiles::LnpProfile;
//! use section_core::properties::SectionProperties;
//!
//! let angle = LnpProfile::from_catalog("LNP 100x50x6", 0.0, SteelGrade::S235).unwrap();
//! let member = MaterialCrossSection::new(angle, SteelGrade::S235);
//!
//! let summary = member.summary();
//! let json = serde_json::to_string_pretty(&summary).unwrap();
//! assert!(json.contains("LNP 100x50x6"));
//! ```
//!
//! ## Modules
//!
//! - [`properties`] - The shared property contract
//! - [`shapes`] - Circle, tube, rectangle, fillet, triangle and annular sector
//! - [`profiles`] - Composite sections, the LNP catalog and angle assembly
//! - [`cross_section`] - Material-aware wrapper
//! - [`materials`] - Structural steel grades
//! - [`equations`] - Closed-form section formulas
//! - [`geometry`] - Points, bounds, contours and the mirror transform
//! - [`settings`] - Polyline and grid resolution
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod cross_section;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod profiles;
pub mod properties;
pub mod settings;
pub mod shapes;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use cross_section::{MaterialCrossSection, PlateThicknesses};
pub use errors::{SectionError, SectionResult};
pub use geometry::{Bounds, Point2};
pub use profiles::{CompositeSection, LnpProfile, SectionElement};
pub use properties::{SectionProperties, SectionPropertiesSummary};
pub use settings::GeometrySettings;
