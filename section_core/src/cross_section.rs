//! # Material Cross-Sections
//!
//! Pairs any [`SectionProperties`] implementor with a [`Material`] to get
//! weight per length and thickness-dependent strengths.
//!
//! ## Example
//!
//! ```rust
//! use section_core::cross_section::MaterialCrossSection;
//! use section_core::geometry::Point2;
//! use section_core::materials::SteelGrade;
//! use section_core::shapes::Rectangle;
//!
//! let plate = Rectangle::new(200.0, 10.0, Point2::ORIGIN).unwrap();
//! let member = MaterialCrossSection::new(plate, SteelGrade::S355);
//!
//! // 2000 mm² · 7850 kg/m³
//! assert!((member.weight_per_length().0 - 15.7).abs() < 1e-9);
//! assert_eq!(member.yield_strength(10.0).unwrap().0, 355.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{SectionError, SectionResult};
use crate::materials::Material;
use crate::profiles::{CompositeSection, LnpProfile};
use crate::properties::{SectionProperties, SectionPropertiesSummary};
use crate::units::{KgPerM, KnPerM, Mpa};

/// Sections made of plates with a known nominal thickness each.
pub trait PlateThicknesses {
    fn nominal_thicknesses(&self) -> Vec<f64>;
}

impl PlateThicknesses for CompositeSection {
    fn nominal_thicknesses(&self) -> Vec<f64> {
        CompositeSection::nominal_thicknesses(self)
    }
}

impl PlateThicknesses for LnpProfile {
    fn nominal_thicknesses(&self) -> Vec<f64> {
        self.section().nominal_thicknesses()
    }
}

/// A section with a material assigned.
#[derive(Debug, Clone)]
pub struct MaterialCrossSection<S: SectionProperties> {
    section: S,
    material: Material,
}

impl<S: SectionProperties> MaterialCrossSection<S> {
    pub fn new(section: S, material: impl Into<Material>) -> Self {
        Self {
            section,
            material: material.into(),
        }
    }

    pub fn section(&self) -> &S {
        &self.section
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn into_inner(self) -> S {
        self.section
    }

    /// ρ · A, with A in mm²
    pub fn weight_per_length(&self) -> KgPerM {
        self.material.density().mass_per_length(self.section.area())
    }

    /// Dead load per meter under standard gravity
    pub fn self_weight(&self) -> KnPerM {
        self.weight_per_length().into()
    }

    /// Yield strength at the given nominal thickness (mm).
    ///
    /// # Errors
    /// `MaterialPropertyUndefined` where the material has no tabulated value.
    pub fn yield_strength(&self, thickness_mm: f64) -> SectionResult<Mpa> {
        self.material.yield_strength(thickness_mm)
    }

    /// Ultimate strength at the given nominal thickness (mm).
    pub fn ultimate_strength(&self, thickness_mm: f64) -> SectionResult<Mpa> {
        self.material.ultimate_strength(thickness_mm)
    }

    pub fn summary(&self) -> MaterialSectionSummary {
        MaterialSectionSummary {
            section: self.section.summary(),
            material: self.material,
            weight_per_length: self.weight_per_length(),
            self_weight: self.self_weight(),
        }
    }
}

impl<S: SectionProperties + PlateThicknesses> MaterialCrossSection<S> {
    /// Lowest yield strength over every plate of the section.
    ///
    /// # Errors
    /// - `InvalidDimension` if the section has no plates
    /// - `MaterialPropertyUndefined` if any plate is outside the tables
    pub fn governing_yield_strength(&self) -> SectionResult<Mpa> {
        self.governing("yield strength", |t| self.material.yield_strength(t))
    }

    /// Lowest ultimate strength over every plate of the section.
    pub fn governing_ultimate_strength(&self) -> SectionResult<Mpa> {
        self.governing("ultimate strength", |t| self.material.ultimate_strength(t))
    }

    fn governing<F>(&self, property: &str, lookup: F) -> SectionResult<Mpa>
    where
        F: Fn(f64) -> SectionResult<Mpa>,
    {
        let thicknesses = self.section.nominal_thicknesses();
        let mut governing: Option<Mpa> = None;
        for t in thicknesses {
            let strength = lookup(t)?;
            if governing.map_or(true, |g| strength < g) {
                governing = Some(strength);
            }
        }
        let strength = governing.ok_or_else(|| {
            SectionError::invalid_dimension("nominal_thickness", "none", "Section has no plates")
        })?;
        debug!(property, strength = strength.0, material = %self.material, "governing strength");
        Ok(strength)
    }
}

/// Serializable snapshot of a material cross-section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSectionSummary {
    pub section: SectionPropertiesSummary,
    pub material: Material,
    pub weight_per_length: KgPerM,
    pub self_weight: KnPerM,
}
