//! # Materials
//!
//! Material definitions for the material-aware cross-section wrapper.
//! Geometry is material-agnostic; a material only contributes density and
//! thickness-dependent strengths.
//!
//! ## Material Types
//!
//! - **Steel**: Structural steel grades S235 - S450 per EN 10025-2
//!
//! ## Example
//!
//! ```rust
//! use section_core::materials::{Material, SteelGrade, SteelMaterial};
//!
//! let material = Material::Steel(SteelMaterial::new(SteelGrade::S235));
//! assert_eq!(material.display_name(), "Steel S235");
//! assert_eq!(material.density().0, 7850.0);
//! ```

pub mod steel;

pub use steel::{SteelGrade, SteelMaterial, STEEL_DENSITY, STEEL_ELASTIC_MODULUS};

use serde::{Deserialize, Serialize};

use crate::errors::SectionResult;
use crate::units::{KgPerM3, Mpa};

/// Unified material enum
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Steel", "grade": "S355" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Hot-rolled structural steel
    Steel(SteelMaterial),
}

impl Material {
    pub fn display_name(&self) -> String {
        match self {
            Material::Steel(mat) => mat.display_name(),
        }
    }

    pub fn density(&self) -> KgPerM3 {
        match self {
            Material::Steel(mat) => mat.density(),
        }
    }

    pub fn elastic_modulus(&self) -> Mpa {
        match self {
            Material::Steel(mat) => mat.elastic_modulus(),
        }
    }

    /// Yield strength at a nominal thickness in mm
    pub fn yield_strength(&self, thickness_mm: f64) -> SectionResult<Mpa> {
        match self {
            Material::Steel(mat) => mat.yield_strength(thickness_mm),
        }
    }

    /// Ultimate strength at a nominal thickness in mm
    pub fn ultimate_strength(&self, thickness_mm: f64) -> SectionResult<Mpa> {
        match self {
            Material::Steel(mat) => mat.ultimate_strength(thickness_mm),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::Steel(SteelMaterial::new(SteelGrade::S235))
    }
}

impl From<SteelMaterial> for Material {
    fn from(mat: SteelMaterial) -> Self {
        Material::Steel(mat)
    }
}

impl From<SteelGrade> for Material {
    fn from(grade: SteelGrade) -> Self {
        Material::Steel(SteelMaterial::new(grade))
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_json_roundtrip() {
        let material = Material::from(SteelGrade::S355);
        let json = serde_json::to_string(&material).unwrap();
        assert_eq!(json, r#"{"type":"Steel","grade":"S355"}"#);
        let back: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(back, material);
    }

    #[test]
    fn test_material_delegates_strength() {
        let material = Material::from(SteelGrade::S275);
        assert_eq!(material.yield_strength(30.0).unwrap(), Mpa(265.0));
        assert_eq!(material.ultimate_strength(30.0).unwrap(), Mpa(410.0));
        assert_eq!(material.elastic_modulus(), Mpa(210_000.0));
    }
}
