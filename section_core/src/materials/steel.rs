//! Structural Steel Grades (EN 10025-2)
//!
//! Non-alloy hot-rolled structural steels. Yield and ultimate strength drop
//! with increasing nominal thickness; the tables below follow EN 10025-2
//! Table 7 (yield) and the tensile strength rows of the same table.
//!
//! ## Thickness Bands
//!
//! | t (mm)     | S235 | S275 | S355 | S450 |
//! |------------|------|------|------|------|
//! | ≤ 16       | 235  | 275  | 355  | 440  |
//! | 16 – 40    | 225  | 265  | 345  | 430  |
//! | 40 – 63    | 215  | 255  | 335  | 410  |
//! | 63 – 80    | 215  | 245  | 325  | 390  |
//! | 80 – 100   | 215  | 235  | 315  | 380  |
//! | 100 – 150  | 195  | 225  | 295  | 380  |
//!
//! Thicknesses above 150 mm have no tabulated value.
//!
//! ## Example
//!
//! ```rust
//! use section_core::materials::{SteelGrade, SteelMaterial};
//!
//! let steel = SteelMaterial::new(SteelGrade::S355);
//! assert_eq!(steel.yield_strength(12.0).unwrap().0, 355.0);
//! assert_eq!(steel.yield_strength(50.0).unwrap().0, 335.0);
//! assert!(steel.yield_strength(200.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{SectionError, SectionResult};
use crate::units::{KgPerM3, Mpa};

/// Upper edges of the yield strength thickness bands (mm, inclusive)
const YIELD_BAND_LIMITS_MM: [f64; 6] = [16.0, 40.0, 63.0, 80.0, 100.0, 150.0];

/// Density of carbon steel
pub const STEEL_DENSITY: KgPerM3 = KgPerM3(7850.0);

/// Modulus of elasticity of structural steel
pub const STEEL_ELASTIC_MODULUS: Mpa = Mpa(210_000.0);

/// Shear modulus of structural steel
pub const STEEL_SHEAR_MODULUS: Mpa = Mpa(81_000.0);

/// Structural steel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    S235,
    S275,
    S355,
    S450,
}

impl SteelGrade {
    /// All grades for iteration
    pub const ALL: [SteelGrade; 4] = [SteelGrade::S235, SteelGrade::S275, SteelGrade::S355, SteelGrade::S450];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
            SteelGrade::S450 => "S450",
        }
    }

    fn yield_bands(&self) -> [f64; 6] {
        match self {
            SteelGrade::S235 => [235.0, 225.0, 215.0, 215.0, 215.0, 195.0],
            SteelGrade::S275 => [275.0, 265.0, 255.0, 245.0, 235.0, 225.0],
            SteelGrade::S355 => [355.0, 345.0, 335.0, 325.0, 315.0, 295.0],
            SteelGrade::S450 => [440.0, 430.0, 410.0, 390.0, 380.0, 380.0],
        }
    }

    /// Minimum tensile strength for t < 3, 3 ≤ t ≤ 100 and 100 < t ≤ 150 mm.
    /// S450 has no value below 3 mm.
    fn ultimate_bands(&self) -> [Option<f64>; 3] {
        match self {
            SteelGrade::S235 => [Some(360.0), Some(360.0), Some(350.0)],
            SteelGrade::S275 => [Some(430.0), Some(410.0), Some(400.0)],
            SteelGrade::S355 => [Some(510.0), Some(470.0), Some(450.0)],
            SteelGrade::S450 => [None, Some(550.0), Some(530.0)],
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SteelGrade {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase();
        SteelGrade::ALL
            .iter()
            .copied()
            .find(|g| g.display_name() == key)
            .ok_or_else(|| SectionError::unknown_grade("steel", s.trim()))
    }
}

/// Steel material with thickness-dependent strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    pub grade: SteelGrade,
}

impl SteelMaterial {
    pub fn new(grade: SteelGrade) -> Self {
        Self { grade }
    }

    pub fn display_name(&self) -> String {
        format!("Steel {}", self.grade)
    }

    pub fn density(&self) -> KgPerM3 {
        STEEL_DENSITY
    }

    pub fn elastic_modulus(&self) -> Mpa {
        STEEL_ELASTIC_MODULUS
    }

    pub fn shear_modulus(&self) -> Mpa {
        STEEL_SHEAR_MODULUS
    }

    /// Yield strength f_y for a nominal thickness in mm.
    ///
    /// # Errors
    /// - `InvalidDimension` for a non-positive thickness
    /// - `MaterialPropertyUndefined` above 150 mm
    pub fn yield_strength(&self, thickness_mm: f64) -> SectionResult<Mpa> {
        check_thickness(thickness_mm)?;
        YIELD_BAND_LIMITS_MM
            .iter()
            .position(|&limit| thickness_mm <= limit)
            .map(|band| Mpa(self.grade.yield_bands()[band]))
            .ok_or_else(|| self.undefined("yield strength", thickness_mm))
    }

    /// Ultimate (tensile) strength f_u for a nominal thickness in mm.
    ///
    /// # Errors
    /// - `InvalidDimension` for a non-positive thickness
    /// - `MaterialPropertyUndefined` above 150 mm, or below 3 mm for S450
    pub fn ultimate_strength(&self, thickness_mm: f64) -> SectionResult<Mpa> {
        check_thickness(thickness_mm)?;
        let band = if thickness_mm < 3.0 {
            0
        } else if thickness_mm <= 100.0 {
            1
        } else if thickness_mm <= 150.0 {
            2
        } else {
            return Err(self.undefined("ultimate strength", thickness_mm));
        };
        self.grade.ultimate_bands()[band]
            .map(Mpa)
            .ok_or_else(|| self.undefined("ultimate strength", thickness_mm))
    }

    fn undefined(&self, property: &str, thickness_mm: f64) -> SectionError {
        SectionError::material_property_undefined(self.display_name(), property, thickness_mm)
    }
}

fn check_thickness(thickness_mm: f64) -> SectionResult<()> {
    if !thickness_mm.is_finite() || thickness_mm <= 0.0 {
        return Err(SectionError::invalid_dimension(
            "nominal_thickness",
            thickness_mm.to_string(),
            "Nominal thickness must be positive",
        ));
    }
    Ok(())
}
