//! # Unit Types
//!
//! Type-safe wrappers for the material-level quantities this crate returns.
//! Geometry itself is unit-agnostic: every length is whatever the caller put
//! in, and the catalog works in millimeters. Quantities that mix geometry with
//! material data (weight per length, strengths) need a fixed convention, so
//! they are wrapped here.
//!
//! ## Metric Conventions
//!
//! - Length: millimeters (mm)
//! - Stress / modulus: megapascal (MPa = N/mm²), gigapascal (GPa)
//! - Density: kilograms per cubic meter (kg/m³)
//! - Weight per length: kilograms per meter (kg/m), kilonewton per meter (kN/m)
//!
//! ## Example
//!
//! ```rust
//! use section_core::units::{Gpa, KgPerM, KnPerM, Mpa};
//!
//! let e: Mpa = Gpa(210.0).into();
//! assert_eq!(e.0, 210_000.0);
//!
//! let self_weight: KnPerM = KgPerM(6.84).into();
//! assert!((self_weight.0 - 0.0671).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravity used to turn mass per length into load per length (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascal (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

/// Stress in gigapascal
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gpa(pub f64);

impl From<Gpa> for Mpa {
    fn from(gpa: Gpa) -> Self {
        Mpa(gpa.0 * 1000.0)
    }
}

impl From<Mpa> for Gpa {
    fn from(mpa: Mpa) -> Self {
        Gpa(mpa.0 / 1000.0)
    }
}

// ============================================================================
// Density
// ============================================================================

/// Density in kilograms per cubic meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM3(pub f64);

impl KgPerM3 {
    /// Mass per meter of a prism with the given cross-sectional area in mm².
    ///
    /// 1 mm² = 1e-6 m², so ρ·A·1e-6 gives kg per meter of length.
    pub fn mass_per_length(self, area_mm2: f64) -> KgPerM {
        KgPerM(self.0 * area_mm2 * 1e-6)
    }
}

// ============================================================================
// Weight Per Length
// ============================================================================

/// Mass per length in kilograms per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM(pub f64);

/// Load per length in kilonewton per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM(pub f64);

impl From<KgPerM> for KnPerM {
    fn from(kg: KgPerM) -> Self {
        KnPerM(kg.0 * STANDARD_GRAVITY / 1000.0)
    }
}

impl From<KnPerM> for KgPerM {
    fn from(kn: KnPerM) -> Self {
        KgPerM(kn.0 * 1000.0 / STANDARD_GRAVITY)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Mpa);
impl_arithmetic!(Gpa);
impl_arithmetic!(KgPerM3);
impl_arithmetic!(KgPerM);
impl_arithmetic!(KnPerM);
