//! # Error Types
//!
//! Structured error types for section_core. Every variant is raised eagerly
//! while a shape, profile or material lookup is being constructed, so a value
//! that was built successfully stays geometrically valid for its lifetime.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{SectionError, SectionResult};
//!
//! fn validate_diameter(diameter: f64) -> SectionResult<()> {
//!     if diameter <= 0.0 {
//!         return Err(SectionError::invalid_dimension(
//!             "diameter",
//!             diameter.to_string(),
//!             "Diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_diameter(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type SectionResult<T> = Result<T, SectionError>;

/// Structured error type for section property operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// A length is non-positive where positivity is mandatory, an inner
    /// dimension reaches its outer counterpart, or a piece does not fit.
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// Angular sweep of a sector is not within (0°, 360°)
    #[error("Invalid angle range {start_deg}° to {end_deg}°: {reason}")]
    InvalidAngle {
        start_deg: f64,
        end_deg: f64,
        reason: String,
    },

    /// Corrosion removed a complete wall
    #[error("Profile '{profile}' is fully corroded: {corrosion_mm} mm corrosion leaves {remaining_mm} mm wall")]
    FullyCorroded {
        profile: String,
        corrosion_mm: f64,
        remaining_mm: f64,
    },

    /// Designation is not in the profile catalog
    #[error("Profile not found in catalog: {designation}")]
    ProfileNotFound { designation: String },

    /// Material grade name is not known
    #[error("Unknown {kind} grade: '{grade}'")]
    UnknownGrade { kind: String, grade: String },

    /// Material has no tabulated value at the requested thickness
    #[error("Material '{material}' has no {property} defined for a nominal thickness of {thickness_mm} mm")]
    MaterialPropertyUndefined {
        material: String,
        property: String,
        thickness_mm: f64,
    },
}

impl SectionError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidAngle error
    pub fn invalid_angle(start_deg: f64, end_deg: f64, reason: impl Into<String>) -> Self {
        SectionError::InvalidAngle {
            start_deg,
            end_deg,
            reason: reason.into(),
        }
    }

    /// Create a FullyCorroded error
    pub fn fully_corroded(profile: impl Into<String>, corrosion_mm: f64, remaining_mm: f64) -> Self {
        SectionError::FullyCorroded {
            profile: profile.into(),
            corrosion_mm,
            remaining_mm,
        }
    }

    /// Create a ProfileNotFound error
    pub fn profile_not_found(designation: impl Into<String>) -> Self {
        SectionError::ProfileNotFound {
            designation: designation.into(),
        }
    }

    /// Create an UnknownGrade error
    pub fn unknown_grade(kind: impl Into<String>, grade: impl Into<String>) -> Self {
        SectionError::UnknownGrade {
            kind: kind.into(),
            grade: grade.into(),
        }
    }

    /// Create a MaterialPropertyUndefined error
    pub fn material_property_undefined(
        material: impl Into<String>,
        property: impl Into<String>,
        thickness_mm: f64,
    ) -> Self {
        SectionError::MaterialPropertyUndefined {
            material: material.into(),
            property: property.into(),
            thickness_mm,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::InvalidDimension { .. } => "INVALID_DIMENSION",
            SectionError::InvalidAngle { .. } => "INVALID_ANGLE",
            SectionError::FullyCorroded { .. } => "FULLY_CORRODED",
            SectionError::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            SectionError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            SectionError::MaterialPropertyUndefined { .. } => "MATERIAL_PROPERTY_UNDEFINED",
        }
    }
}

/// Fail with `InvalidDimension` unless `value` is strictly positive and finite.
pub(crate) fn require_positive(field: &str, value: f64) -> SectionResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SectionError::invalid_dimension(
            field,
            value.to_string(),
            "Must be a positive, finite length",
        ));
    }
    Ok(())
}

/// Fail with `InvalidDimension` unless `value` is zero or positive and finite.
pub(crate) fn require_non_negative(field: &str, value: f64) -> SectionResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SectionError::invalid_dimension(
            field,
            value.to_string(),
            "Must be zero or a positive, finite length",
        ));
    }
    Ok(())
}

/// Fail with `InvalidDimension` unless the anchor coordinates are finite.
pub(crate) fn require_finite(field: &str, value: f64) -> SectionResult<()> {
    if !value.is_finite() {
        return Err(SectionError::invalid_dimension(field, value.to_string(), "Must be finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SectionError::invalid_dimension("diameter", "-5", "Must be a positive, finite length");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidDimension\""));
        let roundtrip: SectionError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SectionError::invalid_angle(0.0, 360.0, "full turn").error_code(), "INVALID_ANGLE");
        assert_eq!(SectionError::fully_corroded("LNP 100x50x6", 3.0, 0.0).error_code(), "FULLY_CORRODED");
        assert_eq!(SectionError::profile_not_found("LNP 1x1x1").error_code(), "PROFILE_NOT_FOUND");
        assert_eq!(SectionError::unknown_grade("steel", "S999").error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_error_display() {
        let error = SectionError::fully_corroded("LNP 100x50x6", 3.0, 0.0);
        assert_eq!(
            error.to_string(),
            "Profile 'LNP 100x50x6' is fully corroded: 3 mm corrosion leaves 0 mm wall"
        );
    }

    #[test]
    fn test_validation_helpers() {
        assert!(require_positive("d", 1.0).is_ok());
        assert!(require_positive("d", 0.0).is_err());
        assert!(require_positive("d", f64::NAN).is_err());
        assert!(require_non_negative("r", 0.0).is_ok());
        assert!(require_non_negative("r", -0.1).is_err());
        assert!(require_finite("x", f64::INFINITY).is_err());
    }
}
