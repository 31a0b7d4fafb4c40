//! # Geometry Settings
//!
//! Resolution knobs for everything that is *not* closed form: boundary
//! polylines, polygon-based plastic moduli and the triangle interior grid.
//! Closed-form properties (area, centroid, inertia) never depend on these.
//!
//! Settings are plain serde data so they can live next to other project
//! settings, and can be overridden from the environment:
//!
//! - `SECTION_ARC_SEGMENTS` - polyline segments per full circle (default 256)
//! - `SECTION_GRID_DIVISIONS` - default grid divisions per leg (default 20)

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{SectionError, SectionResult};

/// Environment variable overriding [`GeometrySettings::arc_segments`]
pub const ARC_SEGMENTS_VAR: &str = "SECTION_ARC_SEGMENTS";

/// Environment variable overriding [`GeometrySettings::grid_divisions`]
pub const GRID_DIVISIONS_VAR: &str = "SECTION_GRID_DIVISIONS";

/// Smallest arc resolution that still produces a closed polygon per quadrant
pub const MIN_ARC_SEGMENTS: usize = 8;

/// Resolution settings for polyline-based computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Number of straight segments used to approximate a full circle.
    /// Partial arcs get a proportional share (at least one segment).
    pub arc_segments: usize,

    /// Default number of grid divisions along each leg when sampling the
    /// interior of a triangle without an explicit spacing.
    pub grid_divisions: usize,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            arc_segments: 256,
            grid_divisions: 20,
        }
    }
}

impl GeometrySettings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup` (key to raw value). Unparsable values
    /// fall back per field; an invalid combination falls back entirely.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).and_then(|v| v.trim().parse::<usize>().ok());
        let settings = Self {
            arc_segments: parse(ARC_SEGMENTS_VAR).unwrap_or(defaults.arc_segments),
            grid_divisions: parse(GRID_DIVISIONS_VAR).unwrap_or(defaults.grid_divisions),
        };
        match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                warn!("Ignoring geometry settings from environment: {}", e);
                defaults
            }
        }
    }

    /// Builder: set arc resolution
    pub fn with_arc_segments(mut self, arc_segments: usize) -> Self {
        self.arc_segments = arc_segments;
        self
    }

    /// Builder: set default grid divisions
    pub fn with_grid_divisions(mut self, grid_divisions: usize) -> Self {
        self.grid_divisions = grid_divisions;
        self
    }

    /// Validate settings.
    pub fn validate(&self) -> SectionResult<()> {
        if self.arc_segments < MIN_ARC_SEGMENTS {
            return Err(SectionError::invalid_dimension(
                "arc_segments",
                self.arc_segments.to_string(),
                format!("At least {} segments per circle are required", MIN_ARC_SEGMENTS),
            ));
        }
        if self.grid_divisions == 0 {
            return Err(SectionError::invalid_dimension(
                "grid_divisions",
                "0",
                "Grid needs at least one division",
            ));
        }
        Ok(())
    }

    /// Number of segments for an arc of `sweep_rad` radians.
    pub fn segments_for_sweep(&self, sweep_rad: f64) -> usize {
        let full = std::f64::consts::TAU;
        let share = (self.arc_segments.max(MIN_ARC_SEGMENTS) as f64 * sweep_rad.abs() / full).ceil();
        (share as usize).max(1)
    }
}
