//! # Planar Geometry
//!
//! Small geometric building blocks shared by every shape:
//!
//! - [`Point2`] and [`Bounds`] - coordinates and axis-aligned extents
//! - [`transform`] - the anchor/mirror affine transform applied after canonical geometry
//! - [`polygon`] - polyline contours, Green's-theorem integrals and half-plane clipping
//!
//! ## Coordinate Convention
//!
//! ```text
//!        y
//!        ▲
//!        │
//!        │
//!        └────────► x
//! ```
//!
//! `xx` properties refer to the horizontal centroidal axis (bending about x,
//! fibers measured in y); `yy` properties to the vertical centroidal axis.

pub mod polygon;
pub mod transform;

pub use polygon::{BendingAxis, Contour, ContourKind, PolygonIntegrals};
pub use transform::AnchorTransform;

use serde::{Deserialize, Serialize};

/// A point (or offset) in the section plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// The origin
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, used to apply an offset
    pub fn offset_by(self, offset: Point2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Degenerate box around a single point
    pub fn point(p: Point2) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Smallest box containing every point. `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::point(first), |b, p| b.including(p)))
    }

    /// Grow to include a point
    pub fn including(self, p: Point2) -> Self {
        Self::new(
            self.min_x.min(p.x),
            self.min_y.min(p.y),
            self.max_x.max(p.x),
            self.max_y.max(p.y),
        )
    }

    /// Smallest box containing both boxes
    pub fn union(self, other: Bounds) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Translate by an offset
    pub fn offset_by(self, offset: Point2) -> Self {
        Self::new(
            self.min_x + offset.x,
            self.min_y + offset.y,
            self.max_x + offset.x,
            self.max_y + offset.y,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
