//! Polyline contours and their integrals.
//!
//! Closed-form shape properties never go through this module. It serves three
//! jobs that genuinely need a polygon:
//!
//! - boundary sampling (point-in-polygon tests for interior grids)
//! - plastic moduli of shapes without a closed form (rotated sectors, composites),
//!   found by clipping contours at the equal-area axis
//! - an independent numerical cross-check of closed-form and composite results
//!
//! Integrals use Green's theorem over each edge, so they are exact for the
//! polygon itself; the only error is the polyline approximation of arcs.

use serde::{Deserialize, Serialize};

use super::{Bounds, Point2};

/// Bisection steps for the plastic neutral axis; halves the bracket each time
const NEUTRAL_AXIS_ITERATIONS: usize = 200;

/// Whether a contour adds or removes material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContourKind {
    #[default]
    Solid,
    Void,
}

impl ContourKind {
    fn sign(self) -> f64 {
        match self {
            ContourKind::Solid => 1.0,
            ContourKind::Void => -1.0,
        }
    }
}

/// A closed polyline (last point implicitly connects to the first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point2>,
    pub kind: ContourKind,
}

impl Contour {
    pub fn solid(points: Vec<Point2>) -> Self {
        Self { points, kind: ContourKind::Solid }
    }

    pub fn void(points: Vec<Point2>) -> Self {
        Self { points, kind: ContourKind::Void }
    }

    /// Translate every point
    pub fn offset_by(mut self, offset: Point2) -> Self {
        for p in &mut self.points {
            *p = p.offset_by(offset);
        }
        self
    }

    /// Material integrals of this contour, negative for voids
    pub fn integrals(&self) -> PolygonIntegrals {
        PolygonIntegrals::of_polygon(&self.points).scaled(self.kind.sign())
    }

    /// Bounding box of the contour points
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter().copied())
    }
}

/// Which centroidal axis a bending quantity refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BendingAxis {
    /// Horizontal axis; fibers measured in y
    Xx,
    /// Vertical axis; fibers measured in x
    Yy,
}

impl BendingAxis {
    fn coordinate(self, p: Point2) -> f64 {
        match self {
            BendingAxis::Xx => p.y,
            BendingAxis::Yy => p.x,
        }
    }
}

/// Area integrals about the coordinate origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonIntegrals {
    /// ∫ dA
    pub area: f64,
    /// ∫ x dA
    pub first_moment_x: f64,
    /// ∫ y dA
    pub first_moment_y: f64,
    /// ∫ x² dA
    pub second_moment_xx: f64,
    /// ∫ y² dA
    pub second_moment_yy: f64,
    /// ∫ xy dA
    pub product_xy: f64,
}

impl PolygonIntegrals {
    /// Integrals of a simple polygon, normalised to a positive area regardless
    /// of the winding direction.
    pub fn of_polygon(points: &[Point2]) -> Self {
        if points.len() < 3 {
            return Self::default();
        }

        let mut acc = Self::default();
        for (i, p) in points.iter().enumerate() {
            let q = points[(i + 1) % points.len()];
            let cross = p.x * q.y - q.x * p.y;
            acc.area += cross / 2.0;
            acc.first_moment_x += (p.x + q.x) * cross / 6.0;
            acc.first_moment_y += (p.y + q.y) * cross / 6.0;
            acc.second_moment_xx += (p.x * p.x + p.x * q.x + q.x * q.x) * cross / 12.0;
            acc.second_moment_yy += (p.y * p.y + p.y * q.y + q.y * q.y) * cross / 12.0;
            acc.product_xy += (p.x * q.y + 2.0 * p.x * p.y + 2.0 * q.x * q.y + q.x * p.y) * cross / 24.0;
        }

        if acc.area < 0.0 {
            acc.scaled(-1.0)
        } else {
            acc
        }
    }

    /// Signed sum over several contours
    pub fn of_contours(contours: &[Contour]) -> Self {
        contours
            .iter()
            .map(Contour::integrals)
            .fold(Self::default(), |acc, c| acc.plus(&c))
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            area: self.area * factor,
            first_moment_x: self.first_moment_x * factor,
            first_moment_y: self.first_moment_y * factor,
            second_moment_xx: self.second_moment_xx * factor,
            second_moment_yy: self.second_moment_yy * factor,
            product_xy: self.product_xy * factor,
        }
    }

    pub fn plus(&self, other: &Self) -> Self {
        Self {
            area: self.area + other.area,
            first_moment_x: self.first_moment_x + other.first_moment_x,
            first_moment_y: self.first_moment_y + other.first_moment_y,
            second_moment_xx: self.second_moment_xx + other.second_moment_xx,
            second_moment_yy: self.second_moment_yy + other.second_moment_yy,
            product_xy: self.product_xy + other.product_xy,
        }
    }

    /// Centroid; the origin for a zero-area polygon
    pub fn centroid(&self) -> Point2 {
        if self.area.abs() <= f64::EPSILON {
            return Point2::ORIGIN;
        }
        Point2::new(self.first_moment_x / self.area, self.first_moment_y / self.area)
    }

    /// ∫ (y − y_c)² dA
    pub fn centroidal_moment_xx(&self) -> f64 {
        let c = self.centroid();
        self.second_moment_yy - self.area * c.y * c.y
    }

    /// ∫ (x − x_c)² dA
    pub fn centroidal_moment_yy(&self) -> f64 {
        let c = self.centroid();
        self.second_moment_xx - self.area * c.x * c.x
    }

    /// ∫ (x − x_c)(y − y_c) dA
    pub fn centroidal_product_xy(&self) -> f64 {
        let c = self.centroid();
        self.product_xy - self.area * c.x * c.y
    }
}

/// Points on a circular arc, both endpoints included.
///
/// Angles are standard math angles in radians (0 = +x, counter-clockwise);
/// the arc runs from `from_rad` to `to_rad` in either direction.
pub fn arc_points(center: Point2, radius: f64, from_rad: f64, to_rad: f64, segments: usize) -> Vec<Point2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let angle = from_rad + (to_rad - from_rad) * i as f64 / segments as f64;
            Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Counter-clockwise polygon approximating a full circle (no repeated point).
pub fn circle_points(center: Point2, radius: f64, segments: usize) -> Vec<Point2> {
    let mut points = arc_points(center, radius, 0.0, std::f64::consts::TAU, segments);
    points.pop();
    points
}

/// Ray-casting point-in-polygon test. Points exactly on an edge may go either way.
pub fn point_in_polygon(point: Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pj.x + (point.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Clip a polygon to the half-plane `coordinate ≥ level` (or `≤ level`).
///
/// Sutherland-Hodgman against a single line. For concave input the result can
/// contain zero-width bridges along the clip line; those contribute nothing
/// to area integrals, which is all this is used for.
pub fn clip_half_plane(points: &[Point2], axis: BendingAxis, level: f64, keep_above: bool) -> Vec<Point2> {
    let inside = |p: Point2| {
        let s = axis.coordinate(p);
        if keep_above { s >= level } else { s <= level }
    };
    let intersect = |a: Point2, b: Point2| {
        let (sa, sb) = (axis.coordinate(a), axis.coordinate(b));
        let t = (level - sa) / (sb - sa);
        Point2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
    };

    let mut out = Vec::with_capacity(points.len() + 2);
    for (i, &current) in points.iter().enumerate() {
        let previous = points[(i + points.len() - 1) % points.len()];
        match (inside(previous), inside(current)) {
            (true, true) => out.push(current),
            (true, false) => out.push(intersect(previous, current)),
            (false, true) => {
                out.push(intersect(previous, current));
                out.push(current);
            }
            (false, false) => {}
        }
    }
    out
}

/// Plastic section modulus of a set of contours about the equal-area axis
/// parallel to `axis`.
///
/// The neutral axis position is found by bisection on the clipped area; the
/// modulus is the sum of the first moments of both halves about that axis.
pub fn plastic_section_modulus(contours: &[Contour], axis: BendingAxis) -> f64 {
    let total = PolygonIntegrals::of_contours(contours);
    if total.area <= 0.0 {
        return 0.0;
    }

    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in contours.iter().flat_map(|c| c.points.iter()) {
        let s = axis.coordinate(*p);
        lo = lo.min(s);
        hi = hi.max(s);
    }

    let clipped = |level: f64, keep_above: bool| -> PolygonIntegrals {
        contours
            .iter()
            .map(|c| {
                let part = clip_half_plane(&c.points, axis, level, keep_above);
                PolygonIntegrals::of_polygon(&part).scaled(c.kind.sign())
            })
            .fold(PolygonIntegrals::default(), |acc, i| acc.plus(&i))
    };

    let half = total.area / 2.0;
    for _ in 0..NEUTRAL_AXIS_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if clipped(mid, true).area > half {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= f64::EPSILON * hi.abs().max(1.0) {
            break;
        }
    }
    let level = 0.5 * (lo + hi);

    let first_moment = |i: &PolygonIntegrals| match axis {
        BendingAxis::Xx => i.first_moment_y,
        BendingAxis::Yy => i.first_moment_x,
    };
    let above = clipped(level, true);
    let below = clipped(level, false);
    (first_moment(&above) - level * above.area) + (level * below.area - first_moment(&below))
}
