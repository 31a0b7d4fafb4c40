//! Right-angle corner with a concave circular edge.
//!
//! The shape of a root fillet between two perpendicular plates: an r × r
//! square anchored at its 90° corner, minus the quarter circle of radius r
//! centred at the opposite square corner.
//!
//! ```text
//!   r ┬ ●
//!     │ │╲
//!     │ │ ╲_
//!     │ │   ╲__
//!   0 ┴ ●───────●
//!       0       r
//! ```
//!
//! Every property is closed form. The polyline from [`CanonicalShape::local_contours`]
//! only serves boundary sampling.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

use crate::equations::section::{
    parallel_axis, parallel_axis_product, quarter_circle_centroid_offset, quarter_circle_moment_of_inertia,
    quarter_circle_product_of_inertia,
};
use crate::errors::{require_finite, require_non_negative, SectionResult};
use crate::geometry::polygon::arc_points;
use crate::geometry::{AnchorTransform, Bounds, Contour, Point2};
use crate::properties::{CanonicalShape, LocalProperties};
use crate::settings::GeometrySettings;

/// Bisection steps for the equal-area line
const NEUTRAL_AXIS_ITERATIONS: usize = 100;

/// Fillet-shaped corner piece. A radius of zero is a degenerate point with
/// every property equal to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RightAngleCurved {
    radius: f64,
    placement: AnchorTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl RightAngleCurved {
    /// Create the corner piece with its 90° corner at `anchor`.
    ///
    /// # Errors
    /// `InvalidDimension` for a negative or non-finite radius.
    pub fn new(radius: f64, anchor: Point2) -> SectionResult<Self> {
        require_non_negative("radius", radius)?;
        require_finite("anchor.x", anchor.x)?;
        require_finite("anchor.y", anchor.y)?;
        debug!(radius, %anchor, "right-angle curved corner created");
        Ok(Self {
            radius,
            placement: AnchorTransform::at(anchor),
            name: None,
        })
    }

    /// Same corner with the given mirror flags
    pub fn mirrored(mut self, mirror_x: bool, mirror_y: bool) -> Self {
        self.placement = self.placement.mirrored(mirror_x, mirror_y);
        self
    }

    /// Toggle the mirror about the vertical line through the anchor
    pub fn flipped_x(mut self) -> Self {
        self.placement = self.placement.flip_x();
        self
    }

    /// Toggle the mirror about the horizontal line through the anchor
    pub fn flipped_y(mut self) -> Self {
        self.placement = self.placement.flip_y();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn anchor(&self) -> Point2 {
        self.placement.anchor
    }

    fn square_area(&self) -> f64 {
        self.radius * self.radius
    }

    fn quarter_circle_area(&self) -> f64 {
        PI * self.radius * self.radius / 4.0
    }

    /// Distance from the anchor to the quarter-circle centroid, along each axis
    fn quarter_circle_lever(&self) -> f64 {
        self.radius - quarter_circle_centroid_offset(self.radius)
    }

    /// Centroid offset from the anchor, identical along both legs
    fn centroid_offset(&self) -> f64 {
        let area = self.square_area() - self.quarter_circle_area();
        if area <= 0.0 {
            return 0.0;
        }
        (self.square_area() * self.radius / 2.0 - self.quarter_circle_area() * self.quarter_circle_lever()) / area
    }

    /// Area of the strip between the leg at 0 and a parallel line at `t`.
    fn strip_area(&self, t: f64) -> f64 {
        let r = self.radius;
        r * t - (arc_integral(r, r) - arc_integral(r, r - t))
    }

    /// First moment of the same strip about the leg at 0.
    fn strip_first_moment(&self, t: f64) -> f64 {
        let r = self.radius;
        let arc = r * (arc_integral(r, r) - arc_integral(r, r - t)) - (arc_moment(r, r) - arc_moment(r, r - t));
        r * t * t / 2.0 - arc
    }

    fn plastic_section_modulus(&self) -> f64 {
        let area = self.square_area() - self.quarter_circle_area();
        if self.radius == 0.0 || area <= 0.0 {
            return 0.0;
        }

        let half = area / 2.0;
        let (mut lo, mut hi) = (0.0, self.radius);
        for _ in 0..NEUTRAL_AXIS_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            if self.strip_area(mid) < half {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let t = 0.5 * (lo + hi);

        let total_moment = self.strip_first_moment(self.radius);
        let below = t * self.strip_area(t) - self.strip_first_moment(t);
        let above = (total_moment - self.strip_first_moment(t)) - t * (area - self.strip_area(t));
        below + above
    }
}

/// ∫√(r² − u²) du, antiderivative evaluated at `u` (clamped to [−r, r])
fn arc_integral(r: f64, u: f64) -> f64 {
    let u = u.clamp(-r, r);
    0.5 * (u * (r * r - u * u).max(0.0).sqrt() + r * r * (u / r).asin())
}

/// ∫u·√(r² − u²) du, antiderivative evaluated at `u` (clamped to [−r, r])
fn arc_moment(r: f64, u: f64) -> f64 {
    let u = u.clamp(-r, r);
    -(r * r - u * u).max(0.0).powf(1.5) / 3.0
}

impl CanonicalShape for RightAngleCurved {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn placement(&self) -> AnchorTransform {
        self.placement
    }

    fn local_properties(&self) -> LocalProperties {
        let r = self.radius;
        if r == 0.0 {
            return LocalProperties {
                area: 0.0,
                perimeter: 0.0,
                centroid: Point2::ORIGIN,
                bounds: Bounds::point(Point2::ORIGIN),
                moment_of_inertia_xx: 0.0,
                moment_of_inertia_yy: 0.0,
                product_of_inertia_xy: 0.0,
            };
        }

        let a_sq = self.square_area();
        let a_qc = self.quarter_circle_area();
        let d_qc = self.quarter_circle_lever();
        let area = a_sq - a_qc;
        let c = self.centroid_offset();

        // about the legs through the anchor, then onto the centroid
        let i_corner = r.powi(4) / 3.0 - parallel_axis(quarter_circle_moment_of_inertia(r), a_qc, d_qc);
        let i = i_corner - area * c * c;

        let p_corner = r.powi(4) / 4.0 - parallel_axis_product(quarter_circle_product_of_inertia(r), a_qc, d_qc, d_qc);
        let p = p_corner - area * c * c;

        LocalProperties {
            area,
            perimeter: 2.0 * r + PI * r / 2.0,
            centroid: Point2::new(c, c),
            bounds: Bounds::new(0.0, 0.0, r, r),
            moment_of_inertia_xx: i,
            moment_of_inertia_yy: i,
            product_of_inertia_xy: p,
        }
    }

    fn local_plastic_moduli(&self) -> (f64, f64) {
        let w = self.plastic_section_modulus();
        (w, w)
    }

    fn local_contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        let r = self.radius;
        if r == 0.0 {
            return Vec::new();
        }
        let mut points = vec![Point2::ORIGIN];
        points.extend(arc_points(
            Point2::new(r, r),
            r,
            3.0 * FRAC_PI_2,
            PI,
            settings.segments_for_sweep(FRAC_PI_2),
        ));
        vec![Contour::solid(points)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polygon::{plastic_section_modulus, BendingAxis};
    use crate::geometry::PolygonIntegrals;
    use crate::properties::SectionProperties;
    use approx::assert_relative_eq;

    #[test]
    fn test_area_complements_quarter_circle() {
        for r in [0.0, 0.5, 4.0, 9.0, 21.0] {
            let corner = RightAngleCurved::new(r, Point2::ORIGIN).unwrap();
            assert_relative_eq!(corner.area() + PI * r * r / 4.0, r * r, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_known_values_for_radius_nine() {
        let corner = RightAngleCurved::new(9.0, Point2::ORIGIN).unwrap();
        assert_relative_eq!(corner.area(), 17.38275, epsilon = 1e-4);
        assert_relative_eq!(corner.centroid().x, 2.010311, epsilon = 1e-5);
        assert_relative_eq!(corner.centroid().y, 2.010311, epsilon = 1e-5);
        assert_relative_eq!(corner.moment_of_inertia_xx(), 49.50350, epsilon = 1e-4);
        assert_relative_eq!(corner.product_of_inertia_xy(), -29.12216, epsilon = 1e-4);
        assert_relative_eq!(corner.plastic_section_modulus_xx(), 22.98154, epsilon = 1e-4);
        assert_relative_eq!(corner.perimeter(), 18.0 + 4.5 * PI, max_relative = 1e-12);
    }

    #[test]
    fn test_closed_form_matches_polygon() {
        let corner = RightAngleCurved::new(12.0, Point2::new(3.0, 4.0)).unwrap();
        let settings = GeometrySettings::default().with_arc_segments(8192);
        let contours = corner.contours(&settings);
        let numeric = PolygonIntegrals::of_contours(&contours);

        assert_relative_eq!(numeric.area, corner.area(), max_relative = 1e-4);
        assert_relative_eq!(numeric.centroid().x, corner.centroid().x, max_relative = 1e-4);
        assert_relative_eq!(numeric.centroidal_moment_xx(), corner.moment_of_inertia_xx(), max_relative = 1e-3);
        assert_relative_eq!(numeric.centroidal_product_xy(), corner.product_of_inertia_xy(), max_relative = 1e-3);
        assert_relative_eq!(
            plastic_section_modulus(&contours, BendingAxis::Xx),
            corner.plastic_section_modulus_xx(),
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_zero_radius_is_degenerate() {
        let corner = RightAngleCurved::new(0.0, Point2::new(1.0, 1.0)).unwrap();
        assert_eq!(corner.area(), 0.0);
        assert_eq!(corner.perimeter(), 0.0);
        assert_eq!(corner.moment_of_inertia_xx(), 0.0);
        assert_eq!(corner.elastic_section_modulus_xx_top(), 0.0);
        assert_eq!(corner.plastic_section_modulus_yy(), 0.0);
        assert_eq!(corner.radius_of_gyration_xx(), 0.0);
        assert_eq!(corner.centroid(), Point2::new(1.0, 1.0));
        assert!(corner.contours(&GeometrySettings::default()).is_empty());
    }

    #[test]
    fn test_mirroring_negates_centroid_offset() {
        let anchor = Point2::new(10.0, 20.0);
        let corner = RightAngleCurved::new(8.0, anchor).unwrap();
        let c = corner.centroid();

        let mirrored = corner.clone().mirrored(true, false);
        assert_relative_eq!(mirrored.centroid().x, 2.0 * anchor.x - c.x, max_relative = 1e-12);
        assert_relative_eq!(mirrored.centroid().y, c.y, max_relative = 1e-12);
        assert_relative_eq!(mirrored.product_of_inertia_xy(), -corner.product_of_inertia_xy(), max_relative = 1e-12);
        assert_eq!(mirrored.area(), corner.area());

        let both = corner.clone().mirrored(true, true);
        assert_relative_eq!(both.product_of_inertia_xy(), corner.product_of_inertia_xy(), max_relative = 1e-12);
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(RightAngleCurved::new(-1.0, Point2::ORIGIN).is_err());
    }
}
