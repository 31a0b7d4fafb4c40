//! Solid circle and circular tube.
//!
//! Both are centered on their anchor and symmetric about every axis through
//! it, so they carry no mirror flags. The tube is the difference of two
//! concentric discs; every property follows by superposition.

use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

use crate::equations::section::{circular_area, circular_moment_of_inertia, circular_plastic_section_modulus};
use crate::errors::{require_finite, require_non_negative, require_positive, SectionError, SectionResult};
use crate::geometry::polygon::circle_points;
use crate::geometry::{AnchorTransform, Bounds, Contour, Point2};
use crate::properties::{CanonicalShape, LocalProperties};
use crate::settings::GeometrySettings;

/// Solid circular section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    diameter: f64,
    center: Point2,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Circle {
    /// Create a circle from its diameter and center.
    ///
    /// # Errors
    /// `InvalidDimension` if the diameter is not strictly positive.
    pub fn new(diameter: f64, center: Point2) -> SectionResult<Self> {
        require_positive("diameter", diameter)?;
        require_finite("center.x", center.x)?;
        require_finite("center.y", center.y)?;
        debug!(diameter, %center, "circle created");
        Ok(Self { diameter, center, name: None })
    }

    /// Builder: attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn center(&self) -> Point2 {
        self.center
    }
}

impl CanonicalShape for Circle {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn placement(&self) -> AnchorTransform {
        AnchorTransform::at(self.center)
    }

    fn local_properties(&self) -> LocalProperties {
        let r = self.radius();
        let i = circular_moment_of_inertia(self.diameter);
        LocalProperties {
            area: circular_area(self.diameter),
            perimeter: PI * self.diameter,
            centroid: Point2::ORIGIN,
            bounds: Bounds::new(-r, -r, r, r),
            moment_of_inertia_xx: i,
            moment_of_inertia_yy: i,
            product_of_inertia_xy: 0.0,
        }
    }

    fn local_plastic_moduli(&self) -> (f64, f64) {
        let w = circular_plastic_section_modulus(self.diameter);
        (w, w)
    }

    fn local_contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        vec![Contour::solid(circle_points(Point2::ORIGIN, self.radius(), settings.arc_segments))]
    }
}

/// Circular hollow section (annulus). An inner diameter of zero is a solid disc.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tube {
    outer_diameter: f64,
    inner_diameter: f64,
    center: Point2,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Tube {
    /// Create a tube from outer and inner diameter.
    ///
    /// # Errors
    /// `InvalidDimension` if the outer diameter is not positive, the inner
    /// diameter is negative, or the inner diameter reaches the outer one.
    pub fn new(outer_diameter: f64, inner_diameter: f64, center: Point2) -> SectionResult<Self> {
        require_positive("outer_diameter", outer_diameter)?;
        require_non_negative("inner_diameter", inner_diameter)?;
        if inner_diameter >= outer_diameter {
            return Err(SectionError::invalid_dimension(
                "inner_diameter",
                inner_diameter.to_string(),
                format!("Must be smaller than the outer diameter {}", outer_diameter),
            ));
        }
        require_finite("center.x", center.x)?;
        require_finite("center.y", center.y)?;
        debug!(outer_diameter, inner_diameter, %center, "tube created");
        Ok(Self {
            outer_diameter,
            inner_diameter,
            center,
            name: None,
        })
    }

    /// Create a tube from its outer diameter and wall thickness.
    pub fn from_wall_thickness(outer_diameter: f64, wall_thickness: f64, center: Point2) -> SectionResult<Self> {
        require_positive("wall_thickness", wall_thickness)?;
        Self::new(outer_diameter, outer_diameter - 2.0 * wall_thickness, center)
    }

    /// Builder: attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn outer_diameter(&self) -> f64 {
        self.outer_diameter
    }

    pub fn inner_diameter(&self) -> f64 {
        self.inner_diameter
    }

    pub fn wall_thickness(&self) -> f64 {
        (self.outer_diameter - self.inner_diameter) / 2.0
    }

    pub fn center(&self) -> Point2 {
        self.center
    }
}

impl CanonicalShape for Tube {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn placement(&self) -> AnchorTransform {
        AnchorTransform::at(self.center)
    }

    fn local_properties(&self) -> LocalProperties {
        let r = self.outer_diameter / 2.0;
        let i = circular_moment_of_inertia(self.outer_diameter) - circular_moment_of_inertia(self.inner_diameter);
        LocalProperties {
            area: circular_area(self.outer_diameter) - circular_area(self.inner_diameter),
            perimeter: PI * self.outer_diameter,
            centroid: Point2::ORIGIN,
            bounds: Bounds::new(-r, -r, r, r),
            moment_of_inertia_xx: i,
            moment_of_inertia_yy: i,
            product_of_inertia_xy: 0.0,
        }
    }

    fn local_plastic_moduli(&self) -> (f64, f64) {
        let w = circular_plastic_section_modulus(self.outer_diameter)
            - circular_plastic_section_modulus(self.inner_diameter);
        (w, w)
    }

    fn local_contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        let mut contours = vec![Contour::solid(circle_points(
            Point2::ORIGIN,
            self.outer_diameter / 2.0,
            settings.arc_segments,
        ))];
        if self.inner_diameter > 0.0 {
            let mut hole = circle_points(Point2::ORIGIN, self.inner_diameter / 2.0, settings.arc_segments);
            hole.reverse();
            contours.push(Contour::void(hole));
        }
        contours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PolygonIntegrals;
    use crate::properties::SectionProperties;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_properties() {
        let c = Circle::new(100.0, Point2::new(5.0, -3.0)).unwrap();
        assert_relative_eq!(c.area(), 7853.981634, max_relative = 1e-9);
        assert_relative_eq!(c.perimeter(), 314.159265, max_relative = 1e-9);
        assert_eq!(c.centroid(), Point2::new(5.0, -3.0));
        assert_relative_eq!(c.elastic_section_modulus_xx_top(), PI * 100f64.powi(3) / 32.0, max_relative = 1e-12);
        assert_relative_eq!(c.plastic_section_modulus_xx(), 1_000_000.0 / 6.0, max_relative = 1e-12);
        assert_eq!(c.product_of_inertia_xy(), 0.0);
    }

    #[test]
    fn test_circle_rejects_non_positive_diameter() {
        assert!(Circle::new(0.0, Point2::ORIGIN).is_err());
        let err = Circle::new(-1.0, Point2::ORIGIN).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_tube_is_difference_of_circles() {
        let outer = Circle::new(100.0, Point2::ORIGIN).unwrap();
        let inner = Circle::new(80.0, Point2::ORIGIN).unwrap();
        let tube = Tube::new(100.0, 80.0, Point2::ORIGIN).unwrap();

        assert_relative_eq!(tube.area(), outer.area() - inner.area(), max_relative = 1e-12);
        assert_relative_eq!(
            tube.moment_of_inertia_xx(),
            outer.moment_of_inertia_xx() - inner.moment_of_inertia_xx(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            tube.plastic_section_modulus_yy(),
            outer.plastic_section_modulus_yy() - inner.plastic_section_modulus_yy(),
            max_relative = 1e-12
        );
        assert_relative_eq!(tube.elastic_section_modulus_xx(), tube.moment_of_inertia_xx() / 50.0, max_relative = 1e-12);
    }

    #[test]
    fn test_tube_validation() {
        assert!(Tube::new(100.0, 100.0, Point2::ORIGIN).is_err());
        assert!(Tube::new(100.0, 120.0, Point2::ORIGIN).is_err());
        assert!(Tube::new(100.0, -1.0, Point2::ORIGIN).is_err());
        assert!(Tube::from_wall_thickness(100.0, 60.0, Point2::ORIGIN).is_err());
    }

    #[test]
    fn test_tube_with_zero_bore_is_a_disc() {
        let tube = Tube::new(40.0, 0.0, Point2::ORIGIN).unwrap();
        let disc = Circle::new(40.0, Point2::ORIGIN).unwrap();
        assert_relative_eq!(tube.area(), disc.area());
        assert_eq!(tube.contours(&GeometrySettings::default()).len(), 1);
    }

    #[test]
    fn test_tube_contours_match_closed_form() {
        let tube = Tube::from_wall_thickness(60.0, 5.0, Point2::new(10.0, 10.0)).unwrap();
        let settings = GeometrySettings::default().with_arc_segments(2048);
        let numeric = PolygonIntegrals::of_contours(&tube.contours(&settings));
        assert_relative_eq!(numeric.area, tube.area(), max_relative = 1e-4);
        assert_relative_eq!(numeric.centroid().x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(numeric.centroidal_moment_xx(), tube.moment_of_inertia_xx(), max_relative = 1e-4);
    }
}
