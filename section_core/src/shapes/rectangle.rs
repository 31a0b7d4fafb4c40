//! Rectangle anchored at a corner.

use serde::Serialize;
use tracing::debug;

use crate::equations::section::{rectangular_area, rectangular_moment_of_inertia, rectangular_plastic_section_modulus};
use crate::errors::{require_finite, require_positive, SectionResult};
use crate::geometry::{AnchorTransform, Bounds, Contour, Point2};
use crate::properties::{CanonicalShape, LocalProperties};
use crate::settings::GeometrySettings;

/// Solid rectangle; width runs along +x and height along +y from the anchor
/// corner, before mirroring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
    placement: AnchorTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Rectangle {
    pub fn new(width: f64, height: f64, anchor: Point2) -> SectionResult<Self> {
        require_positive("width", width)?;
        require_positive("height", height)?;
        require_finite("anchor.x", anchor.x)?;
        require_finite("anchor.y", anchor.y)?;
        debug!(width, height, %anchor, "rectangle created");
        Ok(Self {
            width,
            height,
            placement: AnchorTransform::at(anchor),
            name: None,
        })
    }

    /// Same rectangle with the given mirror flags
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

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn anchor(&self) -> Point2 {
        self.placement.anchor
    }
}

impl CanonicalShape for Rectangle {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn placement(&self) -> AnchorTransform {
        self.placement
    }

    fn local_properties(&self) -> LocalProperties {
        let (w, h) = (self.width, self.height);
        LocalProperties {
            area: rectangular_area(w, h),
            perimeter: 2.0 * (w + h),
            centroid: Point2::new(w / 2.0, h / 2.0),
            bounds: Bounds::new(0.0, 0.0, w, h),
            moment_of_inertia_xx: rectangular_moment_of_inertia(w, h),
            moment_of_inertia_yy: rectangular_moment_of_inertia(h, w),
            product_of_inertia_xy: 0.0,
        }
    }

    fn local_plastic_moduli(&self) -> (f64, f64) {
        (
            rectangular_plastic_section_modulus(self.width, self.height),
            rectangular_plastic_section_modulus(self.height, self.width),
        )
    }

    fn local_contours(&self, _settings: &GeometrySettings) -> Vec<Contour> {
        let (w, h) = (self.width, self.height);
        vec![Contour::solid(vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, h),
            Point2::new(0.0, h),
        ])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::SectionProperties;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_properties() {
        let r = Rectangle::new(6.0, 100.0, Point2::new(10.0, 0.0)).unwrap();
        assert_relative_eq!(r.area(), 600.0);
        assert_relative_eq!(r.perimeter(), 212.0);
        assert_eq!(r.centroid(), Point2::new(13.0, 50.0));
        assert_relative_eq!(r.moment_of_inertia_xx(), 500_000.0);
        assert_relative_eq!(r.elastic_section_modulus_xx_top(), 10_000.0);
        assert_relative_eq!(r.elastic_section_modulus_yy_left(), 600.0);
        assert_relative_eq!(r.plastic_section_modulus_xx(), 15_000.0);
    }

    #[test]
    fn test_mirrored_rectangle_extends_left() {
        let r = Rectangle::new(4.0, 2.0, Point2::ORIGIN).unwrap().mirrored(true, false);
        assert_eq!(r.bounds(), Bounds::new(-4.0, 0.0, 0.0, 2.0));
        assert_eq!(r.centroid(), Point2::new(-2.0, 1.0));
    }

    #[test]
    fn test_rectangle_rejects_zero_height() {
        assert!(Rectangle::new(4.0, 0.0, Point2::ORIGIN).is_err());
    }
}
