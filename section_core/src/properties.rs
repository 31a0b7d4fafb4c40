//! # Section Property Contract
//!
//! Every primitive, the [`Primitive`](crate::shapes::Primitive) enum and the
//! [`CompositeSection`](crate::profiles::CompositeSection) expose the same set
//! of derived properties through [`SectionProperties`].
//!
//! Primitives do not implement the trait by hand. They implement
//! [`CanonicalShape`] instead: geometry in an unmirrored local frame whose
//! origin is the anchor, plus an [`AnchorTransform`]. The blanket
//! implementation maps local results onto the section plane, so mirroring is
//! handled in exactly one place.
//!
//! ## Example
//!
//! ```rust
//! use section_core::geometry::Point2;
//! use section_core::properties::SectionProperties;
//! use section_core::shapes::RightAngledTriangle;
//!
//! let triangle = RightAngledTriangle::new(30.0, 60.0, Point2::ORIGIN).unwrap();
//! assert!((triangle.area() - 900.0).abs() < 1e-9);
//! assert!((triangle.centroid().y - 20.0).abs() < 1e-9);
//!
//! let mirrored = triangle.mirrored(false, true);
//! assert!((mirrored.centroid().y + 20.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::{AnchorTransform, Bounds, Contour, Point2};
use crate::settings::GeometrySettings;

/// Fiber distances below this are treated as zero when forming W = I / c
const MIN_FIBER_DISTANCE: f64 = 1e-12;

/// Derived geometric properties shared by all sections.
///
/// Axis naming: `xx` is the horizontal centroidal axis, `yy` the vertical one.
pub trait SectionProperties {
    /// Optional display name
    fn name(&self) -> Option<&str> {
        None
    }

    /// Cross-sectional area A
    fn area(&self) -> f64;

    /// Length of the outer boundary
    fn perimeter(&self) -> f64;

    /// Centroid in the section plane
    fn centroid(&self) -> Point2;

    /// Axis-aligned extents in the section plane
    fn bounds(&self) -> Bounds;

    /// ∫(y − y_c)² dA
    fn moment_of_inertia_xx(&self) -> f64;

    /// ∫(x − x_c)² dA
    fn moment_of_inertia_yy(&self) -> f64;

    /// ∫(x − x_c)(y − y_c) dA
    fn product_of_inertia_xy(&self) -> f64;

    /// Plastic section modulus about the horizontal equal-area axis
    fn plastic_section_modulus_xx(&self) -> f64;

    /// Plastic section modulus about the vertical equal-area axis
    fn plastic_section_modulus_yy(&self) -> f64;

    /// Polyline approximation of the boundary, for sampling only
    fn contours(&self, settings: &GeometrySettings) -> Vec<Contour>;

    /// Elastic section modulus for the top fiber: I_xx / (y_max − y_c)
    fn elastic_section_modulus_xx_top(&self) -> f64 {
        elastic_modulus(self.moment_of_inertia_xx(), self.bounds().max_y - self.centroid().y)
    }

    /// Elastic section modulus for the bottom fiber: I_xx / (y_c − y_min)
    fn elastic_section_modulus_xx_bottom(&self) -> f64 {
        elastic_modulus(self.moment_of_inertia_xx(), self.centroid().y - self.bounds().min_y)
    }

    /// Elastic section modulus for the right fiber: I_yy / (x_max − x_c)
    fn elastic_section_modulus_yy_right(&self) -> f64 {
        elastic_modulus(self.moment_of_inertia_yy(), self.bounds().max_x - self.centroid().x)
    }

    /// Elastic section modulus for the left fiber: I_yy / (x_c − x_min)
    fn elastic_section_modulus_yy_left(&self) -> f64 {
        elastic_modulus(self.moment_of_inertia_yy(), self.centroid().x - self.bounds().min_x)
    }

    /// Governing (smaller) elastic modulus about the horizontal axis
    fn elastic_section_modulus_xx(&self) -> f64 {
        self.elastic_section_modulus_xx_top().min(self.elastic_section_modulus_xx_bottom())
    }

    /// Governing (smaller) elastic modulus about the vertical axis
    fn elastic_section_modulus_yy(&self) -> f64 {
        self.elastic_section_modulus_yy_right().min(self.elastic_section_modulus_yy_left())
    }

    /// √(I_xx / A), zero for a zero-area section
    fn radius_of_gyration_xx(&self) -> f64 {
        radius_of_gyration(self.moment_of_inertia_xx(), self.area())
    }

    /// √(I_yy / A), zero for a zero-area section
    fn radius_of_gyration_yy(&self) -> f64 {
        radius_of_gyration(self.moment_of_inertia_yy(), self.area())
    }

    /// I_xx + I_yy
    fn polar_moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia_xx() + self.moment_of_inertia_yy()
    }

    /// Snapshot of every property as a serializable record
    fn summary(&self) -> SectionPropertiesSummary {
        let centroid = self.centroid();
        SectionPropertiesSummary {
            name: self.name().map(str::to_string),
            area: self.area(),
            perimeter: self.perimeter(),
            centroid_x: centroid.x,
            centroid_y: centroid.y,
            bounds: self.bounds(),
            moment_of_inertia_xx: self.moment_of_inertia_xx(),
            moment_of_inertia_yy: self.moment_of_inertia_yy(),
            product_of_inertia_xy: self.product_of_inertia_xy(),
            elastic_section_modulus_xx_top: self.elastic_section_modulus_xx_top(),
            elastic_section_modulus_xx_bottom: self.elastic_section_modulus_xx_bottom(),
            elastic_section_modulus_yy_right: self.elastic_section_modulus_yy_right(),
            elastic_section_modulus_yy_left: self.elastic_section_modulus_yy_left(),
            plastic_section_modulus_xx: self.plastic_section_modulus_xx(),
            plastic_section_modulus_yy: self.plastic_section_modulus_yy(),
            radius_of_gyration_xx: self.radius_of_gyration_xx(),
            radius_of_gyration_yy: self.radius_of_gyration_yy(),
        }
    }
}

fn elastic_modulus(inertia: f64, fiber_distance: f64) -> f64 {
    if fiber_distance.abs() < MIN_FIBER_DISTANCE {
        0.0
    } else {
        inertia / fiber_distance
    }
}

fn radius_of_gyration(inertia: f64, area: f64) -> f64 {
    if area <= 0.0 {
        0.0
    } else {
        (inertia / area).max(0.0).sqrt()
    }
}

/// Properties of a primitive in its own unmirrored frame (origin = anchor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalProperties {
    pub area: f64,
    pub perimeter: f64,
    pub centroid: Point2,
    pub bounds: Bounds,
    pub moment_of_inertia_xx: f64,
    pub moment_of_inertia_yy: f64,
    pub product_of_inertia_xy: f64,
}

/// Geometry computed once in a canonical frame and placed by an [`AnchorTransform`].
pub trait CanonicalShape {
    /// Optional display name
    fn display_name(&self) -> Option<&str>;

    /// Anchor and mirror flags
    fn placement(&self) -> AnchorTransform;

    /// Closed-form properties in the local frame
    fn local_properties(&self) -> LocalProperties;

    /// Plastic moduli (xx, yy); invariant under mirroring about anchor lines
    fn local_plastic_moduli(&self) -> (f64, f64);

    /// Boundary polylines in the local frame
    fn local_contours(&self, settings: &GeometrySettings) -> Vec<Contour>;
}

impl<T: CanonicalShape> SectionProperties for T {
    fn name(&self) -> Option<&str> {
        self.display_name()
    }

    fn area(&self) -> f64 {
        self.local_properties().area
    }

    fn perimeter(&self) -> f64 {
        self.local_properties().perimeter
    }

    fn centroid(&self) -> Point2 {
        self.placement().apply(self.local_properties().centroid)
    }

    fn bounds(&self) -> Bounds {
        self.placement().apply_bounds(self.local_properties().bounds)
    }

    fn moment_of_inertia_xx(&self) -> f64 {
        self.local_properties().moment_of_inertia_xx
    }

    fn moment_of_inertia_yy(&self) -> f64 {
        self.local_properties().moment_of_inertia_yy
    }

    fn product_of_inertia_xy(&self) -> f64 {
        self.placement()
            .apply_product_of_inertia(self.local_properties().product_of_inertia_xy)
    }

    fn plastic_section_modulus_xx(&self) -> f64 {
        self.local_plastic_moduli().0
    }

    fn plastic_section_modulus_yy(&self) -> f64 {
        self.local_plastic_moduli().1
    }

    fn contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        let placement = self.placement();
        self.local_contours(settings)
            .into_iter()
            .map(|c| Contour {
                points: placement.apply_points(&c.points),
                kind: c.kind,
            })
            .collect()
    }
}

/// All computed properties of one section, ready for JSON output.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "LNP 100x50x6",
///   "area": 872.7,
///   "perimeter": 293.4,
///   "centroid_x": 12.4,
///   "centroid_y": 34.9,
///   "moment_of_inertia_xx": 896000.0,
///   "plastic_section_modulus_xx": 24800.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPropertiesSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub area: f64,
    pub perimeter: f64,
    pub centroid_x: f64,
    pub centroid_y: f64,
    pub bounds: Bounds,
    pub moment_of_inertia_xx: f64,
    pub moment_of_inertia_yy: f64,
    pub product_of_inertia_xy: f64,
    pub elastic_section_modulus_xx_top: f64,
    pub elastic_section_modulus_xx_bottom: f64,
    pub elastic_section_modulus_yy_right: f64,
    pub elastic_section_modulus_yy_left: f64,
    pub plastic_section_modulus_xx: f64,
    pub plastic_section_modulus_yy: f64,
    pub radius_of_gyration_xx: f64,
    pub radius_of_gyration_yy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elastic_modulus_guards_zero_distance() {
        assert_eq!(elastic_modulus(10.0, 0.0), 0.0);
        assert_eq!(elastic_modulus(10.0, 2.0), 5.0);
    }

    #[test]
    fn test_radius_of_gyration_guards_zero_area() {
        assert_eq!(radius_of_gyration(10.0, 0.0), 0.0);
        assert_eq!(radius_of_gyration(16.0, 4.0), 2.0);
    }
}
