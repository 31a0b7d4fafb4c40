//! LNP Unequal Angle Profiles
//!
//! An angle is assembled as a [`CompositeSection`] in a frame with the outer
//! (back) corner at the origin, the web running up along x ∈ [0, t_w] and the
//! base running right along y ∈ [0, t_b]:
//!
//! ```text
//!   y
//!   h ┬─╮            web toe rounded with r_tw
//!     │ │
//!     │ │ web
//!     │ ╰╮           root fillet r1 at (t_w, t_b)
//!  t_b│  ╰──────╮    base toe rounded with r_tb
//!   0 ╰─────────┘ x
//!     corner    b
//! ```
//!
//! Pieces: the corner block t_w × t_b (back corner rounded with r_b), the web
//! above it, the base to its right and the root fillet in the inner corner.
//! Rounded corners are split into rectangles plus a quarter-disc
//! [`AnnularSector`]; pieces of zero extent are left out.
//!
//! ## Example
//!
//! ```rust
//! use section_core::materials::SteelGrade;
//! use section_core::profiles::LnpProfile;
//! use section_core::properties::SectionProperties;
//!
//! let angle = LnpProfile::from_catalog("LNP 100x50x6", 0.0, SteelGrade::S235).unwrap();
//! assert!((angle.area() - 871.0).abs() / 871.0 < 0.01);
//!
//! let corroded = LnpProfile::from_catalog("LNP 100x50x6", 1.0, SteelGrade::S235).unwrap();
//! assert_eq!(corroded.name(), Some("LNP 100x50x6 (corrosion: 1 mm)"));
//! assert!(corroded.area() < angle.area());
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use tracing::{debug, warn};

use super::catalog::{self, CatalogEntry};
use super::composite::{CompositeSection, SectionElement};
use crate::errors::{require_non_negative, require_positive, SectionError, SectionResult};
use crate::geometry::{Bounds, Contour, Point2};
use crate::materials::Material;
use crate::properties::SectionProperties;
use crate::settings::GeometrySettings;
use crate::shapes::{AnnularSector, Primitive, Rectangle, RightAngleCurved};

/// Outer dimensions and radii of an angle (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LnpDimensions {
    /// Outer width b (base leg)
    pub width: f64,
    /// Outer height h (web leg)
    pub height: f64,
    pub web_thickness: f64,
    pub base_thickness: f64,
    /// Root radius r1 between web and base
    pub root_radius: f64,
    /// Radius of the outer corner
    pub back_radius: f64,
    pub web_toe_radius: f64,
    pub base_toe_radius: f64,
}

impl LnpDimensions {
    /// Nominal dimensions of a catalog entry. The catalog tabulates the long
    /// leg as the web.
    pub fn from_catalog(entry: &CatalogEntry) -> Self {
        Self {
            width: entry.width,
            height: entry.height,
            web_thickness: entry.thickness,
            base_thickness: entry.thickness,
            root_radius: entry.root_radius,
            back_radius: 0.0,
            web_toe_radius: entry.toe_radius,
            base_toe_radius: entry.toe_radius,
        }
    }

    /// Check that every piece is non-degenerate and fits inside its leg.
    pub fn validate(&self) -> SectionResult<()> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("web_thickness", self.web_thickness)?;
        require_positive("base_thickness", self.base_thickness)?;
        require_non_negative("root_radius", self.root_radius)?;
        require_non_negative("back_radius", self.back_radius)?;
        require_non_negative("web_toe_radius", self.web_toe_radius)?;
        require_non_negative("base_toe_radius", self.base_toe_radius)?;

        if self.web_thickness >= self.width {
            return Err(SectionError::invalid_dimension(
                "web_thickness",
                self.web_thickness.to_string(),
                format!("Must be less than the width {}", self.width),
            ));
        }
        if self.base_thickness >= self.height {
            return Err(SectionError::invalid_dimension(
                "base_thickness",
                self.base_thickness.to_string(),
                format!("Must be less than the height {}", self.height),
            ));
        }
        let thinnest = self.web_thickness.min(self.base_thickness);
        if self.back_radius > thinnest {
            return Err(SectionError::invalid_dimension(
                "back_radius",
                self.back_radius.to_string(),
                format!("Exceeds the thinner wall {}", thinnest),
            ));
        }
        if self.web_toe_radius > self.web_thickness {
            return Err(SectionError::invalid_dimension(
                "web_toe_radius",
                self.web_toe_radius.to_string(),
                format!("Exceeds the web thickness {}", self.web_thickness),
            ));
        }
        if self.base_toe_radius > self.base_thickness {
            return Err(SectionError::invalid_dimension(
                "base_toe_radius",
                self.base_toe_radius.to_string(),
                format!("Exceeds the base thickness {}", self.base_thickness),
            ));
        }

        let web_clear = self.height - self.base_thickness;
        if self.root_radius + self.web_toe_radius > web_clear {
            return Err(SectionError::invalid_dimension(
                "root_radius",
                self.root_radius.to_string(),
                format!("Root fillet and web toe do not fit in the {} mm web", web_clear),
            ));
        }
        let base_clear = self.width - self.web_thickness;
        if self.root_radius + self.base_toe_radius > base_clear {
            return Err(SectionError::invalid_dimension(
                "root_radius",
                self.root_radius.to_string(),
                format!("Root fillet and base toe do not fit in the {} mm base", base_clear),
            ));
        }
        Ok(())
    }

    /// Outline length without polygonization. Each rounded corner trades two
    /// straight runs of length r for a quarter arc.
    pub fn closed_form_perimeter(&self) -> f64 {
        let radii = self.root_radius + self.back_radius + self.web_toe_radius + self.base_toe_radius;
        2.0 * (self.width + self.height) - (2.0 - FRAC_PI_2) * radii
    }

    /// Dimensions after removing `corrosion_mm` from every exposed face.
    ///
    /// Each leg and wall loses 2c, the root radius grows by c and the back
    /// radius shrinks by c. A toe radius larger than its own reduced wall is
    /// capped at that wall.
    ///
    /// # Errors
    /// `FullyCorroded` when either wall is consumed, reporting that wall.
    pub fn corroded(&self, profile: &str, corrosion_mm: f64) -> SectionResult<Self> {
        let c = corrosion_mm;
        let web_wall = self.web_thickness - 2.0 * c;
        let base_wall = self.base_thickness - 2.0 * c;
        for wall in [web_wall, base_wall] {
            if wall <= 0.0 {
                return Err(SectionError::fully_corroded(profile, c, wall.max(0.0)));
            }
        }

        let cap_toe = |toe: f64, wall: f64, leg: &str| {
            if toe > wall {
                warn!(profile, leg, toe_radius = toe, wall, "toe radius capped at corroded wall");
                wall
            } else {
                toe
            }
        };
        Ok(Self {
            width: self.width - 2.0 * c,
            height: self.height - 2.0 * c,
            web_thickness: web_wall,
            base_thickness: base_wall,
            root_radius: self.root_radius + c,
            back_radius: (self.back_radius - c).max(0.0),
            web_toe_radius: cap_toe(self.web_toe_radius, web_wall, "web"),
            base_toe_radius: cap_toe(self.base_toe_radius, base_wall, "base"),
        })
    }

    /// Thickest wall, used for the corner and the root fillet
    fn corner_thickness(&self) -> f64 {
        self.web_thickness.max(self.base_thickness)
    }
}

/// Hot-rolled unequal angle built from placed primitives.
#[derive(Debug, Clone, Serialize)]
pub struct LnpProfile {
    designation: String,
    corrosion_mm: f64,
    dimensions: LnpDimensions,
    section: CompositeSection,
}

impl LnpProfile {
    /// Build an angle from explicit dimensions.
    ///
    /// # Errors
    /// `InvalidDimension` if the dimensions fail [`LnpDimensions::validate`].
    pub fn new(
        designation: impl Into<String>,
        dimensions: LnpDimensions,
        material: impl Into<Material>,
    ) -> SectionResult<Self> {
        Self::assemble(designation.into(), 0.0, dimensions, material.into())
    }

    /// Look up a catalog angle and apply a uniform corrosion allowance to
    /// every exposed face.
    ///
    /// Legs and walls lose 2c, the root radius grows by c, the back radius
    /// shrinks by c (never below zero) and each toe radius is capped at its
    /// own reduced wall. See [`LnpDimensions::corroded`].
    ///
    /// # Errors
    /// - `ProfileNotFound` for an unknown designation
    /// - `InvalidDimension` for negative or non-finite corrosion
    /// - `FullyCorroded` when a wall is consumed
    pub fn from_catalog(designation: &str, corrosion_mm: f64, material: impl Into<Material>) -> SectionResult<Self> {
        let entry = catalog::lookup(designation)?;
        if !corrosion_mm.is_finite() || corrosion_mm < 0.0 {
            return Err(SectionError::invalid_dimension(
                "corrosion",
                corrosion_mm.to_string(),
                "Corrosion must be zero or positive",
            ));
        }

        let profile = entry.designation();
        let corroded = LnpDimensions::from_catalog(entry).corroded(&profile, corrosion_mm)?;
        let name = if corrosion_mm > 0.0 {
            format!("{} (corrosion: {} mm)", profile, format_mm(corrosion_mm))
        } else {
            profile
        };
        Self::assemble(name, corrosion_mm, corroded, material.into())
    }

    fn assemble(designation: String, corrosion_mm: f64, dims: LnpDimensions, material: Material) -> SectionResult<Self> {
        dims.validate()?;
        let elements = PieceLayout::new(material).build(&dims)?;
        debug!(designation = %designation, corrosion_mm, pieces = elements.len(), "LNP profile assembled");
        let section = CompositeSection::new(designation.clone(), elements);
        Ok(Self {
            designation,
            corrosion_mm,
            dimensions: dims,
            section,
        })
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn corrosion_mm(&self) -> f64 {
        self.corrosion_mm
    }

    /// Effective (possibly corroded) dimensions
    pub fn dimensions(&self) -> &LnpDimensions {
        &self.dimensions
    }

    pub fn section(&self) -> &CompositeSection {
        &self.section
    }

    pub fn into_section(self) -> CompositeSection {
        self.section
    }
}

impl SectionProperties for LnpProfile {
    fn name(&self) -> Option<&str> {
        Some(&self.designation)
    }

    fn area(&self) -> f64 {
        self.section.area()
    }

    fn perimeter(&self) -> f64 {
        self.section.perimeter()
    }

    fn centroid(&self) -> Point2 {
        self.section.centroid()
    }

    fn bounds(&self) -> Bounds {
        self.section.bounds()
    }

    fn moment_of_inertia_xx(&self) -> f64 {
        self.section.moment_of_inertia_xx()
    }

    fn moment_of_inertia_yy(&self) -> f64 {
        self.section.moment_of_inertia_yy()
    }

    fn product_of_inertia_xy(&self) -> f64 {
        self.section.product_of_inertia_xy()
    }

    fn plastic_section_modulus_xx(&self) -> f64 {
        self.section.plastic_section_modulus_xx()
    }

    fn plastic_section_modulus_yy(&self) -> f64 {
        self.section.plastic_section_modulus_yy()
    }

    fn contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        self.section.contours(settings)
    }
}

/// Collects the pieces of one angle, skipping empty ones.
struct PieceLayout {
    material: Material,
    elements: Vec<SectionElement>,
}

impl PieceLayout {
    fn new(material: Material) -> Self {
        Self {
            material,
            elements: Vec::new(),
        }
    }

    fn build(mut self, d: &LnpDimensions) -> SectionResult<Vec<SectionElement>> {
        let (b, h, tw, tb) = (d.width, d.height, d.web_thickness, d.base_thickness);
        let corner_t = d.corner_thickness();

        // corner block, back corner rounded
        let rb = d.back_radius;
        let corner = Point2::ORIGIN;
        if rb > 0.0 {
            self.rect("corner", tw - rb, tb, Point2::new(rb, 0.0), corner, corner_t)?;
            self.rect("corner-back", rb, tb - rb, Point2::new(0.0, rb), corner, corner_t)?;
            self.quarter_disc("corner-back-rounding", rb, 180.0, Point2::new(rb, rb), corner, corner_t)?;
        } else {
            self.rect("corner", tw, tb, Point2::ORIGIN, corner, corner_t)?;
        }

        // web above the corner, inner toe rounded
        let r = d.web_toe_radius;
        let web = Point2::new(0.0, tb);
        let web_len = h - tb;
        self.rect("web", tw - r, web_len, Point2::ORIGIN, web, tw)?;
        self.rect("web-toe", r, web_len - r, Point2::new(tw - r, 0.0), web, tw)?;
        self.quarter_disc("web-toe-rounding", r, 0.0, Point2::new(tw - r, web_len - r), web, tw)?;

        // base right of the corner, inner toe rounded
        let r = d.base_toe_radius;
        let base = Point2::new(tw, 0.0);
        let base_len = b - tw;
        self.rect("base", base_len, tb - r, Point2::ORIGIN, base, tb)?;
        self.rect("base-toe", base_len - r, r, Point2::new(0.0, tb - r), base, tb)?;
        self.quarter_disc("base-toe-rounding", r, 0.0, Point2::new(base_len - r, tb - r), base, tb)?;

        if d.root_radius > 0.0 {
            let fillet = RightAngleCurved::new(d.root_radius, Point2::ORIGIN)?;
            self.push("root-fillet", fillet, Point2::new(tw, tb), corner_t)?;
        }
        Ok(self.elements)
    }

    fn rect(&mut self, label: &str, w: f64, h: f64, anchor: Point2, offset: Point2, t: f64) -> SectionResult<()> {
        if w <= 0.0 || h <= 0.0 {
            return Ok(());
        }
        let piece = Rectangle::new(w, h, anchor)?;
        self.push(label, piece, offset, t)
    }

    /// Solid quarter disc spanning compass angles `start_deg` to `start_deg + 90`
    fn quarter_disc(
        &mut self,
        label: &str,
        radius: f64,
        start_deg: f64,
        center: Point2,
        offset: Point2,
        t: f64,
    ) -> SectionResult<()> {
        if radius <= 0.0 {
            return Ok(());
        }
        let piece = AnnularSector::new(0.0, radius, start_deg, start_deg + 90.0, center)?;
        self.push(label, piece, offset, t)
    }

    fn push(&mut self, label: &str, piece: impl Into<Primitive>, offset: Point2, t: f64) -> SectionResult<()> {
        self.elements
            .push(SectionElement::new(label, piece, offset, t, self.material)?);
        Ok(())
    }
}

/// Millimetres with at most three decimals and no trailing zeros
fn format_mm(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PolygonIntegrals;
    use crate::materials::SteelGrade;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn lnp(designation: &str, corrosion: f64) -> SectionResult<LnpProfile> {
        LnpProfile::from_catalog(designation, corrosion, SteelGrade::S235)
    }

    #[test]
    fn test_lnp_100x50x6_area() {
        let angle = lnp("LNP 100x50x6", 0.0).unwrap();
        // L area plus root fillet minus both toe roundings
        let expected = 144.0 * 6.0 + 81.0 * (1.0 - PI / 4.0) - 2.0 * 20.25 * (1.0 - PI / 4.0);
        assert_relative_eq!(angle.area(), expected, max_relative = 1e-12);
        assert_relative_eq!(angle.area(), 871.0, max_relative = 0.01);
        assert_eq!(angle.name(), Some("LNP 100x50x6"));
    }

    #[test]
    fn test_area_is_exact_sum_of_pieces() {
        let angle = lnp("LNP 75x50x8", 0.0).unwrap();
        let sum: f64 = angle.section().elements().iter().map(SectionElement::area).sum();
        assert_eq!(angle.area(), sum);
    }

    #[test]
    fn test_pieces_without_corrosion() {
        let angle = lnp("LNP 100x50x6", 0.0).unwrap();
        let labels: Vec<&str> = angle.section().elements().iter().map(SectionElement::label).collect();
        assert_eq!(
            labels,
            vec![
                "corner",
                "web",
                "web-toe",
                "web-toe-rounding",
                "base",
                "base-toe",
                "base-toe-rounding",
                "root-fillet",
            ]
        );
    }

    #[test]
    fn test_bounds_match_outer_dimensions() {
        let angle = lnp("LNP 120x80x10", 0.0).unwrap();
        let bounds = angle.bounds();
        assert_relative_eq!(bounds.min_x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.min_y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_x, 80.0, max_relative = 1e-12);
        assert_relative_eq!(bounds.max_y, 120.0, max_relative = 1e-12);
    }

    #[test]
    fn test_matches_contour_integration() {
        let angle = lnp("LNP 100x50x6", 0.0).unwrap();
        let fine = GeometrySettings::default().with_arc_segments(8192);
        let numeric = PolygonIntegrals::of_contours(&angle.section().element_contours(&fine));

        assert_relative_eq!(numeric.area, angle.area(), max_relative = 1e-6);
        assert_relative_eq!(numeric.centroid().x, angle.centroid().x, max_relative = 1e-6);
        assert_relative_eq!(numeric.centroid().y, angle.centroid().y, max_relative = 1e-6);
        assert_relative_eq!(numeric.centroidal_moment_xx(), angle.moment_of_inertia_xx(), max_relative = 1e-5);
        assert_relative_eq!(numeric.centroidal_moment_yy(), angle.moment_of_inertia_yy(), max_relative = 1e-5);
        assert_relative_eq!(numeric.centroidal_product_xy(), angle.product_of_inertia_xy(), max_relative = 1e-5);
    }

    #[test]
    fn test_perimeter_matches_closed_form() {
        let angle = lnp("LNP 100x50x6", 0.0).unwrap();
        let expected = angle.dimensions().closed_form_perimeter();
        assert_relative_eq!(angle.perimeter(), expected, max_relative = 1e-3);
    }

    #[test]
    fn test_unequal_angle_has_product_of_inertia() {
        // legs point toward +x and +y from the back corner
        let angle = lnp("LNP 100x50x6", 0.0).unwrap();
        assert!(angle.product_of_inertia_xy() < 0.0);
        assert!(angle.centroid().y > angle.centroid().x);
    }

    #[test]
    fn test_corrosion_reduces_area_and_weight() {
        let mut previous: Option<(f64, f64)> = None;
        for c in [0.0, 0.5, 1.0, 2.0] {
            let angle = lnp("LNP 100x50x6", c).unwrap();
            let area = angle.area();
            let weight = angle.section().weight_per_length().0;
            if let Some((prev_area, prev_weight)) = previous {
                assert!(area < prev_area, "area at c = {}", c);
                assert!(weight < prev_weight, "weight at c = {}", c);
            }
            previous = Some((area, weight));
        }
    }

    #[test]
    fn test_corroded_dimensions() {
        let angle = lnp("LNP 100x50x6", 2.0).unwrap();
        let d = angle.dimensions();
        assert_eq!(d.width, 46.0);
        assert_eq!(d.height, 96.0);
        assert_eq!(d.web_thickness, 2.0);
        assert_eq!(d.root_radius, 11.0);
        assert_eq!(d.back_radius, 0.0);
        // 4.5 mm toe capped at the 2 mm wall
        assert_eq!(d.web_toe_radius, 2.0);
        assert_eq!(d.base_toe_radius, 2.0);
        assert_eq!(angle.name(), Some("LNP 100x50x6 (corrosion: 2 mm)"));
        assert_eq!(angle.corrosion_mm(), 2.0);
    }

    #[test]
    fn test_corroded_name_is_rounded() {
        let angle = lnp("LNP 100x50x6", 0.1 + 0.2).unwrap();
        assert_eq!(angle.name(), Some("LNP 100x50x6 (corrosion: 0.3 mm)"));
        assert_eq!(angle.corrosion_mm(), 0.1 + 0.2);
        assert_eq!(format_mm(2.0), "2");
        assert_eq!(format_mm(1.25), "1.25");
        assert_eq!(format_mm(0.0004), "0");
    }

    #[test]
    fn test_corrosion_checks_each_wall() {
        let dims = LnpDimensions {
            width: 60.0,
            height: 80.0,
            web_thickness: 8.0,
            base_thickness: 4.0,
            root_radius: 7.0,
            back_radius: 0.0,
            web_toe_radius: 3.5,
            base_toe_radius: 3.5,
        };
        // thin base is consumed first
        let err = dims.corroded("L 80x60", 2.0).unwrap_err();
        assert_eq!(err, SectionError::fully_corroded("L 80x60", 2.0, 0.0));

        let reduced = dims.corroded("L 80x60", 1.0).unwrap();
        assert_eq!(reduced.web_thickness, 6.0);
        assert_eq!(reduced.base_thickness, 2.0);
        // each toe is capped against its own wall
        assert_eq!(reduced.web_toe_radius, 3.5);
        assert_eq!(reduced.base_toe_radius, 2.0);
        assert!(reduced.validate().is_ok());
    }

    #[test]
    fn test_capped_toe_drops_empty_pieces() {
        let angle = lnp("LNP 100x50x6", 2.0).unwrap();
        let labels: Vec<&str> = angle.section().elements().iter().map(SectionElement::label).collect();
        assert!(!labels.contains(&"web"));
        assert!(!labels.contains(&"base"));
        assert!(labels.contains(&"web-toe-rounding"));
    }

    #[test]
    fn test_fully_corroded() {
        let err = lnp("LNP 100x50x6", 3.0).unwrap_err();
        assert_eq!(err, SectionError::fully_corroded("LNP 100x50x6", 3.0, 0.0));
        assert_eq!(lnp("LNP 30x20x3", 2.0).unwrap_err().error_code(), "FULLY_CORRODED");
    }

    #[test]
    fn test_negative_corrosion_rejected() {
        let err = lnp("LNP 100x50x6", -0.5).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
        assert!(lnp("LNP 100x50x6", f64::NAN).is_err());
    }

    #[test]
    fn test_unknown_designation() {
        assert_eq!(lnp("LNP 101x50x6", 0.0).unwrap_err().error_code(), "PROFILE_NOT_FOUND");
    }

    #[test]
    fn test_back_radius_decomposition() {
        let dims = LnpDimensions {
            width: 60.0,
            height: 80.0,
            web_thickness: 8.0,
            base_thickness: 6.0,
            root_radius: 7.0,
            back_radius: 3.0,
            web_toe_radius: 4.0,
            base_toe_radius: 3.0,
        };
        let angle = LnpProfile::new("L 80x60x8/6", dims, SteelGrade::S355).unwrap();
        let rounding = |r: f64| r * r * (1.0 - PI / 4.0);
        let expected = 8.0 * 80.0 + 52.0 * 6.0 + rounding(7.0) - rounding(3.0) - rounding(4.0) - rounding(3.0);
        assert_relative_eq!(angle.area(), expected, max_relative = 1e-12);
        assert_relative_eq!(angle.perimeter(), dims.closed_form_perimeter(), max_relative = 1e-3);

        let thicknesses = angle.section().nominal_thicknesses();
        assert!(thicknesses.contains(&6.0));
        assert!(thicknesses.contains(&8.0));
    }

    #[test]
    fn test_invalid_dimensions() {
        let valid = LnpDimensions::from_catalog(catalog::lookup("LNP 60x40x5").unwrap());
        assert!(valid.validate().is_ok());

        let too_thick = LnpDimensions { web_thickness: 40.0, ..valid };
        assert!(too_thick.validate().is_err());

        let big_back = LnpDimensions { back_radius: 6.0, ..valid };
        assert!(big_back.validate().is_err());

        let big_toe = LnpDimensions { base_toe_radius: 5.5, ..valid };
        assert!(big_toe.validate().is_err());

        let big_fillet = LnpDimensions { root_radius: 33.0, ..valid };
        assert!(big_fillet.validate().is_err());

        let negative = LnpDimensions { root_radius: -1.0, ..valid };
        assert!(LnpProfile::new("bad", negative, SteelGrade::S235).is_err());
    }
}
