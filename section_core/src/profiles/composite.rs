//! Composite sections built from placed primitives.
//!
//! A [`CompositeSection`] is an ordered list of [`SectionElement`]s. Each
//! element is a primitive shifted by an offset and tagged with the nominal
//! plate thickness and material it is rolled from. Elements must tile the
//! silhouette without overlapping; the combined properties are then plain
//! sums via [`combine_parts`].

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::section::{parallel_axis, parallel_axis_product};
use crate::errors::{require_finite, require_positive, SectionResult};
use crate::geometry::polygon::{plastic_section_modulus, BendingAxis};
use crate::geometry::{Bounds, Contour, Point2};
use crate::materials::Material;
use crate::properties::SectionProperties;
use crate::settings::GeometrySettings;
use crate::shapes::Primitive;
use crate::units::KgPerM;

/// Area, centroid and centroidal moments of one placed part.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartProperties {
    pub area: f64,
    pub centroid: Point2,
    pub moment_of_inertia_xx: f64,
    pub moment_of_inertia_yy: f64,
    pub product_of_inertia_xy: f64,
}

impl PartProperties {
    /// Snapshot of any section
    pub fn of<S: SectionProperties + ?Sized>(section: &S) -> Self {
        Self {
            area: section.area(),
            centroid: section.centroid(),
            moment_of_inertia_xx: section.moment_of_inertia_xx(),
            moment_of_inertia_yy: section.moment_of_inertia_yy(),
            product_of_inertia_xy: section.product_of_inertia_xy(),
        }
    }

    /// Same part translated; centroidal moments do not change
    pub fn offset_by(self, offset: Point2) -> Self {
        Self {
            centroid: self.centroid.offset_by(offset),
            ..self
        }
    }
}

/// Combine non-overlapping parts into one section.
///
/// Area is the plain sum, the centroid the area-weighted mean, and every
/// part's moments are moved onto the combined centroid with the parallel-axis
/// theorem. An empty or zero-area list yields all zeros at the origin.
pub fn combine_parts(parts: &[PartProperties]) -> PartProperties {
    let area: f64 = parts.iter().map(|p| p.area).sum();
    if area <= 0.0 {
        return PartProperties::default();
    }

    let cx = parts.iter().map(|p| p.area * p.centroid.x).sum::<f64>() / area;
    let cy = parts.iter().map(|p| p.area * p.centroid.y).sum::<f64>() / area;

    let mut combined = PartProperties {
        area,
        centroid: Point2::new(cx, cy),
        ..PartProperties::default()
    };
    for p in parts {
        let (dx, dy) = (p.centroid.x - cx, p.centroid.y - cy);
        combined.moment_of_inertia_xx += parallel_axis(p.moment_of_inertia_xx, p.area, dy);
        combined.moment_of_inertia_yy += parallel_axis(p.moment_of_inertia_yy, p.area, dx);
        combined.product_of_inertia_xy += parallel_axis_product(p.product_of_inertia_xy, p.area, dx, dy);
    }
    combined
}

/// One placed part of a composite section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionElement {
    label: String,
    primitive: Primitive,
    offset: Point2,
    nominal_thickness: f64,
    material: Material,
}

impl SectionElement {
    /// Place `primitive` at `offset`.
    ///
    /// # Errors
    /// `InvalidDimension` for a non-positive nominal thickness or a
    /// non-finite offset.
    pub fn new(
        label: impl Into<String>,
        primitive: impl Into<Primitive>,
        offset: Point2,
        nominal_thickness: f64,
        material: impl Into<Material>,
    ) -> SectionResult<Self> {
        require_positive("nominal_thickness", nominal_thickness)?;
        require_finite("offset.x", offset.x)?;
        require_finite("offset.y", offset.y)?;
        Ok(Self {
            label: label.into(),
            primitive: primitive.into(),
            offset,
            nominal_thickness,
            material: material.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn offset(&self) -> Point2 {
        self.offset
    }

    pub fn nominal_thickness(&self) -> f64 {
        self.nominal_thickness
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn area(&self) -> f64 {
        self.primitive.area()
    }

    /// Centroid in section coordinates
    pub fn centroid(&self) -> Point2 {
        self.primitive.centroid().offset_by(self.offset)
    }

    /// Bounding box in section coordinates
    pub fn bounds(&self) -> Bounds {
        self.primitive.bounds().offset_by(self.offset)
    }

    /// Boundary polylines in section coordinates
    pub fn contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        self.primitive
            .contours(settings)
            .into_iter()
            .map(|c| c.offset_by(self.offset))
            .collect()
    }

    pub fn part(&self) -> PartProperties {
        PartProperties::of(&self.primitive).offset_by(self.offset)
    }

    /// Mass per meter of this element alone
    pub fn weight_per_length(&self) -> KgPerM {
        self.material.density().mass_per_length(self.area())
    }
}

/// Section assembled from placed primitives.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeSection {
    name: String,
    elements: Vec<SectionElement>,
    #[serde(skip)]
    outline: OnceCell<Vec<Contour>>,
}

impl CompositeSection {
    pub fn new(name: impl Into<String>, elements: Vec<SectionElement>) -> Self {
        let name = name.into();
        debug!(name = %name, elements = elements.len(), "composite section assembled");
        Self {
            name,
            elements,
            outline: OnceCell::new(),
        }
    }

    pub fn elements(&self) -> &[SectionElement] {
        &self.elements
    }

    /// Combined area, centroid and moments of all elements
    pub fn combined(&self) -> PartProperties {
        let parts: Vec<PartProperties> = self.elements.iter().map(SectionElement::part).collect();
        combine_parts(&parts)
    }

    /// Σ ρ·A over all elements, each with its own material
    pub fn weight_per_length(&self) -> KgPerM {
        self.elements
            .iter()
            .fold(KgPerM(0.0), |acc, e| acc + e.weight_per_length())
    }

    /// Nominal thickness of every element, in element order
    pub fn nominal_thicknesses(&self) -> Vec<f64> {
        self.elements.iter().map(SectionElement::nominal_thickness).collect()
    }

    /// Contours of every element, not merged
    pub fn element_contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        self.elements.iter().flat_map(|e| e.contours(settings)).collect()
    }

    /// Outer boundary (and any holes) of the merged elements.
    /// Cached for the default settings.
    pub fn outline(&self, settings: &GeometrySettings) -> Vec<Contour> {
        if *settings == GeometrySettings::default() {
            self.outline.get_or_init(|| self.merge_outline(settings)).clone()
        } else {
            self.merge_outline(settings)
        }
    }

    /// Length of the merged outline at the given resolution
    pub fn outline_length(&self, settings: &GeometrySettings) -> f64 {
        self.outline(settings).iter().map(contour_length).sum()
    }

    /// Plastic moduli (W_pl,xx, W_pl,yy) from the element contours at the
    /// given resolution
    pub fn plastic_moduli_with(&self, settings: &GeometrySettings) -> (f64, f64) {
        let contours = self.element_contours(settings);
        (
            plastic_section_modulus(&contours, BendingAxis::Xx),
            plastic_section_modulus(&contours, BendingAxis::Yy),
        )
    }

    fn merge_outline(&self, settings: &GeometrySettings) -> Vec<Contour> {
        let mut paths = self
            .element_contours(settings)
            .into_iter()
            .filter(|c| c.points.len() >= 3)
            .map(|c| c.points.iter().map(|p| [p.x, p.y]).collect::<Vec<[f64; 2]>>());

        let subject: Vec<Vec<[f64; 2]>> = match paths.next() {
            Some(first) => vec![first],
            None => return Vec::new(),
        };
        let clip: Vec<Vec<[f64; 2]>> = paths.collect();

        let shapes = subject.overlay(&clip, OverlayRule::Union, FillRule::EvenOdd);
        shapes
            .into_iter()
            .flat_map(|shape| {
                shape.into_iter().enumerate().map(|(i, path)| {
                    let points: Vec<Point2> = path.into_iter().map(|p| Point2::new(p[0], p[1])).collect();
                    if i == 0 { Contour::solid(points) } else { Contour::void(points) }
                })
            })
            .collect()
    }
}

fn contour_length(contour: &Contour) -> f64 {
    let n = contour.points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| contour.points[i].distance_to(contour.points[(i + 1) % n]))
        .sum()
}

impl SectionProperties for CompositeSection {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn area(&self) -> f64 {
        self.elements.iter().map(SectionElement::area).sum()
    }

    /// Length of the merged outline, so shared edges between elements do
    /// not count.
    fn perimeter(&self) -> f64 {
        self.outline_length(&GeometrySettings::default())
    }

    fn centroid(&self) -> Point2 {
        self.combined().centroid
    }

    fn bounds(&self) -> Bounds {
        self.elements
            .iter()
            .map(SectionElement::bounds)
            .reduce(Bounds::union)
            .unwrap_or_else(|| Bounds::point(Point2::ORIGIN))
    }

    fn moment_of_inertia_xx(&self) -> f64 {
        self.combined().moment_of_inertia_xx
    }

    fn moment_of_inertia_yy(&self) -> f64 {
        self.combined().moment_of_inertia_yy
    }

    fn product_of_inertia_xy(&self) -> f64 {
        self.combined().product_of_inertia_xy
    }

    fn plastic_section_modulus_xx(&self) -> f64 {
        self.plastic_moduli_with(&GeometrySettings::default()).0
    }

    fn plastic_section_modulus_yy(&self) -> f64 {
        self.plastic_moduli_with(&GeometrySettings::default()).1
    }

    fn contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        self.outline(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PolygonIntegrals;
    use crate::materials::SteelGrade;
    use crate::shapes::{AnnularSector, Rectangle};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn tee() -> CompositeSection {
        // 100 x 10 flange on top of a 10 x 90 web
        let flange = Rectangle::new(100.0, 10.0, Point2::ORIGIN).unwrap();
        let web = Rectangle::new(10.0, 90.0, Point2::ORIGIN).unwrap();
        CompositeSection::new(
            "T 100x100x10",
            vec![
                SectionElement::new("flange", flange, Point2::new(0.0, 90.0), 10.0, SteelGrade::S235).unwrap(),
                SectionElement::new("web", web, Point2::new(45.0, 0.0), 10.0, SteelGrade::S235).unwrap(),
            ],
        )
    }

    #[test]
    fn test_tee_section() {
        let t = tee();
        assert_relative_eq!(t.area(), 1900.0);
        // (1000 · 95 + 900 · 45) / 1900
        let cy = (1000.0 * 95.0 + 900.0 * 45.0) / 1900.0;
        assert_relative_eq!(t.centroid().y, cy, max_relative = 1e-12);
        assert_relative_eq!(t.centroid().x, 50.0, max_relative = 1e-12);

        let ixx = 100.0 * 1000.0 / 12.0 + 1000.0 * (95.0 - cy).powi(2) + 10.0 * 90f64.powi(3) / 12.0 + 900.0 * (45.0 - cy).powi(2);
        assert_relative_eq!(t.moment_of_inertia_xx(), ixx, max_relative = 1e-12);
        assert_relative_eq!(t.product_of_inertia_xy(), 0.0, epsilon = 1e-6);
        assert_eq!(t.bounds(), Bounds::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_tee_perimeter_ignores_shared_edge() {
        // outline of a T: 100 + 10 + 45 + 90 + 10 + 90 + 45 + 10
        assert_relative_eq!(tee().perimeter(), 400.0, max_relative = 1e-4);
    }

    #[test]
    fn test_tee_plastic_modulus() {
        // equal-area axis lies in the flange at y = 90 + (1000 - 950)/100 = 90.5;
        // flange part above: 100 · 9.5 · 4.75, flange part below: 100 · 0.5 · 0.25,
        // web: 900 · (90.5 − 45)
        let expected = 100.0 * 9.5 * 4.75 + 100.0 * 0.5 * 0.25 + 900.0 * 45.5;
        assert_relative_eq!(tee().plastic_section_modulus_xx(), expected, max_relative = 1e-6);
    }

    #[test]
    fn test_four_quarter_sectors_rebuild_ring() {
        let elements: Vec<SectionElement> = (0..4)
            .map(|k| {
                let start = 90.0 * k as f64;
                let sector = AnnularSector::new(90.0, 20.0, start, start + 90.0, Point2::ORIGIN).unwrap();
                SectionElement::new(format!("q{}", k), sector, Point2::new(200.0, 200.0), 20.0, SteelGrade::S355).unwrap()
            })
            .collect();
        let ring = CompositeSection::new("ring", elements);

        assert_relative_eq!(ring.area(), PI * (110f64.powi(2) - 90f64.powi(2)), max_relative = 1e-12);
        assert_relative_eq!(ring.centroid().x, 200.0, max_relative = 1e-12);
        assert_relative_eq!(ring.centroid().y, 200.0, max_relative = 1e-12);
        let i_ring = PI * (110f64.powi(4) - 90f64.powi(4)) / 4.0;
        assert_relative_eq!(ring.moment_of_inertia_xx(), i_ring, max_relative = 1e-9);
        assert_relative_eq!(ring.moment_of_inertia_yy(), i_ring, max_relative = 1e-9);
        assert_relative_eq!(ring.product_of_inertia_xy(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_area_is_exact_sum_of_elements() {
        let t = tee();
        let sum: f64 = t.elements().iter().map(SectionElement::area).sum();
        assert_eq!(t.area(), sum);
    }

    #[test]
    fn test_combined_matches_contour_integration() {
        let t = tee();
        let numeric = PolygonIntegrals::of_contours(&t.element_contours(&GeometrySettings::default()));
        assert_relative_eq!(numeric.area, t.area(), max_relative = 1e-12);
        assert_relative_eq!(numeric.centroidal_moment_xx(), t.moment_of_inertia_xx(), max_relative = 1e-9);
        assert_relative_eq!(numeric.centroidal_moment_yy(), t.moment_of_inertia_yy(), max_relative = 1e-9);
    }

    #[test]
    fn test_weight_per_length() {
        // 1900 mm² of steel at 7850 kg/m³
        assert_relative_eq!(tee().weight_per_length().0, 14.915, max_relative = 1e-9);
    }

    #[test]
    fn test_resolution_aware_accessors() {
        let elements: Vec<SectionElement> = (0..2)
            .map(|k| {
                let start = 180.0 * k as f64;
                let half = AnnularSector::new(0.0, 50.0, start, start + 180.0, Point2::ORIGIN).unwrap();
                SectionElement::new(format!("half{}", k), half, Point2::ORIGIN, 50.0, SteelGrade::S235).unwrap()
            })
            .collect();
        let disc = CompositeSection::new("disc", elements);
        let default = GeometrySettings::default();
        assert_eq!(disc.outline_length(&default), disc.perimeter());
        assert_eq!(disc.plastic_moduli_with(&default).0, disc.plastic_section_modulus_xx());

        // finer polygons approach the circle: U = πD, W_pl = D³/6
        let fine = default.with_arc_segments(4096);
        assert_relative_eq!(disc.outline_length(&fine), PI * 100.0, max_relative = 1e-4);
        assert_relative_eq!(disc.plastic_moduli_with(&fine).1, 1e6 / 6.0, max_relative = 1e-4);
        assert!(disc.outline_length(&fine) > disc.outline_length(&default.with_arc_segments(16)));
    }

    #[test]
    fn test_empty_composite() {
        let empty = CompositeSection::new("empty", Vec::new());
        assert_eq!(empty.area(), 0.0);
        assert_eq!(empty.centroid(), Point2::ORIGIN);
        assert_eq!(empty.perimeter(), 0.0);
        assert_eq!(empty.plastic_section_modulus_xx(), 0.0);
    }

    #[test]
    fn test_element_rejects_zero_thickness() {
        let web = Rectangle::new(10.0, 90.0, Point2::ORIGIN).unwrap();
        assert!(SectionElement::new("web", web, Point2::ORIGIN, 0.0, SteelGrade::S235).is_err());
    }
}
