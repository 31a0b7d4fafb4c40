//! Annular sector (ring slice).
//!
//! Angles follow the compass convention used on drawings: 0° points up (+y)
//! and angles grow clockwise, so 90° points to +x. A point at radius ρ and
//! angle θ sits at (ρ·sin θ, ρ·cos θ) from the ring center.
//!
//! ```text
//!              0°
//!              ▲
//!        ╭─────┼─────╮
//!   270° ┤     ●     ├ 90°       ● ring center = anchor
//!        ╰─────┼─────╯
//!             180°
//! ```
//!
//! Area, centroid and inertia are closed form: the sector integrals are taken
//! in the frame of the bisector, re-centred radially and rotated onto x/y.
//! The plastic moduli have no closed form for an arbitrary rotation; they are
//! evaluated on the boundary polygon, which is built once with a polygon
//! boolean (outer sector minus inner disc) and cached.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;
use tracing::{debug, warn};

use crate::equations::section::{
    annular_sector_area, annular_sector_centroid_radius, annular_sector_second_moments, rotate_moments_of_inertia,
};
use crate::errors::{require_finite, require_non_negative, require_positive, SectionError, SectionResult};
use crate::geometry::polygon::{circle_points, plastic_section_modulus, BendingAxis};
use crate::geometry::{AnchorTransform, Bounds, Contour, Point2};
use crate::properties::{CanonicalShape, LocalProperties};
use crate::settings::GeometrySettings;

/// Ring slice between `inner_radius` and `inner_radius + thickness`.
///
/// The elastic moduli divide by the distance from the centroid to the
/// bounding box edge. Unless the sector is symmetric about x or y those axes
/// are not principal, so I / c only approximates the extreme-fiber stress.
#[derive(Debug, Clone, Serialize)]
pub struct AnnularSector {
    inner_radius: f64,
    thickness: f64,
    start_deg: f64,
    end_deg: f64,
    placement: AnchorTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip)]
    boundary: OnceCell<Vec<Contour>>,
}

impl PartialEq for AnnularSector {
    fn eq(&self, other: &Self) -> bool {
        self.inner_radius == other.inner_radius
            && self.thickness == other.thickness
            && self.start_deg == other.start_deg
            && self.end_deg == other.end_deg
            && self.placement == other.placement
            && self.name == other.name
    }
}

impl AnnularSector {
    /// Create a sector centred on `center`.
    ///
    /// # Errors
    /// - `InvalidDimension` if `thickness` ≤ 0 or `inner_radius` < 0
    /// - `InvalidAngle` unless 0° < `end_deg` − `start_deg` < 360°
    pub fn new(inner_radius: f64, thickness: f64, start_deg: f64, end_deg: f64, center: Point2) -> SectionResult<Self> {
        require_non_negative("inner_radius", inner_radius)?;
        require_positive("thickness", thickness)?;
        require_finite("center.x", center.x)?;
        require_finite("center.y", center.y)?;

        if !start_deg.is_finite() || !end_deg.is_finite() {
            return Err(SectionError::invalid_angle(start_deg, end_deg, "Angles must be finite"));
        }
        let sweep = end_deg - start_deg;
        if sweep <= 0.0 || sweep >= 360.0 {
            return Err(SectionError::invalid_angle(
                start_deg,
                end_deg,
                format!("Sweep of {}° is outside (0°, 360°)", sweep),
            ));
        }

        debug!(inner_radius, thickness, start_deg, end_deg, %center, "annular sector created");
        Ok(Self {
            inner_radius,
            thickness,
            start_deg,
            end_deg,
            placement: AnchorTransform::at(center),
            name: None,
            boundary: OnceCell::new(),
        })
    }

    /// Same sector with the given mirror flags
    pub fn mirrored(mut self, mirror_x: bool, mirror_y: bool) -> Self {
        self.placement = self.placement.mirrored(mirror_x, mirror_y);
        self
    }

    /// Toggle the mirror about the vertical line through the center
    pub fn flipped_x(mut self) -> Self {
        self.placement = self.placement.flip_x();
        self
    }

    /// Toggle the mirror about the horizontal line through the center
    pub fn flipped_y(mut self) -> Self {
        self.placement = self.placement.flip_y();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.thickness
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn start_deg(&self) -> f64 {
        self.start_deg
    }

    pub fn end_deg(&self) -> f64 {
        self.end_deg
    }

    pub fn center(&self) -> Point2 {
        self.placement.anchor
    }

    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Plastic moduli (W_pl,xx, W_pl,yy) on a boundary polygon of the given
    /// resolution. Mirroring does not change them.
    pub fn plastic_moduli_with(&self, settings: &GeometrySettings) -> (f64, f64) {
        let contours = self.boundary(settings);
        (
            plastic_section_modulus(&contours, BendingAxis::Xx),
            plastic_section_modulus(&contours, BendingAxis::Yy),
        )
    }

    fn sweep_rad(&self) -> f64 {
        self.sweep_deg().to_radians()
    }

    /// Compass angle of the bisector, in radians
    fn mean_rad(&self) -> f64 {
        (0.5 * (self.start_deg + self.end_deg)).to_radians()
    }

    fn local_bounds(&self) -> Bounds {
        let (r, big_r) = (self.inner_radius, self.outer_radius());
        let mut candidates = vec![
            polar(r, self.start_deg),
            polar(r, self.end_deg),
            polar(big_r, self.start_deg),
            polar(big_r, self.end_deg),
        ];
        let first = (self.start_deg / 90.0).ceil() as i64;
        let last = (self.end_deg / 90.0).floor() as i64;
        candidates.extend((first..=last).map(|k| polar(big_r, k as f64 * 90.0)));
        Bounds::from_points(candidates).unwrap_or_else(|| Bounds::point(Point2::ORIGIN))
    }

    /// Boundary contours in the local frame. Cached for the default settings.
    fn boundary(&self, settings: &GeometrySettings) -> Vec<Contour> {
        if *settings == GeometrySettings::default() {
            self.boundary.get_or_init(|| self.build_boundary(settings)).clone()
        } else {
            self.build_boundary(settings)
        }
    }

    fn build_boundary(&self, settings: &GeometrySettings) -> Vec<Contour> {
        let big_r = self.outer_radius();
        let segments = settings.segments_for_sweep(self.sweep_rad());

        let mut wedge = vec![[0.0, 0.0]];
        wedge.extend(self.compass_arc(big_r, segments).iter().map(|p| [p.x, p.y]));
        let subject = vec![wedge];

        if self.inner_radius == 0.0 {
            return vec![Contour::solid(subject[0].iter().map(|p| Point2::new(p[0], p[1])).collect())];
        }

        let disc: Vec<[f64; 2]> = circle_points(Point2::ORIGIN, self.inner_radius, settings.arc_segments)
            .iter()
            .map(|p| [p.x, p.y])
            .collect();
        let clip = vec![disc];

        let shapes = subject.overlay(&clip, OverlayRule::Difference, FillRule::EvenOdd);
        let contours: Vec<Contour> = shapes
            .iter()
            .flat_map(|shape| {
                shape.iter().enumerate().map(|(i, path)| {
                    let points = path.iter().map(|p| Point2::new(p[0], p[1])).collect();
                    if i == 0 { Contour::solid(points) } else { Contour::void(points) }
                })
            })
            .collect();

        if contours.is_empty() {
            warn!(
                inner_radius = self.inner_radius,
                outer_radius = big_r,
                "polygon difference returned no geometry, tracing sector boundary directly"
            );
            return vec![self.direct_boundary(segments)];
        }
        contours
    }

    /// Outer arc forward, inner arc back
    fn direct_boundary(&self, segments: usize) -> Contour {
        let mut points = self.compass_arc(self.outer_radius(), segments);
        let mut inner = self.compass_arc(self.inner_radius, segments);
        inner.reverse();
        points.extend(inner);
        Contour::solid(points)
    }

    fn compass_arc(&self, radius: f64, segments: usize) -> Vec<Point2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| polar(radius, self.start_deg + self.sweep_deg() * i as f64 / segments as f64))
            .collect()
    }
}

/// Point at compass angle `deg` and distance `radius` from the origin
fn polar(radius: f64, deg: f64) -> Point2 {
    let (s, c) = deg.to_radians().sin_cos();
    Point2::new(radius * s, radius * c)
}

impl CanonicalShape for AnnularSector {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn placement(&self) -> AnchorTransform {
        self.placement
    }

    fn local_properties(&self) -> LocalProperties {
        let (r, big_r) = (self.inner_radius, self.outer_radius());
        let sweep = self.sweep_rad();
        let mean = self.mean_rad();

        let area = annular_sector_area(r, big_r, sweep);
        let rho = annular_sector_centroid_radius(r, big_r, sweep);

        // u along the bisector, v across it; only ∫u² needs re-centring
        let (uu, vv) = annular_sector_second_moments(r, big_r, sweep);
        let uu_centroidal = uu - area * rho * rho;
        let (ixx, iyy, ixy) = rotate_moments_of_inertia(vv, uu_centroidal, 0.0, FRAC_PI_2 - mean);

        LocalProperties {
            area,
            perimeter: sweep * (big_r + r) + 2.0 * self.thickness,
            centroid: Point2::new(rho * mean.sin(), rho * mean.cos()),
            bounds: self.local_bounds(),
            moment_of_inertia_xx: ixx,
            moment_of_inertia_yy: iyy,
            product_of_inertia_xy: ixy,
        }
    }

    fn local_plastic_moduli(&self) -> (f64, f64) {
        self.plastic_moduli_with(&GeometrySettings::default())
    }

    fn local_contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        self.boundary(settings)
    }
}
