//! Right-angled triangle and its interior sampling grid.
//!
//! ```text
//!   h ●
//!     │╲
//!     │  ╲
//!     │ ●  ╲        ● centroid at (b/3, h/3) from the anchor
//!     │      ╲
//!   0 ●────────●
//!     0        b
//! ```
//!
//! The right angle sits at the anchor, the base runs along +x and the height
//! along +y before mirroring.

use serde::Serialize;
use tracing::debug;

use crate::equations::section::{
    right_triangle_moment_of_inertia, right_triangle_plastic_section_modulus, right_triangle_product_of_inertia,
};
use crate::errors::{require_finite, require_positive, SectionError, SectionResult};
use crate::geometry::polygon::point_in_polygon;
use crate::geometry::{AnchorTransform, Bounds, Contour, Point2};
use crate::properties::{CanonicalShape, LocalProperties};
use crate::settings::GeometrySettings;

/// Largest number of cells (before filtering) an interior grid may span
pub const MAX_GRID_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RightAngledTriangle {
    base: f64,
    height: f64,
    placement: AnchorTransform,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl RightAngledTriangle {
    /// Create a triangle with the right angle at `anchor`.
    ///
    /// # Errors
    /// `InvalidDimension` if base or height is not strictly positive.
    pub fn new(base: f64, height: f64, anchor: Point2) -> SectionResult<Self> {
        require_positive("base", base)?;
        require_positive("height", height)?;
        require_finite("anchor.x", anchor.x)?;
        require_finite("anchor.y", anchor.y)?;
        debug!(base, height, %anchor, "right-angled triangle created");
        Ok(Self {
            base,
            height,
            placement: AnchorTransform::at(anchor),
            name: None,
        })
    }

    /// Same triangle with the given mirror flags
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

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn anchor(&self) -> Point2 {
        self.placement.anchor
    }

    fn local_vertices(&self) -> Vec<Point2> {
        vec![
            Point2::ORIGIN,
            Point2::new(self.base, 0.0),
            Point2::new(0.0, self.height),
        ]
    }

    /// Interior grid with `settings.grid_divisions` cells along each leg.
    pub fn interior_grid(&self, settings: &GeometrySettings) -> SectionResult<InteriorGrid> {
        let n = settings.grid_divisions.max(1) as f64;
        self.interior_grid_with_spacing(self.base / n, self.height / n)
    }

    /// Interior grid with an explicit cell size.
    ///
    /// # Errors
    /// `InvalidDimension` if either spacing is not strictly positive, or if
    /// the grid would span more than [`MAX_GRID_CELLS`] cells.
    pub fn interior_grid_with_spacing(&self, dx: f64, dy: f64) -> SectionResult<InteriorGrid> {
        require_positive("dx", dx)?;
        require_positive("dy", dy)?;

        let polygon = self.placement.apply_points(&self.local_vertices());
        let bounds = self.placement.apply_bounds(Bounds::new(0.0, 0.0, self.base, self.height));
        let nx = grid_count("dx", bounds.width(), dx)?;
        let ny = grid_count("dy", bounds.height(), dy)?;
        let cells = nx
            .checked_mul(ny)
            .filter(|&cells| cells <= MAX_GRID_CELLS)
            .ok_or_else(|| too_many_cells("dx", dx))?;

        Ok(InteriorGrid { polygon, bounds, dx, dy, nx, ny, cells })
    }
}

/// Cells needed to cover `extent` with `spacing`, at least one
fn grid_count(field: &str, extent: f64, spacing: f64) -> SectionResult<usize> {
    let count = (extent / spacing).ceil().max(1.0);
    if !count.is_finite() || count > MAX_GRID_CELLS as f64 {
        return Err(too_many_cells(field, spacing));
    }
    Ok(count as usize)
}

fn too_many_cells(field: &str, spacing: f64) -> SectionError {
    SectionError::invalid_dimension(
        field,
        spacing.to_string(),
        format!("Grid spacing too fine, more than {} cells", MAX_GRID_CELLS),
    )
}

impl CanonicalShape for RightAngledTriangle {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn placement(&self) -> AnchorTransform {
        self.placement
    }

    fn local_properties(&self) -> LocalProperties {
        let (b, h) = (self.base, self.height);
        LocalProperties {
            area: b * h / 2.0,
            perimeter: b + h + b.hypot(h),
            centroid: Point2::new(b / 3.0, h / 3.0),
            bounds: Bounds::new(0.0, 0.0, b, h),
            moment_of_inertia_xx: right_triangle_moment_of_inertia(b, h),
            moment_of_inertia_yy: right_triangle_moment_of_inertia(h, b),
            product_of_inertia_xy: right_triangle_product_of_inertia(b, h),
        }
    }

    fn local_plastic_moduli(&self) -> (f64, f64) {
        (
            right_triangle_plastic_section_modulus(self.base, self.height),
            right_triangle_plastic_section_modulus(self.height, self.base),
        )
    }

    fn local_contours(&self, _settings: &GeometrySettings) -> Vec<Contour> {
        vec![Contour::solid(self.local_vertices())]
    }
}

/// Rectangular grid of cell centres over a triangle's bounding box, filtered
/// to those inside the triangle.
///
/// Iteration is lazy and can be restarted any number of times; each pass
/// yields the same points in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct InteriorGrid {
    polygon: Vec<Point2>,
    bounds: Bounds,
    dx: f64,
    dy: f64,
    nx: usize,
    ny: usize,
    cells: usize,
}

impl InteriorGrid {
    /// Area represented by one grid point
    pub fn cell_area(&self) -> f64 {
        self.dx * self.dy
    }

    pub fn spacing(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    /// Number of cells along x and y, before filtering
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn iter(&self) -> InteriorGridIter<'_> {
        InteriorGridIter { grid: self, index: 0 }
    }
}

impl<'a> IntoIterator for &'a InteriorGrid {
    type Item = Point2;
    type IntoIter = InteriorGridIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the interior points of an [`InteriorGrid`].
#[derive(Debug, Clone)]
pub struct InteriorGridIter<'a> {
    grid: &'a InteriorGrid,
    index: usize,
}

impl Iterator for InteriorGridIter<'_> {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        let grid = self.grid;
        while self.index < grid.cells {
            let (i, j) = (self.index % grid.nx, self.index / grid.nx);
            self.index += 1;
            let p = Point2::new(
                grid.bounds.min_x + (i as f64 + 0.5) * grid.dx,
                grid.bounds.min_y + (j as f64 + 0.5) * grid.dy,
            );
            if point_in_polygon(p, &grid.polygon) {
                return Some(p);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.grid.cells.saturating_sub(self.index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::SectionProperties;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_properties() {
        let t = RightAngledTriangle::new(30.0, 60.0, Point2::ORIGIN).unwrap();
        assert_relative_eq!(t.area(), 900.0);
        assert_relative_eq!(t.perimeter(), 90.0 + 4500f64.sqrt(), max_relative = 1e-12);
        assert_eq!(t.centroid(), Point2::new(10.0, 20.0));
        assert_relative_eq!(t.moment_of_inertia_xx(), 30.0 * 216_000.0 / 36.0);
        assert_relative_eq!(t.moment_of_inertia_yy(), 60.0 * 27_000.0 / 36.0);
        assert_relative_eq!(t.product_of_inertia_xy(), -(1800.0f64.powi(2)) / 72.0);
    }

    #[test]
    fn test_asymmetric_fiber_distances() {
        let t = RightAngledTriangle::new(30.0, 60.0, Point2::ORIGIN).unwrap();
        let i = t.moment_of_inertia_xx();
        assert_relative_eq!(t.elastic_section_modulus_xx_top(), i / 40.0, max_relative = 1e-12);
        assert_relative_eq!(t.elastic_section_modulus_xx_bottom(), i / 20.0, max_relative = 1e-12);
        assert_relative_eq!(t.elastic_section_modulus_xx(), i / 40.0, max_relative = 1e-12);
    }

    #[test]
    fn test_plastic_moduli() {
        let t = RightAngledTriangle::new(30.0, 60.0, Point2::ORIGIN).unwrap();
        // b·h²/4 and h·b²/4
        assert_eq!(t.plastic_section_modulus_xx(), 27_000.0);
        assert_eq!(t.plastic_section_modulus_yy(), 13_500.0);

        let mirrored = t.mirrored(true, true);
        assert_eq!(mirrored.plastic_section_modulus_xx(), 27_000.0);
        assert_eq!(mirrored.plastic_section_modulus_yy(), 13_500.0);
    }

    #[test]
    fn test_mirror_flips_product_and_centroid() {
        let anchor = Point2::new(5.0, 5.0);
        let t = RightAngledTriangle::new(6.0, 9.0, anchor).unwrap();

        let my = t.clone().mirrored(false, true);
        assert_eq!(my.centroid(), Point2::new(7.0, 2.0));
        assert_relative_eq!(my.product_of_inertia_xy(), -t.product_of_inertia_xy());
        assert_eq!(my.bounds(), Bounds::new(5.0, -4.0, 11.0, 5.0));

        let twice = my.flipped_y();
        assert_eq!(twice.centroid(), t.centroid());
        assert_eq!(twice.area(), t.area());
    }

    #[test]
    fn test_grid_area_converges() {
        let t = RightAngledTriangle::new(40.0, 25.0, Point2::new(-3.0, 2.0))
            .unwrap()
            .mirrored(true, false);
        let grid = t.interior_grid(&GeometrySettings::default().with_grid_divisions(400)).unwrap();
        let sampled = grid.iter().count() as f64 * grid.cell_area();
        assert_relative_eq!(sampled, t.area(), max_relative = 0.01);

        let bounds = t.bounds();
        for p in &grid {
            assert!(p.x >= bounds.min_x && p.x <= bounds.max_x);
            assert!(p.y >= bounds.min_y && p.y <= bounds.max_y);
        }
    }

    #[test]
    fn test_grid_is_restartable() {
        let t = RightAngledTriangle::new(10.0, 10.0, Point2::ORIGIN).unwrap();
        let grid = t.interior_grid_with_spacing(1.0, 1.0).unwrap();
        let first: Vec<Point2> = grid.iter().collect();
        let second: Vec<Point2> = grid.iter().collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
        assert_eq!(grid.dimensions(), (10, 10));
        // cell centres strictly below the hypotenuse x + y < 10
        assert!(first.iter().all(|p| p.x + p.y <= 10.0));
    }

    #[test]
    fn test_grid_rejects_spacing_too_fine() {
        let t = RightAngledTriangle::new(1e6, 1e6, Point2::ORIGIN).unwrap();
        let err = t.interior_grid_with_spacing(1e-12, 1e-12).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");

        // each axis fits on its own but the product does not
        let err = t.interior_grid_with_spacing(1e6 / 8192.0, 1e6 / 4096.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");

        let grid = t.interior_grid_with_spacing(1e6 / 4096.0, 1e6 / 4096.0).unwrap();
        assert_eq!(grid.dimensions(), (4096, 4096));
        assert!(grid.iter().next().is_some());
        assert_eq!(grid.iter().size_hint(), (0, Some(4096 * 4096)));
    }

    #[test]
    fn test_grid_rejects_zero_spacing() {
        let t = RightAngledTriangle::new(10.0, 10.0, Point2::ORIGIN).unwrap();
        assert!(t.interior_grid_with_spacing(0.0, 1.0).is_err());
    }
}
