//! # Cross-Section Property Formulas
//!
//! Closed-form geometric properties of the elementary shapes that make up
//! structural cross-sections, plus the two transforms every composition needs
//! (parallel-axis shift and rotation of axes).
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `I_xy` = Product of inertia ∫xy dA
//! - `W_el` = Elastic section modulus (I/c, where c = distance to extreme fiber)
//! - `W_pl` = Plastic section modulus (first moment of both halves about the equal-area axis)
//! - `b` = Width of section, `d` = Depth (height) of section
//! - `D` = Diameter, `r` / `R` = inner / outer radius
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A
//! - Pilkey, Formulas for Stress, Strain, and Structural Matrices, Table 2-2
//! - EN 1993-1-1, Section 6.2.5 (plastic resistance)

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(6.0, 100.0);
/// assert!((area - 600.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Calculate moment of inertia for rectangular section about its centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← neutral axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula (Strong Axis Bending)
/// I = bd³/12
///
/// For weak axis bending pass the arguments swapped: I = db³/12
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_moment_of_inertia;
///
/// // 6 mm x 100 mm plate on edge: I = 6 × 100³ / 12 = 500 000 mm⁴
/// let i = rectangular_moment_of_inertia(6.0, 100.0);
/// assert!((i - 500_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Calculate plastic section modulus for rectangular section
///
/// The plastic neutral axis sits at mid-depth; each half contributes
/// (b·d/2)·(d/4).
///
/// # Formula
/// W_pl = bd²/4
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_plastic_section_modulus;
///
/// let w = rectangular_plastic_section_modulus(6.0, 100.0);
/// assert!((w - 15_000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_plastic_section_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 4.0
}

// =============================================================================
// CIRCULAR SECTION PROPERTIES
// Solid circle; hollow circles follow by superposition of two concentric discs
// =============================================================================

/// Calculate area of a solid circle
///
/// # Formula
/// A = πD²/4
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * d.powi(2) / 4.0
}

/// Calculate moment of inertia of a solid circle about any centroidal axis
///
/// # Formula
/// I = πD⁴/64
///
/// A tube with the same center is the difference of two discs:
/// I = π(D_out⁴ − D_in⁴)/64
///
/// # Example
/// ```rust
/// use section_core::equations::section::circular_moment_of_inertia;
///
/// let i = circular_moment_of_inertia(100.0);
/// assert!((i - 4_908_738.52).abs() < 0.01);
/// ```
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

/// Calculate plastic section modulus of a solid circle
///
/// Each half-disc has area πD²/8 with its centroid 2D/(3π) from the
/// diameter, so W_pl = 2 · πD²/8 · 2D/(3π).
///
/// # Formula
/// W_pl = D³/6
#[inline]
pub fn circular_plastic_section_modulus(d: f64) -> f64 {
    d.powi(3) / 6.0
}

// =============================================================================
// RIGHT TRIANGLE
// Right angle at the origin, base b along +x, height h along +y
// =============================================================================

/// Moment of inertia of a right triangle about its horizontal centroidal axis
///
/// ```text
///   h │╲
///     │  ╲
///     │ ●  ╲    ● centroid at (b/3, h/3)
///     └──────╲
///         b
/// ```
///
/// # Formula
/// I = bh³/36
#[inline]
pub fn right_triangle_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 36.0
}

/// Centroidal product of inertia of a right triangle with both legs along
/// the positive axes
///
/// # Formula
/// I_xy = −b²h²/72
#[inline]
pub fn right_triangle_product_of_inertia(b: f64, h: f64) -> f64 {
    -(b * h).powi(2) / 72.0
}

/// Plastic section modulus of a right triangle about the horizontal axis
///
/// Tabulated value for a right triangle with legs `b` (along the axis) and
/// `h` (across it). This is the same expression as for a b × h rectangle.
///
/// # Formula
/// W_pl = bh²/4
///
/// # Example
/// ```rust
/// use section_core::equations::section::right_triangle_plastic_section_modulus;
///
/// let w = right_triangle_plastic_section_modulus(30.0, 60.0);
/// assert!((w - 27_000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn right_triangle_plastic_section_modulus(b: f64, h: f64) -> f64 {
    b * h.powi(2) / 4.0
}

// =============================================================================
// QUARTER CIRCLE
// Used to carve fillets and rounded corners out of squares
// =============================================================================

/// Distance from the center of a quarter circle to its centroid, along each axis
///
/// # Formula
/// e = 4r/(3π)
#[inline]
pub fn quarter_circle_centroid_offset(r: f64) -> f64 {
    4.0 * r / (3.0 * PI)
}

/// Moment of inertia of a quarter circle about its own centroidal axis
/// (parallel to either straight edge)
///
/// # Formula
/// I = (π/16 − 4/(9π)) · r⁴  ≈ 0.05488 · r⁴
#[inline]
pub fn quarter_circle_moment_of_inertia(r: f64) -> f64 {
    (PI / 16.0 - 4.0 / (9.0 * PI)) * r.powi(4)
}

/// Centroidal product of inertia of a quarter circle lying in the positive
/// quadrant of its center (or the fully opposite quadrant)
///
/// # Formula
/// I_xy = (1/8 − 4/(9π)) · r⁴  ≈ −0.01647 · r⁴
#[inline]
pub fn quarter_circle_product_of_inertia(r: f64) -> f64 {
    (1.0 / 8.0 - 4.0 / (9.0 * PI)) * r.powi(4)
}

// =============================================================================
// ANNULAR SECTOR
// Ring slice between radii r and R over a sweep Δθ, symmetric about its bisector
// =============================================================================

/// Area of an annular sector
///
/// # Formula
/// A = (R² − r²) · Δθ / 2      (Δθ in radians)
///
/// # Example
/// ```rust
/// use section_core::equations::section::annular_sector_area;
///
/// // quarter of a ring between r = 90 and R = 110
/// let a = annular_sector_area(90.0, 110.0, std::f64::consts::FRAC_PI_2);
/// assert!((a - 3141.59).abs() < 0.01);
/// ```
#[inline]
pub fn annular_sector_area(r_in: f64, r_out: f64, sweep_rad: f64) -> f64 {
    (r_out.powi(2) - r_in.powi(2)) * sweep_rad / 2.0
}

/// Distance from the ring center to the centroid of an annular sector,
/// measured along the bisector
///
/// # Formula
/// ρ_c = (2·sin(Δθ/2) / (3·Δθ/2)) · (R³ − r³)/(R² − r²)
///
/// For a half disc (r = 0, Δθ = π) this reduces to the familiar 4R/(3π).
///
/// # Example
/// ```rust
/// use section_core::equations::section::annular_sector_centroid_radius;
///
/// let rho = annular_sector_centroid_radius(90.0, 110.0, std::f64::consts::FRAC_PI_2);
/// assert!((rho - 90.3317).abs() < 1e-4);
/// ```
#[inline]
pub fn annular_sector_centroid_radius(r_in: f64, r_out: f64, sweep_rad: f64) -> f64 {
    let half = sweep_rad / 2.0;
    (2.0 * half.sin() / (3.0 * half)) * (r_out.powi(3) - r_in.powi(3)) / (r_out.powi(2) - r_in.powi(2))
}

/// Second moments of an annular sector about its ring center, in the frame
/// of its bisector
///
/// Returns `(∫u² dA, ∫v² dA)` where u runs along the bisector and v across it:
///
/// ∫u² dA = (R⁴ − r⁴)/8 · (Δθ + sin Δθ)
/// ∫v² dA = (R⁴ − r⁴)/8 · (Δθ − sin Δθ)
///
/// The mixed term ∫uv dA vanishes by symmetry about the bisector.
#[inline]
pub fn annular_sector_second_moments(r_in: f64, r_out: f64, sweep_rad: f64) -> (f64, f64) {
    let k = (r_out.powi(4) - r_in.powi(4)) / 8.0;
    (k * (sweep_rad + sweep_rad.sin()), k * (sweep_rad - sweep_rad.sin()))
}

// =============================================================================
// AXIS TRANSFORMS
// =============================================================================

/// Parallel-axis theorem
///
/// # Formula
/// I = I_c + A·e²
///
/// # Arguments
/// * `i_centroidal` - Moment of inertia about the centroidal axis
/// * `area` - Area (may be negative for removed material)
/// * `distance` - Distance between the two parallel axes
///
/// # Example
/// ```rust
/// use section_core::equations::section::{parallel_axis, rectangular_moment_of_inertia};
///
/// // 10 x 10 square about its bottom edge: 10⁴/12 + 100 · 5² = 10⁴/3
/// let i = parallel_axis(rectangular_moment_of_inertia(10.0, 10.0), 100.0, 5.0);
/// assert!((i - 10_000.0 / 3.0).abs() < 1e-9);
/// ```
#[inline]
pub fn parallel_axis(i_centroidal: f64, area: f64, distance: f64) -> f64 {
    i_centroidal + area * distance.powi(2)
}

/// Parallel-axis theorem for the product of inertia
///
/// # Formula
/// I_xy = I_xy,c + A·e_x·e_y
#[inline]
pub fn parallel_axis_product(ixy_centroidal: f64, area: f64, dx: f64, dy: f64) -> f64 {
    ixy_centroidal + area * dx * dy
}

/// Rotation of axes
///
/// Given centroidal moments about a (u, v) frame whose u axis makes the angle
/// β with the global x axis, return the moments about the global axes.
///
/// ```text
///        y   v
///        ▲  ╱
///        │ ╱   u
///        │╱ __╱
///        ●──────► x      β = angle from x to u (counter-clockwise)
/// ```
///
/// # Formula
/// I_x  = I_u·cos²β + I_v·sin²β + I_uv·sin 2β
/// I_y  = I_u·sin²β + I_v·cos²β − I_uv·sin 2β
/// I_xy = (I_v − I_u)·sinβ·cosβ + I_uv·cos 2β
///
/// where I_u = ∫v² dA (about the u axis), I_v = ∫u² dA and I_uv = ∫uv dA.
///
/// # Returns
/// `(I_x, I_y, I_xy)`
///
/// # Example
/// ```rust
/// use section_core::equations::section::rotate_moments_of_inertia;
///
/// // a quarter turn swaps the two moments
/// let (ix, iy, ixy) = rotate_moments_of_inertia(10.0, 2.0, 0.0, std::f64::consts::FRAC_PI_2);
/// assert!((ix - 2.0).abs() < 1e-9);
/// assert!((iy - 10.0).abs() < 1e-9);
/// assert!(ixy.abs() < 1e-9);
/// ```
pub fn rotate_moments_of_inertia(i_u: f64, i_v: f64, i_uv: f64, beta_rad: f64) -> (f64, f64, f64) {
    let (s, c) = beta_rad.sin_cos();
    let sin2 = (2.0 * beta_rad).sin();
    let cos2 = (2.0 * beta_rad).cos();
    let i_x = i_u * c * c + i_v * s * s + i_uv * sin2;
    let i_y = i_u * s * s + i_v * c * c - i_uv * sin2;
    let i_xy = (i_v - i_u) * s * c + i_uv * cos2;
    (i_x, i_y, i_xy)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_properties() {
        assert_relative_eq!(rectangular_area(6.0, 100.0), 600.0);
        assert_relative_eq!(rectangular_moment_of_inertia(6.0, 100.0), 500_000.0);
        assert_relative_eq!(rectangular_plastic_section_modulus(6.0, 100.0), 15_000.0);
    }

    #[test]
    fn test_tube_by_superposition() {
        let i_tube = circular_moment_of_inertia(100.0) - circular_moment_of_inertia(80.0);
        let expected = PI * (100f64.powi(4) - 80f64.powi(4)) / 64.0;
        assert_relative_eq!(i_tube, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_circle_plastic_modulus_from_half_discs() {
        let d = 50.0;
        let half_area = circular_area(d) / 2.0;
        let lever = 2.0 * d / (3.0 * PI);
        assert_relative_eq!(circular_plastic_section_modulus(d), 2.0 * half_area * lever, max_relative = 1e-12);
    }

    #[test]
    fn test_half_disc_centroid() {
        let r = 30.0;
        assert_relative_eq!(annular_sector_centroid_radius(0.0, r, PI), 4.0 * r / (3.0 * PI), max_relative = 1e-12);
    }

    #[test]
    fn test_full_ring_second_moments() {
        // Δθ = 2π: both moments equal the ring's π(R⁴ − r⁴)/4
        let (uu, vv) = annular_sector_second_moments(40.0, 50.0, 2.0 * PI);
        let expected = PI * (50f64.powi(4) - 40f64.powi(4)) / 4.0;
        assert_relative_eq!(uu, expected, max_relative = 1e-12);
        assert_relative_eq!(vv, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_quarter_circle_from_full_circle() {
        // Four quarter circles about the shared center rebuild πr⁴/4
        let r = 12.0;
        let area = PI * r * r / 4.0;
        let e = quarter_circle_centroid_offset(r);
        let about_center = parallel_axis(quarter_circle_moment_of_inertia(r), area, e);
        assert_relative_eq!(4.0 * about_center, PI * r.powi(4) / 4.0, max_relative = 1e-12);

        // ∫xy over the positive quadrant about the center is r⁴/8
        let product = parallel_axis_product(quarter_circle_product_of_inertia(r), area, e, e);
        assert_relative_eq!(product, r.powi(4) / 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rotation_preserves_invariants() {
        let (i_u, i_v, i_uv) = (120.0, 35.0, -12.0);
        for deg in [0.0, 17.0, 45.0, 90.0, 133.0, 270.0] {
            let (ix, iy, ixy) = rotate_moments_of_inertia(i_u, i_v, i_uv, f64::to_radians(deg));
            // trace and determinant of the inertia tensor are invariant
            assert_relative_eq!(ix + iy, i_u + i_v, max_relative = 1e-12);
            assert_relative_eq!(ix * iy - ixy * ixy, i_u * i_v - i_uv * i_uv, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_rotation_identity() {
        let (ix, iy, ixy) = rotate_moments_of_inertia(7.0, 3.0, 1.5, 0.0);
        assert_relative_eq!(ix, 7.0);
        assert_relative_eq!(iy, 3.0);
        assert_relative_eq!(ixy, 1.5);
    }

    #[test]
    fn test_right_triangle_product() {
        // ∫xy about the right-angle corner is b²h²/24
        let (b, h) = (6.0, 9.0);
        let area = b * h / 2.0;
        let about_corner = parallel_axis_product(right_triangle_product_of_inertia(b, h), area, b / 3.0, h / 3.0);
        assert_relative_eq!(about_corner, (b * h).powi(2) / 24.0, max_relative = 1e-12);
    }
}
