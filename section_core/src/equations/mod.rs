//! # Section Property Equations
//!
//! Closed-form geometry used by the shape primitives. Keeping the formulas in
//! one place means each can be checked against its reference once and then
//! reused by every shape that needs it.
//!
//! ## Modules
//!
//! - [`section`] - Area, inertia and plastic modulus of elementary shapes,
//!   parallel-axis and rotation-of-axes transforms
//!
//! ## Sign Conventions
//!
//! - **Coordinates**: x to the right, y up
//! - **Angles** (annular sector): 0° points up (+y), positive clockwise
//! - **Product of inertia**: ∫xy dA, positive when material lies in the first
//!   and third quadrants of the centroid

pub mod section;

pub use section::{
    annular_sector_area,
    annular_sector_centroid_radius,
    annular_sector_second_moments,
    circular_area,
    circular_moment_of_inertia,
    circular_plastic_section_modulus,
    parallel_axis,
    parallel_axis_product,
    quarter_circle_centroid_offset,
    quarter_circle_moment_of_inertia,
    quarter_circle_product_of_inertia,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_plastic_section_modulus,
    right_triangle_moment_of_inertia,
    right_triangle_plastic_section_modulus,
    right_triangle_product_of_inertia,
    rotate_moments_of_inertia,
};
