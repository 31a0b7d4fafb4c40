//! # Shape Primitives
//!
//! Immutable parametric shapes that expose the full
//! [`SectionProperties`](crate::properties::SectionProperties) contract:
//!
//! - [`Circle`] and [`Tube`] - solid and hollow circular sections
//! - [`Rectangle`] - plate anchored at a corner
//! - [`RightAngleCurved`] - root fillet between two perpendicular plates
//! - [`RightAngledTriangle`] - with an interior sampling grid
//! - [`AnnularSector`] - ring slice between two compass angles
//!
//! Every constructor validates its inputs and returns `SectionResult<Self>`.
//! A shape never changes after construction; a corroded or moved variant is a
//! new value.
//!
//! [`Primitive`] wraps all of them in one enum so a composite section can own
//! a heterogeneous list of parts.
//!
//! ## JSON Serialization
//!
//! ```json
//! { "type": "Rectangle", "width": 6.0, "height": 85.0,
//!   "placement": { "anchor": { "x": 0.0, "y": 15.0 }, "mirror_x": false, "mirror_y": false } }
//! ```

pub mod annular_sector;
pub mod circle;
pub mod rectangle;
pub mod right_angle_curved;
pub mod triangle;

pub use annular_sector::AnnularSector;
pub use circle::{Circle, Tube};
pub use rectangle::Rectangle;
pub use right_angle_curved::RightAngleCurved;
pub use triangle::{InteriorGrid, InteriorGridIter, RightAngledTriangle};

use serde::Serialize;

use crate::geometry::{AnchorTransform, Contour};
use crate::properties::{CanonicalShape, LocalProperties};
use crate::settings::GeometrySettings;

/// Any primitive shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Primitive {
    Circle(Circle),
    Tube(Tube),
    Rectangle(Rectangle),
    RightAngleCurved(RightAngleCurved),
    RightAngledTriangle(RightAngledTriangle),
    AnnularSector(AnnularSector),
}

impl Primitive {
    /// Get the primitive kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Circle(_) => "Circle",
            Primitive::Tube(_) => "Tube",
            Primitive::Rectangle(_) => "Rectangle",
            Primitive::RightAngleCurved(_) => "Right-Angle Curved",
            Primitive::RightAngledTriangle(_) => "Right-Angled Triangle",
            Primitive::AnnularSector(_) => "Annular Sector",
        }
    }

    fn as_shape(&self) -> &dyn CanonicalShape {
        match self {
            Primitive::Circle(s) => s,
            Primitive::Tube(s) => s,
            Primitive::Rectangle(s) => s,
            Primitive::RightAngleCurved(s) => s,
            Primitive::RightAngledTriangle(s) => s,
            Primitive::AnnularSector(s) => s,
        }
    }
}

impl CanonicalShape for Primitive {
    fn display_name(&self) -> Option<&str> {
        self.as_shape().display_name()
    }

    fn placement(&self) -> AnchorTransform {
        self.as_shape().placement()
    }

    fn local_properties(&self) -> LocalProperties {
        self.as_shape().local_properties()
    }

    fn local_plastic_moduli(&self) -> (f64, f64) {
        self.as_shape().local_plastic_moduli()
    }

    fn local_contours(&self, settings: &GeometrySettings) -> Vec<Contour> {
        self.as_shape().local_contours(settings)
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Primitive {
                fn from(shape: $variant) -> Self {
                    Primitive::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Circle, Tube, Rectangle, RightAngleCurved, RightAngledTriangle, AnnularSector);
