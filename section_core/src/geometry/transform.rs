//! Anchor/mirror transform.
//!
//! Every primitive computes its geometry once in a canonical, unmirrored
//! local frame whose origin is the anchor. The [`AnchorTransform`] then maps
//! local results to the section plane with a ±1 scale per axis followed by a
//! translation to the anchor:
//!
//! ```text
//! global = anchor + (sx · local.x, sy · local.y)      sx, sy ∈ {+1, −1}
//! ```
//!
//! Under that map areas and the centroidal moments I_xx, I_yy are unchanged,
//! the product of inertia picks up sx·sy, and bounding boxes swap their
//! min/max on a flipped axis. Because it is applied to the *final* local
//! centroid, no accessor carries its own sign handling.

use serde::{Deserialize, Serialize};

use super::{Bounds, Point2};

/// Placement of a primitive: anchor point plus independent mirror flags.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorTransform {
    /// Anchor of the primitive in the section plane
    pub anchor: Point2,
    /// Mirror about the vertical line through the anchor (negates local x)
    #[serde(default)]
    pub mirror_x: bool,
    /// Mirror about the horizontal line through the anchor (negates local y)
    #[serde(default)]
    pub mirror_y: bool,
}

impl AnchorTransform {
    /// Unmirrored placement at `anchor`
    pub fn at(anchor: Point2) -> Self {
        Self {
            anchor,
            mirror_x: false,
            mirror_y: false,
        }
    }

    /// Builder: set both mirror flags
    pub fn mirrored(mut self, mirror_x: bool, mirror_y: bool) -> Self {
        self.mirror_x = mirror_x;
        self.mirror_y = mirror_y;
        self
    }

    /// Same placement with the x mirror toggled
    pub fn flip_x(self) -> Self {
        Self { mirror_x: !self.mirror_x, ..self }
    }

    /// Same placement with the y mirror toggled
    pub fn flip_y(self) -> Self {
        Self { mirror_y: !self.mirror_y, ..self }
    }

    /// Scale applied to local x (+1 or −1)
    pub fn sign_x(&self) -> f64 {
        if self.mirror_x { -1.0 } else { 1.0 }
    }

    /// Scale applied to local y (+1 or −1)
    pub fn sign_y(&self) -> f64 {
        if self.mirror_y { -1.0 } else { 1.0 }
    }

    /// Map a local point to the section plane
    pub fn apply(&self, local: Point2) -> Point2 {
        Point2::new(
            self.anchor.x + self.sign_x() * local.x,
            self.anchor.y + self.sign_y() * local.y,
        )
    }

    /// Map a local bounding box to the section plane
    pub fn apply_bounds(&self, local: Bounds) -> Bounds {
        let a = self.apply(Point2::new(local.min_x, local.min_y));
        let b = self.apply(Point2::new(local.max_x, local.max_y));
        Bounds::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Map a centroidal product of inertia computed in the local frame
    pub fn apply_product_of_inertia(&self, local_ixy: f64) -> f64 {
        self.sign_x() * self.sign_y() * local_ixy
    }

    /// Map a local polyline; a single mirror reverses orientation, so the
    /// point order is reversed to keep contours counter-clockwise.
    pub fn apply_points(&self, local: &[Point2]) -> Vec<Point2> {
        let mut points: Vec<Point2> = local.iter().map(|p| self.apply(*p)).collect();
        if self.mirror_x != self.mirror_y {
            points.reverse();
        }
        points
    }
}
