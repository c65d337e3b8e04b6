use crate::error::Result;
use crate::math::Point3;
use crate::model::{Color, Polyhedron, PolyhedronBuilder};

/// Color of the six square faces.
pub const SQUARE_COLOR: Color = Color::from_hex(0x44EEBB);

/// Color of the eight triangular corner faces.
pub const TRIANGLE_COLOR: Color = Color::from_hex(0xFF1919);

/// Builds the cuboctahedron model.
///
/// The front and back squares lie in the planes `z = ±1.5`; the four side
/// squares meet them along the `x`/`y` axes at `(±2, 0, 0)` and `(0, ±2, 0)`.
/// Every square is fanned from an anchor at its center, so the table holds
/// 18 vertices (12 visible, 6 anchors) and 32 triangles.
#[derive(Debug, Default, Clone, Copy)]
pub struct MakeCuboctahedron;

impl MakeCuboctahedron {
    /// Creates a new `MakeCuboctahedron` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, returning the immutable model.
    ///
    /// # Errors
    ///
    /// Returns an error only if the hand-written tables reference a missing
    /// vertex or a polygon with fewer than 3 sides.
    pub fn execute(&self) -> Result<Polyhedron> {
        let mut b = PolyhedronBuilder::new("cuboctahedron");

        // Front square
        let front = b.anchor(Point3::new(0.0, 0.0, 1.5));
        let f1 = b.vertex(Point3::new(-1.0, 1.0, 1.5));
        let f2 = b.vertex(Point3::new(-1.0, -1.0, 1.5));
        let f3 = b.vertex(Point3::new(1.0, -1.0, 1.5));
        let f4 = b.vertex(Point3::new(1.0, 1.0, 1.5));

        // Equator: tips of the side triangles
        let top = b.vertex(Point3::new(0.0, 2.0, 0.0));
        let left = b.vertex(Point3::new(-2.0, 0.0, 0.0));
        let bottom = b.vertex(Point3::new(0.0, -2.0, 0.0));
        let right = b.vertex(Point3::new(2.0, 0.0, 0.0));

        // Back square
        let back = b.anchor(Point3::new(0.0, 0.0, -1.5));
        let b1 = b.vertex(Point3::new(-1.0, 1.0, -1.5));
        let b2 = b.vertex(Point3::new(-1.0, -1.0, -1.5));
        let b3 = b.vertex(Point3::new(1.0, -1.0, -1.5));
        let b4 = b.vertex(Point3::new(1.0, 1.0, -1.5));

        // Side square centers
        let top_left = b.anchor(Point3::new(-1.0, 1.0, 0.0));
        let bottom_left = b.anchor(Point3::new(-1.0, -1.0, 0.0));
        let bottom_right = b.anchor(Point3::new(1.0, -1.0, 0.0));
        let top_right = b.anchor(Point3::new(1.0, 1.0, 0.0));

        b.anchored(front, &[f1, f2, f3, f4], SQUARE_COLOR)
            .triangle([f1, f4, top], TRIANGLE_COLOR)
            .triangle([f1, f2, left], TRIANGLE_COLOR)
            .triangle([f2, f3, bottom], TRIANGLE_COLOR)
            .triangle([f3, f4, right], TRIANGLE_COLOR);

        b.anchored(back, &[b1, b2, b3, b4], SQUARE_COLOR)
            .triangle([top, b1, b4], TRIANGLE_COLOR)
            .triangle([left, b1, b2], TRIANGLE_COLOR)
            .triangle([bottom, b2, b3], TRIANGLE_COLOR)
            .triangle([right, b3, b4], TRIANGLE_COLOR);

        b.anchored(top_left, &[left, f1, top, b1], SQUARE_COLOR)
            .anchored(bottom_left, &[left, f2, bottom, b2], SQUARE_COLOR)
            .anchored(bottom_right, &[bottom, f3, right, b3], SQUARE_COLOR)
            .anchored(top_right, &[right, f4, top, b4], SQUARE_COLOR);

        Ok(b.build()?)
    }
}
