use crate::error::Result;
use crate::math::Point3;
use crate::model::{Color, Polyhedron, PolyhedronBuilder};

/// Color of the six octagonal faces.
pub const OCTAGON_COLOR: Color = Color::from_hex(0x44EEBB);

/// Color of the twelve square faces.
pub const SQUARE_COLOR: Color = Color::from_hex(0xFF1919);

/// Color of the eight hexagonal faces.
pub const HEXAGON_COLOR: Color = Color::from_hex(0x0B58DD);

/// Front half of the visible vertices (`z > 0`), one-based in the comments
/// below. The back half mirrors it through `z = 0`.
const HALF: [[f64; 3]; 24] = [
    // 1-8: octagon in the plane z = 3
    [-1.0, 2.0, 3.0],
    [-2.0, 1.0, 3.0],
    [-2.0, -1.0, 3.0],
    [-1.0, -2.0, 3.0],
    [1.0, -2.0, 3.0],
    [2.0, -1.0, 3.0],
    [2.0, 1.0, 3.0],
    [1.0, 2.0, 3.0],
    // 9-16: outer corners of the top, left, bottom and right squares
    [-1.0, 3.0, 2.0],
    [-3.0, 1.0, 2.0],
    [-3.0, -1.0, 2.0],
    [-1.0, -3.0, 2.0],
    [1.0, -3.0, 2.0],
    [3.0, -1.0, 2.0],
    [3.0, 1.0, 2.0],
    [1.0, 3.0, 2.0],
    // 17-24: hexagon corners nearest the equator
    [-2.0, 3.0, 1.0],
    [-3.0, 2.0, 1.0],
    [-3.0, -2.0, 1.0],
    [-2.0, -3.0, 1.0],
    [2.0, -3.0, 1.0],
    [3.0, -2.0, 1.0],
    [3.0, 2.0, 1.0],
    [2.0, 3.0, 1.0],
];

/// Squares of one half, as one-based indices into [`HALF`].
const HALF_SQUARES: [[usize; 4]; 4] = [[1, 8, 16, 9], [2, 3, 11, 10], [4, 5, 13, 12], [6, 7, 15, 14]];

/// Hexagons of one half, as one-based indices into [`HALF`].
const HALF_HEXAGONS: [[usize; 6]; 4] = [
    [1, 9, 17, 18, 10, 2],
    [3, 11, 19, 20, 12, 4],
    [5, 13, 21, 22, 14, 6],
    [7, 15, 23, 24, 16, 8],
];

/// Builds the truncated cuboctahedron model.
///
/// Visible vertices are the 48 signed permutations of `(1, 2, 3)`. The six
/// octagons (`x, y, z = ±3`) are fanned from anchors at their centers; the
/// twelve squares and eight hexagons have no anchor. The table holds 54
/// vertices (48 visible, 6 anchors) and 104 triangles.
#[derive(Debug, Default, Clone, Copy)]
pub struct MakeTruncatedCuboctahedron;

impl MakeTruncatedCuboctahedron {
    /// Creates a new `MakeTruncatedCuboctahedron` operation.
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
        let mut b = PolyhedronBuilder::new("truncated cuboctahedron");

        let front_center = b.anchor(Point3::new(0.0, 0.0, 3.0));
        let front: Vec<usize> = HALF
            .iter()
            .map(|&[x, y, z]| b.vertex(Point3::new(x, y, z)))
            .collect();
        let back_center = b.anchor(Point3::new(0.0, 0.0, -3.0));
        let back: Vec<usize> = HALF
            .iter()
            .map(|&[x, y, z]| b.vertex(Point3::new(x, y, -z)))
            .collect();

        let top_center = b.anchor(Point3::new(0.0, 3.0, 0.0));
        let bottom_center = b.anchor(Point3::new(0.0, -3.0, 0.0));
        let left_center = b.anchor(Point3::new(-3.0, 0.0, 0.0));
        let right_center = b.anchor(Point3::new(3.0, 0.0, 0.0));

        for (center, half) in [(front_center, &front), (back_center, &back)] {
            b.anchored(center, &half[..8], OCTAGON_COLOR);
            for square in HALF_SQUARES {
                b.polygon(&square.map(|k| half[k - 1]), SQUARE_COLOR);
            }
            for hexagon in HALF_HEXAGONS {
                b.polygon(&hexagon.map(|k| half[k - 1]), HEXAGON_COLOR);
            }
        }

        let f = |k: usize| front[k - 1];
        let r = |k: usize| back[k - 1];

        b.anchored(
            top_center,
            &[r(9), r(17), f(17), f(9), f(16), f(24), r(24), r(16)],
            OCTAGON_COLOR,
        )
        .anchored(
            bottom_center,
            &[f(12), f(20), r(20), r(12), r(13), r(21), f(21), f(13)],
            OCTAGON_COLOR,
        )
        .anchored(
            right_center,
            &[r(23), r(15), r(14), r(22), f(22), f(14), f(15), f(23)],
            OCTAGON_COLOR,
        )
        .anchored(
            left_center,
            &[f(18), f(10), f(11), f(19), r(19), r(11), r(10), r(18)],
            OCTAGON_COLOR,
        );

        // Squares between the top/bottom and left/right octagons
        b.polygon(&[f(17), f(18), r(18), r(17)], SQUARE_COLOR)
            .polygon(&[f(24), f(23), r(23), r(24)], SQUARE_COLOR)
            .polygon(&[f(19), f(20), r(20), r(19)], SQUARE_COLOR)
            .polygon(&[f(21), f(22), r(22), r(21)], SQUARE_COLOR);

        Ok(b.build()?)
    }
}
