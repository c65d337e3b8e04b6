use std::ops::Range;

use super::Color;

/// A colored triangle referencing three vertex-table indices.
///
/// The index order defines the winding, and with it the face normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Vertex-table indices, in winding order.
    pub indices: [usize; 3],
    /// Flat shading color.
    pub color: Color,
}

impl Face {
    /// Creates a new face.
    #[must_use]
    pub fn new(indices: [usize; 3], color: Color) -> Self {
        Self { indices, color }
    }

    /// Returns `true` if the triangle references `vertex`.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.indices.contains(&vertex)
    }
}

/// One logical face of a solid: a contiguous run of triangles sharing a color.
///
/// A polygon with more than 3 sides is fanned either from an anchor vertex
/// (the polygon's center) or, without one, from its first boundary vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceGroup {
    /// Range of this group's triangles in the face table.
    pub faces: Range<usize>,
    /// Color shared by every triangle of the group.
    pub color: Color,
    /// Center vertex the triangles are fanned from, if any.
    pub anchor: Option<usize>,
    /// Boundary vertices in outward winding order.
    pub boundary: Vec<usize>,
}

impl FaceGroup {
    /// Number of sides of the logical polygon.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.boundary.len()
    }

    /// Number of triangles in the group.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// The vertex shared by every triangle of the group.
    ///
    /// `None` for a plain triangle, which has no fan apex.
    #[must_use]
    pub fn apex(&self) -> Option<usize> {
        match self.anchor {
            Some(anchor) => Some(anchor),
            None if self.boundary.len() > 3 => self.boundary.first().copied(),
            None => None,
        }
    }

    /// Boundary edges as unordered `(min, max)` index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.boundary.len();
        (0..n).map(move |i| {
            let a = self.boundary[i];
            let b = self.boundary[(i + 1) % n];
            (a.min(b), a.max(b))
        })
    }
}
