use crate::math::Point3;

/// A vertex of a polyhedron model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// The 3D position of the vertex.
    pub point: Point3,
    /// `true` for a face center used only as a fan apex; never drawn as a marker.
    pub is_anchor: bool,
}

impl Vertex {
    /// Creates a visible vertex at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self {
            point,
            is_anchor: false,
        }
    }

    /// Creates an anchor vertex at the given point.
    #[must_use]
    pub fn anchor(point: Point3) -> Self {
        Self {
            point,
            is_anchor: true,
        }
    }
}
