pub mod builder;
pub mod color;
pub mod face;
pub mod vertex;

pub use builder::PolyhedronBuilder;
pub use color::Color;
pub use face::{Face, FaceGroup};
pub use vertex::Vertex;

use crate::math::polygon_3d::centroid;
use crate::math::Point3;

/// An immutable polyhedron: vertex table, face table, and face groups.
///
/// Only [`PolyhedronBuilder::build`] creates one. Vertex indices are dense and
/// zero-based; faces are stored group by group, in the order the groups were
/// added.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    name: &'static str,
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    groups: Vec<FaceGroup>,
}

impl Polyhedron {
    /// Human-readable model name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The vertex table.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The face table.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Logical faces, each covering a contiguous range of the face table.
    #[must_use]
    pub fn groups(&self) -> &[FaceGroup] {
        &self.groups
    }

    /// Returns the vertex at `index`, if any.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Number of anchor vertices.
    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_anchor).count()
    }

    /// Indices of the non-anchor vertices, in table order.
    pub fn marker_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_anchor)
            .map(|(i, _)| i)
    }

    /// Centroid of the non-anchor vertices.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let visible: Vec<Point3> = self
            .vertices
            .iter()
            .filter(|v| !v.is_anchor)
            .map(|v| v.point)
            .collect();
        centroid(&visible).unwrap_or_else(Point3::origin)
    }

    /// Groups that contain `vertex` on their boundary or as anchor.
    pub fn groups_touching(&self, vertex: usize) -> impl Iterator<Item = (usize, &FaceGroup)> + '_ {
        self.groups.iter().enumerate().filter(move |(_, g)| {
            g.anchor == Some(vertex) || g.boundary.contains(&vertex)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::math::Point3;
    use crate::operations::creation::MakeCuboctahedron;
    use approx::assert_relative_eq;

    #[test]
    fn corner_vertex_touches_four_faces() {
        let m = MakeCuboctahedron::new().execute().unwrap();
        let groups: Vec<usize> = m.groups_touching(1).map(|(i, _)| i).collect();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0], 0);
    }

    #[test]
    fn anchor_touches_only_its_own_face() {
        let m = MakeCuboctahedron::new().execute().unwrap();
        let groups: Vec<usize> = m.groups_touching(0).map(|(i, _)| i).collect();
        assert_eq!(groups, vec![0]);
    }

    #[test]
    fn vertex_lookup() {
        let m = MakeCuboctahedron::new().execute().unwrap();
        assert!(m.vertex(0).unwrap().is_anchor);
        assert!(m.vertex(18).is_none());
        assert_relative_eq!(m.centroid(), Point3::origin(), epsilon = 1e-12);
    }
}
