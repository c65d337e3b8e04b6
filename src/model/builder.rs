use tracing::debug;

use crate::error::ModelError;
use crate::math::polygon_3d::{centroid, polygon_normal};
use crate::math::Point3;

use super::{Color, Face, FaceGroup, Polyhedron, Vertex};

/// A logical polygon waiting to be triangulated.
#[derive(Debug, Clone)]
struct PolygonSpec {
    anchor: Option<usize>,
    boundary: Vec<usize>,
    color: Color,
}

/// Append-only construction of a [`Polyhedron`].
///
/// Vertices get dense, zero-based indices in insertion order. Polygons are
/// recorded by their boundary ring and triangulated in [`build`](Self::build),
/// where each ring is first turned to face away from the solid's centroid.
/// Rings may therefore be listed in either rotational direction, but must
/// follow the polygon's boundary.
#[derive(Debug, Clone)]
pub struct PolyhedronBuilder {
    name: &'static str,
    vertices: Vec<Vertex>,
    polygons: Vec<PolygonSpec>,
}

impl PolyhedronBuilder {
    /// Creates an empty builder for a model called `name`.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            vertices: Vec::new(),
            polygons: Vec::new(),
        }
    }

    /// Appends a visible vertex and returns its index.
    pub fn vertex(&mut self, point: Point3) -> usize {
        self.vertices.push(Vertex::new(point));
        self.vertices.len() - 1
    }

    /// Appends an anchor vertex and returns its index.
    pub fn anchor(&mut self, point: Point3) -> usize {
        self.vertices.push(Vertex::anchor(point));
        self.vertices.len() - 1
    }

    /// Adds a triangular logical face.
    pub fn triangle(&mut self, corners: [usize; 3], color: Color) -> &mut Self {
        self.polygons.push(PolygonSpec {
            anchor: None,
            boundary: corners.to_vec(),
            color,
        });
        self
    }

    /// Adds a polygon fanned from its first boundary vertex.
    ///
    /// An n-gon yields `n - 2` triangles.
    pub fn polygon(&mut self, boundary: &[usize], color: Color) -> &mut Self {
        self.polygons.push(PolygonSpec {
            anchor: None,
            boundary: boundary.to_vec(),
            color,
        });
        self
    }

    /// Adds a polygon fanned from the anchor vertex at its center.
    ///
    /// An n-gon yields `n` triangles, each containing `anchor`.
    pub fn anchored(&mut self, anchor: usize, boundary: &[usize], color: Color) -> &mut Self {
        self.polygons.push(PolygonSpec {
            anchor: Some(anchor),
            boundary: boundary.to_vec(),
            color,
        });
        self
    }

    /// Number of vertices appended so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Orients and triangulates every polygon, producing the immutable model.
    ///
    /// # Errors
    ///
    /// Returns an error if a polygon has fewer than 3 boundary vertices or
    /// references a vertex that was never appended.
    pub fn build(self) -> Result<Polyhedron, ModelError> {
        let Self {
            name,
            vertices,
            polygons,
        } = self;

        let len = vertices.len();
        for (group, spec) in polygons.iter().enumerate() {
            if spec.boundary.len() < 3 {
                return Err(ModelError::TooFewSides(spec.boundary.len()));
            }
            if let Some(&index) = spec
                .boundary
                .iter()
                .chain(spec.anchor.iter())
                .find(|&&i| i >= len)
            {
                return Err(ModelError::BoundaryOutOfBounds { group, index, len });
            }
        }

        let visible: Vec<Point3> = vertices
            .iter()
            .filter(|v| !v.is_anchor)
            .map(|v| v.point)
            .collect();
        let center = centroid(&visible).unwrap_or_else(Point3::origin);

        let mut faces = Vec::new();
        let mut groups = Vec::with_capacity(polygons.len());
        for PolygonSpec {
            anchor,
            mut boundary,
            color,
        } in polygons
        {
            let ring: Vec<Point3> = boundary.iter().map(|&i| vertices[i].point).collect();
            let normal = polygon_normal(&ring);
            if let Some(mid) = centroid(&ring) {
                if normal.dot(&(mid - center)) < 0.0 {
                    // Keep the first vertex so an unanchored fan keeps its apex.
                    boundary[1..].reverse();
                }
            }

            let start = faces.len();
            let n = boundary.len();
            match anchor {
                Some(apex) => {
                    for i in 0..n {
                        faces.push(Face::new([apex, boundary[i], boundary[(i + 1) % n]], color));
                    }
                }
                None => {
                    for i in 1..n - 1 {
                        faces.push(Face::new([boundary[0], boundary[i], boundary[i + 1]], color));
                    }
                }
            }
            groups.push(FaceGroup {
                faces: start..faces.len(),
                color,
                anchor,
                boundary,
            });
        }

        debug!(
            model = name,
            vertices = vertices.len(),
            faces = faces.len(),
            groups = groups.len(),
            "built polyhedron"
        );

        Ok(Polyhedron {
            name,
            vertices,
            faces,
            groups,
        })
    }
}
