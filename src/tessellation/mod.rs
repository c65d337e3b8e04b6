mod tessellate_model;

pub use tessellate_model::TessellateModel;

use crate::math::{Point3, Vector3};
use crate::model::Color;

/// Which sides of a triangle are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
    Double,
}

/// How a mesh is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    /// One constant color per triangle, no interpolation.
    pub flat: bool,
    /// Sides that are rasterized.
    pub side: Side,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            flat: true,
            side: Side::Double,
        }
    }
}

/// An indexed triangle mesh with one color and one normal per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColoredMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle, in winding order).
    pub indices: Vec<[usize; 3]>,
    /// Per-triangle unit normals.
    pub face_normals: Vec<Vector3>,
    /// Per-triangle colors.
    pub face_colors: Vec<Color>,
    /// Shading parameters.
    pub material: Material,
}

/// De-indexed vertex streams for a flat-shaded draw call.
///
/// Every triangle gets three vertices of its own, carrying the triangle's
/// normal and color, so nothing is interpolated across a face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
}

impl ColoredMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Expands the mesh into per-corner streams for upload.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_flat_buffers(&self) -> FlatBuffers {
        let to_f32 = |x: f64, y: f64, z: f64| [x as f32, y as f32, z as f32];
        let corners = self.indices.len() * 3;
        let mut out = FlatBuffers {
            positions: Vec::with_capacity(corners),
            normals: Vec::with_capacity(corners),
            colors: Vec::with_capacity(corners),
        };
        for ((tri, n), color) in self
            .indices
            .iter()
            .zip(&self.face_normals)
            .zip(&self.face_colors)
        {
            for &i in tri {
                let p = self.vertices[i];
                out.positions.push(to_f32(p.x, p.y, p.z));
                out.normals.push(to_f32(n.x, n.y, n.z));
                out.colors.push(color.to_rgb_f32());
            }
        }
        out
    }
}
