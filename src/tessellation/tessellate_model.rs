use crate::error::{Result, SceneError};
use crate::math::polygon_3d::triangle_normal;
use crate::math::{Vector3, TOLERANCE};
use crate::model::Polyhedron;

use super::{ColoredMesh, Material};

/// Converts a polyhedron model into a renderable, uniformly scaled mesh.
///
/// The mesh shares the model's vertex indexing: triangle `i` of the mesh is
/// face `i` of the model, with the same vertex order and color.
pub struct TessellateModel {
    scale: f64,
    material: Material,
}

impl TessellateModel {
    /// Creates a new `TessellateModel` operation with the default material.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            material: Material::default(),
        }
    }

    /// Sets a custom material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Executes the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not a positive finite number.
    pub fn execute(&self, model: &Polyhedron) -> Result<ColoredMesh> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SceneError::InvalidScale(self.scale).into());
        }

        let vertices: Vec<_> = model
            .vertices()
            .iter()
            .map(|v| v.point * self.scale)
            .collect();

        let mut mesh = ColoredMesh {
            indices: Vec::with_capacity(model.faces().len()),
            face_normals: Vec::with_capacity(model.faces().len()),
            face_colors: Vec::with_capacity(model.faces().len()),
            material: self.material,
            vertices,
        };

        for face in model.faces() {
            let [a, b, c] = face.indices.map(|i| mesh.vertices[i]);
            let n = triangle_normal(&a, &b, &c);
            let len = n.norm();
            let normal = if len < TOLERANCE {
                Vector3::zeros()
            } else {
                n / len
            };
            mesh.indices.push(face.indices);
            mesh.face_normals.push(normal);
            mesh.face_colors.push(face.color);
        }

        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::model::Color;
    use crate::operations::creation::{MakeCuboctahedron, MakeTruncatedCuboctahedron};
    use crate::tessellation::Side;
    use approx::assert_relative_eq;

    #[test]
    fn mesh_mirrors_the_face_table() {
        let model = MakeCuboctahedron::new().execute().unwrap();
        let mesh = TessellateModel::new(20.0).execute(&model).unwrap();
        assert_eq!(mesh.triangle_count(), 32);
        assert_eq!(mesh.vertices.len(), 18);
        for (face, (tri, color)) in model
            .faces()
            .iter()
            .zip(mesh.indices.iter().zip(&mesh.face_colors))
        {
            assert_eq!(&face.indices, tri);
            assert_eq!(face.color, *color);
        }
    }

    #[test]
    fn positions_are_scaled() {
        let model = MakeCuboctahedron::new().execute().unwrap();
        let mesh = TessellateModel::new(20.0).execute(&model).unwrap();
        assert_relative_eq!(mesh.vertices[0], Point3::new(0.0, 0.0, 30.0));
        assert_relative_eq!(mesh.vertices[5], Point3::new(0.0, 40.0, 0.0));
    }

    #[test]
    fn normals_point_outward() {
        let model = MakeTruncatedCuboctahedron::new().execute().unwrap();
        let mesh = TessellateModel::new(1.0).execute(&model).unwrap();
        for (tri, n) in mesh.indices.iter().zip(&mesh.face_normals) {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
            let mid = tri
                .iter()
                .fold(Vector3::zeros(), |acc, &i| acc + mesh.vertices[i].coords);
            assert!(n.dot(&mid) > 0.0);
        }
        // Front octagon faces +z.
        assert_relative_eq!(mesh.face_normals[0], Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn default_material_is_flat_and_double_sided() {
        let model = MakeCuboctahedron::new().execute().unwrap();
        let mesh = TessellateModel::new(1.0).execute(&model).unwrap();
        assert!(mesh.material.flat);
        assert_eq!(mesh.material.side, Side::Double);
    }

    #[test]
    fn custom_material() {
        let model = MakeCuboctahedron::new().execute().unwrap();
        let material = Material {
            flat: false,
            side: Side::Front,
        };
        let mesh = TessellateModel::new(1.0)
            .with_material(material)
            .execute(&model)
            .unwrap();
        assert_eq!(mesh.material, material);
    }

    #[test]
    fn flat_buffers_repeat_face_data_per_corner() {
        let model = MakeCuboctahedron::new().execute().unwrap();
        let mesh = TessellateModel::new(1.0).execute(&model).unwrap();
        let buffers = mesh.to_flat_buffers();
        assert_eq!(buffers.positions.len(), 96);
        assert_eq!(buffers.colors.len(), 96);
        let teal = Color::from_hex(0x44EEBB).to_rgb_f32();
        assert_eq!(&buffers.colors[0..3], &[teal, teal, teal]);
        assert_eq!(buffers.normals[0], buffers.normals[2]);
        assert_eq!(buffers.positions[0], [0.0, 0.0, 1.5]);
    }

    #[test]
    fn rejects_non_positive_scale() {
        let model = MakeCuboctahedron::new().execute().unwrap();
        assert!(TessellateModel::new(0.0).execute(&model).is_err());
        assert!(TessellateModel::new(f64::INFINITY).execute(&model).is_err());
    }
}
