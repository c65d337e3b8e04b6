use std::collections::HashMap;

use crate::error::ModelError;
use crate::math::polygon_3d::triangle_normal;
use crate::math::{Point3, TOLERANCE};
use crate::model::Polyhedron;

/// Checks a polyhedron's tables for authoring defects.
///
/// Verifies, in order:
/// - every face index is in bounds and distinct within its face;
/// - no face is degenerate, and every face winds away from the centroid;
/// - every group is one color, and its triangles all contain the group apex;
/// - anchor vertices appear only in the one group they fan;
/// - every vertex is referenced by some face.
#[derive(Debug, Clone, Copy)]
pub struct IsValid {
    tolerance: f64,
}

impl Default for IsValid {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

impl IsValid {
    /// Creates a new `IsValid` query with the global tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance for area and orientation checks.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns the first defect found.
    pub fn execute(&self, model: &Polyhedron) -> Result<(), ModelError> {
        let vertices = model.vertices();
        let faces = model.faces();
        let len = vertices.len();
        let center = model.centroid();
        let mut referenced = vec![false; len];

        for (face, f) in faces.iter().enumerate() {
            if let Some(&index) = f.indices.iter().find(|&&i| i >= len) {
                return Err(ModelError::IndexOutOfBounds { face, index, len });
            }
            let [a, b, c] = f.indices;
            if a == b || b == c || a == c {
                return Err(ModelError::RepeatedIndex {
                    face,
                    indices: f.indices,
                });
            }
            for i in f.indices {
                referenced[i] = true;
            }

            let [pa, pb, pc] = f.indices.map(|i| vertices[i].point);
            let normal = triangle_normal(&pa, &pb, &pc);
            if normal.norm() < self.tolerance {
                return Err(ModelError::DegenerateFace { face });
            }
            let mid = Point3::from((pa.coords + pb.coords + pc.coords) / 3.0);
            if normal.dot(&(mid - center)) <= self.tolerance {
                return Err(ModelError::InwardFace { face });
            }
        }

        let mut anchor_owner: HashMap<usize, usize> = HashMap::new();
        for (group, g) in model.groups().iter().enumerate() {
            let mismatch = |reason: String| ModelError::AnchorMismatch { group, reason };

            let Some(triangles) = faces.get(g.faces.clone()) else {
                return Err(mismatch(format!("face range {:?} is out of bounds", g.faces)));
            };
            if triangles.iter().any(|f| f.color != g.color) {
                return Err(ModelError::ColorMismatch { group });
            }

            if let Some(anchor) = g.anchor {
                if !vertices.get(anchor).is_some_and(|v| v.is_anchor) {
                    return Err(mismatch(format!("apex {anchor} is not an anchor vertex")));
                }
                if let Some(other) = anchor_owner.insert(anchor, group) {
                    return Err(mismatch(format!("anchor {anchor} already fans group {other}")));
                }
            }
            if let Some(apex) = g.apex() {
                if let Some(i) = triangles.iter().position(|f| !f.contains(apex)) {
                    return Err(mismatch(format!(
                        "triangle {} misses apex {apex}",
                        g.faces.start + i
                    )));
                }
            }
            let stray = triangles
                .iter()
                .flat_map(|f| f.indices)
                .find(|&i| vertices[i].is_anchor && Some(i) != g.anchor);
            if let Some(i) = stray {
                return Err(mismatch(format!("touches foreign anchor {i}")));
            }
        }

        if let Some(vertex) = referenced.iter().position(|&r| !r) {
            return Err(ModelError::OrphanVertex { vertex });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Color, PolyhedronBuilder};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    const RED: Color = Color::from_hex(0xFF1919);

    /// Square pyramid with an anchored base; `extra` appends unused vertices.
    fn pyramid(extra: usize) -> PolyhedronBuilder {
        let mut b = PolyhedronBuilder::new("pyramid");
        let base = b.anchor(p(0.0, 0.0, 0.0));
        let c0 = b.vertex(p(1.0, 1.0, 0.0));
        let c1 = b.vertex(p(-1.0, 1.0, 0.0));
        let c2 = b.vertex(p(-1.0, -1.0, 0.0));
        let c3 = b.vertex(p(1.0, -1.0, 0.0));
        let tip = b.vertex(p(0.0, 0.0, 2.0));
        for _ in 0..extra {
            b.vertex(p(0.0, 0.0, 1.0));
        }
        b.anchored(base, &[c0, c1, c2, c3], RED)
            .triangle([c0, c1, tip], RED)
            .triangle([c1, c2, tip], RED)
            .triangle([c2, c3, tip], RED)
            .triangle([c3, c0, tip], RED);
        b
    }

    #[test]
    fn pyramid_is_valid() {
        IsValid::new().execute(&pyramid(0).build().unwrap()).unwrap();
    }

    #[test]
    fn unused_vertex_is_an_orphan() {
        let model = pyramid(1).build().unwrap();
        assert_eq!(
            IsValid::new().execute(&model),
            Err(ModelError::OrphanVertex { vertex: 6 })
        );
    }

    #[test]
    fn unused_anchor_is_an_orphan() {
        let mut b = pyramid(0);
        b.anchor(p(0.0, 0.0, 0.5));
        let model = b.build().unwrap();
        assert_eq!(
            IsValid::new().execute(&model),
            Err(ModelError::OrphanVertex { vertex: 6 })
        );
    }

    #[test]
    fn repeated_index_is_rejected() {
        let mut b = pyramid(0);
        b.triangle([1, 1, 5], RED);
        let model = b.build().unwrap();
        assert_eq!(
            IsValid::new().execute(&model),
            Err(ModelError::RepeatedIndex {
                face: 8,
                indices: [1, 1, 5]
            })
        );
    }

    #[test]
    fn visible_vertex_cannot_be_an_apex() {
        let mut b = PolyhedronBuilder::new("bad");
        let c0 = b.vertex(p(1.0, 1.0, 0.0));
        let c1 = b.vertex(p(-1.0, 1.0, 0.0));
        let c2 = b.vertex(p(-1.0, -1.0, 0.0));
        let c3 = b.vertex(p(1.0, -1.0, 0.0));
        let tip = b.vertex(p(0.0, 0.0, 2.0));
        let fake = b.vertex(p(0.0, 0.0, 0.0));
        b.anchored(fake, &[c0, c1, c2, c3], RED)
            .triangle([c0, c1, tip], RED)
            .triangle([c1, c2, tip], RED)
            .triangle([c2, c3, tip], RED)
            .triangle([c3, c0, tip], RED);
        let model = b.build().unwrap();
        assert!(matches!(
            IsValid::new().execute(&model),
            Err(ModelError::AnchorMismatch { group: 0, .. })
        ));
    }

    #[test]
    fn unanchored_group_cannot_touch_an_anchor() {
        let mut b = pyramid(0);
        // Lies in the base plane, but outside the base's own fan.
        b.triangle([0, 1, 2], RED);
        let model = b.build().unwrap();
        assert!(matches!(
            IsValid::new().execute(&model),
            Err(ModelError::AnchorMismatch { group: 5, .. })
        ));
    }

    #[test]
    fn interior_triangle_is_not_outward() {
        let mut b = pyramid(0);
        b.triangle([0, 1, 5], RED);
        let model = b.build().unwrap();
        assert_eq!(
            IsValid::new().execute(&model),
            Err(ModelError::InwardFace { face: 8 })
        );
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let mut b = pyramid(0);
        b.triangle([1, 3, 0], RED);
        let model = b.build().unwrap();
        assert_eq!(
            IsValid::new().execute(&model),
            Err(ModelError::DegenerateFace { face: 8 })
        );
    }
}
