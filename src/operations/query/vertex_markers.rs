use crate::error::{Result, SceneError};
use crate::math::Point3;
use crate::model::Polyhedron;

/// Positions at which visible-vertex markers are drawn.
///
/// Yields every non-anchor vertex once, in vertex-table order, scaled
/// uniformly about the origin.
#[derive(Debug, Clone, Copy)]
pub struct VertexMarkers {
    scale: f64,
}

impl VertexMarkers {
    /// Creates a new `VertexMarkers` query.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not a positive finite number.
    pub fn execute(&self, model: &Polyhedron) -> Result<Vec<Point3>> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SceneError::InvalidScale(self.scale).into());
        }
        Ok(model
            .marker_indices()
            .map(|i| model.vertices()[i].point * self.scale)
            .collect())
    }
}
