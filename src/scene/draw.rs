use tracing::debug;

use crate::error::Result;
use crate::model::{Color, Polyhedron};
use crate::operations::query::VertexMarkers;
use crate::tessellation::TessellateModel;

use super::{Marker, NodeId, Scene, SceneNode};

/// Shape and color of the spheres drawn at visible vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    /// Longitude and latitude segments of the sphere tessellation.
    pub segments: u32,
    pub color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: 32,
            color: Color::from_hex(0x69_5959),
        }
    }
}

/// Scene nodes created by [`DrawPolyhedron`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnPolyhedron {
    /// The solid mesh.
    pub mesh: NodeId,
    /// One marker per visible vertex, in vertex-table order.
    pub markers: Vec<NodeId>,
}

/// Adds a polyhedron to a scene: one flat-shaded, double-sided mesh plus a
/// marker at every non-anchor vertex, all scaled by the same factor.
pub struct DrawPolyhedron {
    scale: f64,
    marker_style: MarkerStyle,
}

impl DrawPolyhedron {
    /// Creates a new `DrawPolyhedron` operation with the default marker style.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            marker_style: MarkerStyle::default(),
        }
    }

    /// Sets a custom marker style.
    #[must_use]
    pub fn with_marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = style;
        self
    }

    /// Executes the operation.
    ///
    /// Nothing is added to the scene if it fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not a positive finite number.
    pub fn execute(&self, model: &Polyhedron, scene: &mut Scene) -> Result<DrawnPolyhedron> {
        let mesh = TessellateModel::new(self.scale).execute(model)?;
        let positions = VertexMarkers::new(self.scale).execute(model)?;

        let mesh = scene.add(SceneNode::Mesh(mesh));
        let markers = positions
            .into_iter()
            .map(|position| {
                scene.add(SceneNode::Marker(Marker {
                    position,
                    style: self.marker_style,
                }))
            })
            .collect::<Vec<_>>();

        debug!(
            model = model.name(),
            scale = self.scale,
            markers = markers.len(),
            "drew polyhedron"
        );

        Ok(DrawnPolyhedron { mesh, markers })
    }
}

/// Draws `model` into `scene` at `scale` with the default marker style.
///
/// # Errors
///
/// Returns an error if the scale is not a positive finite number.
pub fn draw_polyhedron(scene: &mut Scene, model: &Polyhedron, scale: f64) -> Result<DrawnPolyhedron> {
    DrawPolyhedron::new(scale).execute(model, scene)
}
