pub mod camera;
pub mod clock;
pub mod controls;
pub mod draw;
pub mod light;
pub mod stage;

pub use camera::{CameraParams, PerspectiveCamera};
pub use clock::Clock;
pub use controls::OrbitControls;
pub use draw::{draw_polyhedron, DrawPolyhedron, DrawnPolyhedron, MarkerStyle};
pub use light::DirectionalLight;
pub use stage::{SceneConfig, Stage};

use slotmap::SlotMap;

use crate::error::SceneError;
use crate::math::Point3;
use crate::tessellation::ColoredMesh;

slotmap::new_key_type! {
    /// Unique identifier for a node in a scene.
    pub struct NodeId;
}

/// A sphere drawn at a visible vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// World-space center.
    pub position: Point3,
    /// Sphere shape and color.
    pub style: MarkerStyle,
}

/// Three colored axis lines from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesHelper {
    /// Length of each axis line.
    pub length: f64,
}

/// Anything that can be added to a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Mesh(ColoredMesh),
    Marker(Marker),
    Light(DirectionalLight),
    Axes(AxesHelper),
}

/// Arena that owns every node drawn in a frame.
///
/// Nodes are addressed by [`NodeId`] and iterated in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
    order: Vec<NodeId>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node and returns its ID.
    pub fn add(&mut self, node: SceneNode) -> NodeId {
        let id = self.nodes.insert(node);
        self.order.push(id);
        id
    }

    /// Returns a reference to the node, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn node(&self, id: NodeId) -> Result<&SceneNode, SceneError> {
        self.nodes.get(id).ok_or(SceneError::NodeNotFound)
    }

    /// Removes a node and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn remove(&mut self, id: NodeId) -> Result<SceneNode, SceneError> {
        let node = self.nodes.remove(id).ok_or(SceneError::NodeNotFound)?;
        self.order.retain(|&other| other != id);
        Ok(node)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.nodes.get(id).map(|node| (id, node)))
    }

    /// Meshes in insertion order.
    pub fn meshes(&self) -> impl Iterator<Item = &ColoredMesh> + '_ {
        self.iter().filter_map(|(_, node)| match node {
            SceneNode::Mesh(mesh) => Some(mesh),
            _ => None,
        })
    }

    /// Markers in insertion order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.iter().filter_map(|(_, node)| match node {
            SceneNode::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    /// Lights in insertion order.
    pub fn lights(&self) -> impl Iterator<Item = &DirectionalLight> + '_ {
        self.iter().filter_map(|(_, node)| match node {
            SceneNode::Light(light) => Some(light),
            _ => None,
        })
    }
}
