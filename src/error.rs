use thiserror::Error;

/// Top-level error type for the polyview crate.
#[derive(Debug, Error)]
pub enum PolyviewError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Authoring defects in a polyhedron's vertex or face tables.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("face {face} references vertex {index}, but the table has {len} vertices")]
    IndexOutOfBounds { face: usize, index: usize, len: usize },

    #[error("face group {group} references vertex {index}, but the table has {len} vertices")]
    BoundaryOutOfBounds { group: usize, index: usize, len: usize },

    #[error("face {face} repeats a vertex index: {indices:?}")]
    RepeatedIndex { face: usize, indices: [usize; 3] },

    #[error("face {face} is degenerate (zero area)")]
    DegenerateFace { face: usize },

    #[error("face {face} winds inward")]
    InwardFace { face: usize },

    #[error("face group {group}: {reason}")]
    AnchorMismatch { group: usize, reason: String },

    #[error("face group {group} mixes colors")]
    ColorMismatch { group: usize },

    #[error("vertex {vertex} is not referenced by any face")]
    OrphanVertex { vertex: usize },

    #[error("polygon needs at least 3 boundary vertices, got {0}")]
    TooFewSides(usize),
}

/// Errors raised by the scene container and its collaborators.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene node not found")]
    NodeNotFound,

    #[error("invalid scale factor: {0}")]
    InvalidScale(f64),

    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

/// Errors raised while driving the render loop.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("frame sink failed: {0}")]
    Sink(String),
}

/// Convenience type alias for results using [`PolyviewError`].
pub type Result<T> = std::result::Result<T, PolyviewError>;
