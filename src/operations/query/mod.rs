mod is_valid;
mod vertex_markers;

pub use is_valid::IsValid;
pub use vertex_markers::VertexMarkers;
