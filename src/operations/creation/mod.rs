pub mod make_cuboctahedron;
pub mod make_truncated_cuboctahedron;

pub use make_cuboctahedron::MakeCuboctahedron;
pub use make_truncated_cuboctahedron::MakeTruncatedCuboctahedron;
