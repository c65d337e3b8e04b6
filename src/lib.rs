pub mod error;
pub mod math;
pub mod model;
pub mod operations;
pub mod render;
pub mod scene;
pub mod tessellation;

pub use error::{PolyviewError, Result};
