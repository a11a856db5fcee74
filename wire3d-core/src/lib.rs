//! wire3d Core Library - software wireframe transform and rasterization
//!
//! This library provides the renderer-independent part of the pipeline:
//! homogeneous transforms, perspective projection, the area-based triangle
//! rasterizer, OBJ ingestion and the per-frame scene orchestration. Drawing
//! is delegated to any host implementing [`Canvas`].

pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod obj;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use canvas::{Canvas, Color};
pub use config::RenderConfig;
pub use error::ParseError;
pub use geometry::{Mesh, Triangle};
pub use pipeline::Pipeline;
pub use projection::Camera;
pub use scene::Scene;
pub use transform::{RotationState, Transform};
