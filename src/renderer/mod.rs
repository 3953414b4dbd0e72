//! Rendering module
//!
//! Scene construction (`scene`, `shapes`) is pure and GPU-free; `pipeline`
//! uploads the resulting batches and draws them with wgpu.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod texture;
pub mod vertex;

pub use pipeline::{RenderState, pixel_to_ndc};
pub use scene::{DrawBatch, Scene, SceneLayout, TextureSlot, build_scene};
pub use vertex::Vertex;
