//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Textured, tinted 2D vertex
///
/// `position` is in window pixels until the pipeline maps it to clip space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }

    /// Untextured vertex (samples the white texture)
    pub const fn solid(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self::new(x, y, 0.0, 0.0, color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: (2 * std::mem::size_of::<[f32; 2]>()) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SPRITE_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ANCHOR_DOT: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const LOCAL_BOUNDS: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WORLD_BOUNDS: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const COLLISION_RING: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    fn test_attribute_offsets_match_struct() {
        let layout = Vertex::desc();
        let offsets: Vec<_> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(
            offsets,
            vec![
                offset_of!(Vertex, position) as wgpu::BufferAddress,
                offset_of!(Vertex, uv) as wgpu::BufferAddress,
                offset_of!(Vertex, color) as wgpu::BufferAddress,
            ]
        );
        assert_eq!(layout.array_stride, std::mem::size_of::<Vertex>() as wgpu::BufferAddress);
    }
}
