//! WebGPU render pipeline setup

use glam::Vec2;
use wgpu::util::DeviceExt;

use super::scene::{Scene, SceneLayout, TextureSlot};
use super::texture::GpuTexture;
use super::vertex::Vertex;
use crate::assets::{Assets, Image};

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    white: GpuTexture,
    sky: GpuTexture,
    planes: GpuTexture,
    /// Surface size in pixels
    pub size: (u32, u32),
    /// Game-space size mapped onto the surface
    pub view_size: Vec2,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        view_size: Vec2,
        assets: &Assets,
        vsync: bool,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("air-crash-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        log::debug!("Surface formats: {:?}", surface_caps.formats);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Create shader module
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let texture_layout = GpuTexture::bind_group_layout(&device);

        // Create pipeline
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&texture_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let white = GpuTexture::from_image(
            &device,
            &queue,
            &texture_layout,
            &Image::placeholder(),
            "white_texture",
            false,
        );
        let sky = GpuTexture::from_image(
            &device,
            &queue,
            &texture_layout,
            &assets.sky,
            "sky_texture",
            true,
        );
        let planes = GpuTexture::from_image(
            &device,
            &queue,
            &texture_layout,
            &assets.planes,
            "planes_texture",
            false,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            white,
            sky,
            planes,
            size: (width, height),
            view_size,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Texture sizes for scene UV mapping
    pub fn layout(&self) -> SceneLayout {
        let size = |t: &GpuTexture| Vec2::new(t.size.0 as f32, t.size.1 as f32);
        SceneLayout {
            sky_size: size(&self.sky),
            planes_size: size(&self.planes),
        }
    }

    fn texture(&self, slot: TextureSlot) -> &GpuTexture {
        match slot {
            TextureSlot::White => &self.white,
            TextureSlot::Sky => &self.sky,
            TextureSlot::Planes => &self.planes,
        }
    }

    /// Upload the scene's vertices and draw its batches in order
    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let mut ndc_vertices = Vec::with_capacity(scene.vertex_count());
        let mut ranges = Vec::with_capacity(scene.batches.len());
        for batch in &scene.batches {
            let start = ndc_vertices.len() as u32;
            ndc_vertices.extend(batch.vertices.iter().map(|v| {
                let [x, y] = pixel_to_ndc(Vec2::from(v.position), self.view_size);
                Vertex {
                    position: [x, y],
                    ..*v
                }
            }));
            ranges.push((batch.texture, start..ndc_vertices.len() as u32));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Recreated per frame; a few hundred vertices at most
        let vertex_buffer = (!ndc_vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("vertex_buffer"),
                    contents: bytemuck::cast_slice(&ndc_vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let [r, g, b, a] = scene.clear_color.map(f64::from);
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(buffer) = &vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                for (slot, range) in ranges {
                    if range.is_empty() {
                        continue;
                    }
                    render_pass.set_bind_group(0, &self.texture(slot).bind_group, &[]);
                    render_pass.draw(range, 0..1);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Map window pixels (origin top-left, y down) to normalized device coordinates
pub fn pixel_to_ndc(pos: Vec2, view_size: Vec2) -> [f32; 2] {
    let view_size = view_size.max(Vec2::ONE);
    [
        pos.x / view_size.x * 2.0 - 1.0,
        1.0 - pos.y / view_size.y * 2.0,
    ]
}
