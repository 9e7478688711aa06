use anyhow::Result;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::core::gpu_context::GpuContext;
use crate::scenes::Scene;
use crate::types::{
    self, BufferRole, MixerUniform, TransformUniform, UniformSlot, Vertex, UNIFORM_SLOTS,
};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Indexed, depth-tested rasterizer for a single scene mesh
pub struct Renderer {
    gpu: GpuContext,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    mixer_buffer: wgpu::Buffer,
    transform_buffer: wgpu::Buffer,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, scene: &Scene, clear_color: [f64; 4]) -> Result<Self> {
        let gpu = GpuContext::new(window).await?;
        let device = gpu.device();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&scene.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&scene.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let mixer_buffer = Self::create_uniform_buffer(
            device,
            types::slot(BufferRole::Mixer),
            bytemuck::bytes_of(&scene.mixer),
        );
        let transform_buffer = Self::create_uniform_buffer(
            device,
            types::slot(BufferRole::Transform),
            bytemuck::bytes_of(&TransformUniform::new(glam::Mat4::IDENTITY)),
        );

        let (pipeline, bind_group) =
            Self::create_pipeline(device, gpu.format(), &mixer_buffer, &transform_buffer);

        let (width, height) = gpu.size();
        let depth_view = Self::create_depth_view(device, width, height);

        let [r, g, b, a] = clear_color;
        log::info!(
            "Renderer initialized: scene '{}', {} vertices, {} indices",
            scene.name,
            scene.vertices.len(),
            scene.indices.len()
        );

        Ok(Self {
            gpu,
            pipeline,
            bind_group,
            vertex_buffer,
            index_buffer,
            index_count: scene.index_count(),
            mixer_buffer,
            transform_buffer,
            depth_view,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.gpu.resize(width, height) {
            self.depth_view = Self::create_depth_view(self.gpu.device(), width, height);
            log::debug!("Surface resized to {width}x{height}");
        }
    }

    pub fn reconfigure(&mut self) {
        self.gpu.reconfigure();
    }

    /// Upload this frame's uniforms and draw the mesh
    pub fn render(
        &mut self,
        transform: &TransformUniform,
        mixer: &MixerUniform,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let queue = self.gpu.queue();
        queue.write_buffer(&self.transform_buffer, 0, bytemuck::bytes_of(transform));
        queue.write_buffer(&self.mixer_buffer, 0, bytemuck::bytes_of(mixer));

        let output = self.gpu.surface().get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn create_uniform_buffer(device: &wgpu::Device, slot: UniformSlot, contents: &[u8]) -> wgpu::Buffer {
        debug_assert_eq!(contents.len() as u64, slot.size);
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(match slot.role {
                BufferRole::Mixer => "Mixer Buffer",
                BufferRole::Transform => "Transform Buffer",
            }),
            contents,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        })
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_pipeline(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        mixer_buffer: &wgpu::Buffer,
        transform_buffer: &wgpu::Buffer,
    ) -> (wgpu::RenderPipeline, wgpu::BindGroup) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Base Shader"),
            source: wgpu::ShaderSource::Wgsl(types::shader_source().into()),
        });

        let layout_entries: Vec<wgpu::BindGroupLayoutEntry> = UNIFORM_SLOTS
            .iter()
            .map(|slot| wgpu::BindGroupLayoutEntry {
                binding: slot.binding,
                visibility: slot.visibility,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(slot.size),
                },
                count: None,
            })
            .collect();

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &layout_entries,
            label: Some("uniform_bind_group_layout"),
        });

        let group_entries: Vec<wgpu::BindGroupEntry> = UNIFORM_SLOTS
            .iter()
            .map(|slot| wgpu::BindGroupEntry {
                binding: slot.binding,
                resource: match slot.role {
                    BufferRole::Mixer => mixer_buffer.as_entire_binding(),
                    BufferRole::Transform => transform_buffer.as_entire_binding(),
                },
            })
            .collect();

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &group_entries,
            label: Some("uniform_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
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
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        (pipeline, bind_group)
    }
}
