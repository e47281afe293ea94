//! A renderer for the flat-colored cube.

use crate::camera::Camera3d;
use crate::context::Context;
use crate::procedural::{cube_vertices, ColoredVertex};
use crate::renderer::Renderer3d;
use bytemuck::{Pod, Zeroable};
use glamx::Mat4;

/// Frame uniforms for cube rendering.
/// Layout must match flat_color.wgsl FrameUniforms struct.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct FrameUniforms {
    transform: [[f32; 4]; 4],
}

/// Draws the static cube mesh with a per-frame object transform.
///
/// The vertex buffer is uploaded once. Each frame, the product of the camera
/// projection and the current object transform is written to a uniform buffer.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    frame_uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    num_vertices: u32,
    model: Mat4,
}

impl CubeRenderer {
    /// Creates the pipeline and uploads the cube mesh.
    pub fn new(ctxt: &Context) -> CubeRenderer {
        let bind_group_layout = ctxt.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cube_renderer_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = ctxt.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cube_renderer_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = ctxt.create_shader_module(Some("cube_renderer_shader"), FLAT_COLOR_SRC);

        let pipeline = ctxt.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cube_renderer_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[ColoredVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctxt.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            // Both windings are drawn: the faces do not share a consistent orientation.
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
                format: Context::depth_format(),
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

        let frame_uniform_buffer = ctxt.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cube_renderer_frame_uniform_buffer"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctxt.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube_renderer_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniform_buffer.as_entire_binding(),
            }],
        });

        let vertices = cube_vertices();
        let vertex_buffer = ctxt.create_buffer_init(
            Some("cube_renderer_vertex_buffer"),
            bytemuck::cast_slice(&vertices),
            wgpu::BufferUsages::VERTEX,
        );

        CubeRenderer {
            pipeline,
            bind_group,
            frame_uniform_buffer,
            vertex_buffer,
            num_vertices: vertices.len() as u32,
            model: Mat4::IDENTITY,
        }
    }

    /// Sets the object transform used by the next rendered frames.
    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }
}

impl Renderer3d for CubeRenderer {
    fn render(
        &mut self,
        camera: &dyn Camera3d,
        ctxt: &Context,
        render_pass: &mut wgpu::RenderPass<'_>,
    ) {
        let frame_uniforms = FrameUniforms {
            transform: (camera.transformation() * self.model).to_cols_array_2d(),
        };
        ctxt.write_buffer(
            &self.frame_uniform_buffer,
            0,
            bytemuck::bytes_of(&frame_uniforms),
        );

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.num_vertices, 0..1);
    }
}

/// Shader used to draw flat-colored geometry.
pub static FLAT_COLOR_SRC: &str = include_str!("../builtin/flat_color.wgsl");
