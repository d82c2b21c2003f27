//! wgpu render pipeline for the brain mesh.
//!
//! Draws straight to the surface with depth writes on, so the translucent
//! shell occludes whatever is drawn after it.

use super::material::BrainMaterial;
use super::types::BrainVertex;
use crate::gpu::{encode_rgb, uniform_bind_group, DEPTH_FORMAT};
use crate::math::matrix::Mat4;

/// Per-draw uniforms for the mesh: model rotation + material.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BrainUniforms {
    /// Model matrix (column-major), rotation only.
    pub model: [f32; 16],
    /// Diffuse rgb + opacity.
    pub color: [f32; 4],
    /// Emissive rgb (a unused).
    pub emissive: [f32; 4],
    /// Specular rgb + shininess.
    pub specular: [f32; 4],
}

impl BrainUniforms {
    pub fn new(model: Mat4, material: &BrainMaterial, srgb_target: bool) -> Self {
        let [cr, cg, cb] = encode_rgb(material.color, srgb_target);
        let [er, eg, eb] = encode_rgb(material.emissive, srgb_target);
        let [sr, sg, sb] = encode_rgb(material.specular, srgb_target);
        Self {
            model,
            color: [cr, cg, cb, material.opacity],
            emissive: [er, eg, eb, 0.0],
            specular: [sr, sg, sb, material.shininess],
        }
    }
}

pub struct BrainPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    uniforms: BrainUniforms,
}

impl BrainPipeline {
    /// Create the mesh pipeline.
    ///
    /// - `frame_layout`: layout for bind group 0 (shared `FrameUniforms`)
    /// - `vertices`: pre-generated, displaced mesh
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        frame_layout: &wgpu::BindGroupLayout,
        vertices: &[BrainVertex],
        material: &BrainMaterial,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("brain shader"),
            source: wgpu::ShaderSource::Wgsl(
                concat!(
                    include_str!("../shaders/frame.wgsl"),
                    include_str!("../shaders/brain.wgsl")
                )
                .into(),
            ),
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("brain vertex buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniforms = BrainUniforms::new(
            crate::math::matrix::IDENTITY,
            material,
            format.is_srgb(),
        );
        let (uniform_buffer, brain_layout, bind_group) =
            uniform_bind_group(device, "brain uniforms", &uniforms);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("brain pipeline layout"),
            bind_group_layouts: &[frame_layout, &brain_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("brain pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[BrainVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            uniform_buffer,
            bind_group,
            uniforms,
        }
    }

    /// Upload the current model rotation.
    pub fn update_model(&mut self, queue: &wgpu::Queue, model: Mat4) {
        self.uniforms.model = model;
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }

    pub fn render<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        frame_bind_group: &'pass wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, frame_bind_group, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}
