//! Instanced sprite pipeline for the particle cloud.
//!
//! WebGPU has no point size, so each particle is a screen-aligned quad
//! expanded in the vertex shader from the instance position.

use super::types::{ParticleInstance, SPRITE_VERTICES};
use crate::gpu::{
    depth_read_only, encode_color, uniform_bind_group, vertex_contents, ADDITIVE_BLENDING,
};
use crate::math::matrix::{Mat4, IDENTITY};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CloudUniforms {
    /// Cloud rotation (column-major).
    pub model: [f32; 16],
}

pub struct ParticlePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub instance_buffer: wgpu::Buffer,
    pub instance_count: u32,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl ParticlePipeline {
    /// Create the sprite pipeline and upload the (immutable) instances.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        frame_layout: &wgpu::BindGroupLayout,
        instances: &[ParticleInstance],
    ) -> Self {
        use wgpu::util::DeviceExt;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle shader"),
            source: wgpu::ShaderSource::Wgsl(
                concat!(
                    include_str!("../shaders/frame.wgsl"),
                    include_str!("../shaders/particles.wgsl")
                )
                .into(),
            ),
        });

        let srgb_target = format.is_srgb();
        let encoded: Vec<ParticleInstance> = instances
            .iter()
            .map(|i| ParticleInstance {
                color: encode_color(i.color, srgb_target),
                ..*i
            })
            .collect();

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle instances"),
            contents: &vertex_contents(&encoded),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let (uniform_buffer, cloud_layout, bind_group) =
            uniform_bind_group(device, "cloud uniforms", &CloudUniforms { model: IDENTITY });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle pipeline layout"),
            bind_group_layouts: &[frame_layout, &cloud_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[ParticleInstance::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_read_only()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            instance_buffer,
            instance_count: instances.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    /// Upload the current cloud rotation.
    pub fn update_model(&self, queue: &wgpu::Queue, model: Mat4) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&CloudUniforms { model }),
        );
    }

    pub fn render<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        frame_bind_group: &'pass wgpu::BindGroup,
    ) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, frame_bind_group, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..SPRITE_VERTICES, 0..self.instance_count);
    }
}
