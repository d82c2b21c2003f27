//! Line-list pipeline for the connectors.
//!
//! Endpoints never move (the line group is not rotated) but every line's
//! opacity changes each frame, so the whole vertex stream is rewritten
//! per frame.

use neuroglow_common::Color;

use super::connections::line_vertices;
use super::types::{LineSegment, LineVertex};
use crate::gpu::{
    depth_read_only, encode_rgb, uniform_bind_group, vertex_contents, ADDITIVE_BLENDING,
};

/// Base color shared by every connector line.
pub const LINE_COLOR: Color = Color {
    r: 0xcc,
    g: 0x66,
    b: 0xff,
    a: 0xff,
};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniforms {
    /// Base rgb (a unused; alpha comes per vertex).
    pub color: [f32; 4],
}

pub struct SynapsePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    segments: Vec<LineSegment>,
    scratch: Vec<LineVertex>,
}

impl SynapsePipeline {
    /// Create the line pipeline with `segments` fixed for its lifetime.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        frame_layout: &wgpu::BindGroupLayout,
        segments: &[LineSegment],
        initial_opacity: &[f32],
    ) -> Self {
        use wgpu::util::DeviceExt;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("synapse shader"),
            source: wgpu::ShaderSource::Wgsl(
                concat!(
                    include_str!("../shaders/frame.wgsl"),
                    include_str!("../shaders/synapses.wgsl")
                )
                .into(),
            ),
        });

        let mut scratch = Vec::with_capacity(segments.len() * 2);
        line_vertices(segments, initial_opacity, &mut scratch);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("synapse vertices"),
            contents: &vertex_contents(&scratch),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let [r, g, b] = encode_rgb(LINE_COLOR, format.is_srgb());
        let (uniform_buffer, lines_layout, bind_group) = uniform_bind_group(
            device,
            "synapse uniforms",
            &LineUniforms {
                color: [r, g, b, 1.0],
            },
        );

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("synapse pipeline layout"),
            bind_group_layouts: &[frame_layout, &lines_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("synapse pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[LineVertex::LAYOUT],
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
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(depth_read_only()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_count: scratch.len() as u32,
            uniform_buffer,
            bind_group,
            segments: segments.to_vec(),
            scratch,
        }
    }

    /// Rewrite the vertex stream with this frame's opacities.
    pub fn update_opacity(&mut self, queue: &wgpu::Queue, opacity: &[f32]) {
        if self.segments.is_empty() {
            return;
        }
        line_vertices(&self.segments, opacity, &mut self.scratch);
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.scratch));
    }

    pub fn render<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        frame_bind_group: &'pass wgpu::BindGroup,
    ) {
        if self.vertex_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, frame_bind_group, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_color_matches_hex() {
        assert_eq!(LINE_COLOR.to_hex(), "#cc66ff");
    }

    #[test]
    fn line_uniforms_are_16_bytes() {
        assert_eq!(std::mem::size_of::<LineUniforms>(), 16);
    }
}
