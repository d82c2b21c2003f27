//! Shared per-frame bind group (group 0) and pipeline state constants.

use std::borrow::Cow;

use super::uniforms::FrameUniforms;

/// `src·α + dst`, the blending used by the glowing sprites and lines.
pub const ADDITIVE_BLENDING: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Depth state for passes that test against the mesh but never occlude.
pub fn depth_read_only() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: super::DEPTH_FORMAT,
        depth_write_enabled: false,
        depth_compare: wgpu::CompareFunction::LessEqual,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Uniform buffer, layout, and bind group for [`FrameUniforms`].
pub struct FrameBinding {
    pub buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl FrameBinding {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layout = uniform_layout::<FrameUniforms>(device, "frame bind group layout");

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

/// Single-entry uniform layout visible to both stages, sized for `T`.
pub fn uniform_layout<T>(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64),
            },
            count: None,
        }],
    })
}

/// Create a uniform buffer holding `contents` plus its group-1 bind group.
pub fn uniform_bind_group<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    contents: &T,
) -> (wgpu::Buffer, wgpu::BindGroupLayout, wgpu::BindGroup) {
    use wgpu::util::DeviceExt;

    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::bytes_of(contents),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let layout = uniform_layout::<T>(device, label);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: &layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    (buffer, layout, bind_group)
}

/// Vertex buffer contents for `items`. wgpu rejects zero-sized vertex
/// buffers, so an empty slice becomes one zeroed element.
pub fn vertex_contents<T: bytemuck::Pod>(items: &[T]) -> Cow<'_, [u8]> {
    if items.is_empty() {
        Cow::Owned(vec![0u8; std::mem::size_of::<T>()])
    } else {
        Cow::Borrowed(bytemuck::cast_slice(items))
    }
}
