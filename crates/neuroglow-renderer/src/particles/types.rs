/// One generated neuron particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: [f32; 3],
    /// sRGB color from the purple-blue band.
    pub color: [f32; 3],
    /// World-space sprite size before perspective scaling.
    pub size: f32,
    /// Radius the position was sampled at, before the x-axis bias.
    pub radius: f32,
}

/// Per-instance data for one particle sprite.
///
/// Layout: position(vec3) + size(f32) + color(vec3) = 28 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
}

impl ParticleInstance {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // position: vec3<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // size: f32
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 1,
            },
            // color: vec3<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 16,
                shader_location: 2,
            },
        ],
    };
}

/// Vertices drawn per sprite: two triangles.
pub const SPRITE_VERTICES: u32 = 6;
