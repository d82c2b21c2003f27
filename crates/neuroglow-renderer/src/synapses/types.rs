//! Connection data and the line vertex format.

/// A pulsing connector between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Particle index of the first endpoint.
    pub start: usize,
    /// Particle index of the second endpoint.
    pub end: usize,
    /// Pulse amplitude multiplier, in `[0.5, 1.0)`.
    pub life: f64,
    /// Pulse angular speed per millisecond, in `[0.01, 0.03)`.
    pub speed: f64,
    /// Whether `end` was forced onto the opposite side of `x = 0`.
    pub cross_hemisphere: bool,
}

/// Fixed world-space endpoints of one connection's line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: [f32; 3],
    pub end: [f32; 3],
}

/// One line endpoint as uploaded to the GPU.
///
/// Layout: position(vec3) + opacity(f32) = 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub opacity: f32,
}

impl LineVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_vertex_is_16_bytes() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 16);
    }
}
