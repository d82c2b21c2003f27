//! Brain mesh vertex type and buffer layout.

/// A single vertex of the brain mesh.
///
/// Layout: position(vec3) + normal(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl BrainVertex {
    /// wgpu vertex buffer layout for `BrainVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<BrainVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
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
    fn brain_vertex_size_is_24_bytes() {
        assert_eq!(std::mem::size_of::<BrainVertex>(), 24);
    }

    #[test]
    fn bytemuck_cast_works() {
        let v = BrainVertex {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 1.0, 0.0],
        };
        assert_eq!(bytemuck::bytes_of(&v).len(), 24);
    }
}
