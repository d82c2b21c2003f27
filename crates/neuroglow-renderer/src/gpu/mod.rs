mod binding;
mod context;
mod types;
mod uniforms;

pub use binding::*;
pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_disposed_display() {
        assert_eq!(
            RendererError::Disposed.to_string(),
            "renderer resources were already released"
        );
    }

    #[test]
    fn physical_size_copy_and_eq() {
        let a = PhysicalSize {
            width: 800,
            height: 600,
        };
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn additive_blending_adds_onto_destination() {
        assert_eq!(ADDITIVE_BLENDING.color.dst_factor, wgpu::BlendFactor::One);
        assert_eq!(ADDITIVE_BLENDING.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(ADDITIVE_BLENDING.color.operation, wgpu::BlendOperation::Add);
    }

    #[test]
    fn read_only_depth_never_writes() {
        let depth = depth_read_only();
        assert!(!depth.depth_write_enabled);
        assert_eq!(depth.format, DEPTH_FORMAT);
    }

    #[test]
    fn empty_vertex_contents_are_padded() {
        let empty: [[f32; 4]; 0] = [];
        assert_eq!(vertex_contents(&empty).len(), 16);
        assert!(vertex_contents(&empty).iter().all(|b| *b == 0));
    }

    #[test]
    fn vertex_contents_borrow_non_empty_slices() {
        let items = [[1.0f32; 4], [2.0; 4]];
        let contents = vertex_contents(&items);
        assert!(matches!(contents, std::borrow::Cow::Borrowed(_)));
        assert_eq!(contents.len(), 32);
    }

    #[test]
    fn physical_size_clamps_to_one() {
        assert_eq!(
            PhysicalSize::new(0, 0),
            PhysicalSize {
                width: 1,
                height: 1
            }
        );
    }
}
