/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// What to do after `get_current_texture` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurfaceRecovery {
    /// Reconfigure the surface and skip this frame.
    Reconfigure,
    /// Skip this frame and try again next time.
    Skip,
    /// Unrecoverable.
    Fail,
}

pub(crate) fn recovery_for(error: &wgpu::SurfaceError) -> SurfaceRecovery {
    match error {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
        wgpu::SurfaceError::Timeout => SurfaceRecovery::Skip,
        _ => SurfaceRecovery::Fail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(recovery_for(&wgpu::SurfaceError::Lost), SurfaceRecovery::Reconfigure);
        assert_eq!(recovery_for(&wgpu::SurfaceError::Outdated), SurfaceRecovery::Reconfigure);
    }

    #[test]
    fn timeout_skips_and_oom_fails() {
        assert_eq!(recovery_for(&wgpu::SurfaceError::Timeout), SurfaceRecovery::Skip);
        assert_eq!(recovery_for(&wgpu::SurfaceError::OutOfMemory), SurfaceRecovery::Fail);
    }
}
