use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures while attaching the background to its host surface.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("mount element not found: #{0}")]
    ElementNotFound(String),

    #[error("host environment unavailable: {0}")]
    HostUnavailable(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NeuroglowError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mount(#[from] MountError),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("scene.particle_count = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: scene.particle_count = 0"
        );
    }

    #[test]
    fn mount_error_display() {
        let err = MountError::ElementNotFound("brain-bg".into());
        assert_eq!(err.to_string(), "mount element not found: #brain-bg");

        let err = MountError::HostUnavailable("no document".into());
        assert_eq!(err.to_string(), "host environment unavailable: no document");
    }

    #[test]
    fn neuroglow_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: NeuroglowError = config_err.into();
        assert!(matches!(err, NeuroglowError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn neuroglow_error_from_mount() {
        let err: NeuroglowError = MountError::ElementNotFound("brain-bg".into()).into();
        assert!(matches!(err, NeuroglowError::Mount(_)));
        assert!(err.to_string().contains("brain-bg"));
    }

    #[test]
    fn neuroglow_error_other_variants() {
        let err = NeuroglowError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = NeuroglowError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
