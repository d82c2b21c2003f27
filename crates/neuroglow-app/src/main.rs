mod app_state;
mod cli;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use neuroglow_config::NeuroglowConfig;

const DEFAULT_LOG_DIRECTIVE: &str = "neuroglow=info";

fn main() {
    let args = cli::parse();

    // Load before logging so the config can choose the log level; any
    // failure is reported once the subscriber is up.
    let loaded = neuroglow_config::load_config(args.config.as_deref());

    let log_directive = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    init_logging(&log_directive);

    tracing::info!("Neuroglow v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        NeuroglowConfig::default()
    });
    if let Some(seed) = args.seed {
        config.scene.seed = Some(seed);
    }
    tracing::info!(
        "Config loaded ({} particles, {} connections, {} fps)",
        config.scene.particle_count,
        config.scene.connection_count,
        config.animation.target_fps,
    );
    tracing::debug!("Effective config: {}", neuroglow_config::config_to_json(&config));

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::NeuroglowApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");

    if app.failed() {
        std::process::exit(1);
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("Invalid log directive {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}
