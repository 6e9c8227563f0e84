//! Body pose demo with joint angles and flag-semaphore letters.

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use pose_semaphore::{
    app::{DemoApp, ExitReason},
    cli::Args,
    config::Config,
    renderer::SkeletonRenderer,
    tracker::ReplayTracker,
};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration if provided
    let (mut config, load_error) = match &args.config {
        Some(config_path) => match Config::from_file(config_path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Config::default(), Some(e)),
        },
        None => (Config::default(), None),
    };
    args.apply(&mut config)?;

    // Initialize logger once `trace` is known from both sources
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.log_level()));

    info!("Pose Semaphore Demo v{}", env!("CARGO_PKG_VERSION"));
    if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
    }
    if let Some(e) = load_error {
        warn!("Failed to load config file: {}. Using defaults.", e);
    }
    config.validate()?;

    let tracker = ReplayTracker::new(config.tracker)?;
    let renderer_config = config.renderer;
    let app = DemoApp::start(
        tracker,
        |tracker| SkeletonRenderer::new(tracker, renderer_config),
        config.display,
    )?;

    let summary = app.run()?;
    match summary.exit_reason {
        ExitReason::EndOfInput => info!("Input exhausted"),
        ExitReason::KeyPressed(key) => info!("Stopped by key {key}"),
    }
    info!("{} frames processed, {} with a body", summary.frames, summary.bodies);

    Ok(())
}
