use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use orbit_viewer::app::App;
use orbit_viewer::cli::Cli;
use orbit_viewer::config::ViewerConfig;
use orbit_viewer::logging::init_logging;
use orbit_viewer::Viewer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());

    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    let scene = cli.scene.build();
    log::info!("Scene: {}", scene.name);

    let viewer = Viewer::for_scene(&scene, &config).context("Invalid camera configuration")?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, scene, viewer);

    log::info!("Controls: drag with left mouse button to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
