// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-viewer")]
#[command(about = "Orbit camera viewer: drag to orbit, scroll to zoom", long_about = None)]
pub struct Cli {
    /// Scene to display
    #[arg(long, value_enum, default_value_t = SceneKind::Pyramid)]
    pub scene: SceneKind,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter in env_logger syntax; overrides RUST_LOG
    #[arg(long = "log-filter")]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["orbit-viewer"]).unwrap();
        assert_eq!(cli.scene, SceneKind::Pyramid);
        assert!(cli.config.is_none());
        assert!(cli.log_filter.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "orbit-viewer",
            "--scene",
            "house",
            "--config",
            "viewer.json",
            "--log-filter",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.scene, SceneKind::House);
        assert_eq!(cli.config, Some(PathBuf::from("viewer.json")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_scene_rejected() {
        assert!(Cli::try_parse_from(["orbit-viewer", "--scene", "teapot"]).is_err());
    }
}
