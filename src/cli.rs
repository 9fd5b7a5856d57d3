// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::animations::SceneKind;
use crate::config::AnimatorConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "line-animator")]
#[command(about = "Procedural polyline animator", long_about = None)]
pub struct Cli {
    /// Scene to animate
    #[arg(long, value_enum, default_value = "wave")]
    pub scene: SceneArg,

    /// Target frame interval in milliseconds (overrides the config file)
    #[arg(long)]
    pub frame_time: Option<f64>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run without a window for the given number of ticks
    #[arg(long, value_name = "TICKS")]
    pub headless: Option<u64>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneArg {
    /// Sampled sine/cosine curve
    Wave,
    /// Randomly perturbed 3D chain
    Chain,
}

impl SceneArg {
    pub fn kind(self) -> SceneKind {
        match self {
            SceneArg::Wave => SceneKind::Wave,
            SceneArg::Chain => SceneKind::Chain,
        }
    }
}

impl Cli {
    /// Resolve the effective configuration: config file first, flags override
    pub fn resolve_config(&self) -> anyhow::Result<AnimatorConfig> {
        let mut config = match &self.config {
            Some(path) => AnimatorConfig::load(path)?,
            None => AnimatorConfig::default(),
        };

        if let Some(frame_time) = self.frame_time {
            config.frame_time_ms = frame_time;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["line-animator"]);

        assert_eq!(cli.scene, SceneArg::Wave);
        assert_eq!(cli.width, 800);
        assert_eq!(cli.height, 600);
        assert!(cli.headless.is_none());
    }

    #[test]
    fn frame_time_flag_overrides_config() {
        let cli = Cli::parse_from(["line-animator", "--frame-time", "33.34"]);

        let config = cli.resolve_config().unwrap();

        assert_eq!(config.frame_time_ms, 33.34);
    }

    #[test]
    fn scene_arg_maps_to_kind() {
        let cli = Cli::parse_from(["line-animator", "--scene", "chain"]);

        assert_eq!(cli.scene.kind(), SceneKind::Chain);
    }
}
