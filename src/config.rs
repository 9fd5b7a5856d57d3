use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Default target frame interval in milliseconds (60fps)
pub const DEFAULT_FRAME_TIME_MS: f64 = 16.67;

/// Construction-time configuration for the animator. Every recognized option
/// has a default; unknown keys in a config file are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimatorConfig {
    /// Minimum wall-clock time between two renders, in milliseconds
    pub frame_time_ms: f64,
    pub camera: CameraSettings,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            frame_time_ms: DEFAULT_FRAME_TIME_MS,
            camera: CameraSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial camera position on the z axis
    pub position_z: f32,
    /// Fixed aspect ratio; when absent the viewport ratio is used
    pub aspect: Option<f32>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position_z: 1.0,
            aspect: None,
        }
    }
}

impl AnimatorConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AnimatorConfig::default();

        assert_eq!(config.frame_time_ms, 16.67);
        assert_eq!(config.camera.fov_degrees, 75.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.camera.far, 1000.0);
        assert_eq!(config.camera.position_z, 1.0);
        assert!(config.camera.aspect.is_none());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: AnimatorConfig =
            serde_json::from_str(r#"{ "frame_time_ms": 33.34 }"#).unwrap();

        assert_eq!(config.frame_time_ms, 33.34);
        assert_eq!(config.camera.fov_degrees, 75.0);
    }

    #[test]
    fn nested_camera_overrides() {
        let config: AnimatorConfig = serde_json::from_str(
            r#"{ "camera": { "fov_degrees": 60.0, "aspect": 1.5 } }"#,
        )
        .unwrap();

        assert_eq!(config.camera.fov_degrees, 60.0);
        assert_eq!(config.camera.aspect, Some(1.5));
        assert_eq!(config.camera.position_z, 1.0);
        assert_eq!(config.frame_time_ms, DEFAULT_FRAME_TIME_MS);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = serde_json::from_str::<AnimatorConfig>(r#"{ "frame_budget": 10 }"#);
        assert!(result.is_err());
    }
}
