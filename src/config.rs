// config.rs - JSON viewer configuration
use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::path::Path;

use crate::camera::{Frustum, LookAt};
use crate::core::controller::ControllerSettings;
use crate::scenes::Scene;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Orbit Viewer".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Camera override; any field left out keeps the scene's value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub eye: Option<[f32; 3]>,
    pub target: Option<[f32; 3]>,
    pub up: Option<[f32; 3]>,
    pub fov_degrees: Option<f32>,
    pub near: Option<f32>,
    pub far: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub clear_color: [f64; 4],
    pub controller: ControllerSettings,
    pub camera: CameraConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: [0.1, 0.75, 0.75, 1.0],
            controller: ControllerSettings::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse viewer config")
    }

    /// The scene's camera with this config's overrides applied.
    /// Validation is left to [`Camera::new`](crate::camera::Camera::new).
    pub fn camera_for(&self, scene: &Scene) -> (LookAt, Frustum) {
        let c = &self.camera;
        let look_at = LookAt::new(
            c.eye.map(Vec3::from_array).unwrap_or(scene.look_at.eye),
            c.target.map(Vec3::from_array).unwrap_or(scene.look_at.target),
            c.up.map(Vec3::from_array).unwrap_or(scene.look_at.up),
        );

        let mut frustum = scene.frustum;
        if let Some(fov) = c.fov_degrees {
            frustum.fov = fov.to_radians();
        }
        if let Some(near) = c.near {
            frustum.near = near;
        }
        if let Some(far) = c.far {
            frustum.far = far;
        }
        frustum.aspect = self.window.width.max(1) as f32 / self.window.height.max(1) as f32;

        (look_at, frustum)
    }
}
