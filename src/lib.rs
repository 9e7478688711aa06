pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod renderer;
pub mod scenes;
pub mod traits;
pub mod types;

pub use camera::{Camera, Frustum, LookAt};
pub use crate::core::controller::{CameraController, ControllerSettings, DragState};
pub use crate::core::viewer::Viewer;
pub use error::CameraError;
