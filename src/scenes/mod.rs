use glam::Mat4;

use crate::camera::{Frustum, LookAt};
use crate::types::{MixerUniform, Vertex};

mod house;
mod pyramid;

pub use house::create_house_scene;
pub use pyramid::create_pyramid_scene;

/// Indexed mesh plus the camera and uniforms it is meant to be viewed with
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: &'static str,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    pub model: Mat4,
    pub mixer: MixerUniform,
    pub look_at: LookAt,
    /// Frustum at aspect 1.0; the viewer replaces the aspect from the window
    pub frustum: Frustum,
}

impl Scene {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SceneKind {
    /// Four coloured walls on a grey base, orbitable
    #[default]
    Pyramid,
    /// Square with a roof, colour-mixed toward blue
    House,
}

impl SceneKind {
    pub fn build(self) -> Scene {
        match self {
            SceneKind::Pyramid => create_pyramid_scene(),
            SceneKind::House => create_house_scene(),
        }
    }
}
