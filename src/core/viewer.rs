use glam::Mat4;

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::core::controller::{CameraController, ControllerSettings};
use crate::error::CameraError;
use crate::scenes::Scene;
use crate::traits::{Button, EventHandler, InputEvent, Response};
use crate::types::{MixerUniform, TransformUniform};

/// Per-application owner of the camera, its controller and the model transform
#[derive(Debug, Clone)]
pub struct Viewer {
    camera: Camera,
    controller: CameraController,
    model: Mat4,
    mixer: MixerUniform,
}

impl Viewer {
    pub fn new(camera: Camera, settings: ControllerSettings) -> Self {
        Self {
            camera,
            controller: CameraController::new(settings),
            model: Mat4::IDENTITY,
            mixer: MixerUniform::disabled(),
        }
    }

    /// Build the viewer for `scene`, with `config` overrides applied
    pub fn for_scene(scene: &Scene, config: &ViewerConfig) -> Result<Self, CameraError> {
        let (look_at, frustum) = config.camera_for(scene);
        let camera = Camera::new(look_at, frustum)?;

        Ok(Self {
            model: scene.model,
            mixer: scene.mixer,
            ..Self::new(camera, config.controller)
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }

    pub fn mixer(&self) -> MixerUniform {
        self.mixer
    }

    pub fn pvm(&self) -> Mat4 {
        self.camera.view_projection() * self.model
    }

    pub fn transform_uniform(&self) -> TransformUniform {
        TransformUniform::new(self.pvm())
    }

    fn resize(&mut self, width: u32, height: u32) -> Response {
        if width == 0 || height == 0 {
            // Minimized; keep the last usable aspect
            return Response::Ignored;
        }
        match self.camera.set_aspect(width as f32 / height as f32) {
            Ok(()) => Response::Consumed,
            Err(e) => {
                log::warn!("Ignoring resize to {width}x{height}: {e}");
                Response::Ignored
            }
        }
    }
}

impl EventHandler for Viewer {
    fn handle(&mut self, event: &InputEvent) -> Response {
        match *event {
            InputEvent::ButtonPressed {
                button: Button::MouseLeft,
                position,
            } => {
                self.controller.lmb_pressed(position);
                Response::Consumed
            }
            InputEvent::ButtonReleased {
                button: Button::MouseLeft,
                position,
            } => {
                self.controller.lmb_released(position);
                Response::Consumed
            }
            InputEvent::ButtonPressed { .. } | InputEvent::ButtonReleased { .. } => {
                Response::Ignored
            }
            InputEvent::CursorMoved { position } => {
                if !self.controller.is_dragging() {
                    return Response::Ignored;
                }
                self.controller.mouse_moved(&mut self.camera, position);
                Response::Consumed
            }
            InputEvent::Scroll { offset } => {
                self.controller.scroll(&mut self.camera, offset.y);
                Response::Consumed
            }
            InputEvent::FocusLost => {
                self.controller.focus_lost();
                Response::Consumed
            }
            InputEvent::Resized { width, height } => self.resize(width, height),
        }
    }
}
