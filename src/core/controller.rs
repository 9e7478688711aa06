use glam::Vec2;
use serde::Deserialize;

use crate::camera::Camera;

/// Tuning for the drag/scroll mapping
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerSettings {
    /// Orbit angle per pixel of drag (radians)
    pub orbit_sensitivity: f32,
    /// Zoom delta per scroll line
    pub zoom_scale: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.01,
            zoom_scale: 0.05,
        }
    }
}

/// Drag state; the cursor anchor only exists while dragging
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last_cursor: Vec2 },
}

/// Maps left-button drags to orbits and scrolls to zoom.
///
/// The controller never owns the camera; each mutating call borrows it.
/// Sign convention, with window y growing downward: dragging right decreases
/// azimuth so the scene follows the pointer, dragging up decreases elevation so
/// the eye drops and the view tilts upward.
#[derive(Debug, Clone, Default)]
pub struct CameraController {
    settings: ControllerSettings,
    drag: DragState,
}

impl CameraController {
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            settings,
            drag: DragState::Idle,
        }
    }

    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    pub fn state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn last_cursor(&self) -> Option<Vec2> {
        match self.drag {
            DragState::Dragging { last_cursor } => Some(last_cursor),
            DragState::Idle => None,
        }
    }

    /// Start (or re-anchor) a drag at `position`
    pub fn lmb_pressed(&mut self, position: Vec2) {
        if !position.is_finite() {
            return;
        }
        self.drag = DragState::Dragging {
            last_cursor: position,
        };
    }

    pub fn lmb_released(&mut self, _position: Vec2) {
        self.drag = DragState::Idle;
    }

    /// Treated as an implicit release so a drag cannot outlive the window focus
    pub fn focus_lost(&mut self) {
        if self.is_dragging() {
            log::debug!("focus lost during drag, releasing");
        }
        self.drag = DragState::Idle;
    }

    /// Orbit by the pointer delta while dragging; ignored when idle
    pub fn mouse_moved(&mut self, camera: &mut Camera, position: Vec2) {
        let DragState::Dragging { last_cursor } = self.drag else {
            return;
        };
        if !position.is_finite() {
            return;
        }

        let delta = position - last_cursor;
        let s = self.settings.orbit_sensitivity;
        camera.orbit(-delta.x * s, delta.y * s);

        self.drag = DragState::Dragging {
            last_cursor: position,
        };
    }

    /// Zoom by `delta` scroll lines, in any drag state
    pub fn scroll(&mut self, camera: &mut Camera, delta: f32) {
        camera.zoom(delta * self.settings.zoom_scale);
    }
}
