use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::traits::{Button, Controller, InputEvent};

/// Pixels that count as one scroll line for touchpads reporting pixel deltas
pub const PIXELS_PER_LINE: f32 = 40.0;

/// Adapter that turns Winit window events into [`InputEvent`]s.
///
/// Winit reports button presses without coordinates, so the adapter remembers
/// the last cursor position and stamps it onto button events. Cursor moves are
/// only forwarded while the left button is held.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Currently pressed buttons
    pressed: HashSet<Button>,
    /// Last cursor position (relative to window)
    cursor: Vec2,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a Winit WindowEvent, updating internal state
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_button(*state, *button),
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::MouseWheel { delta, .. } => Some(Self::on_scroll(*delta)),
            WindowEvent::Focused(false) => Some(self.on_focus_lost()),
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }

    pub fn on_mouse_button(&mut self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        let button = Self::mouse_button_to_button(button)?;
        let position = self.cursor;

        match state {
            ElementState::Pressed => {
                // A press while already held means the release was missed; forward
                // it anyway so a drag re-anchors at the current cursor
                self.pressed.insert(button);
                Some(InputEvent::ButtonPressed { button, position })
            }
            ElementState::Released => {
                self.pressed.remove(&button);
                Some(InputEvent::ButtonReleased { button, position })
            }
        }
    }

    /// Record the cursor; hover moves with no drag button held are dropped
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) -> Option<InputEvent> {
        self.cursor = Vec2::new(x, y);
        self.is_down(Button::MouseLeft).then_some(InputEvent::CursorMoved {
            position: self.cursor,
        })
    }

    pub fn on_scroll(delta: MouseScrollDelta) -> InputEvent {
        let offset = match delta {
            MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y),
            MouseScrollDelta::PixelDelta(pos) => {
                Vec2::new(pos.x as f32, pos.y as f32) / PIXELS_PER_LINE
            }
        };
        InputEvent::Scroll { offset }
    }

    /// Releases arriving outside the window are lost, so focus loss forgets held buttons
    pub fn on_focus_lost(&mut self) -> InputEvent {
        self.pressed.clear();
        InputEvent::FocusLost
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            MouseButton::Middle => Some(Button::MouseMiddle),
            _ => None,
        }
    }
}

impl Controller for WinitInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}
