use glam::Vec2;

/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MouseLeft,
    MouseRight,
    MouseMiddle,
}

/// Input delivered by the application shell, in window coordinates
/// (y grows downward, as winit reports it)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ButtonPressed { button: Button, position: Vec2 },
    ButtonReleased { button: Button, position: Vec2 },
    CursorMoved { position: Vec2 },
    /// Scroll offset in lines; `y > 0` scrolls away from the user
    Scroll { offset: Vec2 },
    /// Window lost keyboard/pointer focus
    FocusLost,
    Resized { width: u32, height: u32 },
}

/// Whether a handler acted on an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Consumed,
    Ignored,
}

impl Response {
    pub fn is_consumed(self) -> bool {
        self == Response::Consumed
    }
}

/// Capability injected into the shell: receives every input event in order
pub trait EventHandler {
    fn handle(&mut self, event: &InputEvent) -> Response;
}

/// Controller - reports held button state
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}
