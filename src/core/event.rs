//! Input payloads and host events.
//!
//! The host translates whatever windowing or input layer it uses into
//! these types and hands them to the machine. All of them serialize, so a
//! recorded session can be replayed against a machine in tests.

use serde::{Deserialize, Serialize};

/// A key code as delivered by the host.
///
/// The machine does not interpret key codes; printable keys are usually
/// their character value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key(pub i32);

impl Key {
    pub fn from_char(c: char) -> Self {
        Key(c as i32)
    }

    /// The key as a character, if it maps to one.
    pub fn as_char(&self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::from_char(c)
    }
}

/// Mouse button reported with press, release and drag events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// A single touch point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    /// Identifier of the finger, stable between down and up.
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Category a host event belongs to. Subscriptions are per category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Frame update and draw.
    App,
    Key,
    Mouse,
    Touch,
}

/// An event delivered by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    Update,
    Draw,
    KeyPressed { key: Key },
    KeyReleased { key: Key },
    MousePressed { x: f32, y: f32, button: MouseButton },
    MouseReleased { x: f32, y: f32, button: MouseButton },
    MouseMoved { x: f32, y: f32 },
    MouseDragged { x: f32, y: f32, button: MouseButton },
    TouchDown { touch: Touch },
    TouchUp { touch: Touch },
    TouchMoved { touch: Touch },
    TouchCancelled { touch: Touch },
    TouchDoubleTap { touch: Touch },
}

impl HostEvent {
    pub fn category(&self) -> EventCategory {
        match self {
            Self::Update | Self::Draw => EventCategory::App,
            Self::KeyPressed { .. } | Self::KeyReleased { .. } => EventCategory::Key,
            Self::MousePressed { .. }
            | Self::MouseReleased { .. }
            | Self::MouseMoved { .. }
            | Self::MouseDragged { .. } => EventCategory::Mouse,
            Self::TouchDown { .. }
            | Self::TouchUp { .. }
            | Self::TouchMoved { .. }
            | Self::TouchCancelled { .. }
            | Self::TouchDoubleTap { .. } => EventCategory::Touch,
        }
    }

    /// Short label used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Draw => "draw",
            Self::KeyPressed { .. } => "key_pressed",
            Self::KeyReleased { .. } => "key_released",
            Self::MousePressed { .. } => "mouse_pressed",
            Self::MouseReleased { .. } => "mouse_released",
            Self::MouseMoved { .. } => "mouse_moved",
            Self::MouseDragged { .. } => "mouse_dragged",
            Self::TouchDown { .. } => "touch_down",
            Self::TouchUp { .. } => "touch_up",
            Self::TouchMoved { .. } => "touch_moved",
            Self::TouchCancelled { .. } => "touch_cancelled",
            Self::TouchDoubleTap { .. } => "touch_double_tap",
        }
    }
}
