//! Host event subscription.
//!
//! The host owns its event loop and hands each event to
//! [`StateMachine::handle_event`]. Which categories the machine reacts to
//! is controlled per category; calling the dispatch methods directly
//! bypasses the mask.

use super::StateMachine;
use crate::core::{EventCategory, HostEvent};
use crate::error::MachineError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Which input devices a host provides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputProfile {
    /// Keyboard and mouse.
    #[default]
    Desktop,
    /// Touch screen only.
    Touch,
}

/// Set of event categories the machine is subscribed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMask {
    pub app: bool,
    pub key: bool,
    pub mouse: bool,
    pub touch: bool,
}

impl EventMask {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            app: true,
            key: true,
            mouse: true,
            touch: true,
        }
    }

    /// App events plus the input categories of `profile`.
    pub fn for_profile(profile: InputProfile) -> Self {
        match profile {
            InputProfile::Desktop => Self {
                app: true,
                key: true,
                mouse: true,
                touch: false,
            },
            InputProfile::Touch => Self {
                app: true,
                key: false,
                mouse: false,
                touch: true,
            },
        }
    }

    pub fn contains(&self, category: EventCategory) -> bool {
        match category {
            EventCategory::App => self.app,
            EventCategory::Key => self.key,
            EventCategory::Mouse => self.mouse,
            EventCategory::Touch => self.touch,
        }
    }

    pub fn set(&mut self, category: EventCategory, enabled: bool) {
        let flag = match category {
            EventCategory::App => &mut self.app,
            EventCategory::Key => &mut self.key,
            EventCategory::Mouse => &mut self.mouse,
            EventCategory::Touch => &mut self.touch,
        };
        *flag = enabled;
    }
}

impl<D> StateMachine<D> {
    /// Subscribe to app events and the input events of `profile`.
    pub fn enable_events(&mut self, profile: InputProfile) {
        self.events = EventMask::for_profile(profile);
        debug!(?profile, "enabled host events");
    }

    pub fn disable_events(&mut self) {
        self.events = EventMask::none();
        debug!("disabled host events");
    }

    pub fn subscribe(&mut self, category: EventCategory) {
        self.events.set(category, true);
    }

    pub fn unsubscribe(&mut self, category: EventCategory) {
        self.events.set(category, false);
    }

    pub fn event_mask(&self) -> EventMask {
        self.events
    }

    /// Route a host event to the matching dispatch method.
    ///
    /// Returns `Ok(false)` for events of unsubscribed categories and for
    /// input events arriving with no current state. Frame events with no
    /// current state return [`MachineError::NoCurrentState`], as
    /// [`update`](Self::update) and [`draw`](Self::draw) do.
    pub fn handle_event(&mut self, event: &HostEvent) -> Result<bool, MachineError> {
        if !self.events.contains(event.category()) {
            trace!(event = event.label(), "ignoring unsubscribed event");
            return Ok(false);
        }

        match event {
            HostEvent::Update => self.update().map(|()| true),
            HostEvent::Draw => self.draw().map(|()| true),
            HostEvent::KeyPressed { key } => self.key_pressed(*key),
            HostEvent::KeyReleased { key } => self.key_released(*key),
            HostEvent::MousePressed { x, y, button } => self.mouse_pressed(*x, *y, *button),
            HostEvent::MouseReleased { x, y, button } => self.mouse_released(*x, *y, *button),
            HostEvent::MouseMoved { x, y } => self.mouse_moved(*x, *y),
            HostEvent::MouseDragged { x, y, button } => self.mouse_dragged(*x, *y, *button),
            HostEvent::TouchDown { touch } => self.touch_down(touch),
            HostEvent::TouchUp { touch } => self.touch_up(touch),
            HostEvent::TouchMoved { touch } => self.touch_moved(touch),
            HostEvent::TouchCancelled { touch } => self.touch_cancelled(touch),
            HostEvent::TouchDoubleTap { touch } => self.touch_double_tap(touch),
        }
    }
}
