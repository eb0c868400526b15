//! Dispatch router: forwards frame and input events to the current state.
//!
//! Frame events (`update`, `draw`) without a current state log a warning
//! and return [`MachineError::NoCurrentState`]. Input events without a
//! current state are dropped silently and return `Ok(false)`.

use super::StateMachine;
use crate::core::{Context, Key, MouseButton, State, Touch};
use crate::error::MachineError;
use tracing::warn;

impl<D> StateMachine<D> {
    pub fn update(&mut self) -> Result<(), MachineError> {
        self.dispatch_frame("update", |state, ctx| state.update(ctx))
    }

    pub fn draw(&mut self) -> Result<(), MachineError> {
        self.dispatch_frame("draw", |state, ctx| state.draw(ctx))
    }

    /// Returns whether a state received the event.
    ///
    /// Input methods process queued transition requests after the hook
    /// returns. If one of those fails, its error is returned even though
    /// the event was delivered.
    pub fn key_pressed(&mut self, key: Key) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.key_pressed(ctx, key))
    }

    pub fn key_released(&mut self, key: Key) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.key_released(ctx, key))
    }

    pub fn mouse_pressed(
        &mut self,
        x: f32,
        y: f32,
        button: MouseButton,
    ) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.mouse_pressed(ctx, x, y, button))
    }

    pub fn mouse_released(
        &mut self,
        x: f32,
        y: f32,
        button: MouseButton,
    ) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.mouse_released(ctx, x, y, button))
    }

    pub fn mouse_moved(&mut self, x: f32, y: f32) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.mouse_moved(ctx, x, y))
    }

    pub fn mouse_dragged(
        &mut self,
        x: f32,
        y: f32,
        button: MouseButton,
    ) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.mouse_dragged(ctx, x, y, button))
    }

    pub fn touch_down(&mut self, touch: &Touch) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.touch_down(ctx, touch))
    }

    pub fn touch_up(&mut self, touch: &Touch) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.touch_up(ctx, touch))
    }

    pub fn touch_moved(&mut self, touch: &Touch) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.touch_moved(ctx, touch))
    }

    pub fn touch_cancelled(&mut self, touch: &Touch) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.touch_cancelled(ctx, touch))
    }

    pub fn touch_double_tap(&mut self, touch: &Touch) -> Result<bool, MachineError> {
        self.dispatch_input(|state, ctx| state.touch_double_tap(ctx, touch))
    }

    fn dispatch_frame<F>(&mut self, operation: &'static str, hook: F) -> Result<(), MachineError>
    where
        F: FnOnce(&mut dyn State<D>, &mut Context<'_, D>),
    {
        if !self.with_current(hook) {
            warn!("State machine {operation} called with no state set");
            return Err(MachineError::NoCurrentState { operation });
        }
        self.process_requests()
    }

    fn dispatch_input<F>(&mut self, hook: F) -> Result<bool, MachineError>
    where
        F: FnOnce(&mut dyn State<D>, &mut Context<'_, D>),
    {
        if !self.with_current(hook) {
            return Ok(false);
        }
        self.process_requests()?;
        Ok(true)
    }

    /// Run `hook` on the current state. Returns false if there is none.
    fn with_current<F>(&mut self, hook: F) -> bool
    where
        F: FnOnce(&mut dyn State<D>, &mut Context<'_, D>),
    {
        let Some(slot) = self.current else {
            return false;
        };
        let state = self.registry.state_mut(slot);
        let current = Some(self.current_name.as_str());
        let mut ctx = Context::new(&mut self.shared, &mut self.pending, current);
        hook(state, &mut ctx);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Appends every hook it sees to the shared log, prefixed by its name.
    struct Probe(&'static str);

    impl Probe {
        fn log(&self, ctx: &mut Context<'_, Vec<String>>, what: String) {
            ctx.shared_mut().push(format!("{} {}", self.0, what));
        }
    }

    impl State<Vec<String>> for Probe {
        fn name(&self) -> &str {
            self.0
        }

        fn update(&mut self, ctx: &mut Context<'_, Vec<String>>) {
            self.log(ctx, "update".to_string());
        }

        fn draw(&mut self, ctx: &mut Context<'_, Vec<String>>) {
            self.log(ctx, "draw".to_string());
        }

        fn key_pressed(&mut self, ctx: &mut Context<'_, Vec<String>>, key: Key) {
            self.log(ctx, format!("key_pressed {}", key.0));
            if key == Key::from('n') {
                ctx.change_state("other");
            } else if key == Key::from('x') {
                ctx.change_state("missing");
            }
        }

        fn key_released(&mut self, ctx: &mut Context<'_, Vec<String>>, key: Key) {
            self.log(ctx, format!("key_released {}", key.0));
        }

        fn mouse_pressed(
            &mut self,
            ctx: &mut Context<'_, Vec<String>>,
            x: f32,
            y: f32,
            button: MouseButton,
        ) {
            self.log(ctx, format!("mouse_pressed {x} {y} {button:?}"));
        }

        fn mouse_released(
            &mut self,
            ctx: &mut Context<'_, Vec<String>>,
            x: f32,
            y: f32,
            button: MouseButton,
        ) {
            self.log(ctx, format!("mouse_released {x} {y} {button:?}"));
        }

        fn mouse_moved(&mut self, ctx: &mut Context<'_, Vec<String>>, x: f32, y: f32) {
            self.log(ctx, format!("mouse_moved {x} {y}"));
        }

        fn mouse_dragged(
            &mut self,
            ctx: &mut Context<'_, Vec<String>>,
            x: f32,
            y: f32,
            button: MouseButton,
        ) {
            self.log(ctx, format!("mouse_dragged {x} {y} {button:?}"));
        }

        fn touch_down(&mut self, ctx: &mut Context<'_, Vec<String>>, touch: &Touch) {
            self.log(ctx, format!("touch_down {}", touch.id));
        }

        fn touch_up(&mut self, ctx: &mut Context<'_, Vec<String>>, touch: &Touch) {
            self.log(ctx, format!("touch_up {}", touch.id));
        }

        fn touch_moved(&mut self, ctx: &mut Context<'_, Vec<String>>, touch: &Touch) {
            self.log(ctx, format!("touch_moved {}", touch.id));
        }

        fn touch_cancelled(&mut self, ctx: &mut Context<'_, Vec<String>>, touch: &Touch) {
            self.log(ctx, format!("touch_cancelled {}", touch.id));
        }

        fn touch_double_tap(&mut self, ctx: &mut Context<'_, Vec<String>>, touch: &Touch) {
            self.log(ctx, format!("touch_double_tap {}", touch.id));
        }
    }

    fn machine() -> StateMachine<Vec<String>> {
        let mut machine = StateMachine::new(Vec::new());
        machine.add_state(Probe("main")).unwrap();
        machine.add_state(Probe("other")).unwrap();
        machine
    }

    #[test]
    fn frame_events_without_state_are_errors() {
        let mut machine = machine();

        assert_eq!(
            machine.update(),
            Err(MachineError::NoCurrentState { operation: "update" })
        );
        assert_eq!(
            machine.draw(),
            Err(MachineError::NoCurrentState { operation: "draw" })
        );
        assert!(machine.shared_data().is_empty());
    }

    #[test]
    fn input_events_without_state_are_ignored() {
        let mut machine = machine();
        let touch = Touch {
            id: 1,
            x: 0.0,
            y: 0.0,
        };

        assert_eq!(machine.key_pressed(Key(32)), Ok(false));
        assert_eq!(machine.mouse_moved(1.0, 2.0), Ok(false));
        assert_eq!(machine.touch_double_tap(&touch), Ok(false));
        assert!(machine.shared_data().is_empty());
    }

    #[test]
    fn every_event_reaches_only_the_current_state() {
        let mut machine = machine();
        machine.change_state("main").unwrap();
        let touch = Touch {
            id: 7,
            x: 3.0,
            y: 4.0,
        };

        machine.update().unwrap();
        machine.draw().unwrap();
        assert_eq!(machine.key_pressed(Key(97)), Ok(true));
        machine.key_released(Key(97)).unwrap();
        machine.mouse_pressed(1.0, 2.0, MouseButton::Left).unwrap();
        machine.mouse_released(1.0, 2.0, MouseButton::Right).unwrap();
        machine.mouse_moved(5.0, 6.0).unwrap();
        machine
            .mouse_dragged(7.0, 8.0, MouseButton::Other(4))
            .unwrap();
        machine.touch_down(&touch).unwrap();
        machine.touch_moved(&touch).unwrap();
        machine.touch_up(&touch).unwrap();
        machine.touch_cancelled(&touch).unwrap();
        machine.touch_double_tap(&touch).unwrap();

        assert_eq!(
            machine.shared_data(),
            &[
                "main update",
                "main draw",
                "main key_pressed 97",
                "main key_released 97",
                "main mouse_pressed 1 2 Left",
                "main mouse_released 1 2 Right",
                "main mouse_moved 5 6",
                "main mouse_dragged 7 8 Other(4)",
                "main touch_down 7",
                "main touch_moved 7",
                "main touch_up 7",
                "main touch_cancelled 7",
                "main touch_double_tap 7",
            ]
        );
    }

    #[test]
    fn request_from_input_hook_changes_state_after_the_hook() {
        let mut machine = machine();
        machine.change_state("main").unwrap();

        assert_eq!(machine.key_pressed(Key::from('n')), Ok(true));
        machine.update().unwrap();

        assert_eq!(machine.current_state_name(), Some("other"));
        assert_eq!(machine.shared_data(), &["main key_pressed 110", "other update"]);
    }

    #[test]
    fn delivered_input_reports_a_failed_follow_up_request() {
        let mut machine = machine();
        machine.change_state("main").unwrap();

        let result = machine.key_pressed(Key::from('x'));

        assert_eq!(
            result,
            Err(MachineError::StateNotFound {
                name: "missing".to_string()
            })
        );
        assert_eq!(machine.shared_data(), &["main key_pressed 120"]);
        assert_eq!(machine.current_state_name(), Some("main"));
    }
}
