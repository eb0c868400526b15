//! The State trait implemented by every machine state.
//!
//! A state is a named unit of behavior. The machine owns it from
//! registration onwards and calls its hooks on the host's behalf; every
//! hook has a default, so a state implements only what it reacts to.

use super::context::Context;
use super::event::{Key, MouseButton, Touch};

/// Trait for machine states.
///
/// `D` is the machine's shared data type. States never hold on to it; each
/// hook receives a [`Context`] lending it for the duration of the call.
///
/// # Lifecycle
///
/// - `setup` is called exactly once, when the state is registered, before
///   any other hook.
/// - `enter` / `exit` bracket each period in which the state is current.
/// - `update` / `draw` and the input hooks are only called while the state
///   is current.
///
/// # Example
///
/// ```rust
/// use framestate::{Context, State};
///
/// #[derive(Default)]
/// struct Scores {
///     best: u32,
/// }
///
/// struct GameOver;
///
/// impl State<Scores> for GameOver {
///     fn name(&self) -> &str {
///         "game_over"
///     }
///
///     fn enter(&mut self, ctx: &mut Context<'_, Scores>) {
///         ctx.shared_mut().best += 1;
///     }
/// }
/// ```
pub trait State<D> {
    /// Registry key. Must be non-empty and must not change once the state
    /// has been added to a machine.
    fn name(&self) -> &str;

    /// One-time initialization, run when the state is added.
    fn setup(&mut self, _ctx: &mut Context<'_, D>) {}

    fn enter(&mut self, _ctx: &mut Context<'_, D>) {}

    fn exit(&mut self, _ctx: &mut Context<'_, D>) {}

    /// Called once per host frame while current.
    fn update(&mut self, _ctx: &mut Context<'_, D>) {}

    /// Called once per host frame while current, after `update`.
    fn draw(&mut self, _ctx: &mut Context<'_, D>) {}

    fn key_pressed(&mut self, _ctx: &mut Context<'_, D>, _key: Key) {}

    fn key_released(&mut self, _ctx: &mut Context<'_, D>, _key: Key) {}

    fn mouse_pressed(&mut self, _ctx: &mut Context<'_, D>, _x: f32, _y: f32, _button: MouseButton) {
    }

    fn mouse_released(
        &mut self,
        _ctx: &mut Context<'_, D>,
        _x: f32,
        _y: f32,
        _button: MouseButton,
    ) {
    }

    fn mouse_moved(&mut self, _ctx: &mut Context<'_, D>, _x: f32, _y: f32) {}

    fn mouse_dragged(&mut self, _ctx: &mut Context<'_, D>, _x: f32, _y: f32, _button: MouseButton) {
    }

    fn touch_down(&mut self, _ctx: &mut Context<'_, D>, _touch: &Touch) {}

    fn touch_up(&mut self, _ctx: &mut Context<'_, D>, _touch: &Touch) {}

    fn touch_moved(&mut self, _ctx: &mut Context<'_, D>, _touch: &Touch) {}

    fn touch_cancelled(&mut self, _ctx: &mut Context<'_, D>, _touch: &Touch) {}

    fn touch_double_tap(&mut self, _ctx: &mut Context<'_, D>, _touch: &Touch) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Counter {
        entered: u32,
        keys: Vec<Key>,
    }

    impl State<()> for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn enter(&mut self, _ctx: &mut Context<'_, ()>) {
            self.entered += 1;
        }

        fn key_pressed(&mut self, ctx: &mut Context<'_, ()>, key: Key) {
            self.keys.push(key);
            if key == Key::from('q') {
                ctx.change_state("quit");
            }
        }
    }

    #[test]
    fn default_hooks_do_nothing() {
        let mut state = Counter {
            entered: 0,
            keys: Vec::new(),
        };
        let mut shared = ();
        let mut queue = VecDeque::new();
        let mut ctx = Context::new(&mut shared, &mut queue, Some("counter"));

        state.update(&mut ctx);
        state.draw(&mut ctx);
        state.mouse_moved(&mut ctx, 1.0, 1.0);
        state.touch_cancelled(&mut ctx, &Touch { id: 0, x: 0.0, y: 0.0 });

        assert_eq!(ctx.pending_requests(), 0);
        assert_eq!(state.entered, 0);
    }

    #[test]
    fn overridden_hooks_run_and_can_request_transitions() {
        let mut state = Counter {
            entered: 0,
            keys: Vec::new(),
        };
        let mut shared = ();
        let mut queue = VecDeque::new();
        let mut ctx = Context::new(&mut shared, &mut queue, Some("counter"));

        state.enter(&mut ctx);
        state.key_pressed(&mut ctx, Key::from('a'));
        state.key_pressed(&mut ctx, Key::from('q'));

        assert_eq!(state.entered, 1);
        assert_eq!(state.keys, vec![Key::from('a'), Key::from('q')]);
        assert_eq!(ctx.pending_requests(), 1);
    }

    #[test]
    fn name_is_stable() {
        let state = Counter {
            entered: 0,
            keys: Vec::new(),
        };
        assert_eq!(state.name(), state.name());
    }
}
