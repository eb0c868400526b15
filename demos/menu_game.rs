//! Menu / Playing / Paused
//!
//! This example drives a small game through its states with a scripted
//! sequence of host events, the way a windowing loop would.
//!
//! Key concepts:
//! - States reacting to frame and input hooks
//! - Transitions requested from inside hooks
//! - Shared data surviving transitions
//! - Event subscription per input profile
//!
//! Run with: RUST_LOG=framestate=debug cargo run --example menu_game

use framestate::{
    Context, HostEvent, InputProfile, Key, MachineConfig, MouseButton, State,
    StateMachineBuilder,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Game {
    score: u32,
    frames: u32,
    rounds: u32,
}

struct Menu;

impl State<Game> for Menu {
    fn name(&self) -> &str {
        "menu"
    }

    fn enter(&mut self, ctx: &mut Context<'_, Game>) {
        println!("  [menu] press space to play (best so far: {})", ctx.shared().score);
    }

    fn key_pressed(&mut self, ctx: &mut Context<'_, Game>, key: Key) {
        if key == Key::from(' ') {
            ctx.change_state("playing");
        }
    }
}

struct Playing;

impl State<Game> for Playing {
    fn name(&self) -> &str {
        "playing"
    }

    fn enter(&mut self, ctx: &mut Context<'_, Game>) {
        ctx.shared_mut().rounds += 1;
        println!("  [playing] round {}", ctx.shared().rounds);
    }

    fn update(&mut self, ctx: &mut Context<'_, Game>) {
        ctx.shared_mut().frames += 1;
    }

    fn draw(&mut self, ctx: &mut Context<'_, Game>) {
        println!("  [playing] frame {} score {}", ctx.shared().frames, ctx.shared().score);
    }

    fn mouse_pressed(&mut self, ctx: &mut Context<'_, Game>, x: f32, y: f32, button: MouseButton) {
        if button == MouseButton::Left {
            ctx.shared_mut().score += 5;
            println!("  [playing] hit at ({x}, {y})");
        }
    }

    fn key_pressed(&mut self, ctx: &mut Context<'_, Game>, key: Key) {
        match key.as_char() {
            Some('p') => ctx.change_state("paused"),
            Some('q') => ctx.change_state("menu"),
            _ => {}
        }
    }
}

struct Paused;

impl State<Game> for Paused {
    fn name(&self) -> &str {
        "paused"
    }

    fn draw(&mut self, _ctx: &mut Context<'_, Game>) {
        println!("  [paused] press p to resume");
    }

    fn key_pressed(&mut self, ctx: &mut Context<'_, Game>, key: Key) {
        if key == Key::from('p') {
            ctx.change_state("playing");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("framestate=info")),
        )
        .init();

    println!("=== Menu Game Example ===\n");

    let mut machine = StateMachineBuilder::new(Game::default())
        .config(MachineConfig::default().with_history_limit(16))
        .state(Menu)
        .state(Playing)
        .state(Paused)
        .initial("menu")
        .enable_events(InputProfile::Desktop)
        .build()
        .expect("menu game states are valid");

    let frame = [HostEvent::Update, HostEvent::Draw];
    let mut script = vec![HostEvent::KeyPressed { key: Key::from(' ') }];
    script.extend(frame.iter().cloned());
    script.push(HostEvent::MousePressed {
        x: 12.0,
        y: 30.0,
        button: MouseButton::Left,
    });
    script.extend(frame.iter().cloned());
    script.push(HostEvent::KeyPressed { key: Key::from('p') });
    script.extend(frame.iter().cloned());
    script.push(HostEvent::KeyPressed { key: Key::from('p') });
    script.extend(frame.iter().cloned());
    script.push(HostEvent::KeyPressed { key: Key::from('q') });

    for event in &script {
        if let Err(err) = machine.handle_event(event) {
            eprintln!("event {} failed: {err}", event.label());
        }
    }

    println!("\nFinal state: {:?}", machine.current_state_name());
    println!("Shared data: {:?}", machine.shared_data());
    println!("Path: {}", machine.history().path().join(" -> "));

    // An unknown state is reported, not fatal.
    if let Err(err) = machine.change_state("credits") {
        println!("Expected error: {err}");
    }

    println!("\n=== Example Complete ===");
}
