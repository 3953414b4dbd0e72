//! Input events and how they change game state
//!
//! Events are backend-neutral; the platform layer translates window system
//! events into [`InputEvent`] before they reach [`handle_event`].

use glam::Vec2;

use super::state::{GameState, PlaneKind};
use crate::heading_degrees;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    F1,
    Other,
}

/// Mouse buttons the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}

impl MouseButton {
    /// Plane steered by a drag with this button
    pub fn plane(self) -> Option<PlaneKind> {
        match self {
            MouseButton::Left => Some(PlaneKind::Big),
            MouseButton::Right => Some(PlaneKind::Small),
            MouseButton::Other => None,
        }
    }
}

/// A single input event, in window pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close requested
    Closed,
    KeyPressed(Key),
    MouseDown { button: MouseButton, pos: Vec2 },
    MouseUp { button: MouseButton, pos: Vec2 },
}

/// Heading and velocity produced by a finished drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub displacement: Vec2,
    pub heading: f32,
    pub velocity: Vec2,
}

/// Turn a press/release pair into a steering command for `plane`
pub fn drag_steering(mouse_down: Vec2, mouse_up: Vec2, plane: PlaneKind) -> Steering {
    let displacement = mouse_up - mouse_down;
    Steering {
        displacement,
        heading: heading_degrees(displacement),
        velocity: displacement / plane.drag_divisor(),
    }
}

/// Apply one input event to the state
pub fn handle_event(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Closed => state.exit_requested = true,
        InputEvent::KeyPressed(key) => handle_key(state, key),
        InputEvent::MouseDown { pos, .. } => state.drag.mouse_down = pos,
        InputEvent::MouseUp { button, pos } => handle_mouse_up(state, button, pos),
    }
}

fn handle_key(state: &mut GameState, key: Key) {
    match key {
        Key::Escape => state.exit_requested = true,
        Key::F1 => {
            state.debug = !state.debug;
            log::debug!("Debug overlay: {}", state.debug);
        }
        Key::Other => {}
    }
}

fn handle_mouse_up(state: &mut GameState, button: MouseButton, pos: Vec2) {
    let Some(kind) = button.plane() else {
        return;
    };
    let steering = drag_steering(state.drag.mouse_down, pos, kind);
    state.plane_mut(kind).steer(steering.heading, steering.velocity);
    log::debug!(
        "{:?} plane steered: heading {:.1}°, velocity ({:.2}, {:.2})",
        kind,
        steering.heading,
        steering.velocity.x,
        steering.velocity.y
    );
}
