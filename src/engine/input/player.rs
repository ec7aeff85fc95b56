// Per-tick player input state

use super::action::Action;
use super::buffer::InputBuffer;
use glam::Vec2;
use std::collections::HashSet;

/// Input state for the controlled character.
///
/// The host calls [`press`](Self::press), [`release`](Self::release) and
/// [`set_move_axis`](Self::set_move_axis) while pumping its events; the
/// controller reads the state during `tick` and ends the frame with
/// [`end_frame`](Self::end_frame). Two read patterns are available:
/// per-tick edges (`just_pressed`) and short-lived buffered presses
/// (`consume_buffered`) that survive a few ticks.
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// 2D movement axis, x = strafe, y = forward. Level, not edge.
    move_axis: Vec2,

    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions that went down since the last `end_frame`
    just_pressed: HashSet<Action>,

    /// Actions that went up since the last `end_frame`
    just_released: HashSet<Action>,

    /// Recent presses retained for a short window
    buffer: InputBuffer,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movement axis for this tick. Components are expected in
    /// [-1, 1]; the value persists until the host changes it.
    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.move_axis = axis;
    }

    pub fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
            self.buffer.push(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// True only on the tick the action went down
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    pub fn is_buffered(&self, action: Action) -> bool {
        self.buffer.has(action)
    }

    /// Consume a buffered press of `action`, returning whether one
    /// existed. States use this for entry transitions so a press landing
    /// a tick or two early still counts.
    pub fn consume_buffered(&mut self, action: Action) -> bool {
        self.buffer.consume(action)
    }

    /// Polled attack predicate: did the attack go down this tick?
    pub fn attack_triggered(&self) -> bool {
        self.just_pressed(Action::Attack)
    }

    /// Advance to the next tick: clear edge sets and age the buffer.
    /// The controller calls this once at the end of every tick.
    pub fn end_frame(&mut self, dt: f32) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.buffer.update(dt);
    }

    /// Drop all input state (held keys included)
    pub fn reset(&mut self) {
        self.move_axis = Vec2::ZERO;
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.buffer.clear();
    }
}
