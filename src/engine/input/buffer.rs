// Input buffering for reliable action detection

use super::action::Action;
use std::collections::VecDeque;

/// Maximum number of buffered presses to store
const MAX_BUFFER_SIZE: usize = 16;

/// How long a press remains in the buffer, in seconds.
///
/// Roughly six ticks at 60 Hz: enough to absorb a press that lands a
/// frame or two before the state that can honor it becomes active.
const BUFFER_WINDOW: f32 = 0.1;

/// A single buffered press
#[derive(Debug, Clone, Copy)]
pub struct BufferedPress {
    pub action: Action,
    pub time_remaining: f32,
}

impl BufferedPress {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            time_remaining: BUFFER_WINDOW,
        }
    }

    /// Age the press by `dt` seconds
    pub fn age(&mut self, dt: f32) {
        self.time_remaining = (self.time_remaining - dt).max(0.0);
    }

    pub fn is_expired(&self) -> bool {
        self.time_remaining <= 0.0
    }
}

/// Short-lived queue of recent action presses.
///
/// A press stays visible for [`BUFFER_WINDOW`] seconds or until a state
/// consumes it, whichever comes first. Duplicate presses of an action
/// already buffered are folded into one entry.
#[derive(Debug, Default)]
pub struct InputBuffer {
    presses: VecDeque<BufferedPress>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            presses: VecDeque::with_capacity(MAX_BUFFER_SIZE),
        }
    }

    /// Record a press
    pub fn push(&mut self, action: Action) {
        if self.presses.iter().any(|p| p.action == action) {
            return;
        }
        self.presses.push_back(BufferedPress::new(action));
        if self.presses.len() > MAX_BUFFER_SIZE {
            self.presses.pop_front();
        }
    }

    /// Check whether a press of `action` is buffered
    pub fn has(&self, action: Action) -> bool {
        self.presses.iter().any(|p| p.action == action)
    }

    /// Consume a buffered press of `action` if one exists.
    /// Returns true if a press was found and removed.
    pub fn consume(&mut self, action: Action) -> bool {
        if let Some(pos) = self.presses.iter().position(|p| p.action == action) {
            self.presses.remove(pos);
            true
        } else {
            false
        }
    }

    /// Age all buffered presses by `dt` seconds and drop expired ones.
    /// Call once per tick.
    pub fn update(&mut self, dt: f32) {
        for press in &mut self.presses {
            press.age(dt);
        }
        self.presses.retain(|p| !p.is_expired());
    }

    pub fn clear(&mut self) {
        self.presses.clear();
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_retained_within_window() {
        let mut buffer = InputBuffer::new();
        buffer.push(Action::Attack);
        buffer.update(BUFFER_WINDOW / 2.0);
        assert!(buffer.has(Action::Attack));
    }

    #[test]
    fn test_press_expires_after_window() {
        let mut buffer = InputBuffer::new();
        buffer.push(Action::Attack);
        buffer.update(BUFFER_WINDOW + 0.001);
        assert!(!buffer.has(Action::Attack));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_expiry_accumulates_over_ticks() {
        let mut buffer = InputBuffer::new();
        buffer.push(Action::Dash);
        // Seven 60 Hz ticks pass the 0.1 s window
        for _ in 0..7 {
            buffer.update(1.0 / 60.0);
        }
        assert!(!buffer.has(Action::Dash));
    }

    #[test]
    fn test_consume_removes_press() {
        let mut buffer = InputBuffer::new();
        buffer.push(Action::Dash);
        assert!(buffer.consume(Action::Dash));
        assert!(!buffer.has(Action::Dash));
        assert!(!buffer.consume(Action::Dash));
    }

    #[test]
    fn test_no_duplicate_entries() {
        let mut buffer = InputBuffer::new();
        buffer.push(Action::Attack);
        buffer.push(Action::Attack);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_independent_actions() {
        let mut buffer = InputBuffer::new();
        buffer.push(Action::Attack);
        buffer.push(Action::Dash);
        assert!(buffer.consume(Action::Dash));
        assert!(buffer.has(Action::Attack));
    }

    #[test]
    fn test_clear() {
        let mut buffer = InputBuffer::new();
        buffer.push(Action::Attack);
        buffer.push(Action::Dash);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
