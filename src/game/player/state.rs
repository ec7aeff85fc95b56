// State lifecycle contract

use super::context::StateContext;

/// The closed set of player states.
///
/// Transitions name their target through this id; the machine builds a
/// fresh state instance for it, so re-entering a state never inherits
/// stale timers or cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Locomotion,
    Dash,
    ComboAttack,
    Fall,
}

impl StateId {
    /// Build a fresh instance of the state this id names.
    pub(crate) fn spawn(self) -> Box<dyn State> {
        match self {
            Self::Locomotion => Box::new(super::LocomotionState::new()),
            Self::Dash => Box::new(super::DashState::new()),
            Self::ComboAttack => Box::new(super::ComboAttackState::new()),
            Self::Fall => Box::new(super::FallState::new()),
        }
    }
}

/// What a state wants after its tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep ticking the current state
    Stay,
    /// Exit the current state and enter a fresh instance of the target
    To(StateId),
}

/// One unit of player behavior.
///
/// Lifecycle per activation: `enter` exactly once, `tick` once per frame
/// while active, `exit` exactly once on deactivation. Transitions are
/// requested only through `tick`'s return value; `exit` has no way to
/// reach the machine and so cannot transition reentrantly.
pub trait State {
    fn id(&self) -> StateId;

    fn enter(&mut self, cx: &mut StateContext<'_>);

    fn tick(&mut self, cx: &mut StateContext<'_>, dt: f32) -> Transition;

    fn exit(&mut self, cx: &mut StateContext<'_>);
}
