// Dash state: a fixed-length burst of speed

use super::context::StateContext;
use super::state::{State, StateId, Transition};

const DASH_CLIP: &str = "dash";
const CROSS_FADE_DURATION: f32 = 0.1;

/// Wall-clock dash length in seconds. Deliberately independent of the
/// dash clip's length, so animation playback speed never changes how
/// far a dash carries.
const DASH_TIME_LIMIT: f32 = 0.058;

/// Multiplies horizontal velocity on entry and keeps it for a fixed
/// wall-clock duration, then hands control back to locomotion. Input is
/// ignored for the whole dash.
#[derive(Debug, Default)]
pub struct DashState {
    elapsed: f32,
}

impl DashState {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }
}

impl State for DashState {
    fn id(&self) -> StateId {
        StateId::Dash
    }

    fn enter(&mut self, cx: &mut StateContext<'_>) {
        let force = cx.actor.config.dash_force;
        cx.actor.velocity.x *= force;
        cx.actor.velocity.z *= force;
        cx.animator.cross_fade(DASH_CLIP, CROSS_FADE_DURATION);
    }

    fn tick(&mut self, cx: &mut StateContext<'_>, dt: f32) -> Transition {
        self.elapsed += dt;

        cx.face_move_direction(dt);
        cx.apply_velocity(dt);

        if self.elapsed >= DASH_TIME_LIMIT {
            Transition::To(StateId::Locomotion)
        } else {
            Transition::Stay
        }
    }

    fn exit(&mut self, _cx: &mut StateContext<'_>) {}
}
