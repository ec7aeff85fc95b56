// Locomotion state: idle/run blend driven by the camera-relative stick

use crate::engine::input::Action;

use super::context::StateContext;
use super::state::{State, StateId, Transition};

const MOVE_BLEND_CLIP: &str = "move_blend";
const MOVE_SPEED_PARAM: &str = "move_speed";
const ANIMATION_DAMP_TIME: f32 = 0.1;
const CROSS_FADE_DURATION: f32 = 0.1;

/// Default grounded state: camera-relative movement with an idle/run
/// blend. Dash and attack presses leave it, as does losing the ground.
#[derive(Debug, Default)]
pub struct LocomotionState;

impl LocomotionState {
    pub fn new() -> Self {
        Self
    }
}

impl State for LocomotionState {
    fn id(&self) -> StateId {
        StateId::Locomotion
    }

    fn enter(&mut self, cx: &mut StateContext<'_>) {
        cx.animator.cross_fade(MOVE_BLEND_CLIP, CROSS_FADE_DURATION);
    }

    fn tick(&mut self, cx: &mut StateContext<'_>, dt: f32) -> Transition {
        if !cx.motor.is_grounded() {
            return Transition::To(StateId::Fall);
        }
        if cx.input.consume_buffered(Action::Dash) {
            return Transition::To(StateId::Dash);
        }
        if cx.input.consume_buffered(Action::Attack) {
            return Transition::To(StateId::ComboAttack);
        }

        cx.refresh_move_velocity();
        cx.face_move_direction(dt);
        cx.apply_velocity(dt);

        let moving = cx.input.move_axis().length_squared() > 0.0;
        cx.animator.set_float(
            MOVE_SPEED_PARAM,
            if moving { 1.0 } else { 0.0 },
            ANIMATION_DAMP_TIME,
            dt,
        );

        Transition::Stay
    }

    fn exit(&mut self, _cx: &mut StateContext<'_>) {}
}
