// Fall state: airborne, carrying the last grounded velocity

use super::context::StateContext;
use super::state::{State, StateId, Transition};

const FALL_CLIP: &str = "fall";
const CROSS_FADE_DURATION: f32 = 0.1;

/// Active while the motor reports no ground contact. Movement keeps
/// applying the current velocity; control returns to locomotion on
/// touchdown.
#[derive(Debug, Default)]
pub struct FallState;

impl FallState {
    pub fn new() -> Self {
        Self
    }
}

impl State for FallState {
    fn id(&self) -> StateId {
        StateId::Fall
    }

    fn enter(&mut self, cx: &mut StateContext<'_>) {
        cx.animator.cross_fade(FALL_CLIP, CROSS_FADE_DURATION);
    }

    fn tick(&mut self, cx: &mut StateContext<'_>, dt: f32) -> Transition {
        cx.apply_velocity(dt);

        if cx.motor.is_grounded() {
            Transition::To(StateId::Locomotion)
        } else {
            Transition::Stay
        }
    }

    fn exit(&mut self, _cx: &mut StateContext<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::super::testing::TestRig;
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_enter_starts_fall_clip() {
        let mut rig = TestRig::new();
        let mut state = FallState::new();
        state.enter(&mut rig.context());
        assert_eq!(rig.animator.cross_fades(), vec![FALL_CLIP]);
    }

    #[test]
    fn test_stays_airborne_and_keeps_moving() {
        let mut rig = TestRig::new();
        rig.motor.set_grounded(false);
        rig.set_velocity(Vec3::new(3.0, 0.0, 0.0));

        let mut state = FallState::new();
        state.enter(&mut rig.context());
        assert_eq!(state.tick(&mut rig.context(), DT), Transition::Stay);
        assert_relative_eq!(rig.motor.position().x, 3.0 * DT, epsilon = 1e-6);
    }

    #[test]
    fn test_touchdown_returns_to_locomotion() {
        let mut rig = TestRig::new();
        rig.motor.set_grounded(false);

        let mut state = FallState::new();
        state.enter(&mut rig.context());
        assert_eq!(state.tick(&mut rig.context(), DT), Transition::Stay);

        rig.motor.set_grounded(true);
        assert_eq!(
            state.tick(&mut rig.context(), DT),
            Transition::To(StateId::Locomotion)
        );
    }
}
