// Player controller facade
//
// Owns the state machine, the actor blackboard, the input snapshot and
// the collaborator drivers, and wires them together for each tick. The
// host feeds input, updates the camera rig, and calls `tick(dt)` once
// per frame; everything else happens inside.

use glam::{Quat, Vec3};

use crate::engine::animation::Animator;
use crate::engine::camera::CameraRig;
use crate::engine::input::PlayerInput;
use crate::engine::motion::CharacterMotor;

use super::config::PlayerConfig;
use super::context::{ActorState, StateContext};
use super::machine::StateMachine;
use super::state::{State, StateId};

pub struct PlayerController<A: Animator, M: CharacterMotor> {
    actor: ActorState,
    input: PlayerInput,
    camera: CameraRig,
    animator: A,
    motor: M,
    machine: StateMachine,
}

impl<A: Animator, M: CharacterMotor> PlayerController<A, M> {
    /// Build a controller with no active state. The host installs the
    /// initial state with [`force_transition`](Self::force_transition);
    /// until then, ticking is a no-op.
    pub fn new(config: PlayerConfig, camera: CameraRig, animator: A, motor: M) -> Self {
        Self {
            actor: ActorState::new(config),
            input: PlayerInput::new(),
            camera,
            animator,
            motor,
            machine: StateMachine::new(),
        }
    }

    /// Install `state` as the active state. Called once at
    /// initialization; afterwards the states transition themselves.
    pub fn force_transition(&mut self, state: Box<dyn State>) {
        let mut cx = StateContext {
            actor: &mut self.actor,
            input: &mut self.input,
            camera: &self.camera,
            animator: &mut self.animator,
            motor: &mut self.motor,
        };
        self.machine.force_transition(state, &mut cx);
    }

    /// Advance the controller by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let mut cx = StateContext {
            actor: &mut self.actor,
            input: &mut self.input,
            camera: &self.camera,
            animator: &mut self.animator,
            motor: &mut self.motor,
        };
        self.machine.tick(&mut cx, dt);
        self.input.end_frame(dt);
    }

    /// Feed input between ticks through this handle
    pub fn input_mut(&mut self) -> &mut PlayerInput {
        &mut self.input
    }

    /// Update the camera basis when the host camera moves
    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    pub fn current_state(&self) -> Option<StateId> {
        self.machine.current_id()
    }

    pub fn velocity(&self) -> Vec3 {
        self.actor.velocity
    }

    pub fn rotation(&self) -> Quat {
        self.actor.rotation
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn motor_mut(&mut self) -> &mut M {
        &mut self.motor
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }
}
