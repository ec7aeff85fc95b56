// Actor blackboard and per-tick state context

use crate::core::math::{damped_slerp, horizontal, look_rotation_y};
use crate::engine::animation::Animator;
use crate::engine::camera::CameraRig;
use crate::engine::input::PlayerInput;
use crate::engine::motion::CharacterMotor;
use glam::{Quat, Vec3};

use super::config::PlayerConfig;

/// Mutable actor data shared by all states.
///
/// Exactly one state mutates this per tick; the machine's single active
/// state guarantees that by construction.
#[derive(Debug, Clone)]
pub struct ActorState {
    /// Current velocity. States write x/z; y is left to the host.
    pub velocity: Vec3,
    /// Current facing rotation
    pub rotation: Quat,
    /// Immutable tuning
    pub config: PlayerConfig,
}

impl ActorState {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            velocity: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            config,
        }
    }
}

/// Exclusive borrows of everything a state may touch during one tick.
///
/// Built by the controller per tick and handed to the active state; the
/// borrow checker rules out any aliased access to the blackboard.
pub struct StateContext<'a> {
    pub actor: &'a mut ActorState,
    pub input: &'a mut PlayerInput,
    pub camera: &'a CameraRig,
    pub animator: &'a mut dyn Animator,
    pub motor: &'a mut dyn CharacterMotor,
}

impl StateContext<'_> {
    /// Recompute horizontal velocity from the move axis, camera-relative.
    /// The vertical component is untouched.
    pub fn refresh_move_velocity(&mut self) {
        let (forward, right) = self.camera.movement_basis();
        let axis = self.input.move_axis();
        let direction = forward * axis.y + right * axis.x;

        let speed = self.actor.config.movement_speed;
        self.actor.velocity.x = direction.x * speed;
        self.actor.velocity.z = direction.z * speed;
    }

    /// Turn the actor toward its horizontal velocity with exponential
    /// damping. No-op while standing still.
    pub fn face_move_direction(&mut self, dt: f32) {
        let facing = horizontal(self.actor.velocity);
        if facing == Vec3::ZERO {
            return;
        }
        self.actor.rotation = damped_slerp(
            self.actor.rotation,
            look_rotation_y(facing),
            self.actor.config.look_rotation_damping,
            dt,
        );
    }

    /// Snap the facing rotation to the horizontal velocity immediately.
    /// No-op while standing still.
    pub fn snap_to_move_direction(&mut self) {
        let facing = horizontal(self.actor.velocity);
        if facing == Vec3::ZERO {
            return;
        }
        self.actor.rotation = look_rotation_y(facing);
    }

    /// Hand this tick's displacement to the motion driver.
    pub fn apply_velocity(&mut self, dt: f32) {
        self.motor.move_by(self.actor.velocity * dt);
    }
}
