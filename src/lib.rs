// Melee character controller core
//
// A tick-driven state machine for a third-person action character:
// locomotion, dash, and a multi-step melee combo, plus the narrow
// collaborator seams (input, animation, motion, camera) a host engine
// plugs into. Rendering and physics stay on the host side.

pub mod core;
pub mod engine;
pub mod game;

pub use engine::animation::{Animator, NullAnimator};
pub use engine::camera::CameraRig;
pub use engine::input::{Action, PlayerInput};
pub use engine::motion::{CharacterMotor, KinematicMotor};
pub use game::player::{
    ComboStep, ConfigError, LocomotionState, PlayerConfig, PlayerController, StateId,
};
