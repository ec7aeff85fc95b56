// Player character controller
//
// This module contains everything that decides what the character does
// each tick:
// - State machine and the state lifecycle contract
// - Locomotion, dash, combo attack and fall states
// - Actor blackboard shared by the states
// - Tuning configuration with startup validation

pub mod combo;
pub mod config;
pub mod context;
pub mod controller;
pub mod dash;
pub mod fall;
pub mod locomotion;
pub mod machine;
pub mod state;

// Re-export commonly used types
pub use combo::{ComboAttackState, ComboStep};
pub use config::{ConfigError, PlayerConfig};
pub use context::{ActorState, StateContext};
pub use controller::PlayerController;
pub use dash::DashState;
pub use fall::FallState;
pub use locomotion::LocomotionState;
pub use machine::StateMachine;
pub use state::{State, StateId, Transition};
