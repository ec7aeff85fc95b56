// Player tuning configuration
//
// All values are validated once, at startup. Nothing here changes at
// runtime, so per-tick code never re-checks them.

use super::combo::ComboStep;
use thiserror::Error;

/// Default movement speed in units/second
pub const MOVEMENT_SPEED: f32 = 25.0;

/// Default multiplier applied to horizontal velocity when a dash starts
pub const DASH_FORCE: f32 = 5.0;

/// Default exponential damping factor for facing rotation
pub const LOOK_ROTATION_DAMPING: f32 = 10.0;

/// Configuration errors surfaced at construction time.
///
/// These are programming or authoring mistakes, not runtime conditions;
/// a host should treat them as fatal.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("combo step '{param}': attack window ends at {attack_end}s, after the full step ends at {full_end}s")]
    InvertedStepTiming {
        param: &'static str,
        attack_end: f32,
        full_end: f32,
    },

    #[error("combo step '{param}': attack window end must be non-negative (got {attack_end}s)")]
    NegativeAttackWindow {
        param: &'static str,
        attack_end: f32,
    },

    #[error("combo sequence must contain at least one step")]
    EmptyCombo,
}

/// Tuning values for the controlled character.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Horizontal movement speed (units/second)
    pub movement_speed: f32,
    /// Multiplier applied to horizontal velocity when a dash starts
    pub dash_force: f32,
    /// Damping factor for turning toward the move direction
    pub look_rotation_damping: f32,

    /// Ordered combo steps; validated non-empty
    combo: Vec<ComboStep>,
}

impl PlayerConfig {
    pub fn new(
        movement_speed: f32,
        dash_force: f32,
        look_rotation_damping: f32,
        combo: Vec<ComboStep>,
    ) -> Result<Self, ConfigError> {
        if combo.is_empty() {
            return Err(ConfigError::EmptyCombo);
        }
        Ok(Self {
            movement_speed,
            dash_force,
            look_rotation_damping,
            combo,
        })
    }

    /// Standard tuning with the shipped three-step combo.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(
            MOVEMENT_SPEED,
            DASH_FORCE,
            LOOK_ROTATION_DAMPING,
            standard_combo()?,
        )
    }

    pub fn combo_steps(&self) -> &[ComboStep] {
        &self.combo
    }
}

/// The shipped three-hit combo.
///
/// Step timings: a long opener with a generous cancel window, then two
/// fast follow-ups with tight windows and short recoveries.
pub fn standard_combo() -> Result<Vec<ComboStep>, ConfigError> {
    Ok(vec![
        ComboStep::new("attack_1", "attack_1", 0.72, 1.0)?,
        ComboStep::new("attack_2", "attack_2", 0.30, 0.45)?,
        ComboStep::new("attack_3", "attack_3", 0.46, 0.9)?,
    ])
}
