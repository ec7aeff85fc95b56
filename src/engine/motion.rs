// Physics motion seam

use glam::Vec3;

/// Kinematic motion driver.
///
/// The host's physics layer applies the requested displacement, resolves
/// collisions, and answers ground contact queries. The controller never
/// sees colliders or forces.
pub trait CharacterMotor {
    /// Apply a kinematic displacement for this tick (already scaled by dt).
    fn move_by(&mut self, displacement: Vec3);

    /// Whether the character is in contact with a walkable surface.
    fn is_grounded(&self) -> bool;
}

/// Collision-free motor that integrates displacements directly.
///
/// Stands in for a real physics layer in the demo and in tests; ground
/// contact is a flag the host flips.
#[derive(Debug, Clone, Copy)]
pub struct KinematicMotor {
    position: Vec3,
    grounded: bool,
}

impl KinematicMotor {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            grounded: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }
}

impl Default for KinematicMotor {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl CharacterMotor for KinematicMotor {
    fn move_by(&mut self, displacement: Vec3) {
        self.position += displacement;
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}
