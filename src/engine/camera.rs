// Camera orientation seam

use crate::core::math::horizontal;
use glam::Vec3;

/// World-space orientation of the gameplay camera.
///
/// The host updates `forward` and `right` whenever its camera moves; the
/// controller only needs them to build a camera-relative movement basis.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraRig {
    pub fn new(forward: Vec3, right: Vec3) -> Self {
        Self { forward, right }
    }

    /// Basis for stick-relative movement: forward and right projected
    /// onto the ground plane and normalized. A camera looking straight
    /// down yields a zero forward axis.
    pub fn movement_basis(&self) -> (Vec3, Vec3) {
        (
            horizontal(self.forward).normalize_or_zero(),
            horizontal(self.right).normalize_or_zero(),
        )
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        // Behind the character, looking along +Z
        Self::new(Vec3::Z, Vec3::X)
    }
}
