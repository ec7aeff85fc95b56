// Math utilities and helper functions

use glam::{Quat, Vec3};

/// Project a vector onto the ground plane (zero the Y component).
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Yaw-only rotation facing a horizontal direction (+Z is forward).
///
/// The direction does not need to be normalized. A zero direction
/// yields the identity rotation.
pub fn look_rotation_y(direction: Vec3) -> Quat {
    if direction.x == 0.0 && direction.z == 0.0 {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_y(direction.x.atan2(direction.z))
}

/// Exponentially damped spherical interpolation between two rotations.
///
/// The interpolation factor is `damping * dt`, clamped to [0, 1] so a
/// long frame cannot overshoot the target.
pub fn damped_slerp(from: Quat, to: Quat, damping: f32, dt: f32) -> Quat {
    from.slerp(to, (damping * dt).clamp(0.0, 1.0))
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_horizontal_zeroes_y() {
        let v = horizontal(Vec3::new(1.0, 5.0, -2.0));
        assert_eq!(v, Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn test_look_rotation_forward_is_identity() {
        let q = look_rotation_y(Vec3::Z);
        assert_relative_eq!(q.x, 0.0);
        assert_relative_eq!(q.y, 0.0);
        assert_relative_eq!(q.z, 0.0);
        assert_relative_eq!(q.w, 1.0);
    }

    #[test]
    fn test_look_rotation_faces_direction() {
        let q = look_rotation_y(Vec3::new(1.0, 0.0, 0.0));
        let faced = q * Vec3::Z;
        assert_relative_eq!(faced.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(faced.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_look_rotation_ignores_vertical_component() {
        let flat = look_rotation_y(Vec3::new(1.0, 0.0, 1.0));
        let tilted = look_rotation_y(Vec3::new(1.0, 3.0, 1.0));
        assert_relative_eq!(flat.y, tilted.y, epsilon = 1e-6);
        assert_relative_eq!(flat.w, tilted.w, epsilon = 1e-6);
    }

    #[test]
    fn test_look_rotation_zero_direction() {
        assert_eq!(look_rotation_y(Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn test_damped_slerp_clamps_factor() {
        let from = Quat::IDENTITY;
        let to = Quat::from_rotation_y(1.0);
        // damping * dt > 1 must land exactly on the target, not past it
        let q = damped_slerp(from, to, 10.0, 1.0);
        assert_relative_eq!(q.y, to.y, epsilon = 1e-6);
        assert_relative_eq!(q.w, to.w, epsilon = 1e-6);
    }

    #[test]
    fn test_damped_slerp_partial_step() {
        let from = Quat::IDENTITY;
        let to = Quat::from_rotation_y(1.0);
        let q = damped_slerp(from, to, 10.0, 0.05);
        let expected = from.slerp(to, 0.5);
        assert_relative_eq!(q.y, expected.y, epsilon = 1e-6);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }
}
