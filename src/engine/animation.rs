// Animation driver seam
//
// Clip playback, blending and parameter smoothing live in the host's
// animation rig. The controller only issues commands through this trait.

/// Commands the controller sends to the host's animation rig.
///
/// Clips and parameters are addressed by name, matching however the
/// host's rig is authored ("dash", "attack_1", "move_speed", ...).
pub trait Animator {
    /// Blend from the currently playing clip into `clip` over `duration`
    /// seconds of fixed (playback-speed independent) time.
    fn cross_fade(&mut self, clip: &str, duration: f32);

    /// Set a boolean parameter gating clip selection in the rig.
    fn set_bool(&mut self, param: &str, value: bool);

    /// Set a float parameter, smoothed by the rig over `damp_time`
    /// seconds; `dt` is the current tick's delta time.
    fn set_float(&mut self, param: &str, value: f32, damp_time: f32, dt: f32);
}

/// Animator that discards every command. For headless hosts and tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnimator;

impl Animator for NullAnimator {
    fn cross_fade(&mut self, _clip: &str, _duration: f32) {}

    fn set_bool(&mut self, _param: &str, _value: bool) {}

    fn set_float(&mut self, _param: &str, _value: f32, _damp_time: f32, _dt: f32) {}
}
