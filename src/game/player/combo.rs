// Combo attack state: a chain of melee swings driven by buffered input
//
// Each step has two marks on its local clock: the attack window, during
// which another press commits to the next swing, and the full step end,
// which includes the recovery tail. A press in the window skips the
// recovery; no press lets the recovery play out, then hands control
// back to locomotion.

use log::debug;

use super::config::ConfigError;
use super::context::StateContext;
use super::state::{State, StateId, Transition};

const CROSS_FADE_DURATION: f32 = 0.05;

/// One swing of a combo: its animation hooks and timing marks.
///
/// Invariant, checked at construction: `full_step_end >=
/// attack_window_end >= 0`. Step tables are built once at startup and
/// never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboStep {
    anim_param: &'static str,
    anim_clip: &'static str,
    attack_window_end: f32,
    full_step_end: f32,
}

impl ComboStep {
    pub fn new(
        anim_param: &'static str,
        anim_clip: &'static str,
        attack_window_end: f32,
        full_step_end: f32,
    ) -> Result<Self, ConfigError> {
        if attack_window_end < 0.0 {
            return Err(ConfigError::NegativeAttackWindow {
                param: anim_param,
                attack_end: attack_window_end,
            });
        }
        if full_step_end < attack_window_end {
            return Err(ConfigError::InvertedStepTiming {
                param: anim_param,
                attack_end: attack_window_end,
                full_end: full_step_end,
            });
        }
        Ok(Self {
            anim_param,
            anim_clip,
            attack_window_end,
            full_step_end,
        })
    }

    /// Boolean rig parameter gating this step's clip
    pub fn anim_param(&self) -> &'static str {
        self.anim_param
    }

    /// Clip to cross-fade into when the step starts
    pub fn anim_clip(&self) -> &'static str {
        self.anim_clip
    }

    /// End of the cancel window, seconds from the step's start
    pub fn attack_window_end(&self) -> f32 {
        self.attack_window_end
    }

    /// End of the whole step including recovery, seconds from its start
    pub fn full_step_end(&self) -> f32 {
        self.full_step_end
    }
}

/// Sequences the combo steps in the actor's config.
///
/// The cursor (step index, elapsed time, pending continuation) lives in
/// the state instance, so it is created on enter and discarded on exit;
/// re-entering the combo always starts from step 0.
#[derive(Debug)]
pub struct ComboAttackState {
    step_index: usize,
    elapsed_in_step: f32,
    continue_pending: bool,
    first_tick: bool,
}

impl ComboAttackState {
    pub fn new() -> Self {
        Self {
            step_index: 0,
            elapsed_in_step: 0.0,
            continue_pending: false,
            first_tick: true,
        }
    }
}

impl Default for ComboAttackState {
    fn default() -> Self {
        Self::new()
    }
}

impl State for ComboAttackState {
    fn id(&self) -> StateId {
        StateId::ComboAttack
    }

    fn enter(&mut self, cx: &mut StateContext<'_>) {
        self.step_index = 0;
        self.elapsed_in_step = 0.0;
        self.continue_pending = false;
        self.first_tick = true;

        // Face the current move direction once; facing stays locked for
        // the whole combo.
        cx.snap_to_move_direction();

        let opener = cx.actor.config.combo_steps()[0];
        cx.animator.set_bool(opener.anim_param(), true);
        cx.animator.cross_fade(opener.anim_clip(), CROSS_FADE_DURATION);
    }

    fn tick(&mut self, cx: &mut StateContext<'_>, dt: f32) -> Transition {
        self.elapsed_in_step += dt;

        let steps = cx.actor.config.combo_steps();
        let step = steps[self.step_index];
        let final_step = self.step_index == steps.len() - 1;
        let next_step = if final_step {
            None
        } else {
            Some(steps[self.step_index + 1])
        };

        // Buffer a continuation press landing inside the cancel window.
        // Skipped on the very first tick: under a catch-up host loop the
        // press that entered this state can still read as triggered
        // here, and must not count twice.
        if !self.first_tick
            && self.elapsed_in_step <= step.attack_window_end()
            && cx.input.attack_triggered()
        {
            self.continue_pending = true;
        }

        let mut transition = Transition::Stay;
        if self.elapsed_in_step >= step.attack_window_end() {
            if let (true, Some(next)) = (self.continue_pending, next_step) {
                // Chain into the next swing, skipping this one's recovery
                cx.animator.set_bool(step.anim_param(), false);
                cx.animator.set_bool(next.anim_param(), true);
                cx.animator.cross_fade(next.anim_clip(), CROSS_FADE_DURATION);

                self.step_index += 1;
                self.elapsed_in_step = 0.0;
                self.continue_pending = false;
                debug!("combo advance -> step {}", self.step_index);
            } else if self.elapsed_in_step >= step.full_step_end() {
                // Recovery finished with nothing buffered
                cx.animator.set_bool(step.anim_param(), false);
                transition = Transition::To(StateId::Locomotion);
            }
            // Otherwise the window is closed but recovery is still
            // playing; stay put.
        }

        // Cleared at the end so the exclusion covers the whole first tick
        self.first_tick = false;
        transition
    }

    fn exit(&mut self, _cx: &mut StateContext<'_>) {}
}
