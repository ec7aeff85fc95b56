use anyhow::Result;
use glam::{Vec2, Vec3};
use log::{debug, info};

use melee_controller::engine::game_loop::GameLoop;
use melee_controller::game::player::LocomotionState;
use melee_controller::{
    Action, Animator, CameraRig, KinematicMotor, PlayerConfig, PlayerController,
};

/// Animator that narrates rig commands to the log
#[derive(Default)]
struct ConsoleAnimator;

impl Animator for ConsoleAnimator {
    fn cross_fade(&mut self, clip: &str, duration: f32) {
        debug!("anim: cross-fade to '{}' over {:.2}s", clip, duration);
    }

    fn set_bool(&mut self, param: &str, value: bool) {
        debug!("anim: {} = {}", param, value);
    }

    fn set_float(&mut self, _param: &str, _value: f32, _damp_time: f32, _dt: f32) {
        // Per-tick float updates are too chatty even for debug
    }
}

/// Scripted input: run forward, dash, land a three-hit combo, idle out
const SCRIPT: &[(f32, ScriptEvent)] = &[
    (0.0, ScriptEvent::Move(0.0, 1.0)),
    (1.0, ScriptEvent::Press(Action::Dash)),
    (1.1, ScriptEvent::Release(Action::Dash)),
    (2.0, ScriptEvent::Move(0.0, 0.0)),
    (2.2, ScriptEvent::Press(Action::Attack)),
    (2.3, ScriptEvent::Release(Action::Attack)),
    (2.7, ScriptEvent::Press(Action::Attack)),
    (2.8, ScriptEvent::Release(Action::Attack)),
    (3.1, ScriptEvent::Press(Action::Attack)),
    (3.2, ScriptEvent::Release(Action::Attack)),
];

const RUN_TIME: f32 = 5.5;

#[derive(Clone, Copy)]
enum ScriptEvent {
    Move(f32, f32),
    Press(Action),
    Release(Action),
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    info!("Starting controller demo...");

    let mut controller = PlayerController::new(
        PlayerConfig::standard()?,
        CameraRig::default(),
        ConsoleAnimator,
        KinematicMotor::new(Vec3::ZERO),
    );
    controller.force_transition(Box::new(LocomotionState::new()));

    let mut game_loop = GameLoop::new();
    let mut sim_time = 0.0f32;
    let mut cursor = 0;
    let mut last_state = controller.current_state();

    while sim_time < RUN_TIME {
        let ticks = game_loop.begin_frame();
        for _ in 0..ticks {
            while cursor < SCRIPT.len() && SCRIPT[cursor].0 <= sim_time {
                apply_event(&mut controller, SCRIPT[cursor].1);
                cursor += 1;
            }

            controller.tick(game_loop.fixed_timestep());
            sim_time += game_loop.fixed_timestep();

            let state = controller.current_state();
            if state != last_state {
                info!("t={:.2}s  state -> {:?}", sim_time, state);
                last_state = state;
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    let position = controller.motor().position();
    info!(
        "Done after {} ticks: position ({:.1}, {:.1}, {:.1}), {:.0} fps host loop",
        game_loop.tick_count(),
        position.x,
        position.y,
        position.z,
        game_loop.fps()
    );

    Ok(())
}

fn apply_event(controller: &mut PlayerController<ConsoleAnimator, KinematicMotor>, event: ScriptEvent) {
    match event {
        ScriptEvent::Move(x, y) => controller.input_mut().set_move_axis(Vec2::new(x, y)),
        ScriptEvent::Press(action) => controller.input_mut().press(action),
        ScriptEvent::Release(action) => controller.input_mut().release(action),
    }
}
