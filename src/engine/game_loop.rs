// Host loop timing
//
// Fixed timestep accumulator: game logic ticks at a constant rate no
// matter how fast the host loop spins.

use std::time::{Duration, Instant};

/// Logic update rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Cap on catch-up ticks per frame to prevent the spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Frame-time window for the FPS average
const FPS_WINDOW_SIZE: usize = 60;

/// Fixed-timestep loop state
pub struct GameLoop {
    /// Time accumulated toward the next fixed tick
    accumulator: Duration,

    /// When the previous frame started
    last_frame_time: Instant,

    start_time: Instant,

    /// Recent frame times for the FPS average
    frame_times: Vec<Duration>,

    frame_count: u64,
    tick_count: u64,
    current_fps: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame; returns how many fixed ticks to run.
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        // Overrun beyond the cap is dropped, not carried over
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::warn!(
                "Host loop fell behind, dropping {:.0} ms of accumulated time",
                self.accumulator.as_secs_f32() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Seconds of logic time per fixed tick
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn elapsed_secs(&self) -> f32 {
        Instant::now().duration_since(self.start_time).as_secs_f32()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }
        let total: Duration = self.frame_times.iter().sum();
        let avg = total / self.frame_times.len() as u32;
        self.current_fps = if avg.as_secs_f32() > 0.0 {
            1.0 / avg.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
    }

    #[test]
    fn test_fixed_timestep_value() {
        let game_loop = GameLoop::new();
        assert!((game_loop.fixed_timestep() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_ticks_after_waiting() {
        let mut game_loop = GameLoop::new();
        // Two fixed steps worth of wall time should yield at least one tick
        thread::sleep(Duration::from_millis(35));
        let ticks = game_loop.begin_frame();
        assert!(ticks >= 1);
        assert!(ticks <= MAX_TICKS_PER_FRAME);
        assert_eq!(game_loop.tick_count(), ticks as u64);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut game_loop = GameLoop::new();
        thread::sleep(Duration::from_millis(150));
        let ticks = game_loop.begin_frame();
        assert!(ticks <= MAX_TICKS_PER_FRAME);
    }
}
