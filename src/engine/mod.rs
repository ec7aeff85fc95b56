// Engine seams: input, animation, motion, camera, host loop

pub mod animation;
pub mod camera;
pub mod game_loop;
pub mod input;
pub mod motion;
