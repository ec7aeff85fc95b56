// Input facade
//
// The controller never touches devices. The host translates whatever it
// polls (keyboard, gamepad, replay) into action edges and a move axis and
// feeds them into `PlayerInput` between ticks.

pub mod action;
pub mod buffer;
pub mod player;

pub use action::Action;
pub use buffer::InputBuffer;
pub use player::PlayerInput;
