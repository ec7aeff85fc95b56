// Gameplay logic

pub mod player;
