// Character decision core for a 2D action platformer

pub mod core;
pub mod engine;
pub mod game;
