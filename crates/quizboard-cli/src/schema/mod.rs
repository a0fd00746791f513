pub mod game;
pub mod recording;
