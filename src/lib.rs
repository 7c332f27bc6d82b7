mod board;
mod common;
mod config;
mod coord;
pub mod fleet;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
