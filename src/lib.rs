mod ai;
mod common;
mod config;
pub mod console;
mod fleet;
mod game;
mod grid;
mod logging;
mod player;
mod ship;
mod target;
mod turn;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use console::{Console, Controller, TARGET_PROMPT};
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use ship::*;
pub use target::*;
pub use turn::*;
