//! Rules engine for two-player grid-based naval combat: boards, ships,
//! turn sequencing, win detection, and a hunt/target automated opponent.

mod ai;
mod board;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod player;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{BitGrid, BitGridError, Mask, SetCells};
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
