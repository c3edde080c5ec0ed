//! Board-state engine for a two-player Battleship variant.
//!
//! The core is [`Board`]: a cell-state grid with placement validation,
//! shot resolution and win detection, sized by a [`GameConfig`] supplied
//! at construction. Around it sit a [`Player`] trait with a random
//! strategy and a [`Match`] loop for running local games.

mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;

pub use board::{Board, Cell};
pub use common::{BoardError, Direction, Point, ShotResult};
pub use config::{GameConfig, ShipType, MAX_COLS, MAX_ROWS};
pub use game::{Match, MatchOutcome, Side};
pub use logging::init_logging;
pub use player::{Player, RandomPlayer};
