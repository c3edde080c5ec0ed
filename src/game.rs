//! Turn sequencing for a local two-player match.

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::config::GameConfig;
use crate::player::Player;
use log::{debug, info};
use rand::rngs::SmallRng;

/// Which side of the match a board or player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Side::First => write!(f, "Player 1"),
            Side::Second => write!(f, "Player 2"),
        }
    }
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: Side,
    /// Total shots fired by both sides.
    pub shots: usize,
}

/// A local match: two boards, two strategies, alternating single shots.
pub struct Match {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
}

impl Match {
    /// Set up a match: a fresh board per side, optionally obstructed while
    /// each strategy places its ships, then unblocked before play begins.
    pub fn new(
        config: &GameConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        obstacles: bool,
        rng: &mut SmallRng,
    ) -> Result<Self, BoardError> {
        let mut game = Self {
            boards: [Board::new(config.clone()), Board::new(config.clone())],
            players: [first, second],
        };
        for i in 0..2 {
            if obstacles {
                game.boards[i].block(rng);
            }
            game.players[i].place_ships(rng, &mut game.boards[i])?;
            game.boards[i].unblock();
        }
        Ok(game)
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Run the match to completion. Sides alternate single shots with the
    /// first player firing first; the match ends on the shot that clears
    /// the last live ship cell of either board.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<MatchOutcome, BoardError> {
        let mut shots = 0;
        let mut side = Side::First;
        loop {
            let attacker = side.index();
            let defender = side.other().index();
            let target = self.players[attacker]
                .select_target(rng)
                .ok_or(BoardError::NoTargetAvailable)?;
            let result = self.boards[defender].attack(target)?;
            self.players[attacker].handle_shot_result(target, result);
            shots += 1;
            debug!("{} fires at {}: {:?}", side, target, result);
            if let ShotResult::Sunk(id) = result {
                if let Some(name) = self.boards[defender].config().ship_name(id) {
                    info!("{} sank the opposing {}", side, name);
                }
            }
            if self.boards[defender].all_destroyed() {
                info!("{} wins after {} shots", side, shots);
                return Ok(MatchOutcome { winner: side, shots });
            }
            side = side.other();
        }
    }
}
