//! Player strategies: the trait the match loop drives, and the random AI.

use crate::board::Board;
use crate::common::{BoardError, Point, ShotResult};
use crate::config::GameConfig;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Interface implemented by player strategies.
pub trait Player {
    /// Place every configured ship onto the board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next target on the opponent board, or `None` when the
    /// strategy has no cell left to try.
    fn select_target(&mut self, rng: &mut SmallRng) -> Option<Point>;

    /// Feedback for the player's own last shot.
    fn handle_shot_result(&mut self, _target: Point, _result: ShotResult) {}
}

/// Random strategy: ships go to random legal positions, and shots follow a
/// pre-shuffled permutation of the grid so no cell is ever re-targeted.
pub struct RandomPlayer {
    targets: Vec<Point>,
}

impl RandomPlayer {
    pub fn new(config: &GameConfig, rng: &mut SmallRng) -> Self {
        let mut targets: Vec<Point> = (0..config.rows())
            .flat_map(|r| (0..config.cols()).map(move |c| Point::new(r, c)))
            .collect();
        targets.shuffle(rng);
        Self { targets }
    }
}

impl Player for RandomPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        for id in 0..board.config().n_ships() {
            let (tl, dir) = board.random_placement(rng, id)?;
            board.place_ship(tl, id, dir)?;
        }
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> Option<Point> {
        self.targets.pop()
    }
}
