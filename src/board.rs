//! Game board state: the cell grid and the placement and attack rules.

use crate::common::{BoardError, Direction, Point, ShotResult};
use crate::config::GameConfig;
use core::fmt;
use rand::Rng;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water.
    Empty,
    /// Pre-game obstruction. Water as far as attacks are concerned.
    Blocked,
    /// Live ship segment, tagged with the ship's symbol.
    Ship(char),
    /// A shot that found a ship segment.
    Hit,
    /// A shot that found water.
    Miss,
}

impl Cell {
    /// Character used when rendering this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Blocked => '#',
            Cell::Ship(s) => s,
            Cell::Hit => 'X',
            Cell::Miss => 'o',
        }
    }
}

/// A rectangular grid of cells sized by the game configuration.
///
/// Fallible operations either complete fully or leave the grid untouched;
/// callers never observe a partially placed or partially removed ship.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of the configured dimensions, all cells empty.
    pub fn new(config: GameConfig) -> Self {
        let cells = vec![Cell::Empty; config.rows() * config.cols()];
        Board { config, cells }
    }

    /// The configuration this board was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    fn in_bounds(&self, p: Point) -> bool {
        p.r < self.rows() && p.c < self.cols()
    }

    fn idx(&self, p: Point) -> usize {
        p.r * self.cols() + p.c
    }

    /// Cell at `p`, if it lies on the board.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if self.in_bounds(p) {
            Some(self.cells[self.idx(p)])
        } else {
            None
        }
    }

    /// Reset every cell to open water.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Obstruct the board for pre-game setup: every empty cell independently
    /// becomes blocked on a coin flip. One draw is taken per cell regardless
    /// of its state.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            let blocked = rng.random_range(0..2) == 0;
            if blocked && *cell == Cell::Empty {
                *cell = Cell::Blocked;
            }
        }
    }

    /// Revert every blocked cell to open water. Other cells are untouched.
    pub fn unblock(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Blocked {
                *cell = Cell::Empty;
            }
        }
    }

    /// Render the board as text: a column-index header, then one line per
    /// row prefixed with its index, no separators between cells.
    ///
    /// With `show_shots` the viewer is the opponent: un-hit ship segments
    /// are concealed as open water, while hits and misses always show. With
    /// `show_shots == false` every cell shows its true state (the owner's
    /// view).
    pub fn render(&self, show_shots: bool) -> String {
        let mut out = String::with_capacity((self.cols() + 3) * (self.rows() + 1));
        out.push_str("  ");
        for c in 0..self.cols() {
            out.push((b'0' + c as u8) as char);
        }
        out.push('\n');
        for r in 0..self.rows() {
            out.push((b'0' + r as u8) as char);
            out.push(' ');
            for c in 0..self.cols() {
                let cell = self.cells[r * self.cols() + c];
                let shown = match cell {
                    Cell::Ship(_) if show_shots => Cell::Empty,
                    other => other,
                };
                out.push(shown.symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Place ship `ship_id` with its anchor at `tl`, running in `dir`.
    ///
    /// Every check must pass before anything is written: the ID resolves to
    /// a configured ship, the whole run stays in bounds, the ship's symbol
    /// is nowhere on the board yet, and every target cell is empty.
    pub fn place_ship(&mut self, tl: Point, ship_id: usize, dir: Direction) -> Result<(), BoardError> {
        let length = self.config.ship_length(ship_id);
        if length == 0 {
            return Err(BoardError::UnknownShip);
        }
        let symbol = self.config.ship_symbol(ship_id).ok_or(BoardError::UnknownShip)?;
        if !self.in_bounds(tl) {
            return Err(BoardError::OutOfBounds(tl));
        }
        let last = dir.step(tl, length - 1);
        if !self.in_bounds(last) {
            return Err(BoardError::OutOfBounds(last));
        }
        // A ship may be placed once; scan the whole grid for its symbol.
        if self.cells.iter().any(|&cell| cell == Cell::Ship(symbol)) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        for i in 0..length {
            let p = dir.step(tl, i);
            if self.cells[self.idx(p)] != Cell::Empty {
                return Err(BoardError::ShipOverlaps);
            }
        }
        for i in 0..length {
            let p = dir.step(tl, i);
            let idx = self.idx(p);
            self.cells[idx] = Cell::Ship(symbol);
        }
        Ok(())
    }

    /// Remove ship `ship_id` whose run starts at `tl` in `dir`.
    ///
    /// The `length` cells of the run must all carry exactly this ship's
    /// symbol. On success every cell holding the symbol anywhere on the
    /// board reverts to open water, not just the run.
    pub fn remove_ship(&mut self, tl: Point, ship_id: usize, dir: Direction) -> Result<(), BoardError> {
        let length = self.config.ship_length(ship_id);
        if length == 0 {
            return Err(BoardError::UnknownShip);
        }
        let symbol = self.config.ship_symbol(ship_id).ok_or(BoardError::UnknownShip)?;
        for i in 0..length {
            let p = dir.step(tl, i);
            if self.cell(p) != Some(Cell::Ship(symbol)) {
                return Err(BoardError::ShipNotFound);
            }
        }
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Ship(symbol) {
                *cell = Cell::Empty;
            }
        }
        Ok(())
    }

    /// Resolve a shot at `p`.
    ///
    /// Out-of-bounds points and cells already marked hit or miss fail
    /// without mutating anything. Water (empty or blocked alike) records a
    /// miss; a ship segment records a hit, and when no segment of that ship
    /// survives anywhere on the grid the result reports the sunk ship's ID.
    pub fn attack(&mut self, p: Point) -> Result<ShotResult, BoardError> {
        if !self.in_bounds(p) {
            return Err(BoardError::OutOfBounds(p));
        }
        let idx = self.idx(p);
        match self.cells[idx] {
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyAttacked),
            Cell::Ship(symbol) => {
                self.cells[idx] = Cell::Hit;
                if self.cells.iter().any(|&cell| cell == Cell::Ship(symbol)) {
                    Ok(ShotResult::Hit)
                } else {
                    match self.config.ship_id_for_symbol(symbol) {
                        Some(id) => Ok(ShotResult::Sunk(id)),
                        // Unreachable for ships placed through place_ship.
                        None => Err(BoardError::UnknownShipHit),
                    }
                }
            }
            Cell::Empty | Cell::Blocked => {
                self.cells[idx] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
        }
    }

    /// True when no live ship segment remains anywhere on the board.
    pub fn all_destroyed(&self) -> bool {
        !self.cells.iter().any(|cell| matches!(cell, Cell::Ship(_)))
    }

    /// Pick a random legal placement for `ship_id` against the current
    /// occupancy: orientation and anchor drawn uniformly, retried up to 100
    /// times. Does not mutate the board.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_id: usize,
    ) -> Result<(Point, Direction), BoardError> {
        let length = self.config.ship_length(ship_id);
        if length == 0 {
            return Err(BoardError::UnknownShip);
        }
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let dir = if rng.random() {
                Direction::Horizontal
            } else {
                Direction::Vertical
            };
            let (max_r, max_c) = match dir {
                Direction::Horizontal if length <= self.cols() => {
                    (self.rows() - 1, self.cols() - length)
                }
                Direction::Vertical if length <= self.rows() => {
                    (self.rows() - length, self.cols() - 1)
                }
                _ => continue,
            };
            let tl = Point::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let open = (0..length).all(|i| {
                let p = dir.step(tl, i);
                self.cells[self.idx(p)] == Cell::Empty
            });
            if open {
                return Ok((tl, dir));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}:", self.rows(), self.cols())?;
        f.write_str(&self.render(false))
    }
}
