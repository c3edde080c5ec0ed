//! Common types for the board engine: coordinates, directions, shot results
//! and board errors.

/// A cell coordinate: row then column, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub r: usize,
    pub c: usize,
}

impl Point {
    pub const fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

/// Orientation of a ship run on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Cell `i` steps along a run anchored at `tl`.
    pub(crate) fn step(self, tl: Point, i: usize) -> Point {
        match self {
            Direction::Horizontal => Point::new(tl.r, tl.c + i),
            Direction::Vertical => Point::new(tl.r + i, tl.c),
        }
    }
}

/// Result of a successful attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The shot landed in water.
    Miss,
    /// The shot hit a ship that still has segments afloat.
    Hit,
    /// The shot removed a ship's last segment; carries the sunk ship's ID.
    Sunk(usize),
}

/// Errors returned by configuration, board and match operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid dimensions outside the supported range.
    InvalidDimensions { rows: usize, cols: usize },
    /// Ship length is zero or cannot fit the grid.
    InvalidShipLength(usize),
    /// Ship symbol is reserved, non-alphabetic, or already registered.
    SymbolUnavailable(char),
    /// Ship ID not present in the configuration.
    UnknownShip,
    /// Point (or the far end of a ship run) lies outside the grid.
    OutOfBounds(Point),
    /// Attempted to place a ship whose symbol is already on the board.
    ShipAlreadyPlaced,
    /// Ship placement crosses a non-empty cell.
    ShipOverlaps,
    /// Removal run does not carry the requested ship's symbol.
    ShipNotFound,
    /// Cell was already attacked.
    AlreadyAttacked,
    /// A hit symbol has no configuration entry.
    UnknownShipHit,
    /// Random placement gave up after its retry budget.
    UnableToPlaceShip,
    /// A player strategy ran out of cells to target.
    NoTargetAvailable,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Unsupported grid dimensions {}x{}", rows, cols)
            }
            BoardError::InvalidShipLength(len) => {
                write!(f, "Ship length {} cannot fit the grid", len)
            }
            BoardError::SymbolUnavailable(sym) => {
                write!(f, "Ship symbol '{}' is unavailable", sym)
            }
            BoardError::UnknownShip => write!(f, "Ship ID not found in configuration"),
            BoardError::OutOfBounds(p) => write!(f, "Point {} is outside the grid", p),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement crosses an occupied cell"),
            BoardError::ShipNotFound => write!(f, "Ship does not occupy the given run"),
            BoardError::AlreadyAttacked => write!(f, "Cell was already attacked"),
            BoardError::UnknownShipHit => write!(f, "Hit a symbol with no configured ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::NoTargetAvailable => write!(f, "Player has no cells left to target"),
        }
    }
}

impl std::error::Error for BoardError {}
