//! Game configuration: grid dimensions and the ship catalog.
//!
//! The board consumes this read-only: dimensions size the grid once at
//! construction, and the catalog resolves ship IDs to lengths and symbols
//! during placement, removal and sunk-ship detection.

use crate::common::BoardError;

/// Maximum supported rows. The renderer prints single-digit row indices.
pub const MAX_ROWS: usize = 10;
/// Maximum supported columns. The renderer prints single-digit column headers.
pub const MAX_COLS: usize = 10;

/// One catalog entry: display name, length in cells, board symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipType {
    name: String,
    length: usize,
    symbol: char,
}

impl ShipType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }
}

/// Grid dimensions plus the ship catalog for one game setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    ships: Vec<ShipType>,
}

impl GameConfig {
    /// Create a configuration with an empty ship catalog.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > MAX_COLS {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            ships: Vec::new(),
        })
    }

    /// Register a ship and return its ID. Symbols must be letters, distinct
    /// from the reserved cell markers and from every registered symbol, so
    /// symbol-to-ID lookup stays a bijection.
    pub fn add_ship(&mut self, length: usize, symbol: char, name: &str) -> Result<usize, BoardError> {
        if length == 0 || length > self.rows.max(self.cols) {
            return Err(BoardError::InvalidShipLength(length));
        }
        if !symbol.is_ascii_alphabetic() || symbol == 'X' || symbol == 'o' {
            return Err(BoardError::SymbolUnavailable(symbol));
        }
        if self.ships.iter().any(|s| s.symbol == symbol) {
            return Err(BoardError::SymbolUnavailable(symbol));
        }
        self.ships.push(ShipType {
            name: name.to_string(),
            length,
            symbol,
        });
        Ok(self.ships.len() - 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of registered ships.
    pub fn n_ships(&self) -> usize {
        self.ships.len()
    }

    /// Length of ship `id` in cells, or 0 when the ID is unknown.
    pub fn ship_length(&self, id: usize) -> usize {
        self.ships.get(id).map_or(0, |s| s.length)
    }

    /// Board symbol of ship `id`.
    pub fn ship_symbol(&self, id: usize) -> Option<char> {
        self.ships.get(id).map(|s| s.symbol)
    }

    /// Display name of ship `id`.
    pub fn ship_name(&self, id: usize) -> Option<&str> {
        self.ships.get(id).map(|s| s.name.as_str())
    }

    /// First ship ID carrying `symbol`. Registration keeps symbols unique,
    /// so at most one ID matches.
    pub fn ship_id_for_symbol(&self, symbol: char) -> Option<usize> {
        self.ships.iter().position(|s| s.symbol == symbol)
    }

    /// The classic 10x10 five-ship fleet.
    pub fn standard() -> Self {
        let ships = vec![
            ShipType { name: "Carrier".to_string(), length: 5, symbol: 'A' },
            ShipType { name: "Battleship".to_string(), length: 4, symbol: 'B' },
            ShipType { name: "Cruiser".to_string(), length: 3, symbol: 'C' },
            ShipType { name: "Submarine".to_string(), length: 3, symbol: 'S' },
            ShipType { name: "Destroyer".to_string(), length: 2, symbol: 'D' },
        ];
        Self {
            rows: MAX_ROWS,
            cols: MAX_COLS,
            ships,
        }
    }
}
