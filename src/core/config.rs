use alloc::vec::Vec;

use super::common::BoardError;
use super::ship::ShipKind;

pub const BOARD_ROWS: usize = 10;
pub const BOARD_COLS: usize = 10;
pub const NUM_SHIPS: usize = 3;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
];

/// Letters used for row references; row 0 is `A`.
pub const ROW_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Console command that reveals every ship.
pub const CHEAT_CODE: &str = "showme";

/// Random start points tried per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Everything needed to set up and play rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub fleet: Vec<ShipKind>,
    pub alphabet: &'static str,
    pub cheat_code: &'static str,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            fleet: FLEET.to_vec(),
            alphabet: ROW_ALPHABET,
            cheat_code: CHEAT_CODE,
        }
    }
}

impl GameConfig {
    /// Default fleet and references on a `rows × cols` board.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Check that every ship can be addressed and has room on the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let max_rows = self.alphabet.chars().count();
        if self.rows > max_rows {
            return Err(BoardError::TooManyRows {
                rows: self.rows,
                max: max_rows,
            });
        }
        let longest_axis = self.rows.max(self.cols);
        if let Some(kind) = self.fleet.iter().find(|k| k.size() > longest_axis) {
            return Err(BoardError::ShipTooLarge {
                name: kind.name(),
                size: kind.size(),
            });
        }
        let cells: usize = self.fleet.iter().map(|k| k.size()).sum();
        let capacity = self.rows * self.cols;
        if cells > capacity {
            return Err(BoardError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }
}
