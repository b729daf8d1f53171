//! Common types for the grid engine: fire outcomes and errors.

use super::coordinate::Coordinate;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// The cell was targeted before; nothing changed.
    AlreadyFired,
    /// The cell holds no ship.
    Miss,
    /// The cell holds a ship that is still afloat.
    Hit,
    /// The shot destroyed a ship, carrying its name.
    Sunk(&'static str),
}

/// Errors returned by grid and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    InvalidDimensions { rows: usize, cols: usize },
    /// More rows than the row alphabet can address.
    TooManyRows { rows: usize, max: usize },
    /// Point lies outside the grid.
    OutOfBounds(Coordinate),
    /// Requested placement covers an occupied cell.
    ShipOverlaps(Coordinate),
    /// Ship cannot fit on this board in any orientation.
    ShipTooLarge { name: &'static str, size: usize },
    /// The fleet needs more cells than the board has.
    FleetTooLarge { cells: usize, capacity: usize },
    /// Random placement gave up after the configured number of attempts.
    UnableToPlaceShip { name: &'static str, attempts: usize },
    /// Ships need at least one cell.
    InvalidShipSize { name: &'static str },
    /// A grid cell carries a build code missing from the ship registry.
    UnknownBuildCode(u32),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid board dimensions {}x{}", rows, cols)
            }
            BoardError::TooManyRows { rows, max } => {
                write!(f, "Board has {} rows but only {} can be addressed", rows, max)
            }
            BoardError::OutOfBounds(p) => write!(f, "Point {} is outside the grid", p),
            BoardError::ShipOverlaps(p) => {
                write!(f, "Ship placement overlaps another ship at {}", p)
            }
            BoardError::ShipTooLarge { name, size } => {
                write!(f, "{} (size {}) does not fit on this board", name, size)
            }
            BoardError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
            BoardError::UnableToPlaceShip { name, attempts } => {
                write!(f, "Unable to place {} after {} attempts", name, attempts)
            }
            BoardError::InvalidShipSize { name } => write!(f, "{} has no cells", name),
            BoardError::UnknownBuildCode(code) => write!(f, "No ship registered for code {}", code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors from turning a grid reference such as `"B7"` into a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing to parse.
    Empty,
    /// Leading character is not a letter of the row alphabet.
    InvalidRow(char),
    /// Column part is missing, not a number, or zero.
    InvalidColumn(alloc::string::String),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty grid reference"),
            ParseError::InvalidRow(ch) => write!(f, "Invalid row letter '{}'", ch),
            ParseError::InvalidColumn(s) if s.is_empty() => write!(f, "Missing column number"),
            ParseError::InvalidColumn(s) => write!(f, "Invalid column number '{}'", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
