//! Core grid engine (no_std compatible)
//!
//! Ship placement, fire resolution and round bookkeeping. Needs only
//! `alloc`, `rand` and the `log` facade.

pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod grid;
pub mod parse;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use common::{BoardError, FireOutcome, ParseError};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{GameEngine, GameStatus};
pub use grid::{CellSymbol, Grid, EMPTY};
pub use parse::{format_coordinate, parse_coordinate};
pub use ship::{Orientation, OrientationPair, Ship, ShipKind};
