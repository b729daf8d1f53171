//! Grid state: cell occupancy, fired-at tracking and the ship registry.
//!
//! Cells hold a build code, `0` for open water and a positive number for the
//! ship occupying it. Every positive code is a key of the registry, and the
//! cells sharing a code form one straight run as long as that ship.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use log::debug;

use super::common::{BoardError, FireOutcome};
use super::coordinate::Coordinate;
use super::ship::{Orientation, Ship};

/// Cell code for open water.
pub const EMPTY: u32 = 0;

/// What a single cell shows in a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSymbol {
    /// Not fired at yet.
    Unknown,
    /// Fired at, nothing there.
    Miss,
    /// Fired at, ship still afloat.
    Hit,
    /// A raw cell code: a sunk ship in the player view, anything in the
    /// omniscient view.
    Code(u32),
}

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSymbol::Unknown => f.write_str("?"),
            CellSymbol::Miss => f.write_str("-"),
            CellSymbol::Hit => f.write_str("X"),
            CellSymbol::Code(code) => write!(f, "{}", code),
        }
    }
}

/// State of one round: occupancy, shots and ships.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
    fired_at: Vec<bool>,
    ships: BTreeMap<u32, Ship>,
    next_code: u32,
    ships_sunk: usize,
}

impl Grid {
    /// Create an empty `rows × cols` grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || i32::try_from(rows.max(cols)).is_err() {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: alloc::vec![EMPTY; rows * cols],
            fired_at: alloc::vec![false; rows * cols],
            ships: BTreeMap::new(),
            next_code: 1,
            ships_sunk: 0,
        })
    }

    /// Clear every cell, shot and ship, and restart build codes at 1.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = EMPTY);
        self.fired_at.iter_mut().for_each(|f| *f = false);
        self.ships.clear();
        self.next_code = 1;
        self.ships_sunk = 0;
        debug!("grid {}x{} reset", self.rows, self.cols);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, point: Coordinate) -> Option<usize> {
        if self.is_point_valid(point) {
            Some(point.row as usize * self.cols + point.col as usize)
        } else {
            None
        }
    }

    /// Bounds check only.
    pub fn is_point_valid(&self, point: Coordinate) -> bool {
        point.row >= 0
            && point.col >= 0
            && (point.row as usize) < self.rows
            && (point.col as usize) < self.cols
    }

    /// In bounds and not occupied by any ship.
    pub fn is_point_available(&self, point: Coordinate) -> bool {
        self.cell(point) == Some(EMPTY)
    }

    /// Cell code at `point`, or `None` outside the grid.
    pub fn cell(&self, point: Coordinate) -> Option<u32> {
        self.index(point).map(|i| self.cells[i])
    }

    pub fn is_fired_at(&self, point: Coordinate) -> bool {
        self.index(point).is_some_and(|i| self.fired_at[i])
    }

    /// Ship registered under `code`.
    pub fn ship(&self, code: u32) -> Option<&Ship> {
        self.ships.get(&code)
    }

    /// Registered ships in build-code order.
    pub fn ships(&self) -> impl Iterator<Item = (u32, &Ship)> {
        self.ships.iter().map(|(code, ship)| (*code, ship))
    }

    pub fn total_ships(&self) -> usize {
        self.ships.len()
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    pub fn ships_remaining(&self) -> usize {
        self.total_ships() - self.ships_sunk
    }

    /// Number of cells holding a ship.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Place `ship` with its first cell at `start`, extending right or down.
    ///
    /// Fails without touching the grid when the ship is empty or any cell
    /// is out of bounds or already occupied. Returns the assigned build code.
    pub fn place_ship_at(
        &mut self,
        ship: Ship,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<u32, BoardError> {
        if ship.size() == 0 {
            return Err(BoardError::InvalidShipSize { name: ship.name() });
        }
        let mut point = start;
        for _ in 0..ship.size() {
            match self.cell(point) {
                None => return Err(BoardError::OutOfBounds(point)),
                Some(EMPTY) => {}
                Some(_) => return Err(BoardError::ShipOverlaps(point)),
            }
            point = orientation.advance(point, 1);
        }
        Ok(self.build(ship, start, orientation))
    }

    /// Write a fresh build code over `ship.size()` cells and register the ship.
    /// Callers have already checked that every cell is available.
    pub(crate) fn build(&mut self, ship: Ship, start: Coordinate, orientation: Orientation) -> u32 {
        let code = self.next_code;
        self.next_code += 1;

        let mut point = start;
        for built in 0..ship.size() {
            if built > 0 {
                point = orientation.advance(point, 1);
            }
            if let Some(i) = self.index(point) {
                self.cells[i] = code;
            }
        }
        debug!(
            "placed {} (code {}) at {} {:?}",
            ship.name(),
            code,
            start,
            orientation
        );
        self.ships.insert(code, ship);
        code
    }

    /// Fire at `point`, updating shot and hit state.
    ///
    /// Repeated shots report [`FireOutcome::AlreadyFired`] and change nothing.
    pub fn fire(&mut self, point: Coordinate) -> Result<FireOutcome, BoardError> {
        let idx = self.index(point).ok_or(BoardError::OutOfBounds(point))?;
        if self.fired_at[idx] {
            return Ok(FireOutcome::AlreadyFired);
        }
        let code = self.cells[idx];
        if code == EMPTY {
            self.fired_at[idx] = true;
            return Ok(FireOutcome::Miss);
        }

        let ship = self
            .ships
            .get_mut(&code)
            .ok_or(BoardError::UnknownBuildCode(code))?;
        ship.register_hit();
        let (name, destroyed) = (ship.name(), ship.is_destroyed());
        self.fired_at[idx] = true;
        if destroyed {
            self.ships_sunk += 1;
            debug!(
                "{} (code {}) sunk, {} remaining",
                name,
                code,
                self.ships_remaining()
            );
            Ok(FireOutcome::Sunk(name))
        } else {
            Ok(FireOutcome::Hit)
        }
    }

    /// What the player may see: only fired-at cells are revealed, and ship
    /// identities only once sunk.
    pub fn render_player_view(&self) -> Vec<Vec<CellSymbol>> {
        self.view(|grid, i| {
            if !grid.fired_at[i] {
                return CellSymbol::Unknown;
            }
            match grid.cells[i] {
                EMPTY => CellSymbol::Miss,
                code if grid.ship(code).is_some_and(|s| s.is_destroyed()) => {
                    CellSymbol::Code(code)
                }
                _ => CellSymbol::Hit,
            }
        })
    }

    /// Raw cell codes for every cell.
    pub fn render_omniscient_view(&self) -> Vec<Vec<CellSymbol>> {
        self.view(|grid, i| CellSymbol::Code(grid.cells[i]))
    }

    fn view<F>(&self, symbol: F) -> Vec<Vec<CellSymbol>>
    where
        F: Fn(&Self, usize) -> CellSymbol,
    {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| symbol(self, r * self.cols + c)).collect())
            .collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.rows, self.cols)?;
        for row in self.render_omniscient_view() {
            f.write_str("  ")?;
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "  ships: {:?}, sunk: {}",
            self.ships.values().collect::<Vec<_>>(),
            self.ships_sunk
        )?;
        write!(f, "}}")
    }
}
