//! Random ship placement.
//!
//! A placement picks a random empty cell, scans the open run through it
//! along a randomly chosen axis (falling back to the other axis), and drops
//! the ship at a random offset inside the run. Start points that cannot hold
//! the ship on either axis are abandoned and a fresh one is drawn.

use log::{debug, trace};
use rand::Rng;

use super::common::BoardError;
use super::config::MAX_PLACEMENT_ATTEMPTS;
use super::coordinate::Coordinate;
use super::grid::Grid;
use super::ship::{Orientation, OrientationPair, Ship};

/// Maximal run of available cells, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Run {
    /// Number of cells in the run.
    pub fn len(&self) -> usize {
        Coordinate::straight_line_distance(self.start, self.end).map_or(0, |d| d as usize + 1)
    }
}

impl Grid {
    /// Uniformly random coordinate inside the grid.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        let row = rng.random_range(0..self.rows()) as i32;
        let col = rng.random_range(0..self.cols()) as i32;
        Coordinate::new(row, col)
    }

    /// Walk from `from` in one direction while the next cell is available,
    /// stopping on the last available one.
    fn walk<F>(&self, from: Coordinate, step: F) -> Coordinate
    where
        F: Fn(Coordinate) -> Coordinate,
    {
        let mut edge = from;
        loop {
            let next = step(edge);
            if !self.is_point_available(next) {
                return edge;
            }
            edge = next;
        }
    }

    /// Open run through `origin` along `orientation`.
    pub(crate) fn scan(&self, origin: Coordinate, orientation: Orientation) -> Run {
        let run = Run {
            start: self.walk(origin, |p| orientation.retreat(p, 1)),
            end: self.walk(origin, |p| orientation.advance(p, 1)),
        };
        trace!("scan {} {:?}: {:?} ({} cells)", origin, orientation, run, run.len());
        run
    }

    /// Place `ship` at a random legal position and orientation.
    ///
    /// Gives up with [`BoardError::UnableToPlaceShip`] after
    /// [`MAX_PLACEMENT_ATTEMPTS`] start points; the grid is unchanged on
    /// any error. Returns the assigned build code.
    pub fn place_ship<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship: Ship,
    ) -> Result<u32, BoardError> {
        self.place_ship_with_limit(rng, ship, MAX_PLACEMENT_ATTEMPTS)
    }

    /// [`Grid::place_ship`] with an explicit attempt cap.
    pub fn place_ship_with_limit<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship: Ship,
        max_attempts: usize,
    ) -> Result<u32, BoardError> {
        if ship.size() == 0 {
            return Err(BoardError::InvalidShipSize { name: ship.name() });
        }
        let free = self.rows() * self.cols() - self.occupied_cells();
        if ship.size() > self.rows().max(self.cols()) || ship.size() > free {
            return Err(BoardError::ShipTooLarge {
                name: ship.name(),
                size: ship.size(),
            });
        }

        for attempt in 1..=max_attempts {
            let origin = self.random_point(rng);
            if !self.is_point_available(origin) {
                continue;
            }

            let orientations = OrientationPair::random(rng);
            let fit = orientations
                .iter()
                .map(|o| (o, self.scan(origin, o)))
                .find(|(_, run)| run.len() >= ship.size());
            let Some((orientation, run)) = fit else {
                trace!("{} does not fit through {}, retrying", ship.name(), origin);
                continue;
            };

            let wiggle = run.len() - ship.size();
            let offset = rng.random_range(0..=wiggle);
            let start = orientation.advance(run.start, offset as i32);
            debug!(
                "{} fits in {:?} after {} attempt(s), offset {}",
                ship.name(),
                run,
                attempt,
                offset
            );
            return Ok(self.build(ship, start, orientation));
        }

        Err(BoardError::UnableToPlaceShip {
            name: ship.name(),
            attempts: max_attempts,
        })
    }
}
