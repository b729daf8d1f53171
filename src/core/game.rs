use log::debug;
use rand::Rng;

use super::{
    common::{BoardError, FireOutcome},
    config::GameConfig,
    coordinate::Coordinate,
    grid::Grid,
    ship::Ship,
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No ships placed yet.
    Setup,
    InProgress,
    /// Every ship has been sunk.
    Won,
}

/// Round lifecycle: fleet setup, shots and completion.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    shots: usize,
}

impl GameEngine {
    /// Create an engine with an empty grid. Call [`GameEngine::new_round`]
    /// to place the fleet.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        Ok(Self {
            config,
            grid,
            shots: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Immutable reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable reference to the grid for manual placement.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Clear the grid and place the whole fleet at random.
    ///
    /// On error the grid is left empty.
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.grid.reset();
        self.shots = 0;
        for kind in self.config.fleet.iter().copied() {
            if let Err(e) = self.grid.place_ship(rng, Ship::from(kind)) {
                self.grid.reset();
                return Err(e);
            }
        }
        debug!(
            "round ready: {} ships on {}x{}",
            self.grid.total_ships(),
            self.config.rows,
            self.config.cols
        );
        Ok(())
    }

    /// Fire at `point`. Out-of-bounds points are rejected before reaching
    /// the grid; repeated shots are not counted.
    pub fn fire(&mut self, point: Coordinate) -> Result<FireOutcome, BoardError> {
        if !self.grid.is_point_valid(point) {
            return Err(BoardError::OutOfBounds(point));
        }
        let outcome = self.grid.fire(point)?;
        if outcome != FireOutcome::AlreadyFired {
            self.shots += 1;
        }
        Ok(outcome)
    }

    pub fn ships_remaining(&self) -> usize {
        self.grid.ships_remaining()
    }

    /// Shots that hit a fresh cell this round.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    /// Evaluate the current round status.
    pub fn status(&self) -> GameStatus {
        if self.grid.total_ships() == 0 {
            GameStatus::Setup
        } else if self.grid.ships_remaining() == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
