//! Ship definitions, hit tracking and orientation selection.

use core::fmt;
use rand::Rng;

use super::coordinate::Coordinate;

/// Axis a ship lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Step `n` cells forward along this axis (right or down).
    pub fn advance(self, from: Coordinate, n: i32) -> Coordinate {
        match self {
            Orientation::Horizontal => from.right(n),
            Orientation::Vertical => from.down(n),
        }
    }

    /// Step `n` cells backward along this axis (left or up).
    pub fn retreat(self, from: Coordinate, n: i32) -> Coordinate {
        match self {
            Orientation::Horizontal => from.left(n),
            Orientation::Vertical => from.up(n),
        }
    }

    /// The other axis.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Both orientations, in the order placement should try them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationPair {
    pub primary: Orientation,
    pub secondary: Orientation,
}

impl OrientationPair {
    /// One fair coin flip decides which axis is tried first.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let primary = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Self {
            primary,
            secondary: primary.flipped(),
        }
    }

    /// Iterate primary then secondary.
    pub fn iter(self) -> impl Iterator<Item = Orientation> {
        [self.primary, self.secondary].into_iter()
    }
}

/// The fixed set of ship classes a fleet is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipKind {
    Battleship,
    Destroyer,
}

impl ShipKind {
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    pub const fn size(self) -> usize {
        match self {
            ShipKind::Battleship => 5,
            ShipKind::Destroyer => 4,
        }
    }
}

/// A ship with a fixed size and a running hit count.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    name: &'static str,
    size: usize,
    hits: usize,
}

impl Ship {
    /// Create an unhit ship. `size` must be positive.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self {
            name,
            size,
            hits: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Record one more hit on this ship.
    pub fn register_hit(&mut self) {
        self.hits += 1;
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits >= self.size
    }
}

impl From<ShipKind> for Ship {
    fn from(kind: ShipKind) -> Self {
        Ship::new(kind.name(), kind.size())
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, hits: {}, destroyed: {} }}",
            self.name,
            self.size,
            self.hits,
            self.is_destroyed()
        )
    }
}
