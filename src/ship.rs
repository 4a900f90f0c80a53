//! Ship entity: class definitions, orientation, and placement records.

use crate::common::GameError;
use core::fmt;
use core::str::FromStr;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(GameError::InvalidOrientation(s.to_string())),
        }
    }
}

/// Class of ship: name and segment length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Segment length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Where a ship currently sits on a board: orientation plus the ordered
/// coordinate list, contiguous and monotonic along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    orientation: Orientation,
    coords: Vec<(usize, usize)>,
}

impl Placement {
    pub(crate) fn new(orientation: Orientation, coords: Vec<(usize, usize)>) -> Self {
        Self {
            orientation,
            coords,
        }
    }

    /// Orientation of the placed ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Coordinates occupied by the ship, anchor first.
    pub fn coords(&self) -> &[(usize, usize)] {
        &self.coords
    }
}

/// A ship in a board's fleet: fixed-length entity tracking its hit count
/// and, once placed, its placement record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    hits: usize,
    placement: Option<Placement>,
}

impl Ship {
    /// Create an intact, unplaced ship of the given class.
    pub fn new(class: ShipClass) -> Result<Self, GameError> {
        if class.length() == 0 {
            return Err(GameError::InvalidLength { length: 0 });
        }
        Ok(Ship {
            class,
            hits: 0,
            placement: None,
        })
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    /// Segment length.
    pub fn length(&self) -> usize {
        self.class.length()
    }

    /// Number of segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// True once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.class.length()
    }

    /// Register one hit. Hitting an already-sunk ship is an error, so
    /// `hits` can never exceed `length`.
    pub fn hit(&mut self) -> Result<(), GameError> {
        if self.is_sunk() {
            return Err(GameError::AlreadySunk);
        }
        self.hits += 1;
        Ok(())
    }

    /// Reset the hit counter. The placement record is owned by the board
    /// and cleared there.
    pub fn reset(&mut self) {
        self.hits = 0;
    }

    /// True while the ship sits on a board.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Current placement record, if placed.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Orientation of the current placement, if placed.
    pub fn orientation(&self) -> Option<Orientation> {
        self.placement.as_ref().map(|p| p.orientation())
    }

    /// Coordinates of the current placement; empty while unplaced.
    pub fn coordinates(&self) -> &[(usize, usize)] {
        self.placement.as_ref().map_or(&[], |p| p.coords())
    }

    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    pub(crate) fn clear_placement(&mut self) {
        self.placement = None;
    }
}
