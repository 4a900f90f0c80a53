//! Common types for the engine: game errors and attack outcomes.

use crate::grid::BitGridError;
use core::fmt;

/// Result of an attack that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttackOutcome {
    /// Attack struck an undepleted ship segment.
    Hit,
    /// Attack struck the last segment of a ship, carrying its name.
    Sunk(&'static str),
    /// Attack struck open water.
    Miss,
}

impl AttackOutcome {
    /// True when the attack struck a ship segment.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Ship length must be a positive integer.
    InvalidLength { length: usize },
    /// Board size must be a positive integer.
    InvalidSize { size: usize },
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Cell has already been attacked.
    AlreadyAttacked { row: usize, col: usize },
    /// Cell is already occupied by another ship.
    AlreadyOccupied { row: usize, col: usize },
    /// Ship is already sunk and cannot take further hits.
    AlreadySunk,
    /// No valid placement could be found for the ship.
    NoValidPlacement,
    /// The board has no placed ships.
    NoShips,
    /// Ship id is unknown or the ship is not on the board.
    ShipNotFound,
    /// Orientation string did not parse.
    InvalidOrientation(String),
    /// Game is not ready for this operation (placement incomplete or not started).
    GameNotReady,
    /// Game already has a winner.
    GameAlreadyOver,
}

impl From<BitGridError> for GameError {
    fn from(err: BitGridError) -> Self {
        match err {
            BitGridError::OutOfBounds { row, col } => GameError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidLength { length } => {
                write!(f, "Invalid ship length {}: must be a positive integer", length)
            }
            GameError::InvalidSize { size } => {
                write!(f, "Invalid board size {}: must be a positive integer", size)
            }
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinates ({}, {}) are out of bounds", row, col)
            }
            GameError::AlreadyAttacked { row, col } => {
                write!(f, "Coordinates ({}, {}) have already been attacked", row, col)
            }
            GameError::AlreadyOccupied { row, col } => {
                write!(f, "Coordinates ({}, {}) are already occupied", row, col)
            }
            GameError::AlreadySunk => write!(f, "Ship is already sunk"),
            GameError::NoValidPlacement => write!(f, "No valid placement could be found"),
            GameError::NoShips => write!(f, "There are no ships on the board"),
            GameError::ShipNotFound => write!(f, "Ship not found on the board"),
            GameError::InvalidOrientation(s) => {
                write!(f, "Invalid orientation {:?}: must be \"horizontal\" or \"vertical\"", s)
            }
            GameError::GameNotReady => write!(f, "Game is not ready: place all ships and start it"),
            GameError::GameAlreadyOver => write!(f, "Game already has a winner"),
        }
    }
}

impl std::error::Error for GameError {}
