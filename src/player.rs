//! A contestant: one board, plus the record of its attacks on the
//! opponent.

use crate::ai;
use crate::board::Board;
use crate::common::{AttackOutcome, GameError};
use crate::grid::{BitGrid, Mask};
use rand::Rng;

/// A player (human-driven or automated) owning one board and an attack
/// history against the opponent. The opponent itself is resolved by the
/// match, not stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    board: Board,
    hits: Vec<(usize, usize)>,
    misses: Vec<(usize, usize)>,
    hit_mask: Mask,
    remaining: Mask,
}

impl Player {
    /// Create a player with an empty board. The remaining-target set
    /// starts as every coordinate of the (same-sized) opponent board.
    pub fn new(name: impl Into<String>, board: Board) -> Self {
        let size = board.size();
        let mut remaining = BitGrid::new(size);
        remaining.fill();
        Player {
            name: name.into(),
            board,
            hits: Vec::new(),
            misses: Vec::new(),
            hit_mask: BitGrid::new(size),
            remaining,
        }
    }

    /// Player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Attacks that struck a ship, in order.
    pub fn hits(&self) -> &[(usize, usize)] {
        &self.hits
    }

    /// Attacks that struck nothing, in order.
    pub fn misses(&self) -> &[(usize, usize)] {
        &self.misses
    }

    /// Coordinates on the opponent board not yet attacked.
    pub fn remaining_targets(&self) -> &Mask {
        &self.remaining
    }

    /// Attack the opponent's board and record the outcome. The remaining
    /// target set always equals all coordinates minus hits minus misses.
    pub fn attack(
        &mut self,
        opponent: &mut Board,
        row: usize,
        col: usize,
    ) -> Result<AttackOutcome, GameError> {
        let outcome = opponent.receive_attack(row, col)?;
        if outcome.is_hit() {
            self.hits.push((row, col));
            self.hit_mask.set(row, col)?;
        } else {
            self.misses.push((row, col));
        }
        self.remaining.clear(row, col)?;
        Ok(outcome)
    }

    /// Next coordinate to attack, per the hunt/target heuristic. `None`
    /// once every coordinate has been attacked.
    pub fn next_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, usize)> {
        ai::select_target(&self.hits, &self.hit_mask, &self.remaining, rng)
    }

    /// Reset board and attack history for a fresh match.
    pub fn reset(&mut self) {
        self.board.reset();
        self.hits.clear();
        self.misses.clear();
        self.hit_mask.clear_all();
        self.remaining.fill();
    }
}
