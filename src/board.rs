//! Game board: fleet arena, placement validation, and attack resolution.
//!
//! Ships live in a fleet arena owned by the board and are addressed by
//! `ShipId` (their index in the fleet configuration). Cells reference the
//! occupying ship through that id; the struck mask is monotonic until a
//! full board reset.

use crate::common::{AttackOutcome, GameError};
use crate::grid::{BitGrid, Mask};
use crate::ship::{Orientation, Placement, Ship, ShipClass};
use core::fmt;
use rand::Rng;

/// Stable handle addressing a ship in a board's fleet.
pub type ShipId = usize;

/// Per-contestant grid holding ship placements and attack marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    struck: Mask,
    occupancy: Vec<Option<ShipId>>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an all-empty board with a fleet built from `fleet`.
    pub fn new(size: usize, fleet: &[ShipClass]) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize { size });
        }
        let ships = fleet
            .iter()
            .map(|&class| Ship::new(class))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Board {
            size,
            struck: BitGrid::new(size),
            occupancy: vec![None; size * size],
            ships,
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The fleet, in ship-id order. Unplaced ships are included.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// A single ship by id.
    pub fn ship(&self, ship_id: ShipId) -> Option<&Ship> {
        self.ships.get(ship_id)
    }

    /// True when (row, col) lies on the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// True when the cell has been attacked.
    pub fn is_struck(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.struck.get(row, col)?)
    }

    /// True when the cell holds a ship segment.
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.occupant(row, col)?.is_some())
    }

    /// Id of the ship occupying the cell, if any.
    pub fn occupant(&self, row: usize, col: usize) -> Result<Option<ShipId>, GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(self.occupancy[self.index(row, col)])
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Place a ship with its anchor at (row, col).
    ///
    /// Horizontal placements extend by increasing column, vertical ones by
    /// increasing row. Every target cell is validated in order (in bounds,
    /// unstruck, not occupied by another ship) before anything is written,
    /// so a rejected placement leaves the board untouched and the ship's
    /// previous placement intact. On success the previous placement is
    /// cleared first and the ship's hit counter reset.
    pub fn place(
        &mut self,
        ship_id: ShipId,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let len = self
            .ships
            .get(ship_id)
            .ok_or(GameError::ShipNotFound)?
            .length();

        let mut coords = Vec::with_capacity(len);
        for step in 0..len {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + step),
                Orientation::Vertical => (row + step, col),
            };
            if !self.in_bounds(r, c) {
                return Err(GameError::OutOfBounds { row: r, col: c });
            }
            if self.struck.get(r, c)? {
                return Err(GameError::AlreadyAttacked { row: r, col: c });
            }
            match self.occupancy[self.index(r, c)] {
                Some(occ) if occ != ship_id => {
                    return Err(GameError::AlreadyOccupied { row: r, col: c });
                }
                _ => {}
            }
            coords.push((r, c));
        }

        self.clear_cells(ship_id);
        for &(r, c) in &coords {
            let idx = self.index(r, c);
            self.occupancy[idx] = Some(ship_id);
        }
        let ship = &mut self.ships[ship_id];
        ship.reset();
        ship.set_placement(Placement::new(orientation, coords));
        Ok(())
    }

    /// Place a ship at a uniformly sampled anchor, trying the opposite
    /// orientation when the first fails. Candidates that fail both ways are
    /// dropped from the pool; an exhausted pool is `NoValidPlacement`. A
    /// failed call never leaves a partially placed ship.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship_id: ShipId,
    ) -> Result<(), GameError> {
        if ship_id >= self.ships.len() {
            return Err(GameError::ShipNotFound);
        }

        let mut pool = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.occupancy[self.index(row, col)].is_none()
                    && !self.struck.get(row, col)?
                {
                    pool.push((row, col));
                }
            }
        }

        while !pool.is_empty() {
            let i = rng.random_range(0..pool.len());
            let (row, col) = pool[i];
            let mut orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            for _ in 0..2 {
                if self.place(ship_id, row, col, orientation).is_ok() {
                    return Ok(());
                }
                orientation = orientation.flipped();
            }
            pool.swap_remove(i);
        }
        Err(GameError::NoValidPlacement)
    }

    /// Take a ship off the board, clearing its cells and placement record
    /// and resetting its hit counter.
    pub fn remove(&mut self, ship_id: ShipId) -> Result<(), GameError> {
        match self.ships.get(ship_id) {
            Some(ship) if ship.is_placed() => {}
            _ => return Err(GameError::ShipNotFound),
        }
        self.clear_cells(ship_id);
        let ship = &mut self.ships[ship_id];
        ship.clear_placement();
        ship.reset();
        Ok(())
    }

    fn clear_cells(&mut self, ship_id: ShipId) {
        for cell in &mut self.occupancy {
            if *cell == Some(ship_id) {
                *cell = None;
            }
        }
    }

    /// Resolve an attack on (row, col). Marks the cell struck and forwards
    /// the hit to the occupying ship. Re-attacking a struck cell is always
    /// an error, never a silent no-op.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Result<AttackOutcome, GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.struck.get(row, col)? {
            return Err(GameError::AlreadyAttacked { row, col });
        }
        self.struck.set(row, col)?;

        match self.occupancy[self.index(row, col)] {
            Some(ship_id) => {
                let ship = &mut self.ships[ship_id];
                ship.hit()?;
                if ship.is_sunk() {
                    Ok(AttackOutcome::Sunk(ship.name()))
                } else {
                    Ok(AttackOutcome::Hit)
                }
            }
            None => Ok(AttackOutcome::Miss),
        }
    }

    /// True when every ship in the fleet configuration is placed.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(|ship| ship.is_placed())
    }

    /// True when every placed ship is sunk. Checking a board with no
    /// placed ships is an error.
    pub fn all_sunk(&self) -> Result<bool, GameError> {
        let mut placed = self.ships.iter().filter(|ship| ship.is_placed()).peekable();
        if placed.peek().is_none() {
            return Err(GameError::NoShips);
        }
        Ok(placed.all(|ship| ship.is_sunk()))
    }

    /// Return the board to its post-construction state: all cells
    /// unstruck and unoccupied, all placements cleared, all hit counters
    /// zeroed.
    pub fn reset(&mut self) {
        self.struck.clear_all();
        for cell in &mut self.occupancy {
            *cell = None;
        }
        for ship in &mut self.ships {
            ship.clear_placement();
            ship.reset();
        }
    }
}

impl fmt::Display for Board {
    /// Text rendering for logs and CLI output: `S` ship, `H` hit, `M`
    /// miss, `·` open water.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let struck = self.struck.get(row, col).unwrap_or(false);
                let occupied = self.occupancy[self.index(row, col)].is_some();
                let cell = match (struck, occupied) {
                    (true, true) => 'H',
                    (true, false) => 'M',
                    (false, true) => 'S',
                    (false, false) => '·',
                };
                write!(f, "{} ", cell)?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
