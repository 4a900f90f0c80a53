//! Match controller: two players, turn sequencing, and win detection.

use crate::board::{Board, ShipId};
use crate::common::{AttackOutcome, GameError};
use crate::config::GameConfig;
use crate::player::Player;
use crate::ship::Orientation;
use log::{debug, info};
use rand::Rng;

/// Handle addressing one of the two players of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Top-level state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    NotStarted,
    InProgress,
    Over,
}

/// A single match between two players. All mutations either succeed with a
/// structured result or fail with a typed error; the engine never touches
/// display state.
#[derive(Debug)]
pub struct Game {
    players: [Player; 2],
    active: PlayerId,
    winner: Option<PlayerId>,
    phase: Phase,
    auto_start: bool,
}

impl Game {
    /// Create a match with the default configuration: 10×10 boards and the
    /// classic five-ship fleet on both sides.
    pub fn new(
        name_one: impl Into<String>,
        name_two: impl Into<String>,
    ) -> Result<Self, GameError> {
        Self::with_config(name_one, name_two, &GameConfig::default())
    }

    /// Create a match from an explicit configuration.
    pub fn with_config(
        name_one: impl Into<String>,
        name_two: impl Into<String>,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        let board_one = Board::new(config.board_size, &config.fleet)?;
        let board_two = Board::new(config.board_size, &config.fleet)?;
        Ok(Game {
            players: [
                Player::new(name_one, board_one),
                Player::new(name_two, board_two),
            ],
            active: PlayerId::One,
            winner: None,
            phase: Phase::NotStarted,
            auto_start: config.auto_start_on_attack,
        })
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// The winner, once the match is over.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Current phase of the match.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while attacks are being exchanged.
    pub fn in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Read access to a player: name, board, ship status, attack history.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    fn placement_guard(&self) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if self.phase == Phase::InProgress {
            return Err(GameError::GameNotReady);
        }
        Ok(())
    }

    /// Place one of `id`'s ships with its anchor at (row, col). Refused
    /// once the match is running or decided.
    pub fn place_ship(
        &mut self,
        id: PlayerId,
        ship_id: ShipId,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.placement_guard()?;
        self.players[id.index()]
            .board_mut()
            .place(ship_id, row, col, orientation)
    }

    /// Take one of `id`'s ships off its board.
    pub fn remove_ship(&mut self, id: PlayerId, ship_id: ShipId) -> Result<(), GameError> {
        self.placement_guard()?;
        self.players[id.index()].board_mut().remove(ship_id)
    }

    /// Randomly place every ship of `id`'s fleet.
    pub fn place_all_ships_random<R: Rng + ?Sized>(
        &mut self,
        id: PlayerId,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.placement_guard()?;
        let board = self.players[id.index()].board_mut();
        for ship_id in 0..board.ships().len() {
            board.place_random(rng, ship_id)?;
        }
        debug!("{}: fleet placed at random", self.players[id.index()].name());
        Ok(())
    }

    /// Take all of `id`'s placed ships off its board.
    pub fn reset_all_ships(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.placement_guard()?;
        let board = self.players[id.index()].board_mut();
        for ship_id in 0..board.ships().len() {
            if board.ship(ship_id).is_some_and(|ship| ship.is_placed()) {
                board.remove(ship_id)?;
            }
        }
        Ok(())
    }

    /// Begin exchanging attacks. Both fleets must be fully placed.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let ready = !self.players[0].board().ships().is_empty()
            && self.players.iter().all(|p| p.board().all_placed());
        if !ready {
            return Err(GameError::GameNotReady);
        }
        self.phase = Phase::InProgress;
        debug!(
            "game started: {} vs {}",
            self.players[0].name(),
            self.players[1].name()
        );
        Ok(())
    }

    fn switch_turn(&mut self) {
        self.active = self.active.opponent();
    }

    /// Attack (row, col) on the opposing board as the active player. The
    /// winner check runs before any turn switch, so the winning attack
    /// leaves the victor active.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<AttackOutcome, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        match self.phase {
            Phase::InProgress => {}
            Phase::NotStarted if self.auto_start => self.start()?,
            _ => return Err(GameError::GameNotReady),
        }

        let (left, right) = self.players.split_at_mut(1);
        let (attacker, defender) = match self.active {
            PlayerId::One => (&mut left[0], &mut right[0]),
            PlayerId::Two => (&mut right[0], &mut left[0]),
        };
        let outcome = attacker.attack(defender.board_mut(), row, col)?;
        debug!(
            "{} attacks ({}, {}): {:?}",
            attacker.name(),
            row,
            col,
            outcome
        );

        match self.check_winner()? {
            Some(winner) => info!("{} wins", self.player(winner).name()),
            None => self.switch_turn(),
        }
        Ok(outcome)
    }

    /// Set the winner when either fleet is fully sunk. The winner is the
    /// other player; the phase moves to `Over`.
    fn check_winner(&mut self) -> Result<Option<PlayerId>, GameError> {
        let winner = if self.players[0].board().all_sunk()? {
            PlayerId::Two
        } else if self.players[1].board().all_sunk()? {
            PlayerId::One
        } else {
            return Ok(None);
        };
        self.winner = Some(winner);
        self.phase = Phase::Over;
        Ok(Some(winner))
    }

    /// Re-initialize the match: empty boards, cleared histories, no
    /// winner, player one active, phase `NotStarted`.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.winner = None;
        self.active = PlayerId::One;
        self.phase = Phase::NotStarted;
    }
}
