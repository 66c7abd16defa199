//! Match orchestration: fleet setup, turn order, the computer's move and
//! win detection.

use rand::Rng;

use crate::{
    ai,
    board::Board,
    common::{AttackResult, BoardError, GameError},
    config::{FLEET, NUM_SHIPS},
    player::{Player, Side},
    ship::{Orientation, ShipId},
};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    /// The human is deploying the fleet.
    Setup,
    /// Turns alternate between the two sides.
    InProgress,
    /// One fleet is gone. Terminal until reset.
    Finished { winner: Side },
}

/// Owns both players and decides whose move is accepted.
///
/// Every mutating call either applies completely or leaves the state as it
/// was; rejected attacks return `None` instead of an error.
#[derive(Debug, Clone)]
pub struct GameController {
    human: Player,
    computer: Player,
    phase: Phase,
    turn: Side,
    placed: [bool; NUM_SHIPS],
    generation: u64,
    turns_taken: usize,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self {
            human: Player::new(Side::Human),
            computer: Player::new(Side::Computer),
            phase: Phase::Setup,
            turn: Side::Human,
            placed: [false; NUM_SHIPS],
            generation: 0,
            turns_taken: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side allowed to fire next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Bumped by every reset. A deferred computer move captures it and is
    /// dropped if it no longer matches.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Whether fleet slot `slot` is on the human board.
    pub fn placed(&self, slot: usize) -> bool {
        self.placed.get(slot).copied().unwrap_or(false)
    }

    pub fn fleet_complete(&self) -> bool {
        self.placed.iter().all(|p| *p)
    }

    /// Resolved attacks so far, both sides.
    pub fn turns_taken(&self) -> usize {
        self.turns_taken
    }

    /// Place human fleet slot `slot` with its origin at `(x, y)`.
    pub fn place_ship(
        &mut self,
        slot: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::NotInSetup);
        }
        let def = *FLEET.get(slot).ok_or(BoardError::InvalidIndex)?;
        if self.placed[slot] {
            return Err(BoardError::ShipAlreadyPlaced.into());
        }
        let id = self.human.board_mut().place_ship(def, x, y, orientation)?;
        self.placed[slot] = true;
        Ok(id)
    }

    /// Throw away the human board and deploy the whole fleet at random.
    pub fn randomize_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::NotInSetup);
        }
        let mut board = Board::new();
        ai::place_fleet(rng, &mut board)?;
        self.human.replace_board(board);
        self.placed = [true; NUM_SHIPS];
        log::debug!("human fleet auto-deployed");
        Ok(())
    }

    /// Deploy the computer fleet and open fire. The human moves first.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::NotInSetup);
        }
        if !self.fleet_complete() {
            return Err(GameError::FleetIncomplete);
        }
        let mut board = Board::new();
        ai::place_fleet(rng, &mut board)?;
        self.computer.replace_board(board);
        self.phase = Phase::InProgress;
        self.turn = Side::Human;
        log::info!("match started (generation {})", self.generation);
        Ok(())
    }

    /// Human fires at `(x, y)` on the computer board.
    ///
    /// Returns `None` when the shot is ignored: not the human's turn, no match
    /// in progress, or coordinates off the grid. A `Duplicate` leaves the turn
    /// with the human.
    pub fn attack(&mut self, x: usize, y: usize) -> Option<AttackResult> {
        if self.phase != Phase::InProgress {
            log::warn!("ignoring attack at ({}, {}): match is {:?}", x, y, self.phase);
            return None;
        }
        if self.turn != Side::Human {
            log::warn!("ignoring attack at ({}, {}): {:?} to move", x, y, self.turn);
            return None;
        }
        self.fire(Side::Human, x, y)
    }

    /// Let the computer take its shot. `generation` is the value captured when
    /// the move was scheduled; a stale value, a finished match or the wrong
    /// turn make this a no-op.
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        generation: u64,
    ) -> Option<((usize, usize), AttackResult)> {
        if generation != self.generation {
            log::debug!(
                "dropping stale computer move (generation {} != {})",
                generation,
                self.generation
            );
            return None;
        }
        if self.phase != Phase::InProgress || self.turn != Side::Computer {
            return None;
        }
        let (x, y) = ai::select_target(rng, self.human.board())?;
        self.fire(Side::Computer, x, y).map(|result| ((x, y), result))
    }

    /// Back to an empty setup. Any deferred computer move becomes stale.
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::new()
        };
        log::info!("match reset (generation {})", generation);
    }

    fn fire(&mut self, attacker: Side, x: usize, y: usize) -> Option<AttackResult> {
        let defender = match attacker.opponent() {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        };
        let result = match defender.board_mut().receive_attack(x, y) {
            Ok(result) => result,
            Err(e) => {
                log::warn!(
                    "ignoring attack on {:?} board at ({}, {}): {}",
                    defender.side(),
                    x,
                    y,
                    e
                );
                return None;
            }
        };
        if !result.is_resolved() {
            return Some(result);
        }
        self.turns_taken += 1;
        if defender.board().all_sunk() {
            self.phase = Phase::Finished { winner: attacker };
            log::info!("{:?} wins after {} shots", attacker, self.turns_taken);
        } else {
            self.turn = attacker.opponent();
        }
        Some(result)
    }
}
