//! Shared result and error types for the rule engine.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Outcome of firing at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackResult {
    /// The cell was open water; it is now marked as a miss.
    Miss,
    /// A ship segment was struck and the ship is still afloat.
    Hit,
    /// The strike took the last segment of the named ship.
    Sunk(&'static str),
    /// The cell was already resolved. Nothing changed.
    Duplicate,
}

impl AttackResult {
    /// Whether this result consumed the attacker's turn.
    pub fn is_resolved(self) -> bool {
        !matches!(self, AttackResult::Duplicate)
    }
}

/// Errors returned by [`Board`](crate::Board) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Coordinate, or part of a ship, lies outside the grid.
    OutOfBounds,
    /// Ship placement overlaps another ship.
    Overlaps,
    /// Ship length outside `MIN_SHIP_LENGTH..=BOARD_SIZE`.
    InvalidLength,
    /// Fleet slot or ship id out of range.
    InvalidIndex,
    /// That fleet slot already has a ship on the board.
    ShipAlreadyPlaced,
    /// Random placement gave up.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds => write!(f, "Coordinates are outside the board"),
            BoardError::Overlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InvalidLength => write!(f, "Ship length does not fit the board"),
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors returned by [`GameController`](crate::GameController) setup calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Fleet changes are only accepted before the match starts.
    NotInSetup,
    /// The match cannot start until every fleet slot is placed.
    FleetIncomplete,
    /// Placement rejected by the board.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotInSetup => write!(f, "The match has already started"),
            GameError::FleetIncomplete => write!(f, "Not every ship has been placed"),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
