//! Everything needed to drive a match, in one import.

pub use crate::{
    ai, AttackResult, Board, GameController, GameError, Orientation, Phase, Side, BOARD_SIZE,
    FLEET,
};

#[cfg(feature = "std")]
pub use crate::{GameConfig, Session, SessionEvent};
