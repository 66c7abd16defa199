use crate::board::Board;

/// Which side of the table a player sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// A side paired with the board holding its fleet.
#[derive(Debug, Clone)]
pub struct Player {
    side: Side,
    board: Board,
}

impl Player {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            board: Board::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Swap in a fully prepared board, dropping the old one.
    pub(crate) fn replace_board(&mut self, board: Board) {
        self.board = board;
    }
}
