//! Read-only snapshots handed to whatever draws the game.

use alloc::vec::Vec;

use crate::{
    board::{Board, Cell},
    game::{GameController, Phase},
    player::Side,
};

/// What a renderer should draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellView {
    /// Nothing known, or open water.
    Water,
    /// Intact ship segment. Only shown on revealed boards.
    Ship,
    /// Struck segment of a ship still afloat.
    Hit,
    /// Segment of a sunk ship.
    Sunk,
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipView {
    pub name: &'static str,
    pub length: usize,
    pub hits: usize,
    pub sunk: bool,
}

/// Per-cell view of a board, rows indexed by `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardView {
    pub rows: Vec<Vec<CellView>>,
    /// All ships when revealed, otherwise only the sunk ones.
    pub ships: Vec<ShipView>,
    pub all_sunk: bool,
}

impl BoardView {
    /// `reveal` shows intact ships; use it for the viewer's own board.
    pub fn new(board: &Board, reveal: bool) -> Self {
        let ships = board.ships();
        let rows = (0..crate::BOARD_SIZE)
            .map(|y| {
                (0..crate::BOARD_SIZE)
                    .map(|x| match board.cell(x, y).unwrap_or(Cell::Empty) {
                        Cell::Empty => CellView::Water,
                        Cell::Miss => CellView::Miss,
                        Cell::Occupied { ship, hit, .. } => {
                            let sunk = board.ship(ship).map_or(false, |s| s.is_sunk());
                            match (hit, sunk) {
                                (true, true) => CellView::Sunk,
                                (true, false) => CellView::Hit,
                                (false, _) if reveal => CellView::Ship,
                                (false, _) => CellView::Water,
                            }
                        }
                    })
                    .collect()
            })
            .collect();
        let ships = ships
            .iter()
            .filter(|s| reveal || s.is_sunk())
            .map(|s| ShipView {
                name: s.name(),
                length: s.length(),
                hits: s.hits(),
                sunk: s.is_sunk(),
            })
            .collect();
        Self {
            rows,
            ships,
            all_sunk: board.all_sunk() && !board.ships().is_empty(),
        }
    }

    pub fn at(&self, x: usize, y: usize) -> Option<CellView> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }
}

/// Everything the human may see after a call: both boards, phase and turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub phase: Phase,
    pub turn: Side,
    pub own: BoardView,
    pub target: BoardView,
    pub turns_taken: usize,
}

impl GameSnapshot {
    pub fn new(game: &GameController) -> Self {
        Self {
            phase: game.phase(),
            turn: game.turn(),
            own: BoardView::new(game.human().board(), true),
            target: BoardView::new(game.computer().board(), false),
            turns_taken: game.turns_taken(),
        }
    }
}
