#![cfg(feature = "std")]

use std::fmt;

use crate::{
    config::BOARD_SIZE,
    view::{BoardView, CellView, GameSnapshot},
};

impl CellView {
    pub fn symbol(self) -> char {
        match self {
            CellView::Water => '.',
            CellView::Ship => 'S',
            CellView::Hit => 'X',
            CellView::Sunk => '#',
            CellView::Miss => 'o',
        }
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + x as u8) as char)?;
        }
        writeln!(f)?;
        for (y, row) in self.rows.iter().enumerate() {
            write!(f, "  {:2}", y + 1)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        for ship in &self.ships {
            let status = if ship.sunk { "SUNK" } else { "Active" };
            writeln!(
                f,
                "    {} ({}): {} [{}/{}]",
                ship.name, ship.length, status, ship.hits, ship.length
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Enemy waters:")?;
        write!(f, "{}", self.target)?;
        writeln!(f, "\nYour fleet:")?;
        write!(f, "{}", self.own)?;
        write!(f, "    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water")
    }
}
