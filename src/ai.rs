//! Computer opponent: random fleet deployment and uniform random targeting.
//! Every open cell is equally likely; earlier hits do not steer the next shot.

use rand::Rng;

use crate::{board::Board, common::BoardError, config::FLEET};

/// Deploy the whole fleet onto `board`, one random valid placement per ship.
/// On error the board may hold part of the fleet; callers deploy onto a
/// scratch board and swap it in.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Result<(), BoardError> {
    for def in FLEET.iter() {
        let (x, y, orientation) = board.random_placement(rng, *def)?;
        board.place_ship(*def, x, y, orientation)?;
    }
    Ok(())
}

/// Uniformly random cell of `target` that has not been fired at yet, or
/// `None` once every cell is resolved.
pub fn select_target<R: Rng + ?Sized>(rng: &mut R, target: &Board) -> Option<(usize, usize)> {
    let open = !target.attacked_mask();
    let count = open.count_ones();
    if count == 0 {
        return None;
    }
    let pick = rng.random_range(0..count);
    open.iter().nth(pick)
}
