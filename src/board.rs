//! One side's grid: ship placement and attack resolution.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{AttackResult, BoardError};
use crate::config::{Mask, BOARD_SIZE, MIN_SHIP_LENGTH};
use crate::ship::{Orientation, Ship, ShipId, ShipType};

/// Placement attempts before random placement gives up.
const PLACEMENT_ATTEMPTS: usize = 1000;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Untouched open water.
    Empty,
    /// Segment `segment` of ship `ship`; `hit` once it has been struck.
    Occupied {
        ship: ShipId,
        segment: usize,
        hit: bool,
    },
    /// Open water that has been fired at.
    Miss,
}

impl Cell {
    /// Whether an attack on this cell has already been resolved.
    pub fn is_attacked(&self) -> bool {
        matches!(self, Cell::Miss | Cell::Occupied { hit: true, .. })
    }
}

/// Grid of cells plus the ships that occupy them. Ships are owned here and
/// referenced from cells by [`ShipId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    misses: Vec<(usize, usize)>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board, no ships placed.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            misses: Vec::new(),
        }
    }

    /// Cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        check_bounds(x, y)?;
        Ok(self.grid[y][x])
    }

    /// Ships in placement order; `ShipId::index` indexes this slice.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    /// Missed attacks in the order they happened.
    pub fn misses(&self) -> &[(usize, usize)] {
        &self.misses
    }

    /// `true` when every placed ship is sunk. Also `true` for a board with no
    /// ships, so only ask once the fleet is down.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Ships still afloat.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Check that a ship of `length` fits at `(x, y)` along `orientation`
    /// without touching another ship.
    pub fn can_place(
        &self,
        length: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        check_length(length)?;
        check_bounds(x, y)?;
        let (end_x, end_y) = orientation.segment(x, y, length.saturating_sub(1));
        if end_x >= BOARD_SIZE || end_y >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds);
        }
        for i in 0..length {
            let (cx, cy) = orientation.segment(x, y, i);
            if self.grid[cy][cx] != Cell::Empty {
                return Err(BoardError::Overlaps);
            }
        }
        Ok(())
    }

    /// Place a ship with its origin at `(x, y)`. Either every segment is
    /// written or nothing is.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        self.can_place(ship_type.length(), x, y, orientation)?;
        let id = ShipId::new(self.ships.len());
        let ship = Ship::new(ship_type, x, y, orientation);
        for (segment, (cx, cy)) in ship.cells().enumerate() {
            self.grid[cy][cx] = Cell::Occupied {
                ship: id,
                segment,
                hit: false,
            };
        }
        self.ships.push(ship);
        log::debug!(
            "placed {} at ({}, {}) {:?}",
            ship_type.name(),
            x,
            y,
            orientation
        );
        Ok(id)
    }

    /// Pick a random valid `(x, y, orientation)` for `ship_type`, retrying
    /// until one fits.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let len = ship_type.length();
        check_length(len)?;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - len, BOARD_SIZE - 1),
                Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - len),
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            if self.can_place(len, x, y, orientation).is_ok() {
                return Ok((x, y, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve an attack on `(x, y)`. Attacks on an already resolved cell
    /// report [`AttackResult::Duplicate`] and change nothing.
    pub fn receive_attack(&mut self, x: usize, y: usize) -> Result<AttackResult, BoardError> {
        check_bounds(x, y)?;
        let cell = self.grid[y][x];
        let result = match cell {
            Cell::Miss | Cell::Occupied { hit: true, .. } => AttackResult::Duplicate,
            Cell::Empty => {
                self.grid[y][x] = Cell::Miss;
                self.misses.push((x, y));
                AttackResult::Miss
            }
            Cell::Occupied { ship: id, segment, .. } => {
                let ship = self
                    .ships
                    .get_mut(id.index())
                    .ok_or(BoardError::InvalidIndex)?;
                ship.register_hit();
                self.grid[y][x] = Cell::Occupied {
                    ship: id,
                    segment,
                    hit: true,
                };
                if ship.is_sunk() {
                    AttackResult::Sunk(ship.name())
                } else {
                    AttackResult::Hit
                }
            }
        };
        log::debug!("attack at ({}, {}) -> {:?}", x, y, result);
        Ok(result)
    }

    /// Cells covered by any ship.
    pub fn ship_map(&self) -> Mask {
        self.mask_where(|cell| matches!(cell, Cell::Occupied { .. }))
    }

    /// Cells already fired at, hit or miss.
    pub fn attacked_mask(&self) -> Mask {
        self.mask_where(Cell::is_attacked)
    }

    fn mask_where<F: Fn(&Cell) -> bool>(&self, pred: F) -> Mask {
        let pred = &pred;
        let cells = self.grid.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, cell)| pred(cell))
                .map(move |(x, _)| (x, y))
        });
        // grid coordinates are always in bounds
        Mask::from_cells(cells).unwrap_or_default()
    }
}

fn check_length(length: usize) -> Result<(), BoardError> {
    if (MIN_SHIP_LENGTH..=BOARD_SIZE).contains(&length) {
        Ok(())
    } else {
        Err(BoardError::InvalidLength)
    }
}

fn check_bounds(x: usize, y: usize) -> Result<(), BoardError> {
    if x >= BOARD_SIZE || y >= BOARD_SIZE {
        Err(BoardError::OutOfBounds)
    } else {
        Ok(())
    }
}
