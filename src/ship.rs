//! Ship definitions and the per-ship damage counter.

/// Axis a ship extends along from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Coordinate of segment `i` for a ship whose origin is `(x, y)`.
    #[inline]
    pub fn segment(self, x: usize, y: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Handle to a ship owned by a [`Board`](crate::Board): the index of the ship
/// in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipId(usize);

impl ShipId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship placed at an origin with an orientation, counting the hits it has
/// taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    x: usize,
    y: usize,
    orientation: Orientation,
    hits: usize,
    sunk: bool,
}

impl Ship {
    pub fn new(ship_type: ShipType, x: usize, y: usize, orientation: Orientation) -> Self {
        Self {
            ship_type,
            x,
            y,
            orientation,
            hits: 0,
            sunk: false,
        }
    }

    /// Count one more hit. The caller is responsible for never reporting the
    /// same segment twice.
    pub fn register_hit(&mut self) {
        self.hits += 1;
        if self.hits >= self.ship_type.length() {
            self.sunk = true;
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship `(x, y)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, origin first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x, y, orientation) = (self.x, self.y, self.orientation);
        (0..self.ship_type.length()).map(move |i| orientation.segment(x, y, i))
    }
}
