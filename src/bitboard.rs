//! Square cell sets packed into a single unsigned integer.
//!
//! The grid in [`Board`](crate::Board) is the source of truth for every cell;
//! a `BitBoard` is the cheap whole-board answer to "which cells are occupied"
//! or "which cells have already been fired at". Cells are addressed `(x, y)`
//! with bit index `y * N + x`.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};
use num_traits::{PrimInt, Unsigned};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Coordinate lies outside `[0, N)` on either axis.
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// An `N×N` set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    const CELLS: usize = N * N;
    const FITS: () = assert!(N * N <= core::mem::size_of::<T>() * 8);

    #[inline]
    fn mask() -> T {
        if Self::CELLS == core::mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Build a set from `(x, y)` coordinates.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (x, y) in cells {
            board.set(x, y)?;
        }
        Ok(board)
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `(x, y)` is in the set.
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(x, y)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Add `(x, y)` to the set.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(x, y)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Iterate the cells of the set in row-major order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }

    #[inline]
    fn index(x: usize, y: usize) -> Result<usize, BitBoardError> {
        if x >= N || y >= N {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        } else {
            Ok(y * N + x)
        }
    }

    #[inline]
    fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for y in 0..N {
            for x in 0..N {
                let bit = if self.get(x, y).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`BitBoard`], yielding `(x, y)`.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx % N, idx / N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Complement within the `N×N` board.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn not(self) -> Self {
        BitBoard::from_raw(!self.bits)
    }
}
