//! Index-based positions into a [`SimpleVector`](crate::SimpleVector).
//!
//! A `Position` is a plain slot index. It carries no borrow of the vector, so
//! it stays usable across mutations; whether it still designates the element
//! it was obtained for is the caller's concern. After `insert` or `erase`
//! only the returned position (and positions before the mutation point) keep
//! their meaning.

use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    #[inline]
    pub const fn new(index: usize) -> Position {
        Position(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Position {
    #[inline]
    fn from(index: usize) -> Self {
        Position(index)
    }
}

impl From<Position> for usize {
    #[inline]
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl Add<usize> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: usize) -> Position {
        Position(self.0 + rhs)
    }
}

impl AddAssign<usize> for Position {
    #[inline]
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: usize) -> Position {
        Position(self.0 - rhs)
    }
}

impl SubAssign<usize> for Position {
    #[inline]
    fn sub_assign(&mut self, rhs: usize) {
        self.0 -= rhs;
    }
}

/// Distance between two positions. Panics if `rhs` is past `self`.
impl Sub<Position> for Position {
    type Output = usize;

    #[inline]
    fn sub(self, rhs: Position) -> usize {
        self.0 - rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_arithmetic() {
        let mut p = Position::new(3);
        assert_eq!((p + 2).index(), 5);
        assert_eq!((p - 3).index(), 0);
        p += 4;
        assert_eq!(p, Position::from(7));
        p -= 1;
        assert_eq!(usize::from(p), 6);
        assert_eq!(p - Position::new(2), 4);
        assert!(Position::new(1) < Position::new(2));
    }
}
