//! Standard trait impls for [`SimpleVector`]: indexing, slice views,
//! comparison, hashing and formatting.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::{position::Position, vector::SimpleVector};

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    /// Panics if `index >= len()`. Use [`SimpleVector::at`] for a checked
    /// access that reports an error, or `get_unchecked` to skip the check.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<Position> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: Position) -> &T {
        &self[pos.index()]
    }
}

impl<T> IndexMut<Position> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        &mut self[pos.index()]
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    /// Equal lengths and pairwise equal elements, compared through the
    /// checked accessor.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        (0..self.len()).all(|i| match (self.at(i), other.at(i)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        })
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    /// Lexicographic comparison of the live elements.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }

    /// Lexicographic "less than". Element pairs that are neither less nor
    /// greater than each other (e.g. `NaN`) count as equivalent and the walk
    /// moves on to the next pair.
    fn lt(&self, other: &Self) -> bool {
        lexicographic_lt(self.as_slice(), other.as_slice())
    }

    fn le(&self, other: &Self) -> bool {
        !lexicographic_lt(other.as_slice(), self.as_slice())
    }

    fn gt(&self, other: &Self) -> bool {
        lexicographic_lt(other.as_slice(), self.as_slice())
    }

    fn ge(&self, other: &Self) -> bool {
        !lexicographic_lt(self.as_slice(), other.as_slice())
    }
}

fn lexicographic_lt<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> bool {
    for (a, b) in lhs.iter().zip(rhs) {
        if a < b {
            return true;
        }
        if b < a {
            return false;
        }
    }
    lhs.len() < rhs.len()
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}
