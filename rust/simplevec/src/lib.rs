//! A growable vector built on a single-owner heap array.
//!
//! [`SimpleVector<T>`] keeps a logical length on top of an
//! [`OwnedArray<T>`](simplevec_owned_array::OwnedArray) whose every slot is
//! initialized. Appends grow the capacity `0 -> 1 -> 2 -> 4 -> ...`,
//! reallocating into a fresh array that is swapped in for the old one.
//!
//! Positions handed out by [`SimpleVector::begin`], [`SimpleVector::end`],
//! [`SimpleVector::insert`] and [`SimpleVector::erase`] are plain indices
//! (see [`Position`]).
//!
//! Access comes in two flavors: `v[i]` and the unsafe `get_unchecked` for the
//! fast path, and [`SimpleVector::at`] which reports an out-of-range index as
//! an error.
//!
//! # Features
//!
//! - `serde`: (de)serialization as a sequence of the live elements.

pub mod iter;
pub mod position;
pub mod reserve;
#[cfg(feature = "serde")]
mod serde_impl;
mod traits;
pub mod vector;

#[cfg(test)]
mod tests;

pub use iter::IntoIter;
pub use position::Position;
pub use reserve::{ReserveProxy, reserve};
pub use simplevec_common::{Error, ErrorKind, Result};
pub use vector::SimpleVector;

/// Creates a [`SimpleVector`] from a literal list of elements, or from
/// `value; count`.
///
/// ```
/// use simplevec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let z = simple_vector!["x"; 2];
/// assert_eq!(z, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
