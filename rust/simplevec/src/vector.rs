//! The growable vector.

use simplevec_common::{Result, result::verify_index};
use simplevec_owned_array::OwnedArray;

use crate::{position::Position, reserve::ReserveProxy};

/// A growable array backed by a single [`OwnedArray`].
///
/// The backing array always holds `capacity()` initialized slots. Slots
/// `[0, len())` are the live elements; the remaining slots are either
/// default-valued or hold stale values left behind by `pop_back`, `erase`,
/// `clear` or a shrinking `resize`. Stale values are dropped when they are
/// overwritten or when the backing array is released.
///
/// When the capacity is exhausted the vector allocates a new array
/// (capacity `0 -> 1`, then doubling), moves the live elements over and
/// swaps it in. The old array is dropped right after the swap.
///
/// # Examples
///
/// ```
/// use simplevec::simple_vector;
///
/// let mut v = simple_vector![1, 2, 3];
/// let pos = v.insert(v.begin() + 1, 99);
/// assert_eq!(v[pos], 99);
/// assert_eq!(v, [1, 99, 2, 3]);
///
/// v.erase(v.begin());
/// v.pop_back();
/// assert_eq!(v, [99, 2]);
/// assert!(v.at(2).is_err());
/// ```
pub struct SimpleVector<T> {
    items: OwnedArray<T>,
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector with no allocation.
    #[inline]
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            items: OwnedArray::new(),
            size: 0,
        }
    }

    /// Creates a vector with `count` clones of `value`.
    ///
    /// Size and capacity are both `count`.
    pub fn from_elem(count: usize, value: T) -> SimpleVector<T>
    where
        T: Clone,
    {
        SimpleVector::from(vec![value; count])
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Returns a pointer to the first slot, or null if nothing is allocated.
    ///
    /// The pointer is invalidated by any reallocating operation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`](simplevec_common::ErrorKind::OutOfRange)
    /// if `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.size)?;
        Ok(&self.items[index])
    }

    /// Mutable counterpart of [`SimpleVector::at`].
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.size)?;
        Ok(&mut self.items[index])
    }

    /// Returns a reference to the element at `index` without any check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size);
        // SAFETY: index < size <= capacity, upheld by the caller.
        unsafe { self.items.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without any check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size);
        // SAFETY: index < size <= capacity, upheld by the caller.
        unsafe { self.items.get_unchecked_mut(index) }
    }

    /// Position of the first element.
    #[inline]
    pub fn begin(&self) -> Position {
        Position::new(0)
    }

    /// Position one past the last element.
    #[inline]
    pub fn end(&self) -> Position {
        Position::new(self.size)
    }

    #[inline]
    pub fn cbegin(&self) -> Position {
        self.begin()
    }

    #[inline]
    pub fn cend(&self) -> Position {
        self.end()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Removes the last element from the live range.
    ///
    /// The slot keeps its value until it is overwritten; no memory is
    /// released.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) {
        assert!(self.size > 0, "pop_back on an empty SimpleVector");
        self.size -= 1;
    }

    /// Removes the element at `pos`, shifting the following elements one slot
    /// to the left.
    ///
    /// Returns the position of the element that followed the removed one,
    /// which equals `end()` when the last element was removed. Capacity is
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a dereferenceable position (`pos >= end()`).
    pub fn erase(&mut self, pos: Position) -> Position {
        let index = pos.index();
        assert!(
            index < self.size,
            "erase position {index} out of bounds (len {})",
            self.size
        );
        self.items.as_mut_slice()[index..self.size].rotate_left(1);
        self.size -= 1;
        pos
    }

    /// Sets the length to zero. Capacity and slot contents are untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchanges the contents of two vectors without moving any element.
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Consumes the vector and returns its live elements.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut vec = self
            .items
            .release()
            .map(|block| block.into_vec())
            .unwrap_or_default();
        vec.truncate(self.size);
        vec
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `count` default values.
    pub fn with_size(count: usize) -> SimpleVector<T> {
        SimpleVector {
            items: OwnedArray::with_len(count),
            size: count,
        }
    }

    /// Creates an empty vector with `capacity` allocated slots.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T> {
        SimpleVector {
            items: OwnedArray::with_len(capacity),
            size: 0,
        }
    }

    /// Ensures the capacity is at least `new_capacity`.
    ///
    /// Reallocates to exactly `new_capacity` slots if it exceeds the current
    /// capacity; never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity, "reserve");
        }
    }

    /// Appends `value` to the end of the vector.
    ///
    /// When the vector is full the capacity grows from 0 to 1, or doubles.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reallocate(self.grown_capacity(), "push_back");
        }
        self.items[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` before `pos` and returns the position of the inserted
    /// element.
    ///
    /// Growth follows [`SimpleVector::push_back`]. Inserting at `end()` is the
    /// same as `push_back`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > end()`.
    pub fn insert(&mut self, pos: Position, value: T) -> Position {
        let index = pos.index();
        let size = self.size;
        assert!(
            index <= size,
            "insert position {index} out of bounds (len {size})"
        );

        if size == self.capacity() {
            self.reallocate_with_gap(self.grown_capacity(), index, "insert");
            self.items[index] = value;
        } else {
            let slots = self.items.as_mut_slice();
            slots[size] = value;
            slots[index..=size].rotate_right(1);
        }
        self.size += 1;
        pos
    }

    /// Changes the number of live elements to `new_size`.
    ///
    /// Growing past the capacity reallocates to exactly `new_size` slots.
    /// Newly exposed elements are reset to `T::default()`. Shrinking leaves
    /// the trailing slots untouched.
    pub fn resize(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }
        if new_size > self.capacity() {
            // The fresh array is default-filled past the moved elements.
            self.reallocate(new_size, "resize");
        } else if new_size > self.size {
            self.items.as_mut_slice()[self.size..new_size].fill_with(T::default);
        }
        self.size = new_size;
    }

    #[inline]
    fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            capacity => capacity.checked_mul(2).expect("capacity overflow"),
        }
    }

    /// Replaces the backing array with `new_capacity` default slots, moving
    /// the live elements to the front of it.
    #[inline]
    fn reallocate(&mut self, new_capacity: usize, op: &str) {
        self.reallocate_with_gap(new_capacity, self.size, op);
    }

    /// Replaces the backing array with `new_capacity` default slots. Live
    /// elements before `gap` keep their index, the ones from `gap` onward move
    /// one slot further, and slot `gap` is left default-valued.
    ///
    /// `new_capacity` must exceed the current length.
    #[cold]
    fn reallocate_with_gap(&mut self, new_capacity: usize, gap: usize, op: &str) {
        let size = self.size;
        debug_assert!(gap <= size && new_capacity > size);
        log::trace!(
            "SimpleVector::{op}: reallocating {} -> {new_capacity}",
            self.capacity()
        );
        let mut fresh = OwnedArray::with_len(new_capacity);
        let old = self.items.as_mut_slice();
        let new = fresh.as_mut_slice();
        new[..gap].swap_with_slice(&mut old[..gap]);
        new[gap + 1..=size].swap_with_slice(&mut old[gap..size]);
        self.items.swap(&mut fresh);
    }
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(proxy: ReserveProxy) -> Self {
        SimpleVector::with_capacity(proxy.capacity())
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    /// Deep-copies the live elements into a new array with the source's
    /// capacity.
    fn clone(&self) -> Self {
        let mut items = OwnedArray::with_len(self.capacity());
        items.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        SimpleVector {
            items,
            size: self.size,
        }
    }

    /// Replaces the contents with a copy of `source`.
    ///
    /// Unlike [`clone`](Clone::clone), the new array is sized to the source's
    /// length, not its capacity.
    fn clone_from(&mut self, source: &Self) {
        let mut items = OwnedArray::from(source.as_slice().to_vec());
        self.items.swap(&mut items);
        self.size = source.size;
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Size and capacity both equal the vector's length.
    fn from(vec: Vec<T>) -> Self {
        let size = vec.len();
        SimpleVector {
            items: OwnedArray::from(vec),
            size,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(array: [T; N]) -> Self {
        SimpleVector::from(Vec::from(array))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(slice: &[T]) -> Self {
        SimpleVector::from(slice.to_vec())
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(v: SimpleVector<T>) -> Self {
        v.into_vec()
    }
}
