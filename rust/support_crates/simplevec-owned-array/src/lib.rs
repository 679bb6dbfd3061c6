//! Single-owner heap array.
//!
//! `OwnedArray<T>` exclusively owns one contiguously allocated, fixed-length
//! block of elements, or nothing at all. It never grows or shrinks; callers
//! that need a different length allocate a new array and [`swap`] it in.
//!
//! Ownership is never duplicated: the type has no `Clone` impl. It can be
//! moved (Rust moves, or [`take`] which leaves an empty array behind),
//! exchanged with another array, or released back to the caller.
//!
//! [`swap`]: OwnedArray::swap
//! [`take`]: OwnedArray::take

use std::ops::{Index, IndexMut};

/// An exclusively owned, fixed-length heap block of `T`.
///
/// A zero-length array holds no allocation.
pub struct OwnedArray<T> {
    /// The owned block. `None` is the empty state; a present block is never
    /// zero-length.
    block: Option<Box<[T]>>,
}

impl<T> OwnedArray<T> {
    /// Creates an empty array that owns nothing.
    #[inline]
    pub const fn new() -> OwnedArray<T> {
        OwnedArray { block: None }
    }

    /// Allocates `len` default-valued elements.
    ///
    /// For `len == 0` no allocation takes place and the result is empty.
    pub fn with_len(len: usize) -> OwnedArray<T>
    where
        T: Default,
    {
        if len == 0 {
            return OwnedArray::new();
        }
        let block: Box<[T]> = std::iter::repeat_with(T::default).take(len).collect();
        OwnedArray { block: Some(block) }
    }

    /// Takes ownership of a caller-supplied block without allocating.
    pub fn from_boxed(block: Box<[T]>) -> OwnedArray<T> {
        if block.is_empty() {
            OwnedArray::new()
        } else {
            OwnedArray { block: Some(block) }
        }
    }

    /// Takes ownership of a raw block previously produced by
    /// [`OwnedArray::into_raw`] or [`Box::into_raw`].
    ///
    /// # Safety
    ///
    /// `raw` must be either null or a pointer obtained from `Box<[T]>::into_raw`
    /// that no other owner will use or free afterwards.
    pub unsafe fn from_raw(raw: *mut [T]) -> OwnedArray<T> {
        if raw.is_null() {
            return OwnedArray::new();
        }
        // SAFETY: the caller hands over a pointer produced by `Box::into_raw`.
        OwnedArray::from_boxed(unsafe { Box::from_raw(raw) })
    }

    /// Relinquishes ownership of the block, leaving this array empty.
    ///
    /// Returns `None` if nothing was owned.
    #[inline]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.block.take()
    }

    /// Consumes the array and returns the raw block pointer.
    ///
    /// The returned pointer is null for an empty array. The caller becomes
    /// responsible for freeing it, e.g. through [`OwnedArray::from_raw`].
    pub fn into_raw(mut self) -> *mut [T] {
        match self.release() {
            Some(block) => Box::into_raw(block),
            None => std::ptr::slice_from_raw_parts_mut(std::ptr::null_mut(), 0),
        }
    }

    /// Moves the owned block out into a new array, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> OwnedArray<T> {
        OwnedArray {
            block: self.block.take(),
        }
    }

    /// Exchanges the owned blocks of two arrays. No element is moved.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedArray<T>) {
        std::mem::swap(&mut self.block, &mut other.block);
    }

    /// Returns `true` if the array owns a block.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Returns the number of element slots in the owned block.
    #[inline]
    pub fn len(&self) -> usize {
        self.block.as_ref().map_or(0, |b| b.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a pointer to the first slot without transferring ownership,
    /// or null if the array is empty.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block
            .as_ref()
            .map_or(std::ptr::null(), |b| b.as_ptr())
    }

    /// Mutable counterpart of [`OwnedArray::as_ptr`].
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block
            .as_mut()
            .map_or(std::ptr::null_mut(), |b| b.as_mut_ptr())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.block.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.block.as_deref_mut().unwrap_or(&mut [])
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// The array must be allocated and `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        // SAFETY: upheld by the caller.
        unsafe { &*self.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// The array must be allocated and `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        // SAFETY: upheld by the caller.
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }
}

impl<T> Default for OwnedArray<T> {
    fn default() -> Self {
        OwnedArray::new()
    }
}

impl<T> Index<usize> for OwnedArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> From<Box<[T]>> for OwnedArray<T> {
    fn from(block: Box<[T]>) -> Self {
        OwnedArray::from_boxed(block)
    }
}

impl<T> From<Vec<T>> for OwnedArray<T> {
    fn from(vec: Vec<T>) -> Self {
        OwnedArray::from_boxed(vec.into_boxed_slice())
    }
}

impl<T> std::fmt::Debug for OwnedArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedArray")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len())
            .finish()
    }
}
