//! Capacity reservation requests.

/// A request for an empty vector with a given capacity.
///
/// ```
/// use simplevec::{SimpleVector, reserve};
///
/// let v: SimpleVector<u32> = reserve(16).into();
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub const fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Creates a [`ReserveProxy`] for `capacity` slots.
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
