//! Growable array with an explicit logical capacity.
//!
//! `DynArray` keeps its own `capacity` instead of relying on whatever `Vec`
//! decides to allocate, so growth happens at predictable points (when
//! `size() == capacity()`) and every reservation goes through
//! `try_reserve_exact`. A failed reservation is reported as
//! [`HeapError::Allocation`] and leaves the array untouched.

use super::error::{HeapError, HeapResult};
use tracing::{debug, trace};

/// Smallest capacity an array is ever created with
pub const MIN_CAPACITY: usize = 1;

/// Capacity multiplier applied when an append finds the array full
pub const GROWTH_FACTOR: usize = 2;

#[derive(Debug)]
pub struct DynArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array able to hold at least `initial_capacity` elements
    /// before its first growth.
    ///
    /// The capacity of an array is never zero: `create(0)` returns an array
    /// with a capacity of exactly [`MIN_CAPACITY`], so doubling always makes
    /// room. Requests that cannot be reserved fail with
    /// [`HeapError::Allocation`].
    pub fn create(initial_capacity: usize) -> HeapResult<Self> {
        let capacity = initial_capacity.max(MIN_CAPACITY);
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| HeapError::Allocation {
                requested: capacity,
            })?;

        Ok(Self { items, capacity })
    }

    /// Take ownership of already-collected values, in their current order
    pub fn from_vec(mut items: Vec<T>) -> HeapResult<Self> {
        let capacity = items.len().max(MIN_CAPACITY);
        items
            .try_reserve_exact(capacity - items.len())
            .map_err(|_| HeapError::Allocation {
                requested: capacity,
            })?;

        Ok(Self { items, capacity })
    }

    /// Append at the logical end, doubling capacity first if the array is full
    pub fn append(&mut self, value: T) -> HeapResult<()> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(value);
        Ok(())
    }

    fn grow(&mut self) -> HeapResult<()> {
        let new_capacity =
            self.capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(HeapError::Allocation {
                    requested: usize::MAX,
                })?;

        self.items
            .try_reserve_exact(new_capacity - self.items.len())
            .map_err(|_| HeapError::Allocation {
                requested: new_capacity,
            })?;

        debug!(
            "Grew array capacity from {} to {}",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    pub fn get(&self, index: usize) -> HeapResult<&T> {
        self.items.get(index).ok_or(HeapError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Overwrite the value at `index`, dropping the previous one
    pub fn set(&mut self, index: usize, value: T) -> HeapResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(HeapError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn swap(&mut self, a: usize, b: usize) -> HeapResult<()> {
        let len = self.items.len();
        for index in [a, b] {
            if index >= len {
                return Err(HeapError::IndexOutOfRange { index, len });
            }
        }
        self.items.swap(a, b);
        Ok(())
    }

    pub fn remove_last(&mut self) -> HeapResult<T> {
        self.items.pop().ok_or(HeapError::Underflow)
    }

    /// Remove the value at `index`, shifting every later element down by one.
    /// O(n).
    pub fn remove_at(&mut self, index: usize) -> HeapResult<T> {
        if index >= self.items.len() {
            return Err(HeapError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        trace!("Clearing {} elements", self.items.len());
        self.items.clear();
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T: Clone> DynArray<T> {
    /// Deep copy into independent storage of the same capacity
    pub fn copy(&self) -> HeapResult<Self> {
        let mut copy = Self::create(self.capacity)?;
        copy.items.extend(self.items.iter().cloned());
        Ok(copy)
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
