//! Binary min-heap layered on [`DynArray`].
//!
//! Elements are stored zero-based, children of `i` at `2i + 1` and `2i + 2`.
//! Ordering comes from a comparator supplied at construction; the heap never
//! looks at the elements any other way. Ties are not broken, so extraction
//! order among equal elements is unspecified.

use super::container::DynArray;
use super::error::{HeapError, HeapResult};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};

/// Comparator signature used when the ordering is a plain function
pub type CompareFn<T> = fn(&T, &T) -> Ordering;

pub struct MinHeap<T, C = CompareFn<T>> {
    data: DynArray<T>,
    compare: C,
}

impl<T: Ord> MinHeap<T, CompareFn<T>> {
    /// Heap ordered by `T`'s own `Ord` implementation
    pub fn new(initial_capacity: usize) -> HeapResult<Self> {
        Self::with_comparator(initial_capacity, T::cmp)
    }
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(initial_capacity: usize, compare: C) -> HeapResult<Self> {
        Ok(Self {
            data: DynArray::create(initial_capacity)?,
            compare,
        })
    }

    /// Adopt an arbitrarily ordered array and restore heap order in O(n)
    pub fn from_container(data: DynArray<T>, compare: C) -> Self {
        let mut heap = Self { data, compare };
        heap.build_heap();
        heap
    }

    /// Append `value`, then sift it up. O(log n).
    pub fn insert(&mut self, value: T) -> HeapResult<()> {
        self.data.append(value)?;
        let last = self.data.size() - 1;
        self.sift_up(last);
        Ok(())
    }

    pub fn peek_min(&self) -> HeapResult<&T> {
        self.data.as_slice().first().ok_or(HeapError::EmptyHeap)
    }

    /// Remove and return the root. The last element takes its place and is
    /// sifted down. O(log n).
    pub fn remove_min(&mut self) -> HeapResult<T> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let last = self.data.size() - 1;
        self.data.as_mut_slice().swap(0, last);
        let min = self.data.remove_last()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Restore heap order over the whole array by sifting down from the last
    /// internal node to the root. O(n).
    pub fn build_heap(&mut self) {
        let len = self.data.size();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
        trace!("Built heap over {} elements", len);
    }

    /// Append every value from `values` and rebuild once, instead of sifting
    /// each one up. Returns how many values were added.
    ///
    /// If an append fails, the values already appended stay in the heap and
    /// heap order is restored before the error is returned.
    pub fn extend<I>(&mut self, values: I) -> HeapResult<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = 0;
        let mut outcome = Ok(());
        for value in values {
            if let Err(e) = self.data.append(value) {
                outcome = Err(e);
                break;
            }
            added += 1;
        }

        if added > 0 {
            self.build_heap();
            debug!("Bulk-loaded {} elements, heap size now {}", added, self.size());
        }
        outcome.map(|()| added)
    }

    /// Check the heap-order invariant for every non-root element
    pub fn is_heap(&self) -> bool {
        let items = self.data.as_slice();
        (1..items.len())
            .all(|i| (self.compare)(&items[(i - 1) / 2], &items[i]) != Ordering::Greater)
    }

    /// Iterator that removes elements in ascending order
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    pub fn size(&self) -> usize {
        self.data.size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Elements in storage order, which is heap order and not sorted
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_container(self) -> DynArray<T> {
        self.data
    }

    /// Drop every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        let items = self.data.as_mut_slice();
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.compare)(&items[parent], &items[index]) != Ordering::Greater {
                break;
            }
            items.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let items = self.data.as_mut_slice();
        let len = items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len
                && (self.compare)(&items[right], &items[left]) == Ordering::Less
            {
                right
            } else {
                left
            };

            if (self.compare)(&items[smaller], &items[index]) != Ordering::Less {
                break;
            }
            items.swap(smaller, index);
            index = smaller;
        }
    }
}

impl<T, C> MinHeap<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering + Clone,
{
    /// Independent heap with its own storage. Mutating either side never
    /// affects the other.
    pub fn copy(&self) -> HeapResult<Self> {
        Ok(Self {
            data: self.data.copy()?,
            compare: self.compare.clone(),
        })
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap").field("data", &self.data).finish()
    }
}

/// Draining iterator returned by [`MinHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    heap: &'a mut MinHeap<T, C>,
}

impl<T, C> Iterator for DrainSorted<'_, T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.remove_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.heap.size();
        (remaining, Some(remaining))
    }
}

impl<T, C> ExactSizeIterator for DrainSorted<'_, T, C> where C: Fn(&T, &T) -> Ordering {}
