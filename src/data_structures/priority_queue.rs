use super::binary_heap::BinaryHeap;
use super::heap_entry::{HeapEntry, Priority};
use crate::{Error, Result};

/// A priority queue over a binary min-heap
///
/// Each call maps one-to-one onto a [`BinaryHeap`] operation; the queue holds
/// no state of its own besides the heap.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    /// The underlying binary heap
    heap: BinaryHeap<T>,
}

impl<T> PriorityQueue<T> {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds a value with the given priority. O(log n)
    pub fn enqueue(&mut self, value: T, priority: Priority) {
        self.heap.insert(value, priority);
    }

    /// Removes the entry with the smallest priority. O(log n)
    pub fn dequeue_min(&mut self) -> Result<HeapEntry<T>> {
        self.heap.remove_min().ok_or(Error::EmptyQueue)
    }

    /// Removes the entry with the largest priority. O(n) for the scan
    pub fn dequeue_max(&mut self) -> Result<HeapEntry<T>> {
        self.heap.remove_max().ok_or(Error::EmptyQueue)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek_min(&self) -> Option<&HeapEntry<T>> {
        self.heap.peek_min()
    }

    /// Returns the entry with the largest priority without removing it
    pub fn peek_max(&self) -> Option<&HeapEntry<T>> {
        self.heap.peek_max()
    }

    /// Read-only view of the underlying heap
    pub fn heap(&self) -> &BinaryHeap<T> {
        &self.heap
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
