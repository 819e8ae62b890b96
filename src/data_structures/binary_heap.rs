use super::heap_entry::{HeapEntry, Priority};
use crate::trace;

/// Array-backed binary min-heap keyed by an integer priority
///
/// The tree is stored level by level in a `Vec`. Physical index `i` holds
/// logical node `i + 1`, so the children of `i` live at `2i + 1` and `2i + 2`
/// and its parent at `(i - 1) / 2`. Only the priority is ever compared; the
/// payload type needs no ordering.
///
/// | operation      | cost         |
/// |----------------|--------------|
/// | `insert`       | O(log n)     |
/// | `remove_min`   | O(log n)     |
/// | `remove_max`   | O(n)         |
/// | `peek_min`     | O(1)         |
///
/// `remove_max` scans every entry on purpose: the structure is ordered for
/// minimum extraction and keeps no secondary index for the maximum.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    /// Entries in level order, no gaps
    entries: Vec<HeapEntry<T>>,
}

impl<T> BinaryHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        BinaryHeap {
            entries: Vec::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek_min(&self) -> Option<&HeapEntry<T>> {
        self.entries.first()
    }

    /// Returns the entry with the largest priority without removing it
    ///
    /// On ties the entry at the lowest index wins, matching `remove_max`.
    pub fn peek_max(&self) -> Option<&HeapEntry<T>> {
        self.max_index().map(|index| &self.entries[index])
    }

    /// Iterates over the entries in index order (root first)
    pub fn iter(&self) -> std::slice::Iter<'_, HeapEntry<T>> {
        self.entries.iter()
    }

    /// Snapshot of the priorities in index order
    pub fn priorities(&self) -> Vec<Priority> {
        self.entries.iter().map(HeapEntry::priority).collect()
    }

    /// Checks that no entry has a smaller priority than its parent
    pub fn is_heap(&self) -> bool {
        (1..self.entries.len()).all(|index| match self.parent_index(index) {
            Some(parent) => self.priority_at(parent) <= self.priority_at(index),
            None => true,
        })
    }

    /// Inserts a value with the given priority
    ///
    /// The entry is appended as the last leaf and sifted up until its parent
    /// is no larger.
    pub fn insert(&mut self, value: T, priority: Priority) {
        self.entries.push(HeapEntry::new(value, priority));
        trace::emit(&self.entries);

        let last = self.entries.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the entry with the smallest priority
    ///
    /// Returns `None` and leaves the heap untouched when it is empty.
    pub fn remove_min(&mut self) -> Option<HeapEntry<T>> {
        if self.is_empty() {
            log::trace!("remove_min on empty heap");
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Removes and returns the entry with the largest priority
    ///
    /// Finds the target with a linear scan; ties go to the lowest index.
    /// Returns `None` and leaves the heap untouched when it is empty.
    pub fn remove_max(&mut self) -> Option<HeapEntry<T>> {
        match self.max_index() {
            Some(index) => Some(self.remove_at(index)),
            None => {
                log::trace!("remove_max on empty heap");
                None
            }
        }
    }

    /// Overwrites `index` with the last entry, shrinks the heap and repairs it
    fn remove_at(&mut self, index: usize) -> HeapEntry<T> {
        let last = self.entries.len() - 1;
        let removed = self.entries.swap_remove(index);
        trace::emit(&self.entries);

        if index < last {
            // The moved leaf may belong above or below its new slot
            if self.sift_down(index) == index {
                self.sift_up(index);
            }
        }

        removed
    }

    /// Index of the first entry holding the largest priority
    fn max_index(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let mut target = 0;
        for index in 1..self.entries.len() {
            if self.priority_at(index) > self.priority_at(target) {
                target = index;
            }
        }
        Some(target)
    }

    /// Moves the entry at `index` toward the root; returns where it stopped
    fn sift_up(&mut self, mut index: usize) -> usize {
        while let Some(parent) = self.parent_index(index) {
            if self.priority_at(index) >= self.priority_at(parent) {
                break;
            }
            self.swap_entries(index, parent);
            index = parent;
        }
        index
    }

    /// Moves the entry at `index` toward the leaves; returns where it stopped
    fn sift_down(&mut self, mut index: usize) -> usize {
        while let Some(left) = self.left_child_index(index) {
            // Prefer the left child on ties
            let mut smaller = left;
            if let Some(right) = self.right_child_index(index) {
                if self.priority_at(right) < self.priority_at(left) {
                    smaller = right;
                }
            }

            if self.priority_at(smaller) >= self.priority_at(index) {
                break;
            }
            self.swap_entries(index, smaller);
            index = smaller;
        }
        index
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        trace::emit(&self.entries);
    }

    fn is_valid_index(&self, index: usize) -> bool {
        index < self.entries.len()
    }

    fn parent_index(&self, index: usize) -> Option<usize> {
        if index == 0 || !self.is_valid_index(index) {
            return None;
        }
        Some((index - 1) / 2)
    }

    fn left_child_index(&self, index: usize) -> Option<usize> {
        if !self.is_valid_index(index) {
            return None;
        }
        let child = 2 * index + 1;
        self.is_valid_index(child).then_some(child)
    }

    fn right_child_index(&self, index: usize) -> Option<usize> {
        if !self.is_valid_index(index) {
            return None;
        }
        let child = 2 * index + 2;
        self.is_valid_index(child).then_some(child)
    }

    // Callers check the index first
    fn priority_at(&self, index: usize) -> Priority {
        self.entries[index].priority()
    }
}

impl<T> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(T, Priority)> for BinaryHeap<T> {
    /// Inserts each pair in turn; no bulk heapify
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.insert(value, priority);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a HeapEntry<T>;
    type IntoIter = std::slice::Iter<'a, HeapEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
