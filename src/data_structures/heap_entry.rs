/// Ranking key of a heap entry; smaller values dequeue first
pub type Priority = i64;

/// A payload paired with its priority
///
/// Entries are immutable once built. The heap moves them around whole and
/// never rewrites a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<T> {
    value: T,
    priority: Priority,
}

impl<T> HeapEntry<T> {
    /// Creates a new entry
    pub fn new(value: T, priority: Priority) -> Self {
        HeapEntry { value, priority }
    }

    /// Returns the payload
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the priority
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Consumes the entry, returning the payload
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the entry, returning `(value, priority)`
    pub fn into_parts(self) -> (T, Priority) {
        (self.value, self.priority)
    }
}

impl<T> From<(T, Priority)> for HeapEntry<T> {
    fn from((value, priority): (T, Priority)) -> Self {
        HeapEntry::new(value, priority)
    }
}
