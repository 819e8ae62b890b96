//! Heap PQ - a priority queue backed by a binary min-heap
//!
//! Entries pair an arbitrary payload with an integer priority. Smaller
//! priorities leave the queue first: the minimum is always at the root and
//! can be removed in O(log n). Removing the maximum is supported too, at the
//! cost of a linear scan.
//!
//! Every structural mutation (new leaf, sift swap, removal) emits the current
//! priority sequence as a `debug` record under [`trace::TRACE_TARGET`].

pub mod data_structures;
pub mod trace;

pub use data_structures::{BinaryHeap, HeapEntry, Priority, PriorityQueue};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
