pub mod binary_heap;
pub mod heap_entry;
pub mod priority_queue;

pub use binary_heap::BinaryHeap;
pub use heap_entry::{HeapEntry, Priority};
pub use priority_queue::PriorityQueue;
