//! Diagnostic trace of heap state.
//!
//! After each structural mutation the heap logs its priorities in index
//! order as one space-separated line. Records go to the `log` facade at
//! `debug` level under [`TRACE_TARGET`], so they never affect heap state.

use std::fmt;

use crate::data_structures::HeapEntry;

/// Log target used for trace lines
pub const TRACE_TARGET: &str = "heap_pq::trace";

/// Lazily formats the priorities of a slice of entries, e.g. `1 7 4 8`
pub struct PriorityLine<'a, T>(pub &'a [HeapEntry<T>]);

impl<T> fmt::Display for PriorityLine<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.0.iter();
        if let Some(first) = entries.next() {
            write!(f, "{}", first.priority())?;
            for entry in entries {
                write!(f, " {}", entry.priority())?;
            }
        }
        Ok(())
    }
}

/// Emits the current heap state as a trace record
pub(crate) fn emit<T>(entries: &[HeapEntry<T>]) {
    log::debug!(target: TRACE_TARGET, "{}", PriorityLine(entries));
}
