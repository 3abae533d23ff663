//! crates/debug-output/src/id.rs
//! Process-wide allocation of message IDs for implementation-side call sites.
//!
//! Messages raised by the implementation have no client-chosen ID, so each
//! call site owns a [`DynamicId`] cell, normally in static storage. The first
//! report through a cell assigns it the next value of a shared counter; every
//! later report reuses that value. IDs are shared by all contexts in the
//! process and are not stable between runs.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::gl::GLuint;

/// Lazily assigned message ID for one reporting call site.
///
/// Zero means "not yet assigned".
#[derive(Debug, Default)]
pub struct DynamicId(AtomicU32);

impl DynamicId {
    /// Creates an unassigned cell, usable in a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Current value, zero while unassigned.
    #[must_use]
    pub fn get(&self) -> GLuint {
        self.0.load(Ordering::Acquire)
    }

    /// Returns the assigned ID, allocating from the process allocator on first use.
    pub fn resolve(&self) -> GLuint {
        IdAllocator::global().allocate(self)
    }
}

/// Monotonic counter handing out nonzero message IDs.
///
/// One mutex guards the counter; it is the only lock taken anywhere in the
/// debug output path.
#[derive(Debug)]
pub struct IdAllocator {
    next: Mutex<GLuint>,
}

static GLOBAL: IdAllocator = IdAllocator::new();

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Creates an allocator whose first ID is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: Mutex::new(1),
        }
    }

    /// The allocator shared by every context in the process.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Assigns `cell` an ID if it has none and returns its value.
    ///
    /// The unassigned check is repeated under the lock so concurrent callers
    /// racing on the same cell agree on a single value.
    pub fn allocate(&self, cell: &DynamicId) -> GLuint {
        let current = cell.get();
        if current != 0 {
            return current;
        }

        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let current = cell.get();
        if current != 0 {
            return current;
        }

        let id = *next;
        *next = next.wrapping_add(1).max(1);
        cell.0.store(id, Ordering::Release);
        id
    }

    /// Value the next allocation will hand out.
    #[must_use]
    pub fn peek_next(&self) -> GLuint {
        *self.next.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Restarts the counter at 1.
    ///
    /// Cells that were already assigned keep their values, so this is only
    /// meaningful for allocators owned by a test.
    pub fn reset(&self) {
        *self.next.lock().unwrap_or_else(PoisonError::into_inner) = 1;
    }
}
