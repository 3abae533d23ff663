//! crates/debug-output/src/group.rs
//! Debug group stack: nested filter scopes with retained bracket messages.
//!
//! Level 0 lives as long as the debug state. Every push clones the current
//! level, so changes made inside a group are discarded when it is popped.

use crate::filter::FilterLevel;
use crate::message::DebugMessage;

/// A level above the base: its filter state and the message that opened it.
#[derive(Clone, Debug)]
pub struct NestedLevel {
    filters: FilterLevel,
    pop_message: DebugMessage,
}

impl NestedLevel {
    /// Filter state of the level.
    #[must_use]
    pub const fn filters(&self) -> &FilterLevel {
        &self.filters
    }

    /// Mutable filter state of the level.
    pub fn filters_mut(&mut self) -> &mut FilterLevel {
        &mut self.filters
    }

    /// The push message, replayed as the matching pop message.
    #[must_use]
    pub const fn pop_message(&self) -> &DebugMessage {
        &self.pop_message
    }

    /// Splits a detached level into its filters and retained message.
    #[must_use]
    pub fn into_parts(self) -> (FilterLevel, DebugMessage) {
        (self.filters, self.pop_message)
    }
}

/// Bounded stack of filter levels.
#[derive(Clone, Debug)]
pub struct GroupStack {
    base: FilterLevel,
    nested: Vec<NestedLevel>,
    max_depth: usize,
}

impl GroupStack {
    /// Stack holding only a freshly seeded base level.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            base: FilterLevel::base(),
            nested: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Index of the current level; 0 is the base.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nested.len()
    }

    /// Maximum number of levels, base included.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` when another level fits under the bound.
    #[must_use]
    pub fn can_push(&self) -> bool {
        self.nested.len() + 1 < self.max_depth
    }

    /// Filter state of the current level.
    #[must_use]
    pub fn current(&self) -> &FilterLevel {
        self.nested.last().map_or(&self.base, NestedLevel::filters)
    }

    /// Mutable filter state of the current level.
    pub fn current_mut(&mut self) -> &mut FilterLevel {
        match self.nested.last_mut() {
            Some(level) => level.filters_mut(),
            None => &mut self.base,
        }
    }

    /// Filter state at `depth`, if that level exists.
    #[must_use]
    pub fn level(&self, depth: usize) -> Option<&FilterLevel> {
        match depth {
            0 => Some(&self.base),
            n => self.nested.get(n - 1).map(NestedLevel::filters),
        }
    }

    /// Opens a level cloned from the current one, retaining `pop_message`.
    ///
    /// Returns `false` without change when the stack is at its bound.
    pub fn push_level(&mut self, pop_message: DebugMessage) -> bool {
        if !self.can_push() {
            return false;
        }
        let filters = self.current().clone();
        self.nested.push(NestedLevel {
            filters,
            pop_message,
        });
        true
    }

    /// Detaches the top level, or returns `None` at the base.
    pub fn pop_level(&mut self) -> Option<NestedLevel> {
        self.nested.pop()
    }
}
