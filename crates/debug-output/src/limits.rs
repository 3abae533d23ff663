//! crates/debug-output/src/limits.rs
//! Capacity limits for the message queue, message length, and group depth.

/// Number of messages the queue holds before dropping new arrivals.
pub const MAX_DEBUG_LOGGED_MESSAGES: usize = 10;

/// Message text length, in bytes, that client text must stay strictly below.
pub const MAX_DEBUG_MESSAGE_LENGTH: usize = 4096;

/// Maximum number of levels on the debug group stack, counting the base level.
pub const MAX_DEBUG_GROUP_STACK_DEPTH: usize = 64;

/// Limits applied to one context's debug state.
///
/// The defaults match the values advertised to clients. Tests shrink them to
/// exercise overflow paths without thousands of calls.
///
/// Deserialized limits go through the same clamping as the builders, and
/// missing fields keep their defaults.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawLimits"))]
pub struct DebugLimits {
    queue_capacity: usize,
    max_message_length: usize,
    max_group_depth: usize,
}

impl Default for DebugLimits {
    fn default() -> Self {
        Self {
            queue_capacity: MAX_DEBUG_LOGGED_MESSAGES,
            max_message_length: MAX_DEBUG_MESSAGE_LENGTH,
            max_group_depth: MAX_DEBUG_GROUP_STACK_DEPTH,
        }
    }
}

impl DebugLimits {
    /// Sets the queue capacity. Zero is raised to one.
    #[must_use]
    pub const fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Sets the exclusive message length bound. Zero is raised to one.
    #[must_use]
    pub const fn with_max_message_length(mut self, length: usize) -> Self {
        self.max_message_length = if length == 0 { 1 } else { length };
        self
    }

    /// Sets the group stack depth, base level included. Zero is raised to one.
    #[must_use]
    pub const fn with_max_group_depth(mut self, depth: usize) -> Self {
        self.max_group_depth = if depth == 0 { 1 } else { depth };
        self
    }

    /// Messages retained by the queue.
    #[must_use]
    pub const fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Exclusive bound on message text length.
    #[must_use]
    pub const fn max_message_length(&self) -> usize {
        self.max_message_length
    }

    /// Maximum group stack depth.
    #[must_use]
    pub const fn max_group_depth(&self) -> usize {
        self.max_group_depth
    }
}

/// Unchecked field values as read from a serialized configuration.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawLimits {
    queue_capacity: usize,
    max_message_length: usize,
    max_group_depth: usize,
}

#[cfg(feature = "serde")]
impl Default for RawLimits {
    fn default() -> Self {
        Self {
            queue_capacity: MAX_DEBUG_LOGGED_MESSAGES,
            max_message_length: MAX_DEBUG_MESSAGE_LENGTH,
            max_group_depth: MAX_DEBUG_GROUP_STACK_DEPTH,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RawLimits> for DebugLimits {
    fn from(raw: RawLimits) -> Self {
        Self::default()
            .with_queue_capacity(raw.queue_capacity)
            .with_max_message_length(raw.max_message_length)
            .with_max_group_depth(raw.max_group_depth)
    }
}
