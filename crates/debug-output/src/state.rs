//! crates/debug-output/src/state.rs
//! Per-context debug state: filter levels, delivery mode, and output switch.
//!
//! [`DebugState`] is the typed core behind the GL-shaped entry points on
//! [`Context`](crate::Context). Its operations return [`DebugError`] for
//! misuse and never change state when they do.

use crate::delivery::{DebugCallback, Delivery};
use crate::enums::{Classification, MessageType, Selector, Severity, Source};
use crate::error::DebugError;
use crate::filter::FilterLevel;
use crate::gl::GLuint;
use crate::group::GroupStack;
use crate::limits::DebugLimits;
use crate::message::{DebugMessage, LogRecord, MessageHeader};
use crate::queue::DequeueOutcome;
use crate::trace;
use crate::validate::Caller;

/// Debug output state owned by one context.
#[derive(Debug)]
pub struct DebugState {
    output_enabled: bool,
    delivery: Delivery,
    groups: GroupStack,
    limits: DebugLimits,
}

impl Default for DebugState {
    fn default() -> Self {
        Self::new(DebugLimits::default())
    }
}

impl DebugState {
    /// Fresh state: output enabled, buffered delivery, seeded base level.
    #[must_use]
    pub fn new(limits: DebugLimits) -> Self {
        Self {
            output_enabled: true,
            delivery: Delivery::buffered(limits.queue_capacity()),
            groups: GroupStack::new(limits.max_group_depth()),
            limits,
        }
    }

    /// Limits the state was created with.
    #[must_use]
    pub const fn limits(&self) -> &DebugLimits {
        &self.limits
    }

    // ------------------------------------------------------------------
    // Output switch and filtering
    // ------------------------------------------------------------------

    /// Returns `true` while debug output is enabled.
    #[must_use]
    pub const fn output_enabled(&self) -> bool {
        self.output_enabled
    }

    /// Turns all debug output on or off without touching filter state.
    pub fn set_output_enabled(&mut self, enabled: bool) {
        self.output_enabled = enabled;
    }

    /// Filtering decision at the current level.
    ///
    /// Returns `false` without recording anything while output is disabled.
    pub fn should_log(&mut self, header: &MessageHeader) -> bool {
        self.output_enabled && self.groups.current_mut().decide(header)
    }

    /// Filter state of the current level.
    #[must_use]
    pub fn current_level(&self) -> &FilterLevel {
        self.groups.current()
    }

    /// Current bit of an ID at the current level, if it has an entry.
    #[must_use]
    pub fn is_message_enabled(&self, source: Source, ty: MessageType, id: GLuint) -> Option<bool> {
        self.groups.current().is_enabled(source, ty, id)
    }

    /// Overwrites the enabled bit of one ID at the current level.
    pub fn set_message_state(&mut self, source: Source, ty: MessageType, id: GLuint, enabled: bool) {
        self.groups.current_mut().set(source, ty, id, enabled);
    }

    /// Bulk control at the current level. Returns the number of known IDs updated.
    pub fn control_messages(
        &mut self,
        source: Selector<Source>,
        ty: Selector<MessageType>,
        severity: Selector<Severity>,
        enabled: bool,
    ) -> usize {
        self.groups
            .current_mut()
            .control(source, ty, severity, enabled)
    }

    /// Sets each listed ID in one namespace directly.
    pub fn control_ids(&mut self, source: Source, ty: MessageType, ids: &[GLuint], enabled: bool) {
        let level = self.groups.current_mut();
        for &id in ids {
            level.set(source, ty, id, enabled);
        }
        trace::trace_id_control(source, ty, ids.len(), enabled);
    }

    /// Control as issued by a client: explicit IDs when any are given, bulk
    /// control otherwise.
    ///
    /// An ID list requires a concrete source and type and a wildcard severity.
    pub fn control(
        &mut self,
        source: Selector<Source>,
        ty: Selector<MessageType>,
        severity: Selector<Severity>,
        ids: &[GLuint],
        enabled: bool,
    ) -> Result<(), DebugError> {
        if ids.is_empty() {
            self.control_messages(source, ty, severity, enabled);
            return Ok(());
        }
        let (Selector::Only(source), Selector::Only(ty), Selector::Any) = (source, ty, severity)
        else {
            return Err(DebugError::IdsRequireNamespace {
                caller: Caller::Control.name(),
            });
        };
        self.control_ids(source, ty, ids, enabled);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Logging and retrieval
    // ------------------------------------------------------------------

    /// Filters a message and delivers it when it passes.
    ///
    /// Returns `true` when the message reached the callback or the queue.
    pub fn log(&mut self, header: MessageHeader, text: &[u8]) -> bool {
        if !self.should_log(&header) {
            return false;
        }
        self.delivery.deliver(header, text)
    }

    /// Delivers a message whose filter decision was already taken.
    pub(crate) fn deliver(&mut self, header: MessageHeader, text: &[u8]) -> bool {
        self.delivery.deliver(header, text)
    }

    /// Validates the length of client text and logs it.
    pub fn insert(&mut self, header: MessageHeader, text: &[u8]) -> Result<bool, DebugError> {
        self.check_length(Caller::Insert, text.len())?;
        Ok(self.log(header, text))
    }

    fn check_length(&self, caller: Caller, length: usize) -> Result<(), DebugError> {
        let max = self.limits.max_message_length();
        if length >= max {
            return Err(DebugError::MessageTooLong {
                caller: caller.name(),
                length,
                max,
            });
        }
        Ok(())
    }

    /// Installs or clears the callback.
    ///
    /// Queued messages are handed to a newly installed callback before it
    /// takes over; clearing the callback starts an empty queue. Returns the
    /// number of messages flushed.
    pub fn set_callback(&mut self, callback: Option<DebugCallback>) -> usize {
        self.delivery
            .switch(callback, self.limits.queue_capacity())
    }

    /// Returns `true` while a callback receives messages.
    #[must_use]
    pub const fn is_callback_mode(&self) -> bool {
        self.delivery.is_callback()
    }

    /// Number of queued messages; zero in callback mode.
    #[must_use]
    pub fn queued_messages(&self) -> usize {
        self.delivery.queue().map_or(0, |queue| queue.len())
    }

    /// Stored length of the oldest queued message, terminator included.
    #[must_use]
    pub fn next_message_length(&self) -> Option<usize> {
        self.delivery.queue().and_then(|queue| queue.next_length())
    }

    /// Buffer-oriented removal of the oldest queued message.
    pub fn dequeue(&mut self, dest: Option<&mut [u8]>) -> DequeueOutcome {
        self.delivery
            .queue_mut()
            .map_or(DequeueOutcome::Empty, |queue| queue.dequeue(dest))
    }

    /// Retrieves up to `count` messages into `buf`, packed back to back.
    ///
    /// Stops at the first message that does not fit in the remaining space.
    /// Without a buffer, reports the oldest message's length and consumes
    /// nothing.
    pub fn get_message_log(&mut self, count: usize, mut buf: Option<&mut [u8]>) -> Vec<LogRecord> {
        let mut records = Vec::new();
        while records.len() < count {
            let peek_only = buf.is_none();
            let (header, length) = match self.dequeue(buf.as_deref_mut()) {
                DequeueOutcome::Consumed { header, length }
                | DequeueOutcome::LengthOnly { header, length } => (header, length),
                DequeueOutcome::Empty | DequeueOutcome::BufferTooSmall { .. } => break,
            };
            records.push(LogRecord { header, length });
            if peek_only {
                break;
            }
            if let Some(rest) = buf.take() {
                buf = Some(&mut rest[length..]);
            }
        }
        records
    }

    /// Removes up to `max` queued messages in FIFO order.
    pub fn drain_messages(&mut self, max: usize) -> Vec<DebugMessage> {
        let Some(queue) = self.delivery.queue_mut() else {
            return Vec::new();
        };
        std::iter::from_fn(|| queue.pop()).take(max).collect()
    }

    // ------------------------------------------------------------------
    // Groups
    // ------------------------------------------------------------------

    /// Index of the current group level.
    #[must_use]
    pub fn group_depth(&self) -> usize {
        self.groups.depth()
    }

    /// Returns `true` when another group level fits under the depth bound.
    #[must_use]
    pub fn can_push_group(&self) -> bool {
        self.groups.can_push()
    }

    /// Opens a debug group.
    ///
    /// The push marker is filtered at the level being left. The group's
    /// text is retained and replayed as the pop marker.
    pub fn push_group(&mut self, source: Source, id: GLuint, text: &[u8]) -> Result<(), DebugError> {
        if !self.can_push_group() {
            return Err(DebugError::StackOverflow {
                caller: Caller::PushGroup.name(),
            });
        }
        if !source.is_client() {
            return Err(DebugError::InvalidGroupSource {
                caller: Caller::PushGroup.name(),
                src: source.to_gl(),
            });
        }
        self.check_length(Caller::PushGroup, text.len())?;

        let header = MessageHeader::new(source, MessageType::PushGroup, id, Severity::Notification);
        let logged = self.log(header, text);
        let retained = DebugMessage::store(header, text);
        self.groups.push_level(retained);
        trace::trace_group_push(self.groups.depth(), &header, logged);
        Ok(())
    }

    /// Closes the innermost debug group.
    ///
    /// The pop marker is filtered by the level being closed, then that level
    /// is discarded and the previous one becomes current again.
    pub fn pop_group(&mut self) -> Result<(), DebugError> {
        let Some(closed) = self.groups.pop_level() else {
            return Err(DebugError::StackUnderflow {
                caller: Caller::PopGroup.name(),
            });
        };
        let (mut filters, message) = closed.into_parts();
        let header = message.header().with_type(MessageType::PopGroup);
        let logged = self.output_enabled
            && filters.decide(&header)
            && self.delivery.deliver(header, message.text());
        trace::trace_group_pop(self.groups.depth(), &header, logged);
        Ok(())
    }
}
