//! crates/debug-output/src/queue.rs
//! Bounded FIFO of materialized messages.
//!
//! The queue never blocks a producer: once it holds `capacity` messages,
//! further arrivals are dropped until a consumer makes room. The stored
//! length of the head message is cached so size queries do not touch the
//! slot array.

use crate::echo;
use crate::message::{DebugMessage, MessageHeader};
use crate::trace;

/// Result of a buffer-oriented [`MessageQueue::dequeue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DequeueOutcome {
    /// Nothing is queued.
    Empty,
    /// The destination cannot hold the head message; nothing was consumed.
    BufferTooSmall {
        /// Bytes the head message needs, terminator included.
        required: usize,
    },
    /// No destination was supplied; the head message was left in place.
    LengthOnly {
        /// Head message classification.
        header: MessageHeader,
        /// Bytes the head message would need.
        length: usize,
    },
    /// The head message was copied out and removed.
    Consumed {
        /// Classification of the removed message.
        header: MessageHeader,
        /// Bytes written, terminator included.
        length: usize,
    },
}

impl DequeueOutcome {
    /// Bytes written or that would be written; zero when nothing was available.
    #[must_use]
    pub const fn length(&self) -> usize {
        match self {
            Self::Empty | Self::BufferTooSmall { .. } => 0,
            Self::LengthOnly { length, .. } | Self::Consumed { length, .. } => *length,
        }
    }
}

/// Fixed-capacity ring buffer of [`DebugMessage`] slots.
#[derive(Debug)]
pub struct MessageQueue {
    slots: Box<[Option<DebugMessage>]>,
    head: usize,
    len: usize,
    next_length: Option<usize>,
}

impl MessageQueue {
    /// Creates an empty queue holding at most `capacity` messages.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
            next_length: None,
        }
    }

    /// Maximum number of queued messages.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of queued messages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` when new messages would be dropped.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Stored length of the head message, or `None` when empty.
    #[must_use]
    pub const fn next_length(&self) -> Option<usize> {
        self.next_length
    }

    /// Head message, if any, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&DebugMessage> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Iterates over queued messages in FIFO order.
    pub fn iter(&self) -> impl Iterator<Item = &DebugMessage> + '_ {
        (0..self.len).filter_map(move |offset| {
            self.slots[(self.head + offset) % self.capacity()].as_ref()
        })
    }

    /// Copies `text` into the tail slot.
    ///
    /// Returns `false` when the queue was full and the message was dropped.
    pub fn enqueue(&mut self, header: MessageHeader, text: &[u8]) -> bool {
        if self.is_full() {
            trace::trace_queue_drop(&header, self.len);
            return false;
        }
        self.push(DebugMessage::store(header, text));
        true
    }

    /// Appends an already materialized message, dropping it when full.
    pub fn push(&mut self, message: DebugMessage) -> bool {
        if self.is_full() {
            trace::trace_queue_drop(&message.header(), self.len);
            return false;
        }
        let tail = (self.head + self.len) % self.capacity();
        debug_assert!(self.slots[tail].is_none(), "tail slot {tail} still occupied");
        if self.len == 0 {
            self.next_length = Some(message.length());
        }
        self.slots[tail] = Some(message);
        self.len += 1;
        true
    }

    /// Removes and returns the head message.
    pub fn pop(&mut self) -> Option<DebugMessage> {
        if self.len == 0 {
            return None;
        }
        let message = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        self.next_length = self.peek().map(DebugMessage::length);
        message
    }

    /// Buffer-oriented removal of the head message.
    ///
    /// With a destination, the message text and terminator are copied into
    /// its front and the message is removed, unless the destination is too
    /// short, in which case nothing changes and the caller may retry. Without
    /// a destination, the message's length is reported and it stays queued.
    pub fn dequeue(&mut self, dest: Option<&mut [u8]>) -> DequeueOutcome {
        let Some(head) = self.peek() else {
            return DequeueOutcome::Empty;
        };
        let header = head.header();
        let length = head.length();
        self.check_cached_length(length);

        let Some(dest) = dest else {
            return DequeueOutcome::LengthOnly { header, length };
        };
        if dest.len() < length {
            return DequeueOutcome::BufferTooSmall { required: length };
        }

        dest[..length].copy_from_slice(head.text_with_nul());
        self.pop();
        DequeueOutcome::Consumed { header, length }
    }

    fn check_cached_length(&self, length: usize) {
        debug_assert_eq!(
            self.next_length,
            Some(length),
            "cached head length out of sync"
        );
        if self.next_length != Some(length) {
            echo::problem(format_args!(
                "debug queue head length {length} does not match cached {:?}",
                self.next_length
            ));
        }
    }

    /// Drops every queued message.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{MessageType, Severity, Source};

    fn header(id: u32) -> MessageHeader {
        MessageHeader::new(Source::Application, MessageType::Other, id, Severity::High)
    }

    #[test]
    fn fifo_order_is_preserved() {
        let mut queue = MessageQueue::new(4);
        for id in 1..=3 {
            assert!(queue.enqueue(header(id), format!("m{id}").as_bytes()));
        }
        let ids: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|m| m.header().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(queue.is_empty());
        assert_eq!(queue.next_length(), None);
    }

    #[test]
    fn full_queue_drops_newest() {
        let mut queue = MessageQueue::new(2);
        assert!(queue.enqueue(header(1), b"a"));
        assert!(queue.enqueue(header(2), b"b"));
        assert!(!queue.enqueue(header(3), b"c"));
        let ids: Vec<_> = queue.iter().map(|m| m.header().id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn wraps_around_ring() {
        let mut queue = MessageQueue::new(2);
        queue.enqueue(header(1), b"a");
        queue.enqueue(header(2), b"b");
        queue.pop();
        assert!(queue.enqueue(header(3), b"c"));
        let ids: Vec<_> = queue.iter().map(|m| m.header().id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn next_length_tracks_head() {
        let mut queue = MessageQueue::new(3);
        queue.enqueue(header(1), b"abc");
        queue.enqueue(header(2), b"abcdef");
        assert_eq!(queue.next_length(), Some(4));
        queue.pop();
        assert_eq!(queue.next_length(), Some(7));
    }

    #[test]
    fn short_buffer_leaves_head_in_place() {
        let mut queue = MessageQueue::new(2);
        queue.enqueue(header(1), b"hello");
        let mut small = [0u8; 5];
        assert_eq!(
            queue.dequeue(Some(&mut small)),
            DequeueOutcome::BufferTooSmall { required: 6 }
        );
        assert_eq!(queue.len(), 1);

        let mut exact = [0u8; 6];
        assert_eq!(
            queue.dequeue(Some(&mut exact)),
            DequeueOutcome::Consumed {
                header: header(1),
                length: 6
            }
        );
        assert_eq!(&exact, b"hello\0");
        assert!(queue.is_empty());
    }

    #[test]
    fn missing_buffer_reports_length_without_consuming() {
        let mut queue = MessageQueue::new(2);
        queue.enqueue(header(1), b"hi");
        let outcome = queue.dequeue(None);
        assert_eq!(outcome.length(), 3);
        assert!(matches!(outcome, DequeueOutcome::LengthOnly { .. }));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn empty_queue_dequeues_nothing() {
        let mut queue = MessageQueue::new(1);
        assert_eq!(queue.dequeue(None), DequeueOutcome::Empty);
        assert_eq!(queue.dequeue(Some(&mut [0u8; 8])), DequeueOutcome::Empty);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut queue = MessageQueue::new(0);
        assert_eq!(queue.capacity(), 1);
        assert!(queue.enqueue(header(1), b"x"));
        assert!(!queue.enqueue(header(2), b"y"));
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue = MessageQueue::new(3);
        queue.enqueue(header(1), b"x");
        queue.enqueue(header(2), b"y");
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.next_length(), None);
    }
}
