//! crates/debug-output/src/delivery.rs
//! Where messages that pass the filter go: the queue or a client callback.

use std::fmt;

use crate::message::{MessageHeader, MessageView};
use crate::queue::MessageQueue;
use crate::trace;

/// Client callback receiving messages synchronously on the logging thread.
///
/// The callback must not log to the same context it is attached to.
pub type DebugCallback = Box<dyn FnMut(&MessageView<'_>)>;

/// Delivery mode of a debug state. Exactly one mode is active at a time.
pub enum Delivery {
    /// Messages are stored for later retrieval.
    Buffered(MessageQueue),
    /// Messages are handed to the callback and never stored.
    Callback(DebugCallback),
}

impl fmt::Debug for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffered(queue) => f.debug_tuple("Buffered").field(queue).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl Delivery {
    /// Buffered mode with an empty queue.
    #[must_use]
    pub fn buffered(capacity: usize) -> Self {
        Self::Buffered(MessageQueue::new(capacity))
    }

    /// Routes one message. Returns `false` only when a full queue dropped it.
    pub fn deliver(&mut self, header: MessageHeader, text: &[u8]) -> bool {
        match self {
            Self::Buffered(queue) => queue.enqueue(header, text),
            Self::Callback(callback) => {
                callback(&MessageView::new(header, text));
                true
            }
        }
    }

    /// Returns `true` while a callback is installed.
    #[must_use]
    pub const fn is_callback(&self) -> bool {
        matches!(self, Self::Callback(_))
    }

    /// The queue, when buffering.
    #[must_use]
    pub const fn queue(&self) -> Option<&MessageQueue> {
        match self {
            Self::Buffered(queue) => Some(queue),
            Self::Callback(_) => None,
        }
    }

    /// Mutable access to the queue, when buffering.
    pub fn queue_mut(&mut self) -> Option<&mut MessageQueue> {
        match self {
            Self::Buffered(queue) => Some(queue),
            Self::Callback(_) => None,
        }
    }

    /// Switches delivery mode.
    ///
    /// Installing a callback first hands it every queued message in FIFO
    /// order. Clearing the callback starts a fresh, empty queue of
    /// `capacity` slots. Replacing one callback with another delivers nothing.
    /// Returns the number of queued messages flushed to the new callback.
    pub fn switch(&mut self, callback: Option<DebugCallback>, capacity: usize) -> usize {
        match callback {
            Some(mut callback) => {
                let Self::Buffered(queue) = self else {
                    *self = Self::Callback(callback);
                    return 0;
                };
                let mut flushed = 0;
                while let Some(message) = queue.pop() {
                    callback(&message.view());
                    flushed += 1;
                }
                *self = Self::Callback(callback);
                trace::trace_delivery_switch(true, flushed);
                flushed
            }
            None => {
                if self.is_callback() {
                    *self = Self::buffered(capacity);
                    trace::trace_delivery_switch(false, 0);
                }
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{MessageType, Severity, Source};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn header(id: u32) -> MessageHeader {
        MessageHeader::new(Source::Application, MessageType::Other, id, Severity::High)
    }

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, DebugCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let callback: DebugCallback = Box::new(move |view| sink.borrow_mut().push(view.id));
        (seen, callback)
    }

    #[test]
    fn callback_bypasses_full_queue() {
        let (seen, callback) = recorder();
        let mut delivery = Delivery::Callback(callback);
        for id in 0..20 {
            assert!(delivery.deliver(header(id), b"x"));
        }
        assert_eq!(seen.borrow().len(), 20);
        assert!(delivery.queue().is_none());
    }

    #[test]
    fn installing_callback_flushes_queue_in_order() {
        let mut delivery = Delivery::buffered(4);
        delivery.deliver(header(1), b"a");
        delivery.deliver(header(2), b"b");
        let (seen, callback) = recorder();
        assert_eq!(delivery.switch(Some(callback), 4), 2);
        assert!(delivery.is_callback());
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn clearing_callback_starts_empty_queue() {
        let (_, callback) = recorder();
        let mut delivery = Delivery::Callback(callback);
        delivery.switch(None, 3);
        let queue = delivery.queue().expect("buffered");
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 3);
    }

    #[test]
    fn clearing_without_callback_keeps_queue() {
        let mut delivery = Delivery::buffered(2);
        delivery.deliver(header(1), b"a");
        assert_eq!(delivery.switch(None, 2), 0);
        assert_eq!(delivery.queue().map(MessageQueue::len), Some(1));
    }
}
