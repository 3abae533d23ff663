//! crates/debug-output/src/message.rs
//! Materialized debug messages and borrowed views handed to callbacks.

use std::borrow::Cow;

use crate::enums::{MessageType, Severity, Source};
use crate::gl::GLuint;
use crate::id::DynamicId;
use crate::trace;

const OUT_OF_MEMORY_TEXT: &[u8] = b"Debugging error: out of memory\0";

static OUT_OF_MEMORY_ID: DynamicId = DynamicId::new();

/// Classification and ID of a message, without its text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageHeader {
    /// Origin category.
    pub source: Source,
    /// Classification.
    pub ty: MessageType,
    /// Message ID within the `(source, ty)` namespace.
    pub id: GLuint,
    /// Urgency tier.
    pub severity: Severity,
}

impl MessageHeader {
    /// Bundles the four classification fields.
    #[must_use]
    pub const fn new(source: Source, ty: MessageType, id: GLuint, severity: Severity) -> Self {
        Self {
            source,
            ty,
            id,
            severity,
        }
    }

    /// Same header with a different type.
    #[must_use]
    pub const fn with_type(self, ty: MessageType) -> Self {
        Self { ty, ..self }
    }
}

/// A message owned by the queue or by a group level.
///
/// The stored text always ends with a NUL byte, and [`length`](Self::length)
/// counts it, matching the sizes reported to clients by the log query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugMessage {
    header: MessageHeader,
    text: Cow<'static, [u8]>,
}

impl DebugMessage {
    /// Copies `text` into a fresh NUL-terminated buffer.
    ///
    /// When the buffer cannot be allocated the shared out-of-memory
    /// placeholder is returned instead, so storing never fails.
    #[must_use]
    pub fn store(header: MessageHeader, text: &[u8]) -> Self {
        let mut owned = Vec::new();
        if owned.try_reserve_exact(text.len() + 1).is_err() {
            trace::trace_placeholder_substituted(text.len());
            return Self::out_of_memory();
        }
        owned.extend_from_slice(text);
        owned.push(0);
        Self {
            header,
            text: Cow::Owned(owned),
        }
    }

    /// The static placeholder substituted for messages that could not be stored.
    #[must_use]
    pub fn out_of_memory() -> Self {
        Self {
            header: MessageHeader::new(
                Source::Other,
                MessageType::Error,
                OUT_OF_MEMORY_ID.resolve(),
                Severity::High,
            ),
            text: Cow::Borrowed(OUT_OF_MEMORY_TEXT),
        }
    }

    /// Classification and ID.
    #[must_use]
    pub const fn header(&self) -> MessageHeader {
        self.header
    }

    /// Text without the terminating NUL.
    #[must_use]
    pub fn text(&self) -> &[u8] {
        self.text
            .split_last()
            .map(|(_, body)| body)
            .unwrap_or_default()
    }

    /// Text including the terminating NUL.
    #[must_use]
    pub fn text_with_nul(&self) -> &[u8] {
        &self.text
    }

    /// Text decoded for display, with invalid UTF-8 replaced.
    #[must_use]
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text())
    }

    /// Stored length in bytes, terminator included.
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` for the shared out-of-memory placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.text, Cow::Borrowed(_))
    }

    /// Borrowed view in the shape delivered to callbacks.
    #[must_use]
    pub fn view(&self) -> MessageView<'_> {
        MessageView::new(self.header, self.text())
    }
}

/// A message as seen by a callback: borrowed text, not retained after the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MessageView<'a> {
    /// Origin category.
    pub source: Source,
    /// Classification.
    pub ty: MessageType,
    /// Message ID.
    pub id: GLuint,
    /// Urgency tier.
    pub severity: Severity,
    /// Message text, without a terminator.
    pub text: &'a [u8],
}

impl<'a> MessageView<'a> {
    /// Builds a view from a header and borrowed text.
    #[must_use]
    pub const fn new(header: MessageHeader, text: &'a [u8]) -> Self {
        Self {
            source: header.source,
            ty: header.ty,
            id: header.id,
            severity: header.severity,
            text,
        }
    }

    /// Classification fields of the view.
    #[must_use]
    pub const fn header(&self) -> MessageHeader {
        MessageHeader::new(self.source, self.ty, self.id, self.severity)
    }

    /// Owned copy of the view, as the queue would have stored it.
    #[must_use]
    pub fn to_message(&self) -> DebugMessage {
        DebugMessage::store(self.header(), self.text)
    }
}

/// One entry returned by the buffer-oriented log query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    /// Classification and ID.
    pub header: MessageHeader,
    /// Bytes written for this message, terminator included.
    pub length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> MessageHeader {
        MessageHeader::new(Source::Application, MessageType::Marker, 7, Severity::Low)
    }

    #[test]
    fn store_appends_terminator() {
        let message = DebugMessage::store(header(), b"hello");
        assert_eq!(message.text(), b"hello");
        assert_eq!(message.text_with_nul(), b"hello\0");
        assert_eq!(message.length(), 6);
        assert!(!message.is_placeholder());
    }

    #[test]
    fn empty_text_still_has_terminator() {
        let message = DebugMessage::store(header(), b"");
        assert_eq!(message.length(), 1);
        assert!(message.text().is_empty());
    }

    #[test]
    fn placeholder_is_static_and_classified() {
        let placeholder = DebugMessage::out_of_memory();
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.text(), b"Debugging error: out of memory");
        let h = placeholder.header();
        assert_eq!(h.source, Source::Other);
        assert_eq!(h.ty, MessageType::Error);
        assert_eq!(h.severity, Severity::High);
        assert_ne!(h.id, 0);
        assert_eq!(DebugMessage::out_of_memory().header().id, h.id);
    }

    #[test]
    fn view_borrows_text_without_terminator() {
        let message = DebugMessage::store(header(), b"scope");
        let view = message.view();
        assert_eq!(view.text, b"scope");
        assert_eq!(view.header(), header());
        assert_eq!(view.to_message(), message);
    }

    #[test]
    fn with_type_keeps_other_fields() {
        let popped = header().with_type(MessageType::PopGroup);
        assert_eq!(popped.ty, MessageType::PopGroup);
        assert_eq!(popped.id, 7);
        assert_eq!(popped.source, Source::Application);
    }
}
