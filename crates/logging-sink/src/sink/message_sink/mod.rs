use std::fmt;

use crate::line_mode::LineMode;

/// Streaming sink that renders [`EchoLine`](crate::EchoLine) values into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with the configured
/// [`LineMode`]. Each call to [`write`](Self::write) renders the supplied
/// line and flushes the writer so echo output never lingers in a buffer when
/// the process aborts.
///
/// # Examples
///
/// ```
/// use logging_sink::{EchoLine, MessageSink};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write(EchoLine::new("gl", "first"))?;
/// sink.write(EchoLine::new("gl", "second"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    line_mode: LineMode,
}

mod constructors;
mod writing;

impl<W> MessageSink<W> {
    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
