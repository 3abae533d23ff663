use super::MessageSink;
use crate::echo_line::EchoLine;
use crate::line_mode::LineMode;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    fn render_line(&mut self, line: EchoLine<'_>, append_newline: bool) -> io::Result<()> {
        line.render_to_writer(&mut self.writer)?;
        if append_newline {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }

    /// Writes a single line using the sink's current [`LineMode`].
    pub fn write(&mut self, line: EchoLine<'_>) -> io::Result<()> {
        self.render_line(line, self.line_mode.append_newline())
    }

    /// Writes `line` using an explicit [`LineMode`] without mutating the sink.
    pub fn write_with_mode(&mut self, line: EchoLine<'_>, line_mode: LineMode) -> io::Result<()> {
        self.render_line(line, line_mode.append_newline())
    }

    /// Writes each line from the iterator to the underlying writer.
    pub fn write_all<'a, I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = EchoLine<'a>>,
    {
        let append_newline = self.line_mode.append_newline();
        for line in lines {
            self.render_line(line, append_newline)?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sink() -> MessageSink<Vec<u8>> {
        MessageSink::new(Vec::new())
    }

    #[test]
    fn write_appends_newline_in_default_mode() {
        let mut sink = make_sink();
        sink.write(EchoLine::new("gl", "test")).unwrap();
        assert_eq!(sink.writer(), b"gl: test\n");
    }

    #[test]
    fn write_with_mode_uses_provided_mode() {
        let mut sink = make_sink();
        sink.write_with_mode(EchoLine::new("gl", "test"), LineMode::WithoutNewline)
            .unwrap();
        assert!(!sink.writer().ends_with(b"\n"));
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
    }

    #[test]
    fn write_with_mode_with_newline_appends_newline() {
        let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write_with_mode(EchoLine::new("gl", "test"), LineMode::WithNewline)
            .unwrap();
        assert!(sink.writer().ends_with(b"\n"));
    }

    #[test]
    fn write_all_appends_newline_to_each() {
        let mut sink = make_sink();
        sink.write_all([EchoLine::new("a", "1"), EchoLine::new("b", "2")])
            .unwrap();
        let newline_count = sink.writer().iter().filter(|&&b| b == b'\n').count();
        assert_eq!(newline_count, 2);
    }

    #[test]
    fn write_all_empty_iterator_succeeds() {
        let mut sink = make_sink();
        sink.write_all(std::iter::empty()).unwrap();
        assert!(sink.writer().is_empty());
    }

    #[test]
    fn flush_succeeds() {
        let mut sink = make_sink();
        assert!(sink.flush().is_ok());
    }
}
