use std::fmt;
use std::io::{self, Write};

/// A single prefixed diagnostic line, borrowed from the caller.
///
/// Renders as `"<prefix>: <text>"`. An empty prefix renders the text alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EchoLine<'a> {
    prefix: &'a str,
    text: &'a str,
}

impl<'a> EchoLine<'a> {
    /// Creates a line from a prefix and body text.
    #[must_use]
    pub const fn new(prefix: &'a str, text: &'a str) -> Self {
        Self { prefix, text }
    }

    /// Returns the prefix.
    #[must_use]
    pub const fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// Returns the body text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    pub(crate) fn render_to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if !self.prefix.is_empty() {
            writer.write_all(self.prefix.as_bytes())?;
            writer.write_all(b": ")?;
        }
        writer.write_all(self.text.as_bytes())
    }
}

impl fmt::Display for EchoLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            f.write_str(self.text)
        } else {
            write!(f, "{}: {}", self.prefix, self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_prefix_and_text() {
        let line = EchoLine::new("gl warning", "bad texture");
        assert_eq!(line.to_string(), "gl warning: bad texture");
    }

    #[test]
    fn empty_prefix_renders_text_only() {
        let line = EchoLine::new("", "bare");
        let mut out = Vec::new();
        line.render_to_writer(&mut out).unwrap();
        assert_eq!(out, b"bare");
        assert_eq!(line.to_string(), "bare");
    }

    #[test]
    fn accessors_return_parts() {
        let line = EchoLine::new("p", "t");
        assert_eq!(line.prefix(), "p");
        assert_eq!(line.text(), "t");
    }
}
