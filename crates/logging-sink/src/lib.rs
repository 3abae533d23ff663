#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` renders prefixed plain-text diagnostic lines into any
//! [`std::io::Write`] target. It backs the "verbose" echo of the debug output
//! subsystem, where warnings, user errors, and implementation problems are
//! printed as `"<prefix>: <text>"` to stderr or to a configured log file.
//!
//! # Design
//!
//! The crate exposes [`MessageSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor, and [`EchoLine`], the borrowed unit it
//! renders. Callers control whether rendered lines end with a newline by
//! selecting a [`LineMode`], either per sink or per write.
//!
//! # Invariants
//!
//! - The sink never copies line payloads; prefix and text are streamed
//!   directly into the writer.
//! - Every write is followed by a flush so interleaved stderr output stays
//!   ordered with the caller's own prints.
//! - `LineMode::WithNewline` is the default.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{EchoLine, LineMode, MessageSink};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write(EchoLine::new("gl warning", "texture too large")).unwrap();
//!
//! let mut partial = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! partial.write(EchoLine::new("gl", "state dump")).unwrap();
//!
//! assert_eq!(sink.into_inner(), b"gl warning: texture too large\n".to_vec());
//! assert_eq!(partial.into_inner(), b"gl: state dump".to_vec());
//! ```

mod echo_line;
mod line_mode;
mod sink;

pub use echo_line::EchoLine;
pub use line_mode::LineMode;
pub use sink::MessageSink;
