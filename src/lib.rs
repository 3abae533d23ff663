#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `gldebug` bundles the debug output subsystem of a graphics API
//! implementation: message classification, per-context filtering with debug
//! group scoping, a bounded message queue or client callback, and the plain
//! text echo of errors and warnings.
//!
//! The functionality lives in two workspace crates re-exported here:
//!
//! - [`debug_output`] holds the filter store, queue, group stack, and the
//!   GL-shaped entry points on [`Context`].
//! - [`logging_sink`] renders prefixed echo lines into any writer.
//!
//! # Features
//!
//! - `serde` derives serialization for classifications, limits, and echo
//!   configuration.
//! - `tracing` emits structured events for filter decisions, queue drops,
//!   and group transitions.
//!
//! # Examples
//!
//! ```
//! use gldebug::{Context, Echo, gl};
//! use std::sync::Arc;
//!
//! let mut ctx = Context::new().with_echo(Arc::new(Echo::silent()));
//! ctx.debug_message_insert(
//!     gl::GL_DEBUG_SOURCE_APPLICATION,
//!     gl::GL_DEBUG_TYPE_MARKER,
//!     7,
//!     gl::GL_DEBUG_SEVERITY_MEDIUM,
//!     -1,
//!     b"frame start\0",
//! );
//!
//! let mut log = [0u8; 64];
//! let records = ctx.get_debug_message_log(1, 64, Some(&mut log));
//! assert_eq!(records[0].length, 12);
//! assert_eq!(&log[..12], b"frame start\0");
//! ```

pub use debug_output;
pub use debug_output::*;
pub use logging_sink;
