#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `debug-output` implements per-context debug message output for a
//! graphics API. Clients and the implementation emit classified messages;
//! a consumer enables or disables classes of them, reads queued messages
//! back, or installs a callback that receives them synchronously.
//!
//! Messages are classified along three closed dimensions, [`Source`],
//! [`MessageType`], and [`Severity`], plus a numeric ID that is meaningful
//! within one `(source, type)` namespace.
//!
//! # Design
//!
//! - [`FilterLevel`] decides whether a message passes. Each namespace keeps
//!   an entry per observed ID and files the ID under the severity it was
//!   first seen with, so bulk control walks only the matching bucket. A
//!   [`DefaultTable`] answers for IDs not yet observed.
//! - [`GroupStack`] holds nested filter levels. Pushing a debug group clones
//!   the current level; popping discards it with every change made inside.
//! - [`Delivery`] is either a bounded [`MessageQueue`] or a client
//!   [`DebugCallback`], never both.
//! - [`DebugState`] combines these behind typed operations returning
//!   [`DebugError`]. [`Context`] wraps it with GL-shaped entry points that
//!   validate raw enum values and record an [`ErrorCode`] instead of
//!   returning errors.
//! - [`IdAllocator`] hands out process-unique IDs to implementation call
//!   sites through [`DynamicId`] cells.
//!
//! # Invariants
//!
//! - An ID is filed in at most one severity bucket per level, at the first
//!   filtering decision that sees it. Later control calls never move it.
//! - The queue keeps the oldest messages when full and drops new arrivals.
//! - A short destination buffer leaves the head message queued for a retry.
//! - A pop marker carries exactly the text, source, and ID of its push.
//! - A rejected entry-point call changes nothing beyond the recorded error.
//!
//! # Examples
//!
//! ```
//! use debug_output::{Context, Echo, Selector, Severity, Source, MessageType, MessageHeader};
//! use std::sync::Arc;
//!
//! let mut ctx = Context::new().with_echo(Arc::new(Echo::silent()));
//! let state = ctx.debug_state();
//! let header = MessageHeader::new(Source::Application, MessageType::Error, 0, Severity::High);
//!
//! assert!(state.log(header, b"boom"));
//! state.control_messages(Selector::Only(Source::Application), Selector::Any, Selector::Any, false);
//! assert!(!state.log(header, b"boom"));
//! assert_eq!(state.drain_messages(10).len(), 1);
//! ```

mod config;
mod context;
mod delivery;
mod echo;
mod enums;
mod error;
mod filter;
pub mod gl;
mod group;
mod id;
mod limits;
mod message;
mod queue;
mod state;
pub mod trace;
mod validate;

pub use config::{DEBUG_ENV, EchoConfig, LOG_FILE_ENV};
pub use context::Context;
pub use delivery::{DebugCallback, Delivery};
pub use echo::{
    ECHO_PREFIX, Echo, ErrorEchoThrottle, MAX_PROBLEM_REPORTS, ReportLimiter, USER_ERROR_PREFIX,
    WARNING_PREFIX, problem,
};
pub use enums::{Classification, MessageType, Selector, Severity, Source};
pub use error::{DebugError, ErrorCode};
pub use filter::{DefaultTable, FilterEntry, FilterLevel, Namespace};
pub use group::{GroupStack, NestedLevel};
pub use id::{DynamicId, IdAllocator};
pub use limits::{
    DebugLimits, MAX_DEBUG_GROUP_STACK_DEPTH, MAX_DEBUG_LOGGED_MESSAGES, MAX_DEBUG_MESSAGE_LENGTH,
};
pub use message::{DebugMessage, LogRecord, MessageHeader, MessageView};
pub use queue::{DequeueOutcome, MessageQueue};
pub use state::DebugState;
pub use validate::{
    Caller, ControlParams, InsertParams, validate_control, validate_group_source, validate_insert,
};
