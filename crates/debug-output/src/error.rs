//! crates/debug-output/src/error.rs
//! Error codes recorded on the context and the misuse conditions that raise them.

use std::fmt;

use thiserror::Error;

use crate::gl::{self, GLenum};

/// Error value recorded on a context for later `get_error` queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// An enumeration argument was out of range.
    InvalidEnum,
    /// A numeric argument was out of range.
    InvalidValue,
    /// The operation is not allowed with the given arguments or state.
    InvalidOperation,
    /// A debug group push would exceed the maximum depth.
    StackOverflow,
    /// A debug group pop was issued at the base level.
    StackUnderflow,
    /// Memory could not be allocated.
    OutOfMemory,
}

impl ErrorCode {
    /// GL error value.
    #[must_use]
    pub const fn to_gl(self) -> GLenum {
        match self {
            Self::InvalidEnum => gl::GL_INVALID_ENUM,
            Self::InvalidValue => gl::GL_INVALID_VALUE,
            Self::InvalidOperation => gl::GL_INVALID_OPERATION,
            Self::StackOverflow => gl::GL_STACK_OVERFLOW,
            Self::StackUnderflow => gl::GL_STACK_UNDERFLOW,
            Self::OutOfMemory => gl::GL_OUT_OF_MEMORY,
        }
    }

    /// GL enumerant name, e.g. `GL_INVALID_ENUM`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidEnum => "GL_INVALID_ENUM",
            Self::InvalidValue => "GL_INVALID_VALUE",
            Self::InvalidOperation => "GL_INVALID_OPERATION",
            Self::StackOverflow => "GL_STACK_OVERFLOW",
            Self::StackUnderflow => "GL_STACK_UNDERFLOW",
            Self::OutOfMemory => "GL_OUT_OF_MEMORY",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller misuse detected by a debug output operation.
///
/// Every variant names the entry point that rejected the call and maps onto
/// exactly one [`ErrorCode`]. The operation that produced it performed no
/// state change.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DebugError {
    /// A source, type, or severity was unknown or not allowed for the caller.
    #[error("bad values passed to {caller}(source=0x{src:x}, type=0x{ty:x}, severity=0x{severity:x})")]
    InvalidEnum {
        /// Entry point name.
        caller: &'static str,
        /// Raw source value.
        src: GLenum,
        /// Raw type value.
        ty: GLenum,
        /// Raw severity value.
        severity: GLenum,
    },
    /// A debug group was pushed with a source that clients may not use.
    #[error("bad value passed to {caller}(source=0x{src:x})")]
    InvalidGroupSource {
        /// Entry point name.
        caller: &'static str,
        /// Raw source value.
        src: GLenum,
    },
    /// Message text was not shorter than the configured maximum.
    #[error(
        "{caller}(length={length}, which is not less than GL_MAX_DEBUG_MESSAGE_LENGTH={max})"
    )]
    MessageTooLong {
        /// Entry point name.
        caller: &'static str,
        /// Length supplied.
        length: usize,
        /// Configured maximum.
        max: usize,
    },
    /// A negative buffer size was passed to log retrieval.
    #[error("{caller}(logSize={log_size} : logSize must not be negative)")]
    NegativeLogSize {
        /// Entry point name.
        caller: &'static str,
        /// Size supplied.
        log_size: i32,
    },
    /// An ID list was combined with a wildcard namespace or a fixed severity.
    #[error(
        "{caller}(When passing an array of ids, severity must be GL_DONT_CARE, and source and type must not be GL_DONT_CARE.)"
    )]
    IdsRequireNamespace {
        /// Entry point name.
        caller: &'static str,
    },
    /// The group stack is already at its maximum depth.
    #[error("{caller}")]
    StackOverflow {
        /// Entry point name.
        caller: &'static str,
    },
    /// The group stack is already at the base level.
    #[error("{caller}")]
    StackUnderflow {
        /// Entry point name.
        caller: &'static str,
    },
}

impl DebugError {
    /// Error code recorded on the context for this condition.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidEnum { .. } | Self::InvalidGroupSource { .. } => ErrorCode::InvalidEnum,
            Self::MessageTooLong { .. } | Self::NegativeLogSize { .. } => ErrorCode::InvalidValue,
            Self::IdsRequireNamespace { .. } => ErrorCode::InvalidOperation,
            Self::StackOverflow { .. } => ErrorCode::StackOverflow,
            Self::StackUnderflow { .. } => ErrorCode::StackUnderflow,
        }
    }

    /// Name of the entry point that rejected the call.
    #[must_use]
    pub const fn caller(&self) -> &'static str {
        match self {
            Self::InvalidEnum { caller, .. }
            | Self::InvalidGroupSource { caller, .. }
            | Self::MessageTooLong { caller, .. }
            | Self::NegativeLogSize { caller, .. }
            | Self::IdsRequireNamespace { caller }
            | Self::StackOverflow { caller }
            | Self::StackUnderflow { caller } => caller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_gl_values() {
        assert_eq!(ErrorCode::InvalidEnum.to_gl(), 0x0500);
        assert_eq!(ErrorCode::StackUnderflow.to_gl(), 0x0504);
        assert_eq!(ErrorCode::OutOfMemory.to_string(), "GL_OUT_OF_MEMORY");
    }

    #[test]
    fn invalid_enum_formats_raw_values() {
        let err = DebugError::InvalidEnum {
            caller: "glDebugMessageInsert",
            src: 0x8246,
            ty: 0x824c,
            severity: 0x1100,
        };
        assert_eq!(
            err.to_string(),
            "bad values passed to glDebugMessageInsert(source=0x8246, type=0x824c, severity=0x1100)"
        );
        assert_eq!(err.code(), ErrorCode::InvalidEnum);
        assert_eq!(err.caller(), "glDebugMessageInsert");
    }

    #[test]
    fn stack_errors_carry_caller_only() {
        let err = DebugError::StackOverflow {
            caller: "glPushDebugGroup",
        };
        assert_eq!(err.to_string(), "glPushDebugGroup");
        assert_eq!(err.code(), ErrorCode::StackOverflow);
    }

    #[test]
    fn message_too_long_is_invalid_value() {
        let err = DebugError::MessageTooLong {
            caller: "glDebugMessageInsert",
            length: 4096,
            max: 4096,
        };
        assert_eq!(err.code(), ErrorCode::InvalidValue);
        assert!(err.to_string().contains("length=4096"));
    }
}
