//! crates/debug-output/src/validate.rs
//! Translation of raw entry-point enums into typed values, per caller.

use crate::enums::{Classification, MessageType, Selector, Severity, Source};
use crate::error::DebugError;
use crate::gl::GLenum;

/// Entry point on whose behalf values are validated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Caller {
    /// `glDebugMessageInsert`
    Insert,
    /// `glDebugMessageControl`
    Control,
    /// `glPushDebugGroup`
    PushGroup,
    /// `glPopDebugGroup`
    PopGroup,
    /// `glGetDebugMessageLog`
    GetLog,
}

impl Caller {
    /// GL function name used in error reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insert => "glDebugMessageInsert",
            Self::Control => "glDebugMessageControl",
            Self::PushGroup => "glPushDebugGroup",
            Self::PopGroup => "glPopDebugGroup",
            Self::GetLog => "glGetDebugMessageLog",
        }
    }
}

/// Validated classification of a client-inserted message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InsertParams {
    /// Client source.
    pub source: Source,
    /// Non-group type.
    pub ty: MessageType,
    /// Concrete severity.
    pub severity: Severity,
}

/// Validated selection of a control call; each dimension may be a wildcard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlParams {
    /// Selected sources.
    pub source: Selector<Source>,
    /// Selected types.
    pub ty: Selector<MessageType>,
    /// Selected severities.
    pub severity: Selector<Severity>,
}

fn invalid_enum(caller: Caller, src: GLenum, ty: GLenum, severity: GLenum) -> DebugError {
    DebugError::InvalidEnum {
        caller: caller.name(),
        src,
        ty,
        severity,
    }
}

/// Accepts only values a client may insert: an application or third-party
/// source, a non-group type, and a concrete severity.
pub fn validate_insert(src: GLenum, ty: GLenum, severity: GLenum) -> Result<InsertParams, DebugError> {
    let reject = || invalid_enum(Caller::Insert, src, ty, severity);

    let source = Source::from_gl(src)
        .filter(|source| source.is_client())
        .ok_or_else(reject)?;
    let message_type = MessageType::from_gl(ty)
        .filter(|ty| !ty.is_group_marker())
        .ok_or_else(reject)?;
    let severity = Severity::from_gl(severity).ok_or_else(reject)?;

    Ok(InsertParams {
        source,
        ty: message_type,
        severity,
    })
}

/// Accepts any known value or the `GL_DONT_CARE` wildcard in each dimension.
pub fn validate_control(src: GLenum, ty: GLenum, severity: GLenum) -> Result<ControlParams, DebugError> {
    let reject = || invalid_enum(Caller::Control, src, ty, severity);

    Ok(ControlParams {
        source: Selector::from_gl(src).ok_or_else(reject)?,
        ty: Selector::from_gl(ty).ok_or_else(reject)?,
        severity: Selector::from_gl(severity).ok_or_else(reject)?,
    })
}

/// Accepts only the client sources for a group push.
pub fn validate_group_source(src: GLenum) -> Result<Source, DebugError> {
    Source::from_gl(src)
        .filter(|source| source.is_client())
        .ok_or(DebugError::InvalidGroupSource {
            caller: Caller::PushGroup.name(),
            src,
        })
}
