//! crates/debug-output/src/gl.rs
//! Raw GL scalar types and the enum values accepted at the entry-point boundary.

// The debug enum constants are named exactly after the values they carry.
#![allow(missing_docs)]

/// Raw enumeration value as passed through GL entry points.
pub type GLenum = u32;
/// Unsigned GL integer, used for message IDs.
pub type GLuint = u32;
/// Signed GL size; negative values carry special meaning at some entry points.
pub type GLsizei = i32;

/// Wildcard accepted by control entry points in place of a source, type, or severity.
pub const GL_DONT_CARE: GLenum = 0x1100;

/// No error recorded.
pub const GL_NO_ERROR: GLenum = 0;
/// An enumeration argument was out of range.
pub const GL_INVALID_ENUM: GLenum = 0x0500;
/// A numeric argument was out of range.
pub const GL_INVALID_VALUE: GLenum = 0x0501;
/// The operation is not allowed in the current state.
pub const GL_INVALID_OPERATION: GLenum = 0x0502;
/// A push would overflow a stack.
pub const GL_STACK_OVERFLOW: GLenum = 0x0503;
/// A pop would underflow a stack.
pub const GL_STACK_UNDERFLOW: GLenum = 0x0504;
/// Memory could not be allocated.
pub const GL_OUT_OF_MEMORY: GLenum = 0x0505;

pub const GL_DEBUG_SOURCE_API: GLenum = 0x8246;
pub const GL_DEBUG_SOURCE_WINDOW_SYSTEM: GLenum = 0x8247;
pub const GL_DEBUG_SOURCE_SHADER_COMPILER: GLenum = 0x8248;
pub const GL_DEBUG_SOURCE_THIRD_PARTY: GLenum = 0x8249;
pub const GL_DEBUG_SOURCE_APPLICATION: GLenum = 0x824A;
pub const GL_DEBUG_SOURCE_OTHER: GLenum = 0x824B;

pub const GL_DEBUG_TYPE_ERROR: GLenum = 0x824C;
pub const GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR: GLenum = 0x824D;
pub const GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR: GLenum = 0x824E;
pub const GL_DEBUG_TYPE_PORTABILITY: GLenum = 0x824F;
pub const GL_DEBUG_TYPE_PERFORMANCE: GLenum = 0x8250;
pub const GL_DEBUG_TYPE_OTHER: GLenum = 0x8251;
pub const GL_DEBUG_TYPE_MARKER: GLenum = 0x8268;
pub const GL_DEBUG_TYPE_PUSH_GROUP: GLenum = 0x8269;
pub const GL_DEBUG_TYPE_POP_GROUP: GLenum = 0x826A;

pub const GL_DEBUG_SEVERITY_HIGH: GLenum = 0x9146;
pub const GL_DEBUG_SEVERITY_MEDIUM: GLenum = 0x9147;
pub const GL_DEBUG_SEVERITY_LOW: GLenum = 0x9148;
pub const GL_DEBUG_SEVERITY_NOTIFICATION: GLenum = 0x826B;
