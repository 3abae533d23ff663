//! Structured tracing for filter decisions, queue activity, and group scoping.
//!
//! Every helper is compiled to an inline no-op unless the `tracing` feature
//! is enabled, so the hot filtering path pays nothing by default.

use crate::enums::{MessageType, Selector, Severity, Source};
use crate::gl::GLuint;
use crate::message::MessageHeader;

/// Target for filter decisions and control calls.
#[cfg(feature = "tracing")]
pub const FILTER_TARGET: &str = "gldebug::filter";
/// Target for queue drops, placeholder substitution, and delivery switches.
#[cfg(feature = "tracing")]
pub const QUEUE_TARGET: &str = "gldebug::queue";
/// Target for debug group transitions.
#[cfg(feature = "tracing")]
pub const GROUP_TARGET: &str = "gldebug::group";

// ============================================================================
// Filter store
// ============================================================================

/// Traces one filtering decision.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_decision(header: &MessageHeader, enabled: bool, first_seen: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        source = %header.source,
        ty = %header.ty,
        id = header.id,
        severity = %header.severity,
        enabled,
        first_seen,
        "filter_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_filter_decision(_header: &MessageHeader, _enabled: bool, _first_seen: bool) {}

/// Traces a filter entry that could not be allocated.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_entry_dropped(id: GLuint) {
    tracing::warn!(target: FILTER_TARGET, id, "filter_entry_dropped");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_filter_entry_dropped(_id: GLuint) {}

/// Traces a bulk control call over a cross product of selectors.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_bulk_control(
    source: Selector<Source>,
    ty: Selector<MessageType>,
    severity: Selector<Severity>,
    enabled: bool,
    updated: usize,
) {
    tracing::debug!(
        target: FILTER_TARGET,
        source = ?source,
        ty = ?ty,
        severity = ?severity,
        enabled,
        updated,
        "bulk_control"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_bulk_control(
    _source: Selector<Source>,
    _ty: Selector<MessageType>,
    _severity: Selector<Severity>,
    _enabled: bool,
    _updated: usize,
) {
}

/// Traces a control call naming explicit IDs.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_id_control(source: Source, ty: MessageType, count: usize, enabled: bool) {
    tracing::debug!(
        target: FILTER_TARGET,
        source = %source,
        ty = %ty,
        count,
        enabled,
        "id_control"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_id_control(_source: Source, _ty: MessageType, _count: usize, _enabled: bool) {}

// ============================================================================
// Queue and delivery
// ============================================================================

/// Traces a message dropped by a full queue.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_queue_drop(header: &MessageHeader, queued: usize) {
    tracing::debug!(
        target: QUEUE_TARGET,
        source = %header.source,
        ty = %header.ty,
        id = header.id,
        queued,
        "queue_full_drop"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_queue_drop(_header: &MessageHeader, _queued: usize) {}

/// Traces substitution of the out-of-memory placeholder.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_placeholder_substituted(requested: usize) {
    tracing::warn!(target: QUEUE_TARGET, requested, "placeholder_substituted");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_placeholder_substituted(_requested: usize) {}

/// Traces a switch between buffered and callback delivery.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_delivery_switch(to_callback: bool, flushed: usize) {
    tracing::debug!(target: QUEUE_TARGET, to_callback, flushed, "delivery_switch");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_delivery_switch(_to_callback: bool, _flushed: usize) {}

// ============================================================================
// Group stack
// ============================================================================

/// Traces a group push; `depth` is the depth after the push.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_group_push(depth: usize, header: &MessageHeader, logged: bool) {
    tracing::debug!(
        target: GROUP_TARGET,
        depth,
        source = %header.source,
        id = header.id,
        logged,
        "group_push"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_group_push(_depth: usize, _header: &MessageHeader, _logged: bool) {}

/// Traces a group pop; `depth` is the depth after the pop.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_group_pop(depth: usize, header: &MessageHeader, logged: bool) {
    tracing::debug!(
        target: GROUP_TARGET,
        depth,
        source = %header.source,
        id = header.id,
        logged,
        "group_pop"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn trace_group_pop(_depth: usize, _header: &MessageHeader, _logged: bool) {}
