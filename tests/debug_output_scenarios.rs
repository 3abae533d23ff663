//! End-to-end scenarios through the public entry points.
//!
//! Each test drives a `Context` the way a client would: raw enum values in,
//! recorded errors and packed log buffers out.

use std::sync::Arc;

use gldebug::{Context, Echo, MessageType, Severity, Source, gl};
use proptest::prelude::*;

// ============================================================================
// Helper functions
// ============================================================================

fn quiet_context() -> Context {
    Context::new().with_echo(Arc::new(Echo::silent()))
}

fn insert_app_error(ctx: &mut Context, id: u32, severity: u32, text: &[u8]) {
    ctx.debug_message_insert(
        gl::GL_DEBUG_SOURCE_APPLICATION,
        gl::GL_DEBUG_TYPE_ERROR,
        id,
        severity,
        -1,
        text,
    );
}

fn read_all(ctx: &mut Context) -> Vec<(u32, Vec<u8>)> {
    let mut buf = [0u8; 1024];
    let records = ctx.get_debug_message_log(64, 1024, Some(&mut buf));
    let mut offset = 0;
    records
        .iter()
        .map(|record| {
            let text = buf[offset..offset + record.length - 1].to_vec();
            offset += record.length;
            (record.header.id, text)
        })
        .collect()
}

// ============================================================================
// Insert, control, insert
// ============================================================================

#[test]
fn control_after_first_sighting_only_affects_matching_bucket() {
    let mut ctx = quiet_context();

    insert_app_error(&mut ctx, 0, gl::GL_DEBUG_SEVERITY_HIGH, b"boom\0");

    // the ID was filed under HIGH, so a LOW control does not reach it
    ctx.debug_message_control(
        gl::GL_DEBUG_SOURCE_APPLICATION,
        gl::GL_DEBUG_TYPE_ERROR,
        gl::GL_DEBUG_SEVERITY_LOW,
        &[],
        false,
    );
    insert_app_error(&mut ctx, 0, gl::GL_DEBUG_SEVERITY_HIGH, b"boom\0");

    ctx.debug_message_control(
        gl::GL_DEBUG_SOURCE_APPLICATION,
        gl::GL_DONT_CARE,
        gl::GL_DONT_CARE,
        &[],
        false,
    );
    insert_app_error(&mut ctx, 0, gl::GL_DEBUG_SEVERITY_HIGH, b"boom\0");

    assert_eq!(ctx.get_error(), gl::GL_NO_ERROR);
    let messages = read_all(&mut ctx);
    assert_eq!(messages, vec![(0, b"boom".to_vec()), (0, b"boom".to_vec())]);
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn group_scopes_filter_changes_and_brackets_messages() {
    let mut ctx = quiet_context();
    ctx.debug_message_control(
        gl::GL_DONT_CARE,
        gl::GL_DONT_CARE,
        gl::GL_DEBUG_SEVERITY_NOTIFICATION,
        &[],
        true,
    );

    ctx.push_debug_group(gl::GL_DEBUG_SOURCE_APPLICATION, 5, 5, b"scope");
    ctx.debug_message_control(
        gl::GL_DEBUG_SOURCE_APPLICATION,
        gl::GL_DEBUG_TYPE_OTHER,
        gl::GL_DONT_CARE,
        &[42],
        false,
    );
    ctx.debug_message_insert(
        gl::GL_DEBUG_SOURCE_APPLICATION,
        gl::GL_DEBUG_TYPE_OTHER,
        42,
        gl::GL_DEBUG_SEVERITY_HIGH,
        -1,
        b"hidden\0",
    );
    ctx.pop_debug_group();
    ctx.debug_message_insert(
        gl::GL_DEBUG_SOURCE_APPLICATION,
        gl::GL_DEBUG_TYPE_OTHER,
        42,
        gl::GL_DEBUG_SEVERITY_HIGH,
        -1,
        b"visible\0",
    );

    assert_eq!(ctx.get_error(), gl::GL_NO_ERROR);
    let messages = read_all(&mut ctx);
    assert_eq!(
        messages,
        vec![
            (5, b"scope".to_vec()),
            (5, b"scope".to_vec()),
            (42, b"visible".to_vec()),
        ]
    );
}

#[test]
fn pop_marker_mirrors_push_marker() {
    let mut ctx = quiet_context();
    ctx.debug_message_control(
        gl::GL_DONT_CARE,
        gl::GL_DONT_CARE,
        gl::GL_DEBUG_SEVERITY_NOTIFICATION,
        &[],
        true,
    );
    ctx.push_debug_group(gl::GL_DEBUG_SOURCE_THIRD_PARTY, 9, -1, b"pass 2\0");
    ctx.pop_debug_group();

    let drained = ctx.debug_state().drain_messages(2);
    let (push, pop) = (drained[0].header(), drained[1].header());
    assert_eq!(push.ty, MessageType::PushGroup);
    assert_eq!(pop.ty, MessageType::PopGroup);
    assert_eq!((push.source, push.id), (pop.source, pop.id));
    assert_eq!(push.source, Source::ThirdParty);
    assert_eq!(pop.severity, Severity::Notification);
    assert_eq!(drained[0].text(), drained[1].text());
}

// ============================================================================
// Retrieval
// ============================================================================

#[test]
fn short_buffer_leaves_message_for_retry() {
    let mut ctx = quiet_context();
    insert_app_error(&mut ctx, 3, gl::GL_DEBUG_SEVERITY_MEDIUM, b"needs room\0");

    let mut small = [0u8; 4];
    assert!(ctx.get_debug_message_log(1, 4, Some(&mut small)).is_empty());

    let lengths = ctx.get_debug_message_log(1, 0, None);
    assert_eq!(lengths[0].length, 11);

    let mut big = vec![0u8; lengths[0].length];
    let records = ctx.get_debug_message_log(1, 11, Some(&mut big));
    assert_eq!(records.len(), 1);
    assert_eq!(big, b"needs room\0");
    assert_eq!(ctx.debug_state().queued_messages(), 0);
}

#[test]
fn full_queue_drops_newest() {
    let mut ctx = quiet_context();
    for id in 0..12 {
        insert_app_error(&mut ctx, id, gl::GL_DEBUG_SEVERITY_HIGH, b"m\0");
    }
    let ids: Vec<_> = read_all(&mut ctx).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, (0..10).collect::<Vec<_>>());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Any interleaving of pushes and pops keeps depth within bounds and
    /// records exactly the expected overflow and underflow errors.
    #[test]
    fn depth_tracks_balanced_operations(ops in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut ctx = quiet_context();
        let mut depth = 0usize;
        for push in ops {
            if push {
                ctx.push_debug_group(gl::GL_DEBUG_SOURCE_APPLICATION, 1, -1, b"g\0");
                let expected = if depth < 63 {
                    depth += 1;
                    gl::GL_NO_ERROR
                } else {
                    gl::GL_STACK_OVERFLOW
                };
                prop_assert_eq!(ctx.get_error(), expected);
            } else {
                ctx.pop_debug_group();
                let expected = if depth > 0 {
                    depth -= 1;
                    gl::GL_NO_ERROR
                } else {
                    gl::GL_STACK_UNDERFLOW
                };
                prop_assert_eq!(ctx.get_error(), expected);
            }
            prop_assert_eq!(ctx.debug_state().group_depth(), depth);
        }
    }
}
