//! Property tests for filtering, queueing, and group scoping.

use debug_output::{
    Classification, DebugLimits, DebugState, MessageHeader, MessageType, Selector, Severity,
    Source,
};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn app(id: u32, severity: Severity) -> MessageHeader {
    MessageHeader::new(Source::Application, MessageType::Other, id, severity)
}

proptest! {
    /// Bulk control at a severity other than the one an ID was first seen
    /// with never changes that ID's decision.
    #[test]
    fn known_id_ignores_other_severity_buckets(
        first in severity(),
        calls in prop::collection::vec((severity(), any::<bool>()), 0..16),
    ) {
        let mut state = DebugState::default();
        let id = 42;
        let initial = state.should_log(&app(id, first));
        for (sev, enabled) in calls.into_iter().filter(|(sev, _)| *sev != first) {
            state.control_messages(
                Selector::Only(Source::Application),
                Selector::Only(MessageType::Other),
                Selector::Only(sev),
                enabled,
            );
        }
        prop_assert_eq!(state.should_log(&app(id, first)), initial);
    }

    /// The queue holds the first `capacity` messages in arrival order.
    #[test]
    fn queue_keeps_oldest_in_order(capacity in 1usize..12, count in 0u32..40) {
        let mut state = DebugState::new(DebugLimits::default().with_queue_capacity(capacity));
        for id in 0..count {
            state.log(app(id, Severity::High), format!("{id}").as_bytes());
        }
        let kept = (count as usize).min(capacity);
        let ids: Vec<u32> = state
            .drain_messages(usize::MAX)
            .iter()
            .map(|m| m.header().id)
            .collect();
        prop_assert_eq!(ids, (0..kept as u32).collect::<Vec<_>>());
    }

    /// Anything done inside a group is invisible once it is popped.
    #[test]
    fn pop_restores_outer_decisions(
        ids in prop::collection::vec(0u32..8, 1..10),
        toggles in prop::collection::vec((0u32..8, any::<bool>()), 0..10),
        bulk in any::<bool>(),
    ) {
        let mut state = DebugState::default();
        for &id in &ids {
            state.should_log(&app(id, Severity::Medium));
        }
        let before: Vec<_> = (0..8)
            .map(|id| state.is_message_enabled(Source::Application, MessageType::Other, id))
            .collect();

        state.push_group(Source::Application, 1, b"scope").unwrap();
        for (id, enabled) in toggles {
            state.set_message_state(Source::Application, MessageType::Other, id, enabled);
        }
        state.control_messages(Selector::Any, Selector::Any, Selector::Any, bulk);
        state.pop_group().unwrap();

        let after: Vec<_> = (0..8)
            .map(|id| state.is_message_enabled(Source::Application, MessageType::Other, id))
            .collect();
        prop_assert_eq!(before, after);
        for &source in Source::ALL {
            prop_assert!(
                !state.current_level().default_for(Severity::Low, source, MessageType::Other)
            );
        }
    }
}
