//! Property-based tests for the transition table.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated edge sets and event sequences.

use proptest::prelude::*;
use trellis::table::TransitionTable;
use trellis::{event_enum, state_enum, Transition};

state_enum! {
    enum TestState {
        Initial,
        Processing,
        Complete,
        Failed,
    }
}

event_enum! {
    enum TestEvent {
        Start,
        Finish,
        Abort,
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> TestState {
        match variant {
            0 => TestState::Initial,
            1 => TestState::Processing,
            2 => TestState::Complete,
            _ => TestState::Failed,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8) -> TestEvent {
        match variant {
            0 => TestEvent::Start,
            1 => TestEvent::Finish,
            _ => TestEvent::Abort,
        }
    }
}

prop_compose! {
    fn arbitrary_edge()(
        from in arbitrary_state(),
        event in arbitrary_event(),
        to in arbitrary_state(),
    ) -> Transition<TestState, TestEvent> {
        Transition::new(from, event, to)
    }
}

fn table_from(edges: &[Transition<TestState, TestEvent>]) -> TransitionTable<TestState, TestEvent> {
    let mut table = TransitionTable::new();
    table.register_batch(edges.iter().cloned());
    table
}

proptest! {
    #[test]
    fn transition_is_deterministic(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
        from in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let table = table_from(&edges);
        let result1 = table.transition(&from, &event);
        let result2 = table.transition(&from, &event);
        prop_assert_eq!(result1, result2);
    }

    #[test]
    fn last_write_wins(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
        from in arbitrary_state(),
        event in arbitrary_event(),
        to1 in arbitrary_state(),
        to2 in arbitrary_state(),
    ) {
        let mut table = table_from(&edges);
        table.register(from.clone(), event.clone(), to1);
        table.register(from.clone(), event.clone(), to2.clone());

        prop_assert!(table.can_transition(&from, &event));
        prop_assert_eq!(table.transition(&from, &event), Ok(to2));
    }

    #[test]
    fn miss_is_total(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
        from in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let table = table_from(&edges);

        // can_transition, transition, and peek_next_state must agree
        let can = table.can_transition(&from, &event);
        prop_assert_eq!(table.transition(&from, &event).is_ok(), can);
        prop_assert_eq!(table.peek_next_state(&from, &event).is_some(), can);
    }

    #[test]
    fn terminal_states_have_no_valid_events(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
        state in arbitrary_state(),
    ) {
        let table = table_from(&edges);
        prop_assert_eq!(table.is_terminal(&state), table.valid_events(&state).is_empty());
    }

    #[test]
    fn registered_edge_is_queryable(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
        edge in arbitrary_edge(),
    ) {
        let mut table = table_from(&edges);
        table.register(edge.from.clone(), edge.event.clone(), edge.to.clone());

        prop_assert!(table.can_transition(&edge.from, &edge.event));
        prop_assert_eq!(table.peek_next_state(&edge.from, &edge.event), Some(edge.to.clone()));
        prop_assert!(table.valid_events(&edge.from).contains(&edge.event));
        prop_assert!(table.all_states().contains(&edge.from));
        prop_assert!(table.all_states().contains(&edge.to));
        prop_assert!(!table.is_terminal(&edge.from));
    }

    #[test]
    fn all_states_has_no_duplicates(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
    ) {
        let table = table_from(&edges);
        let states = table.all_states();
        let unique: std::collections::HashSet<_> = states.iter().cloned().collect();
        prop_assert_eq!(states.len(), unique.len());
    }

    #[test]
    fn path_fold_matches_stepwise_transitions(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
        start in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..10),
    ) {
        let table = table_from(&edges);

        // Reference fold using transition() step by step
        let mut current = start.clone();
        let mut expected: Result<TestState, usize> = Ok(start.clone());
        for (i, event) in events.iter().enumerate() {
            match table.transition(&current, event) {
                Ok(next) => {
                    current = next.clone();
                    expected = Ok(next);
                }
                Err(_) => {
                    expected = Err(i + 1);
                    break;
                }
            }
        }

        match (table.validate_path(&start, &events), expected) {
            (Ok(end), Ok(want)) => prop_assert_eq!(end, want),
            (Err(err), Err(step)) => prop_assert_eq!(err.step, step),
            (got, want) => prop_assert!(false, "mismatch: got {:?}, want {:?}", got, want),
        }
    }

    #[test]
    fn empty_path_is_identity(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
        start in arbitrary_state(),
    ) {
        let table = table_from(&edges);
        prop_assert_eq!(table.validate_path(&start, &[]), Ok(start));
    }

    #[test]
    fn len_counts_distinct_keys(
        edges in prop::collection::vec(arbitrary_edge(), 0..20),
    ) {
        let table = table_from(&edges);

        let distinct: std::collections::HashSet<_> = edges
            .iter()
            .map(|e| (e.from.clone(), e.event.clone()))
            .collect();

        prop_assert_eq!(table.len(), distinct.len());
        prop_assert_eq!(table.is_empty(), edges.is_empty());
    }

    #[test]
    fn transition_roundtrip_serialization(edge in arbitrary_edge()) {
        let json = serde_json::to_string(&edge).unwrap();
        let deserialized: Transition<TestState, TestEvent> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(edge, deserialized);
    }
}
