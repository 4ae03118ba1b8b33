//! Property-based tests for composition and reducer combination.

use proptest::prelude::*;
use redux_core::{combine_reducers, compose, Action, PlainAction, ReducerMap, Unary};
use std::sync::Arc;

fn counter(state: Option<Arc<i64>>, action: &PlainAction) -> Arc<i64> {
    let state = state.unwrap_or_default();
    match action.kind.as_str() {
        "INCREMENT" => Arc::new(*state + 1),
        "DECREMENT" => Arc::new(*state - 1),
        _ => state,
    }
}

fn arbitrary_action() -> impl Strategy<Value = PlainAction> {
    prop_oneof![
        Just(PlainAction::new("INCREMENT")),
        Just(PlainAction::new("DECREMENT")),
        "[A-Z_]{1,12}".prop_map(PlainAction::new),
    ]
}

proptest! {
    #[test]
    fn compose_matches_nested_application(
        a in -1000i64..1000,
        b in -1000i64..1000,
        x in -1000i64..1000,
    ) {
        let f: Unary<i64> = Box::new(move |v| v.wrapping_mul(3).wrapping_add(a));
        let g: Unary<i64> = Box::new(move |v| v.wrapping_sub(b));
        let h: Unary<i64> = Box::new(|v| v.wrapping_mul(v));

        let composed = compose(vec![f, g, h]);
        let expected = (x.wrapping_mul(x).wrapping_sub(b)).wrapping_mul(3).wrapping_add(a);
        prop_assert_eq!(composed(x), expected);
    }

    #[test]
    fn combined_state_identity_tracks_slice_changes(
        actions in prop::collection::vec(arbitrary_action(), 0..32),
    ) {
        let reducer = combine_reducers(ReducerMap::new().slice("counter", counter));
        let mut state = reducer(None, &PlainAction::init());
        let mut expected = 0i64;

        for action in &actions {
            let next = reducer(Some(Arc::clone(&state)), action);
            match action.kind.as_str() {
                "INCREMENT" => expected += 1,
                "DECREMENT" => expected -= 1,
                _ => prop_assert!(Arc::ptr_eq(&state, &next)),
            }
            state = next;
        }

        prop_assert_eq!(state.get::<i64>("counter").copied(), Some(expected));
    }
}
