//! Store assembly for counter-lander

use crate::actions::AppAction;
use crate::middleware::LimitMiddleware;
use crate::reducers::{root_reducer, COUNTER, TIMER};
use counter_config::CounterConfig;
use redux_core::{
    create_store_with_enhancer, ApplyMiddleware, CombinedState, LoggingMiddleware, Store,
    ThunkMiddleware,
};

pub type AppStore = Store<CombinedState, AppAction>;

/// Build the application store
///
/// Middleware order: thunks are resolved first, then the limit check, and the
/// logger sits closest to the reducer so it only sees actions that will be
/// reduced.
pub fn build_store(config: &CounterConfig) -> AppStore {
    let enhancer = ApplyMiddleware::new()
        .with(ThunkMiddleware)
        .with(LimitMiddleware::new(config.limit))
        .with(LoggingMiddleware::new(describe_state));

    let store = create_store_with_enhancer(root_reducer(), None, &enhancer);
    log::info!("Store ready: {}", describe_state(&store.get_state()));
    store
}

fn describe_state(state: &CombinedState) -> String {
    format!(
        "counter is {}, timer is {}",
        state.get::<i64>(COUNTER).copied().unwrap_or_default(),
        state.get::<String>(TIMER).map(String::as_str).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter(store: &AppStore) -> i64 {
        store.get_state().get::<i64>(COUNTER).copied().unwrap_or_default()
    }

    #[test]
    fn test_counter_stops_at_configured_limit() {
        let store = build_store(&CounterConfig::default());
        let notified = Rc::new(Cell::new(0));
        {
            let notified = Rc::clone(&notified);
            store.subscribe(move || notified.set(notified.get() + 1));
        }

        for _ in 0..4 {
            store.dispatch(AppAction::Increment).unwrap();
        }

        assert_eq!(counter(&store), 3);
        assert_eq!(notified.get(), 3);
    }

    #[test]
    fn test_thunk_dispatches_through_full_chain() {
        let store = build_store(&CounterConfig {
            limit: 1,
            ..CounterConfig::default()
        });

        let result = store.dispatch(AppAction::thunk(|dispatch, get_state| {
            assert_eq!(get_state().get::<i64>(COUNTER), Some(&0));
            for _ in 0..3 {
                let _ = dispatch.call(AppAction::Increment);
            }
        }));

        assert!(matches!(result, Ok(None)));
        assert_eq!(counter(&store), 1);
    }

    #[test]
    fn test_describe_state() {
        let at = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
        let store = build_store(&CounterConfig::default());
        store.dispatch(AppAction::Timer(at)).unwrap();
        assert_eq!(describe_state(&store.get_state()), "counter is 0, timer is 8:30:0");
    }
}
