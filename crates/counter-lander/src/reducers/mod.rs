//! Slice reducers and the combined root reducer

pub mod counter_reducer;
pub mod timer_reducer;

use crate::actions::AppAction;
use redux_core::{combine_reducers, CombinedState, ReducerMap};
use std::sync::Arc;

/// Key of the counter slice (`i64`)
pub const COUNTER: &str = "counter";
/// Key of the timer slice (`String`, "h:m:s" of the last tick)
pub const TIMER: &str = "timer";

/// Root reducer: one slice per key
pub fn root_reducer() -> impl Fn(Option<Arc<CombinedState>>, &AppAction) -> Arc<CombinedState> {
    combine_reducers(
        ReducerMap::new()
            .slice(COUNTER, counter_reducer::reduce)
            .slice(TIMER, timer_reducer::reduce),
    )
}
