use crate::actions::AppAction;
use std::sync::Arc;

/// Reducer for the counter slice
pub fn reduce(state: Option<Arc<i64>>, action: &AppAction) -> Arc<i64> {
    let state = state.unwrap_or_default();
    match action {
        AppAction::Increment => Arc::new(*state + 1),
        AppAction::Decrement => Arc::new(*state - 1),
        _ => state,
    }
}
