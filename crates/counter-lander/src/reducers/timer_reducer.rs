use crate::actions::AppAction;
use chrono::Timelike;
use std::sync::Arc;

/// Reducer for the timer slice
///
/// Holds the time of the last tick as unpadded `h:m:s`, empty until the timer
/// fires the first time.
pub fn reduce(state: Option<Arc<String>>, action: &AppAction) -> Arc<String> {
    match action {
        AppAction::Timer(at) => Arc::new(format!(
            "{}:{}:{}",
            at.hour(),
            at.minute(),
            at.second()
        )),
        _ => state.unwrap_or_default(),
    }
}
