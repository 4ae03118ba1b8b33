//! View model for the counter screen
//!
//! Pre-computes display strings from the store state so the views only lay
//! things out.

use crate::reducers::{COUNTER, TIMER};
use redux_core::CombinedState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterViewModel {
    /// Counter value as displayed
    pub counter: String,
    /// Time of the last tick, or a placeholder before the first one
    pub time: String,
    /// Whether the counter sits on either limit
    pub at_limit: bool,
    pub hint: String,
}

impl CounterViewModel {
    pub fn from_state(state: &CombinedState, limit: u32, timer_running: bool) -> Self {
        let counter = state.get::<i64>(COUNTER).copied().unwrap_or_default();
        let time = match state.get::<String>(TIMER) {
            Some(time) if !time.is_empty() => time.clone(),
            _ => "--:--:--".to_string(),
        };
        let hint = if timer_running {
            "[+] increment  [-] decrement  [q] quit".to_string()
        } else {
            "[+] increment  [-] decrement  [t] start timer  [q] quit".to_string()
        };

        Self {
            counter: counter.to_string(),
            time,
            at_limit: counter.unsigned_abs() >= u64::from(limit),
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_before_first_tick() {
        let state = CombinedState::new()
            .with(COUNTER, 0i64)
            .with(TIMER, String::new());
        let vm = CounterViewModel::from_state(&state, 3, false);

        assert_eq!(vm.counter, "0");
        assert_eq!(vm.time, "--:--:--");
        assert!(!vm.at_limit);
        assert!(vm.hint.contains("[t] start timer"));
    }

    #[test]
    fn test_most_negative_counter_is_at_limit() {
        let state = CombinedState::new()
            .with(COUNTER, i64::MIN)
            .with(TIMER, String::new());
        let vm = CounterViewModel::from_state(&state, u32::MAX, false);
        assert!(vm.at_limit);
    }

    #[test]
    fn test_at_lower_limit_with_timer_running() {
        let state = CombinedState::new()
            .with(COUNTER, -3i64)
            .with(TIMER, "10:4:59".to_string());
        let vm = CounterViewModel::from_state(&state, 3, true);

        assert_eq!(vm.counter, "-3");
        assert_eq!(vm.time, "10:4:59");
        assert!(vm.at_limit);
        assert!(!vm.hint.contains("[t]"));
    }
}
