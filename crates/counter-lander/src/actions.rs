//! Actions understood by the counter-lander store

use chrono::NaiveTime;
use redux_core::{Action, CombinedState, Dispatch, GetState, Thunk, ThunkAction, INIT_ACTION_TYPE};

/// Deferred work dispatched as an action
pub type AppThunk = Thunk<CombinedState, AppAction>;

#[derive(Debug)]
pub enum AppAction {
    /// Store bootstrap
    Init,
    Increment,
    Decrement,
    /// Timer tick, stamped with the local time it fired at
    Timer(NaiveTime),
    /// Resolved by the thunk middleware, never reaches a reducer
    Thunk(AppThunk),
}

impl AppAction {
    pub fn thunk(
        run: impl FnOnce(&Dispatch<AppAction>, &GetState<CombinedState>) + 'static,
    ) -> Self {
        AppAction::Thunk(Thunk::new(run))
    }
}

impl Action for AppAction {
    fn action_type(&self) -> &str {
        match self {
            AppAction::Init => INIT_ACTION_TYPE,
            AppAction::Increment => "INCREMENT",
            AppAction::Decrement => "DECREMENT",
            AppAction::Timer(_) => "TIMER",
            AppAction::Thunk(_) => "THUNK",
        }
    }

    fn init() -> Self {
        AppAction::Init
    }
}

impl ThunkAction<CombinedState> for AppAction {
    fn into_thunk(self) -> Result<AppThunk, Self> {
        match self {
            AppAction::Thunk(thunk) => Ok(thunk),
            action => Err(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_types_never_collide_with_init() {
        let actions = [
            AppAction::Increment,
            AppAction::Decrement,
            AppAction::Timer(NaiveTime::MIN),
            AppAction::thunk(|_, _| {}),
        ];
        for action in &actions {
            assert_ne!(action.action_type(), INIT_ACTION_TYPE);
            assert!(!action.is_init());
        }
        assert!(AppAction::init().is_init());
    }

    #[test]
    fn test_only_thunks_unwrap() {
        assert!(AppAction::thunk(|_, _| {}).into_thunk().is_ok());
        assert!(matches!(
            AppAction::Increment.into_thunk(),
            Err(AppAction::Increment)
        ));
    }
}
