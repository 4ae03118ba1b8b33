use crate::actions::AppAction;
use crate::reducers::COUNTER;
use redux_core::{CombinedState, Dispatch, DispatchResult, Middleware, MiddlewareApi};

/// LimitMiddleware - keeps the counter within `-limit..=limit`
///
/// Increments at the upper bound and decrements at the lower bound are
/// swallowed: they never reach the reducer and listeners are not notified.
#[derive(Debug, Clone, Copy)]
pub struct LimitMiddleware {
    limit: i64,
}

impl LimitMiddleware {
    pub fn new(limit: u32) -> Self {
        Self {
            limit: i64::from(limit),
        }
    }
}

impl Middleware<CombinedState, AppAction> for LimitMiddleware {
    fn handle(
        &self,
        api: &MiddlewareApi<CombinedState, AppAction>,
        next: &Dispatch<AppAction>,
        action: AppAction,
    ) -> DispatchResult<AppAction> {
        let counter = api
            .get_state()
            .get::<i64>(COUNTER)
            .copied()
            .unwrap_or_default();

        match action {
            AppAction::Increment if counter >= self.limit => {
                log::warn!("can not increment any more! counter is {}", counter);
                Ok(None)
            }
            AppAction::Decrement if counter <= -self.limit => {
                log::warn!("can not decrement any more! counter is {}", counter);
                Ok(None)
            }
            action => next.call(action),
        }
    }
}
