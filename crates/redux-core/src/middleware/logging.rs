use crate::action::Action;
use crate::dispatch::{Dispatch, DispatchResult};
use crate::middleware::{Middleware, MiddlewareApi};
use std::fmt;
use std::rc::Rc;

/// LoggingMiddleware - logs every action passing through, with the state
/// before and after the rest of the chain ran
pub struct LoggingMiddleware<S> {
    describe: Rc<dyn Fn(&S) -> String>,
    skip: Vec<String>,
}

impl<S> LoggingMiddleware<S> {
    /// Log the state as rendered by `describe`
    pub fn new(describe: impl Fn(&S) -> String + 'static) -> Self {
        Self {
            describe: Rc::new(describe),
            skip: Vec::new(),
        }
    }

    /// Don't log actions of this type (they are still passed on)
    pub fn skip(mut self, action_type: impl Into<String>) -> Self {
        self.skip.push(action_type.into());
        self
    }
}

impl<S: fmt::Debug> LoggingMiddleware<S> {
    /// Log the state with its `Debug` representation
    pub fn debug() -> Self {
        Self::new(|state: &S| format!("{:?}", state))
    }
}

impl<S: 'static, A: Action> Middleware<S, A> for LoggingMiddleware<S> {
    fn handle(
        &self,
        api: &MiddlewareApi<S, A>,
        next: &Dispatch<A>,
        action: A,
    ) -> DispatchResult<A> {
        if self.skip.iter().any(|skipped| skipped == action.action_type()) {
            return next.call(action);
        }

        let action_type = action.action_type().to_owned();
        log::debug!(
            "before dispatch: action is {}, {}",
            action_type,
            (self.describe)(&*api.get_state())
        );
        let result = next.call(action);
        log::debug!(
            "after dispatch: action is {}, {}",
            action_type,
            (self.describe)(&*api.get_state())
        );
        result
    }
}
