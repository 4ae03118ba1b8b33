//! ThunkMiddleware - runs function-valued actions instead of reducing them

use crate::action::Action;
use crate::dispatch::{Dispatch, DispatchResult, GetState};
use crate::middleware::{Middleware, MiddlewareApi};
use std::fmt;

/// A deferred piece of work dispatched as an action
///
/// The thunk receives the full dispatch chain and a state getter. It may
/// dispatch right away, or hand work to something that dispatches later.
pub struct Thunk<S, A> {
    run: Box<dyn FnOnce(&Dispatch<A>, &GetState<S>)>,
}

impl<S, A> Thunk<S, A> {
    pub fn new(run: impl FnOnce(&Dispatch<A>, &GetState<S>) + 'static) -> Self {
        Self { run: Box::new(run) }
    }

    pub fn run(self, dispatch: &Dispatch<A>, get_state: &GetState<S>) {
        (self.run)(dispatch, get_state)
    }
}

impl<S, A> fmt::Debug for Thunk<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// Actions that may carry a [`Thunk`]
pub trait ThunkAction<S>: Action + Sized {
    /// Take the thunk out of the action, or give the action back
    fn into_thunk(self) -> Result<Thunk<S, Self>, Self>;
}

/// Intercepts thunks and runs them; every other action goes to `next`
///
/// Put it first so that thunks are resolved before any other middleware sees
/// them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThunkMiddleware;

impl<S: 'static, A: ThunkAction<S>> Middleware<S, A> for ThunkMiddleware {
    fn handle(
        &self,
        api: &MiddlewareApi<S, A>,
        next: &Dispatch<A>,
        action: A,
    ) -> DispatchResult<A> {
        match action.into_thunk() {
            Ok(thunk) => {
                log::trace!("Running thunk");
                thunk.run(&api.dispatcher(), &api.state_getter());
                Ok(None)
            }
            Err(action) => next.call(action),
        }
    }
}
