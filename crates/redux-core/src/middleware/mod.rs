//! Middleware system for the store
//!
//! Middleware sits between `dispatch` and the reducer, allowing side effects,
//! deferred actions, logging, and other cross-cutting concerns to be handled
//! in a composable way.
//!
//! ## Design
//!
//! ```text
//! Action → Middleware Chain → Reducer → State → Listeners
//! ```
//!
//! Each middleware can:
//! - Inspect the action and the current state
//! - Pass the action on with `next.call(action)`
//! - Swallow the action by returning without calling `next`
//! - Dispatch new actions with `api.dispatch(..)`, which re-enter the chain
//!   from the outermost middleware
//!
//! The first middleware given to [`apply_middleware`] is the outermost one: it
//! sees every action first, including actions re-dispatched by inner
//! middleware, and observes the combined effect of everything after it when it
//! reads the state once `next` returns.
//!
//! The chain does not police middleware: never calling `next`, calling it
//! twice or re-dispatching without end shows up as dropped actions, duplicated
//! effects or unbounded recursion.

use crate::action::Action;
use crate::compose::{compose, Unary};
use crate::dispatch::{Dispatch, DispatchResult, GetState, WeakDispatch};
use crate::error::StoreError;
use crate::store::{CreateStore, Reducer, Store, StoreEnhancer};
use std::cell::OnceCell;
use std::rc::Rc;
use std::sync::Arc;

pub mod logging;
pub mod thunk;

pub use logging::LoggingMiddleware;
pub use thunk::{Thunk, ThunkAction, ThunkMiddleware};

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Closures of the shape `Fn(&MiddlewareApi<S, A>, &Dispatch<A>, A) -> DispatchResult<A>`
/// are middleware too.
pub trait Middleware<S, A> {
    /// Handle an action
    ///
    /// - `api`: state access and the full dispatch chain
    /// - `next`: the following link (the reducer for the innermost middleware)
    /// - `action`: the action being dispatched
    fn handle(
        &self,
        api: &MiddlewareApi<S, A>,
        next: &Dispatch<A>,
        action: A,
    ) -> DispatchResult<A>;
}

impl<S, A, F> Middleware<S, A> for F
where
    F: Fn(&MiddlewareApi<S, A>, &Dispatch<A>, A) -> DispatchResult<A>,
{
    fn handle(
        &self,
        api: &MiddlewareApi<S, A>,
        next: &Dispatch<A>,
        action: A,
    ) -> DispatchResult<A> {
        self(api, next, action)
    }
}

/// The restricted store surface handed to middleware
pub struct MiddlewareApi<S, A> {
    get_state: GetState<S>,
    dispatch: Rc<OnceCell<WeakDispatch<A>>>,
}

impl<S, A> Clone for MiddlewareApi<S, A> {
    fn clone(&self) -> Self {
        Self {
            get_state: Rc::clone(&self.get_state),
            dispatch: Rc::clone(&self.dispatch),
        }
    }
}

impl<S: 'static, A: 'static> MiddlewareApi<S, A> {
    pub fn get_state(&self) -> Arc<S> {
        (self.get_state)()
    }

    pub fn state_getter(&self) -> GetState<S> {
        Rc::clone(&self.get_state)
    }

    /// Dispatch through the whole chain, starting at the outermost middleware
    pub fn dispatch(&self, action: A) -> DispatchResult<A> {
        let dispatch = self
            .dispatch
            .get()
            .ok_or(StoreError::DispatchWhileConstructing)?
            .upgrade()
            .ok_or(StoreError::StoreDropped)?;
        dispatch.call(action)
    }

    /// [`Self::dispatch`] as a handle, e.g. to pass to a thunk
    pub fn dispatcher(&self) -> Dispatch<A> {
        let api = self.clone();
        Dispatch::new(move |action| api.dispatch(action))
    }
}

/// Store enhancer running every dispatched action through middleware
pub struct ApplyMiddleware<S, A> {
    middlewares: Vec<Rc<dyn Middleware<S, A>>>,
}

/// Build the middleware enhancer from an ordered list, outermost first
pub fn apply_middleware<S, A>(middlewares: Vec<Rc<dyn Middleware<S, A>>>) -> ApplyMiddleware<S, A> {
    ApplyMiddleware { middlewares }
}

impl<S, A> ApplyMiddleware<S, A> {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Append a middleware; it runs after the ones added before it
    pub fn with<M: Middleware<S, A> + 'static>(mut self, middleware: M) -> Self {
        self.middlewares.push(Rc::new(middleware));
        self
    }

    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }
}

impl<S, A> Default for ApplyMiddleware<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn one middleware into a `next -> dispatch` link
fn link<S: 'static, A: 'static>(
    middleware: Rc<dyn Middleware<S, A>>,
    api: MiddlewareApi<S, A>,
) -> Unary<Dispatch<A>> {
    Box::new(move |next: Dispatch<A>| {
        let middleware = Rc::clone(&middleware);
        let api = api.clone();
        Dispatch::new(move |action| middleware.handle(&api, &next, action))
    })
}

impl<S: 'static, A: Action> StoreEnhancer<S, A> for ApplyMiddleware<S, A> {
    fn enhance(&self, create: CreateStore<S, A>) -> CreateStore<S, A> {
        let middlewares = self.middlewares.clone();

        Rc::new(move |reducer: Reducer<S, A>, initial_state: Option<Arc<S>>| {
            let store: Store<S, A> = create(reducer, initial_state);

            let late_dispatch = Rc::new(OnceCell::new());
            let api = MiddlewareApi {
                get_state: store.state_getter(),
                dispatch: Rc::clone(&late_dispatch),
            };

            let chain = middlewares
                .iter()
                .map(|middleware| link(Rc::clone(middleware), api.clone()))
                .collect();
            let dispatch = compose(chain)(store.dispatcher());

            // the store owns the chain; middleware only holds it weakly
            let _ = late_dispatch.set(dispatch.downgrade());
            log::debug!("Applied {} middleware", middlewares.len());

            store.with_dispatch(dispatch)
        })
    }
}
