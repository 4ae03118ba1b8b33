//! Predictable single-store state container
//!
//! State lives in one [`Store`] and only changes when a pure reducer runs for a
//! dispatched action. Reducers for independent parts of the state are joined
//! with [`combine_reducers`], and [`apply_middleware`] wraps store creation so
//! every action travels through an ordered middleware chain first.
//!
//! # Example
//!
//! ```
//! use redux_core::{
//!     combine_reducers, create_store_with_enhancer, ApplyMiddleware, LoggingMiddleware,
//!     PlainAction, ReducerMap,
//! };
//! use std::sync::Arc;
//!
//! fn counter(state: Option<Arc<i64>>, action: &PlainAction) -> Arc<i64> {
//!     let state = state.unwrap_or_default();
//!     match action.kind.as_str() {
//!         "INCREMENT" => Arc::new(*state + 1),
//!         _ => state,
//!     }
//! }
//!
//! let reducer = combine_reducers(ReducerMap::new().slice("counter", counter));
//! let store = create_store_with_enhancer(
//!     reducer,
//!     None,
//!     &ApplyMiddleware::new().with(LoggingMiddleware::debug()),
//! );
//!
//! store.subscribe(|| println!("state changed"));
//! store.dispatch(PlainAction::new("INCREMENT"))?;
//! assert_eq!(store.get_state().get::<i64>("counter"), Some(&1));
//! # Ok::<(), redux_core::StoreError>(())
//! ```

mod action;
mod combine;
mod compose;
mod dispatch;
mod error;
mod listeners;
pub mod middleware;
mod store;

pub use action::{Action, PlainAction, INIT_ACTION_TYPE};
pub use combine::{combine_reducers, CombinedState, ReducerMap, SliceRef, SliceValue};
pub use compose::{compose, compose_with, Unary};
pub use dispatch::{Dispatch, DispatchResult, GetState, WeakDispatch};
pub use error::StoreError;
pub use listeners::{Listener, Unsubscribe};
pub use middleware::{
    apply_middleware, ApplyMiddleware, LoggingMiddleware, Middleware, MiddlewareApi, Thunk,
    ThunkAction, ThunkMiddleware,
};
pub use store::{
    create_store, create_store_with_enhancer, CreateStore, Reducer, Store, StoreEnhancer,
};
