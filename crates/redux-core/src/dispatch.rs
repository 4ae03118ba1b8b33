//! Dispatch handles
//!
//! A [`Dispatch`] is one link of the dispatch chain: the store's own reducer
//! step, or a middleware wrapped around the link after it. Handles are cheap
//! to clone and are what middleware receives as `next`.

use crate::error::StoreError;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

/// Outcome of a dispatch
///
/// `Ok(Some(action))` when the chain hands the action back, `Ok(None)` when
/// a middleware swallowed it.
pub type DispatchResult<A> = Result<Option<A>, StoreError>;

/// Reads the current state of a store
pub type GetState<S> = Rc<dyn Fn() -> Arc<S>>;

type DispatchFn<A> = dyn Fn(A) -> DispatchResult<A>;

/// Callable link of the dispatch chain
pub struct Dispatch<A> {
    inner: Rc<DispatchFn<A>>,
}

impl<A> Dispatch<A> {
    pub fn new(f: impl Fn(A) -> DispatchResult<A> + 'static) -> Self {
        Self { inner: Rc::new(f) }
    }

    /// Send an action down this link
    pub fn call(&self, action: A) -> DispatchResult<A> {
        (self.inner)(action)
    }

    /// Non-owning handle, used to late-bind the assembled chain
    pub fn downgrade(&self) -> WeakDispatch<A> {
        WeakDispatch {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<A> Clone for Dispatch<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Dispatch<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dispatch(..)")
    }
}

pub struct WeakDispatch<A> {
    inner: Weak<DispatchFn<A>>,
}

impl<A> WeakDispatch<A> {
    pub fn upgrade(&self) -> Option<Dispatch<A>> {
        self.inner.upgrade().map(|inner| Dispatch { inner })
    }
}

impl<A> Clone for WeakDispatch<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_forwards_to_function() {
        let dispatch = Dispatch::new(|n: i32| Ok(Some(n + 1)));
        assert_eq!(dispatch.call(1), Ok(Some(2)));
        assert_eq!(dispatch.clone().call(2), Ok(Some(3)));
    }

    #[test]
    fn test_weak_handle_dies_with_last_strong_handle() {
        let dispatch = Dispatch::new(|n: i32| Ok(Some(n)));
        let weak = dispatch.downgrade();
        assert!(weak.upgrade().is_some());

        drop(dispatch);
        assert!(weak.upgrade().is_none());
    }
}
