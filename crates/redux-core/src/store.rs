use crate::action::Action;
use crate::dispatch::{Dispatch, DispatchResult, GetState};
use crate::error::StoreError;
use crate::listeners::{ListenerRegistry, Unsubscribe};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

/// Pure state transition: `(previous, action) -> next`
///
/// `None` stands for "no state yet" and is only seen while bootstrapping.
/// Reducers hand back the previous `Arc` untouched for actions they do not
/// handle.
pub type Reducer<S, A> = Rc<dyn Fn(Option<Arc<S>>, &A) -> Arc<S>>;

/// Store construction function, as wrapped by a [`StoreEnhancer`]
pub type CreateStore<S, A> = Rc<dyn Fn(Reducer<S, A>, Option<Arc<S>>) -> Store<S, A>>;

/// Takes over store construction
///
/// The middleware pipeline ([`ApplyMiddleware`](crate::ApplyMiddleware)) is
/// one enhancer; plain functions `Fn(CreateStore) -> CreateStore` are too.
pub trait StoreEnhancer<S, A> {
    fn enhance(&self, create: CreateStore<S, A>) -> CreateStore<S, A>;
}

impl<S, A, F> StoreEnhancer<S, A> for F
where
    F: Fn(CreateStore<S, A>) -> CreateStore<S, A>,
{
    fn enhance(&self, create: CreateStore<S, A>) -> CreateStore<S, A> {
        self(create)
    }
}

struct StoreCore<S, A> {
    reducer: Reducer<S, A>,
    state: RefCell<Arc<S>>,
    listeners: Rc<RefCell<ListenerRegistry>>,
    dispatching: Cell<bool>,
}

/// Clears the dispatching flag when the reducer returns or unwinds
struct DispatchingGuard<'a>(&'a Cell<bool>);

impl<'a> DispatchingGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for DispatchingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S: 'static, A: Action> StoreCore<S, A> {
    fn dispatch(&self, action: A) -> DispatchResult<A> {
        if self.dispatching.get() {
            return Err(StoreError::DispatchInReducer {
                action_type: action.action_type().to_owned(),
            });
        }

        let previous = Arc::clone(&self.state.borrow());
        let next = {
            let _guard = DispatchingGuard::engage(&self.dispatching);
            (self.reducer)(Some(previous), &action)
        };
        *self.state.borrow_mut() = next;

        let listeners = self.listeners.borrow_mut().snapshot();
        log::trace!(
            "{} reduced, notifying {} listener(s)",
            action.action_type(),
            listeners.len()
        );
        for listener in listeners.iter() {
            listener();
        }

        Ok(Some(action))
    }
}

/// Store - holds the state tree and runs the reducer for every action
///
/// The store is a cheap handle; clones share the same state, reducer and
/// listeners. It is single threaded: dispatch, the reducer and all listeners
/// run synchronously on the calling thread. Background work should queue
/// actions for the owning thread instead of touching the store.
///
/// # Reentrancy
///
/// Dispatching from inside the reducer fails with
/// [`StoreError::DispatchInReducer`]. Listeners and middleware may dispatch.
/// Reading the state from inside the reducer is a caller error: it yields the
/// state from before the running dispatch.
///
/// # Failing reducers
///
/// A panicking reducer leaves the state untouched and the panic reaches the
/// caller of `dispatch`; the store stays usable.
pub struct Store<S, A> {
    core: Rc<StoreCore<S, A>>,
    dispatch: Dispatch<A>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
            dispatch: self.dispatch.clone(),
        }
    }
}

/// Create a store from a reducer and an optional preloaded state
///
/// The reducer is run once with the bootstrap action
/// ([`INIT_ACTION_TYPE`](crate::INIT_ACTION_TYPE)) before this returns, so the
/// store starts with whatever the reducer builds from `initial_state`.
pub fn create_store<S, A, R>(reducer: R, initial_state: Option<S>) -> Store<S, A>
where
    S: 'static,
    A: Action,
    R: Fn(Option<Arc<S>>, &A) -> Arc<S> + 'static,
{
    Store::from_reducer(Rc::new(reducer), initial_state.map(Arc::new))
}

/// Create a store through an enhancer
///
/// Construction is handed over entirely to
/// `enhancer.enhance(create)(reducer, initial_state)`.
pub fn create_store_with_enhancer<S, A, R, E>(
    reducer: R,
    initial_state: Option<S>,
    enhancer: &E,
) -> Store<S, A>
where
    S: 'static,
    A: Action,
    R: Fn(Option<Arc<S>>, &A) -> Arc<S> + 'static,
    E: StoreEnhancer<S, A> + ?Sized,
{
    let create: CreateStore<S, A> = Rc::new(Store::<S, A>::from_reducer);
    let create = enhancer.enhance(create);
    create(Rc::new(reducer), initial_state.map(Arc::new))
}

impl<S: 'static, A: Action> Store<S, A> {
    /// Base construction used by [`create_store`] and handed to enhancers
    pub fn from_reducer(reducer: Reducer<S, A>, initial_state: Option<Arc<S>>) -> Self {
        let init = A::init();
        let state = reducer(initial_state, &init);
        log::debug!("Store created with {}", init.action_type());

        let core = Rc::new(StoreCore {
            reducer,
            state: RefCell::new(state),
            listeners: Rc::new(RefCell::new(ListenerRegistry::default())),
            dispatching: Cell::new(false),
        });
        let dispatch = {
            let core = Rc::clone(&core);
            Dispatch::new(move |action| core.dispatch(action))
        };

        Self { core, dispatch }
    }

    /// Current state, as left by the last completed reducer run
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&self.core.state.borrow())
    }

    /// Dispatch an action through the store's dispatch chain
    pub fn dispatch(&self, action: A) -> DispatchResult<A> {
        self.dispatch.call(action)
    }

    /// The dispatch chain of this store
    pub fn dispatcher(&self) -> Dispatch<A> {
        self.dispatch.clone()
    }

    pub fn state_getter(&self) -> GetState<S> {
        let core = Rc::clone(&self.core);
        Rc::new(move || Arc::clone(&core.state.borrow()))
    }

    /// Register a listener, called without arguments after every dispatch
    ///
    /// A listener added while listeners are being notified is first called on
    /// the next dispatch; one removed meanwhile still runs for the current one.
    ///
    /// Listeners that hold a clone of this store keep it alive until they are
    /// unsubscribed.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Unsubscribe {
        let id = self.core.listeners.borrow_mut().add(Rc::new(listener));
        Unsubscribe::new(&self.core.listeners, id)
    }

    pub fn listener_count(&self) -> usize {
        self.core.listeners.borrow().len()
    }

    /// Same store with its dispatch replaced, as returned by enhancers
    pub fn with_dispatch(self, dispatch: Dispatch<A>) -> Self {
        Self {
            core: self.core,
            dispatch,
        }
    }
}
