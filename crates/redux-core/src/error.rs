use thiserror::Error;

/// Errors returned by a store's dispatch chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A reducer tried to dispatch while it was still reducing
    #[error("reducers may not dispatch actions (attempted to dispatch `{action_type}`)")]
    DispatchInReducer { action_type: String },

    /// Middleware called `dispatch` before the chain was assembled
    #[error("dispatching while the middleware chain is being constructed")]
    DispatchWhileConstructing,

    #[error("the store behind this dispatch has been dropped")]
    StoreDropped,
}
