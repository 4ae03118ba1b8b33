//! Application middleware
//!
//! The generic middleware (thunks, logging) lives in `redux_core`; this
//! module holds the ones that know about the counter.

pub mod limit_middleware;

pub use limit_middleware::LimitMiddleware;
