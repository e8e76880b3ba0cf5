//! Interceptor capability and the builtin leaf implementations
//!
//! An interceptor is one link of the chain: it reads the request carried by
//! the cursor it receives, produces a new request value, and either forwards
//! that value to the rest of the chain or terminates the traversal by
//! returning a final result of its own. Termination is a capability of every
//! interceptor, not a property of the last position.
//!
//! # Modules
//!
//! - `cache`: cache lookup stand-in (first stop of the stock pipeline)
//! - `connect`: upstream connection stand-in
//! - `result`: terminal delivery stand-in
//! - `func`: closure-backed interceptors
//! - `registry`: name-indexed interceptor lookup

pub mod cache;
pub mod connect;
pub mod func;
pub mod registry;
pub mod result;

pub use cache::CacheInterceptor;
pub use connect::ConnectInterceptor;
pub use func::FnInterceptor;
pub use registry::InterceptorRegistry;
pub use result::ResultInterceptor;

use crate::chain::InterceptorChain;

/// A single link in the chain: transforms the current request and decides
/// whether the traversal continues.
pub trait Interceptor: Send + Sync {
    /// Stable interceptor name used for registry lookups and log events.
    fn name(&self) -> &str;

    /// Inspect and transform the request carried by `chain`.
    ///
    /// An implementation either reads the current request via
    /// [`InterceptorChain::request`], transforms it, and forwards with
    /// [`InterceptorChain::process`] (returning that result unchanged), or
    /// terminates by returning its own final value without forwarding.
    /// `process` consumes the cursor, so forwarding twice does not compile.
    fn intercept(&self, chain: InterceptorChain) -> Option<String>;
}

/// Join a stage note onto the accumulated request, one line per stage.
/// An absent request starts a fresh transcript.
pub(crate) fn annotate(request: Option<&str>, note: &str) -> String {
    match request {
        Some(request) => format!("{request}\n{note}"),
        None => note.to_string(),
    }
}
