//! The chain cursor: an immutable traversal snapshot and its dispatch step.

use std::sync::Arc;
use tracing::debug;

use crate::interceptor::Interceptor;

/// One step of a chain traversal: the fixed interceptor sequence, the index
/// of the interceptor to dispatch next, and the request value as of this
/// step.
///
/// Cursors are never mutated. Forwarding builds a fresh cursor at
/// `index + 1`, and [`process`](InterceptorChain::process) consumes `self`,
/// so holding a cursor always means holding the single live continuation of
/// the traversal. The index stays within `0..=len`; `len` is the terminal
/// pass-through state.
pub struct InterceptorChain {
    interceptors: Arc<[Arc<dyn Interceptor>]>,
    index: usize,
    request: Option<String>,
}

impl InterceptorChain {
    /// Entry cursor positioned at index 0 with the initial request.
    pub fn new(interceptors: Vec<Arc<dyn Interceptor>>, request: Option<String>) -> Self {
        Self {
            interceptors: interceptors.into(),
            index: 0,
            request,
        }
    }

    /// The request value as of this step. Absent when the traversal carries
    /// no value.
    pub fn request(&self) -> Option<&str> {
        self.request.as_deref()
    }

    /// Position of the interceptor this cursor dispatches to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of interceptors in the fixed sequence.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Advance the traversal or terminate it.
    ///
    /// Past the end of the sequence (or on an empty one) this is the
    /// terminal pass-through: `request` comes back unchanged, and that is a
    /// valid outcome rather than an error. Otherwise the interceptor at the
    /// current index runs against a fresh cursor positioned one step
    /// further, and whatever it returns is the traversal's result.
    pub fn process(self, request: Option<String>) -> Option<String> {
        if self.interceptors.is_empty() || self.index >= self.interceptors.len() {
            debug!("Chain exhausted at index {}, returning request unchanged", self.index);
            return request;
        }

        let interceptor = Arc::clone(&self.interceptors[self.index]);
        debug!(
            "Dispatching interceptor {}/{}: '{}'",
            self.index + 1,
            self.interceptors.len(),
            interceptor.name()
        );

        let next = Self {
            interceptors: self.interceptors,
            index: self.index + 1,
            request,
        };
        interceptor.intercept(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::FnInterceptor;

    #[test]
    fn test_empty_sequence_returns_request_unchanged() {
        let chain = InterceptorChain::new(Vec::new(), Some("network request".to_string()));
        assert_eq!(
            chain.process(Some("network request".to_string())),
            Some("network request".to_string())
        );

        let chain = InterceptorChain::new(Vec::new(), None);
        assert_eq!(chain.process(None), None);
    }

    #[test]
    fn test_request_reflects_cursor_snapshot() {
        let chain = InterceptorChain::new(Vec::new(), Some("network request".to_string()));
        assert_eq!(chain.request(), Some("network request"));

        let chain = InterceptorChain::new(Vec::new(), None);
        assert_eq!(chain.request(), None);
    }

    #[test]
    fn test_entry_cursor_starts_at_index_zero() {
        let forward: Arc<dyn Interceptor> =
            Arc::new(FnInterceptor::new("forward", |chain: InterceptorChain| {
                let request = chain.request().map(str::to_owned);
                chain.process(request)
            }));

        let chain = InterceptorChain::new(vec![Arc::clone(&forward)], Some("x".to_string()));
        assert_eq!(chain.index(), 0);
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_terminal_state_past_last_interceptor() {
        // A single forwarder advances the cursor to index 1 == len, so its
        // nested process call exercises the terminal pass-through branch.
        let forward: Arc<dyn Interceptor> =
            Arc::new(FnInterceptor::new("forward", |chain: InterceptorChain| {
                assert_eq!(chain.index(), 1);
                let request = chain.request().map(str::to_owned);
                chain.process(request)
            }));

        let chain = InterceptorChain::new(vec![forward], Some("x".to_string()));
        assert_eq!(chain.process(Some("x".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_process_threads_argument_not_snapshot() {
        // The value handed to process is what the next interceptor sees,
        // independent of what the dispatching cursor was carrying.
        let rewrite: Arc<dyn Interceptor> =
            Arc::new(FnInterceptor::new("rewrite", |chain: InterceptorChain| {
                chain.process(Some("rewritten".to_string()))
            }));
        let observe: Arc<dyn Interceptor> =
            Arc::new(FnInterceptor::new("observe", |chain: InterceptorChain| {
                assert_eq!(chain.request(), Some("rewritten"));
                let request = chain.request().map(str::to_owned);
                chain.process(request)
            }));

        let chain = InterceptorChain::new(vec![rewrite, observe], Some("original".to_string()));
        assert_eq!(chain.process(Some("original".to_string())), Some("rewritten".to_string()));
    }
}
