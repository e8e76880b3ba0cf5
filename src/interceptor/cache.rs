use tracing::debug;

use crate::chain::InterceptorChain;
use crate::interceptor::{annotate, Interceptor};

const LOOKUP_NOTE: &str = "checking cache for a stored response ---> ";
const MISS_NOTE: &str = "cache miss!";

/// Consults a stored response before any upstream work happens.
///
/// On a hit the chain short-circuits and the cached body is returned
/// without dispatching the remaining interceptors. On a miss the request
/// is annotated with the lookup outcome and forwarded.
#[derive(Debug, Default)]
pub struct CacheInterceptor {
    cached: Option<String>,
}

impl CacheInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the interceptor with a stored response body, turning
    /// every lookup into a hit.
    pub fn with_hit(body: impl Into<String>) -> Self {
        Self {
            cached: Some(body.into()),
        }
    }
}

impl Interceptor for CacheInterceptor {
    fn name(&self) -> &str {
        "cache"
    }

    fn intercept(&self, chain: InterceptorChain) -> Option<String> {
        match &self.cached {
            Some(body) => {
                debug!("Cache hit, short-circuiting chain at index {}", chain.index());
                Some(annotate(
                    chain.request(),
                    &format!("{LOOKUP_NOTE}cache hit: {body}"),
                ))
            }
            None => {
                debug!("Cache miss, forwarding request");
                let request = annotate(chain.request(), &format!("{LOOKUP_NOTE}{MISS_NOTE}"));
                chain.process(Some(request))
            }
        }
    }
}
