use tracing::debug;

use crate::chain::InterceptorChain;
use crate::interceptor::{annotate, Interceptor};

const RESULT_NOTE: &str = "returning response to the caller";

/// Terminal stage: stamps the response as ready for the caller and ends
/// the traversal without forwarding.
#[derive(Debug, Default)]
pub struct ResultInterceptor;

impl ResultInterceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Interceptor for ResultInterceptor {
    fn name(&self) -> &str {
        "result"
    }

    fn intercept(&self, chain: InterceptorChain) -> Option<String> {
        debug!("Producing final response at index {}", chain.index());
        Some(annotate(chain.request(), RESULT_NOTE))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::interceptor::FnInterceptor;

    #[test]
    fn test_terminates_without_forwarding() {
        let later_ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&later_ran);

        let interceptors: Vec<Arc<dyn Interceptor>> = vec![
            Arc::new(ResultInterceptor::new()),
            Arc::new(FnInterceptor::new("downstream", move |chain: InterceptorChain| {
                flag.store(true, Ordering::SeqCst);
                chain.process(None)
            })),
        ];

        let chain = InterceptorChain::new(interceptors, Some("req".to_string()));
        let result = chain.process(Some("req".to_string()));

        assert!(!later_ran.load(Ordering::SeqCst));
        assert_eq!(result, Some("req\nreturning response to the caller".to_string()));
    }
}
