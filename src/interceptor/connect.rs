use crate::chain::InterceptorChain;
use crate::interceptor::{annotate, Interceptor};

const CONNECT_NOTE: &str = "connection established, processing upstream response ....";

/// Marks the request as having an established upstream connection and
/// always forwards to the next stage.
#[derive(Debug, Default)]
pub struct ConnectInterceptor;

impl ConnectInterceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Interceptor for ConnectInterceptor {
    fn name(&self) -> &str {
        "connect"
    }

    fn intercept(&self, chain: InterceptorChain) -> Option<String> {
        let request = annotate(chain.request(), CONNECT_NOTE);
        chain.process(Some(request))
    }
}
