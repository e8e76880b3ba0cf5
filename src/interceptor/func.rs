use crate::chain::InterceptorChain;
use crate::interceptor::Interceptor;

/// Adapts a plain closure into an [`Interceptor`].
///
/// Handy for tests and for one-off stages that do not warrant a named
/// struct. The closure receives the advanced cursor and decides whether
/// to forward or terminate, exactly like a hand-written implementation.
pub struct FnInterceptor<F> {
    name: String,
    func: F,
}

impl<F> FnInterceptor<F>
where
    F: Fn(InterceptorChain) -> Option<String> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Interceptor for FnInterceptor<F>
where
    F: Fn(InterceptorChain) -> Option<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn intercept(&self, chain: InterceptorChain) -> Option<String> {
        (self.func)(chain)
    }
}
