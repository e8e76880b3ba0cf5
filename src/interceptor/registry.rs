use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::interceptor::{CacheInterceptor, ConnectInterceptor, Interceptor, ResultInterceptor};

/// Name-indexed store of interceptors available for pipeline assembly.
///
/// Configuration files refer to stages by name; the registry resolves
/// those names to live instances. Registering under an existing name
/// replaces the previous entry.
pub struct InterceptorRegistry {
    interceptors: DashMap<String, Arc<dyn Interceptor>>,
}

impl InterceptorRegistry {
    pub fn new() -> Self {
        Self {
            interceptors: DashMap::new(),
        }
    }

    /// A registry pre-populated with the built-in stages: `cache`,
    /// `connect`, and `result`.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(CacheInterceptor::new()));
        registry.register(Arc::new(ConnectInterceptor::new()));
        registry.register(Arc::new(ResultInterceptor::new()));
        registry
    }

    pub fn register(&self, interceptor: Arc<dyn Interceptor>) {
        let name = interceptor.name().to_string();
        debug!("Registering interceptor '{}'", name);
        self.interceptors.insert(name, interceptor);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Interceptor>> {
        self.interceptors
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.interceptors.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.interceptors
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl Default for InterceptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
