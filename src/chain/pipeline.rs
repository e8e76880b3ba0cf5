//! Pipeline assembly and the top-level run entry point.

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::chain::InterceptorChain;
use crate::config::PipelineConfig;
use crate::error::{ConfigError, Result};
use crate::interceptor::{Interceptor, InterceptorRegistry};

/// An ordered interceptor sequence plus the entry point that walks it.
///
/// The sequence is fixed once the pipeline is handed to [`run`]; insertion
/// order is processing order, and nothing prevents the same interceptor from
/// appearing more than once.
///
/// [`run`]: Pipeline::run
#[derive(Default)]
pub struct Pipeline {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Builder-style append.
    pub fn with(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.push(interceptor);
        self
    }

    pub fn push(&mut self, interceptor: Arc<dyn Interceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Resolve configured stages against `registry`, in their effective
    /// order (enabled stages sorted by `order`).
    pub fn from_config(registry: &InterceptorRegistry, config: &PipelineConfig) -> Result<Self> {
        let mut pipeline = Self::new();
        for stage in config.stages_in_order() {
            let interceptor = registry
                .get(&stage.name)
                .ok_or_else(|| ConfigError::UnknownInterceptor(stage.name.clone()))?;
            debug!("Resolved stage '{}' (order {})", stage.name, stage.order);
            pipeline.push(interceptor);
        }
        Ok(pipeline)
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Stage names in processing order.
    pub fn interceptor_names(&self) -> Vec<&str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// Walk the chain once: build the entry cursor at index 0 and hand it
    /// the initial request. Returns the final request value, or `None` when
    /// the traversal ends without one.
    pub fn run(&self, request: Option<String>) -> Option<String> {
        let span = tracing::info_span!(
            "pipeline_run",
            run_id = %Uuid::new_v4(),
            stages = self.interceptors.len(),
        );
        let _guard = span.enter();

        if self.interceptors.is_empty() {
            debug!("No interceptors assembled, request passes through");
            return request;
        }

        info!(
            "Dispatching request through {} interceptor(s)",
            self.interceptors.len()
        );
        let chain = InterceptorChain::new(self.interceptors.clone(), request.clone());
        let result = chain.process(request);
        info!(value_produced = result.is_some(), "Pipeline run complete");
        result
    }
}

// No derive: `dyn Interceptor` carries no `Debug` bound.
impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.interceptor_names())
            .finish()
    }
}
