use crate::chain::Pipeline;
use crate::config::Config;
use crate::error::Result;
use crate::interceptor::InterceptorRegistry;
use tracing::{error, info, warn};

pub fn run_config_check(config: Config) -> Result<()> {
    info!("Checking configuration...");

    // Validate configuration
    crate::config::validate(&config)?;
    info!("✓ Configuration is valid");

    // Check stages against the built-in registry
    let registry = InterceptorRegistry::with_builtins();
    info!(
        "Checking {} pipeline stage(s)...",
        config.pipeline.stages.len()
    );

    let mut all_ok = true;

    for stage in &config.pipeline.stages {
        if !stage.enabled {
            warn!("  ! Stage '{}' is disabled, skipping", stage.name);
            continue;
        }

        if registry.contains(&stage.name) {
            info!(
                "  ✓ Stage '{}' (order {}) resolves to a registered interceptor",
                stage.name, stage.order
            );
        } else {
            error!("  ✗ Stage '{}' is not a registered interceptor", stage.name);
            all_ok = false;
        }
    }

    if all_ok {
        // Assemble once so ordering problems surface here instead of at run time
        let pipeline = Pipeline::from_config(&registry, &config.pipeline)?;
        info!(
            "Effective order: {}",
            pipeline.interceptor_names().join(" -> ")
        );
        info!("\n✓ All checks passed");
        Ok(())
    } else {
        Err(crate::error::PipelineError::Config(
            crate::error::ConfigError::Validation(
                "One or more pipeline stages failed checks".to_string(),
            ),
        ))
    }
}
