use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use reqchain::chain::Pipeline;
use reqchain::commands;
use reqchain::config;
use reqchain::error::Result;
use reqchain::interceptor::InterceptorRegistry;

const DEFAULT_REQUEST: &str = "network request";

#[derive(Parser, Debug)]
#[command(name = "reqchain")]
#[command(about = "A request pipeline built from configurable interceptor chains", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (YAML/JSON/TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Request body to dispatch (overrides the configured one)
    #[arg(short, long, global = true)]
    request: Option<String>,

    /// Print the run as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Dispatch a request through the configured pipeline (default)
    Run,
    /// Check configuration and stage resolution
    Check,
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("reqchain={log_level}").parse().unwrap()),
        )
        .init();

    // Load configuration first
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            match config::load_from_path(path) {
                Ok(cfg) => {
                    info!("Configuration loaded successfully from {}", path.display());
                    cfg
                }
                Err(e) => {
                    error!(
                        "Failed to load configuration from {}: {}",
                        path.display(),
                        e
                    );
                    return Err(e);
                }
            }
        }
        None => {
            info!("Loading configuration from default locations");
            match config::load_from_env_or_file() {
                Ok(cfg) => {
                    info!("Configuration loaded successfully");
                    cfg
                }
                Err(e) => {
                    error!("Failed to load configuration: {}", e);
                    return Err(e);
                }
            }
        }
    };

    // Handle commands
    match args.command.unwrap_or(Command::Run) {
        Command::Check => commands::run_config_check(config),
        Command::Run => run_pipeline(config, args.request, args.json),
    }
}

fn run_pipeline(config: config::Config, request_arg: Option<String>, json: bool) -> Result<()> {
    let pipeline_config = if config.pipeline.stages.is_empty() {
        info!("No pipeline stages configured, using the standard pipeline");
        config::PipelineConfig::standard()
    } else {
        config.pipeline.clone()
    };

    let registry = InterceptorRegistry::with_builtins();
    let pipeline = Pipeline::from_config(&registry, &pipeline_config)?;
    info!(
        "Pipeline stages: {}",
        pipeline.interceptor_names().join(" -> ")
    );

    let request = request_arg
        .or(config.request)
        .unwrap_or_else(|| DEFAULT_REQUEST.to_string());

    let result = pipeline.run(Some(request.clone()));

    if json {
        let report = serde_json::json!({
            "request": request,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match result {
            Some(response) => println!("{response}"),
            None => println!("(no response produced)"),
        }
    }

    Ok(())
}
