use figment::{Figment, providers::{Format, Toml, Json, Yaml, Env}};
use crate::error::{ConfigError, Result};
use super::schema::Config;
use std::path::Path;

pub fn load_from_env_or_file() -> Result<Config> {
    let config: Config = Figment::new()
        // Try to load from various config files
        .merge(Toml::file("reqchain.toml"))
        .merge(Json::file("reqchain.json"))
        .merge(Yaml::file("reqchain.yaml"))
        .merge(Yaml::file("reqchain.yml"))
        // Override with environment variables (REQCHAIN_ prefix)
        .merge(Env::prefixed("REQCHAIN_").split("_"))
        .extract()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    // Validate configuration
    validate(&config)?;

    // Apply environment variable substitutions
    let config = apply_env_substitutions(config)?;

    Ok(config)
}

pub fn validate(config: &Config) -> Result<()> {
    // Stage names must be resolvable later; an empty one never can be.
    // Duplicate names are allowed: a stage may legitimately run twice.
    for stage in &config.pipeline.stages {
        if stage.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Pipeline stage has empty name".into()
            ).into());
        }
    }

    Ok(())
}

fn apply_env_substitutions(mut config: Config) -> Result<Config> {
    // The request body is the only free-text field
    if let Some(request) = &mut config.request {
        *request = substitute_env_vars(request)?;
    }

    Ok(config)
}

fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = input.to_string();
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    for cap in re.captures_iter(input) {
        let var_name = &cap[1];
        match std::env::var(var_name) {
            Ok(value) => {
                result = result.replace(&cap[0], &value);
            }
            Err(_) => {
                // Check if there's a default value (e.g., ${VAR:-default})
                if let Some((name, default)) = var_name.split_once(":-") {
                    match std::env::var(name) {
                        Ok(value) => result = result.replace(&cap[0], &value),
                        Err(_) => result = result.replace(&cap[0], default),
                    }
                } else {
                    return Err(ConfigError::EnvVar(
                        format!("Environment variable '{}' not found", var_name)
                    ).into());
                }
            }
        }
    }

    Ok(result)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let config = if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("REQCHAIN_").split("_"))
            .extract()
    } else if path.extension().and_then(|e| e.to_str()) == Some("json") {
        Figment::new()
            .merge(Json::file(path))
            .merge(Env::prefixed("REQCHAIN_").split("_"))
            .extract()
    } else if matches!(path.extension().and_then(|e| e.to_str()), Some("yaml") | Some("yml")) {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("REQCHAIN_").split("_"))
            .extract()
    } else {
        return Err(ConfigError::Parse(
            "Unsupported config file format. Use .toml, .json, .yaml, or .yml".into()
        ).into());
    };

    let config = config.map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    let config = apply_env_substitutions(config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{PipelineConfig, StageAssignment};
    use crate::error::PipelineError;

    #[test]
    fn test_env_substitution() {
        std::env::set_var("RC_TEST_VAR", "test_value");

        let result = substitute_env_vars("Hello ${RC_TEST_VAR}!").unwrap();
        assert_eq!(result, "Hello test_value!");

        let result = substitute_env_vars("${RC_MISSING:-default}").unwrap();
        assert_eq!(result, "default");

        std::env::remove_var("RC_TEST_VAR");
    }

    #[test]
    fn test_missing_env_var_without_default_errors() {
        let err = substitute_env_vars("${RC_DEFINITELY_NOT_SET}").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Config(ConfigError::EnvVar(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_stage_name() {
        let config = Config {
            request: None,
            pipeline: PipelineConfig {
                stages: vec![StageAssignment {
                    name: "  ".to_string(),
                    order: 10,
                    enabled: true,
                }],
            },
        };

        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Config(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_duplicate_stage_names_are_valid() {
        let config = Config {
            request: None,
            pipeline: PipelineConfig {
                stages: vec![
                    StageAssignment {
                        name: "connect".to_string(),
                        order: 10,
                        enabled: true,
                    },
                    StageAssignment {
                        name: "connect".to_string(),
                        order: 20,
                        enabled: true,
                    },
                ],
            },
        };

        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_load_from_path_rejects_unknown_extension() {
        let err = load_from_path("reqchain.ini").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Config(ConfigError::Parse(_))
        ));
    }
}
