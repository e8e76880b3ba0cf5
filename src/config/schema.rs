use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Top-level configuration for a pipeline run.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Request body used when the caller does not supply one explicitly.
    /// Absent means the pipeline is dispatched with no request.
    #[serde(default)]
    pub request: Option<String>,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Declarative description of which stages run and in what order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    #[serde(default)]
    pub stages: Vec<StageAssignment>,
}

/// One stage slot: a registered interceptor name plus its position.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageAssignment {
    pub name: String,

    /// Stages run in ascending order. Ties keep their declaration order.
    pub order: u32,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl PipelineConfig {
    /// The standard three-stage pipeline: cache lookup, upstream connect,
    /// final result production.
    pub fn standard() -> Self {
        Self {
            stages: vec![
                StageAssignment {
                    name: "cache".to_string(),
                    order: 10,
                    enabled: true,
                },
                StageAssignment {
                    name: "connect".to_string(),
                    order: 20,
                    enabled: true,
                },
                StageAssignment {
                    name: "result".to_string(),
                    order: 30,
                    enabled: true,
                },
            ],
        }
    }

    /// Enabled stages sorted by ascending `order`.
    pub fn stages_in_order(&self) -> Vec<StageAssignment> {
        let mut stages: Vec<StageAssignment> = self
            .stages
            .iter()
            .filter(|stage| stage.enabled)
            .cloned()
            .collect();
        stages.sort_by_key(|stage| stage.order);
        stages
    }
}
