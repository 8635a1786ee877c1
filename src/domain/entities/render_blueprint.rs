//! `render.yaml` blueprint describing the OptionScope web service

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::keys;

/// Top-level Render blueprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBlueprint {
    pub services: Vec<RenderService>,
}

/// One service entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderService {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub env: String,
    pub build_command: String,
    pub start_command: String,
    pub env_vars: Vec<RenderEnvVar>,
}

/// Declared env var: either a literal value or one Render generates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEnvVar {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_value: Option<bool>,
}

impl RenderEnvVar {
    pub fn literal(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            generate_value: None,
        }
    }

    pub fn generated(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            generate_value: Some(true),
        }
    }
}

impl RenderBlueprint {
    /// A single web service with `FLASK_ENV=production` and a generated `SECRET_KEY`.
    pub fn web_service(
        name: impl Into<String>,
        runtime: impl Into<String>,
        build_command: impl Into<String>,
        start_command: impl Into<String>,
    ) -> Self {
        Self {
            services: vec![RenderService {
                kind: "web".to_string(),
                name: name.into(),
                env: runtime.into(),
                build_command: build_command.into(),
                start_command: start_command.into(),
                env_vars: vec![
                    RenderEnvVar::literal(keys::FLASK_ENV, "production"),
                    RenderEnvVar::generated(keys::SECRET_KEY),
                ],
            }],
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }
}
