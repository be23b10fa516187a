// src/config.rs

use crate::error::ConfigError;
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("data/client.yaml");

#[cfg(not(target_arch = "wasm32"))]
const API_BASE_ENV: &str = "QUIZ_API_BASE";

#[derive(Debug, Clone, Deserialize)]
pub struct Endpoints {
    pub generate: String,
    pub grade: String,
    pub homework: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    pub level: String,
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_base: String,
    #[serde(default)]
    pub native_api_base: String,
    pub endpoints: Endpoints,
    pub defaults: Defaults,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub counts: Vec<u32>,
    #[serde(default)]
    pub typeset_math: bool,
}

impl ClientConfig {
    /// Carga la configuración desde el YAML embebido
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml(EMBEDDED_CONFIG)
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let endpoints = [
            ("generate", &self.endpoints.generate),
            ("grade", &self.endpoints.grade),
            ("homework", &self.endpoints.homework),
        ];
        for (name, path) in endpoints {
            if path.trim().is_empty() {
                return Err(ConfigError::MissingEndpoint(name));
            }
        }
        Ok(())
    }

    /// Embebida + overrides del entorno (variable en nativo, query/meta en web).
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::embedded()?;
        if let Some(base) = api_base_override() {
            log::info!("api_base sobrescrito: {base}");
            config.api_base = base;
        }
        #[cfg(not(target_arch = "wasm32"))]
        if config.api_base.trim().is_empty() {
            config.api_base = config.native_api_base.clone();
        }
        Ok(config)
    }

    pub fn url(&self, path: &str) -> String {
        let base = self.api_base.trim().trim_end_matches('/');
        let path = path.trim();
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    pub fn generate_url(&self) -> String {
        self.url(&self.endpoints.generate)
    }

    pub fn grade_url(&self) -> String {
        self.url(&self.endpoints.grade)
    }

    pub fn homework_url(&self) -> String {
        self.url(&self.endpoints.homework)
    }
}

fn normalize_base(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn api_base_override() -> Option<String> {
    std::env::var(API_BASE_ENV)
        .ok()
        .as_deref()
        .and_then(normalize_base)
}

#[cfg(target_arch = "wasm32")]
fn api_base_override() -> Option<String> {
    api_base_from_querystring().or_else(api_base_from_meta)
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "api_base" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            return decoded.as_string().as_deref().and_then(normalize_base);
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn api_base_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='quiz-api-base']")
        .ok()??;

    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_with_defaults() {
        let config = ClientConfig::embedded().expect("yaml embebido válido");
        assert_eq!(config.endpoints.generate, "/generate_test");
        assert_eq!(config.endpoints.grade, "/submit_grading");
        assert_eq!(config.defaults.level, "intermediate");
        assert_eq!(config.defaults.count, 5);
        assert!(config.levels.iter().any(|l| l == "intermediate"));
    }

    #[test]
    fn url_joins_base_and_path_without_double_slash() {
        let mut config = ClientConfig::embedded().unwrap();
        config.api_base = "http://127.0.0.1:5000/".into();
        assert_eq!(config.grade_url(), "http://127.0.0.1:5000/submit_grading");

        config.api_base = String::new();
        assert_eq!(config.generate_url(), "/generate_test");
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let yaml = r#"
endpoints:
  generate: ""
  grade: "/submit_grading"
  homework: "/generate_homework"
defaults:
  level: "intermediate"
  count: 5
"#;
        let err = ClientConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint("generate")));
    }
}
