use crate::error::AuditError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_GEMINI_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_DIR: &str = ".stack-audit";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub patterns: Vec<PatternConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: default_store_dir(),
        }
    }
}

/// Extra group of interchangeable products for one category.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    pub category: String,
    pub tools: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_DIR)
}

impl AuditConfig {
    pub fn validate(&self) -> Result<(), AuditError> {
        let generator = &self.generator;
        if generator.timeout_secs == 0 {
            return Err(AuditError::ConfigParse(
                "generator.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if generator.model.trim().is_empty() {
            return Err(AuditError::ConfigParse(
                "generator.model must not be empty".to_string(),
            ));
        }
        if !generator.endpoint.starts_with("http://") && !generator.endpoint.starts_with("https://")
        {
            return Err(AuditError::ConfigParse(format!(
                "generator.endpoint must be an http(s) URL: {}",
                generator.endpoint
            )));
        }
        if generator.api_key_env.trim().is_empty() {
            return Err(AuditError::ConfigParse(
                "generator.api_key_env must not be empty".to_string(),
            ));
        }

        if self.store.dir.as_os_str().is_empty() {
            return Err(AuditError::ConfigParse(
                "store.dir must not be empty".to_string(),
            ));
        }

        for (index, pattern) in self.patterns.iter().enumerate() {
            validate_pattern(index, pattern)?;
        }

        Ok(())
    }
}

fn validate_pattern(index: usize, pattern: &PatternConfig) -> Result<(), AuditError> {
    if pattern.category.trim().is_empty() {
        return Err(AuditError::ConfigParse(format!(
            "patterns[{index}].category must not be empty"
        )));
    }
    let mut seen = HashSet::new();
    for name in &pattern.tools {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AuditError::ConfigParse(format!(
                "patterns[{index}].tools entries must be non-empty names"
            )));
        }
        if !seen.insert(normalized) {
            return Err(AuditError::ConfigParse(format!(
                "patterns[{index}].tools contains duplicate name: {}",
                name.trim()
            )));
        }
    }
    if seen.len() < 2 {
        return Err(AuditError::ConfigParse(format!(
            "patterns[{index}] needs at least two tool names"
        )));
    }
    Ok(())
}
