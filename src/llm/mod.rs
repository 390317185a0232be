pub mod gemini;
#[cfg(test)]
pub mod mock;

use crate::error::GenerationError;
use crate::types::config::GeneratorConfig;
use gemini::GeminiClient;

/// Free-form text generation used for recommendation prose.
///
/// One call per audit, no retries. Implementations must be safe to share
/// across concurrent audits.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    fn name(&self) -> &str;
}

/// Stands in when no real backend can be used. Every call fails with the
/// reason captured at construction, which routes the audit to its fallback.
#[derive(Debug)]
pub struct UnavailableGenerator {
    reason: Reason,
}

#[derive(Debug, Clone)]
enum Reason {
    Disabled,
    MissingCredentials(String),
}

impl UnavailableGenerator {
    pub fn disabled() -> Self {
        Self {
            reason: Reason::Disabled,
        }
    }

    pub fn missing_credentials(env_var: impl Into<String>) -> Self {
        Self {
            reason: Reason::MissingCredentials(env_var.into()),
        }
    }
}

impl TextGenerator for UnavailableGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        match &self.reason {
            Reason::Disabled => Err(GenerationError::Disabled),
            Reason::MissingCredentials(env_var) => {
                Err(GenerationError::MissingCredentials(env_var.clone()))
            }
        }
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

pub fn build_generator(config: &GeneratorConfig, offline: bool) -> Box<dyn TextGenerator> {
    if offline || !config.enabled {
        tracing::debug!("text generation disabled");
        return Box::new(UnavailableGenerator::disabled());
    }

    let api_key = std::env::var(&config.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty());
    let Some(api_key) = api_key else {
        tracing::debug!(env = %config.api_key_env, "no API key for text generation");
        return Box::new(UnavailableGenerator::missing_credentials(
            config.api_key_env.clone(),
        ));
    };

    match GeminiClient::new(config, api_key) {
        Ok(client) => Box::new(client),
        Err(e) => {
            tracing::warn!(error = %e, "failed to build text generation client");
            Box::new(UnavailableGenerator::disabled())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_flag_disables_generation() {
        let generator = build_generator(&GeneratorConfig::default(), true);
        assert_eq!(generator.name(), "unavailable");
        assert!(matches!(
            generator.generate("prompt"),
            Err(GenerationError::Disabled)
        ));
    }

    #[test]
    fn missing_api_key_reports_credentials_error() {
        let config = GeneratorConfig {
            api_key_env: "STACK_AUDIT_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..GeneratorConfig::default()
        };
        let generator = build_generator(&config, false);
        match generator.generate("prompt") {
            Err(GenerationError::MissingCredentials(env_var)) => {
                assert_eq!(env_var, "STACK_AUDIT_TEST_KEY_THAT_IS_NEVER_SET");
            }
            other => panic!("expected missing credentials, got {other:?}"),
        }
    }

    #[test]
    fn disabled_config_never_reads_credentials() {
        let config = GeneratorConfig {
            enabled: false,
            ..GeneratorConfig::default()
        };
        let generator = build_generator(&config, false);
        assert!(matches!(
            generator.generate("prompt"),
            Err(GenerationError::Disabled)
        ));
    }
}
