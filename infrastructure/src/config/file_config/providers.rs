//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can point at any compatible server).
    pub base_url: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
        }
    }
}

impl FileOpenAiConfig {
    /// API key from the configured env var, falling back to `api_key`.
    /// Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_from_config_when_env_missing() {
        let config = FileOpenAiConfig {
            api_key_env: "PAWTYPE_TEST_UNSET_OPENAI_KEY".to_string(),
            api_key: Some("sk-from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-from-file"));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = FileOpenAiConfig {
            api_key_env: "PAWTYPE_TEST_UNSET_OPENAI_KEY".to_string(),
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }
}
