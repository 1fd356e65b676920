//! Generation-service configuration.

use serde::{Deserialize, Serialize};

use super::error::GenerationError;

/// Hosted chat-completion endpoint used when no override is configured.
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
/// Model requested when no override is configured.
pub const DEFAULT_GENERATION_MODEL: &str = "mistral-small-latest";
const DEFAULT_MAX_PROMPT_CHARS: usize = 4_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Endpoint, model, and credential for the chat-completion service.
pub struct GenerationConfig {
    /// Chat-completion URL (the hosted API or a serverless gateway in front of it).
    pub endpoint: String,
    /// Model name sent with each request.
    pub model: String,
    /// Bearer credential. Gateways that inject the key themselves may leave this empty only when
    /// `requires_api_key` is false.
    pub api_key: Option<String>,
    /// Whether requests must carry `api_key`.
    pub requires_api_key: bool,
    /// Prompts longer than this are truncated before sending.
    pub max_prompt_chars: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GENERATION_ENDPOINT.to_string(),
            model: DEFAULT_GENERATION_MODEL.to_string(),
            api_key: None,
            requires_api_key: true,
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

impl GenerationConfig {
    /// Builds configuration from `DESKTOP_AI_*` variables captured at compile time.
    ///
    /// `DESKTOP_AI_GATEWAY=1` marks the endpoint as a gateway that supplies its own credential.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DESKTOP_AI_ENDPOINT"),
            option_env!("DESKTOP_AI_MODEL"),
            option_env!("DESKTOP_AI_API_KEY"),
            option_env!("DESKTOP_AI_GATEWAY"),
        )
    }

    fn from_values(
        endpoint: Option<&str>,
        model: Option<&str>,
        api_key: Option<&str>,
        gateway: Option<&str>,
    ) -> Self {
        let non_empty = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let defaults = Self::default();
        Self {
            endpoint: non_empty(endpoint).unwrap_or(defaults.endpoint),
            model: non_empty(model).unwrap_or(defaults.model),
            api_key: non_empty(api_key),
            requires_api_key: !matches!(gateway.map(str::trim), Some("1" | "true")),
            max_prompt_chars: defaults.max_prompt_chars,
        }
    }

    /// Returns the credential to send, or a configuration error when one is required but absent.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Configuration`] for a missing key or endpoint.
    pub fn credential(&self) -> Result<Option<&str>, GenerationError> {
        if self.endpoint.trim().is_empty() {
            return Err(GenerationError::Configuration(
                "no generation endpoint set".to_string(),
            ));
        }
        match (self.api_key.as_deref(), self.requires_api_key) {
            (Some(key), _) => Ok(Some(key)),
            (None, false) => Ok(None),
            (None, true) => Err(GenerationError::Configuration(
                "set DESKTOP_AI_API_KEY to enable document generation".to_string(),
            )),
        }
    }
}
