//! Chat-completion request/response shapes for the hosted generation API.

use serde::{Deserialize, Serialize};

use super::{config::GenerationConfig, content::DocumentKind, error::GenerationError};

const GENERATION_TEMPERATURE: f32 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One chat message.
pub struct ChatMessage {
    /// `system`, `user`, or `assistant`.
    pub role: String,
    /// Message text.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Body of a chat-completion request.
pub struct ChatCompletionRequest {
    /// Requested model.
    pub model: String,
    /// Conversation, system prompt first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Builds the request body asking for a `kind` document about `prompt`.
///
/// # Errors
///
/// Returns [`GenerationError::Configuration`] when `prompt` is blank.
pub fn build_chat_request(
    config: &GenerationConfig,
    kind: DocumentKind,
    prompt: &str,
) -> Result<ChatCompletionRequest, GenerationError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(GenerationError::Configuration(
            "describe the document to generate".to_string(),
        ));
    }
    let prompt: String = prompt.chars().take(config.max_prompt_chars).collect();
    let system = format!(
        "You write {label} content. Reply with JSON only, matching {schema}.",
        label = kind.label(),
        schema = kind.reply_schema(),
    );
    Ok(ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system,
            },
            ChatMessage {
                role: "user".to_string(),
                content: prompt,
            },
        ],
        temperature: GENERATION_TEMPERATURE,
    })
}

/// Maps an HTTP status to the generation error taxonomy.
///
/// # Errors
///
/// 401/403 map to [`GenerationError::Auth`], 429 to [`GenerationError::RateLimited`], and any
/// other non-2xx status to [`GenerationError::Network`].
pub fn classify_status(status: u16) -> Result<(), GenerationError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(GenerationError::Auth { status }),
        429 => Err(GenerationError::RateLimited),
        other => Err(GenerationError::Network(format!("HTTP {other}"))),
    }
}

/// Pulls the assistant reply text out of a chat-completion response body.
///
/// Bodies that are not a chat-completion envelope (for example a gateway that returns the model
/// text directly) are passed through unchanged so content parsing can still fall back.
pub fn extract_reply(body: &str) -> String {
    match serde_json::from_str::<ChatCompletionResponse>(body) {
        Ok(response) => response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default(),
        Err(_) => body.to_string(),
    }
}
