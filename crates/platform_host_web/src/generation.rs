//! Generation-service adapter that calls the hosted chat-completion API with `fetch`.

use platform_host::{
    build_chat_request, classify_status, extract_reply, parse_generated_document,
    ContentGenerationService, DocumentKind, GeneratedDocument, GenerationConfig, GenerationError,
    GenerationFuture,
};

use crate::bridge;

#[derive(Debug, Clone)]
/// Browser generation service posting chat-completion requests to the configured endpoint.
pub struct WebGenerationService {
    config: GenerationConfig,
}

impl WebGenerationService {
    /// Creates a service for `config`.
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

impl ContentGenerationService for WebGenerationService {
    fn generate<'a>(
        &'a self,
        kind: DocumentKind,
        prompt: &'a str,
    ) -> GenerationFuture<'a, Result<GeneratedDocument, GenerationError>> {
        Box::pin(async move {
            let credential = self.config.credential()?;
            let request = build_chat_request(&self.config, kind, prompt)?;
            let body = serde_json::to_string(&request)
                .map_err(|err| GenerationError::Network(format!("encode request: {err}")))?;
            let reply = bridge::post_json(&self.config.endpoint, credential, &body)
                .await
                .map_err(GenerationError::Network)?;
            classify_status(reply.status)?;
            Ok(parse_generated_document(
                kind,
                prompt,
                &extract_reply(&reply.body),
            ))
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn missing_credential_fails_before_transport() {
        let service = WebGenerationService::new(GenerationConfig::default());
        let result = block_on(service.generate(DocumentKind::Pdf, "report"));
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn native_transport_reports_network_error() {
        let service = WebGenerationService::new(GenerationConfig {
            api_key: Some("sk-test".to_string()),
            ..GenerationConfig::default()
        });
        let result = block_on(service.generate(DocumentKind::Sheet, "budget"));
        assert!(matches!(result, Err(GenerationError::Network(_))));
    }
}
