//! AI document-generation contracts and in-memory adapters.

pub mod config;
pub mod content;
pub mod error;
pub mod wire;

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use self::{
    content::{parse_generated_document, DocumentKind, GeneratedDocument},
    error::GenerationError,
};

/// Object-safe boxed future used by [`ContentGenerationService`].
pub type GenerationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that turns a prompt into a structured document.
pub trait ContentGenerationService {
    /// Generates a `kind` document from `prompt`.
    fn generate<'a>(
        &'a self,
        kind: DocumentKind,
        prompt: &'a str,
    ) -> GenerationFuture<'a, Result<GeneratedDocument, GenerationError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Generation service for hosts without a configured backend.
pub struct UnconfiguredGenerationService;

impl ContentGenerationService for UnconfiguredGenerationService {
    fn generate<'a>(
        &'a self,
        _kind: DocumentKind,
        _prompt: &'a str,
    ) -> GenerationFuture<'a, Result<GeneratedDocument, GenerationError>> {
        Box::pin(async {
            Err(GenerationError::Configuration(
                "no generation backend is available on this host".to_string(),
            ))
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Scripted generation service that replays queued raw replies or errors.
///
/// Raw replies go through [`parse_generated_document`] exactly like live responses. An empty
/// queue reports a network error.
pub struct MemoryGenerationService {
    replies: Rc<RefCell<VecDeque<Result<String, GenerationError>>>>,
    prompts: Rc<RefCell<Vec<(DocumentKind, String)>>>,
}

impl MemoryGenerationService {
    /// Queues a raw model reply.
    pub fn push_reply(&self, raw: impl Into<String>) {
        self.replies.borrow_mut().push_back(Ok(raw.into()));
    }

    /// Queues a failure.
    pub fn push_error(&self, err: GenerationError) {
        self.replies.borrow_mut().push_back(Err(err));
    }

    /// Returns every request received, oldest first.
    pub fn received(&self) -> Vec<(DocumentKind, String)> {
        self.prompts.borrow().clone()
    }
}

impl ContentGenerationService for MemoryGenerationService {
    fn generate<'a>(
        &'a self,
        kind: DocumentKind,
        prompt: &'a str,
    ) -> GenerationFuture<'a, Result<GeneratedDocument, GenerationError>> {
        Box::pin(async move {
            self.prompts.borrow_mut().push((kind, prompt.to_string()));
            let next = self.replies.borrow_mut().pop_front();
            match next {
                Some(Ok(raw)) => Ok(parse_generated_document(kind, prompt, &raw)),
                Some(Err(err)) => Err(err),
                None => Err(GenerationError::Network("no scripted reply".to_string())),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn unconfigured_service_reports_configuration_error() {
        let result = block_on(UnconfiguredGenerationService.generate(DocumentKind::Pdf, "x"));
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn memory_service_replays_in_order() {
        let service = MemoryGenerationService::default();
        service.push_error(GenerationError::RateLimited);
        service.push_reply(r#"{"title": "Plan", "sections": [{"heading": "Goal", "body": "Ship"}]}"#);

        let first = block_on(service.generate(DocumentKind::Pdf, "plan"));
        assert_eq!(first, Err(GenerationError::RateLimited));

        let second = block_on(service.generate(DocumentKind::Pdf, "plan")).expect("document");
        assert_eq!(second.title, "Plan");

        let third = block_on(service.generate(DocumentKind::Pdf, "plan"));
        assert!(matches!(third, Err(GenerationError::Network(_))));
        assert_eq!(service.received().len(), 3);
    }
}
