//! Headless state machine behind the AI document generator window.
//!
//! Each submission takes a fresh ticket. A completion is applied only when its ticket is still the
//! current one, so a reply that resolves after the user resubmitted or cancelled is dropped.

use platform_host::{DocumentKind, GeneratedDocument, GenerationError};

/// Identifies one generation request.
pub type GenerationTicket = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeneratorPhase {
    #[default]
    Idle,
    Generating {
        ticket: GenerationTicket,
    },
    Ready {
        ticket: GenerationTicket,
        document: GeneratedDocument,
    },
    Failed {
        message: String,
        retryable: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSession {
    pub kind: DocumentKind,
    pub prompt: String,
    pub phase: GeneratorPhase,
    pub(crate) next_ticket: GenerationTicket,
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self {
            kind: DocumentKind::Pdf,
            prompt: String::new(),
            phase: GeneratorPhase::Idle,
            next_ticket: 0,
        }
    }
}

impl GeneratorSession {
    pub fn is_generating(&self) -> bool {
        matches!(self.phase, GeneratorPhase::Generating { .. })
    }

    /// Whether a submission is currently possible.
    pub fn can_submit(&self) -> bool {
        !self.is_generating() && !self.prompt.trim().is_empty()
    }

    /// Starts a request for the current kind and prompt.
    ///
    /// Returns `None` for a blank prompt; the phase is left unchanged.
    pub fn begin(&mut self) -> Option<GenerationTicket> {
        if self.prompt.trim().is_empty() {
            return None;
        }
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.phase = GeneratorPhase::Generating { ticket };
        Some(ticket)
    }

    /// Applies the result of request `ticket`.
    ///
    /// Returns the document to open when the result is current and successful. Stale results are
    /// discarded and leave the session untouched. Failures keep the prompt so the user can retry.
    pub fn complete(
        &mut self,
        ticket: GenerationTicket,
        result: Result<GeneratedDocument, GenerationError>,
    ) -> Option<GeneratedDocument> {
        if self.phase != (GeneratorPhase::Generating { ticket }) {
            return None;
        }
        match result {
            Ok(document) => {
                self.phase = GeneratorPhase::Ready {
                    ticket,
                    document: document.clone(),
                };
                Some(document)
            }
            Err(err) => {
                self.phase = GeneratorPhase::Failed {
                    message: err.to_string(),
                    retryable: err.is_transient(),
                };
                None
            }
        }
    }

    /// Abandons the in-flight request; its result will be discarded.
    pub fn cancel(&mut self) {
        if self.is_generating() {
            self.phase = GeneratorPhase::Idle;
        }
    }
}
