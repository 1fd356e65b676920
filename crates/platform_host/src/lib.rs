//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for the external collaborators the window manager talks
//! to: the identity provider, the AI document-generation service, and the wall clock. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod generation;
pub mod host;
pub mod identity;
pub mod time;

pub use generation::config::{
    GenerationConfig, DEFAULT_GENERATION_ENDPOINT, DEFAULT_GENERATION_MODEL,
};
pub use generation::content::{
    parse_generated_document, DocumentKind, DocumentSection, GeneratedDocument, Slide,
    StructuredContent,
};
pub use generation::error::GenerationError;
pub use generation::wire::{
    build_chat_request, classify_status, extract_reply, ChatCompletionRequest, ChatMessage,
};
pub use generation::{
    ContentGenerationService, GenerationFuture, MemoryGenerationService,
    UnconfiguredGenerationService,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use identity::{
    AuthPrompt, IdentityFuture, IdentityProvider, IdentityUser, MemoryIdentityProvider,
    NoopIdentityProvider,
};
pub use time::{format_clock_time, format_long_date, unix_time_ms_now, ClockSnapshot};
