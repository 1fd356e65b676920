//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the external collaborators the desktop consumes in the browser: the Clerk
//! identity provider (through its global JS object) and the hosted chat-completion API (through
//! `fetch`). Transport lives in `bridge::interop`, split into wasm and non-wasm halves so native
//! builds compile with inert fallbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and service bundle assembly for runtime wiring.
pub mod adapters;
mod bridge;
pub mod generation;
pub mod identity;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use generation::WebGenerationService;
pub use identity::ClerkIdentityProvider;
