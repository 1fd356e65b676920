//! Host-side runtime helpers for executing reducer effects and reaching injected collaborators.
//!
//! Reducer semantics never depend on these calls; network results are applied back through
//! [`crate::generator::GeneratorSession`] or local component state.

mod host_ui;

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::{
    AuthPrompt, ContentGenerationService, DocumentKind, GeneratedDocument, GenerationError,
    HostCapabilities, HostServices, IdentityProvider, IdentityUser,
};

use crate::{
    model::{Viewport, WindowId},
    reducer::RuntimeEffect,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
    fallback_viewport: Viewport,
}

impl DesktopHostContext {
    /// Wraps the injected host bundle.
    pub fn new(services: HostServices, fallback_viewport: Viewport) -> Self {
        Self {
            services,
            fallback_viewport,
        }
    }

    /// Returns the configured identity provider.
    pub fn identity(&self) -> Rc<dyn IdentityProvider> {
        self.services.identity.clone()
    }

    /// Returns the configured document-generation service.
    pub fn generation(&self) -> Rc<dyn ContentGenerationService> {
        self.services.generation.clone()
    }

    /// Returns the host capability snapshot.
    pub fn capabilities(&self) -> HostCapabilities {
        self.services.capabilities
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Current full browser viewport, taskbar included.
    pub fn viewport(&self) -> Viewport {
        host_ui::browser_viewport(self.fallback_viewport)
    }

    /// Moves keyboard focus into the window's primary input, if it has one.
    pub fn focus_window_input(&self, window_id: WindowId) {
        host_ui::focus_window_input(window_id);
    }

    /// Currently signed-in user, if any.
    pub fn current_user(&self) -> Option<IdentityUser> {
        self.services.identity.current_user()
    }

    /// Whether the identity provider can show prompts right now. Re-evaluated on every call.
    pub fn identity_ready(&self) -> bool {
        self.services.capabilities.identity.is_available() && self.services.identity.is_ready()
    }

    /// Opens the identity provider's sign-in or sign-up prompt.
    ///
    /// Returns `false` when the provider is not ready yet or rejected the request.
    pub fn open_auth_prompt(&self, prompt: AuthPrompt) -> bool {
        if !self.identity_ready() {
            logging::warn!("identity provider is not ready; {prompt:?} prompt skipped");
            return false;
        }
        let identity = &self.services.identity;
        let result = match prompt {
            AuthPrompt::SignIn => identity.render_sign_in(),
            AuthPrompt::SignUp => identity.render_sign_up(),
        };
        match result {
            Ok(()) => true,
            Err(err) => {
                logging::warn!("identity prompt failed: {err}");
                false
            }
        }
    }

    /// Signs out asynchronously, then runs `on_done`.
    pub fn sign_out(&self, on_done: impl FnOnce() + 'static) {
        let identity = self.identity();
        spawn_local(async move {
            if let Err(err) = identity.sign_out().await {
                logging::warn!("sign-out failed: {err}");
            }
            on_done();
        });
    }

    /// Starts a generation request and hands the result to `on_result` when it resolves.
    pub fn generate(
        &self,
        kind: DocumentKind,
        prompt: String,
        on_result: impl FnOnce(Result<GeneratedDocument, GenerationError>) + 'static,
    ) {
        let generation = self.generation();
        spawn_local(async move {
            let result = generation.generate(kind, &prompt).await;
            if let Err(err) = &result {
                logging::warn!("document generation failed: {err}");
            }
            on_result(result);
        });
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
        }
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("services", &self.services)
            .field("fallback_viewport", &self.fallback_viewport)
            .finish()
    }
}
