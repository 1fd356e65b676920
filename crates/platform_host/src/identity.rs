//! Identity-provider contracts and in-memory adapters.
//!
//! The desktop only needs to know whether a user is signed in and how to ask the provider to
//! show its own sign-in, sign-up, or sign-out flows. Everything else stays with the provider.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`IdentityProvider`].
pub type IdentityFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Authenticated user summary reported by the provider.
pub struct IdentityUser {
    /// Provider-assigned user id.
    pub id: String,
    /// Name shown in the account overlay.
    pub display_name: String,
    /// Primary email address, when the provider exposes one.
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Provider-rendered authentication surfaces.
pub enum AuthPrompt {
    /// Existing-account sign-in.
    SignIn,
    /// New-account registration.
    SignUp,
}

/// Host service wrapping the external identity provider.
pub trait IdentityProvider {
    /// Returns the signed-in user, if any.
    fn current_user(&self) -> Option<IdentityUser>;

    /// Asks the provider to render one of its authentication surfaces.
    fn open_prompt(&self, prompt: AuthPrompt) -> Result<(), String>;

    /// Ends the current session.
    fn sign_out<'a>(&'a self) -> IdentityFuture<'a, Result<(), String>>;

    /// Shows the provider's sign-in surface.
    fn render_sign_in(&self) -> Result<(), String> {
        self.open_prompt(AuthPrompt::SignIn)
    }

    /// Shows the provider's sign-up surface.
    fn render_sign_up(&self) -> Result<(), String> {
        self.open_prompt(AuthPrompt::SignUp)
    }

    /// Returns whether a user is currently authenticated.
    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Returns whether the provider can render prompts right now.
    ///
    /// Browser SDKs often finish loading after the desktop boots, so callers check this when a
    /// prompt is requested rather than once at startup.
    fn is_ready(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Identity provider for hosts without one configured. Prompts are rejected.
pub struct NoopIdentityProvider;

impl IdentityProvider for NoopIdentityProvider {
    fn current_user(&self) -> Option<IdentityUser> {
        None
    }

    fn open_prompt(&self, _prompt: AuthPrompt) -> Result<(), String> {
        Err("identity provider is not configured".to_string())
    }

    fn is_ready(&self) -> bool {
        false
    }

    fn sign_out<'a>(&'a self) -> IdentityFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory identity provider that records prompt requests.
pub struct MemoryIdentityProvider {
    user: Rc<RefCell<Option<IdentityUser>>>,
    prompts: Rc<RefCell<Vec<AuthPrompt>>>,
    loading: Rc<Cell<bool>>,
}

impl MemoryIdentityProvider {
    /// Simulates the provider SDK still loading (`true`) or finished (`false`).
    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    /// Marks `user` as signed in.
    pub fn sign_in_as(&self, user: IdentityUser) {
        *self.user.borrow_mut() = Some(user);
    }

    /// Returns every prompt requested so far, oldest first.
    pub fn requested_prompts(&self) -> Vec<AuthPrompt> {
        self.prompts.borrow().clone()
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    fn current_user(&self) -> Option<IdentityUser> {
        self.user.borrow().clone()
    }

    fn open_prompt(&self, prompt: AuthPrompt) -> Result<(), String> {
        if self.loading.get() {
            return Err("identity provider is still loading".to_string());
        }
        self.prompts.borrow_mut().push(prompt);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        !self.loading.get()
    }

    fn sign_out<'a>(&'a self) -> IdentityFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.user.borrow_mut().take();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn ada() -> IdentityUser {
        IdentityUser {
            id: "user_1".to_string(),
            display_name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
        }
    }

    #[test]
    fn memory_provider_tracks_session_and_prompts() {
        let provider = MemoryIdentityProvider::default();
        assert!(!provider.is_authenticated());

        provider.render_sign_in().expect("sign-in prompt");
        provider.render_sign_up().expect("sign-up prompt");
        assert_eq!(
            provider.requested_prompts(),
            vec![AuthPrompt::SignIn, AuthPrompt::SignUp]
        );

        provider.sign_in_as(ada());
        assert_eq!(provider.current_user(), Some(ada()));

        block_on(provider.sign_out()).expect("sign out");
        assert!(!provider.is_authenticated());
    }

    #[test]
    fn memory_provider_readiness_follows_loading_state() {
        let provider = MemoryIdentityProvider::default();
        provider.set_loading(true);
        assert!(!provider.is_ready());
        assert!(provider.render_sign_in().is_err());

        provider.set_loading(false);
        assert!(provider.is_ready());
        provider.render_sign_in().expect("sign-in prompt");
        assert_eq!(provider.requested_prompts(), vec![AuthPrompt::SignIn]);
    }

    #[test]
    fn noop_provider_rejects_prompts() {
        let provider = NoopIdentityProvider;
        assert!(!provider.is_ready());
        assert!(provider.render_sign_in().is_err());
        assert!(provider.current_user().is_none());
        assert!(block_on(provider.sign_out()).is_ok());
    }
}
