//! Identity-provider adapter backed by the Clerk browser SDK.

use platform_host::{AuthPrompt, IdentityFuture, IdentityProvider, IdentityUser};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Identity provider that drives the page-global `Clerk` object.
///
/// The SDK script and its publishable key are loaded by the page; this adapter only reads the
/// session and asks Clerk to render its own sign-in and sign-up modals.
pub struct ClerkIdentityProvider;

impl IdentityProvider for ClerkIdentityProvider {
    fn current_user(&self) -> Option<IdentityUser> {
        bridge::clerk_current_user()
    }

    fn open_prompt(&self, prompt: AuthPrompt) -> Result<(), String> {
        bridge::clerk_open_prompt(prompt)
    }

    fn sign_out<'a>(&'a self) -> IdentityFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::clerk_sign_out().await })
    }

    /// Checked on every call: the Clerk script usually finishes loading after boot.
    fn is_ready(&self) -> bool {
        bridge::clerk_is_loaded()
    }
}
