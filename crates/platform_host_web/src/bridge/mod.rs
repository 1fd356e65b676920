//! Browser capability bridge used by the `platform_host_web` service adapters.
//!
//! Domain adapters call these functions; `interop` routes them to the wasm or non-wasm
//! transport.

mod interop;

use platform_host::{AuthPrompt, IdentityUser};

pub fn clerk_current_user() -> Option<IdentityUser> {
    interop::clerk_current_user()
}

pub fn clerk_is_loaded() -> bool {
    interop::clerk_is_loaded()
}

pub fn clerk_open_prompt(prompt: AuthPrompt) -> Result<(), String> {
    interop::clerk_open_prompt(prompt)
}

pub async fn clerk_sign_out() -> Result<(), String> {
    interop::clerk_sign_out().await
}

/// Response status and body text of an HTTP exchange.
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

pub async fn post_json(url: &str, bearer: Option<&str>, body: &str) -> Result<HttpReply, String> {
    interop::post_json(url, bearer, body).await
}
