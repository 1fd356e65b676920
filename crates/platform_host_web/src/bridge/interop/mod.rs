//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge domain functions.

use platform_host::{AuthPrompt, IdentityUser};

use super::HttpReply;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn clerk_current_user() -> Option<IdentityUser> {
    imp::clerk_current_user()
}

pub fn clerk_is_loaded() -> bool {
    imp::clerk_is_loaded()
}

pub fn clerk_open_prompt(prompt: AuthPrompt) -> Result<(), String> {
    imp::clerk_open_prompt(prompt)
}

pub async fn clerk_sign_out() -> Result<(), String> {
    imp::clerk_sign_out().await
}

pub async fn post_json(url: &str, bearer: Option<&str>, body: &str) -> Result<HttpReply, String> {
    imp::post_json(url, bearer, body).await
}
