use super::*;

fn unsupported() -> String {
    "Browser host APIs are only available when compiled for wasm32".to_string()
}

pub fn clerk_current_user() -> Option<IdentityUser> {
    None
}

pub fn clerk_is_loaded() -> bool {
    false
}

pub fn clerk_open_prompt(_prompt: AuthPrompt) -> Result<(), String> {
    Err(unsupported())
}

pub async fn clerk_sign_out() -> Result<(), String> {
    Ok(())
}

pub async fn post_json(
    _url: &str,
    _bearer: Option<&str>,
    _body: &str,
) -> Result<HttpReply, String> {
    Err(unsupported())
}
