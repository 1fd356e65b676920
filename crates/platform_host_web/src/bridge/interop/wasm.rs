use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::*;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn browser_window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no browser window available".to_string())
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn string_property(target: &JsValue, name: &str) -> Option<String> {
    property(target, name)?
        .as_string()
        .filter(|value| !value.is_empty())
}

fn clerk() -> Result<JsValue, String> {
    let window = JsValue::from(browser_window()?);
    property(&window, "Clerk").ok_or_else(|| "Clerk has not been loaded".to_string())
}

fn call_method(target: &JsValue, name: &str) -> Result<JsValue, String> {
    let method = property(target, name)
        .and_then(|method| method.dyn_into::<Function>().ok())
        .ok_or_else(|| format!("Clerk.{name} is not a function"))?;
    method.call0(target).map_err(js_error)
}

pub fn clerk_current_user() -> Option<IdentityUser> {
    let clerk = clerk().ok()?;
    let user = property(&clerk, "user")?;
    let id = string_property(&user, "id")?;
    let display_name = string_property(&user, "fullName")
        .or_else(|| string_property(&user, "username"))
        .unwrap_or_else(|| id.clone());
    let email = property(&user, "primaryEmailAddress")
        .and_then(|address| string_property(&address, "emailAddress"));
    Some(IdentityUser {
        id,
        display_name,
        email,
    })
}

pub fn clerk_is_loaded() -> bool {
    clerk().is_ok()
}

pub fn clerk_open_prompt(prompt: AuthPrompt) -> Result<(), String> {
    let method = match prompt {
        AuthPrompt::SignIn => "openSignIn",
        AuthPrompt::SignUp => "openSignUp",
    };
    call_method(&clerk()?, method).map(|_| ())
}

pub async fn clerk_sign_out() -> Result<(), String> {
    let result = call_method(&clerk()?, "signOut")?;
    if let Ok(promise) = result.dyn_into::<Promise>() {
        JsFuture::from(promise).await.map_err(js_error)?;
    }
    Ok(())
}

pub async fn post_json(url: &str, bearer: Option<&str>, body: &str) -> Result<HttpReply, String> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    if let Some(token) = bearer {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(js_error)?;
    }

    let response = JsFuture::from(browser_window()?.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(HttpReply {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}
