#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{Viewport, WindowId};
#[cfg(target_arch = "wasm32")]
use crate::model::window_primary_input_dom_id;

pub(super) fn focus_window_input(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = window_primary_input_dom_id(&window_id);
        // Deferred so a freshly opened window has rendered its input first.
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&dom_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            0,
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

/// Full browser viewport, or `fallback` when it cannot be measured.
pub(super) fn browser_viewport(fallback: Viewport) -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let measure = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|value| value.as_f64()).map(|value| value as i32)
            };
            return Viewport {
                width: measure(window.inner_width()).unwrap_or(fallback.width),
                height: measure(window.inner_height()).unwrap_or(fallback.height),
            };
        }
    }

    fallback
}
