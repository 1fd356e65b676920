use super::*;
use crate::model::{DragSession, ResizeSession};
use window_body::WindowBody;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);

    let window = Signal::derive(move || {
        runtime
            .state
            .with(|state| id.with_value(|id| state.window(id).cloned()))
    });
    let is_focused = Signal::derive(move || {
        runtime
            .state
            .with(|state| id.with_value(|id| state.focused_window_id() == Some(id)))
    });
    let is_maximized = move || window.with(|w| w.as_ref().is_some_and(|w| w.is_maximized));

    let focus = move |_: web_sys::PointerEvent| {
        if !is_focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    };
    let toggle_maximize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: id.get_value(),
            viewport: runtime.host.get_value().viewport(),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || is_maximized() {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.interaction.update(|interaction| {
            interaction.dragging = Some(DragSession {
                window_id: win.id,
                pointer_start: pointer_from_pointer_event(&ev),
                position_start: win.position,
            });
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::FocusWindow {
            window_id: win.id.clone(),
        });
        runtime.interaction.update(|interaction| {
            interaction.resizing = Some(ResizeSession {
                window_id: win.id,
                pointer_start: pointer_from_pointer_event(&ev),
                size_start: win.size,
            });
        });
    };

    let class = move || {
        let mut class = String::from("desktop-window");
        if is_focused.get() {
            class.push_str(" focused");
        }
        window.with(|w| {
            if let Some(w) = w {
                if w.is_minimized {
                    class.push_str(" minimized");
                }
                if w.is_maximized {
                    class.push_str(" maximized");
                }
            }
        });
        class
    };
    let style = move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| {
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                        w.position.x, w.position.y, w.size.width, w.size.height, w.z_index
                    )
                })
                .unwrap_or_default()
        })
    };
    let title = move || window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default());

    // Content is fixed for the window's lifetime, so the body mounts once.
    let body = window.get_untracked().map(|win| {
        let glyph = win.content.kind.glyph();
        (
            glyph,
            view! { <WindowBody window_id=win.id.clone() content=win.content /> },
        )
    });
    let (glyph, body) = match body {
        Some((glyph, body)) => (glyph, body.into_view()),
        None => ("", ().into_view()),
    };

    view! {
        <section class=class style=style on:pointerdown=focus role="dialog" aria-label=title>
            <header class="titlebar" on:pointerdown=begin_move on:dblclick=toggle_maximize>
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">{glyph}</span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=minimize
                    >
                        "–"
                    </button>
                    <button
                        aria-label=move || {
                            if is_maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=toggle_maximize
                    >
                        {move || if is_maximized() { "❐" } else { "□" }}
                    </button>
                    <button
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:click=close
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">{body}</div>
            <Show when=move || !is_maximized()>
                <div class="window-resize-handle" aria-hidden="true" on:pointerdown=begin_resize />
            </Show>
        </section>
    }
}
