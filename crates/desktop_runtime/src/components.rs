//! Desktop shell UI composition and interaction surfaces.

mod overlays;
mod taskbar;
mod window;
mod window_body;

use leptos::*;
use platform_host::ClockSnapshot;

use self::{
    overlays::{
        DesktopSwitcherOverlay, LockScreen, PopupLauncherOverlay, PopupWindows, SearchOverlay,
    },
    taskbar::Taskbar,
    window::DesktopWindow,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
use crate::{
    apps,
    model::{AppKind, InteractionState, PointerPosition, WindowId},
    reducer::DesktopAction,
    runtime_context::open_app,
    signal_bus::ShellSignal,
    window_manager::{drag_target, resize_target},
};

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn taskbar_window_button_dom_id(window_id: &WindowId) -> String {
    format!("taskbar-window-button-{}", window_id.as_str())
}

fn clock_label(unix_ms: u64) -> String {
    ClockSnapshot::local(unix_ms).time_label
}

/// Applies the active drag or resize session for a pointer move.
fn update_pointer_interaction(runtime: DesktopRuntimeContext, pointer: PointerPosition) {
    let interaction = runtime.interaction.get_untracked();
    if let Some(session) = interaction.dragging {
        let viewport = runtime.host.get_value().viewport();
        runtime.dispatch_action(DesktopAction::MoveWindow {
            position: drag_target(&session, pointer, viewport),
            window_id: session.window_id,
        });
    }
    if let Some(session) = interaction.resizing {
        runtime.dispatch_action(DesktopAction::ResizeWindow {
            size: resize_target(&session, pointer),
            window_id: session.window_id,
        });
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let active = runtime.interaction.with_untracked(|interaction| {
        interaction.dragging.is_some() || interaction.resizing.is_some()
    });
    if active {
        runtime.interaction.set(InteractionState::default());
    }
}

fn close_overlays(runtime: DesktopRuntimeContext) -> bool {
    let mut closed = false;
    if runtime.launcher.with_untracked(|launcher| launcher.visible) {
        runtime.launcher.update(|launcher| launcher.toggle_visible());
        closed = true;
    }
    if runtime.search_open.get_untracked() {
        runtime.search_open.set(false);
        closed = true;
    }
    if runtime.switcher.with_untracked(|switcher| switcher.visible) {
        runtime.switcher.update(|switcher| switcher.toggle_visible());
        closed = true;
    }
    closed
}

#[component]
/// Renders the desktop shell. While locked, the lock screen covers the still-mounted desktop.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let switcher_open = runtime.switcher.with_untracked(|switcher| switcher.visible);
        let handled = match ev.key().as_str() {
            "Escape" => close_overlays(runtime),
            "ArrowRight" if switcher_open => {
                runtime.switcher.update(|switcher| switcher.next());
                true
            }
            "ArrowLeft" if switcher_open => {
                runtime.switcher.update(|switcher| switcher.prev());
                true
            }
            _ => false,
        };
        if handled {
            ev.prevent_default();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        update_pointer_interaction(runtime, pointer_from_pointer_event(&ev));
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class=move || {
                if state.get().is_dark_mode {
                    "desktop-shell dark"
                } else {
                    "desktop-shell"
                }
            }
            tabindex="-1"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            // Windows stay mounted under the lock screen so their sessions survive a lock.
            <div
                class="desktop-layer"
                inert=move || state.with(|state| state.is_locked)
                aria-hidden=move || state.with(|state| state.is_locked).to_string()
            >
                <DesktopSurface />
            </div>
            <Show when=move || state.with(|state| state.is_locked)>
                <LockScreen />
            </Show>
        </div>
    }
}

#[component]
fn DesktopSurface() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <main class="desktop-surface" data-ui-kind="desktop-backdrop">
            <div class="desktop-icon-grid">
                <For each=move || apps::dock_apps() key=|app| app.window_id let:app>
                    {{
                        let kind = app.app_kind;
                        view! {
                            <button
                                class="desktop-icon"
                                on:dblclick=move |_| open_app(runtime, kind)
                            >
                                <span aria-hidden="true">{kind.glyph()}</span>
                                <span>{app.launcher_label}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="desktop-window-layer">
                <For each=move || state.get().windows key=|win| win.id.clone() let:win>
                    <DesktopWindow window_id=win.id />
                </For>
            </div>

            <PopupWindows />
            <PopupLauncherOverlay />
            <SearchOverlay />
            <DesktopSwitcherOverlay />
        </main>
        <Taskbar />
    }
}

fn toggle_launcher(runtime: DesktopRuntimeContext) {
    runtime.publish(ShellSignal::TogglePopupLauncher);
}

fn open_account(runtime: DesktopRuntimeContext) {
    open_app(runtime, AppKind::Account);
}
