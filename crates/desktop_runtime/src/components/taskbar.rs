use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let active_desktop = move || {
        runtime
            .switcher
            .with(|switcher| switcher.active().unwrap_or_default().to_string())
    };

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Taskbar">
            <div class="taskbar-start">
                <button
                    class="taskbar-launcher"
                    aria-label="Apps"
                    aria-expanded=move || runtime.launcher.with(|l| l.visible).to_string()
                    on:click=move |_| toggle_launcher(runtime)
                >
                    "⊞"
                </button>
                <button
                    aria-label="Search"
                    on:click=move |_| runtime.publish(ShellSignal::ToggleSearch)
                >
                    "🔍"
                </button>
                <button
                    class="taskbar-desktops"
                    on:click=move |_| runtime.publish(ShellSignal::ToggleDesktopSwitcher)
                >
                    {active_desktop}
                </button>
            </div>

            <nav class="taskbar-dock" aria-label="Dock">
                <For each=move || apps::dock_apps() key=|app| app.window_id let:app>
                    {{
                        let kind = app.app_kind;
                        view! {
                            <button
                                class="dock-icon"
                                title=app.launcher_label
                                aria-label=app.launcher_label
                                on:click=move |_| open_app(runtime, kind)
                            >
                                {kind.glyph()}
                            </button>
                        }
                    }}
                </For>
            </nav>

            <div class="taskbar-windows">
                <For each=move || state.get().windows key=|win| win.id.clone() let:win>
                    <TaskbarWindowButton window_id=win.id />
                </For>
            </div>

            <div class="taskbar-tray">
                <button
                    aria-label="Toggle dark mode"
                    aria-pressed=move || state.get().is_dark_mode.to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleDarkMode)
                >
                    {move || if state.get().is_dark_mode { "☀" } else { "☾" }}
                </button>
                <button aria-label="Account" on:click=move |_| open_account(runtime)>
                    "👤"
                </button>
                <button
                    aria-label="Lock"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::Lock)
                >
                    "🔒"
                </button>
                <time class="taskbar-clock">{move || clock_label(state.get().current_time_ms)}</time>
            </div>
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dom_id = taskbar_window_button_dom_id(&window_id);
    let id = store_value(window_id);

    let window = Signal::derive(move || {
        runtime
            .state
            .with(|state| id.with_value(|id| state.window(id).cloned()))
    });
    let is_focused = move || {
        runtime
            .state
            .with(|state| id.with_value(|id| state.focused_window_id() == Some(id)))
    };
    let label = move || window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default());
    let glyph = move || window.with(|w| w.as_ref().map(|w| w.content.kind.glyph()).unwrap_or(""));
    let class = move || {
        let minimized = window.with(|w| w.as_ref().is_some_and(|w| w.is_minimized));
        match (is_focused(), minimized) {
            (true, _) => "taskbar-window focused",
            (false, true) => "taskbar-window minimized",
            (false, false) => "taskbar-window",
        }
    };

    view! {
        <button
            id=dom_id
            class=class
            aria-pressed=move || is_focused().to_string()
            on:click=move |_| {
                runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                    window_id: id.get_value(),
                })
            }
        >
            <span aria-hidden="true">{glyph}</span>
            <span>{label}</span>
        </button>
    }
}
