use super::*;
use crate::{
    lock_screen::{unlock, LockScreenView},
    popup_launcher::{builtin_catalogs, builtin_popup_app, PopupLauncher},
    search::search,
};

#[component]
pub(super) fn LockScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let date_refresh = runtime.config.with_value(|config| config.date_refresh);
    let display = create_rw_signal(LockScreenView::from(ClockSnapshot::now()));

    if let Ok(interval) = set_interval_with_handle(
        move || display.set(LockScreenView::from(ClockSnapshot::now())),
        date_refresh,
    ) {
        on_cleanup(move || interval.clear());
    }

    let on_unlock = move |_| unlock(&runtime.store.get_value());

    view! {
        <section class="lock-screen" aria-label="Lock screen">
            <time class="lock-screen-time">{move || clock_label(state.get().current_time_ms)}</time>
            <p class="lock-screen-date">{move || display.with(|view| view.date_label.clone())}</p>
            <button class="lock-screen-unlock" autofocus=true on:click=on_unlock>
                "Unlock"
            </button>
        </section>
    }
}

/// Launcher entry click: flips the popup and, when it opens, hides the launcher.
fn launch_popup(launcher: RwSignal<PopupLauncher>, app_id: &str) {
    launcher.update(|state| state.toggle_popup(app_id));
}

#[component]
pub(super) fn PopupLauncherOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let launcher = runtime.launcher;

    let sections = move || {
        launcher.with(|state| {
            state
                .filtered(builtin_catalogs())
                .into_iter()
                .map(|(catalog, apps)| {
                    let buttons = apps
                        .into_iter()
                        .map(|app| {
                            let app_id = app.app_id.clone();
                            view! {
                                <button
                                    class="popup-launcher-app"
                                    on:click=move |_| launch_popup(launcher, &app_id)
                                >
                                    <span aria-hidden="true">{app.glyph.clone()}</span>
                                    <span>{app.title.clone()}</span>
                                </button>
                            }
                        })
                        .collect_view();
                    view! {
                        <section class="popup-launcher-section">
                            <h3>{catalog.display_name.clone()}</h3>
                            <div class="popup-launcher-grid">{buttons}</div>
                        </section>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || launcher.with(|launcher| launcher.visible)>
            <div class="popup-launcher" role="dialog" aria-label="Apps">
                <input
                    class="popup-launcher-search"
                    type="search"
                    placeholder="Filter apps"
                    autofocus=true
                    prop:value=move || launcher.with(|launcher| launcher.query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        launcher.update(|launcher| launcher.set_query(value));
                    }
                />
                {sections}
            </div>
        </Show>
    }
}

#[component]
pub(super) fn PopupWindows() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let launcher = runtime.launcher;
    let open_ids = move || {
        launcher.with(|state| {
            state
                .open_popups()
                .map(String::from)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <For each=open_ids key=|app_id| app_id.clone() let:app_id>
            <PopupWindow app_id=app_id launcher=launcher />
        </For>
    }
}

#[component]
fn PopupWindow(app_id: String, launcher: RwSignal<PopupLauncher>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(app) = builtin_popup_app(&app_id) else {
        return ().into_view();
    };
    let style = format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;",
        app.position.x, app.position.y, app.size.width, app.size.height
    );
    let body = if app.app_id == "clock" {
        view! {
            <p class="popup-clock">{move || clock_label(runtime.state.get().current_time_ms)}</p>
        }
        .into_view()
    } else {
        view! { <p class="popup-glyph" aria-hidden="true">{app.glyph.clone()}</p> }.into_view()
    };

    view! {
        <aside class="popup-window" style=style aria-label=app.title.clone()>
            <header class="popup-titlebar">
                <span>{app.title.clone()}</span>
                <button
                    aria-label="Close"
                    on:click=move |_| launcher.update(|launcher| launcher.close_popup(&app_id))
                >
                    "×"
                </button>
            </header>
            {body}
        </aside>
    }
    .into_view()
}

#[component]
pub(super) fn SearchOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = create_rw_signal(String::new());

    let close = move || {
        runtime.search_open.set(false);
        query.set(String::new());
    };
    let results = move || {
        let hits = runtime.state.with(|state| query.with(|query| search(state, query)));
        hits.into_iter()
            .map(|hit| {
                let label = hit.label().to_string();
                let is_window = matches!(hit, crate::search::SearchHit::Window { .. });
                view! {
                    <li>
                        <button
                            class="search-hit"
                            on:click=move |_| {
                                runtime.dispatch_action(hit.activate());
                                close();
                            }
                        >
                            <span>{label}</span>
                            <span class="search-hit-kind">
                                {if is_window { "Open window" } else { "App" }}
                            </span>
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || runtime.search_open.get()>
            <div class="search-overlay" role="dialog" aria-label="Search">
                <input
                    type="search"
                    placeholder="Search apps and windows"
                    autofocus=true
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <ul class="search-results">{results}</ul>
            </div>
        </Show>
    }
}

#[component]
pub(super) fn DesktopSwitcherOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let switcher = runtime.switcher;

    let entries = move || {
        switcher.with(|switcher| {
            switcher
                .desktops()
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    let active = index == switcher.active_index();
                    view! {
                        <button
                            class=if active { "desktop-switcher-entry active" } else { "desktop-switcher-entry" }
                            aria-pressed=active.to_string()
                            on:click=move |_| runtime.switcher.update(|switcher| switcher.select(index))
                        >
                            {name.clone()}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || switcher.with(|switcher| switcher.visible)>
            <div class="desktop-switcher" role="dialog" aria-label="Desktops">
                {entries}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn launcher_entry_opens_and_closes_its_popup() {
        let reactive = create_runtime();
        let launcher = create_rw_signal(PopupLauncher::default());
        launcher.update(PopupLauncher::toggle_visible);

        launch_popup(launcher, "calculator");
        assert!(launcher.with(|state| state.is_open("calculator")));
        assert!(!launcher.with(|state| state.visible));

        launch_popup(launcher, "calculator");
        assert_eq!(launcher.with(|state| state.open_popups().count()), 0);

        reactive.dispose();
    }
}
