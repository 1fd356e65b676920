//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived [`DesktopStore`], its reactive mirror, the runtime effect
//! queue, the shell signal bus, and overlay state reachable from unrelated components. UI
//! composition stays in [`crate::components`].

use leptos::*;
use platform_host::{unix_time_ms_now, HostServices};

use crate::{
    apps,
    config::DesktopConfig,
    desktop_switcher::DesktopSwitcher,
    effect_executor,
    generator::GeneratorSession,
    host::DesktopHostContext,
    model::{AppKind, InteractionState, OsState},
    popup_launcher::PopupLauncher,
    reducer::{DesktopAction, RuntimeEffect},
    signal_bus::{ShellSignal, SignalBus},
    store::DesktopStore,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Canonical state holder. Components read [`Self::state`] instead.
    pub store: StoredValue<DesktopStore>,
    /// Reactive mirror of the store, updated by a store subscription.
    pub state: RwSignal<OsState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Named shell signals (launcher, search, switcher toggles).
    pub bus: StoredValue<SignalBus>,
    /// Shell tunables.
    pub config: StoredValue<DesktopConfig>,
    /// Popup launcher overlay state.
    pub launcher: RwSignal<PopupLauncher>,
    /// Virtual desktop switcher state.
    pub switcher: RwSignal<DesktopSwitcher>,
    /// Whether the search overlay is shown.
    pub search_open: RwSignal<bool>,
    /// AI document generator session.
    pub generator: RwSignal<GeneratorSession>,
    /// Store dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Publishes a shell signal on the bus.
    pub fn publish(&self, signal: ShellSignal) {
        let bus = self.bus.get_value();
        if bus.subscriber_count(signal) == 0 {
            logging::warn!("shell signal `{}` has no subscribers", signal.name());
        }
        bus.publish(signal);
    }
}

fn install_overlay_subscriptions(runtime: DesktopRuntimeContext) {
    let bus = runtime.bus.get_value();
    let subscriptions = [
        bus.subscribe(ShellSignal::TogglePopupLauncher, move || {
            runtime.launcher.update(PopupLauncher::toggle_visible)
        }),
        bus.subscribe(ShellSignal::ToggleSearch, move || {
            runtime.search_open.update(|open| *open = !*open)
        }),
        bus.subscribe(ShellSignal::ToggleDesktopSwitcher, move || {
            runtime.switcher.update(DesktopSwitcher::toggle_visible)
        }),
    ];
    on_cleanup(move || {
        for subscription in subscriptions {
            bus.unsubscribe(subscription);
        }
    });
}

fn install_clock(runtime: DesktopRuntimeContext) {
    let tick = runtime.config.with_value(|config| config.clock_tick);
    if let Ok(interval) = set_interval_with_handle(
        move || {
            runtime.dispatch_action(DesktopAction::Tick {
                unix_ms: unix_time_ms_now(),
            })
        },
        tick,
    ) {
        on_cleanup(move || interval.clear());
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Shell tunables; defaults apply when omitted.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    logging::log!(
        "desktop runtime booting with host strategy `{}`",
        host_services.host_strategy.as_str()
    );

    let host = store_value(DesktopHostContext::new(
        host_services,
        config.fallback_viewport,
    ));
    let desktop_store = DesktopStore::new(OsState {
        current_time_ms: unix_time_ms_now(),
        ..OsState::default()
    });
    let state = create_rw_signal(desktop_store.snapshot());
    let subscription = desktop_store.subscribe(move |next| state.set(next.clone()));
    {
        let desktop_store = desktop_store.clone();
        on_cleanup(move || desktop_store.unsubscribe(subscription));
    }
    let store = store_value(desktop_store);

    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let dispatch = Callback::new(move |action: DesktopAction| {
        let new_effects = store.get_value().dispatch(action);
        if !new_effects.is_empty() {
            effects.update(|queue| queue.extend(new_effects));
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        store,
        state,
        interaction,
        effects,
        bus: store_value(SignalBus::default()),
        launcher: create_rw_signal(PopupLauncher::default()),
        switcher: create_rw_signal(DesktopSwitcher::new(config.virtual_desktops.clone())),
        search_open: create_rw_signal(false),
        generator: create_rw_signal(GeneratorSession::default()),
        config: store_value(config),
        dispatch,
    };

    provide_context(runtime);

    install_overlay_subscriptions(runtime);
    install_clock(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

/// Opens `kind` at its registry id, or focuses it when already open.
pub(crate) fn open_app(runtime: DesktopRuntimeContext, kind: AppKind) {
    runtime.dispatch_action(DesktopAction::OpenWindow(apps::open_request(kind)));
}

/// Submits the generator prompt. A successful current result opens as a document window.
pub(crate) fn submit_generation(runtime: DesktopRuntimeContext) {
    let request = runtime.generator.try_update(|session| {
        if !session.can_submit() {
            return None;
        }
        session
            .begin()
            .map(|ticket| (ticket, session.kind, session.prompt.clone()))
    });
    let Some(Some((ticket, kind, prompt))) = request else {
        return;
    };

    runtime
        .host
        .get_value()
        .generate(kind, prompt, move |result| {
            // The provider may be gone by the time the request resolves.
            let opened = runtime
                .generator
                .try_update(|session| session.complete(ticket, result))
                .flatten();
            if let Some(document) = opened {
                runtime.dispatch_action(DesktopAction::OpenWindow(apps::open_document_request(
                    document, ticket,
                )));
            }
        });
}
