//! Window-manager runtime for the browser desktop shell.
//!
//! State lives in a [`DesktopStore`] driven by [`reduce_desktop`]; Leptos components in
//! [`components`] render it and dispatch [`DesktopAction`]s back through the store.

pub mod apps;
pub mod components;
pub mod config;
pub mod desktop_switcher;
pub mod effect_executor;
pub mod generator;
pub mod host;
pub mod lock_screen;
pub mod model;
pub mod popup_launcher;
pub mod reducer;
pub mod runtime_context;
pub mod search;
pub mod signal_bus;
pub mod store;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::DesktopConfig;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use signal_bus::{ShellSignal, SignalBus};
pub use store::DesktopStore;
