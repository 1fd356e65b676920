//! Runtime tunables for the desktop shell.

use std::time::Duration;

use crate::model::Viewport;

/// Shell timing, fallback geometry, and the virtual desktops offered by the switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Interval of the provider clock tick.
    pub clock_tick: Duration,
    /// Interval at which the lock screen recomputes its display date.
    pub date_refresh: Duration,
    /// Viewport used when the browser window cannot be measured.
    pub fallback_viewport: Viewport,
    /// Virtual desktop ids shown by the switcher.
    pub virtual_desktops: Vec<String>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            clock_tick: Duration::from_secs(1),
            date_refresh: Duration::from_secs(60),
            fallback_viewport: Viewport::default(),
            virtual_desktops: ["Desktop 1", "Desktop 2", "Desktop 3"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
