//! Popup mini-app catalogs and the launcher's filter/open-set model.
//!
//! Popup apps are a flat, non-stacking sibling of the window store: each has fixed geometry and a
//! single open/closed flag. The launcher itself is shown or hidden through
//! [`crate::signal_bus::ShellSignal::TogglePopupLauncher`].

use std::{collections::BTreeSet, sync::OnceLock};

use serde::Deserialize;

use crate::model::{Point, Size};

include!(concat!(env!("OUT_DIR"), "/popup_catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct PopupAppEntry {
    app_id: String,
    title: String,
    glyph: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct PopupCatalogEntry {
    catalog_id: String,
    display_name: String,
    apps: Vec<PopupAppEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One launchable popup mini-app.
pub struct PopupApp {
    /// Stable app id, unique across all catalogs.
    pub app_id: String,
    /// Display title, also the filter key.
    pub title: String,
    /// Launcher glyph.
    pub glyph: String,
    /// Fixed top-left corner.
    pub position: Point,
    /// Fixed size.
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Named group of popup apps shown as one launcher section.
pub struct PopupCatalog {
    /// Stable catalog id.
    pub catalog_id: String,
    /// Section heading.
    pub display_name: String,
    /// Apps in display order.
    pub apps: Vec<PopupApp>,
}

/// Returns the catalogs compiled from `catalog/popup_apps.toml`.
pub fn builtin_catalogs() -> &'static [PopupCatalog] {
    static CATALOGS: OnceLock<Vec<PopupCatalog>> = OnceLock::new();
    CATALOGS.get_or_init(|| {
        let entries: Vec<PopupCatalogEntry> = serde_json::from_str(POPUP_CATALOG_JSON)
            .expect("generated popup catalog should parse");
        entries
            .into_iter()
            .map(|catalog| PopupCatalog {
                catalog_id: catalog.catalog_id,
                display_name: catalog.display_name,
                apps: catalog
                    .apps
                    .into_iter()
                    .map(|app| PopupApp {
                        app_id: app.app_id,
                        title: app.title,
                        glyph: app.glyph,
                        position: Point::new(app.x, app.y),
                        size: Size::new(app.width, app.height),
                    })
                    .collect(),
            })
            .collect()
    })
}

/// Looks up a built-in popup app by id.
pub fn builtin_popup_app(app_id: &str) -> Option<&'static PopupApp> {
    builtin_catalogs()
        .iter()
        .flat_map(|catalog| catalog.apps.iter())
        .find(|app| app.app_id == app_id)
}

/// Keeps apps whose title contains `query`, ignoring case. A blank query keeps everything.
pub fn filter_popup_apps<'a>(apps: &'a [PopupApp], query: &str) -> Vec<&'a PopupApp> {
    let needle = query.trim().to_lowercase();
    apps.iter()
        .filter(|app| needle.is_empty() || app.title.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Transient launcher UI state. Holds no window-store data.
pub struct PopupLauncher {
    /// Whether the launcher panel is shown.
    pub visible: bool,
    /// Current filter text.
    pub query: String,
    open: BTreeSet<String>,
}

impl PopupLauncher {
    /// Shows a hidden launcher or hides a visible one. Hiding clears the filter.
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.query.clear();
        }
    }

    /// Replaces the filter text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Catalogs narrowed to the current query, dropping sections with no match.
    pub fn filtered<'a>(
        &self,
        catalogs: &'a [PopupCatalog],
    ) -> Vec<(&'a PopupCatalog, Vec<&'a PopupApp>)> {
        catalogs
            .iter()
            .map(|catalog| (catalog, filter_popup_apps(&catalog.apps, &self.query)))
            .filter(|(_, apps)| !apps.is_empty())
            .collect()
    }

    /// Returns whether the popup `app_id` is open.
    pub fn is_open(&self, app_id: &str) -> bool {
        self.open.contains(app_id)
    }

    /// Opens a popup and hides the launcher.
    pub fn open_popup(&mut self, app_id: &str) {
        self.open.insert(app_id.to_string());
        self.visible = false;
        self.query.clear();
    }

    /// Closes a popup. Closing a closed popup is a no-op.
    pub fn close_popup(&mut self, app_id: &str) {
        self.open.remove(app_id);
    }

    /// Flips one popup's open flag.
    pub fn toggle_popup(&mut self, app_id: &str) {
        if self.is_open(app_id) {
            self.close_popup(app_id);
        } else {
            self.open_popup(app_id);
        }
    }

    /// Ids of every open popup, sorted.
    pub fn open_popups(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::signal_bus::{ShellSignal, SignalBus};

    fn app(title: &str) -> PopupApp {
        PopupApp {
            app_id: title.to_lowercase(),
            title: title.to_string(),
            glyph: String::new(),
            position: Point::new(0, 0),
            size: Size::new(200, 200),
        }
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let apps = vec![app("Calculator"), app("Clock"), app("Maps")];

        let titles: Vec<&str> = filter_popup_apps(&apps, "ca")
            .into_iter()
            .map(|app| app.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Calculator"]);

        assert_eq!(filter_popup_apps(&apps, "CL").len(), 1);
        assert_eq!(filter_popup_apps(&apps, "  ").len(), 3);
        assert!(filter_popup_apps(&apps, "zzz").is_empty());
    }

    #[test]
    fn builtin_catalog_loads_with_fixed_geometry() {
        let catalogs = builtin_catalogs();
        assert!(!catalogs.is_empty());
        let calculator = builtin_popup_app("calculator").expect("calculator popup");
        assert_eq!(calculator.title, "Calculator");
        assert!(calculator.size.width > 0 && calculator.size.height > 0);
        assert!(builtin_popup_app("missing").is_none());
    }

    #[test]
    fn filtered_drops_empty_sections() {
        let catalogs = vec![
            PopupCatalog {
                catalog_id: "one".to_string(),
                display_name: "One".to_string(),
                apps: vec![app("Calculator")],
            },
            PopupCatalog {
                catalog_id: "two".to_string(),
                display_name: "Two".to_string(),
                apps: vec![app("Maps")],
            },
        ];
        let mut launcher = PopupLauncher::default();
        launcher.set_query("map");

        let sections = launcher.filtered(&catalogs);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0.catalog_id, "two");
    }

    #[test]
    fn popups_open_independently() {
        let mut launcher = PopupLauncher::default();
        launcher.toggle_visible();
        launcher.set_query("cl");

        launcher.open_popup("clock");
        launcher.toggle_popup("maps");
        assert!(!launcher.visible);
        assert!(launcher.query.is_empty());
        assert_eq!(launcher.open_popups().collect::<Vec<_>>(), vec!["clock", "maps"]);

        launcher.toggle_popup("clock");
        launcher.close_popup("clock");
        assert!(!launcher.is_open("clock"));
        assert!(launcher.is_open("maps"));
    }

    #[test]
    fn bus_signal_toggles_launcher_without_direct_reference() {
        let bus = SignalBus::default();
        let launcher = Rc::new(RefCell::new(PopupLauncher::default()));
        let target = Rc::clone(&launcher);
        bus.subscribe(ShellSignal::TogglePopupLauncher, move || {
            target.borrow_mut().toggle_visible()
        });

        bus.publish(ShellSignal::TogglePopupLauncher);
        assert!(launcher.borrow().visible);
        bus.publish(ShellSignal::TogglePopupLauncher);
        assert!(!launcher.borrow().visible);
    }
}
