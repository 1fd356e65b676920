//! Search overlay results over launchable apps and open windows.

use crate::{
    apps::{app_registry, open_request},
    model::{AppKind, OsState, WindowId},
    reducer::DesktopAction,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchHit {
    /// A registry app that is not currently open.
    App { kind: AppKind, label: &'static str },
    /// An open window, minimized or not.
    Window { window_id: WindowId, title: String },
}

impl SearchHit {
    pub fn label(&self) -> &str {
        match self {
            Self::App { label, .. } => label,
            Self::Window { title, .. } => title,
        }
    }

    /// Action that brings the hit to the front: open for apps, focus for windows.
    pub fn activate(&self) -> DesktopAction {
        match self {
            Self::App { kind, .. } => DesktopAction::OpenWindow(open_request(*kind)),
            Self::Window { window_id, .. } => DesktopAction::FocusWindow {
                window_id: window_id.clone(),
            },
        }
    }
}

/// Open windows first (topmost first), then registry apps without an open window.
///
/// A blank query lists every registry app and no windows.
pub fn search(state: &OsState, query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&needle);

    let mut hits = Vec::new();
    if !needle.is_empty() {
        let mut windows = state.windows_by_z();
        windows.reverse();
        hits.extend(
            windows
                .into_iter()
                .filter(|w| matches(&w.title))
                .map(|w| SearchHit::Window {
                    window_id: w.id.clone(),
                    title: w.title.clone(),
                }),
        );
    }
    hits.extend(
        app_registry()
            .iter()
            .filter(|d| state.window(&WindowId::new(d.window_id)).is_none())
            .filter(|d| needle.is_empty() || matches(d.launcher_label))
            .map(|d| SearchHit::App {
                kind: d.app_kind,
                label: d.launcher_label,
            }),
    );
    hits
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_desktop;

    fn desktop_with(kinds: &[AppKind]) -> OsState {
        let mut state = OsState {
            is_locked: false,
            ..OsState::default()
        };
        for kind in kinds {
            reduce_desktop(&mut state, DesktopAction::OpenWindow(open_request(*kind)));
        }
        state
    }

    #[test]
    fn blank_query_lists_registry_apps() {
        let state = desktop_with(&[]);
        let hits = search(&state, "  ");
        assert_eq!(hits.len(), app_registry().len());
        assert!(hits.iter().all(|hit| matches!(hit, SearchHit::App { .. })));
    }

    #[test]
    fn open_windows_rank_before_apps_and_replace_them() {
        let state = desktop_with(&[AppKind::PresentationViewer]);

        let hits = search(&state, "PRES");

        assert_eq!(
            hits,
            vec![SearchHit::Window {
                window_id: WindowId::new("presentations"),
                title: "Presentations".to_string(),
            }]
        );
    }

    #[test]
    fn activating_hits_opens_or_focuses() {
        let mut state = desktop_with(&[AppKind::WordDocument, AppKind::Account]);

        let window_hit = search(&state, "documents").remove(0);
        reduce_desktop(&mut state, window_hit.activate());
        assert_eq!(state.focused_window_id(), Some(&WindowId::new("documents")));

        let app_hit = search(&state, "sheet").remove(0);
        assert_eq!(app_hit.label(), "Spreadsheets");
        reduce_desktop(&mut state, app_hit.activate());
        assert_eq!(state.windows.len(), 3);
        assert_eq!(state.focused_window_id(), Some(&WindowId::new("spreadsheets")));
    }
}
