//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod session;

use crate::{
    model::{OpenWindowRequest, OsState, Point, Size, Viewport, WindowId, WindowRecord},
    window_manager::{
        cascade_position, find_window_mut, focus_window_internal, next_z_index, toggle_maximize,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`OsState`].
///
/// Actions naming a window that does not exist are silent no-ops.
pub enum DesktopAction {
    /// Open a window, or focus it when the id is already open.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window without touching its stacking order.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle between maximized and the fixed restored geometry.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Full browser viewport at the time of the toggle.
        viewport: Viewport,
    },
    /// Raise a window above all others and un-minimize it.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Overwrite a window position.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: Point,
    },
    /// Overwrite a window size.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New size.
        size: Size,
    },
    /// Taskbar button press: minimize the focused window, otherwise focus it.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Leave the lock screen.
    Unlock,
    /// Return to the lock screen.
    Lock,
    /// Flip the dark theme flag.
    ToggleDarkMode,
    /// Set the dark theme flag.
    SetDarkMode {
        /// Whether dark mode is enabled.
        enabled: bool,
    },
    /// Clock tick from the ticking source.
    Tick {
        /// Wall-clock time in milliseconds since the Unix epoch.
        unix_ms: u64,
    },
}

impl DesktopAction {
    /// Returns whether this action operates on the window set and must be suppressed while the
    /// desktop is locked.
    pub fn targets_windows(&self) -> bool {
        matches!(
            self,
            Self::OpenWindow(_)
                | Self::CloseWindow { .. }
                | Self::MinimizeWindow { .. }
                | Self::ToggleMaximize { .. }
                | Self::FocusWindow { .. }
                | Self::MoveWindow { .. }
                | Self::ResizeWindow { .. }
                | Self::ToggleTaskbarWindow { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// This is the only code path that mutates the window set. It never fails: actions referencing
/// unknown windows leave the state untouched.
pub fn reduce_desktop(state: &mut OsState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    if session::reduce_session_action(state, &action) {
        return effects;
    }

    match action {
        DesktopAction::OpenWindow(req) => {
            if state.window(&req.id).is_none() {
                let record = WindowRecord {
                    position: cascade_position(state.windows.len()),
                    size: Size::default(),
                    z_index: next_z_index(state),
                    is_minimized: false,
                    is_maximized: false,
                    id: req.id.clone(),
                    title: req.title,
                    content: req.content,
                };
                state.windows.push(record);
            } else {
                focus_window_internal(state, &req.id);
            }
            effects.push(RuntimeEffect::FocusWindowInput(req.id));
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.retain(|w| w.id != window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.is_minimized = true;
            }
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                toggle_maximize(window, viewport);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if focus_window_internal(state, &window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.position = position;
            }
        }
        DesktopAction::ResizeWindow { window_id, size } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.size = size;
            }
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let focused = state.focused_window_id() == Some(&window_id);
            let next = if focused {
                DesktopAction::MinimizeWindow { window_id }
            } else {
                DesktopAction::FocusWindow { window_id }
            };
            effects.extend(reduce_desktop(state, next));
        }
        DesktopAction::Unlock
        | DesktopAction::Lock
        | DesktopAction::ToggleDarkMode
        | DesktopAction::SetDarkMode { .. }
        | DesktopAction::Tick { .. } => {}
    }

    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppKind, WindowContent};

    fn open(state: &mut OsState, id: &str) -> Vec<RuntimeEffect> {
        reduce_desktop(
            state,
            DesktopAction::OpenWindow(OpenWindowRequest::new(
                id,
                id.to_uppercase(),
                WindowContent::app(AppKind::WordDocument),
            )),
        )
    }

    fn id(raw: &str) -> WindowId {
        WindowId::new(raw)
    }

    fn z_of(state: &OsState, raw: &str) -> u32 {
        state.window(&id(raw)).expect("window").z_index
    }

    fn unlocked() -> OsState {
        OsState {
            is_locked: false,
            ..OsState::default()
        }
    }

    #[test]
    fn distinct_opens_get_call_order_z_and_cascade() {
        let mut state = unlocked();
        for raw in ["a", "b", "c", "d"] {
            open(&mut state, raw);
        }

        assert_eq!(state.windows.len(), 4);
        let zs: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
        assert_eq!(zs, vec![1, 2, 3, 4]);
        assert_eq!(state.windows[0].position, Point::new(100, 100));
        assert_eq!(state.windows[3].position, Point::new(190, 190));
        assert!(state.windows.iter().all(|w| w.size == Size::new(800, 600)));
        assert_eq!(state.focused_window_id(), Some(&id("d")));
    }

    #[test]
    fn open_existing_id_equals_open_then_focus() {
        let mut reopened = unlocked();
        open(&mut reopened, "a");
        open(&mut reopened, "b");
        let effects = open(&mut reopened, "a");

        let mut focused = unlocked();
        open(&mut focused, "a");
        open(&mut focused, "b");
        reduce_desktop(
            &mut focused,
            DesktopAction::FocusWindow { window_id: id("a") },
        );

        assert_eq!(reopened, focused);
        assert_eq!(reopened.windows.len(), 2);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id("a"))]);
    }

    #[test]
    fn reopening_a_minimized_window_restores_it() {
        let mut state = unlocked();
        open(&mut state, "a");
        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: id("a") },
        );
        open(&mut state, "a");

        let window = state.window(&id("a")).expect("window");
        assert!(!window.is_minimized);
        assert_eq!(window.z_index, 2);
    }

    #[test]
    fn focus_raises_strictly_above_all_windows() {
        let mut state = unlocked();
        open(&mut state, "a");
        open(&mut state, "b");
        open(&mut state, "c");
        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: id("b") },
        );

        reduce_desktop(
            &mut state,
            DesktopAction::FocusWindow { window_id: id("b") },
        );

        let b = state.window(&id("b")).expect("window");
        assert!(!b.is_minimized);
        assert!(state
            .windows
            .iter()
            .filter(|w| w.id != b.id)
            .all(|w| w.z_index < b.z_index));
        assert_eq!(b.z_index, 4);
    }

    #[test]
    fn lifecycle_scenario_open_focus_minimize_close() {
        let mut state = unlocked();
        open(&mut state, "a");
        open(&mut state, "b");
        open(&mut state, "c");
        assert_eq!(
            (z_of(&state, "a"), z_of(&state, "b"), z_of(&state, "c")),
            (1, 2, 3)
        );
        assert_eq!(state.focused_window_id(), Some(&id("c")));

        reduce_desktop(
            &mut state,
            DesktopAction::FocusWindow { window_id: id("a") },
        );
        assert_eq!(z_of(&state, "a"), 4);
        assert_eq!(state.focused_window_id(), Some(&id("a")));

        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: id("c") },
        );
        let c = state.window(&id("c")).expect("window");
        assert!(c.is_minimized);
        assert_eq!(c.z_index, 3);

        reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: id("b") });
        let ids: Vec<&str> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut state = unlocked();
        open(&mut state, "a");
        let before = state.clone();

        let ghost = id("ghost");
        let actions = vec![
            DesktopAction::CloseWindow {
                window_id: ghost.clone(),
            },
            DesktopAction::MinimizeWindow {
                window_id: ghost.clone(),
            },
            DesktopAction::ToggleMaximize {
                window_id: ghost.clone(),
                viewport: Viewport::default(),
            },
            DesktopAction::FocusWindow {
                window_id: ghost.clone(),
            },
            DesktopAction::MoveWindow {
                window_id: ghost.clone(),
                position: Point::new(5, 5),
            },
            DesktopAction::ResizeWindow {
                window_id: ghost.clone(),
                size: Size::new(5, 5),
            },
        ];
        for action in actions {
            assert_eq!(reduce_desktop(&mut state, action), Vec::new());
        }

        assert_eq!(state, before);
    }

    #[test]
    fn close_removes_exactly_one() {
        let mut state = unlocked();
        open(&mut state, "a");
        open(&mut state, "b");

        reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: id("a") });

        assert_eq!(state.windows.len(), 1);
        assert!(state.window(&id("a")).is_none());
    }

    #[test]
    fn maximize_round_trip_uses_fixed_restore_geometry() {
        let mut state = unlocked();
        open(&mut state, "a");
        reduce_desktop(
            &mut state,
            DesktopAction::MoveWindow {
                window_id: id("a"),
                position: Point::new(150, 150),
            },
        );
        let viewport = Viewport {
            width: 1280,
            height: 800,
        };

        reduce_desktop(
            &mut state,
            DesktopAction::ToggleMaximize {
                window_id: id("a"),
                viewport,
            },
        );
        let window = state.window(&id("a")).expect("window");
        assert!(window.is_maximized);
        assert_eq!(window.position, Point::new(0, 0));
        assert_eq!(window.size, Size::new(1280, 720));

        reduce_desktop(
            &mut state,
            DesktopAction::ToggleMaximize {
                window_id: id("a"),
                viewport,
            },
        );
        let window = state.window(&id("a")).expect("window");
        assert!(!window.is_maximized);
        assert_eq!(window.position, Point::new(100, 100));
        assert_eq!(window.size, Size::new(800, 600));
    }

    #[test]
    fn maximize_does_not_change_stacking_or_minimized_flag() {
        let mut state = unlocked();
        open(&mut state, "a");
        open(&mut state, "b");
        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: id("a") },
        );

        reduce_desktop(
            &mut state,
            DesktopAction::ToggleMaximize {
                window_id: id("a"),
                viewport: Viewport::default(),
            },
        );

        let a = state.window(&id("a")).expect("window");
        assert!(a.is_minimized);
        assert!(a.is_maximized);
        assert_eq!(a.z_index, 1);
    }

    #[test]
    fn move_and_resize_overwrite_without_clamping() {
        let mut state = unlocked();
        open(&mut state, "a");

        reduce_desktop(
            &mut state,
            DesktopAction::MoveWindow {
                window_id: id("a"),
                position: Point::new(-4000, 9000),
            },
        );
        reduce_desktop(
            &mut state,
            DesktopAction::ResizeWindow {
                window_id: id("a"),
                size: Size::new(1, 0),
            },
        );

        let a = state.window(&id("a")).expect("window");
        assert_eq!(a.position, Point::new(-4000, 9000));
        assert_eq!(a.size, Size::new(1, 0));
    }

    #[test]
    fn taskbar_toggle_minimizes_focused_and_focuses_others() {
        let mut state = unlocked();
        open(&mut state, "a");
        open(&mut state, "b");

        reduce_desktop(
            &mut state,
            DesktopAction::ToggleTaskbarWindow { window_id: id("b") },
        );
        assert!(state.window(&id("b")).expect("window").is_minimized);
        assert_eq!(state.focused_window_id(), Some(&id("a")));

        let effects = reduce_desktop(
            &mut state,
            DesktopAction::ToggleTaskbarWindow { window_id: id("b") },
        );
        let b = state.window(&id("b")).expect("window");
        assert!(!b.is_minimized);
        assert_eq!(b.z_index, 3);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id("b"))]);
    }

    #[test]
    fn window_actions_are_classified_for_lock_gate() {
        assert!(DesktopAction::CloseWindow { window_id: id("a") }.targets_windows());
        assert!(DesktopAction::ToggleTaskbarWindow { window_id: id("a") }.targets_windows());
        assert!(!DesktopAction::Unlock.targets_windows());
        assert!(!DesktopAction::Tick { unix_ms: 1 }.targets_windows());
        assert!(!DesktopAction::ToggleDarkMode.targets_windows());
    }
}
