//! Reducer helpers for session flags: lock gate, theme, and clock.

use crate::{model::OsState, reducer::DesktopAction};

/// Applies session-flag actions. Returns `false` when `action` is not a session action.
pub(super) fn reduce_session_action(state: &mut OsState, action: &DesktopAction) -> bool {
    match action {
        DesktopAction::Unlock => state.is_locked = false,
        DesktopAction::Lock => state.is_locked = true,
        DesktopAction::ToggleDarkMode => state.is_dark_mode = !state.is_dark_mode,
        DesktopAction::SetDarkMode { enabled } => state.is_dark_mode = *enabled,
        DesktopAction::Tick { unix_ms } => state.current_time_ms = *unix_ms,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::reduce_desktop;

    #[test]
    fn cold_start_is_locked_and_unlock_is_one_way() {
        let mut state = OsState::default();
        assert!(state.is_locked);
        assert!(state.windows.is_empty());

        reduce_desktop(&mut state, DesktopAction::Unlock);
        assert!(!state.is_locked);
        reduce_desktop(&mut state, DesktopAction::Unlock);
        assert!(!state.is_locked);

        reduce_desktop(&mut state, DesktopAction::Lock);
        assert!(state.is_locked);
    }

    #[test]
    fn theme_and_clock_flags_update() {
        let mut state = OsState::default();

        reduce_desktop(&mut state, DesktopAction::ToggleDarkMode);
        assert!(state.is_dark_mode);
        reduce_desktop(&mut state, DesktopAction::SetDarkMode { enabled: false });
        assert!(!state.is_dark_mode);

        reduce_desktop(&mut state, DesktopAction::Tick { unix_ms: 42_000 });
        assert_eq!(state.current_time_ms, 42_000);
    }

    #[test]
    fn window_actions_fall_through() {
        let mut state = OsState::default();
        let handled = reduce_session_action(
            &mut state,
            &DesktopAction::CloseWindow {
                window_id: "a".into(),
            },
        );
        assert!(!handled);
    }
}
