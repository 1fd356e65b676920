//! Lock screen coordinator: a display clock plus the single unlock transition.

use platform_host::ClockSnapshot;

use crate::{reducer::DesktopAction, store::DesktopStore};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Labels rendered on the lock screen. Derived from the wall clock only.
pub struct LockScreenView {
    pub time_label: String,
    pub date_label: String,
}

impl From<ClockSnapshot> for LockScreenView {
    fn from(snapshot: ClockSnapshot) -> Self {
        Self {
            time_label: snapshot.time_label,
            date_label: snapshot.date_label,
        }
    }
}

/// Leaves the lock screen. There is no credential check here; sign-in belongs to the identity
/// provider.
pub fn unlock(store: &DesktopStore) {
    store.dispatch(DesktopAction::Unlock);
}
