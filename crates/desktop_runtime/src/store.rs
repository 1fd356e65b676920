//! Single-writer desktop state container with an observer interface.
//!
//! [`DesktopStore`] is constructed explicitly and handed to whoever needs it. Every mutation goes
//! through [`DesktopStore::dispatch`], which applies the lock gate, runs [`reduce_desktop`], and
//! notifies subscribers when the state actually changed.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;

use crate::{
    model::OsState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

/// Handle returned by [`DesktopStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&OsState)>;

#[derive(Default)]
struct StoreInner {
    state: OsState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

#[derive(Clone, Default)]
/// Shared handle onto the canonical [`OsState`].
pub struct DesktopStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl DesktopStore {
    /// Creates a store seeded with `state`.
    pub fn new(state: OsState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state,
                ..StoreInner::default()
            })),
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> OsState {
        self.inner.borrow().state.clone()
    }

    /// Returns whether the lock screen gate is active.
    pub fn is_locked(&self) -> bool {
        self.inner.borrow().state.is_locked
    }

    /// Registers `subscriber` to receive the state after every changing dispatch.
    pub fn subscribe(&self, subscriber: impl Fn(&OsState) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.subscribers.push((id, Rc::new(subscriber)));
        id
    }

    /// Removes a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(existing, _)| *existing != id);
    }

    /// Applies `action` and returns the side effects it produced.
    ///
    /// Window lifecycle actions are dropped while the desktop is locked.
    pub fn dispatch(&self, action: DesktopAction) -> Vec<RuntimeEffect> {
        let (effects, changed) = {
            let mut inner = self.inner.borrow_mut();
            if inner.state.is_locked && action.targets_windows() {
                logging::warn!("desktop is locked; ignoring {action:?}");
                return Vec::new();
            }
            let previous = inner.state.clone();
            let effects = reduce_desktop(&mut inner.state, action);
            let changed = inner.state != previous;
            (effects, changed)
        };

        if changed {
            self.notify();
        }
        effects
    }

    fn notify(&self) {
        // Subscribers may dispatch again, so nothing stays borrowed while they run.
        let (state, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: Vec<Subscriber> = inner
                .subscribers
                .iter()
                .map(|(_, subscriber)| Rc::clone(subscriber))
                .collect();
            (inner.state.clone(), subscribers)
        };
        for subscriber in subscribers {
            subscriber(&state);
        }
    }
}

impl std::fmt::Debug for DesktopStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("DesktopStore")
            .field("state", &inner.state)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppKind, OpenWindowRequest, WindowContent, WindowId};

    fn open_action(id: &str) -> DesktopAction {
        DesktopAction::OpenWindow(OpenWindowRequest::new(
            id,
            "Doc",
            WindowContent::app(AppKind::WordDocument),
        ))
    }

    #[test]
    fn locked_store_drops_window_actions() {
        let store = DesktopStore::default();
        let notified = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notified);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        assert_eq!(store.dispatch(open_action("a")), Vec::new());
        assert!(store.snapshot().windows.is_empty());
        assert_eq!(notified.get(), 0);

        store.dispatch(DesktopAction::Unlock);
        assert_eq!(notified.get(), 1);
        assert_eq!(
            store.dispatch(open_action("a")),
            vec![RuntimeEffect::FocusWindowInput(WindowId::new("a"))]
        );
        assert_eq!(store.snapshot().windows.len(), 1);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn session_actions_pass_the_lock_gate() {
        let store = DesktopStore::default();
        store.dispatch(DesktopAction::ToggleDarkMode);
        store.dispatch(DesktopAction::Tick { unix_ms: 7 });

        let state = store.snapshot();
        assert!(state.is_locked);
        assert!(state.is_dark_mode);
        assert_eq!(state.current_time_ms, 7);
    }

    #[test]
    fn subscribers_only_hear_real_changes() {
        let store = DesktopStore::default();
        store.dispatch(DesktopAction::Unlock);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.windows.len()));

        store.dispatch(open_action("a"));
        store.dispatch(DesktopAction::CloseWindow {
            window_id: WindowId::new("missing"),
        });
        store.dispatch(open_action("b"));
        store.unsubscribe(id);
        store.dispatch(open_action("c"));

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn subscriber_may_dispatch_reentrantly() {
        let store = DesktopStore::default();
        let handle = store.clone();
        store.subscribe(move |state| {
            if !state.is_locked && state.windows.is_empty() {
                handle.dispatch(open_action("welcome"));
            }
        });

        store.dispatch(DesktopAction::Unlock);

        let state = store.snapshot();
        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].id, WindowId::new("welcome"));
    }
}
