//! Named, payload-free publish/subscribe channel between unrelated shell surfaces.
//!
//! A dock icon can toggle the popup launcher without holding a reference to it: the launcher
//! subscribes to [`ShellSignal::TogglePopupLauncher`] and the icon publishes it.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

/// Signals carried by the [`SignalBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellSignal {
    /// Show or hide the popup app launcher.
    TogglePopupLauncher,
    /// Show or hide the search overlay.
    ToggleSearch,
    /// Show or hide the virtual-desktop switcher.
    ToggleDesktopSwitcher,
}

impl ShellSignal {
    /// Stable event name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TogglePopupLauncher => "toggle-popup-launcher",
            Self::ToggleSearch => "toggle-search",
            Self::ToggleDesktopSwitcher => "toggle-desktop-switcher",
        }
    }
}

/// Handle returned by [`SignalBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalSubscription {
    signal: ShellSignal,
    id: u64,
}

type Handler = Rc<dyn Fn()>;

#[derive(Default)]
struct BusInner {
    topic_subscribers: HashMap<ShellSignal, BTreeMap<u64, Handler>>,
    next_id: u64,
}

#[derive(Clone, Default)]
/// Coordinator-owned observer registry. Clones share the same subscriber table.
pub struct SignalBus {
    inner: Rc<RefCell<BusInner>>,
}

impl SignalBus {
    /// Registers `handler` for `signal`.
    pub fn subscribe(
        &self,
        signal: ShellSignal,
        handler: impl Fn() + 'static,
    ) -> SignalSubscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner
            .topic_subscribers
            .entry(signal)
            .or_default()
            .insert(id, Rc::new(handler));
        SignalSubscription { signal, id }
    }

    /// Removes a subscription. Unknown handles are ignored.
    pub fn unsubscribe(&self, subscription: SignalSubscription) {
        let mut inner = self.inner.borrow_mut();
        if let Some(subscribers) = inner.topic_subscribers.get_mut(&subscription.signal) {
            subscribers.remove(&subscription.id);
            if subscribers.is_empty() {
                inner.topic_subscribers.remove(&subscription.signal);
            }
        }
    }

    /// Invokes every handler subscribed to `signal`, oldest first.
    pub fn publish(&self, signal: ShellSignal) {
        let handlers: Option<Vec<Handler>> = self
            .inner
            .borrow()
            .topic_subscribers
            .get(&signal)
            .map(|subs| subs.values().map(Rc::clone).collect());
        let Some(handlers) = handlers else {
            return;
        };
        for handler in handlers {
            handler();
        }
    }

    /// Number of handlers currently subscribed to `signal`.
    pub fn subscriber_count(&self, signal: ShellSignal) -> usize {
        self.inner
            .borrow()
            .topic_subscribers
            .get(&signal)
            .map_or(0, BTreeMap::len)
    }
}

impl std::fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalBus")
            .field("topics", &self.inner.borrow().topic_subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn publish_reaches_only_matching_subscribers() {
        let bus = SignalBus::default();
        let launcher = Rc::new(Cell::new(0));
        let search = Rc::new(Cell::new(0));
        {
            let launcher = Rc::clone(&launcher);
            bus.subscribe(ShellSignal::TogglePopupLauncher, move || {
                launcher.set(launcher.get() + 1)
            });
        }
        {
            let search = Rc::clone(&search);
            bus.subscribe(ShellSignal::ToggleSearch, move || search.set(search.get() + 1));
        }

        bus.publish(ShellSignal::TogglePopupLauncher);
        bus.publish(ShellSignal::TogglePopupLauncher);
        bus.publish(ShellSignal::ToggleDesktopSwitcher);

        assert_eq!(launcher.get(), 2);
        assert_eq!(search.get(), 0);
    }

    #[test]
    fn unsubscribe_stops_delivery_and_prunes_topic() {
        let bus = SignalBus::default();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = bus.subscribe(ShellSignal::ToggleSearch, move || counter.set(counter.get() + 1));

        bus.unsubscribe(sub);
        bus.unsubscribe(sub);
        bus.publish(ShellSignal::ToggleSearch);

        assert_eq!(hits.get(), 0);
        assert_eq!(bus.subscriber_count(ShellSignal::ToggleSearch), 0);
    }

    #[test]
    fn handler_may_subscribe_while_publishing() {
        let bus = SignalBus::default();
        let handle = bus.clone();
        bus.subscribe(ShellSignal::ToggleSearch, move || {
            handle.subscribe(ShellSignal::ToggleSearch, || {});
        });

        bus.publish(ShellSignal::ToggleSearch);

        assert_eq!(bus.subscriber_count(ShellSignal::ToggleSearch), 2);
    }
}
