//! Single source of truth for the current wallet session.
//!
//! [`SessionStore`] holds one `Option<SessionInfo>` value and notifies
//! registered listeners on every replacement. The value is never mutated
//! in place: publishing replaces the whole snapshot, so listeners observe
//! either a complete session or none.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use super::SessionInfo;

const LOCK_POISONED: &str = "session store lock poisoned";

type Listener = Arc<dyn Fn(Option<&SessionInfo>) + Send + Sync + 'static>;

/// Observer-registry store for the current session snapshot.
///
/// Listeners are invoked synchronously, in registration order, starting
/// from the publish after they subscribe; there is no replay of the
/// current value ([`current`](Self::current) covers that read).
pub struct SessionStore {
    current: Mutex<Option<SessionInfo>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl SessionStore {
    /// Create an empty store (no session).
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// The latest published snapshot. Never blocks on provider activity.
    #[must_use]
    pub fn current(&self) -> Option<SessionInfo> {
        self.current.lock().expect(LOCK_POISONED).clone()
    }

    /// Register a listener for future state replacements.
    ///
    /// The returned [`Subscription`] stops notifications when released or
    /// dropped.
    pub fn subscribe(
        self: &Arc<Self>,
        listener: impl Fn(Option<&SessionInfo>) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .expect(LOCK_POISONED)
            .push((id, Arc::new(listener)));
        Subscription {
            id,
            store: Arc::downgrade(self),
        }
    }

    /// Replace the stored value and notify all active listeners.
    ///
    /// Listeners run over a snapshot of the registry, so unsubscribing
    /// from within a notification is safe.
    pub(crate) fn publish(&self, state: Option<SessionInfo>) {
        *self.current.lock().expect(LOCK_POISONED) = state.clone();

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .expect(LOCK_POISONED)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(state.as_ref());
        }
    }

    fn remove(&self, id: u64) {
        self.listeners
            .lock()
            .expect(LOCK_POISONED)
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

/// Handle tying a listener's lifetime to its owner.
///
/// Releasing is idempotent; dropping the handle releases implicitly, so a
/// torn-down consumer cannot leak its listener.
#[derive(Debug)]
#[must_use = "dropping the subscription stops notifications"]
pub struct Subscription {
    id: u64,
    store: Weak<SessionStore>,
}

impl Subscription {
    /// Stop further notifications to this listener.
    pub fn release(&self) {
        if let Some(store) = self.store.upgrade() {
            store.remove(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, U256};

    fn info(chain_id: u64) -> SessionInfo {
        SessionInfo::new(Address::repeat_byte(0x11), U256::from(10u64), chain_id)
    }

    #[test]
    fn starts_empty() {
        let store = Arc::new(SessionStore::new());
        assert!(store.current().is_none());
    }

    #[test]
    fn publish_replaces_and_notifies_in_registration_order() {
        let store = Arc::new(SessionStore::new());
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&order);
        let _a = store.subscribe(move |_| first.lock().unwrap().push("a"));
        let second = Arc::clone(&order);
        let _b = store.subscribe(move |_| second.lock().unwrap().push("b"));

        store.publish(Some(info(1)));

        assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
        assert_eq!(store.current(), Some(info(1)));
    }

    #[test]
    fn no_replay_on_subscribe() {
        let store = Arc::new(SessionStore::new());
        store.publish(Some(info(1)));

        let seen = Arc::new(Mutex::new(0));
        let count = Arc::clone(&seen);
        let _sub = store.subscribe(move |_| *count.lock().unwrap() += 1);

        assert_eq!(*seen.lock().unwrap(), 0);
        store.publish(None);
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn snapshots_are_whole_or_absent() {
        let store = Arc::new(SessionStore::new());
        let observed = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&observed);
        let _sub = store.subscribe(move |state| {
            if let Some(info) = state {
                assert!(!info.balance.is_empty());
                assert!(!info.network_name.is_empty());
                sink.lock().unwrap().push(Some(info.clone()));
            } else {
                sink.lock().unwrap().push(None);
            }
        });

        store.publish(Some(info(5)));
        store.publish(None);

        let observed = observed.lock().unwrap();
        assert_eq!(observed.len(), 2);
        assert!(observed[0].is_some());
        assert!(observed[1].is_none());
    }

    #[test]
    fn release_stops_notifications_and_is_idempotent() {
        let store = Arc::new(SessionStore::new());
        let seen = Arc::new(Mutex::new(0));

        let count = Arc::clone(&seen);
        let sub = store.subscribe(move |_| *count.lock().unwrap() += 1);

        store.publish(Some(info(1)));
        sub.release();
        sub.release();
        store.publish(None);

        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn drop_releases_listener() {
        let store = Arc::new(SessionStore::new());
        let seen = Arc::new(Mutex::new(0));

        {
            let count = Arc::clone(&seen);
            let _sub = store.subscribe(move |_| *count.lock().unwrap() += 1);
            store.publish(Some(info(1)));
        }
        store.publish(None);

        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn unsubscribe_during_notify_is_tolerated() {
        let store = Arc::new(SessionStore::new());
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let seen = Arc::new(Mutex::new(0));

        let own = Arc::clone(&slot);
        let count = Arc::clone(&seen);
        let sub = store.subscribe(move |_| {
            *count.lock().unwrap() += 1;
            // Listener tears itself down mid-notification.
            own.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(sub);

        store.publish(Some(info(1)));
        store.publish(None);

        assert_eq!(*seen.lock().unwrap(), 1);
    }
}
