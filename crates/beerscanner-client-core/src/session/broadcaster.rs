use std::{
    fmt::Debug,
    sync::{Arc, Mutex},
};

use tracing::debug;

/// Why the session may have changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SessionEvent {
    /// A new token was stored
    TokenChanged,
    /// The server rejected the token and it has already been removed
    Unauthorized,
}

/// Returned by [`SessionBroadcaster::subscribe`] to allow unsubscribing later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(SessionEvent) + Send + Sync>;

/// Calls every subscribed listener when the session may have changed.
///
/// Listeners are called synchronously on the thread that emits, in the order
/// they subscribed. They must not wait on anything, only start work. They may
/// subscribe, unsubscribe or emit from inside the call.
#[derive(Clone, Default)]
pub struct SessionBroadcaster {
    inner: Arc<Mutex<BroadcasterInner>>,
}

#[derive(Default)]
struct BroadcasterInner {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Debug for SessionBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBroadcaster")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

impl SessionBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(SessionEvent) + Send + Sync + 'static,
    {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        let id = SubscriptionId(guard.next_id);
        guard.next_id += 1;
        guard.listeners.push((id, Arc::new(listener)));
        debug!(?id, "session listener subscribed");
        id
    }

    /// Returns `false` if there was no such subscription
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        let before = guard.listeners.len();
        guard.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != guard.listeners.len()
    }

    #[tracing::instrument]
    pub fn emit(&self, event: SessionEvent) {
        // Lock released before calling out so listeners can use the broadcaster
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .expect("mutex poisoned")
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        debug!(count = listeners.len(), "notifying session listeners");
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().expect("mutex poisoned").listeners.len()
    }
}
