//! Cart-change notifications
//!
//! A process-wide broadcast with no queue and no payload: the cart store
//! fires one signal per completed write, and subscribers re-read the store
//! themselves, so there is no stale payload to observe.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
};

use smallvec::SmallVec;

type Handler = Arc<dyn Fn() + Send + Sync + 'static>;

/// Broadcasts "cart changed" to every live subscriber.
///
/// Clones share the same subscriber registry, so the store and any number of
/// views can hold the same notifier.
#[derive(Clone, Default)]
pub struct CartNotifier {
    registry: Arc<Mutex<Registry>>,
}

#[derive(Default)]
struct Registry {
    subscribers: SmallVec<[(u64, Handler); 4]>,
    next_id: u64,
}

impl CartNotifier {
    /// Create a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler to run on every cart change.
    ///
    /// The handler stays registered for the lifetime of the returned
    /// [`Subscription`]; dropping it unsubscribes.
    #[must_use = "dropping the subscription immediately unsubscribes the handler"]
    pub fn subscribe(&self, handler: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut registry = self.lock();

        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, Arc::new(handler)));

        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Invoke every live handler once.
    ///
    /// Handlers run after the registry lock is released, so a handler may
    /// subscribe or unsubscribe (including itself) without deadlocking.
    pub fn notify(&self) {
        let handlers: SmallVec<[Handler; 4]> = self
            .lock()
            .subscribers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for handler in handlers {
            handler();
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // A poisoned registry only means a handler panicked mid-notify; the
        // subscriber list itself is still coherent.
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CartNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle tying a subscribed handler to its owner's lifetime.
///
/// Dropping the handle removes the handler from the notifier.
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Subscription {
    /// Remove the handler now rather than when the handle is dropped.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);

            registry.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
