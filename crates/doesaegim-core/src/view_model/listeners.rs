//! Listener registry
//!
//! Replaces single optional callbacks with explicit subscriptions that can be
//! dropped again through their handle.

use std::fmt;

/// Handle returned by [`Listeners::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Ordered set of event listeners
pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(Subscription, Listener<E>)>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a listener; it is called for every event until unsubscribed
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push((subscription, Box::new(listener)));
        subscription
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != subscription);
        self.entries.len() != before
    }

    /// Deliver `event` to every listener in registration order
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}
