//! Publish-subscribe container of immutable snapshots.
//!
//! Every published value replaces the current snapshot and is delivered
//! synchronously to each subscriber in subscription order before `publish`
//! returns.

use std::fmt;
use std::sync::Arc;

/// Handle returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&Arc<T>) + Send>;

/// Holds the latest snapshot of `T` and the callbacks observing it.
///
/// # Examples
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use hr_panel::domain::Observable;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let mut counter = Observable::new(0_u32);
/// counter.subscribe(move |value| sink.lock().expect("lock").push(**value));
/// counter.publish(1);
///
/// assert_eq!(*seen.lock().expect("lock"), vec![0, 1]);
/// ```
pub struct Observable<T> {
    current: Arc<T>,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T> Observable<T> {
    /// Create a container holding `initial`, with no subscribers.
    pub fn new(initial: T) -> Self {
        Self {
            current: Arc::new(initial),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<T> {
        Arc::clone(&self.current)
    }

    /// Borrow the current value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Register `subscriber` and immediately deliver the current snapshot.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&Arc<T>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let mut boxed: Subscriber<T> = Box::new(subscriber);
        boxed(&self.current);
        self.subscribers.push((id, boxed));
        id
    }

    /// Remove a subscriber. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(registered, _)| *registered != id);
        self.subscribers.len() != before
    }

    /// Replace the snapshot and notify every subscriber.
    pub fn publish(&mut self, value: T) {
        self.current = Arc::new(value);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.current);
        }
    }
}

impl<T: Clone> Observable<T> {
    /// Publish a modified copy of the current snapshot.
    pub fn update(&mut self, change: impl FnOnce(&mut T)) {
        let mut next = T::clone(&self.current);
        change(&mut next);
        self.publish(next);
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
