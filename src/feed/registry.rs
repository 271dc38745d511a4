// PriceFeed - ordered subscriber registry with weak back-references

use std::sync::{Arc, Weak};

/// Receives broadcast price updates from a [`PriceFeed`].
///
/// Takes `&self`: a subscriber that mutates on notification keeps its own
/// interior mutability. What a subscriber does with an update (printing,
/// recording, forwarding) is entirely its own business.
pub trait Subscriber: Send + Sync {
    fn on_price(&self, symbol: &str, price: f64);
}

/// Broadcast registry for price updates
///
/// Subscribers are held as `Weak` references in registration order. The feed
/// is a relation, not an owner: an entry whose subscriber has been dropped is
/// skipped and pruned on the next publish.
///
/// Policy notes (deliberate, not accidental):
/// - Subscribing the same subscriber twice is NOT deduplicated; it will
///   receive the update once per registration.
/// - `publish` snapshots the live subscribers before delivering anything, so
///   a subscription change made while a publish is in flight only affects
///   the next publish.
pub struct PriceFeed {
    subscribers: Vec<Weak<dyn Subscriber>>,
}

impl PriceFeed {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a subscriber at the end of the delivery order.
    pub fn subscribe(&mut self, subscriber: &Arc<dyn Subscriber>) {
        self.subscribers.push(Arc::downgrade(subscriber));
    }

    /// Remove every registration of `subscriber` (pointer identity).
    ///
    /// Silent no-op if the subscriber was never registered.
    pub fn unsubscribe(&mut self, subscriber: &Arc<dyn Subscriber>) {
        let target = Arc::downgrade(subscriber);
        self.subscribers.retain(|entry| !entry.ptr_eq(&target));
    }

    /// Broadcast `(symbol, price)` to every live subscriber, in
    /// registration order. Dead entries are pruned as a side effect.
    ///
    /// Returns the number of subscribers that received the update.
    pub fn publish(&mut self, symbol: &str, price: f64) -> usize {
        self.subscribers.retain(|entry| entry.strong_count() > 0);

        // Snapshot before delivering: a subscriber dropped by another
        // subscriber's callback still gets this update, not the next one.
        let snapshot: Vec<Arc<dyn Subscriber>> = self
            .subscribers
            .iter()
            .filter_map(Weak::upgrade)
            .collect();

        for subscriber in &snapshot {
            subscriber.on_price(symbol, price);
        }

        snapshot.len()
    }

    /// Number of currently-live registrations.
    pub fn len(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PriceFeed {
    fn default() -> Self {
        Self::new()
    }
}
