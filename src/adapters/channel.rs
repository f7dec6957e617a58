//! Broadcast-channel invalidation bus.

use tokio::sync::broadcast;

use crate::ports::invalidation::{InvalidationSource, QueryName};

/// Default number of tokens buffered per subscriber.
const DEFAULT_CAPACITY: usize = 64;

/// Fans invalidation tokens out to every live subscriber.
///
/// Slow subscribers that fall more than the capacity behind observe
/// `RecvError::Lagged` and should refetch everything.
pub struct ChannelInvalidation {
    sender: broadcast::Sender<QueryName>,
}

impl Default for ChannelInvalidation {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ChannelInvalidation {
    /// Creates a bus buffering `capacity` tokens per subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes `query` and returns how many subscribers received it.
    pub fn publish(&self, query: QueryName) -> usize {
        // Sending with no subscribers is not an error for us.
        let delivered = self.sender.send(query).unwrap_or(0);
        tracing::debug!(%query, delivered, "invalidated query");
        delivered
    }

    /// Publishes every name in `queries`.
    pub fn publish_all(&self, queries: &[QueryName]) {
        for query in queries {
            self.publish(*query);
        }
    }
}

impl InvalidationSource for ChannelInvalidation {
    fn subscribe(&self) -> broadcast::Receiver<QueryName> {
        self.sender.subscribe()
    }
}
