//! Topic-addressed delivery of engine notifications to views.

use connect_four_protocol::{Notification, Topic};
use tracing::{debug, instrument};

use crate::subscription::{Registry, Subscription};

/// Routes each [`Notification`] to the handlers of its [`Topic`].
///
/// Cell notifications reach only the handlers of their exact coordinate.
#[derive(Debug, Default)]
pub struct NotificationHub {
    registry: Registry<Topic, Notification>,
}

impl NotificationHub {
    /// Creates a hub with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `topic`.
    #[instrument(skip(self, handler))]
    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl FnMut(&Notification) + 'static,
    ) -> Subscription {
        self.registry.subscribe(topic, handler)
    }

    /// Delivers a notification, returning how many handlers saw it.
    #[instrument(skip(self))]
    pub fn publish(&self, notification: &Notification) -> usize {
        let topic = notification.topic();
        let delivered = self.registry.publish(&topic, notification);
        if delivered == 0 {
            debug!(?topic, "No subscriber for notification");
        }
        delivered
    }

    /// Number of live handlers for `topic`.
    pub fn subscriber_count(&self, topic: &Topic) -> usize {
        self.registry.subscriber_count(topic)
    }

    /// Number of live handlers across all topics.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
