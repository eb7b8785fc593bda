//! Fire-and-forget submission of analytics work.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{error, warn};

use crate::domain::analytics_event::AnalyticsEvent;

/// Sending half of the bounded analytics channel.
///
/// [`AnalyticsQueue::submit`] never waits: when the channel is full or the
/// worker is gone the event is logged and dropped. Nothing is retried.
#[derive(Debug, Clone)]
pub struct AnalyticsQueue {
    sender: mpsc::Sender<AnalyticsEvent>,
}

impl AnalyticsQueue {
    /// Wraps an existing sender.
    pub fn new(sender: mpsc::Sender<AnalyticsEvent>) -> Self {
        Self { sender }
    }

    /// Creates a queue and the receiver to hand to the worker.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<AnalyticsEvent>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self::new(sender), receiver)
    }

    /// Submits an event without waiting for it to be applied.
    ///
    /// Returns `true` if the event was queued.
    pub fn submit(&self, event: AnalyticsEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                warn!(
                    slug = event.slug(),
                    kind = event.kind(),
                    "Analytics queue full, dropping event"
                );
                metrics::counter!("analytics_events_dropped_total").increment(1);
                false
            }
            Err(TrySendError::Closed(event)) => {
                error!(
                    slug = event.slug(),
                    kind = event.kind(),
                    "Analytics queue closed, dropping event"
                );
                metrics::counter!("analytics_events_dropped_total").increment(1);
                false
            }
        }
    }

    /// Returns `true` once the worker has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Remaining free slots in the channel.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_delivers_event() {
        let (queue, mut rx) = AnalyticsQueue::channel(4);

        assert!(queue.submit(AnalyticsEvent::clicked("abc234")));
        assert_eq!(rx.recv().await, Some(AnalyticsEvent::clicked("abc234")));
    }

    #[tokio::test]
    async fn test_submit_drops_when_full() {
        let (queue, mut rx) = AnalyticsQueue::channel(1);

        assert!(queue.submit(AnalyticsEvent::clicked("first")));
        assert!(!queue.submit(AnalyticsEvent::clicked("second")));

        assert_eq!(rx.recv().await, Some(AnalyticsEvent::clicked("first")));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_after_receiver_dropped() {
        let (queue, rx) = AnalyticsQueue::channel(4);
        drop(rx);

        assert!(queue.is_closed());
        assert!(!queue.submit(AnalyticsEvent::clicked("abc234")));
    }

    #[tokio::test]
    async fn test_capacity_tracks_free_slots() {
        let (queue, _rx) = AnalyticsQueue::channel(3);
        assert_eq!(queue.capacity(), 3);

        queue.submit(AnalyticsEvent::clicked("abc234"));
        assert_eq!(queue.capacity(), 2);
    }
}
