// SPDX-License-Identifier: MPL-2.0
//! Clock notification channel.
//!
//! A notifier/listener pair scopes the subscription to the controller's
//! lifetime: the listener lives inside the controller, so detaching (dropping)
//! the controller unsubscribes. Later notifications are discarded and the
//! notifier reports it through [`ClockNotifier::notify`] returning `false`.

use super::clock::ClockEvent;
use tokio::sync::mpsc;

/// Creates a connected notifier/listener pair.
#[must_use]
pub fn channel() -> (ClockNotifier, ClockListener) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ClockNotifier { tx }, ClockListener { rx })
}

/// Sending half, held by the media clock.
#[derive(Clone)]
pub struct ClockNotifier {
    tx: mpsc::UnboundedSender<ClockEvent>,
}

impl ClockNotifier {
    /// Publishes a notification.
    ///
    /// Returns `false` when the listening controller has been detached.
    pub fn notify(&self, event: ClockEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    /// Returns true while a controller is still subscribed.
    pub fn is_subscribed(&self) -> bool {
        !self.tx.is_closed()
    }
}

impl std::fmt::Debug for ClockNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockNotifier")
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}

/// Receiving half, owned by the controller.
pub struct ClockListener {
    rx: mpsc::UnboundedReceiver<ClockEvent>,
}

impl ClockListener {
    /// Returns the next pending notification without blocking.
    pub fn try_next(&mut self) -> Option<ClockEvent> {
        self.rx.try_recv().ok()
    }
}

impl std::fmt::Debug for ClockListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockListener").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_arrive_in_order() {
        let (notifier, mut listener) = channel();
        assert!(notifier.notify(ClockEvent::DataReady));
        assert!(notifier.notify(ClockEvent::TimeAdvanced));
        assert!(notifier.notify(ClockEvent::Ended));

        assert_eq!(listener.try_next(), Some(ClockEvent::DataReady));
        assert_eq!(listener.try_next(), Some(ClockEvent::TimeAdvanced));
        assert_eq!(listener.try_next(), Some(ClockEvent::Ended));
        assert_eq!(listener.try_next(), None);
    }

    #[test]
    fn dropping_listener_unsubscribes() {
        let (notifier, listener) = channel();
        assert!(notifier.is_subscribed());

        drop(listener);

        assert!(!notifier.is_subscribed());
        assert!(!notifier.notify(ClockEvent::TimeAdvanced));
    }

    #[test]
    fn cloned_notifiers_share_one_listener() {
        let (notifier, mut listener) = channel();
        let other = notifier.clone();
        notifier.notify(ClockEvent::TimeAdvanced);
        other.notify(ClockEvent::Ended);

        assert_eq!(listener.try_next(), Some(ClockEvent::TimeAdvanced));
        assert_eq!(listener.try_next(), Some(ClockEvent::Ended));
    }
}
