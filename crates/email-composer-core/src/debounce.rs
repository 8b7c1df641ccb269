//! Debouncing of rapidly changing values.
//!
//! Every new value issues a fresh [`Ticket`] and invalidates all earlier ones.
//! The caller sleeps for the delay (see [`Debouncer::elapsed`]) and then hands
//! the ticket back to [`Debouncer::settle`]; only the newest ticket yields the
//! value, so the value propagates once input has been quiet for the full delay.

use std::future::Future;
use std::time::Duration;

/// Identifies one scheduled propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Holds the latest value until it has been stable for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    latest: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: 0,
            pending: None,
        }
    }

    /// Records a new value and restarts the quiet period.
    pub fn push(&mut self, value: T) -> Ticket {
        self.latest += 1;
        self.pending = Some(value);
        Ticket(self.latest)
    }

    /// Releases the pending value if `ticket` is still the newest one.
    ///
    /// Returns `None` for superseded tickets, and for a ticket that already
    /// settled or was cancelled.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.latest {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending value; outstanding tickets settle to `None`.
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = None;
    }

    /// Sleeps for the quiet period and hands `ticket` back.
    ///
    /// The deadline is fixed when this is called, not when the future is first
    /// polled. The future borrows nothing from the debouncer.
    pub fn elapsed(&self, ticket: Ticket) -> impl Future<Output = Ticket> + Send + use<T> {
        let deadline = tokio::time::Instant::now() + self.delay;
        async move {
            tokio::time::sleep_until(deadline).await;
            ticket
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio_test::{assert_pending, assert_ready_eq, task};

    use super::*;

    #[test]
    fn test_latest_ticket_settles() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let ticket = debouncer.push("a");
        assert_eq!(debouncer.settle(ticket), Some("a"));
    }

    #[test]
    fn test_superseded_ticket_yields_nothing() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let first = debouncer.push("a");
        let second = debouncer.push("an");
        assert_eq!(debouncer.settle(first), None);
        assert_eq!(debouncer.settle(second), Some("an"));
    }

    #[test]
    fn test_settles_only_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let ticket = debouncer.push(1);
        assert_eq!(debouncer.settle(ticket), Some(1));
        assert_eq!(debouncer.settle(ticket), None);
    }

    #[test]
    fn test_cancel_invalidates_outstanding_ticket() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let ticket = debouncer.push(1);
        debouncer.cancel();
        assert_eq!(debouncer.settle(ticket), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_waits_for_full_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let ticket = debouncer.push("ann");

        let mut sleep = task::spawn(debouncer.elapsed(ticket));
        assert_pending!(sleep.poll());

        tokio::time::advance(Duration::from_millis(299)).await;
        assert_pending!(sleep.poll());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_ready_eq!(sleep.poll(), ticket);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_propagates_last_value_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        let mut sleeps = Vec::new();
        for term in ["a", "an", "ann"] {
            let ticket = debouncer.push(term);
            sleeps.push(debouncer.elapsed(ticket));
            tokio::time::advance(Duration::from_millis(100)).await;
        }

        let mut settled = Vec::new();
        for sleep in sleeps {
            let ticket = sleep.await;
            if let Some(term) = debouncer.settle(ticket) {
                settled.push(term);
            }
        }
        assert_eq!(settled, vec!["ann"]);
    }
}
