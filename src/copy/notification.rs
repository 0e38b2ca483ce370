//! Transient notifications
//!
//! Every notification is its own element with its own timer chain:
//! appended hidden, shown after a short enter delay so the fade-in can run,
//! hidden at the hold deadline, then removed once the exit fade completes.
//! There is no dedup or stacking policy; rapid notifications simply overlap.

use std::time::{Duration, Instant};

/// Timing of one notification's lifecycle, measured from creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    /// Delay before the "show" state engages
    pub enter: Duration,
    /// When the "show" state is removed
    pub hide: Duration,
    /// Exit transition time between hiding and removal
    pub exit: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(100),
            hide: Duration::from_millis(2000),
            exit: Duration::from_millis(300),
        }
    }
}

/// Visible state of a notification at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Appended but not yet shown
    Entering,
    Shown,
    /// Show state removed; exit transition running
    Leaving,
    Removed,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    created_at: Instant,
}

impl Notification {
    pub fn phase(&self, now: Instant, timing: &NotificationTiming) -> NotificationPhase {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < timing.enter {
            NotificationPhase::Entering
        } else if elapsed < timing.hide {
            NotificationPhase::Shown
        } else if elapsed < timing.hide + timing.exit {
            NotificationPhase::Leaving
        } else {
            NotificationPhase::Removed
        }
    }
}

pub struct NotificationPresenter {
    timing: NotificationTiming,
    items: Vec<Notification>,
}

impl NotificationPresenter {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            timing,
            items: Vec::new(),
        }
    }

    /// Append a new notification
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!(%message, "Notification");
        self.items.push(Notification {
            message,
            created_at: now,
        });
    }

    /// Drop notifications whose exit transition has finished
    pub fn tick(&mut self, now: Instant) {
        let timing = self.timing;
        self.items
            .retain(|n| n.phase(now, &timing) != NotificationPhase::Removed);
    }

    /// Notifications still attached, oldest first, with their phase
    pub fn active(&self, now: Instant) -> impl Iterator<Item = (&Notification, NotificationPhase)> {
        let timing = self.timing;
        self.items
            .iter()
            .map(move |n| (n, n.phase(now, &timing)))
            .filter(|(_, phase)| *phase != NotificationPhase::Removed)
    }

    /// Earliest phase change among attached notifications
    ///
    /// A notification already past its exit is due immediately so the next
    /// `tick` detaches it.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let timing = self.timing;
        self.items
            .iter()
            .map(|n| {
                [timing.enter, timing.hide, timing.hide + timing.exit]
                    .into_iter()
                    .map(|offset| n.created_at + offset)
                    .find(|at| *at > now)
                    .unwrap_or(now)
            })
            .min()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn lifecycle_follows_timing() {
        let mut presenter = NotificationPresenter::new(NotificationTiming::default());
        let start = Instant::now();
        presenter.show("Copied to clipboard!", start);

        let phase = |p: &NotificationPresenter, ms| p.active(at(start, ms)).next().map(|(_, ph)| ph);
        assert_eq!(phase(&presenter, 0), Some(NotificationPhase::Entering));
        assert_eq!(phase(&presenter, 100), Some(NotificationPhase::Shown));
        assert_eq!(phase(&presenter, 1999), Some(NotificationPhase::Shown));
        assert_eq!(phase(&presenter, 2000), Some(NotificationPhase::Leaving));
        assert_eq!(phase(&presenter, 2299), Some(NotificationPhase::Leaving));
        assert_eq!(phase(&presenter, 2300), None);

        presenter.tick(at(start, 2299));
        assert_eq!(presenter.len(), 1);
        presenter.tick(at(start, 2300));
        assert!(presenter.is_empty());
    }

    #[test]
    fn rapid_notifications_are_independent() {
        let mut presenter = NotificationPresenter::new(NotificationTiming::default());
        let start = Instant::now();
        presenter.show("one", start);
        presenter.show("two", at(start, 500));
        assert_eq!(presenter.len(), 2);

        presenter.tick(at(start, 2300));
        let remaining: Vec<_> = presenter
            .active(at(start, 2300))
            .map(|(n, _)| n.message.clone())
            .collect();
        assert_eq!(remaining, vec!["two".to_string()]);
    }

    #[test]
    fn next_deadline_tracks_phase_changes() {
        let mut presenter = NotificationPresenter::new(NotificationTiming::default());
        let start = Instant::now();
        assert_eq!(presenter.next_deadline(start), None);

        presenter.show("one", start);
        presenter.show("two", at(start, 50));
        assert_eq!(presenter.next_deadline(start), Some(at(start, 100)));
        assert_eq!(presenter.next_deadline(at(start, 120)), Some(at(start, 150)));
        assert_eq!(presenter.next_deadline(at(start, 2100)), Some(at(start, 2300)));

        // Past its exit but not yet ticked away
        assert_eq!(presenter.next_deadline(at(start, 2300)), Some(at(start, 2300)));
        presenter.tick(at(start, 2400));
        assert_eq!(presenter.next_deadline(at(start, 2400)), None);
    }
}
