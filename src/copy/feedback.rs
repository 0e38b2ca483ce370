// Copy button feedback
//
// After a successful copy the button shows a "done" label and a marker
// style for a fixed time. Buttons are independent; copying again on the
// same button restarts its timer (last write wins).

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Identifies a copy button (one per slide, keyed by slide index)
pub type ButtonId = usize;

pub struct ButtonFeedback {
    duration: Duration,
    done_label: String,
    /// When each marked button reverts
    marked_until: HashMap<ButtonId, Instant>,
}

impl ButtonFeedback {
    pub fn new(duration: Duration, done_label: impl Into<String>) -> Self {
        Self {
            duration,
            done_label: done_label.into(),
            marked_until: HashMap::new(),
        }
    }

    /// Apply the "done" state to `button`, restarting it if already marked
    pub fn mark_copied(&mut self, button: ButtonId, now: Instant) {
        self.marked_until.insert(button, now + self.duration);
    }

    /// Revert every button whose delay has elapsed; returns the reverted ids
    pub fn tick(&mut self, now: Instant) -> Vec<ButtonId> {
        let mut reverted: Vec<ButtonId> = self
            .marked_until
            .iter()
            .filter(|(_, until)| now >= **until)
            .map(|(id, _)| *id)
            .collect();
        reverted.sort_unstable();
        for id in &reverted {
            self.marked_until.remove(id);
        }
        reverted
    }

    pub fn is_marked(&self, button: ButtonId) -> bool {
        self.marked_until.contains_key(&button)
    }

    /// Label to render: the done label while marked, otherwise `original`
    pub fn label<'a>(&'a self, button: ButtonId, original: &'a str) -> &'a str {
        if self.is_marked(button) {
            &self.done_label
        } else {
            original
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.marked_until.values().min().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_millis(2000);

    #[test]
    fn marks_then_reverts() {
        let mut feedback = ButtonFeedback::new(HOLD, "Copied!");
        let now = Instant::now();
        feedback.mark_copied(3, now);
        assert_eq!(feedback.label(3, "Copy"), "Copied!");
        assert!(feedback.is_marked(3));

        assert!(feedback.tick(now + Duration::from_millis(1999)).is_empty());
        assert_eq!(feedback.tick(now + HOLD), vec![3]);
        assert_eq!(feedback.label(3, "Copy"), "Copy");
        assert!(!feedback.is_marked(3));
    }

    #[test]
    fn second_copy_restarts_timer_and_keeps_original_label() {
        let mut feedback = ButtonFeedback::new(HOLD, "Copied!");
        let start = Instant::now();
        feedback.mark_copied(0, start);
        feedback.mark_copied(0, start + Duration::from_millis(1500));

        // The first timer would have fired here
        assert!(feedback.tick(start + HOLD).is_empty());
        assert_eq!(feedback.label(0, "Copy"), "Copied!");

        assert_eq!(feedback.tick(start + Duration::from_millis(3500)), vec![0]);
        assert_eq!(feedback.label(0, "Copy"), "Copy");
    }

    #[test]
    fn buttons_are_independent() {
        let mut feedback = ButtonFeedback::new(HOLD, "Copied!");
        let start = Instant::now();
        feedback.mark_copied(1, start);
        feedback.mark_copied(2, start + Duration::from_millis(1000));
        assert_eq!(feedback.next_deadline(), Some(start + HOLD));

        assert_eq!(feedback.tick(start + HOLD), vec![1]);
        assert!(feedback.is_marked(2));
    }
}
