// Navigation input adapter
//
// Normalizes the trigger surfaces (dot clicks, prev/next clicks, keyboard,
// startup fragment) into plain slide indices for SlideCoordinator.

use super::state::PresentationState;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// A navigation trigger before it is resolved against the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTrigger {
    /// Dot indicator at this position
    Dot(usize),
    Prev,
    Next,
    First,
    Last,
}

impl NavTrigger {
    /// Resolve the trigger to a target index
    ///
    /// `Prev` on the first slide has no index (it would be -1) and resolves
    /// to `None`. Indices past the end are returned as-is; the coordinator
    /// rejects them.
    pub fn resolve(self, state: &PresentationState) -> Option<usize> {
        let current = state.current_slide();
        match self {
            NavTrigger::Dot(index) => Some(index),
            NavTrigger::Prev => current.checked_sub(1),
            NavTrigger::Next => Some(current + 1),
            NavTrigger::First => Some(0),
            NavTrigger::Last => Some(state.last_slide()),
        }
    }
}

/// What the host should do with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Not a navigation key; the host may handle it
    Ignored,
    /// Navigation key swallowed while a transition is in flight
    Suppressed,
    /// Navigation key consumed and mapped to a trigger
    Navigate(NavTrigger),
}

/// Map a key to its navigation trigger, if any
pub fn key_trigger(code: KeyCode) -> Option<NavTrigger> {
    match code {
        KeyCode::Up | KeyCode::PageUp => Some(NavTrigger::Prev),
        KeyCode::Down | KeyCode::PageDown | KeyCode::Char(' ') => Some(NavTrigger::Next),
        KeyCode::Home => Some(NavTrigger::First),
        KeyCode::End => Some(NavTrigger::Last),
        _ => None,
    }
}

/// Classify a key press against the transition state
pub fn classify_key(code: KeyCode, transitioning: bool) -> KeyDisposition {
    match key_trigger(code) {
        None => KeyDisposition::Ignored,
        Some(_) if transitioning => KeyDisposition::Suppressed,
        Some(trigger) => KeyDisposition::Navigate(trigger),
    }
}

/// Deferred navigation to the slide named by the startup fragment
///
/// Gives the first layout pass time to size the viewport before the first
/// navigation-triggered scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupNavigation {
    pub index: usize,
    pub due: Instant,
}

impl StartupNavigation {
    pub fn new(index: usize, now: Instant, delay: Duration) -> Self {
        Self {
            index,
            due: now + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_mapping() {
        assert_eq!(key_trigger(KeyCode::Up), Some(NavTrigger::Prev));
        assert_eq!(key_trigger(KeyCode::PageUp), Some(NavTrigger::Prev));
        assert_eq!(key_trigger(KeyCode::Down), Some(NavTrigger::Next));
        assert_eq!(key_trigger(KeyCode::PageDown), Some(NavTrigger::Next));
        assert_eq!(key_trigger(KeyCode::Char(' ')), Some(NavTrigger::Next));
        assert_eq!(key_trigger(KeyCode::Home), Some(NavTrigger::First));
        assert_eq!(key_trigger(KeyCode::End), Some(NavTrigger::Last));
        assert_eq!(key_trigger(KeyCode::Char('q')), None);
    }

    #[test]
    fn home_and_end_resolve_to_deck_edges() {
        let state = PresentationState::new(9);
        assert_eq!(NavTrigger::Last.resolve(&state), Some(8));
        assert_eq!(NavTrigger::First.resolve(&state), Some(0));
    }

    #[test]
    fn prev_on_first_slide_has_no_target() {
        let state = PresentationState::new(9);
        assert_eq!(NavTrigger::Prev.resolve(&state), None);
        assert_eq!(NavTrigger::Next.resolve(&state), Some(1));
        assert_eq!(NavTrigger::Dot(6).resolve(&state), Some(6));
    }

    #[test]
    fn navigation_keys_suppressed_while_transitioning() {
        assert_eq!(
            classify_key(KeyCode::Down, true),
            KeyDisposition::Suppressed
        );
        assert_eq!(
            classify_key(KeyCode::Down, false),
            KeyDisposition::Navigate(NavTrigger::Next)
        );
        // Host keys are never swallowed
        assert_eq!(classify_key(KeyCode::Char('q'), true), KeyDisposition::Ignored);
    }

    #[test]
    fn startup_navigation_waits_for_delay() {
        let now = Instant::now();
        let pending = StartupNavigation::new(4, now, Duration::from_millis(100));
        assert!(!pending.is_due(now + Duration::from_millis(99)));
        assert!(pending.is_due(now + Duration::from_millis(100)));
    }
}
