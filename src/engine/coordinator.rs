// Slide state coordinator - the hub of the synchronization engine
//
// The coordinator is the only writer of the current slide, the only
// component that triggers a scroll, and the only one that touches the
// derived controls and the location fragment.
//
// Two entry points with deliberately different powers:
// - request_slide(): input-driven. Owns the scroll and the transition lock.
// - observed_slide(): observation-driven. Mirrors what the viewport already
//   shows into state, controls and fragment. Never scrolls, never locks.

use super::controls::NavigationControlSet;
use super::fragment::{format_fragment, Location};
use super::state::{Phase, PresentationState};
use std::time::{Duration, Instant};

/// The scrolling surface the coordinator drives
pub trait Viewport {
    /// Start a smooth scroll that brings slide `index` to the top edge
    ///
    /// Returns false when there is no element to scroll to (e.g. layout not
    /// ready yet); the coordinator then skips the scroll but still updates
    /// its state.
    fn scroll_into_view(&mut self, index: usize, now: Instant) -> bool;
}

/// How an accepted transition ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettleMode {
    /// End on the viewport's animation-complete signal; the cooldown is a backstop
    #[default]
    Animation,
    /// End only when the fixed cooldown elapses
    Cooldown,
}

impl SettleMode {
    /// Parse settle mode string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cooldown" => Self::Cooldown,
            _ => Self::Animation,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Animation => "animation",
            Self::Cooldown => "cooldown",
        }
    }
}

/// Why a slide request was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfRange,
    AlreadyCurrent,
    Transitioning,
}

/// Result of a slide request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Accepted,
    Rejected(Rejection),
}

impl RequestOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

pub struct SlideCoordinator<V> {
    state: PresentationState,
    controls: NavigationControlSet,
    location: Location,
    viewport: V,
    cooldown: Duration,
    settle: SettleMode,
}

impl<V: Viewport> SlideCoordinator<V> {
    /// Build a coordinator for `total_slides` slides
    ///
    /// The location fragment is left untouched until the first change, so a
    /// startup fragment survives until the delayed startup request runs.
    pub fn new(
        total_slides: usize,
        viewport: V,
        location: Location,
        cooldown: Duration,
        settle: SettleMode,
    ) -> Self {
        let state = PresentationState::new(total_slides);
        let controls = NavigationControlSet::new(state.total_slides(), state.total_slides());
        Self {
            state,
            controls,
            location,
            viewport,
            cooldown,
            settle,
        }
    }

    /// Input-driven navigation request
    ///
    /// Accepted requests lock further requests until the transition ends.
    /// Rejected requests change nothing.
    pub fn request_slide(&mut self, index: usize, now: Instant) -> RequestOutcome {
        let rejection = if !self.state.contains(index) {
            Some(Rejection::OutOfRange)
        } else if self.state.is_transitioning() {
            Some(Rejection::Transitioning)
        } else if index == self.state.current_slide() {
            Some(Rejection::AlreadyCurrent)
        } else {
            None
        };

        if let Some(reason) = rejection {
            tracing::trace!(index, ?reason, "Slide request dropped");
            return RequestOutcome::Rejected(reason);
        }

        self.state.set_phase(Phase::Transitioning {
            target: index,
            deadline: now + self.cooldown,
        });
        self.state.set_current(index);

        if !self.viewport.scroll_into_view(index, now) {
            tracing::debug!(index, "No scroll target for slide, skipping scroll");
        }

        self.sync_derived();
        tracing::debug!(index, "Slide request accepted");
        RequestOutcome::Accepted
    }

    /// Observation-driven reconciliation
    ///
    /// Returns true if the current slide changed.
    pub fn observed_slide(&mut self, index: usize) -> bool {
        if !self.state.contains(index) || index == self.state.current_slide() {
            return false;
        }

        self.state.set_current(index);
        self.sync_derived();
        tracing::trace!(index, "Observed slide became current");
        true
    }

    /// Animation-complete signal from the viewport
    ///
    /// Ends the transition in `Animation` settle mode when `target` matches
    /// the in-flight transition. Stale or unrelated completions are ignored.
    pub fn animation_complete(&mut self, target: usize) {
        if self.settle != SettleMode::Animation {
            return;
        }
        if let Phase::Transitioning { target: active, .. } = self.state.phase() {
            if active == target {
                self.state.set_phase(Phase::Idle);
                tracing::trace!(target, "Transition settled on animation complete");
            }
        }
    }

    /// Advance time; ends the transition once its cooldown deadline passes
    ///
    /// Returns true if a transition ended on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state.phase() {
            Phase::Transitioning { deadline, target } if now >= deadline => {
                self.state.set_phase(Phase::Idle);
                tracing::trace!(target, "Transition settled on cooldown");
                true
            }
            _ => false,
        }
    }

    /// Earliest instant at which `tick` can change anything
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state.phase() {
            Phase::Transitioning { deadline, .. } => Some(deadline),
            Phase::Idle => None,
        }
    }

    fn sync_derived(&mut self) {
        let current = self.state.current_slide();
        self.controls.refresh(current);
        self.location.replace_fragment(format_fragment(current));
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn current_slide(&self) -> usize {
        self.state.current_slide()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn controls(&self) -> &NavigationControlSet {
        &self.controls
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable viewport access for passive scrolling (wheel, resize, animation ticks)
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Viewport that records scroll calls; `missing` simulates absent slide elements
    #[derive(Default)]
    struct RecordingViewport {
        scrolls: Vec<usize>,
        missing: bool,
    }

    impl Viewport for RecordingViewport {
        fn scroll_into_view(&mut self, index: usize, _now: Instant) -> bool {
            if self.missing {
                return false;
            }
            self.scrolls.push(index);
            true
        }
    }

    const COOLDOWN: Duration = Duration::from_millis(1000);

    fn coordinator(settle: SettleMode) -> SlideCoordinator<RecordingViewport> {
        SlideCoordinator::new(
            9,
            RecordingViewport::default(),
            Location::new("deck.md", None),
            COOLDOWN,
            settle,
        )
    }

    #[test]
    fn request_updates_state_controls_and_fragment() {
        for index in 1..9 {
            let mut c = coordinator(SettleMode::Cooldown);
            let now = Instant::now();
            assert!(c.request_slide(index, now).is_accepted());
            assert_eq!(c.current_slide(), index);
            assert_eq!(c.controls().active_dot(), Some(index));
            assert_eq!(
                c.controls().dots().iter().filter(|d| d.active).count(),
                1
            );
            assert_eq!(c.location().fragment(), Some(format_fragment(index).as_str()));
            assert_eq!(c.viewport().scrolls, vec![index]);
        }
    }

    #[test]
    fn rejects_current_out_of_range_and_in_flight() {
        let mut c = coordinator(SettleMode::Cooldown);
        let now = Instant::now();

        assert_eq!(
            c.request_slide(0, now),
            RequestOutcome::Rejected(Rejection::AlreadyCurrent)
        );
        assert_eq!(
            c.request_slide(9, now),
            RequestOutcome::Rejected(Rejection::OutOfRange)
        );
        assert_eq!(c.current_slide(), 0);
        assert!(c.viewport().scrolls.is_empty());
        assert_eq!(c.location().fragment(), None);

        assert!(c.request_slide(3, now).is_accepted());
        assert_eq!(
            c.request_slide(5, now + Duration::from_millis(10)),
            RequestOutcome::Rejected(Rejection::Transitioning)
        );
        assert_eq!(c.current_slide(), 3);
    }

    #[test]
    fn cooldown_window_drops_requests_then_releases() {
        let mut c = coordinator(SettleMode::Cooldown);
        let start = Instant::now();
        assert!(c.request_slide(2, start).is_accepted());
        assert!(c.is_transitioning());

        // Animation completion does not end the lock in cooldown mode
        c.animation_complete(2);
        assert!(c.is_transitioning());

        let inside = start + Duration::from_millis(999);
        assert!(!c.tick(inside));
        assert!(!c.request_slide(4, inside).is_accepted());
        assert_eq!(c.current_slide(), 2);

        let after = start + COOLDOWN;
        assert!(c.tick(after));
        assert!(!c.is_transitioning());
        assert!(c.request_slide(4, after).is_accepted());
        assert_eq!(c.current_slide(), 4);
    }

    #[test]
    fn animation_complete_ends_transition_early() {
        let mut c = coordinator(SettleMode::Animation);
        let start = Instant::now();
        assert!(c.request_slide(2, start).is_accepted());

        // Completion for some other target is stale
        c.animation_complete(7);
        assert!(c.is_transitioning());

        c.animation_complete(2);
        assert!(!c.is_transitioning());
        assert!(c
            .request_slide(3, start + Duration::from_millis(300))
            .is_accepted());
    }

    #[test]
    fn cooldown_is_backstop_in_animation_mode() {
        let mut c = coordinator(SettleMode::Animation);
        let start = Instant::now();
        c.request_slide(1, start);
        assert_eq!(c.next_deadline(), Some(start + COOLDOWN));
        assert!(c.tick(start + COOLDOWN));
        assert!(!c.is_transitioning());
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn observation_never_scrolls_or_locks() {
        let mut c = coordinator(SettleMode::Cooldown);
        assert!(c.observed_slide(6));
        assert_eq!(c.current_slide(), 6);
        assert!(!c.is_transitioning());
        assert!(c.viewport().scrolls.is_empty());
        assert_eq!(c.controls().active_dot(), Some(6));
        assert_eq!(c.location().fragment(), Some("#slide-7"));

        // Same index and out-of-range observations are no-ops
        assert!(!c.observed_slide(6));
        assert!(!c.observed_slide(42));
        assert_eq!(c.current_slide(), 6);
    }

    #[test]
    fn observation_during_transition_keeps_lock() {
        let mut c = coordinator(SettleMode::Cooldown);
        let now = Instant::now();
        c.request_slide(4, now);
        assert!(c.observed_slide(2));
        assert_eq!(c.current_slide(), 2);
        assert!(c.is_transitioning());
    }

    #[test]
    fn missing_scroll_target_still_updates_state() {
        let mut c = SlideCoordinator::new(
            9,
            RecordingViewport {
                missing: true,
                ..Default::default()
            },
            Location::new("deck.md", None),
            COOLDOWN,
            SettleMode::Cooldown,
        );
        assert!(c.request_slide(5, Instant::now()).is_accepted());
        assert_eq!(c.current_slide(), 5);
        assert_eq!(c.controls().active_dot(), Some(5));
        assert_eq!(c.location().fragment(), Some("#slide-6"));
    }

    #[test]
    fn prev_next_disabled_follow_current() {
        let mut c = coordinator(SettleMode::Cooldown);
        assert!(c.controls().prev_disabled());
        assert!(!c.controls().next_disabled());

        c.observed_slide(8);
        assert!(!c.controls().prev_disabled());
        assert!(c.controls().next_disabled());
    }

    #[test]
    fn fragment_replaced_not_pushed() {
        let mut c = coordinator(SettleMode::Cooldown);
        c.observed_slide(1);
        c.observed_slide(2);
        c.observed_slide(3);
        assert_eq!(c.location().href(), "deck.md#slide-4");
    }

    #[test]
    fn settle_mode_parsing() {
        assert_eq!(SettleMode::from_str("cooldown"), SettleMode::Cooldown);
        assert_eq!(SettleMode::from_str("Animation"), SettleMode::Animation);
        assert_eq!(SettleMode::from_str("bogus"), SettleMode::Animation);
    }
}
