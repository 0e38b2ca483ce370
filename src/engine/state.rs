// Presentation state - the single source of truth for the current slide
//
// Owned exclusively by SlideCoordinator. Everything else reads it through
// the coordinator's accessors.

use std::time::Instant;

/// Transition phase of the presentation
///
/// A request that is accepted moves the state to `Transitioning`; it returns
/// to `Idle` when the scroll animation reports completion or when the
/// cooldown deadline passes, whichever the settle mode allows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning {
        /// Slide the accepted request scrolled to
        target: usize,
        /// Cooldown deadline; the transition always ends here at the latest
        deadline: Instant,
    },
}

/// Logical position of the presentation
#[derive(Debug, Clone)]
pub struct PresentationState {
    current_slide: usize,
    total_slides: usize,
    phase: Phase,
}

impl PresentationState {
    /// Create state for a deck of `total_slides` slides, positioned at slide 0
    ///
    /// `total_slides` must be positive; the deck loader guarantees this.
    pub fn new(total_slides: usize) -> Self {
        debug_assert!(total_slides > 0, "deck must contain at least one slide");
        Self {
            current_slide: 0,
            total_slides: total_slides.max(1),
            phase: Phase::Idle,
        }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    pub fn last_slide(&self) -> usize {
        self.total_slides - 1
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Whether `index` addresses a slide in this deck
    pub fn contains(&self, index: usize) -> bool {
        index < self.total_slides
    }

    pub(super) fn set_current(&mut self, index: usize) {
        debug_assert!(self.contains(index));
        self.current_slide = index;
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_at_first_slide() {
        let state = PresentationState::new(9);
        assert_eq!(state.current_slide(), 0);
        assert_eq!(state.total_slides(), 9);
        assert_eq!(state.last_slide(), 8);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn contains_is_half_open() {
        let state = PresentationState::new(3);
        assert!(state.contains(0));
        assert!(state.contains(2));
        assert!(!state.contains(3));
    }
}
