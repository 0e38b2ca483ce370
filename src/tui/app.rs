// TUI application state
//
// Owns the deck, the slide coordinator (which owns the viewport), the scroll
// observer and the copy-feedback state. Input handlers and the tick take an
// explicit `now` so every timing path is testable without a terminal.

use super::scroll::SlideViewport;
use super::theme::{Theme, ThemeKind};
use crate::config::{Config, LabelsConfig};
use crate::copy::{
    ButtonFeedback, ButtonId, CopyCompleted, CopyPath, CopyRequest, NotificationPresenter,
};
use crate::deck::Deck;
use crate::engine::{
    classify_key, KeyDisposition, Location, NavTrigger, ScrollObserver, SlideCoordinator,
    StartupNavigation,
};
use crate::logging::LogBuffer;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

/// Clickable element on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Dot(usize),
    Prev,
    Next,
    /// Copy button of the given slide
    Copy(ButtonId),
}

/// Screen regions of clickable elements, rebuilt on every draw
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the cursor (last drawn wins)
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }
}

/// Main application state for the TUI
pub struct App {
    pub deck: Deck,
    pub coordinator: SlideCoordinator<SlideViewport>,
    observer: ScrollObserver,

    /// Copy-button "done" state per slide
    pub feedback: ButtonFeedback,
    pub notifications: NotificationPresenter,

    /// Deferred navigation to the startup fragment's slide
    startup: Option<StartupNavigation>,
    /// Viewport moved outside an animation; the observer has not seen it yet
    observe_pending: bool,

    pub hit_map: HitMap,
    pub log_buffer: LogBuffer,
    pub labels: LabelsConfig,
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Build the app; `startup_slide` is the slide named by the startup fragment
    pub fn new(
        deck: Deck,
        location: Location,
        startup_slide: Option<usize>,
        config: &Config,
        log_buffer: LogBuffer,
        now: Instant,
    ) -> Self {
        let timing = &config.timing;
        let total = deck.len();
        let viewport = SlideViewport::new(
            total,
            timing.scroll_animation(),
            timing.snap_idle(),
            timing.wheel_step_rows,
        );
        let coordinator = SlideCoordinator::new(
            total,
            viewport,
            location,
            timing.transition_cooldown(),
            config.settle,
        );

        Self {
            coordinator,
            observer: ScrollObserver::new(total, config.observer.threshold),
            feedback: ButtonFeedback::new(timing.copy_feedback(), config.labels.copied.clone()),
            notifications: NotificationPresenter::new(timing.notification()),
            startup: startup_slide.map(|index| StartupNavigation::new(index, now, timing.startup_delay())),
            observe_pending: true,
            hit_map: HitMap::default(),
            log_buffer,
            labels: config.labels.clone(),
            theme: ThemeKind::from_name(&config.theme).theme(),
            should_quit: false,
            deck,
        }
    }

    pub fn current_slide(&self) -> usize {
        self.coordinator.current_slide()
    }

    pub fn viewport(&self) -> &SlideViewport {
        self.coordinator.viewport()
    }

    /// Apply the viewport height measured by the last layout pass
    pub fn set_viewport_height(&mut self, height: u16) {
        if self.coordinator.viewport_mut().set_slide_height(height) {
            self.observer.reset();
            self.observe_pending = true;
        }
    }

    /// Resolve a trigger and hand it to the coordinator
    pub fn navigate(&mut self, trigger: NavTrigger, now: Instant) {
        match trigger.resolve(self.coordinator.state()) {
            Some(index) => {
                let outcome = self.coordinator.request_slide(index, now);
                if outcome.is_accepted() {
                    tracing::debug!(?trigger, index, "Navigating");
                } else {
                    tracing::trace!(?trigger, index, ?outcome, "Navigation dropped");
                }
            }
            None => tracing::trace!(?trigger, "Navigation trigger has no target"),
        }
    }

    /// Handle a key press; returns a copy request when `y` is pressed
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<CopyRequest> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        match classify_key(key.code, self.coordinator.is_transitioning()) {
            KeyDisposition::Navigate(trigger) => {
                self.navigate(trigger, now);
                None
            }
            KeyDisposition::Suppressed => None,
            KeyDisposition::Ignored => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                    None
                }
                KeyCode::Char('y') => self.copy_request(self.current_slide()),
                _ => None,
            },
        }
    }

    /// Handle mouse input; returns a copy request when a copy button is clicked
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Option<CopyRequest> {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.coordinator.viewport_mut().wheel(true, now);
                self.observe_pending = true;
                None
            }
            MouseEventKind::ScrollUp => {
                self.coordinator.viewport_mut().wheel(false, now);
                self.observe_pending = true;
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let target = self.hit_map.hit(mouse.column, mouse.row)?;
                self.click(target, now)
            }
            _ => None,
        }
    }

    fn click(&mut self, target: HitTarget, now: Instant) -> Option<CopyRequest> {
        let prev_disabled = self.coordinator.controls().prev_disabled();
        let next_disabled = self.coordinator.controls().next_disabled();
        match target {
            HitTarget::Dot(index) => self.navigate(NavTrigger::Dot(index), now),
            // Disabled buttons take no clicks
            HitTarget::Prev if prev_disabled => {}
            HitTarget::Next if next_disabled => {}
            HitTarget::Prev => self.navigate(NavTrigger::Prev, now),
            HitTarget::Next => self.navigate(NavTrigger::Next, now),
            HitTarget::Copy(button) => return self.copy_request(button),
        }
        None
    }

    /// Build the copy request for a slide's copy button
    pub fn copy_request(&self, button: ButtonId) -> Option<CopyRequest> {
        let Some(text) = self.deck.get(button).and_then(|s| s.copy_text.clone()) else {
            tracing::debug!(slide = button, "Slide has no copy block");
            return None;
        };
        Some(CopyRequest {
            source_button: button,
            text,
        })
    }

    /// A copy finished; every outcome counts as success for the user
    pub fn copy_completed(&mut self, done: CopyCompleted, now: Instant) {
        match done.path {
            CopyPath::Primary => tracing::info!(slide = done.source_button, "Copied slide text"),
            CopyPath::Fallback { copied } => {
                tracing::info!(slide = done.source_button, copied, "Copied slide text via fallback")
            }
        }
        self.feedback.mark_copied(done.source_button, now);
        self.notifications.show(self.labels.notification.clone(), now);
    }

    /// Advance every timer and reconcile the viewport with state
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.startup {
            if pending.is_due(now) {
                self.startup = None;
                tracing::debug!(index = pending.index, "Navigating to startup fragment");
                self.coordinator.request_slide(pending.index, now);
            }
        }

        if let Some(target) = self.coordinator.viewport_mut().tick(now) {
            self.coordinator.animation_complete(target);
        }
        self.coordinator.tick(now);

        self.observe_pending = false;
        let viewport = self.coordinator.viewport();
        if viewport.slide_height() > 0 {
            let crossed = self
                .observer
                .observe(&viewport.slide_extents(), &viewport.visible_extent());
            for index in crossed {
                self.coordinator.observed_slide(index);
            }
        }

        self.feedback.tick(now);
        self.notifications.tick(now);
    }

    /// Earliest instant at which `tick` has work to do
    ///
    /// `None` once everything has settled; the event loop then only wakes
    /// for input.
    pub fn next_wakeup(&self, now: Instant) -> Option<Instant> {
        if self.observe_pending {
            return Some(now);
        }
        [
            self.startup.map(|pending| pending.due),
            self.viewport().next_deadline(now),
            self.coordinator.next_deadline(),
            self.feedback.next_deadline(),
            self.notifications.next_deadline(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Location to print on exit
    pub fn href(&self) -> String {
        self.coordinator.location().href()
    }
}
