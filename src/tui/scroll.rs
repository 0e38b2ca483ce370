// Slide viewport - the scroll-snapped container
//
// Every slide is exactly one viewport tall, stacked vertically. The viewport
// owns the scroll offset (in rows, fractional while animating) and is the
// coordinator's `Viewport`:
// - Requested scrolls animate with ease-in-out and report completion.
// - Wheel scrolling moves freely; after a short idle it snaps (animated) to
//   the nearest slide start. Snaps do not report completion.
// - Resizing keeps the relative position.

use crate::engine::{Extent, Viewport};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    /// Slide a requested scroll is heading to; `None` for snaps
    target: Option<usize>,
}

impl ScrollAnimation {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

/// Cubic ease-in-out
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct SlideViewport {
    total: usize,
    slide_height: u16,
    offset: f64,
    animation: Option<ScrollAnimation>,
    last_wheel: Option<Instant>,
    scroll_duration: Duration,
    snap_idle: Duration,
    wheel_step: u16,
}

impl SlideViewport {
    pub fn new(total: usize, scroll_duration: Duration, snap_idle: Duration, wheel_step: u16) -> Self {
        Self {
            total,
            slide_height: 0,
            offset: 0.0,
            animation: None,
            last_wheel: None,
            scroll_duration,
            snap_idle,
            wheel_step: wheel_step.max(1),
        }
    }

    /// Update the slide height after a layout pass
    ///
    /// Returns true if the geometry changed.
    pub fn set_slide_height(&mut self, height: u16) -> bool {
        if height == self.slide_height {
            return false;
        }
        let old = self.slide_height;
        self.slide_height = height;

        if old == 0 {
            self.offset = 0.0;
            self.animation = None;
        } else {
            let new_height = f64::from(height);
            let scale = new_height / f64::from(old);
            self.offset *= scale;
            if let Some(anim) = &mut self.animation {
                anim.from *= scale;
                anim.to = match anim.target {
                    Some(target) => target as f64 * new_height,
                    None => anim.to * scale,
                };
            }
        }
        self.offset = self.offset.clamp(0.0, self.max_offset());
        true
    }

    /// Scroll by one wheel notch; `down` moves toward later slides
    ///
    /// Cancels any running animation. A cancelled requested scroll never
    /// reports completion; the coordinator's cooldown ends the transition.
    pub fn wheel(&mut self, down: bool, now: Instant) {
        if self.slide_height == 0 {
            return;
        }
        let step = f64::from(self.wheel_step);
        let delta = if down { step } else { -step };
        self.animation = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
        self.last_wheel = Some(now);
    }

    /// Advance animations and snapping
    ///
    /// Returns the target slide when a requested scroll finishes.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        if let Some(anim) = self.animation {
            let t = anim.progress(now);
            self.offset = anim.from + (anim.to - anim.from) * ease_in_out(t);
            if t >= 1.0 {
                self.offset = anim.to;
                self.animation = None;
                return anim.target;
            }
            return None;
        }

        if let Some(last) = self.last_wheel {
            if now.saturating_duration_since(last) >= self.snap_idle {
                self.last_wheel = None;
                self.snap(now);
            }
        }
        None
    }

    fn snap(&mut self, now: Instant) {
        if self.slide_height == 0 {
            return;
        }
        let height = f64::from(self.slide_height);
        let nearest = (self.offset / height).round() * height;
        if (nearest - self.offset).abs() > f64::EPSILON {
            self.animation = Some(ScrollAnimation {
                from: self.offset,
                to: nearest.clamp(0.0, self.max_offset()),
                started: now,
                duration: self.scroll_duration / 2,
                target: None,
            });
        }
    }

    fn top_of(&self, index: usize) -> f64 {
        index as f64 * f64::from(self.slide_height)
    }

    fn max_offset(&self) -> f64 {
        self.top_of(self.total.saturating_sub(1))
    }

    #[cfg(test)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn slide_height(&self) -> u16 {
        self.slide_height
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Earliest instant at which `tick` has work to do
    ///
    /// A running animation needs every frame; a wheel burst only needs the
    /// idle check that triggers the snap.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        if self.is_animating() {
            return Some(now);
        }
        self.last_wheel.map(|at| at + self.snap_idle)
    }

    /// Vertical extent of every slide, in content rows
    pub fn slide_extents(&self) -> Vec<Extent> {
        let height = f64::from(self.slide_height);
        (0..self.total)
            .map(|i| Extent::new(i as f64 * height, height))
            .collect()
    }

    /// The visible window, in content rows
    pub fn visible_extent(&self) -> Extent {
        Extent::new(self.offset, f64::from(self.slide_height))
    }

    /// Row of slide `index`'s top edge relative to the viewport top (may be negative)
    pub fn screen_top(&self, index: usize) -> i64 {
        (self.top_of(index) - self.offset).round() as i64
    }
}

impl Viewport for SlideViewport {
    fn scroll_into_view(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.total || self.slide_height == 0 {
            return false;
        }
        self.last_wheel = None;
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: self.top_of(index),
            started: now,
            duration: self.scroll_duration,
            target: Some(index),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIM: Duration = Duration::from_millis(600);
    const SNAP: Duration = Duration::from_millis(150);

    fn viewport() -> SlideViewport {
        let mut vp = SlideViewport::new(5, ANIM, SNAP, 3);
        vp.set_slide_height(20);
        vp
    }

    #[test]
    fn no_scroll_before_layout() {
        let mut vp = SlideViewport::new(5, ANIM, SNAP, 3);
        assert!(!vp.scroll_into_view(2, Instant::now()));
    }

    #[test]
    fn requested_scroll_animates_and_reports_target() {
        let mut vp = viewport();
        let start = Instant::now();
        assert!(vp.scroll_into_view(3, start));
        assert!(vp.is_animating());

        assert_eq!(vp.tick(start + Duration::from_millis(300)), None);
        let midway = vp.offset();
        assert!(midway > 0.0 && midway < 60.0);

        assert_eq!(vp.tick(start + ANIM), Some(3));
        assert_eq!(vp.offset(), 60.0);
        assert!(!vp.is_animating());
    }

    #[test]
    fn out_of_range_target_is_missing() {
        let mut vp = viewport();
        assert!(!vp.scroll_into_view(5, Instant::now()));
    }

    #[test]
    fn wheel_then_idle_snaps_to_nearest_slide() {
        let mut vp = viewport();
        let start = Instant::now();
        for _ in 0..4 {
            vp.wheel(true, start);
        }
        assert_eq!(vp.offset(), 12.0);

        // Still scrolling: no snap yet
        assert_eq!(vp.next_deadline(start), Some(start + SNAP));
        assert_eq!(vp.tick(start + Duration::from_millis(100)), None);
        assert!(!vp.is_animating());

        // Idle: snap to slide 1 (row 20), silently
        let idle = start + SNAP;
        assert_eq!(vp.tick(idle), None);
        assert!(vp.is_animating());
        assert_eq!(vp.next_deadline(idle), Some(idle));
        assert_eq!(vp.tick(idle + ANIM), None);
        assert_eq!(vp.offset(), 20.0);
        assert_eq!(vp.next_deadline(idle + ANIM), None);
    }

    #[test]
    fn wheel_cancels_requested_scroll() {
        let mut vp = viewport();
        let start = Instant::now();
        vp.scroll_into_view(4, start);
        vp.tick(start + Duration::from_millis(100));
        vp.wheel(false, start + Duration::from_millis(120));
        assert!(!vp.is_animating());
        // Completion for slide 4 never arrives
        assert_eq!(vp.tick(start + ANIM * 2), None);
    }

    #[test]
    fn wheel_is_clamped() {
        let mut vp = viewport();
        let now = Instant::now();
        vp.wheel(false, now);
        assert_eq!(vp.offset(), 0.0);
        for _ in 0..100 {
            vp.wheel(true, now);
        }
        assert_eq!(vp.offset(), 80.0);
    }

    #[test]
    fn resize_keeps_relative_position() {
        let mut vp = viewport();
        let start = Instant::now();
        vp.scroll_into_view(2, start);
        vp.tick(start + ANIM);
        assert_eq!(vp.offset(), 40.0);

        assert!(vp.set_slide_height(30));
        assert_eq!(vp.offset(), 60.0);
        assert_eq!(vp.screen_top(2), 0);
        assert_eq!(vp.screen_top(3), 30);
        assert!(!vp.set_slide_height(30));
    }

    #[test]
    fn resize_during_requested_scroll_retargets() {
        let mut vp = viewport();
        let start = Instant::now();
        assert!(vp.scroll_into_view(3, start));
        assert_eq!(vp.tick(start + Duration::from_millis(300)), None);

        assert!(vp.set_slide_height(30));
        assert!(vp.is_animating());
        assert_eq!(vp.tick(start + ANIM), Some(3));
        assert_eq!(vp.offset(), 90.0);
        assert_eq!(vp.screen_top(3), 0);
    }

    #[test]
    fn extents_match_geometry() {
        let vp = viewport();
        let extents = vp.slide_extents();
        assert_eq!(extents.len(), 5);
        assert_eq!(extents[2], Extent::new(40.0, 20.0));
        assert_eq!(vp.visible_extent(), Extent::new(0.0, 20.0));
    }
}
