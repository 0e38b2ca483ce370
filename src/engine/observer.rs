// Scroll observer - infers the current slide from viewport visibility
//
// Mirrors the usual intersection-observer contract: a slide is reported when
// its visible ratio crosses the threshold upward. The 50% default means only
// one slide can own the viewport at a time; the midpoint crossing decides.

/// A vertical extent, in rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub start: f64,
    pub len: f64,
}

impl Extent {
    pub fn new(start: f64, len: f64) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> f64 {
        self.start + self.len
    }

    /// Fraction of `self` that lies inside `other` (0.0 to 1.0)
    pub fn visible_ratio(&self, other: &Extent) -> f64 {
        if self.len <= 0.0 {
            return 0.0;
        }
        let overlap = self.end().min(other.end()) - self.start.max(other.start);
        (overlap.max(0.0) / self.len).min(1.0)
    }
}

pub struct ScrollObserver {
    threshold: f64,
    /// Last known "above threshold" status per slide; `None` before the first observation
    above: Vec<Option<bool>>,
}

impl ScrollObserver {
    pub fn new(total_slides: usize, threshold: f64) -> Self {
        Self {
            threshold,
            above: vec![None; total_slides],
        }
    }

    /// Compare every slide against the viewport
    ///
    /// Returns the indices that crossed above the threshold since the last
    /// call, in slide order. The first call reports every slide already above.
    pub fn observe(&mut self, slides: &[Extent], viewport: &Extent) -> Vec<usize> {
        let mut crossed = Vec::new();
        for (index, slide) in slides.iter().enumerate() {
            let Some(previous) = self.above.get_mut(index) else {
                break;
            };
            let now_above = slide.visible_ratio(viewport) > self.threshold;
            if now_above && *previous != Some(true) {
                crossed.push(index);
            }
            *previous = Some(now_above);
        }
        crossed
    }

    /// Forget previous observations (e.g. after a resize changes geometry)
    pub fn reset(&mut self) {
        self.above.iter_mut().for_each(|a| *a = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(count: usize, height: f64) -> Vec<Extent> {
        (0..count)
            .map(|i| Extent::new(i as f64 * height, height))
            .collect()
    }

    #[test]
    fn ratio_of_partial_overlap() {
        let slide = Extent::new(10.0, 10.0);
        assert_eq!(slide.visible_ratio(&Extent::new(0.0, 10.0)), 0.0);
        assert_eq!(slide.visible_ratio(&Extent::new(5.0, 10.0)), 0.5);
        assert_eq!(slide.visible_ratio(&Extent::new(10.0, 10.0)), 1.0);
        assert_eq!(slide.visible_ratio(&Extent::new(0.0, 100.0)), 1.0);
    }

    #[test]
    fn first_observation_reports_visible_slide() {
        let slides = stacked(5, 20.0);
        let mut observer = ScrollObserver::new(5, 0.5);
        assert_eq!(observer.observe(&slides, &Extent::new(0.0, 20.0)), vec![0]);
        // Nothing changed, nothing reported
        assert!(observer.observe(&slides, &Extent::new(0.0, 20.0)).is_empty());
    }

    #[test]
    fn exactly_half_visible_does_not_qualify() {
        let slides = stacked(3, 20.0);
        let mut observer = ScrollObserver::new(3, 0.5);
        observer.observe(&slides, &Extent::new(0.0, 20.0));
        // Slides 0 and 1 are both at exactly 50%: neither crosses
        assert!(observer.observe(&slides, &Extent::new(10.0, 20.0)).is_empty());
        // One more row tips slide 1 over
        assert_eq!(observer.observe(&slides, &Extent::new(11.0, 20.0)), vec![1]);
    }

    #[test]
    fn scrolling_through_reports_each_slide_once() {
        let slides = stacked(4, 10.0);
        let mut observer = ScrollObserver::new(4, 0.5);
        let mut reported = Vec::new();
        let mut offset = 0.0;
        while offset <= 30.0 {
            reported.extend(observer.observe(&slides, &Extent::new(offset, 10.0)));
            offset += 1.0;
        }
        assert_eq!(reported, vec![0, 1, 2, 3]);
    }

    #[test]
    fn reset_reports_again() {
        let slides = stacked(2, 10.0);
        let mut observer = ScrollObserver::new(2, 0.5);
        observer.observe(&slides, &Extent::new(10.0, 10.0));
        observer.reset();
        assert_eq!(observer.observe(&slides, &Extent::new(10.0, 10.0)), vec![1]);
    }
}
