// Navigation control set - dots and prev/next buttons
//
// Display-only state derived from the current slide. Recomputed by the
// coordinator on every change; never read back as a source of truth.

/// One dot indicator (dot i <-> slide i)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dot {
    pub active: bool,
}

/// One prev or next button instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavButton {
    pub disabled: bool,
}

/// Derived navigation UI for the whole deck
///
/// Every slide carries its own prev/next pair, so there are as many button
/// instances as slides. All instances of a kind always agree.
#[derive(Debug, Clone)]
pub struct NavigationControlSet {
    dots: Vec<Dot>,
    prev: Vec<NavButton>,
    next: Vec<NavButton>,
}

impl NavigationControlSet {
    /// Create controls for `total` slides with `button_instances` prev/next pairs
    pub fn new(total: usize, button_instances: usize) -> Self {
        let mut controls = Self {
            dots: vec![Dot::default(); total],
            prev: vec![NavButton::default(); button_instances],
            next: vec![NavButton::default(); button_instances],
        };
        controls.refresh(0);
        controls
    }

    /// Recompute every control from the current slide
    pub fn refresh(&mut self, current: usize) {
        for (index, dot) in self.dots.iter_mut().enumerate() {
            dot.active = index == current;
        }

        let at_first = current == 0;
        let at_last = current + 1 >= self.dots.len();
        for button in &mut self.prev {
            button.disabled = at_first;
        }
        for button in &mut self.next {
            button.disabled = at_last;
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Index of the active dot (exactly one after any refresh)
    #[cfg(test)]
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().position(|d| d.active)
    }

    /// Disabled state shared by every prev instance
    pub fn prev_disabled(&self) -> bool {
        self.prev.first().map(|b| b.disabled).unwrap_or(true)
    }

    /// Disabled state shared by every next instance
    pub fn next_disabled(&self) -> bool {
        self.next.first().map(|b| b.disabled).unwrap_or(true)
    }

    pub fn prev_buttons(&self) -> &[NavButton] {
        &self.prev
    }

    pub fn next_buttons(&self) -> &[NavButton] {
        &self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_dot_active() {
        let mut controls = NavigationControlSet::new(5, 5);
        for current in 0..5 {
            controls.refresh(current);
            let active: Vec<_> = controls
                .dots()
                .iter()
                .enumerate()
                .filter(|(_, d)| d.active)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(active, vec![current]);
        }
    }

    #[test]
    fn buttons_disabled_at_edges() {
        let mut controls = NavigationControlSet::new(3, 3);
        assert!(controls.prev_disabled());
        assert!(!controls.next_disabled());

        controls.refresh(1);
        assert!(!controls.prev_disabled());
        assert!(!controls.next_disabled());

        controls.refresh(2);
        assert!(!controls.prev_disabled());
        assert!(controls.next_disabled());
    }

    #[test]
    fn all_instances_stay_in_sync() {
        let mut controls = NavigationControlSet::new(4, 4);
        controls.refresh(3);
        assert!(controls.next_buttons().iter().all(|b| b.disabled));
        assert!(controls.prev_buttons().iter().all(|b| !b.disabled));
    }

    #[test]
    fn single_slide_disables_both() {
        let controls = NavigationControlSet::new(1, 1);
        assert!(controls.prev_disabled());
        assert!(controls.next_disabled());
    }
}
