//! Index bookkeeping for the testimonial carousel.
//!
//! Auto-play timers are tagged with the [`Carousel::epoch`] they were started
//! in. Hovering or leaving starts a new epoch, so a timer from before a pause
//! goes stale and the next advance comes a full interval after resuming.

/// One-at-a-time rotation over `len` items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    hovered: bool,
    epoch: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            hovered: false,
            epoch: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Auto-play runs only while the pointer is outside the carousel.
    pub fn is_autoplaying(&self) -> bool {
        !self.hovered
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a dot. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Pause or resume auto-play. Returns `true` when the state changed,
    /// which also opens a new epoch.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        self.epoch += 1;
        true
    }

    /// A timer started in `epoch` fired. Returns `false` when that timer is
    /// stale and should not be rescheduled.
    pub fn tick(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        if self.is_autoplaying() {
            self.next();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn next_wraps_around() {
        let mut carousel = Carousel::new(4);
        let seen: Vec<_> = (0..5)
            .map(|_| {
                carousel.next();
                carousel.index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(carousel.index(), 3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(2);
        assert_eq!(carousel.index(), 2);
        carousel.go_to(4);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.tick(carousel.epoch()));
        assert_eq!(carousel.index(), 1);

        carousel.set_hovered(true);
        assert!(carousel.tick(carousel.epoch()));
        assert_eq!(carousel.index(), 1);

        // manual navigation still works while hovered
        carousel.next();
        assert_eq!(carousel.index(), 2);

        carousel.set_hovered(false);
        assert!(carousel.tick(carousel.epoch()));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn timer_from_before_hover_is_stale_after_resume() {
        let mut carousel = Carousel::new(3);
        let started = carousel.epoch();

        // pointer passes over just before the interval elapses
        assert!(carousel.set_hovered(true));
        assert!(carousel.set_hovered(false));

        // the old timer fires right after leaving: no advance, and it stops
        assert!(!carousel.tick(started));
        assert_eq!(carousel.index(), 0);

        // only the timer started on resume advances
        assert!(carousel.tick(carousel.epoch()));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn repeated_hover_events_keep_the_epoch() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.set_hovered(false));
        assert_eq!(carousel.epoch(), 0);
        assert!(carousel.set_hovered(true));
        assert!(!carousel.set_hovered(true));
        assert_eq!(carousel.epoch(), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.tick(carousel.epoch());
        carousel.go_to(0);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }
}
