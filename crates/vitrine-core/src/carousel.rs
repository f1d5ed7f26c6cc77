//! Testimonial carousel state.
//!
//! A single active index into a fixed, ordered sequence. The index is
//! clamped on every update, so out-of-range requests land on the nearest
//! boundary instead of wrapping or panicking.

/// Carousel over a fixed-length sequence of items.
///
/// Invariant: `0 <= index < len` whenever `len > 0`. An empty carousel
/// keeps no meaningful index; callers are expected to hide the whole
/// widget via [`CarouselState::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    /// New carousel positioned on the first item.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Currently active index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the sequence has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Select item `i`, clamped into `[0, len)`.
    ///
    /// Negative requests select index 0, requests past the end select the
    /// last item. No-op for an empty sequence.
    pub fn show(&mut self, i: isize) {
        if self.len == 0 {
            return;
        }
        let max = (self.len - 1) as isize;
        self.index = i.clamp(0, max) as usize;
    }

    /// Request the previous item.
    pub fn prev(&mut self) {
        self.show(self.index as isize - 1);
    }

    /// Request the next item.
    pub fn next(&mut self) {
        self.show(self.index as isize + 1);
    }

    /// True iff `i` is the single active item.
    pub fn is_active(&self, i: usize) -> bool {
        !self.is_empty() && i == self.index
    }

    /// Previous control is disabled at the left boundary.
    pub fn prev_disabled(&self) -> bool {
        self.index == 0
    }

    /// Next control is disabled at the right boundary.
    pub fn next_disabled(&self) -> bool {
        self.len == 0 || self.index == self.len - 1
    }

    /// Both nav controls are hidden when there is nothing to page through.
    pub fn nav_hidden(&self) -> bool {
        self.len <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_show_clamps_below_zero() {
        let mut c = CarouselState::new(3);
        c.show(-5);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_show_clamps_past_end() {
        let mut c = CarouselState::new(3);
        c.show(99);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_exactly_one_active() {
        let mut c = CarouselState::new(4);
        c.show(2);
        let active: Vec<usize> = (0..4).filter(|&i| c.is_active(i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_prev_next_walk() {
        let mut c = CarouselState::new(3);
        c.next();
        assert_eq!(c.index(), 1);
        c.next();
        assert_eq!(c.index(), 2);
        // Next at the boundary stays put
        c.next();
        assert_eq!(c.index(), 2);
        c.prev();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_boundary_disabling() {
        let mut c = CarouselState::new(3);
        assert!(c.prev_disabled());
        assert!(!c.next_disabled());

        c.show(1);
        assert!(!c.prev_disabled());
        assert!(!c.next_disabled());

        c.show(2);
        assert!(!c.prev_disabled());
        assert!(c.next_disabled());
    }

    #[test]
    fn test_nav_hidden_for_zero_or_one() {
        assert!(CarouselState::new(0).nav_hidden());
        assert!(CarouselState::new(1).nav_hidden());
        assert!(!CarouselState::new(2).nav_hidden());
    }

    #[test]
    fn test_empty_carousel_ignores_show() {
        let mut c = CarouselState::new(0);
        c.show(5);
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
        assert!(!c.is_active(0));
    }

    proptest! {
        #[test]
        fn prop_index_always_in_range(len in 1usize..64, req in -128isize..128) {
            let mut c = CarouselState::new(len);
            c.show(req);
            prop_assert!(c.index() < len);
        }

        #[test]
        fn prop_single_active_item(len in 1usize..64, req in -128isize..128) {
            let mut c = CarouselState::new(len);
            c.show(req);
            let active = (0..len).filter(|&i| c.is_active(i)).count();
            prop_assert_eq!(active, 1);
        }
    }
}
