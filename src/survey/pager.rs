// SPDX-License-Identifier: MPL-2.0
//! Paged label list state.
//!
//! The pager shows one large category title per page, in fixed order, and is
//! kept in sync with the track selection through programmatic
//! scroll-to-index requests. It can also be swiped by hand, in which case it
//! snaps to the nearest page on release without writing back to the shared
//! drag coordinate.

use crate::animation::spring::Spring;
use crate::survey::RATINGS;

/// Scroll state for the horizontally paged title list.
#[derive(Debug, Clone, Copy)]
pub struct PagerState {
    page_width: f32,
    offset: f32,
    spring: Option<Spring>,
    swipe_origin: Option<f32>,
}

impl PagerState {
    /// Creates a pager resting on the first page. `page_width` is the width
    /// of one page, i.e. the content column width.
    #[must_use]
    pub fn new(page_width: f32) -> Self {
        Self {
            page_width,
            offset: 0.0,
            spring: None,
            swipe_origin: None,
        }
    }

    /// Number of pages; one per category.
    #[must_use]
    pub fn page_count(&self) -> usize {
        RATINGS.len()
    }

    /// Current scroll offset in pixels (0 = first page fully visible).
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Width of a single page.
    #[must_use]
    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    fn max_offset(&self) -> f32 {
        self.page_width * (self.page_count() as f32 - 1.0)
    }

    /// The page the pager is currently resting on (or closest to).
    #[must_use]
    pub fn current_index(&self) -> usize {
        if self.page_width <= 0.0 {
            return 0;
        }
        let nearest = (self.offset / self.page_width).round();
        (nearest.max(0.0) as usize).min(self.page_count() - 1)
    }

    /// Requests an animated scroll to a page. Out-of-range indices are
    /// ignored; a stale request must never panic or move the pager.
    pub fn scroll_to_index(&mut self, index: usize) {
        if index >= self.page_count() {
            log::warn!("ignoring pager scroll to out-of-range index {index}");
            return;
        }
        self.swipe_origin = None;
        let target = self.page_width * index as f32;
        match &mut self.spring {
            Some(spring) => spring.retarget(target),
            None => {
                if (self.offset - target).abs() > f32::EPSILON {
                    self.spring = Some(Spring::to(target));
                }
            }
        }
    }

    /// Begins a manual swipe, interrupting any in-flight snap.
    pub fn swipe_start(&mut self) {
        self.spring = None;
        self.swipe_origin = Some(self.offset);
    }

    /// Applies the cumulative horizontal translation of the active swipe.
    /// Dragging left (negative translation) advances to later pages.
    pub fn swipe_move(&mut self, translation_x: f32) {
        if let Some(origin) = self.swipe_origin {
            self.offset = (origin - translation_x).clamp(0.0, self.max_offset());
        }
    }

    /// Ends the swipe, snapping to the nearest page.
    pub fn swipe_end(&mut self) {
        if self.swipe_origin.take().is_some() {
            let target = self.page_width * self.current_index() as f32;
            if (self.offset - target).abs() > f32::EPSILON {
                self.spring = Some(Spring::to(target));
            }
        }
    }

    /// Whether a snap animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Advances the snap animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(spring) = &mut self.spring {
            if spring.step(&mut self.offset, dt) {
                self.spring = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(pager: &mut PagerState) {
        for _ in 0..600 {
            pager.tick(FRAME);
            if !pager.is_animating() {
                return;
            }
        }
        panic!("pager animation did not settle");
    }

    #[test]
    fn starts_on_the_first_page() {
        let pager = PagerState::new(348.0);
        assert_eq!(pager.offset(), 0.0);
        assert_eq!(pager.current_index(), 0);
        assert!(!pager.is_animating());
    }

    #[test]
    fn scroll_to_index_settles_on_the_page() {
        let mut pager = PagerState::new(348.0);
        pager.scroll_to_index(2);
        assert!(pager.is_animating());
        settle(&mut pager);
        assert_eq!(pager.offset(), 696.0);
        assert_eq!(pager.current_index(), 2);
    }

    #[test]
    fn scroll_to_current_page_is_a_no_op() {
        let mut pager = PagerState::new(348.0);
        pager.scroll_to_index(0);
        assert!(!pager.is_animating());
    }

    #[test]
    fn out_of_range_request_is_ignored() {
        let mut pager = PagerState::new(348.0);
        pager.scroll_to_index(1);
        settle(&mut pager);
        pager.scroll_to_index(7);
        assert!(!pager.is_animating());
        assert_eq!(pager.current_index(), 1);
    }

    #[test]
    fn retargeting_mid_flight_stays_continuous() {
        let mut pager = PagerState::new(348.0);
        pager.scroll_to_index(2);
        for _ in 0..5 {
            pager.tick(FRAME);
        }
        let in_flight = pager.offset();
        pager.scroll_to_index(0);
        pager.tick(FRAME);
        // One frame moves the offset a small step from where the spring was,
        // not discontinuously onto the new target.
        let step = (pager.offset() - in_flight).abs();
        assert!(step < in_flight, "offset jumped {step} of {in_flight}");
        assert!(pager.offset() > 0.0);
        settle(&mut pager);
        assert_eq!(pager.offset(), 0.0);
    }

    #[test]
    fn swipe_is_clamped_to_the_page_range() {
        let mut pager = PagerState::new(348.0);
        pager.swipe_start();
        pager.swipe_move(500.0); // dragging right past the first page
        assert_eq!(pager.offset(), 0.0);
        pager.swipe_move(-10_000.0); // dragging left past the last page
        assert_eq!(pager.offset(), 696.0);
    }

    #[test]
    fn swipe_release_snaps_to_the_nearest_page() {
        let mut pager = PagerState::new(348.0);
        pager.swipe_start();
        pager.swipe_move(-200.0); // a bit past halfway to page 1
        pager.swipe_end();
        settle(&mut pager);
        assert_eq!(pager.current_index(), 1);
        assert_eq!(pager.offset(), 348.0);
    }

    #[test]
    fn swipe_interrupts_a_snap_in_flight() {
        let mut pager = PagerState::new(348.0);
        pager.scroll_to_index(2);
        for _ in 0..5 {
            pager.tick(FRAME);
        }
        pager.swipe_start();
        assert!(!pager.is_animating());
        let grabbed = pager.offset();
        pager.swipe_move(0.0);
        assert_eq!(pager.offset(), grabbed);
    }
}
