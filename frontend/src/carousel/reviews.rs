use std::ops::Range;

use super::timer::{earliest, Clocked, Delay, Millis, RepeatingTimer};
use super::viewport::items_per_view;

pub const AUTO_PLAY_MS: Millis = 5_000;
pub const FADE_OUT_MS: Millis = 300;
pub const FADE_IN_MS: Millis = 50;

/// Page arithmetic over a fixed number of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current: usize,
    per_page: usize,
    total_items: usize,
}

impl PageState {
    pub fn new(total_items: usize, width: f64) -> Self {
        Self {
            current: 0,
            per_page: items_per_view(width),
            total_items,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    /// Recomputes the page size for `width`. Returns true if it changed.
    pub fn set_width(&mut self, width: f64) -> bool {
        let per_page = items_per_view(width);
        let changed = per_page != self.per_page;
        self.per_page = per_page;
        if self.current >= self.total_pages() {
            self.current = self.total_pages() - 1;
        }
        changed
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.total_pages();
    }

    pub fn prev(&mut self) {
        let total = self.total_pages();
        self.current = (self.current + total - 1) % total;
    }

    pub fn go_to(&mut self, page: usize) -> bool {
        if page < self.total_pages() {
            self.current = page;
            true
        } else {
            false
        }
    }

    /// Item indices on `page` at the current page size.
    pub fn range_of(&self, page: usize) -> Range<usize> {
        let start = (page * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    pub fn range(&self) -> Range<usize> {
        self.range_of(self.current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Next,
    Prev,
    Go(usize),
}

/// Where the grid is in its page-swap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    Shown,
    FadingOut,
    FadingIn,
}

/// Review grid state: which page is selected, which page is drawn, and
/// whether auto-play may run.
#[derive(Debug, Clone)]
pub struct ReviewCarousel {
    pages: PageState,
    shown_page: usize,
    fade: Fade,
    swap: Delay,
    reveal: Delay,
    autoplay: RepeatingTimer,
    in_view: bool,
    hovered: bool,
    page_hidden: bool,
}

impl ReviewCarousel {
    pub fn new(total_items: usize, width: f64) -> Self {
        Self {
            pages: PageState::new(total_items, width),
            shown_page: 0,
            fade: Fade::Shown,
            swap: Delay::default(),
            reveal: Delay::default(),
            autoplay: RepeatingTimer::new(AUTO_PLAY_MS),
            in_view: false,
            hovered: false,
            page_hidden: false,
        }
    }

    pub fn pages(&self) -> &PageState {
        &self.pages
    }

    pub fn current_page(&self) -> usize {
        self.pages.current()
    }

    pub fn per_page(&self) -> usize {
        self.pages.per_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pages.total_pages()
    }

    /// The page whose items are in the grid right now.
    pub fn shown_page(&self) -> usize {
        self.shown_page
    }

    pub fn shown_range(&self) -> Range<usize> {
        self.pages.range_of(self.shown_page)
    }

    pub fn fade(&self) -> Fade {
        self.fade
    }

    pub fn grid_opacity(&self) -> &'static str {
        match self.fade {
            Fade::Shown => "1",
            Fade::FadingOut | Fade::FadingIn => "0",
        }
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    fn may_play(&self) -> bool {
        self.in_view && !self.hovered && !self.page_hidden
    }

    fn start_autoplay(&mut self, now: Millis) {
        if self.may_play() {
            self.autoplay.start(now);
        }
    }

    fn reset_autoplay(&mut self, now: Millis) {
        self.autoplay.stop();
        self.start_autoplay(now);
    }

    /// Begins the fade-out that precedes drawing the current page.
    fn display_current(&mut self, now: Millis) {
        self.fade = Fade::FadingOut;
        self.reveal.disarm();
        self.swap.arm(now, FADE_OUT_MS);
    }

    pub fn navigate(&mut self, nav: PageNav, now: Millis) {
        let moved = match nav {
            PageNav::Next => {
                self.pages.next();
                true
            }
            PageNav::Prev => {
                self.pages.prev();
                true
            }
            PageNav::Go(page) => self.pages.go_to(page),
        };
        if moved {
            self.display_current(now);
        }
        self.reset_autoplay(now);
    }

    /// Returns true when the page size changed and the grid is being redrawn.
    pub fn resize(&mut self, width: f64, now: Millis) -> bool {
        let changed = self.pages.set_width(width);
        if changed {
            self.display_current(now);
        }
        changed
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Millis) {
        self.hovered = hovered;
        if hovered {
            self.autoplay.stop();
        } else {
            self.start_autoplay(now);
        }
    }

    pub fn set_page_hidden(&mut self, hidden: bool, now: Millis) {
        self.page_hidden = hidden;
        if hidden {
            self.autoplay.stop();
        } else {
            self.start_autoplay(now);
        }
    }

    pub fn set_in_view(&mut self, in_view: bool, now: Millis) {
        self.in_view = in_view;
        if in_view {
            self.start_autoplay(now);
        } else {
            self.autoplay.stop();
        }
    }
}

impl Clocked for ReviewCarousel {
    fn next_deadline(&self) -> Option<Millis> {
        earliest([self.swap.due(), self.reveal.due(), self.autoplay.next_due()])
    }

    fn on_deadline(&mut self, at: Millis) {
        if self.swap.fire(at) {
            self.shown_page = self.pages.current();
            self.fade = Fade::FadingIn;
            self.reveal.arm(at, FADE_IN_MS);
        }
        if self.reveal.fire(at) {
            self.fade = Fade::Shown;
        }
        if self.autoplay.fire(at) && self.in_view {
            self.pages.next();
            self.display_current(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEWS: usize = 12;

    fn playing_at(width: f64) -> ReviewCarousel {
        let mut carousel = ReviewCarousel::new(REVIEWS, width);
        carousel.set_in_view(true, 0);
        carousel
    }

    #[test]
    fn page_counts_follow_the_breakpoints() {
        for (width, per_page, pages) in [
            (500.0, 1, 12),
            (800.0, 2, 6),
            (1000.0, 3, 4),
            (1400.0, 4, 3),
        ] {
            let state = PageState::new(REVIEWS, width);
            assert_eq!(state.per_page(), per_page);
            assert_eq!(state.total_pages(), pages);
        }
    }

    #[test]
    fn current_page_stays_in_range_after_resize() {
        let mut state = PageState::new(REVIEWS, 500.0);
        assert!(state.go_to(11));
        assert!(state.set_width(1400.0));
        assert_eq!(state.current(), 2);
        assert!(!state.set_width(1300.0));
        assert!(state.current() < state.total_pages());
    }

    #[test]
    fn next_then_prev_round_trips_from_every_page() {
        for width in [500.0, 800.0, 1000.0, 1400.0] {
            let mut state = PageState::new(REVIEWS, width);
            for page in 0..state.total_pages() {
                assert!(state.go_to(page));
                state.next();
                state.prev();
                assert_eq!(state.current(), page);
                state.prev();
                state.next();
                assert_eq!(state.current(), page);
            }
        }
    }

    #[test]
    fn go_to_selects_exactly_that_slice() {
        let mut state = PageState::new(REVIEWS, 1000.0);
        for page in 0..state.total_pages() {
            assert!(state.go_to(page));
            assert_eq!(state.range(), page * 3..((page + 1) * 3).min(REVIEWS));
        }
        assert!(!state.go_to(4));
    }

    #[test]
    fn last_page_is_clipped_to_the_list() {
        let state = PageState::new(10, 1400.0);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.range_of(2), 8..10);
    }

    #[test]
    fn page_swap_fades_out_then_in() {
        let mut carousel = playing_at(1400.0);
        carousel.navigate(PageNav::Next, 1_000);
        assert_eq!(carousel.fade(), Fade::FadingOut);
        assert_eq!(carousel.grid_opacity(), "0");
        assert_eq!(carousel.shown_page(), 0);

        carousel.advance_to(1_300);
        assert_eq!(carousel.shown_page(), 1);
        assert_eq!(carousel.shown_range(), 4..8);
        assert_eq!(carousel.fade(), Fade::FadingIn);

        carousel.advance_to(1_350);
        assert_eq!(carousel.fade(), Fade::Shown);
        assert_eq!(carousel.grid_opacity(), "1");
    }

    #[test]
    fn auto_play_advances_every_five_seconds_while_in_view() {
        let mut carousel = playing_at(1400.0);
        carousel.advance_to(4_999);
        assert_eq!(carousel.current_page(), 0);
        carousel.advance_to(5_000);
        assert_eq!(carousel.current_page(), 1);
        carousel.advance_to(15_000);
        assert_eq!(carousel.current_page(), 0);
    }

    #[test]
    fn nothing_plays_out_of_view() {
        let mut carousel = ReviewCarousel::new(REVIEWS, 1400.0);
        carousel.advance_to(60_000);
        assert_eq!(carousel.current_page(), 0);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn hover_pauses_until_the_pointer_leaves() {
        let mut carousel = playing_at(1400.0);
        carousel.set_hovered(true, 1_000);
        carousel.advance_to(11_000);
        assert_eq!(carousel.current_page(), 0);

        carousel.set_hovered(false, 11_000);
        carousel.advance_to(16_000);
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn hidden_tab_pauses_and_resumes_only_in_view() {
        let mut carousel = playing_at(1400.0);
        carousel.set_page_hidden(true, 1_000);
        carousel.advance_to(20_000);
        assert_eq!(carousel.current_page(), 0);

        carousel.set_in_view(false, 20_000);
        carousel.set_page_hidden(false, 20_000);
        assert!(!carousel.is_playing());

        carousel.set_in_view(true, 21_000);
        carousel.advance_to(26_000);
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn manual_navigation_resets_the_interval() {
        let mut carousel = playing_at(1400.0);
        carousel.navigate(PageNav::Go(2), 4_000);
        carousel.advance_to(5_000);
        assert_eq!(carousel.current_page(), 2);
        carousel.advance_to(9_000);
        assert_eq!(carousel.current_page(), 0);
    }

    #[test]
    fn resize_redraws_only_when_the_page_size_changes() {
        let mut carousel = playing_at(1400.0);
        assert!(!carousel.resize(1300.0, 100));
        assert_eq!(carousel.fade(), Fade::Shown);
        assert!(carousel.resize(500.0, 100));
        assert_eq!(carousel.total_pages(), 12);
        carousel.advance_to(400);
        assert_eq!(carousel.shown_range(), 0..1);
    }
}
