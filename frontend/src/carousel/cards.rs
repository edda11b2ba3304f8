use super::timer::{earliest, Clocked, Delay, Millis, RepeatingTimer};
use super::viewport::items_per_view;

pub const AUTO_SCROLL_MS: Millis = 3_000;
pub const RESUME_AFTER_MS: Millis = 5_000;
/// Matches the CSS transition on the track.
pub const SLIDE_MS: Millis = 500;
pub const TRANSITION_RESTORE_MS: Millis = 50;
pub const CARD_GAP_PX: f64 = 20.0;

/// Auto-scroll moves backwards so the cards flow right to left.
pub const AUTO_SCROLL_STEP: isize = -1;

const SLIDE_TRANSITION: &str = "transform 0.5s ease-in-out";

/// The card tracks on the page. Each one owns its own [`CardTrack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrackKind {
    Features,
    Support,
}

impl TrackKind {
    pub const ALL: [TrackKind; 2] = [TrackKind::Features, TrackKind::Support];

    pub fn name(self) -> &'static str {
        match self {
            TrackKind::Features => "features",
            TrackKind::Support => "support",
        }
    }

    pub fn track_id(self) -> String {
        format!("{}-carousel", self.name())
    }

    pub fn indicators_id(self) -> String {
        format!("{}-indicators", self.name())
    }
}

/// Position and schedule of one looping card track.
///
/// The track is drawn with every card twice. Stepping forward off the last
/// card lands on the copy of the first one, and once the slide has finished
/// the index snaps back to 0 with the transition switched off.
#[derive(Debug, Clone)]
pub struct CardTrack {
    kind: TrackKind,
    current_index: usize,
    total_cards: usize,
    visible_cards: usize,
    hovered: bool,
    in_view: bool,
    transition_enabled: bool,
    auto_scroll: RepeatingTimer,
    resume: Delay,
    loop_reset: Delay,
    restore_transition: Delay,
}

impl CardTrack {
    pub fn new(kind: TrackKind, total_cards: usize, width: f64) -> Self {
        Self {
            kind,
            current_index: 0,
            total_cards,
            visible_cards: items_per_view(width),
            hovered: false,
            in_view: true,
            transition_enabled: true,
            auto_scroll: RepeatingTimer::new(AUTO_SCROLL_MS),
            resume: Delay::default(),
            loop_reset: Delay::default(),
            restore_transition: Delay::default(),
        }
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn visible_cards(&self) -> usize {
        self.visible_cards
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_scrolling(&self) -> bool {
        self.auto_scroll.is_running()
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Originals plus their copies.
    pub fn rendered_cards(&self) -> usize {
        self.total_cards * 2
    }

    /// Indicator for the card in view; the copy of a card lights its original.
    pub fn active_indicator(&self) -> usize {
        if self.total_cards == 0 {
            0
        } else {
            self.current_index % self.total_cards
        }
    }

    pub fn offset_px(&self, card_width: f64) -> f64 {
        self.current_index as f64 * (card_width + CARD_GAP_PX)
    }

    pub fn track_style(&self, card_width: f64) -> String {
        let transition = if self.transition_enabled {
            SLIDE_TRANSITION
        } else {
            "none"
        };
        format!(
            "transform: translateX({}px); transition: {};",
            self.offset_px(card_width),
            transition
        )
    }

    /// Begins auto-scrolling, as the track does once it is set up.
    pub fn start(&mut self, now: Millis) {
        if self.total_cards > 0 && !self.hovered && self.in_view {
            self.auto_scroll.restart(now);
        }
    }

    pub fn stop(&mut self) {
        self.auto_scroll.stop();
    }

    /// Moves one card in `direction` (+1 or -1), then pauses auto-scroll
    /// for the resume cooldown.
    pub fn step(&mut self, direction: isize, now: Millis) {
        if self.total_cards == 0 {
            return;
        }
        self.stop();
        // Counting from the original card keeps the index within
        // 0..=total_cards; total_cards itself is the copy of card 0.
        let next = self.active_indicator() as isize + direction.signum();
        self.current_index = if next < 0 {
            self.total_cards - 1
        } else {
            next as usize
        };
        self.after_move(now);
    }

    /// Jumps straight to card `index`, as an indicator click does.
    pub fn jump_to(&mut self, index: usize, now: Millis) {
        if index >= self.total_cards {
            return;
        }
        self.stop();
        self.current_index = index;
        self.after_move(now);
    }

    fn after_move(&mut self, now: Millis) {
        self.restore_transition.disarm();
        self.transition_enabled = true;
        if self.current_index >= self.total_cards {
            self.loop_reset.arm(now, SLIDE_MS);
        } else {
            self.loop_reset.disarm();
        }
        self.resume.arm(now, RESUME_AFTER_MS);
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Millis) {
        self.hovered = hovered;
        if hovered {
            self.stop();
        } else {
            self.start(now);
        }
    }

    pub fn set_in_view(&mut self, in_view: bool, now: Millis) {
        self.in_view = in_view;
        if in_view && !self.hovered {
            self.start(now);
        } else {
            self.stop();
        }
    }

    /// Returns true when the number of visible cards changed.
    pub fn resize(&mut self, width: f64) -> bool {
        let visible = items_per_view(width);
        let changed = visible != self.visible_cards;
        self.visible_cards = visible;
        changed
    }

    /// Drops every pending schedule, used when the page is unloading.
    pub fn teardown(&mut self) {
        self.stop();
        self.resume.disarm();
        self.loop_reset.disarm();
        self.restore_transition.disarm();
    }
}

impl Clocked for CardTrack {
    fn next_deadline(&self) -> Option<Millis> {
        earliest([
            self.loop_reset.due(),
            self.restore_transition.due(),
            self.resume.due(),
            self.auto_scroll.next_due(),
        ])
    }

    fn on_deadline(&mut self, at: Millis) {
        if self.loop_reset.fire(at) {
            self.transition_enabled = false;
            self.current_index = 0;
            self.restore_transition.arm(at, TRANSITION_RESTORE_MS);
        }
        if self.restore_transition.fire(at) {
            self.transition_enabled = true;
        }
        if self.resume.fire(at) {
            self.start(at);
        }
        if self.auto_scroll.fire(at) && !self.hovered {
            self.step(AUTO_SCROLL_STEP, at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(total: usize) -> CardTrack {
        let mut track = CardTrack::new(TrackKind::Features, total, 1400.0);
        track.start(0);
        track
    }

    #[test]
    fn ids_come_from_the_kind() {
        assert_eq!(TrackKind::Support.track_id(), "support-carousel");
        assert_eq!(TrackKind::Features.indicators_id(), "features-indicators");
    }

    #[test]
    fn backward_steps_wrap_back_to_the_start() {
        let mut track = started(6);
        let mut now = 0;
        for _ in 0..6 {
            now += 10;
            track.step(-1, now);
        }
        assert_eq!(track.current_index(), 0);
        assert_eq!(track.active_indicator(), 0);
    }

    #[test]
    fn forward_wrap_slides_onto_the_copy_then_snaps() {
        let mut track = started(3);
        track.step(1, 0);
        track.step(1, 0);
        track.step(1, 100);
        assert_eq!(track.current_index(), 3);
        assert_eq!(track.active_indicator(), 0);
        assert_eq!(track.offset_px(280.0), 900.0);

        track.advance_to(600);
        assert_eq!(track.current_index(), 0);
        assert!(!track.transition_enabled());
        assert!(track.track_style(280.0).contains("transition: none"));

        track.advance_to(650);
        assert!(track.transition_enabled());
    }

    #[test]
    fn stepping_on_from_the_copy_continues_with_the_second_card() {
        let mut track = started(3);
        track.jump_to(2, 0);
        track.step(1, 0);
        track.step(1, 100);
        assert_eq!(track.current_index(), 1);
        track.advance_to(1_000);
        assert_eq!(track.current_index(), 1);
    }

    #[test]
    fn auto_scroll_moves_backwards_and_cools_down() {
        let mut track = started(4);
        track.advance_to(3_000);
        assert_eq!(track.current_index(), 3);
        assert!(!track.is_scrolling());

        // cooldown 5s, then a full auto-scroll period
        track.advance_to(10_999);
        assert_eq!(track.current_index(), 3);
        track.advance_to(11_000);
        assert_eq!(track.current_index(), 2);
    }

    #[test]
    fn hover_blocks_auto_scroll_until_left() {
        let mut track = started(4);
        track.set_hovered(true, 500);
        track.advance_to(10_500);
        assert_eq!(track.current_index(), 0);

        track.set_hovered(false, 10_500);
        track.advance_to(13_500);
        assert_eq!(track.current_index(), 3);
    }

    #[test]
    fn cooldown_does_not_restart_a_hovered_track() {
        let mut track = started(4);
        track.step(-1, 100);
        track.set_hovered(true, 200);
        track.advance_to(20_000);
        assert_eq!(track.current_index(), 3);
        assert!(!track.is_scrolling());
    }

    #[test]
    fn leaving_the_viewport_stops_scrolling() {
        let mut track = started(4);
        track.set_in_view(false, 1_000);
        track.advance_to(30_000);
        assert_eq!(track.current_index(), 0);

        track.set_in_view(true, 30_000);
        assert!(track.is_scrolling());
    }

    #[test]
    fn indicator_jump_restarts_after_cooldown() {
        let mut track = started(5);
        track.jump_to(2, 1_000);
        assert_eq!(track.current_index(), 2);
        assert!(!track.is_scrolling());
        track.advance_to(6_000);
        assert!(track.is_scrolling());
        track.jump_to(9, 6_000);
        assert_eq!(track.current_index(), 2);
    }

    #[test]
    fn teardown_clears_every_schedule() {
        let mut track = started(3);
        track.step(1, 0);
        track.teardown();
        assert_eq!(track.next_deadline(), None);
    }

    #[test]
    fn empty_track_never_schedules() {
        let mut track = started(0);
        track.step(-1, 0);
        assert_eq!(track.next_deadline(), None);
        assert_eq!(track.rendered_cards(), 0);
    }

    #[test]
    fn resize_reports_visible_card_changes() {
        let mut track = CardTrack::new(TrackKind::Support, 6, 1400.0);
        assert_eq!(track.visible_cards(), 4);
        assert!(!track.resize(1300.0));
        assert!(track.resize(700.0));
        assert_eq!(track.visible_cards(), 2);
    }
}
