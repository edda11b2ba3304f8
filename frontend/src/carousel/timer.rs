//! Deadline bookkeeping for the carousels.
//!
//! Nothing in here touches the browser. A component asks its state for
//! `next_deadline()`, arms a single `gloo_timers` timeout for it and feeds
//! the wall clock back through `advance_to`. Tests do the same with a
//! plain counter.

pub type Millis = u64;

/// Current wall-clock time in milliseconds.
pub fn wall_clock() -> Millis {
    web_sys::js_sys::Date::now() as Millis
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { next_due: Millis },
}

/// A fixed-period timer with an explicit running/idle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    period: Millis,
    state: TimerState,
}

impl RepeatingTimer {
    pub const fn new(period: Millis) -> Self {
        Self {
            period,
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Starts the timer unless it is already running.
    pub fn start(&mut self, now: Millis) {
        if !self.is_running() {
            self.state = TimerState::Running {
                next_due: now + self.period,
            };
        }
    }

    /// Stops and starts again, so the next tick is a full period away.
    pub fn restart(&mut self, now: Millis) {
        self.stop();
        self.start(now);
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
    }

    pub fn next_due(&self) -> Option<Millis> {
        match self.state {
            TimerState::Running { next_due } => Some(next_due),
            TimerState::Idle => None,
        }
    }

    /// Returns true when a tick is due at `at`; the following tick is then
    /// scheduled one period later.
    pub fn fire(&mut self, at: Millis) -> bool {
        match self.state {
            TimerState::Running { next_due } if next_due <= at => {
                self.state = TimerState::Running {
                    next_due: at + self.period,
                };
                true
            }
            _ => false,
        }
    }
}

/// One-shot deadline. Arming again replaces the pending one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delay {
    due: Option<Millis>,
}

impl Delay {
    pub fn arm(&mut self, now: Millis, delay: Millis) {
        self.due = Some(now + delay);
    }

    pub fn disarm(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Millis> {
        self.due
    }

    pub fn fire(&mut self, at: Millis) -> bool {
        match self.due {
            Some(due) if due <= at => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// State that reacts to the passage of time.
///
/// `on_deadline(at)` must either move `next_deadline()` past `at` or clear
/// it, otherwise `advance_to` would spin.
pub trait Clocked {
    fn next_deadline(&self) -> Option<Millis>;

    fn on_deadline(&mut self, at: Millis);

    /// Processes every deadline up to and including `now`, earliest first.
    /// Returns how many deadlines were handled.
    fn advance_to(&mut self, now: Millis) -> usize {
        let mut handled = 0;
        while let Some(due) = self.next_deadline() {
            if due > now {
                break;
            }
            self.on_deadline(due);
            handled += 1;
        }
        handled
    }
}

/// Earliest of a set of optional deadlines.
pub fn earliest<I>(deadlines: I) -> Option<Millis>
where
    I: IntoIterator<Item = Option<Millis>>,
{
    deadlines.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_a_no_op_while_running() {
        let mut timer = RepeatingTimer::new(5_000);
        timer.start(0);
        timer.start(2_000);
        assert_eq!(timer.next_due(), Some(5_000));
    }

    #[test]
    fn restart_pushes_the_next_tick_a_full_period_out() {
        let mut timer = RepeatingTimer::new(5_000);
        timer.start(0);
        timer.restart(4_000);
        assert_eq!(timer.next_due(), Some(9_000));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = RepeatingTimer::new(3_000);
        timer.stop();
        timer.start(0);
        timer.stop();
        timer.stop();
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(!timer.fire(10_000));
    }

    #[test]
    fn fire_reschedules_from_the_tick() {
        let mut timer = RepeatingTimer::new(3_000);
        timer.start(0);
        assert!(!timer.fire(2_999));
        assert!(timer.fire(3_000));
        assert_eq!(timer.next_due(), Some(6_000));
    }

    #[test]
    fn delay_fires_once() {
        let mut delay = Delay::default();
        delay.arm(100, 500);
        assert!(!delay.fire(599));
        assert!(delay.fire(600));
        assert!(!delay.fire(700));
        assert!(!delay.is_armed());
    }

    #[test]
    fn rearming_replaces_the_deadline() {
        let mut delay = Delay::default();
        delay.arm(0, 5_000);
        delay.arm(1_000, 5_000);
        assert_eq!(delay.due(), Some(6_000));
    }

    struct Counter {
        timer: RepeatingTimer,
        ticks: u32,
    }

    impl Clocked for Counter {
        fn next_deadline(&self) -> Option<Millis> {
            self.timer.next_due()
        }

        fn on_deadline(&mut self, at: Millis) {
            if self.timer.fire(at) {
                self.ticks += 1;
            }
        }
    }

    #[test]
    fn advance_to_replays_every_elapsed_tick() {
        let mut counter = Counter {
            timer: RepeatingTimer::new(1_000),
            ticks: 0,
        };
        counter.timer.start(0);
        assert_eq!(counter.advance_to(3_500), 3);
        assert_eq!(counter.ticks, 3);
        assert_eq!(counter.next_deadline(), Some(4_000));
    }

    #[test]
    fn earliest_skips_missing_deadlines() {
        assert_eq!(earliest([None, Some(9), Some(4)]), Some(4));
        assert_eq!(earliest([None, None]), None);
    }
}
