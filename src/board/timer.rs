use std::time::{Duration, Instant};

use crate::board::{Category, PerCategory};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle of an active one-second repeating timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticker {
    next_due: Instant,
}

impl Ticker {
    fn new(now: Instant) -> Self {
        Self {
            next_due: now + TICK_PERIOD,
        }
    }

    /// Whole periods that came due by `now`. Advances past them.
    fn fire(&mut self, now: Instant) -> u64 {
        if now < self.next_due {
            return 0;
        }
        let late = now.duration_since(self.next_due);
        let count = 1 + (late.as_nanos() / TICK_PERIOD.as_nanos()) as u64;
        self.next_due += TICK_PERIOD * count as u32;
        count
    }
}

/// At most one active ticker per category.
#[derive(Debug, Default)]
pub struct TimerSchedule {
    handles: PerCategory<Option<Ticker>>,
}

impl TimerSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any ticker already running for `category`.
    pub fn start(&mut self, category: Category, now: Instant) {
        self.stop(category);
        self.handles[category] = Some(Ticker::new(now));
    }

    /// Returns whether a ticker was active.
    pub fn stop(&mut self, category: Category) -> bool {
        self.handles[category].take().is_some()
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.handles[category].is_some()
    }

    pub fn active_count(&self) -> usize {
        self.handles.iter().filter(|(_, h)| h.is_some()).count()
    }

    /// Seconds that came due for each category since the previous call.
    pub fn due(&mut self, now: Instant) -> PerCategory<u64> {
        PerCategory::from_fn(|c| match self.handles[c].as_mut() {
            Some(ticker) => ticker.fire(now),
            None => 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_before_first_second() {
        let t0 = Instant::now();
        let mut schedule = TimerSchedule::new();
        schedule.start(Category::Learn, t0);

        assert_eq!(schedule.due(t0 + Duration::from_millis(999)).learn, 0);
        assert_eq!(schedule.due(t0 + Duration::from_secs(1)).learn, 1);
        assert_eq!(schedule.due(t0 + Duration::from_millis(1500)).learn, 0);
        assert_eq!(schedule.due(t0 + Duration::from_secs(2)).learn, 1);
    }

    #[test]
    fn test_double_start_keeps_single_ticker() {
        let t0 = Instant::now();
        let mut schedule = TimerSchedule::new();
        schedule.start(Category::Create, t0);
        schedule.start(Category::Create, t0);

        assert_eq!(schedule.active_count(), 1);
        let due = schedule.due(t0 + Duration::from_secs(1));
        assert_eq!(due.create, 1);
    }

    #[test]
    fn test_restart_rearms_from_new_instant() {
        let t0 = Instant::now();
        let mut schedule = TimerSchedule::new();
        schedule.start(Category::Move, t0);
        schedule.start(Category::Move, t0 + Duration::from_millis(600));

        assert_eq!(schedule.due(t0 + Duration::from_secs(1)).r#move, 0);
        assert_eq!(schedule.due(t0 + Duration::from_millis(1600)).r#move, 1);
    }

    #[test]
    fn test_late_poll_catches_up_whole_seconds() {
        let t0 = Instant::now();
        let mut schedule = TimerSchedule::new();
        schedule.start(Category::Learn, t0);

        assert_eq!(schedule.due(t0 + Duration::from_millis(3200)).learn, 3);
        assert_eq!(schedule.due(t0 + Duration::from_millis(3900)).learn, 0);
        assert_eq!(schedule.due(t0 + Duration::from_secs(4)).learn, 1);
    }

    #[test]
    fn test_stopped_category_never_due() {
        let t0 = Instant::now();
        let mut schedule = TimerSchedule::new();
        schedule.start(Category::Learn, t0);
        schedule.start(Category::Move, t0);
        assert!(schedule.stop(Category::Learn));
        assert!(!schedule.stop(Category::Learn));

        let due = schedule.due(t0 + Duration::from_secs(5));
        assert_eq!(due.learn, 0);
        assert_eq!(due.r#move, 5);
        assert_eq!(due.create, 0);
    }
}
