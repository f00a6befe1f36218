use std::time::Instant;

use crate::board::state::{BoardState, TimerState};
use crate::board::timer::TimerSchedule;
use crate::board::view::{self, Status};
use crate::board::{ALL_CATEGORIES, Category, PerCategory};
use crate::store::SnapshotStorage;

pub const MAX_CHOICES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text had no usable lines; nothing changed.
    Unchanged,
    /// `dropped` counts non-blank lines past the sixth.
    Applied { kept: usize, dropped: usize },
}

/// Trim each line, drop blank ones, keep the first [`MAX_CHOICES`].
/// Returns the kept lines and how many non-blank lines were cut.
pub fn parse_choice_lines(raw: &str) -> (Vec<String>, usize) {
    let mut lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    let dropped = lines.len().saturating_sub(MAX_CHOICES);
    lines.truncate(MAX_CHOICES);
    (lines, dropped)
}

/// Read the stored snapshot, falling back to the defaults when there is
/// none or it cannot be parsed.
pub fn load_state(storage: &dyn SnapshotStorage) -> BoardState {
    let raw = match storage.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("no stored board, starting from defaults");
            return BoardState::default();
        }
        Err(e) => {
            log::warn!("{e}; starting from defaults");
            return BoardState::default();
        }
    };
    match BoardState::from_json(&raw) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("stored board is unreadable ({e}); starting from defaults");
            BoardState::default()
        }
    }
}

/// Owns the board state and its timers, and writes the state back to
/// storage after every change.
pub struct Board {
    state: BoardState,
    timers: TimerSchedule,
    storage: Box<dyn SnapshotStorage>,
}

impl Board {
    /// Load from `storage` and pause every timer: tickers do not survive a
    /// restart, so a stored `running` flag is stale.
    pub fn open(storage: Box<dyn SnapshotStorage>) -> Self {
        let mut state = load_state(storage.as_ref());
        for category in ALL_CATEGORIES {
            state.timers[category].running = false;
        }
        Self::with_state(state, storage)
    }

    pub fn with_state(state: BoardState, storage: Box<dyn SnapshotStorage>) -> Self {
        Self {
            state,
            timers: TimerSchedule::new(),
            storage,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Best effort: a failed write is logged and otherwise ignored.
    pub fn save(&self) {
        let json = match self.state.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("could not serialize board: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(&json) {
            log::warn!("could not save board: {e}");
        }
    }

    pub fn choices(&self, category: Category) -> &[String] {
        &self.state.choices[category]
    }

    pub fn selected(&self, category: Category) -> Option<usize> {
        self.state.selected[category]
    }

    pub fn selected_choice(&self, category: Category) -> Option<&str> {
        view::selected_choice(&self.state, category)
    }

    pub fn is_done(&self, category: Category) -> bool {
        self.state.done[category]
    }

    pub fn status(&self, category: Category) -> Status {
        view::status(&self.state, category)
    }

    pub fn timer(&self, category: Category) -> TimerState {
        self.state.timers[category]
    }

    pub fn timer_active(&self, category: Category) -> bool {
        self.timers.is_active(category)
    }

    /// Picking a task, even the same one again, un-completes the category.
    pub fn select(&mut self, category: Category, index: usize) {
        log::debug!("select {} option {}", category.as_str(), index + 1);
        self.state.selected[category] = Some(index);
        self.state.done[category] = false;
        self.save();
    }

    pub fn set_done(&mut self, category: Category, done: bool) {
        self.state.done[category] = done;
        self.save();
    }

    pub fn toggle_done(&mut self, category: Category) -> bool {
        let done = !self.state.done[category];
        self.set_done(category, done);
        done
    }

    /// Replace the category's choices with the non-blank lines of `raw`.
    /// A successful edit also clears the selection, the done flag and the
    /// category's timer.
    pub fn edit_choices(&mut self, category: Category, raw: &str) -> EditOutcome {
        let (lines, dropped) = parse_choice_lines(raw);
        if lines.is_empty() {
            return EditOutcome::Unchanged;
        }
        let kept = lines.len();
        log::debug!("edit {}: {kept} choices, {dropped} dropped", category.as_str());

        self.state.choices[category] = lines;
        self.state.selected[category] = None;
        self.state.done[category] = false;
        self.clear_timer(category);
        self.save();
        EditOutcome::Applied { kept, dropped }
    }

    pub fn choices_text(&self, category: Category) -> String {
        self.state.choices[category].join("\n")
    }

    /// Starting an already running timer restarts its ticker rather than
    /// adding a second one.
    pub fn start_timer(&mut self, category: Category, now: Instant) {
        self.timers.start(category, now);
        self.state.timers[category].running = true;
        self.save();
    }

    pub fn stop_timer(&mut self, category: Category) {
        self.timers.stop(category);
        self.state.timers[category].running = false;
        self.save();
    }

    /// Returns whether the timer is running afterwards.
    pub fn toggle_timer(&mut self, category: Category, now: Instant) -> bool {
        if self.timers.is_active(category) {
            self.stop_timer(category);
            false
        } else {
            self.start_timer(category, now);
            true
        }
    }

    pub fn reset_timer(&mut self, category: Category) {
        self.clear_timer(category);
        self.save();
    }

    fn clear_timer(&mut self, category: Category) {
        self.timers.stop(category);
        self.state.timers[category] = TimerState::default();
    }

    /// Advance running timers by the whole seconds due at `now`. Returns
    /// whether any counter moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.timers.due(now);
        let mut advanced = false;
        for (category, &seconds) in due.iter() {
            if seconds > 0 {
                self.state.timers[category].seconds += seconds;
                advanced = true;
            }
        }
        if advanced {
            self.save();
        }
        advanced
    }

    /// New day: no selections, nothing done, all timers at zero. The
    /// choices stay.
    pub fn reset_day(&mut self) {
        log::debug!("reset day");
        self.state.selected = PerCategory::splat(None);
        self.state.done = PerCategory::splat(false);
        for category in ALL_CATEGORIES {
            self.clear_timer(category);
        }
        self.save();
    }

    pub fn clear_selections(&mut self) {
        self.state.selected = PerCategory::splat(None);
        self.state.done = PerCategory::splat(false);
        self.save();
    }
}
