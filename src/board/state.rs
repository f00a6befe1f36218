use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::{Category, PerCategory};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerState {
    pub seconds: u64,
    pub running: bool,
}

/// The whole board: what can be picked, what was picked, what is done and
/// how long each category has been worked on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub choices: PerCategory<Vec<String>>,
    pub selected: PerCategory<Option<usize>>,
    pub done: PerCategory<bool>,
    pub timers: PerCategory<TimerState>,
}

fn default_choices(category: Category) -> Vec<String> {
    let labels: &[&str] = match category {
        Category::Learn => &["Read 10 minutes", "Math: 1 page", "Earth: watch a short video"],
        Category::Create => &["Draw for 10 minutes", "Build with LEGO", "Write 3 sentences"],
        Category::Move => &["10 jumping jacks", "Walk outside 5 minutes", "Stretch + breathe"],
    };
    labels.iter().map(|s| s.to_string()).collect()
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            choices: PerCategory::from_fn(default_choices),
            selected: PerCategory::splat(None),
            done: PerCategory::splat(false),
            timers: PerCategory::splat(TimerState::default()),
        }
    }
}

impl BoardState {
    /// Parse a stored snapshot, backfilling anything it lacks from the
    /// built-in defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let stored: StoredSnapshot = serde_json::from_str(raw)?;
        Ok(merge_with_defaults(stored, &BoardState::default()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A snapshot as found on disk. Written by an older or newer build it may
/// lack whole sub-mappings or individual categories, or carry categories
/// this build does not know.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StoredSnapshot {
    pub choices: Option<BTreeMap<String, Vec<String>>>,
    pub selected: Option<BTreeMap<String, Option<usize>>>,
    pub done: Option<BTreeMap<String, bool>>,
    pub timers: Option<BTreeMap<String, TimerState>>,
}

/// Stored values win per category; anything missing comes from `defaults`.
/// Unknown category keys are dropped.
pub fn merge_with_defaults(stored: StoredSnapshot, defaults: &BoardState) -> BoardState {
    BoardState {
        choices: merge_field(stored.choices, &defaults.choices),
        selected: merge_field(stored.selected, &defaults.selected),
        done: merge_field(stored.done, &defaults.done),
        timers: merge_field(stored.timers, &defaults.timers),
    }
}

fn merge_field<T: Clone>(
    stored: Option<BTreeMap<String, T>>,
    defaults: &PerCategory<T>,
) -> PerCategory<T> {
    let mut stored = stored.unwrap_or_default();
    PerCategory::from_fn(|c| {
        stored
            .remove(c.as_str())
            .unwrap_or_else(|| defaults[c].clone())
    })
}
