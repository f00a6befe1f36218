use std::fmt::Write;

use chrono::NaiveDate;

use crate::board::state::BoardState;
use crate::board::{ALL_CATEGORIES, Category};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Unselected,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unselected => "-",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub category: Category,
    pub task: String,
    pub status: Status,
}

/// `mm:ss`. Minutes keep counting past 59.
pub fn format_time(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// `None` when nothing is selected or the stored index no longer points
/// at a choice.
pub fn selected_choice(state: &BoardState, category: Category) -> Option<&str> {
    let index = state.selected[category]?;
    state.choices[category].get(index).map(String::as_str)
}

pub fn status(state: &BoardState, category: Category) -> Status {
    match selected_choice(state, category) {
        None => Status::Unselected,
        Some(_) if state.done[category] => Status::Done,
        Some(_) => Status::InProgress,
    }
}

pub fn active_line(state: &BoardState, category: Category) -> String {
    match selected_choice(state, category) {
        Some(task) => format!("Active: {task}"),
        None => "No mission selected.".to_string(),
    }
}

pub fn summary(state: &BoardState) -> Vec<SummaryRow> {
    ALL_CATEGORIES
        .into_iter()
        .map(|category| SummaryRow {
            category,
            task: selected_choice(state, category)
                .unwrap_or("Nothing selected")
                .to_string(),
            status: status(state, category),
        })
        .collect()
}

/// Plain-text rendering of the whole board for printing or piping.
pub fn print_view(state: &BoardState, date: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "DAILY MISSION BOARD");
    let _ = writeln!(out, "{}", date.format("%A, %B %-d, %Y"));

    for category in ALL_CATEGORIES {
        let _ = writeln!(out);
        let check = if state.done[category] { "[x]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "{}  {check} done  {}",
            category.label(),
            format_time(state.timers[category].seconds)
        );
        for (i, choice) in state.choices[category].iter().enumerate() {
            let marker = if state.selected[category] == Some(i) { ">" } else { " " };
            let _ = writeln!(out, " {marker} {}. {choice}", i + 1);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "SUMMARY");
    for row in summary(state) {
        let _ = writeln!(
            out,
            "  {:<7} {:<32} {}",
            row.category.label(),
            row.task,
            row.status.as_str()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_status_transitions() {
        let mut state = BoardState::default();
        assert_eq!(status(&state, Category::Learn), Status::Unselected);

        state.done.learn = true;
        assert_eq!(status(&state, Category::Learn), Status::Unselected);

        state.selected.learn = Some(0);
        assert_eq!(status(&state, Category::Learn), Status::Done);

        state.done.learn = false;
        assert_eq!(status(&state, Category::Learn), Status::InProgress);
    }

    #[test]
    fn test_stale_index_reads_as_unselected() {
        let mut state = BoardState::default();
        state.selected.create = Some(9);
        assert_eq!(selected_choice(&state, Category::Create), None);
        assert_eq!(active_line(&state, Category::Create), "No mission selected.");
        assert_eq!(status(&state, Category::Create), Status::Unselected);
    }

    #[test]
    fn test_summary_rows_in_fixed_order() {
        let mut state = BoardState::default();
        state.selected.r#move = Some(1);
        state.done.r#move = true;
        state.selected.create = Some(2);

        let rows = summary(&state);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, Category::Learn);
        assert_eq!(rows[0].task, "Nothing selected");
        assert_eq!(rows[0].status.as_str(), "-");
        assert_eq!(rows[1].task, "Write 3 sentences");
        assert_eq!(rows[1].status.as_str(), "In progress");
        assert_eq!(rows[2].task, "Walk outside 5 minutes");
        assert_eq!(rows[2].status.as_str(), "Done");
    }

    #[test]
    fn test_print_view_marks_selection_and_time() {
        let mut state = BoardState::default();
        state.selected.learn = Some(1);
        state.done.learn = true;
        state.timers.learn.seconds = 125;
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let text = print_view(&state, date);
        assert!(text.starts_with("DAILY MISSION BOARD\nFriday, October 16, 2026\n"));
        assert!(text.contains("LEARN  [x] done  02:05"));
        assert!(text.contains(" > 2. Math: 1 page"));
        assert!(text.contains("   1. Read 10 minutes"));
        assert!(text.contains("CREATE  [ ] done  00:00"));
        assert!(text.contains("SUMMARY"));
    }
}
