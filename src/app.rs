use std::time::Instant;

use chrono::NaiveDate;

use crate::board::view;
use crate::board::{Board, Category, EditOutcome, MAX_CHOICES, PerCategory};
use crate::config::Config;
use crate::ui::text_area::TextArea;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Board,
    EditChoices,
    ConfirmResetDay,
    PrintPreview,
}

pub struct App {
    pub screen: AppScreen,
    pub board: Board,
    pub config: Config,
    pub theme: Theme,
    pub focus: Category,
    /// Highlighted choice per card, independent of the selection.
    pub cursors: PerCategory<usize>,
    pub editor: Option<TextArea>,
    pub print_text: String,
    pub print_scroll: u16,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(board: Board, config: Config, theme: Theme) -> Self {
        let cursors = PerCategory::from_fn(|c| {
            board
                .selected(c)
                .filter(|&i| i < board.choices(c).len())
                .unwrap_or(0)
        });
        Self {
            screen: AppScreen::Board,
            board,
            config,
            theme,
            focus: Category::Learn,
            cursors,
            editor: None,
            print_text: String::new(),
            print_scroll: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.focus]
    }

    pub fn cursor_down(&mut self) {
        let len = self.board.choices(self.focus).len();
        let cursor = &mut self.cursors[self.focus];
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        let cursor = &mut self.cursors[self.focus];
        *cursor = cursor.saturating_sub(1);
    }

    pub fn select_at_cursor(&mut self) {
        self.select_option(self.cursor());
    }

    /// Select the focused card's option `index` (0-based). Indices past
    /// the end of the list are ignored.
    pub fn select_option(&mut self, index: usize) {
        if index >= self.board.choices(self.focus).len() {
            return;
        }
        self.cursors[self.focus] = index;
        self.board.select(self.focus, index);
    }

    pub fn toggle_done(&mut self) {
        self.board.toggle_done(self.focus);
    }

    pub fn begin_edit(&mut self) {
        self.editor = Some(TextArea::new(&self.board.choices_text(self.focus)));
        self.screen = AppScreen::EditChoices;
    }

    pub fn submit_edit(&mut self) {
        let Some(editor) = self.editor.take() else {
            self.screen = AppScreen::Board;
            return;
        };
        match self.board.edit_choices(self.focus, &editor.value()) {
            EditOutcome::Unchanged => {
                self.status = Some("No choices entered, kept the previous list".to_string());
            }
            EditOutcome::Applied { dropped, .. } => {
                self.cursors[self.focus] = 0;
                if dropped > 0 {
                    self.status = Some(format!(
                        "Kept the first {MAX_CHOICES} choices, dropped {dropped}"
                    ));
                }
            }
        }
        self.screen = AppScreen::Board;
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
        self.screen = AppScreen::Board;
    }

    pub fn toggle_timer(&mut self, now: Instant) {
        self.board.toggle_timer(self.focus, now);
    }

    pub fn reset_timer(&mut self) {
        self.board.reset_timer(self.focus);
    }

    pub fn request_reset_day(&mut self) {
        if self.config.confirm_reset_day {
            self.screen = AppScreen::ConfirmResetDay;
        } else {
            self.reset_day();
        }
    }

    pub fn confirm_reset_day(&mut self) {
        self.reset_day();
        self.screen = AppScreen::Board;
    }

    pub fn cancel_reset_day(&mut self) {
        self.screen = AppScreen::Board;
    }

    fn reset_day(&mut self) {
        self.board.reset_day();
        self.cursors = PerCategory::splat(0);
        self.status = Some("New day started".to_string());
    }

    pub fn clear_selections(&mut self) {
        self.board.clear_selections();
        self.status = Some("Selections cleared".to_string());
    }

    pub fn open_print_preview(&mut self, date: NaiveDate) {
        self.print_text = view::print_view(self.board.state(), date);
        self.print_scroll = 0;
        self.screen = AppScreen::PrintPreview;
    }

    pub fn close_print_preview(&mut self) {
        self.screen = AppScreen::Board;
    }

    pub fn scroll_print(&mut self, down: bool) {
        let max = self.print_text.lines().count().saturating_sub(1) as u16;
        self.print_scroll = if down {
            (self.print_scroll + 1).min(max)
        } else {
            self.print_scroll.saturating_sub(1)
        };
    }

    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.board.tick(now)
    }
}
