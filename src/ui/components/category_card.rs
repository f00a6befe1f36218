use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::board::view::format_time;
use crate::board::{Board, Category, view};
use crate::ui::theme::Theme;

pub struct CategoryCard<'a> {
    pub category: Category,
    pub board: &'a Board,
    pub focused: bool,
    pub cursor: usize,
    pub theme: &'a Theme,
}

impl<'a> CategoryCard<'a> {
    pub fn new(
        category: Category,
        board: &'a Board,
        focused: bool,
        cursor: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            category,
            board,
            focused,
            cursor,
            theme,
        }
    }
}

/// Fit `text` into `width` chars, ending in "..." when cut.
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

impl Widget for CategoryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let category = self.category;

        let border_color = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", category.label()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let selected = self.board.selected(category);
        let mut lines: Vec<Line> = Vec::new();

        for (i, choice) in self.board.choices(category).iter().enumerate() {
            let is_selected = selected == Some(i);
            let is_cursor = self.focused && i == self.cursor;
            let badge = if is_selected {
                "Selected".to_string()
            } else {
                format!("Option {}", i + 1)
            };
            let pointer = if is_cursor { "> " } else { "  " };
            let text_width = width.saturating_sub(pointer.len() + badge.len() + 1);
            let text = fit(choice, text_width);
            let pad = width.saturating_sub(pointer.len() + text.chars().count() + badge.len());

            let mut row_style = Style::default().fg(colors.fg());
            if is_selected {
                row_style = row_style
                    .fg(colors.selected_fg())
                    .bg(colors.selected_bg())
                    .add_modifier(Modifier::BOLD);
            } else if is_cursor {
                row_style = row_style.bg(colors.cursor_bg());
            }
            let badge_style = if is_selected {
                row_style
            } else {
                row_style.fg(colors.muted()).remove_modifier(Modifier::BOLD)
            };

            lines.push(Line::from(vec![
                Span::styled(pointer, row_style),
                Span::styled(text, row_style),
                Span::styled(" ".repeat(pad), row_style),
                Span::styled(badge, badge_style),
            ]));
        }

        lines.push(Line::from(""));

        let done = self.board.is_done(category);
        let (check, check_style) = if done {
            ("[x] Done", Style::default().fg(colors.success()))
        } else {
            ("[ ] Done", Style::default().fg(colors.fg()))
        };
        lines.push(Line::from(Span::styled(check, check_style)));

        let active = view::active_line(self.board.state(), category);
        lines.push(Line::from(Span::styled(
            fit(&active, width),
            Style::default().fg(colors.muted()),
        )));

        let running = self.board.timer_active(category);
        let (state_label, timer_color) = if running {
            ("running", colors.timer_running())
        } else {
            ("paused", colors.timer_paused())
        };
        lines.push(Line::from(vec![
            Span::styled("Timer ", Style::default().fg(colors.fg())),
            Span::styled(
                format_time(self.board.timer(category).seconds),
                Style::default()
                    .fg(timer_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {state_label}"), Style::default().fg(colors.muted())),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;
    use crate::ui::test_helpers::render_widget_to_string;

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("Walk outside", 20), "Walk outside");
        assert_eq!(fit("Walk outside", 8), "Walk ...");
        assert_eq!(fit("Walk", 2), "Wa");
    }

    #[test]
    fn test_card_shows_badges_checkbox_and_timer() {
        let mut board = Board::open(Box::new(MemoryStorage::new()));
        board.select(Category::Learn, 1);
        board.set_done(Category::Learn, true);
        let theme = Theme::default();

        let out = render_widget_to_string(40, 12, |area, buf| {
            CategoryCard::new(Category::Learn, &board, true, 0, &theme).render(area, buf);
        });

        assert!(out.contains(" LEARN "));
        assert!(out.contains("> Read 10 minutes"));
        assert!(out.contains("Option 1"));
        assert!(out.contains("Math: 1 page"));
        assert!(out.contains("Selected"));
        assert!(out.contains("Option 3"));
        assert!(out.contains("[x] Done"));
        assert!(out.contains("Active: Math: 1 page"));
        assert!(out.contains("Timer 00:00  paused"));
    }

    #[test]
    fn test_unfocused_card_has_no_pointer() {
        let board = Board::open(Box::new(MemoryStorage::new()));
        let theme = Theme::default();

        let out = render_widget_to_string(40, 12, |area, buf| {
            CategoryCard::new(Category::Move, &board, false, 0, &theme).render(area, buf);
        });

        assert!(!out.contains("> "));
        assert!(out.contains("[ ] Done"));
        assert!(out.contains("No mission selected."));
    }
}
