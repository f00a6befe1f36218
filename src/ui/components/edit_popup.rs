use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::board::{Category, MAX_CHOICES};
use crate::ui::text_area::TextArea;
use crate::ui::theme::Theme;

pub struct EditPopup<'a> {
    pub category: Category,
    pub input: &'a TextArea,
    pub theme: &'a Theme,
}

impl<'a> EditPopup<'a> {
    pub fn new(category: Category, input: &'a TextArea, theme: &'a Theme) -> Self {
        Self {
            category,
            input,
            theme,
        }
    }
}

impl Widget for EditPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(format!(" Edit {} choices (one per line) ", self.category.label()))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let (cursor_row, cursor_col) = self.input.cursor();
        let text_style = Style::default().fg(colors.fg());
        let cursor_style = Style::default().fg(colors.bg()).bg(colors.fg());

        // Blank lines are skipped on save, so only filled lines count
        // toward the limit. Filled lines past it are dimmed.
        let mut filled = 0;
        let lines: Vec<Line> = self
            .input
            .lines()
            .iter()
            .enumerate()
            .map(|(row, line)| {
                if !line.trim().is_empty() {
                    filled += 1;
                }
                let style = if filled > MAX_CHOICES && !line.trim().is_empty() {
                    Style::default().fg(colors.muted())
                } else {
                    text_style
                };
                if row != cursor_row {
                    return Line::from(Span::styled(line.clone(), style));
                }
                let before: String = line.chars().take(cursor_col).collect();
                let at: Option<char> = line.chars().nth(cursor_col);
                let after: String = line.chars().skip(cursor_col + 1).collect();
                Line::from(vec![
                    Span::styled(before, style),
                    Span::styled(at.map_or(" ".to_string(), String::from), cursor_style),
                    Span::styled(after, style),
                ])
            })
            .collect();

        // Keep the cursor row visible.
        let visible = layout[0].height as usize;
        let scroll = cursor_row.saturating_sub(visible.saturating_sub(1));
        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(layout[0], buf);

        let hint = Paragraph::new(Line::from(Span::styled(
            format!("[Ctrl-S] Save  [Esc] Cancel  (max {MAX_CHOICES})"),
            Style::default()
                .fg(colors.muted())
                .add_modifier(Modifier::ITALIC),
        )));
        hint.render(layout[1], buf);
    }
}
