use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::board::view::{self, Status};
use crate::board::BoardState;
use crate::ui::theme::Theme;

const LABEL_WIDTH: usize = 8;
const STATUS_WIDTH: usize = 12;

/// One row per category: the chosen task and how far along it is.
pub struct SummaryPanel<'a> {
    pub state: &'a BoardState,
    pub theme: &'a Theme,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(state: &'a BoardState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Today ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let task_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + STATUS_WIDTH + 1);

        let lines: Vec<Line> = view::summary(self.state)
            .into_iter()
            .map(|row| {
                let (task_color, status_color) = match row.status {
                    Status::Done => (colors.fg(), colors.success()),
                    Status::InProgress => (colors.fg(), colors.warning()),
                    Status::Unselected => (colors.muted(), colors.muted()),
                };
                let task: String = row.task.chars().take(task_width).collect();
                Line::from(vec![
                    Span::styled(
                        format!("{:<LABEL_WIDTH$}", row.category.label()),
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{task:<task_width$} "),
                        Style::default().fg(task_color),
                    ),
                    Span::styled(row.status.as_str(), Style::default().fg(status_color)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
