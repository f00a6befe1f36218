use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Print-friendly text of the board, shown without card decoration.
pub struct PrintPreview<'a> {
    pub text: &'a str,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl<'a> PrintPreview<'a> {
    pub fn new(text: &'a str, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            text,
            scroll,
            theme,
        }
    }
}

impl Widget for PrintPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Print view ")
            .title_bottom(" [j/k] Scroll  [p/Esc] Close  (dayboard --print writes this to stdout) ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()));

        Paragraph::new(self.text)
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
