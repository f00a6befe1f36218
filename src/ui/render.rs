use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, AppScreen};
use crate::board::{ALL_CATEGORIES, Status};
use crate::ui::components::category_card::CategoryCard;
use crate::ui::components::confirm_dialog::ConfirmDialog;
use crate::ui::components::edit_popup::EditPopup;
use crate::ui::components::print_preview::PrintPreview;
use crate::ui::components::summary_panel::SummaryPanel;
use crate::ui::layout::{BoardLayout, centered_rect, pack_hint_lines};

const BOARD_HINTS: &[&str] = &[
    "[Tab] Card",
    "[j/k] Move",
    "[Enter/1-6] Select",
    "[Space] Done",
    "[e] Edit",
    "[s] Start/Pause",
    "[r] Reset timer",
    "[p] Print",
    "[R] Reset day",
    "[C] Clear all",
    "[q] Quit",
];

pub fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    render_board(frame, app);

    match app.screen {
        AppScreen::Board => {}
        AppScreen::EditChoices => {
            if let Some(editor) = app.editor.as_ref() {
                let popup = centered_rect(50, 50, 44, 12, area);
                frame.render_widget(EditPopup::new(app.focus, editor, &app.theme), popup);
            }
        }
        AppScreen::ConfirmResetDay => {
            let popup = centered_rect(40, 30, 44, 8, area);
            frame.render_widget(
                ConfirmDialog::new(
                    "Reset the day?",
                    "This clears timers, done boxes, and selections.",
                    &app.theme,
                ),
                popup,
            );
        }
        AppScreen::PrintPreview => {
            let popup = centered_rect(80, 90, 60, 20, area);
            frame.render_widget(
                PrintPreview::new(&app.print_text, app.print_scroll, &app.theme),
                popup,
            );
        }
    }
}

fn render_board(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let footer_lines: Vec<Line> = match app.status.as_deref() {
        Some(status) => vec![Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(colors.warning()),
        ))],
        None => pack_hint_lines(BOARD_HINTS, area.width as usize)
            .into_iter()
            .map(|hint| Line::from(Span::styled(hint, Style::default().fg(colors.muted()))))
            .collect(),
    };
    let layout = BoardLayout::new(area, footer_lines.len() as u16);

    let done_count = ALL_CATEGORIES
        .into_iter()
        .filter(|&c| app.board.status(c) == Status::Done)
        .count();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " dayboard ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {done_count}/{} missions done", ALL_CATEGORIES.len()),
            Style::default().fg(colors.muted()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    for (category, card_area) in ALL_CATEGORIES.into_iter().zip(layout.cards) {
        let focused = category == app.focus;
        frame.render_widget(
            CategoryCard::new(
                category,
                &app.board,
                focused,
                app.cursors[category],
                &app.theme,
            ),
            card_area,
        );
    }

    frame.render_widget(
        SummaryPanel::new(app.board.state(), &app.theme),
        layout.summary,
    );

    frame.render_widget(Paragraph::new(footer_lines), layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Category};
    use crate::config::Config;
    use crate::store::MemoryStorage;
    use crate::ui::test_helpers::render_frame_to_string;
    use crate::ui::text_area::TextArea;
    use crate::ui::theme::Theme;

    fn make_test_app() -> App {
        let board = Board::open(Box::new(MemoryStorage::new()));
        App::new(board, Config::default(), Theme::default())
    }

    #[test]
    fn test_board_renders_all_cards_and_summary() {
        let mut app = make_test_app();
        app.board.select(Category::Move, 0);
        app.board.set_done(Category::Move, true);

        let out = render_frame_to_string(120, 30, |frame| render(frame, &app));

        assert!(out.contains(" LEARN "));
        assert!(out.contains(" CREATE "));
        assert!(out.contains(" MOVE "));
        assert!(out.contains("1/3 missions done"));
        assert!(out.contains(" Today "));
        assert!(out.contains("10 jumping jacks"));
        assert!(out.contains("[Tab] Card"));
    }

    #[test]
    fn test_footer_wraps_hints_on_80_columns() {
        let app = make_test_app();
        let out = render_frame_to_string(80, 30, |frame| render(frame, &app));

        for hint in BOARD_HINTS {
            assert!(out.contains(hint), "missing hint {hint}");
        }
        let last = out.lines().last().unwrap_or_default();
        assert!(last.contains("[q] Quit"));
    }

    #[test]
    fn test_status_replaces_hints() {
        let mut app = make_test_app();
        app.status = Some("Selections cleared".to_string());
        let out = render_frame_to_string(120, 30, |frame| render(frame, &app));
        assert!(out.contains("Selections cleared"));
        assert!(!out.contains("[Tab] Card"));
    }

    #[test]
    fn test_overlays_render() {
        let mut app = make_test_app();

        app.editor = Some(TextArea::new("Piano"));
        app.screen = AppScreen::EditChoices;
        let out = render_frame_to_string(100, 30, |frame| render(frame, &app));
        assert!(out.contains("Edit LEARN choices"));

        app.screen = AppScreen::ConfirmResetDay;
        let out = render_frame_to_string(100, 30, |frame| render(frame, &app));
        assert!(out.contains("Reset the day?"));
        assert!(out.contains("[y] Yes"));
    }

    #[test]
    fn test_narrow_terminal_does_not_panic() {
        let app = make_test_app();
        let out = render_frame_to_string(30, 12, |frame| render(frame, &app));
        assert!(out.contains("dayboard"));
    }
}
