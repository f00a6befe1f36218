use std::time::Instant;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, AppScreen};
use crate::ui::text_area::InputResult;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Only Press: Release/Repeat would double up toggles
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Board => handle_board_key(app, key, now),
        AppScreen::EditChoices => handle_edit_key(app, key),
        AppScreen::ConfirmResetDay => handle_confirm_key(app, key),
        AppScreen::PrintPreview => handle_print_key(app, key),
    }
}

fn handle_board_key(app: &mut App, key: KeyEvent, now: Instant) {
    app.status = None;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.focus_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Enter => app.select_at_cursor(),
        KeyCode::Char(ch @ '1'..='6') => app.select_option(ch as usize - '1' as usize),
        KeyCode::Char(' ') | KeyCode::Char('d') => app.toggle_done(),
        KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('s') => app.toggle_timer(now),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Char('R') => app.request_reset_day(),
        KeyCode::Char('C') => app.clear_selections(),
        KeyCode::Char('p') => app.open_print_preview(Local::now().date_naive()),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let Some(editor) = app.editor.as_mut() else {
        app.screen = AppScreen::Board;
        return;
    };
    match editor.handle(key) {
        InputResult::Continue => {}
        InputResult::Submit => app.submit_edit(),
        InputResult::Cancel => app.cancel_edit(),
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_reset_day(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_reset_day(),
        _ => {}
    }
}

fn handle_print_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('p') | KeyCode::Esc | KeyCode::Char('q') => app.close_print_preview(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_print(true),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_print(false),
        _ => {}
    }
}
