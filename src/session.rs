use crate::drill::DrillSession;
use crate::models::{AppState, Feedback};
use crate::quiz::QuizSession;
use crate::vocab::VocabBrowser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies a single-line editing key to `buffer`. `cursor` counts characters.
/// Returns false when the key is not an editing key.
fn edit_input(buffer: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    *cursor = (*cursor).min(buffer.chars().count());
    match key.code {
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        KeyCode::Right => {
            if *cursor < buffer.chars().count() {
                *cursor += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = buffer.chars().count();
            true
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                let at = byte_offset(buffer, *cursor - 1);
                buffer.remove(at);
                *cursor -= 1;
            }
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let at = byte_offset(buffer, *cursor);
            buffer.insert(at, c);
            *cursor += 1;
            true
        }
        _ => false,
    }
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn is_submit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

pub fn handle_drill_input(session: &mut DrillSession, key: KeyEvent, app_state: &mut AppState) {
    if session.feedback == Some(Feedback::Retry) {
        session.feedback = None;
    }

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        KeyCode::Tab => {
            session.toggle_script();
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            session.cycle_seconds();
        }
        _ if is_submit(&key) => {
            session.submit();
        }
        _ => {
            if !session.finished {
                edit_input(&mut session.input_buffer, &mut session.cursor_position, key);
            }
        }
    }
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
            return;
        }
        KeyCode::Tab => {
            session.toggle_script();
        }
        _ if is_submit(&key) => {
            session.submit();
        }
        _ => {
            if !session.finished {
                edit_input(&mut session.input_buffer, &mut session.cursor_position, key);
            }
        }
    }

    if session.finished {
        *app_state = AppState::QuizSummary;
    }
}

pub fn handle_summary_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Char('r') => {
            session.restart();
            *app_state = AppState::Quiz;
        }
        KeyCode::Char('m') | KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        _ => {}
    }
}

pub fn handle_vocab_input(browser: &mut VocabBrowser, key: KeyEvent, app_state: &mut AppState) {
    if browser.editing_query {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                browser.editing_query = false;
            }
            KeyCode::Backspace => {
                browser.pop_query_char();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                browser.push_query_char(c);
            }
            _ => {}
        }
        return;
    }

    // Shift/Ctrl/Alt combinations are not navigation
    if !key.modifiers.is_empty() {
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => {
            *app_state = AppState::Menu;
        }
        KeyCode::Char('/') => {
            browser.editing_query = true;
        }
        KeyCode::Left | KeyCode::Char('p') => browser.prev(),
        KeyCode::Right | KeyCode::Char('n') => browser.next(),
        KeyCode::Char(' ') | KeyCode::Enter => browser.toggle_meaning(),
        KeyCode::Char('s') => browser.shuffle(),
        _ => {}
    }
}
