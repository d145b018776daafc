pub mod layout;
mod drill;
mod menu;
mod quiz;
mod summary;
mod vocab;

pub use drill::draw_drill;
pub use layout::{calculate_drill_chunks, calculate_quiz_chunks, calculate_vocab_chunks};
pub use menu::{MenuItem, draw_menu};
pub use quiz::draw_quiz;
pub use summary::draw_summary;
pub use vocab::draw_vocab;

use crate::models::Script;
use crate::utils::format_seconds_hms;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Tabs,
        block::Title,
    },
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Builds a help line from `(key, label)` pairs.
fn help_line(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, label) in pairs {
        spans.push(Span::styled(key.to_string(), key_style()));
        spans.push(Span::from(format!(" {}  ", label)));
    }
    Line::from(spans)
}

fn draw_help(f: &mut Frame, area: Rect, pairs: &[(&str, &str)]) {
    let help = Paragraph::new(help_line(pairs))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn active_time_title(active_seconds: u64) -> Title<'static> {
    Title::from(format!(" Active: {} ", format_seconds_hms(active_seconds)))
        .alignment(Alignment::Right)
}

/// Hiragana/Katakana tab bar with the screen title and active time.
fn draw_script_tabs(f: &mut Frame, area: Rect, title: &str, script: Script, active_seconds: u64) {
    let selected = match script {
        Script::Hiragana => 0,
        Script::Katakana => 1,
    };
    let tabs = Tabs::new(vec![Script::Hiragana.label(), Script::Katakana.label()])
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title(active_time_title(active_seconds)),
        );
    f.render_widget(tabs, area);
}

/// Large centred character, padded to the middle of `area`.
fn draw_glyph(f: &mut Frame, area: Rect, glyph: &str, caption: Option<&str>) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let body_lines = if caption.is_some() { 3 } else { 1 };
    let top = inner_height.saturating_sub(body_lines) / 2;

    let mut lines: Vec<Line> = vec![Line::from(""); top];
    lines.push(Line::from(Span::styled(
        glyph.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(caption) = caption {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Single-line romaji input box; places the terminal cursor when `focused`.
fn draw_input(f: &mut Frame, area: Rect, buffer: &str, cursor: usize, focused: bool) {
    let content = if buffer.is_empty() {
        Span::styled(
            "Type the romaji and press Enter",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::from(buffer.to_string())
    };
    let input = Paragraph::new(Line::from(content))
        .block(Block::default().borders(Borders::ALL).title("Romaji"));
    f.render_widget(input, area);

    if focused {
        let column = crate::utils::cursor_column(buffer, cursor) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position(((area.x + 1 + column).min(max_x), area.y + 1));
    }
}

fn draw_no_data(f: &mut Frame, message: &str) {
    let area = layout::centered_rect(50, 5, f.area());
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        help_line(&[("Esc", "Back to Menu")]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
