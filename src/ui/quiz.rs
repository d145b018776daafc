use super::{draw_glyph, draw_help, draw_input, draw_no_data, draw_script_tabs};
use crate::quiz::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, active_seconds: u64) {
    if !session.has_data() {
        draw_no_data(f, "No data to test.");
        return;
    }

    let layout = calculate_quiz_chunks(f.area());
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(40)])
        .split(layout.header_area);

    draw_script_tabs(f, header_chunks[0], " Timed Test ", session.script, active_seconds);

    let remaining = session.countdown.remaining();
    let time_style = if remaining <= 10 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    let progress = format!(
        "Score: {} / {}   Time: {}s   Q{}/{}",
        session.score,
        session.pool.len(),
        remaining,
        (session.position + 1).min(session.pool.len()),
        session.pool.len()
    );
    let stats = Paragraph::new(progress)
        .style(time_style)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(stats, header_chunks[1]);

    if let Some(word) = session.current_word() {
        draw_glyph(f, layout.glyph_area, word.glyph(session.script), None);
    }

    draw_input(
        f,
        layout.input_area,
        &session.input_buffer,
        session.cursor_position,
        !session.finished,
    );

    draw_help(
        f,
        layout.help_area,
        &[
            ("Enter/Space", "Answer"),
            ("Tab", "Hiragana/Katakana"),
            ("Esc", "Menu"),
            ("Ctrl+C", "Exit App"),
        ],
    );
}
