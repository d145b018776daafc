use crate::quiz::QuizSession;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title_text = format!(
        "Finished! Score: {} / {}{}",
        session.score,
        session.pool.len(),
        if session.timed_out { " (time up)" } else { "" }
    );
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(format!(
        "Started: {}   Answered: {} / {}",
        session.started_at.format("%Y-%m-%d %H:%M"),
        session.results.len(),
        session.pool.len()
    )));
    summary_text.push_line(Line::from(""));

    for (i, result) in session.results.iter().enumerate() {
        let word = &session.words[result.word_index];
        let (mark, style) = if result.correct {
            ("[✓]", Style::default().fg(Color::Green))
        } else {
            ("[✗]", Style::default().fg(Color::Red))
        };
        let answer = if result.user_answer.is_empty() {
            "(blank)".to_string()
        } else {
            truncate_string(&result.user_answer, 24)
        };
        summary_text.push_line(Line::from(vec![
            Span::styled(mark, style),
            Span::from(format!(
                " {}. {} {}  Your answer: {}  Expected: {}",
                i + 1,
                word.hiragana,
                word.kana,
                answer,
                word.roma
            )),
        ]));
    }

    let unanswered = session.pool.len().saturating_sub(session.results.len());
    if unanswered > 0 {
        summary_text.push_line(Line::from(""));
        summary_text.push_line(Line::from(Span::styled(
            format!("{} question(s) left unanswered", unanswered),
            Style::default().fg(Color::Yellow),
        )));
    }

    let summary = Paragraph::new(summary_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(summary, chunks[1]);

    super::draw_help(f, chunks[2], &[("r", "Try Again"), ("m/Esc", "Main Menu")]);
}
