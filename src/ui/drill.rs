use super::{draw_glyph, draw_help, draw_input, draw_no_data, draw_script_tabs};
use crate::drill::{DRILL_SECONDS_CHOICES, DrillSession, MAX_SHOWS};
use crate::models::Feedback;
use crate::ui::layout::calculate_drill_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_drill(f: &mut Frame, session: &DrillSession, active_seconds: u64) {
    if !session.has_data() {
        draw_no_data(f, "No data.");
        return;
    }

    let layout = calculate_drill_chunks(f.area());
    draw_script_tabs(f, layout.header_area, " Kana Drill ", session.script, active_seconds);

    let mut timer_spans = vec![Span::from("Auto-advance after: ")];
    for seconds in DRILL_SECONDS_CHOICES {
        let label = format!(" {}s ", seconds);
        if seconds == session.countdown.duration() {
            timer_spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        } else {
            timer_spans.push(Span::from(label));
        }
    }
    timer_spans.push(Span::styled(
        format!("   Remaining: {}s", session.countdown.remaining()),
        Style::default().fg(Color::Yellow),
    ));
    let timer = Paragraph::new(Line::from(timer_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(timer, layout.timer_area);

    if session.finished {
        draw_glyph(
            f,
            layout.glyph_area,
            Feedback::Completed.message(),
            Some("Press Esc to return to the menu"),
        );
    } else if let Some(word) = session.current_word() {
        draw_glyph(f, layout.glyph_area, word.glyph(session.script), None);
    }

    draw_input(
        f,
        layout.input_area,
        &session.input_buffer,
        session.cursor_position,
        !session.finished,
    );

    let status = match &session.feedback {
        Some(Feedback::Retry) => Line::from(Span::styled(
            Feedback::Retry.message(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        _ => {
            let position = session.current_index.map(|i| i + 1).unwrap_or(0);
            Line::from(format!(
                "Shown: {} / {}    Word: {} / {}    Retired: {}",
                session.current_shows(),
                MAX_SHOWS,
                position,
                session.words.len(),
                session.retired()
            ))
        }
    };
    let status = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, layout.status_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("Enter/Space", "Submit"),
            ("Tab", "Hiragana/Katakana"),
            ("Ctrl+T", "Timer"),
            ("Esc", "Menu"),
        ],
    );
}
