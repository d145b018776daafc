use super::{active_time_title, draw_help};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Drill,
    Quiz,
    Vocab,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [MenuItem::Drill, MenuItem::Quiz, MenuItem::Vocab, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Drill => "Kana Drill: type the romaji",
            MenuItem::Quiz => "Timed Test: scored quiz against the clock",
            MenuItem::Vocab => "Vocabulary: N5 flashcards",
            MenuItem::Quit => "Quit",
        }
    }
}

pub fn draw_menu(f: &mut Frame, selected: usize, word_count: usize, active_seconds: u64) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Kana Drill v{}", env!("CARGO_PKG_VERSION")))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(active_time_title(active_seconds)),
        );
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", marker, item.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} words loaded ", word_count)),
    );
    f.render_widget(list, chunks[1]);

    draw_help(
        f,
        chunks[2],
        &[("↑/↓", "Navigate"), ("Enter", "Select"), ("Esc/Ctrl+C", "Quit")],
    );
}
