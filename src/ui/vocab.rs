use super::{active_time_title, draw_help, draw_no_data};
use crate::ui::layout::calculate_vocab_chunks;
use crate::vocab::VocabBrowser;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_vocab(f: &mut Frame, browser: &VocabBrowser, active_seconds: u64) {
    if browser.list.is_empty() {
        draw_no_data(f, "No vocabulary data.");
        return;
    }

    let layout = calculate_vocab_chunks(f.area());

    let search_style = if browser.editing_query {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let query_text = if browser.query.is_empty() && !browser.editing_query {
        Span::styled(
            "Search (kana/kanji/eng/vni), press /",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::from(browser.query.clone())
    };
    let counter = format!(
        " {} / {} ",
        if browser.is_empty() { 0 } else { browser.index + 1 },
        browser.len()
    );
    let search = Paragraph::new(Line::from(query_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(counter)
            .title(active_time_title(active_seconds)),
    );
    f.render_widget(search, layout.search_area);

    if browser.editing_query {
        let column = crate::utils::cursor_column(&browser.query, usize::MAX) as u16;
        f.set_cursor_position((layout.search_area.x + 1 + column, layout.search_area.y + 1));
    }

    let Some(item) = browser.current() else {
        let empty = Paragraph::new("No matching words.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, layout.card_area);
        draw_help(f, layout.help_area, &[("/", "Search"), ("Esc", "Menu")]);
        return;
    };

    let mut spans = vec![Span::styled(
        item.key.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(kanji) = &item.detail.kanji {
        spans.push(Span::from("   "));
        spans.push(Span::styled(kanji.clone(), Style::default().fg(Color::Gray)));
    }
    let top = (layout.card_area.height.saturating_sub(2) / 2) as usize;
    let mut card_lines = vec![Line::from(""); top];
    card_lines.push(Line::from(spans));
    let card = Paragraph::new(card_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Vocabulary N5"));
    f.render_widget(card, layout.card_area);

    let meaning_lines = if browser.show_meaning {
        let label = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();
        if let Some(eng) = &item.detail.eng {
            lines.push(Line::from(vec![Span::styled("EN: ", label), Span::from(eng.clone())]));
        }
        if let Some(vni) = &item.detail.vni {
            lines.push(Line::from(vec![Span::styled("VI: ", label), Span::from(vni.clone())]));
        }
        if let Some(example) = &item.detail.example {
            lines.push(Line::from(""));
            lines.push(Line::from(example.clone()));
            if let Some(example_vni) = &item.detail.example_vni {
                lines.push(Line::from(Span::styled(
                    example_vni.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
        lines
    } else {
        vec![Line::from(Span::styled(
            "Press Space to show the meaning",
            Style::default().fg(Color::DarkGray),
        ))]
    };
    let meaning = Paragraph::new(meaning_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Meaning"));
    f.render_widget(meaning, layout.meaning_area);

    let toggle_label = if browser.show_meaning {
        "Hide Meaning"
    } else {
        "Show Meaning"
    };
    draw_help(
        f,
        layout.help_area,
        &[
            ("←/p", "Prev"),
            ("→/n", "Next"),
            ("Space", toggle_label),
            ("s", "Shuffle"),
            ("/", "Search"),
            ("Esc", "Menu"),
        ],
    );
}
