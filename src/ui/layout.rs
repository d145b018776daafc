use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct DrillLayout {
    pub header_area: Rect,
    pub timer_area: Rect,
    pub glyph_area: Rect,
    pub input_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub struct QuizLayout {
    pub header_area: Rect,
    pub glyph_area: Rect,
    pub input_area: Rect,
    pub help_area: Rect,
}

pub struct VocabLayout {
    pub search_area: Rect,
    pub card_area: Rect,
    pub meaning_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_drill_chunks(area: Rect) -> DrillLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    DrillLayout {
        header_area: chunks[0],
        timer_area: chunks[1],
        glyph_area: chunks[2],
        input_area: chunks[3],
        status_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        glyph_area: chunks[1],
        input_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_vocab_chunks(area: Rect) -> VocabLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(7),
            Constraint::Length(3),
        ])
        .split(area);

    VocabLayout {
        search_area: chunks[0],
        card_area: chunks[1],
        meaning_area: chunks[2],
        help_area: chunks[3],
    }
}

/// A rectangle of `width` x `height` centred in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drill_layout() {
        let layout = calculate_drill_chunks(Rect::new(0, 0, 80, 40));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        // 38 rows after margin, 15 taken by fixed rows
        assert_eq!(layout.glyph_area.height, 23);
    }

    #[test]
    fn test_quiz_layout() {
        let layout = calculate_quiz_chunks(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.glyph_area.height, 28 - 9);
    }

    #[test]
    fn test_vocab_layout() {
        let layout = calculate_vocab_chunks(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.meaning_area.height, 7);
        assert!(layout.card_area.height >= 5);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }
}
