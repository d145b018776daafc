#[cfg(test)]
mod ui_render_tests {
    use crate::drill::DrillSession;
    use crate::models::{Script, VocabDetail, VocabItem, WordItem};
    use crate::quiz::QuizSession;
    use crate::ui::{MenuItem, draw_drill, draw_menu, draw_quiz, draw_summary, draw_vocab};
    use crate::vocab::VocabBrowser;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Frame, Terminal, backend::TestBackend};

    fn render(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn words() -> Vec<WordItem> {
        vec![
            WordItem {
                hiragana: "あ".to_string(),
                kana: "ア".to_string(),
                roma: "a".to_string(),
                kanji: "安".to_string(),
            },
            WordItem {
                hiragana: "か".to_string(),
                kana: "カ".to_string(),
                roma: "ka".to_string(),
                kanji: "加".to_string(),
            },
            WordItem {
                hiragana: "さ".to_string(),
                kana: "サ".to_string(),
                roma: "sa".to_string(),
                kanji: "左".to_string(),
            },
        ]
    }

    fn drill() -> DrillSession {
        DrillSession::with_rng(words(), 10, Script::Hiragana, StdRng::seed_from_u64(11))
    }

    fn quiz() -> QuizSession {
        QuizSession::with_rng(words(), 10, 120, Script::Hiragana, StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_drill_shows_current_glyph_and_counters() {
        let session = drill();
        let glyph = session.current_word().unwrap().hiragana.clone();
        let text = render(80, 30, |f| draw_drill(f, &session, 0));

        assert!(text.contains(&glyph));
        assert!(text.contains("Kana Drill"));
        assert!(text.contains("Remaining: 10s"));
        assert!(text.contains("Shown: 1 / 2"));
        assert!(text.contains("Word:"));
        assert!(text.contains("Active: 00:00:00"));
    }

    #[test]
    fn test_drill_katakana_tab_shows_katakana() {
        let mut session = drill();
        session.toggle_script();
        let kana = session.current_word().unwrap().kana.clone();
        let text = render(80, 30, |f| draw_drill(f, &session, 0));
        assert!(text.contains(&kana));
    }

    #[test]
    fn test_drill_retry_message() {
        let mut session = drill();
        session.input_buffer = "zz".to_string();
        session.submit();
        let text = render(80, 30, |f| draw_drill(f, &session, 0));
        assert!(text.contains("Wrong! Try again."));
        assert!(text.contains("zz"));
    }

    #[test]
    fn test_drill_completion_message() {
        let mut session = drill();
        while !session.finished {
            let roma = session.current_word().unwrap().roma.clone();
            session.input_buffer = roma;
            session.submit();
        }
        let text = render(80, 30, |f| draw_drill(f, &session, 0));
        assert!(text.contains("Completed! No more characters to practise."));
        assert!(text.contains("Retired: 3"));
    }

    #[test]
    fn test_drill_without_words_shows_no_data() {
        let session =
            DrillSession::with_rng(Vec::new(), 10, Script::Hiragana, StdRng::seed_from_u64(0));
        let text = render(80, 30, |f| draw_drill(f, &session, 0));
        assert!(text.contains("No data."));
    }

    #[test]
    fn test_quiz_header_shows_score_time_and_position() {
        let session = quiz();
        let text = render(80, 30, |f| draw_quiz(f, &session, 65));
        assert!(text.contains("Score: 0 / 3"));
        assert!(text.contains("Time: 120s"));
        assert!(text.contains("Q1/3"));
        assert!(text.contains("Active: 00:01:05"));
    }

    #[test]
    fn test_quiz_without_words_shows_no_data() {
        let session =
            QuizSession::with_rng(Vec::new(), 10, 120, Script::Hiragana, StdRng::seed_from_u64(0));
        let text = render(80, 30, |f| draw_quiz(f, &session, 0));
        assert!(text.contains("No data to test."));
    }

    #[test]
    fn test_summary_lists_results() {
        let mut session = quiz();
        let roma = session.current_word().unwrap().roma.clone();
        session.input_buffer = roma;
        session.submit();
        session.input_buffer = "wrong".to_string();
        session.submit();
        for _ in 0..120 {
            session.tick();
        }
        let text = render(100, 30, |f| draw_summary(f, &session));
        assert!(text.contains("Finished! Score: 1 / 3 (time up)"));
        assert!(text.contains("Your answer: wrong"));
        assert!(text.contains("1 question(s) left unanswered"));
    }

    fn browser() -> VocabBrowser {
        VocabBrowser::with_rng(
            vec![VocabItem {
                key: "あさ".to_string(),
                detail: VocabDetail {
                    kanji: Some("朝".to_string()),
                    eng: Some("morning".to_string()),
                    vni: Some("buoi sang".to_string()),
                    example: None,
                    example_vni: None,
                },
            }],
            StdRng::seed_from_u64(0),
        )
    }

    #[test]
    fn test_vocab_meaning_hidden_until_toggled() {
        let mut b = browser();
        let hidden = render(80, 30, |f| draw_vocab(f, &b, 0));
        assert!(hidden.contains("Press Space to show the meaning"));
        assert!(!hidden.contains("morning"));
        assert!(hidden.contains("朝"));

        b.toggle_meaning();
        let shown = render(80, 30, |f| draw_vocab(f, &b, 0));
        assert!(shown.contains("EN: morning"));
        assert!(shown.contains("VI: buoi sang"));
        assert!(shown.contains("Hide Meaning"));
    }

    #[test]
    fn test_vocab_no_match() {
        let mut b = browser();
        b.set_query("xyz");
        let text = render(80, 30, |f| draw_vocab(f, &b, 0));
        assert!(text.contains("No matching words."));
        assert!(text.contains("0 / 0"));
    }

    #[test]
    fn test_vocab_empty_dictionary() {
        let b = VocabBrowser::with_rng(Vec::new(), StdRng::seed_from_u64(0));
        let text = render(80, 30, |f| draw_vocab(f, &b, 0));
        assert!(text.contains("No vocabulary data."));
    }

    #[test]
    fn test_menu_lists_every_entry() {
        let text = render(80, 20, |f| draw_menu(f, 1, 71, 3661));
        for item in MenuItem::ALL {
            assert!(text.contains(item.label()));
        }
        assert!(text.contains("> Timed Test"));
        assert!(text.contains("71 words loaded"));
        assert!(text.contains("Active: 01:01:01"));
    }
}
