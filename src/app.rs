use crate::config::ResolvedConfig;
use crate::drill::DrillSession;
use crate::models::{AppState, VocabItem, WordItem};
use crate::quiz::QuizSession;
use crate::session::{handle_drill_input, handle_quiz_input, handle_summary_input, handle_vocab_input};
use crate::timer::ActiveTime;
use crate::ui::{MenuItem, draw_drill, draw_menu, draw_quiz, draw_summary, draw_vocab};
use crate::vocab::VocabBrowser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use std::time::Instant;

/// Top-level screen state. Each screen owns its session; leaving a screen
/// drops the session together with its countdown.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub config: ResolvedConfig,
    pub menu_index: usize,
    pub drill: Option<DrillSession>,
    pub quiz: Option<QuizSession>,
    pub vocab: Option<VocabBrowser>,
    pub active_time: ActiveTime,
    pub should_quit: bool,
    words: Vec<WordItem>,
    vocab_list: Vec<VocabItem>,
}

impl App {
    pub fn new(
        config: ResolvedConfig,
        words: Vec<WordItem>,
        vocab_list: Vec<VocabItem>,
        now: Instant,
    ) -> Self {
        Self {
            state: AppState::Menu,
            config,
            menu_index: 0,
            drill: None,
            quiz: None,
            vocab: None,
            active_time: ActiveTime::started_at(now),
            should_quit: false,
            words,
            vocab_list,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn open(&mut self, item: MenuItem) {
        match item {
            MenuItem::Drill => {
                self.drill = Some(DrillSession::new(
                    self.words.clone(),
                    self.config.drill_seconds,
                    self.config.script,
                ));
                self.state = AppState::Drill;
            }
            MenuItem::Quiz => {
                self.quiz = Some(QuizSession::new(
                    self.words.clone(),
                    self.config.pool_size,
                    self.config.test_seconds,
                    self.config.script,
                ));
                self.state = AppState::Quiz;
            }
            MenuItem::Vocab => {
                self.vocab = Some(VocabBrowser::new(self.vocab_list.clone()));
                self.state = AppState::Vocab;
            }
            MenuItem::Quit => {
                self.should_quit = true;
            }
        }
        log::info!("Opened {:?}", item);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Menu => self.handle_menu_input(key),
            AppState::Drill => {
                if let Some(session) = self.drill.as_mut() {
                    handle_drill_input(session, key, &mut self.state);
                }
            }
            AppState::Quiz => {
                if let Some(session) = self.quiz.as_mut() {
                    handle_quiz_input(session, key, &mut self.state);
                }
            }
            AppState::QuizSummary => {
                if let Some(session) = self.quiz.as_mut() {
                    handle_summary_input(session, key, &mut self.state);
                }
            }
            AppState::Vocab => {
                if let Some(browser) = self.vocab.as_mut() {
                    handle_vocab_input(browser, key, &mut self.state);
                }
            }
        }

        if self.state == AppState::Menu {
            self.close_sessions();
        }
    }

    fn handle_menu_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.menu_index < MenuItem::ALL.len() - 1 {
                    self.menu_index += 1;
                }
            }
            KeyCode::Enter => self.open(MenuItem::ALL[self.menu_index]),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn close_sessions(&mut self) {
        if self.drill.take().is_some() {
            log::debug!("Drill session closed");
        }
        if self.quiz.take().is_some() {
            log::debug!("Test session closed");
        }
        self.vocab = None;
    }

    /// Dispatches one elapsed second to the active screen.
    pub fn tick(&mut self) {
        match self.state {
            AppState::Drill => {
                if let Some(session) = self.drill.as_mut() {
                    session.tick();
                }
            }
            AppState::Quiz => {
                if let Some(session) = self.quiz.as_mut()
                    && session.tick()
                {
                    self.state = AppState::QuizSummary;
                }
            }
            _ => {}
        }
    }

    /// Reset generation of the countdown on screen, if any.
    pub fn countdown_generation(&self) -> Option<u64> {
        match self.state {
            AppState::Drill => self.drill.as_ref().map(|s| s.countdown.resets()),
            AppState::Quiz => self.quiz.as_ref().map(|s| s.countdown.resets()),
            _ => None,
        }
    }

    pub fn focus_lost(&mut self, now: Instant) {
        self.active_time.pause(now);
    }

    pub fn focus_gained(&mut self, now: Instant) {
        self.active_time.resume(now);
    }

    pub fn draw(&self, f: &mut Frame, now: Instant) {
        let active = self.active_time.seconds(now);
        match self.state {
            AppState::Menu => draw_menu(f, self.menu_index, self.words.len(), active),
            AppState::Drill => {
                if let Some(session) = &self.drill {
                    draw_drill(f, session, active);
                }
            }
            AppState::Quiz => {
                if let Some(session) = &self.quiz {
                    draw_quiz(f, session, active);
                }
            }
            AppState::QuizSummary => {
                if let Some(session) = &self.quiz {
                    draw_summary(f, session);
                }
            }
            AppState::Vocab => {
                if let Some(browser) = &self.vocab {
                    draw_vocab(f, browser, active);
                }
            }
        }
    }
}
