use crate::drill::SubmitOutcome;
use crate::models::{Script, WordItem, is_correct_answer};
use crate::timer::{Countdown, TickOutcome};
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub const DEFAULT_POOL_SIZE: usize = 10;
pub const DEFAULT_TEST_SECONDS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    pub word_index: usize,
    pub user_answer: String,
    pub correct: bool,
}

/// A timed test over a shuffled, fixed-size pool of words.
#[derive(Debug)]
pub struct QuizSession {
    pub words: Vec<WordItem>,
    pub pool: Vec<usize>,
    pub position: usize,
    pub score: usize,
    pub results: Vec<QuestionResult>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub countdown: Countdown,
    pub finished: bool,
    pub timed_out: bool,
    pub script: Script,
    pub started_at: DateTime<Local>,
    pool_size: usize,
    rng: StdRng,
}

impl QuizSession {
    pub fn new(words: Vec<WordItem>, pool_size: usize, seconds: u32, script: Script) -> Self {
        Self::with_rng(words, pool_size, seconds, script, StdRng::from_entropy())
    }

    pub fn with_rng(
        words: Vec<WordItem>,
        pool_size: usize,
        seconds: u32,
        script: Script,
        rng: StdRng,
    ) -> Self {
        let mut session = Self {
            words,
            pool: Vec::new(),
            position: 0,
            score: 0,
            results: Vec::new(),
            input_buffer: String::new(),
            cursor_position: 0,
            countdown: Countdown::new(seconds),
            finished: false,
            timed_out: false,
            script,
            started_at: Local::now(),
            pool_size,
            rng,
        };
        session.restart();
        session
    }

    /// Reshuffles a new pool and starts the clock again.
    pub fn restart(&mut self) {
        let mut indices: Vec<usize> = (0..self.words.len()).collect();
        indices.shuffle(&mut self.rng);
        indices.truncate(self.pool_size.min(self.words.len()));

        self.pool = indices;
        self.position = 0;
        self.score = 0;
        self.results.clear();
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.finished = false;
        self.timed_out = false;
        self.started_at = Local::now();
        self.countdown.reset();
        if self.pool.is_empty() {
            log::warn!("Test started without any words");
            self.countdown.stop();
        } else {
            log::info!(
                "Test started: {} questions, {}s",
                self.pool.len(),
                self.countdown.duration()
            );
        }
    }

    pub fn has_data(&self) -> bool {
        !self.pool.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.pool.get(self.position).copied()
    }

    pub fn current_word(&self) -> Option<&WordItem> {
        self.current_index().map(|i| &self.words[i])
    }

    pub fn advance(&mut self) {
        let next = self.position + 1;
        if next >= self.pool.len() {
            self.finish(false);
            return;
        }
        self.position = next;
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    /// Records the answer and moves on whether or not it was right.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.finished {
            return SubmitOutcome::Ignored;
        }
        let Some(word_index) = self.current_index() else {
            return SubmitOutcome::Ignored;
        };

        let correct = is_correct_answer(&self.input_buffer, &self.words[word_index].roma);
        if correct {
            self.score += 1;
        }
        self.results.push(QuestionResult {
            word_index,
            user_answer: self.input_buffer.trim().to_string(),
            correct,
        });
        self.advance();

        if correct {
            SubmitOutcome::Correct
        } else {
            SubmitOutcome::Incorrect
        }
    }

    pub fn tick(&mut self) -> bool {
        if self.finished {
            return false;
        }
        match self.countdown.tick() {
            TickOutcome::Expired => {
                self.finish(true);
                true
            }
            TickOutcome::Running | TickOutcome::Stopped => false,
        }
    }

    pub fn toggle_script(&mut self) {
        self.script = self.script.toggled();
    }

    fn finish(&mut self, timed_out: bool) {
        self.finished = true;
        self.timed_out = timed_out;
        self.countdown.stop();
        log::info!(
            "Test finished: {}/{}{}",
            self.score,
            self.pool.len(),
            if timed_out { " (time up)" } else { "" }
        );
    }
}
