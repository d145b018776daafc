use crate::models::{Feedback, Script, WordItem, is_correct_answer};
use crate::timer::{Countdown, TickOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Auto-advance durations offered on the drill screen.
pub const DRILL_SECONDS_CHOICES: [u32; 3] = [5, 10, 15];
pub const DEFAULT_DRILL_SECONDS: u32 = 10;
/// An item is retired once it has been shown this many times.
pub const MAX_SHOWS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
    Ignored,
}

#[derive(Debug)]
pub struct DrillSession {
    pub words: Vec<WordItem>,
    pub shown_counts: Vec<u8>,
    pub current_index: Option<usize>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub feedback: Option<Feedback>,
    pub countdown: Countdown,
    pub finished: bool,
    pub script: Script,
    rng: StdRng,
}

impl DrillSession {
    pub fn new(words: Vec<WordItem>, seconds: u32, script: Script) -> Self {
        Self::with_rng(words, seconds, script, StdRng::from_entropy())
    }

    pub fn with_rng(words: Vec<WordItem>, seconds: u32, script: Script, mut rng: StdRng) -> Self {
        let mut shown_counts = vec![0; words.len()];
        let current_index = if words.is_empty() {
            log::warn!("Drill started without any words");
            None
        } else {
            let first = rng.gen_range(0..words.len());
            shown_counts[first] = 1;
            log::info!("Drill started with {} words, first index {}", words.len(), first);
            Some(first)
        };

        let mut countdown = Countdown::new(seconds);
        if current_index.is_none() {
            countdown.stop();
        }

        Self {
            words,
            shown_counts,
            current_index,
            input_buffer: String::new(),
            cursor_position: 0,
            feedback: None,
            countdown,
            finished: false,
            script,
            rng,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.words.is_empty()
    }

    pub fn current_word(&self) -> Option<&WordItem> {
        self.current_index.map(|i| &self.words[i])
    }

    pub fn current_shows(&self) -> u8 {
        self.current_index
            .map(|i| self.shown_counts[i])
            .unwrap_or(0)
    }

    /// Items that have reached the show limit.
    pub fn retired(&self) -> usize {
        self.shown_counts.iter().filter(|&&c| c >= MAX_SHOWS).count()
    }

    pub fn find_next(&mut self) -> Option<usize> {
        let candidates: Vec<usize> = self
            .shown_counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count < MAX_SHOWS)
            .map(|(i, _)| i)
            .collect();

        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.gen_range(0..candidates.len())])
    }

    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        match self.find_next() {
            Some(next) => {
                self.current_index = Some(next);
                self.shown_counts[next] += 1;
                self.input_buffer.clear();
                self.cursor_position = 0;
                self.countdown.reset();
                log::debug!(
                    "Drill advanced to index {} (shown {})",
                    next,
                    self.shown_counts[next]
                );
            }
            None => {
                self.finished = true;
                self.feedback = Some(Feedback::Completed);
                self.countdown.stop();
                log::info!("Drill finished, {} words retired", self.retired());
            }
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.finished {
            return SubmitOutcome::Ignored;
        }
        let Some(word) = self.current_word() else {
            return SubmitOutcome::Ignored;
        };

        if is_correct_answer(&self.input_buffer, &word.roma) {
            self.advance();
            SubmitOutcome::Correct
        } else {
            self.feedback = Some(Feedback::Retry);
            SubmitOutcome::Incorrect
        }
    }

    /// One second elapsed. Returns true when the countdown expired and the
    /// drill moved on.
    pub fn tick(&mut self) -> bool {
        if self.finished || self.current_index.is_none() {
            return false;
        }
        match self.countdown.tick() {
            TickOutcome::Expired => {
                log::debug!("Drill countdown expired, auto-advancing");
                self.advance();
                true
            }
            TickOutcome::Running | TickOutcome::Stopped => false,
        }
    }

    pub fn set_seconds(&mut self, seconds: u32) {
        if !DRILL_SECONDS_CHOICES.contains(&seconds) {
            return;
        }
        self.countdown.set_duration(seconds);
        if self.finished || self.current_index.is_none() {
            self.countdown.stop();
        }
    }

    pub fn cycle_seconds(&mut self) {
        let current = self.countdown.duration();
        let pos = DRILL_SECONDS_CHOICES
            .iter()
            .position(|&s| s == current)
            .unwrap_or(0);
        let next = DRILL_SECONDS_CHOICES[(pos + 1) % DRILL_SECONDS_CHOICES.len()];
        self.set_seconds(next);
    }

    pub fn toggle_script(&mut self) {
        self.script = self.script.toggled();
    }
}
