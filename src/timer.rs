use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Expired,
    Stopped,
}

/// Whole-second countdown driven by one `tick()` per elapsed second.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    running: bool,
    resets: u64,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: true,
            resets: 0,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of `reset()` calls so far. The event loop watches this to
    /// realign its tick phase with the countdown.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.running = false;
            return TickOutcome::Expired;
        }
        self.remaining -= 1;
        TickOutcome::Running
    }

    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.running = true;
        self.resets += 1;
    }

    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
        self.reset();
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Time spent with the terminal focused. Paused while focus is lost.
#[derive(Debug, Clone, Default)]
pub struct ActiveTime {
    accumulated: Duration,
    started: Option<Instant>,
}

impl ActiveTime {
    pub fn started_at(now: Instant) -> Self {
        Self {
            accumulated: Duration::ZERO,
            started: Some(now),
        }
    }

    pub fn is_active(&self) -> bool {
        self.started.is_some()
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(start) = self.started.take() {
            self.accumulated += now.saturating_duration_since(start);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn seconds(&self, now: Instant) -> u64 {
        let running = self
            .started
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        (self.accumulated + running).as_secs()
    }
}

/// Keeps the one-second tick phase of the event loop aligned with the
/// active countdown: whenever the countdown is reset the next tick is a full
/// second away.
#[derive(Debug, Clone)]
pub struct TickClock {
    rate: Duration,
    last: Instant,
    generation: Option<u64>,
}

impl TickClock {
    pub fn new(rate: Duration, now: Instant) -> Self {
        Self {
            rate,
            last: now,
            generation: None,
        }
    }

    /// How long the event loop may block before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.rate
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Records the reset generation of the active countdown, restarting the
    /// phase when it changed.
    pub fn observe(&mut self, generation: Option<u64>, now: Instant) {
        if generation != self.generation {
            self.generation = generation;
            self.last = now;
        }
    }

    /// True at most once per elapsed `rate`.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.rate {
            self.last = now;
            true
        } else {
            false
        }
    }
}
