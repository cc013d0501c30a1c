use core::time::Duration;
use web_time::Instant;

use crate::*;

/// Clock driven by the game: started on the first accepted action, stopped when the game ends.
pub trait SessionTimer {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Timer for callers that do not track time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoTimer;

impl SessionTimer for NoTimer {
    fn start(&mut self) {}

    fn stop(&mut self) {}
}

/// Measures elapsed wall-clock time between `start` and `stop`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    frozen: Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.frozen.is_none()
    }

    /// Zero before start, frozen after stop.
    pub fn elapsed(&self) -> Duration {
        match (self.frozen, self.started_at) {
            (Some(frozen), _) => frozen,
            (None, Some(started_at)) => started_at.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}

impl SessionTimer for Stopwatch {
    fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn stop(&mut self) {
        if let Some(started_at) = self.started_at
            && self.frozen.is_none()
        {
            self.frozen = Some(started_at.elapsed());
        }
    }
}

/// A board paired with the timer that measures its game.
#[derive(Clone, Debug)]
pub struct Session<T: SessionTimer = NoTimer> {
    board: Board,
    timer: T,
    timer_started: bool,
}

impl<T: SessionTimer> Session<T> {
    pub fn new(board: Board, timer: T) -> Self {
        Self {
            board,
            timer,
            timer_started: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn into_parts(self) -> (Board, T) {
        (self.board, self.timer)
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let outcome = self.board.reveal(coords);
        self.track(outcome.has_update(), outcome.is_final());
        outcome
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        let outcome = self.board.toggle_flag(coords);
        self.track(outcome.has_update(), outcome.is_final());
        outcome
    }

    fn track(&mut self, accepted: bool, finished: bool) {
        if accepted && !self.timer_started {
            self.timer_started = true;
            self.timer.start();
            log::debug!("Timer started");
        }
        if finished {
            self.timer.stop();
            log::debug!("Timer stopped, game {:?}", self.board.state());
        }
    }
}
