use super::enums::{Phase, TimerState};
use crate::ticker::Ticker;
use std::time::{Duration, Instant};

/// Default work phase length (25 minutes)
pub const DEFAULT_WORK_SECS: u32 = 25 * 60;
/// Default break phase length (5 minutes)
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

const READY_TEXT: &str = "Ready to start";
const PAUSED_TEXT: &str = "Paused";

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running
    Ignored,
    /// One second counted down
    Counted,
    /// The countdown hit zero and the next phase was loaded
    PhaseComplete { finished: Phase, next: Phase },
}

impl TickOutcome {
    /// True when a work phase just ended
    pub fn completed_pomodoro(&self) -> bool {
        matches!(
            self,
            TickOutcome::PhaseComplete {
                finished: Phase::Work,
                ..
            }
        )
    }
}

/// Format seconds as zero-padded MM:SS
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Work/break countdown
#[derive(Debug, Clone)]
pub struct Timer {
    work_secs: u32,
    break_secs: u32,
    /// Keep running into the next phase instead of parking in PAUSED
    auto_continue: bool,
    phase: Phase,
    remaining: u32,
    state: TimerState,
    status: &'static str,
    ticker: Ticker,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_SECS, DEFAULT_BREAK_SECS, false)
    }
}

impl Timer {
    pub fn new(work_secs: u32, break_secs: u32, auto_continue: bool) -> Self {
        Self {
            work_secs,
            break_secs,
            auto_continue,
            phase: Phase::Work,
            remaining: work_secs,
            state: TimerState::Idle,
            status: READY_TEXT,
            ticker: Ticker::every_second(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// MM:SS display of the remaining time
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }

    pub fn status_text(&self) -> &'static str {
        self.status
    }

    /// Fraction of the current phase already elapsed (0.0 to 1.0)
    pub fn phase_progress(&self) -> f64 {
        let total = self.duration_of(self.phase);
        if total == 0 {
            return 1.0;
        }
        1.0 - self.remaining as f64 / total as f64
    }

    fn duration_of(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_secs,
            Phase::Break => self.break_secs,
        }
    }

    /// Start or resume; arms the one-second tick
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Running {
            return false;
        }
        self.state = TimerState::Running;
        self.status = self.phase.banner();
        self.ticker.arm(now);
        true
    }

    /// Pause; cancels the pending tick
    pub fn pause(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.state = TimerState::Paused;
        self.status = PAUSED_TEXT;
        self.ticker.cancel();
        true
    }

    /// Back to an idle work phase at full length
    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.state = TimerState::Idle;
        self.phase = Phase::Work;
        self.remaining = self.work_secs;
        self.status = READY_TEXT;
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != TimerState::Running {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return TickOutcome::Counted;
        }

        let finished = self.phase;
        let next = finished.next();
        self.phase = next;
        self.remaining = self.duration_of(next);
        self.status = next.banner();

        if !self.auto_continue {
            self.state = TimerState::Paused;
            self.ticker.cancel();
        }

        TickOutcome::PhaseComplete { finished, next }
    }

    /// Fire every tick whose deadline has passed by `now`
    pub fn poll(&mut self, now: Instant) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        while self.is_running() && self.ticker.take_due(now) {
            outcomes.push(self.tick());
        }
        outcomes
    }

    /// Time until the next scheduled tick, if one is armed
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }
}
