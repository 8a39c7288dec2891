use std::time::{Duration, Instant};

/// Default UI refresh interval in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 250;

/// Timer tick period in milliseconds
pub const TICK_PERIOD_MS: u64 = 1000;

/// Get UI refresh duration
pub fn refresh_duration() -> Duration {
    Duration::from_millis(DEFAULT_REFRESH_MS)
}

/// A self re-arming one-shot deadline.
///
/// Models a delayed callback: `arm` schedules the next firing, `take_due`
/// consumes every firing whose deadline has passed and re-arms after each one,
/// `cancel` drops the pending firing.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::from_millis(TICK_PERIOD_MS))
    }

    /// Schedule the next firing one period from `now`
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    /// Consume one due firing, re-arming for the following period
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if deadline <= now => {
                self.next = Some(deadline + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending firing
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next.map(|deadline| deadline.saturating_duration_since(now))
    }
}
