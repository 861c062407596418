use std::time::Duration;

/// Longest stretch of wall-clock time a single call may account for. Longer
/// gaps (a dragged window, a breakpoint) are dropped instead of replayed.
const MAX_ELAPSED: Duration = Duration::from_millis(250);

/// Turns wall-clock time into a count of fixed simulation ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    accumulator: Duration,
    running: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    /// Adds `elapsed` and returns how many whole ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }

        self.accumulator += elapsed.min(MAX_ELAPSED);

        let mut ticks = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        ticks
    }
}
