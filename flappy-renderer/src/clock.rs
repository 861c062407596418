use std::{fmt, time::Duration};

/// Wall-clock source for the fixed-step driver. Native and web builds read
/// time from different places.
pub trait Clock {
    type Instant: fmt::Debug + Copy;

    fn now(&self) -> Self::Instant;

    /// Time from `start` to `end`, zero if the clock went backwards.
    fn elapsed(&self, start: Self::Instant, end: Self::Instant) -> Duration;
}
