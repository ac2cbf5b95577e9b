//! Real-time plumbing: time sources and the one-second tick schedule.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Interval between game-clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Monotonic time, measured from an arbitrary origin.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Production time source backed by `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven time source for tests and replays.
#[derive(Debug, Default)]
pub struct ManualTime {
    now: Cell<Duration>,
}

impl ManualTime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Converts monotonic readings into whole ticks.
///
/// `start` arms the cadence; `next_tick` hands out each passed tick
/// boundary once, oldest first, stamped with the instant it fell due.
/// Cancelling disarms it, so no tick is delivered after a round ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickCadence {
    interval: Duration,
    next_due: Option<Duration>,
}

impl TickCadence {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arm the cadence; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now + self.interval);
    }

    /// Disarm the cadence.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Pop the oldest tick due at `now`, returning the instant it fell due.
    ///
    /// Call in a loop to catch up after a late poll; each tick keeps its own
    /// timestamp so time-windowed state (freezes, cooldowns) sees when it
    /// actually happened.
    pub fn next_tick(&mut self, now: Duration) -> Option<Duration> {
        let due = self.next_due?;
        if self.interval.is_zero() || now < due {
            return None;
        }
        self.next_due = Some(due + self.interval);
        Some(due)
    }

    /// Monotonic instant of the next tick, if armed.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }
}

impl Default for TickCadence {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_unarmed_cadence_is_silent() {
        let mut cadence = TickCadence::default();
        assert_eq!(cadence.next_tick(ms(10_000)), None);
    }

    #[test]
    fn test_ticks_on_whole_intervals() {
        let mut cadence = TickCadence::default();
        cadence.start(ms(200));

        assert_eq!(cadence.next_tick(ms(1100)), None);
        assert_eq!(cadence.next_tick(ms(1200)), Some(ms(1200)));
        assert_eq!(cadence.next_tick(ms(1900)), None);
        assert_eq!(cadence.next_due(), Some(ms(2200)));
    }

    #[test]
    fn test_late_poll_keeps_tick_instants() {
        let mut cadence = TickCadence::default();
        cadence.start(ms(200));

        let mut ticks = Vec::new();
        while let Some(at) = cadence.next_tick(ms(4250)) {
            ticks.push(at);
        }

        assert_eq!(ticks, vec![ms(1200), ms(2200), ms(3200), ms(4200)]);
        assert_eq!(cadence.next_due(), Some(ms(5200)));
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut cadence = TickCadence::default();
        cadence.start(ms(0));
        cadence.cancel();

        assert!(!cadence.is_armed());
        assert_eq!(cadence.next_tick(ms(5000)), None);
    }

    #[test]
    fn test_manual_time() {
        let time = ManualTime::new();
        time.advance(ms(300));
        time.advance(ms(300));
        assert_eq!(time.now(), ms(600));

        time.set(ms(50));
        assert_eq!((&time).now(), ms(50));
    }

    #[test]
    fn test_monotonic_time_advances() {
        let time = MonotonicTime::new();
        let a = time.now();
        let b = time.now();
        assert!(b >= a);
    }
}
