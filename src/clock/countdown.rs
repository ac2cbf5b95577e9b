//! Round countdown clock with timed freezes.
//!
//! Counts whole seconds down to zero. A freeze pauses it until a given
//! instant; the first tick at or after that instant thaws it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Countdown status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockStatus {
    Running,
    Frozen,
    Expired,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockTick {
    /// Frozen or already expired; nothing changed.
    Idle,
    /// One second elapsed; the new remaining time.
    Decremented(u32),
    /// This tick took the clock to zero.
    Expired,
}

/// Round countdown in whole seconds.
///
/// A freeze records the instant it ends. The first `tick` at or after
/// that instant thaws the clock and then counts normally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    remaining: u32,
    limit: u32,
    status: ClockStatus,
    frozen_until: Option<Duration>,
}

impl Clock {
    /// Start a clock at `limit` seconds.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            remaining: limit,
            limit,
            status: if limit == 0 {
                ClockStatus::Expired
            } else {
                ClockStatus::Running
            },
            frozen_until: None,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn status(&self) -> ClockStatus {
        self.status
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.status == ClockStatus::Frozen
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.status == ClockStatus::Expired
    }

    /// When the current freeze ends, if frozen.
    #[must_use]
    pub fn frozen_until(&self) -> Option<Duration> {
        self.frozen_until
    }

    /// Advance by one second at monotonic time `now`.
    pub fn tick(&mut self, now: Duration) -> ClockTick {
        if let Some(until) = self.frozen_until {
            if now >= until {
                self.unfreeze();
            }
        }

        match self.status {
            ClockStatus::Frozen | ClockStatus::Expired => ClockTick::Idle,
            ClockStatus::Running => {
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.status = ClockStatus::Expired;
                    ClockTick::Expired
                } else {
                    ClockTick::Decremented(self.remaining)
                }
            }
        }
    }

    /// Pause the countdown until `until`.
    ///
    /// Re-freezing replaces the end instant. Remaining time is untouched.
    pub fn freeze(&mut self, until: Duration) {
        if self.status == ClockStatus::Expired {
            return;
        }
        self.status = ClockStatus::Frozen;
        self.frozen_until = Some(until);
    }

    /// Resume counting immediately.
    pub fn unfreeze(&mut self) {
        self.frozen_until = None;
        if self.status == ClockStatus::Frozen {
            self.status = ClockStatus::Running;
        }
    }

    /// Add time, capped at the limit. Returns the seconds actually added.
    pub fn add_seconds(&mut self, seconds: u32) -> u32 {
        if self.status == ClockStatus::Expired {
            return 0;
        }
        let topped = self.remaining.saturating_add(seconds).min(self.limit);
        let granted = topped.saturating_sub(self.remaining);
        self.remaining = topped;
        granted
    }
}
