//! Milestone power-ups: timer freeze, skip freebies, points doubler.
//!
//! Each milestone fires at most once per threshold. Instead of three loose
//! watermark integers, fired milestones are recorded in a `MilestoneSet`
//! and the watermark for a kind is the highest value recorded for it.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PowerUpRules;

/// Milestone families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneKind {
    TimeFreeze,
    SkipFreebie,
    PointsDoubler,
}

/// A milestone that has fired, tagged with the streak or score that fired it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Milestone {
    TimeFreeze { streak: u32 },
    SkipFreebie { streak: u32 },
    PointsDoubler { score: u32 },
}

impl Milestone {
    #[must_use]
    pub fn kind(&self) -> MilestoneKind {
        match self {
            Milestone::TimeFreeze { .. } => MilestoneKind::TimeFreeze,
            Milestone::SkipFreebie { .. } => MilestoneKind::SkipFreebie,
            Milestone::PointsDoubler { .. } => MilestoneKind::PointsDoubler,
        }
    }

    /// The streak or score this milestone was recorded at.
    #[must_use]
    pub fn value(&self) -> u32 {
        match *self {
            Milestone::TimeFreeze { streak } | Milestone::SkipFreebie { streak } => streak,
            Milestone::PointsDoubler { score } => score,
        }
    }
}

/// Milestones already fired this round.
///
/// Rounds rarely fire more than a handful, so they live inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSet(SmallVec<[Milestone; 8]>);

impl MilestoneSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a milestone. Returns false if it was already recorded.
    pub fn insert(&mut self, milestone: Milestone) -> bool {
        if self.contains(&milestone) {
            return false;
        }
        self.0.push(milestone);
        true
    }

    #[must_use]
    pub fn contains(&self, milestone: &Milestone) -> bool {
        self.0.contains(milestone)
    }

    /// Highest recorded value for `kind`, or 0 if none fired yet.
    #[must_use]
    pub fn watermark(&self, kind: MilestoneKind) -> u32 {
        self.0
            .iter()
            .filter(|m| m.kind() == kind)
            .map(Milestone::value)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fired milestones in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.0.iter()
    }
}

/// Reward granted by a milestone on this guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpReward {
    /// Add `bonus_seconds` to the clock and pause it for `freeze_for`.
    TimeFreeze {
        bonus_seconds: u32,
        freeze_for: Duration,
    },
    /// A skip freebie was banked; `available` is the new stack size.
    SkipFreebie { available: u32 },
    /// The next correct guess is doubled. `threshold` is the score crossed.
    PointsDoubler { threshold: u32 },
}

/// Power-up ledger for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpState {
    /// Banked skip freebies.
    pub skip_freebies: u32,

    /// True if the next correct guess is doubled.
    pub doubler_pending: bool,

    /// Milestones fired so far.
    pub fired: MilestoneSet,
}

impl PowerUpState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate milestones after a correct guess.
    ///
    /// `streak` is the streak after the guess; `score_before` and
    /// `score_after` bracket the award. Rewards come back in a fixed order:
    /// freeze, freebie, doubler.
    pub fn evaluate(
        &mut self,
        streak: u32,
        score_before: u32,
        score_after: u32,
        rules: &PowerUpRules,
    ) -> SmallVec<[PowerUpReward; 3]> {
        let mut rewards = SmallVec::new();

        let freeze_every = rules.time_freeze_interval;
        if freeze_every > 0
            && streak >= freeze_every
            && streak % freeze_every == 0
            && streak > self.fired.watermark(MilestoneKind::TimeFreeze)
        {
            self.fired.insert(Milestone::TimeFreeze { streak });
            rewards.push(PowerUpReward::TimeFreeze {
                bonus_seconds: rules.time_freeze_seconds,
                freeze_for: Duration::from_secs(u64::from(rules.time_freeze_seconds)),
            });
        }

        let freebie_every = rules.skip_freebie_interval;
        if freebie_every > 0
            && streak >= rules.skip_freebie_offset
            && streak % freebie_every == rules.skip_freebie_offset
            && streak > self.fired.watermark(MilestoneKind::SkipFreebie)
        {
            self.fired.insert(Milestone::SkipFreebie { streak });
            self.skip_freebies += 1;
            rewards.push(PowerUpReward::SkipFreebie {
                available: self.skip_freebies,
            });
        }

        let step = rules.doubler_score_step;
        if step > 0 {
            let last = self.fired.watermark(MilestoneKind::PointsDoubler);
            let next = (last / step + 1).saturating_mul(step);
            if score_after >= next && score_before < next && !self.doubler_pending {
                self.fired.insert(Milestone::PointsDoubler { score: next });
                self.doubler_pending = true;
                rewards.push(PowerUpReward::PointsDoubler { threshold: next });
            }
        }

        rewards
    }

    /// Double `points` if a doubler is pending, clearing it.
    ///
    /// Returns the (possibly doubled) points and whether the doubler applied.
    pub fn consume_doubler_if_pending(&mut self, points: u32) -> (u32, bool) {
        if self.doubler_pending {
            self.doubler_pending = false;
            (points.saturating_mul(2), true)
        } else {
            (points, false)
        }
    }

    /// Spend one skip freebie if any are banked.
    pub fn try_spend_skip_freebie(&mut self) -> bool {
        if self.skip_freebies > 0 {
            self.skip_freebies -= 1;
            true
        } else {
            false
        }
    }
}
