//! Scoring: combo streaks, milestone power-ups, and the final tally.
//!
//! ## Per-guess order
//!
//! For each correct guess the round engine:
//! 1. Computes the base award (`base_points` times any lucky multiplier).
//! 2. Advances `ComboState` and adds its point bonus.
//! 3. Applies a pending points doubler to the whole award.
//! 4. Adds the award to the score and evaluates `PowerUpState` milestones
//!    against the new streak and score.
//!
//! `finalize` runs once after the round ends.

pub mod combo;
pub mod finalize;
pub mod power_ups;

pub use combo::{ComboState, ComboUpdate};
pub use finalize::{finalize, finalize_at_rate, FinalScore, ScoreRating, TIME_BONUS_PER_SECOND};
pub use power_ups::{Milestone, MilestoneKind, MilestoneSet, PowerUpReward, PowerUpState};
