//! Converting a finished round's raw score into the displayed result.

use serde::{Deserialize, Serialize};

/// Points per second left on the clock.
pub const TIME_BONUS_PER_SECOND: u32 = 10;

/// Displayed result of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinalScore {
    pub base_score: u32,
    pub time_bonus: u32,
    pub final_score: u32,
}

/// Compute the final score with the standard time bonus.
///
/// ```
/// use word_rush::scoring::finalize;
///
/// let result = finalize(500, 20);
/// assert_eq!(result.time_bonus, 200);
/// assert_eq!(result.final_score, 700);
/// ```
#[must_use]
pub fn finalize(raw_score: u32, remaining_seconds: u32) -> FinalScore {
    finalize_at_rate(raw_score, remaining_seconds, TIME_BONUS_PER_SECOND)
}

/// Compute the final score with a custom per-second time bonus.
#[must_use]
pub fn finalize_at_rate(raw_score: u32, remaining_seconds: u32, per_second: u32) -> FinalScore {
    let time_bonus = remaining_seconds.saturating_mul(per_second);
    FinalScore {
        base_score: raw_score,
        time_bonus,
        final_score: raw_score.saturating_add(time_bonus),
    }
}

/// Results-screen tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreRating {
    NoScore,
    GoodEffort,
    NiceJob,
    Great,
    Champion,
}

impl ScoreRating {
    #[must_use]
    pub fn from_final(score: &FinalScore) -> Self {
        match score.final_score {
            0 if score.base_score == 0 => ScoreRating::NoScore,
            s if s < 500 => ScoreRating::GoodEffort,
            s if s < 1000 => ScoreRating::NiceJob,
            s if s < 1500 => ScoreRating::Great,
            _ => ScoreRating::Champion,
        }
    }

    /// Message shown under the score.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreRating::NoScore => "No words guessed correctly. Better luck next time!",
            ScoreRating::GoodEffort => "Good effort! Keep practicing to improve your score.",
            ScoreRating::NiceJob => "Nice job! You're getting good at this.",
            ScoreRating::Great => "Great score! You're a fantastic guesser!",
            ScoreRating::Champion => "Amazing! You're a Word Guesser champion!",
        }
    }
}

impl From<&FinalScore> for ScoreRating {
    fn from(score: &FinalScore) -> Self {
        Self::from_final(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundRules;

    #[test]
    fn test_default_rules_use_standard_rate() {
        let rules = RoundRules::default();
        assert_eq!(rules.time_bonus_per_second, TIME_BONUS_PER_SECOND);
        assert_eq!(
            finalize_at_rate(400, 12, rules.time_bonus_per_second),
            finalize(400, 12)
        );
    }

    #[test]
    fn test_finalize_without_time() {
        assert_eq!(
            finalize(500, 0),
            FinalScore {
                base_score: 500,
                time_bonus: 0,
                final_score: 500,
            }
        );
    }

    #[test]
    fn test_finalize_with_time() {
        assert_eq!(
            finalize(500, 20),
            FinalScore {
                base_score: 500,
                time_bonus: 200,
                final_score: 700,
            }
        );
    }

    #[test]
    fn test_custom_rate() {
        assert_eq!(finalize_at_rate(100, 3, 0).final_score, 100);
        assert_eq!(finalize_at_rate(100, 3, 50).time_bonus, 150);
    }

    #[test]
    fn test_ratings() {
        let rate = |raw, secs| ScoreRating::from_final(&finalize(raw, secs));

        assert_eq!(rate(0, 0), ScoreRating::NoScore);
        // Time alone lifts an empty round out of the bottom tier.
        assert_eq!(rate(0, 5), ScoreRating::GoodEffort);
        assert_eq!(rate(499, 0), ScoreRating::GoodEffort);
        assert_eq!(rate(500, 0), ScoreRating::NiceJob);
        assert_eq!(rate(900, 10), ScoreRating::Great);
        assert_eq!(rate(1500, 0), ScoreRating::Champion);
    }

    #[test]
    fn test_rating_messages() {
        assert!(ScoreRating::Champion.message().contains("champion"));
        assert!(ScoreRating::NoScore.message().starts_with("No words"));
    }
}
