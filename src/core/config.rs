//! Round configuration types.
//!
//! Two layers of configuration:
//! - `RoundConfig`: what the host typed in (word list, time budget).
//!   Validated on construction, immutable once a round starts.
//! - `RoundRules`: scoring and timing constants. Defaults reproduce the
//!   standard game; builder methods adjust individual values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::scoring::TIME_BONUS_PER_SECOND;

/// Minimum number of words in a round.
pub const MIN_WORDS: usize = 3;

/// Longest accepted word, in characters.
pub const MAX_WORD_CHARS: usize = 49;

/// Shortest allowed round, in seconds.
pub const MIN_TIME_LIMIT_SECS: u32 = 60;

/// Longest allowed round, in seconds.
pub const MAX_TIME_LIMIT_SECS: u32 = 600;

/// Time budget offered to a new host.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 180;

/// Music volume offered to a new host.
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;

/// Split free-form host input into candidate words.
///
/// Words are separated by newlines or commas. Entries are trimmed; empty
/// entries and entries longer than `MAX_WORD_CHARS` are dropped.
///
/// ```
/// use word_rush::core::parse_word_list;
///
/// let words = parse_word_list("apple, banana\n\n cherry ,");
/// assert_eq!(words, vec!["apple", "banana", "cherry"]);
/// ```
pub fn parse_word_list(input: &str) -> Vec<String> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|word| {
            let chars = word.chars().count();
            chars > 0 && chars <= MAX_WORD_CHARS
        })
        .map(str::to_string)
        .collect()
}

/// A validated word list and time budget.
///
/// Holding a `RoundConfig` is proof that the input passed validation:
/// the engine is never constructed from anything else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundConfig {
    words: Vec<String>,
    total_time_limit_secs: u32,
}

impl RoundConfig {
    /// Validate a word list and time limit.
    pub fn new(words: Vec<String>, total_time_limit_secs: u32) -> Result<Self, ConfigError> {
        if words.len() < MIN_WORDS {
            return Err(ConfigError::TooFewWords { count: words.len() });
        }
        for (index, word) in words.iter().enumerate() {
            let chars = word.chars().count();
            if chars == 0 {
                return Err(ConfigError::EmptyWord { index });
            }
            if chars > MAX_WORD_CHARS {
                return Err(ConfigError::WordTooLong { index, chars });
            }
        }
        if !(MIN_TIME_LIMIT_SECS..=MAX_TIME_LIMIT_SECS).contains(&total_time_limit_secs) {
            return Err(ConfigError::TimeLimitOutOfRange {
                seconds: total_time_limit_secs,
            });
        }

        Ok(Self {
            words,
            total_time_limit_secs,
        })
    }

    /// Parse host input with `parse_word_list`, then validate.
    pub fn from_text(input: &str, total_time_limit_secs: u32) -> Result<Self, ConfigError> {
        Self::new(parse_word_list(input), total_time_limit_secs)
    }

    /// The words in the order the host entered them.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Round length in seconds.
    #[must_use]
    pub fn total_time_limit_secs(&self) -> u32 {
        self.total_time_limit_secs
    }
}

/// Combo streak constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboRules {
    /// Streak at which the combo point bonus starts applying.
    pub activation_threshold: u32,

    /// Extra points per correct word while the combo is active.
    pub point_bonus: u32,

    /// Streak that grants the one-off time bonus.
    pub time_bonus_threshold: u32,

    /// Seconds added by the combo time bonus.
    pub time_bonus_seconds: u32,

    /// How many times the combo time bonus can be granted per round.
    pub max_time_bonus_applications: u32,
}

impl Default for ComboRules {
    fn default() -> Self {
        Self {
            activation_threshold: 3,
            point_bonus: 50,
            time_bonus_threshold: 5,
            time_bonus_seconds: 5,
            max_time_bonus_applications: 1,
        }
    }
}

/// Milestone power-up constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpRules {
    /// A timer freeze fires at every multiple of this streak.
    pub time_freeze_interval: u32,

    /// Seconds added by a timer freeze, and how long the countdown pauses.
    pub time_freeze_seconds: u32,

    /// Skip freebies fire when `streak % interval == offset`.
    pub skip_freebie_interval: u32,

    /// See `skip_freebie_interval`.
    pub skip_freebie_offset: u32,

    /// A points doubler fires each time the score crosses a multiple of this.
    pub doubler_score_step: u32,
}

impl Default for PowerUpRules {
    fn default() -> Self {
        Self {
            time_freeze_interval: 10,
            time_freeze_seconds: 5,
            skip_freebie_interval: 10,
            skip_freebie_offset: 5,
            doubler_score_step: 1000,
        }
    }
}

/// Scoring and timing rules for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRules {
    /// Points for a correct word before multipliers and bonuses.
    pub base_points: u32,

    /// How many words are marked lucky (capped at the deck size).
    pub lucky_target_count: usize,

    /// Combo streak rules.
    pub combo: ComboRules,

    /// Milestone power-up rules.
    pub power_ups: PowerUpRules,

    /// Cooldown after each guess or skip during which input is ignored.
    pub settle_delay: Duration,

    /// Number of countdown labels shown before play (0 starts immediately).
    pub countdown_steps: u8,

    /// Points added at the results screen per second left on the clock.
    pub time_bonus_per_second: u32,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            base_points: 100,
            lucky_target_count: 4,
            combo: ComboRules::default(),
            power_ups: PowerUpRules::default(),
            settle_delay: Duration::from_millis(500),
            countdown_steps: 4,
            time_bonus_per_second: TIME_BONUS_PER_SECOND,
        }
    }
}

impl RoundRules {
    /// Set the number of lucky words.
    #[must_use]
    pub fn with_lucky_target(mut self, count: usize) -> Self {
        self.lucky_target_count = count;
        self
    }

    /// Set the input cooldown after each action.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the number of countdown labels before play.
    #[must_use]
    pub fn with_countdown_steps(mut self, steps: u8) -> Self {
        self.countdown_steps = steps;
        self
    }

    /// Replace the combo rules.
    #[must_use]
    pub fn with_combo(mut self, combo: ComboRules) -> Self {
        self.combo = combo;
        self
    }

    /// Replace the power-up rules.
    #[must_use]
    pub fn with_power_ups(mut self, power_ups: PowerUpRules) -> Self {
        self.power_ups = power_ups;
        self
    }

    /// Label shown for a countdown step: "3", "2", "1", then "GO!".
    #[must_use]
    pub fn countdown_label(&self, step: u8) -> String {
        if step + 1 >= self.countdown_steps {
            "GO!".to_string()
        } else {
            (self.countdown_steps - 1 - step).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_word_list() {
        let parsed = parse_word_list("cat,dog\n  bird  \n,,\n");
        assert_eq!(parsed, words(&["cat", "dog", "bird"]));
    }

    #[test]
    fn test_parse_drops_long_words() {
        let long = "x".repeat(50);
        let input = format!("one\n{long}\ntwo\n{}", "y".repeat(49));
        let parsed = parse_word_list(&input);
        assert_eq!(parsed.len(), 3);
        assert!(!parsed.contains(&long));
    }

    #[test]
    fn test_config_accepts_valid_input() {
        let config = RoundConfig::new(words(&["a", "b", "c"]), 180).unwrap();
        assert_eq!(config.words().len(), 3);
        assert_eq!(config.total_time_limit_secs(), 180);
    }

    #[test]
    fn test_config_rejects_too_few_words() {
        let err = RoundConfig::new(words(&["a", "b"]), 180).unwrap_err();
        assert_eq!(err, ConfigError::TooFewWords { count: 2 });
    }

    #[test]
    fn test_config_rejects_long_word() {
        let long = "z".repeat(50);
        let err = RoundConfig::new(vec!["a".into(), long, "c".into()], 180).unwrap_err();
        assert_eq!(err, ConfigError::WordTooLong { index: 1, chars: 50 });
    }

    #[test]
    fn test_config_rejects_empty_word() {
        let err = RoundConfig::new(words(&["a", "", "c"]), 180).unwrap_err();
        assert_eq!(err, ConfigError::EmptyWord { index: 1 });
    }

    #[test]
    fn test_config_time_limit_bounds() {
        let list = words(&["a", "b", "c"]);
        assert!(RoundConfig::new(list.clone(), 60).is_ok());
        assert!(RoundConfig::new(list.clone(), 600).is_ok());
        assert_eq!(
            RoundConfig::new(list.clone(), 59).unwrap_err(),
            ConfigError::TimeLimitOutOfRange { seconds: 59 }
        );
        assert_eq!(
            RoundConfig::new(list, 601).unwrap_err(),
            ConfigError::TimeLimitOutOfRange { seconds: 601 }
        );
    }

    #[test]
    fn test_from_text_filters_before_counting() {
        let long = "q".repeat(60);
        let err = RoundConfig::from_text(&format!("a, b, {long}"), 120).unwrap_err();
        assert_eq!(err, ConfigError::TooFewWords { count: 2 });
    }

    #[test]
    fn test_default_rules() {
        let rules = RoundRules::default();
        assert_eq!(rules.base_points, 100);
        assert_eq!(rules.lucky_target_count, 4);
        assert_eq!(rules.combo.activation_threshold, 3);
        assert_eq!(rules.combo.point_bonus, 50);
        assert_eq!(rules.power_ups.doubler_score_step, 1000);
        assert_eq!(rules.settle_delay, Duration::from_millis(500));
        assert_eq!(rules.time_bonus_per_second, 10);
    }

    #[test]
    fn test_rules_builder() {
        let rules = RoundRules::default()
            .with_lucky_target(0)
            .with_countdown_steps(0)
            .with_settle_delay(Duration::ZERO);

        assert_eq!(rules.lucky_target_count, 0);
        assert_eq!(rules.countdown_steps, 0);
        assert_eq!(rules.settle_delay, Duration::ZERO);
    }

    #[test]
    fn test_countdown_labels() {
        let rules = RoundRules::default();
        let labels: Vec<_> = (0..4).map(|s| rules.countdown_label(s)).collect();
        assert_eq!(labels, vec!["3", "2", "1", "GO!"]);
    }
}
