//! Consecutive-correct streak tracking.

use serde::{Deserialize, Serialize};

use crate::core::ComboRules;

/// Streak state for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboState {
    /// Consecutive correct guesses since the last reset.
    pub streak: u32,

    /// True once the streak reaches the activation threshold.
    pub active: bool,

    /// Combo time bonuses granted so far this round.
    pub time_bonuses_applied: u32,
}

/// What a correct guess did to the combo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComboUpdate {
    /// Streak after the guess.
    pub streak: u32,

    /// True only on the guess that switched the combo on.
    pub activated: bool,

    /// Points the combo adds to this guess (0 while inactive).
    pub point_bonus: u32,

    /// Seconds to add to the clock, if the time bonus fired.
    pub time_bonus_secs: Option<u32>,
}

impl ComboState {
    /// Fresh state for a new round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a correct guess.
    pub fn on_correct(&mut self, rules: &ComboRules) -> ComboUpdate {
        self.streak += 1;

        let mut update = ComboUpdate {
            streak: self.streak,
            ..ComboUpdate::default()
        };

        if self.streak >= rules.activation_threshold {
            update.activated = !self.active;
            self.active = true;
            update.point_bonus = rules.point_bonus;

            if self.streak == rules.time_bonus_threshold
                && self.time_bonuses_applied < rules.max_time_bonus_applications
            {
                self.time_bonuses_applied += 1;
                update.time_bonus_secs = Some(rules.time_bonus_seconds);
            }
        }

        update
    }

    /// Register a skip. A consumed freebie leaves the streak untouched.
    pub fn on_skip(&mut self, freebie_used: bool) {
        if !freebie_used {
            self.streak = 0;
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(combo: &mut ComboState, n: u32) -> Vec<ComboUpdate> {
        let rules = ComboRules::default();
        (0..n).map(|_| combo.on_correct(&rules)).collect()
    }

    #[test]
    fn test_bonus_starts_at_third_guess() {
        let mut combo = ComboState::new();
        let updates = run(&mut combo, 4);

        let bonuses: Vec<_> = updates.iter().map(|u| u.point_bonus).collect();
        assert_eq!(bonuses, vec![0, 0, 50, 50]);
        assert!(combo.active);
    }

    #[test]
    fn test_activation_fires_once() {
        let mut combo = ComboState::new();
        let updates = run(&mut combo, 6);

        let activations: Vec<_> = updates.iter().map(|u| u.activated).collect();
        assert_eq!(activations, vec![false, false, true, false, false, false]);
    }

    #[test]
    fn test_time_bonus_once_per_round() {
        let rules = ComboRules::default();
        let mut combo = ComboState::new();

        let first = run(&mut combo, 5);
        assert_eq!(first[4].time_bonus_secs, Some(5));
        assert!(first[..4].iter().all(|u| u.time_bonus_secs.is_none()));

        combo.on_skip(false);
        let second = run(&mut combo, 5);
        assert!(second.iter().all(|u| u.time_bonus_secs.is_none()));
        assert_eq!(combo.time_bonuses_applied, rules.max_time_bonus_applications);
    }

    #[test]
    fn test_skip_resets() {
        let mut combo = ComboState::new();
        run(&mut combo, 4);

        combo.on_skip(false);
        assert_eq!(combo.streak, 0);
        assert!(!combo.active);
    }

    #[test]
    fn test_freebie_skip_preserves_streak() {
        let mut combo = ComboState::new();
        run(&mut combo, 4);

        combo.on_skip(true);
        assert_eq!(combo.streak, 4);
        assert!(combo.active);

        let next = combo.on_correct(&ComboRules::default());
        assert_eq!(next.streak, 5);
        assert!(!next.activated);
    }
}
