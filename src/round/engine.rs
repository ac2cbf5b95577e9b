//! Stateful front end over the pure round transitions.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::effects::Effect;
use super::state::{Ignored, RoundOutcome, RoundSnapshot, RoundState, Transition};
use crate::core::{GameRng, RandomSource, RoundConfig, RoundRules};
use crate::deck::WordDeck;

/// Owns the rules, the random source and the current round.
///
/// Every action returns the effects it produced. Actions that do not
/// apply in the current state return an empty list.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use word_rush::core::{RoundConfig, RoundRules};
/// use word_rush::round::RoundEngine;
///
/// let config = RoundConfig::from_text("alpha, bravo, charlie", 120).unwrap();
/// let rules = RoundRules::default().with_countdown_steps(0).with_lucky_target(0);
/// let mut engine = RoundEngine::new(7).with_rules(rules);
///
/// engine.start(&config);
/// engine.mark_correct(Duration::ZERO);
/// assert_eq!(engine.snapshot().map(|s| s.score), Some(100));
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine<R: RandomSource = GameRng> {
    rules: RoundRules,
    rng: R,
    state: Option<RoundState>,
}

impl RoundEngine<GameRng> {
    /// Engine with default rules and a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_source(GameRng::new(seed))
    }
}

impl<R: RandomSource> RoundEngine<R> {
    /// Engine drawing deck randomness from `rng`.
    #[must_use]
    pub fn with_source(rng: R) -> Self {
        Self {
            rules: RoundRules::default(),
            rng,
            state: None,
        }
    }

    /// Replace the rules. Applies from the next `start`.
    #[must_use]
    pub fn with_rules(mut self, rules: RoundRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    /// Current round, if one was started.
    #[must_use]
    pub fn state(&self) -> Option<&RoundState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.state.as_ref().map(|s| s.snapshot(&self.rules))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.state.as_ref().and_then(RoundState::outcome)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Shuffle a fresh deck from `config` and start a round.
    ///
    /// Any previous round is discarded.
    pub fn start(&mut self, config: &RoundConfig) -> Vec<Effect> {
        let deck = WordDeck::build(
            config.words(),
            self.rules.lucky_target_count,
            &mut self.rng,
        );
        self.start_with_deck(deck, config.total_time_limit_secs())
    }

    /// Start a round over a prepared deck.
    pub fn start_with_deck(&mut self, deck: WordDeck, time_limit_secs: u32) -> Vec<Effect> {
        info!(
            words = deck.len(),
            lucky = deck.lucky_count(),
            time_limit_secs,
            "round started"
        );
        let Transition { state, effects } = RoundState::start(deck, time_limit_secs, &self.rules);
        self.commit(state, effects)
    }

    pub fn mark_correct(&mut self, now: Duration) -> Vec<Effect> {
        let result = self.current().and_then(|s| s.mark_correct(now, &self.rules));
        self.settle("mark_correct", result)
    }

    pub fn mark_skip(&mut self, now: Duration) -> Vec<Effect> {
        let result = self.current().and_then(|s| s.mark_skip(now, &self.rules));
        self.settle("mark_skip", result)
    }

    pub fn end_early(&mut self, now: Duration) -> Vec<Effect> {
        let result = self.current().and_then(|s| s.end_early(now));
        self.settle("end_early", result)
    }

    /// Deliver one elapsed second.
    pub fn tick(&mut self, now: Duration) -> Vec<Effect> {
        let result = self.current().and_then(|s| s.tick(now, &self.rules));
        match result {
            Ok(Transition { state, effects }) => self.commit(state, effects),
            Err(reason) => {
                trace!(action = "tick", ?reason, "action ignored");
                Vec::new()
            }
        }
    }

    fn current(&self) -> Result<&RoundState, Ignored> {
        self.state.as_ref().ok_or(Ignored::NotStarted)
    }

    fn settle(&mut self, action: &'static str, result: Result<Transition, Ignored>) -> Vec<Effect> {
        match result {
            Ok(Transition { state, effects }) => {
                debug!(
                    action,
                    index = state.index(),
                    score = state.score(),
                    streak = state.combo().streak,
                    "action applied"
                );
                self.commit(state, effects)
            }
            Err(reason) => {
                trace!(action, ?reason, "action ignored");
                Vec::new()
            }
        }
    }

    fn commit(&mut self, state: RoundState, effects: Vec<Effect>) -> Vec<Effect> {
        for effect in &effects {
            match effect {
                Effect::ShowMessage(message) => debug!(%message, "player feedback"),
                Effect::RoundEnded(outcome) => info!(
                    reason = ?outcome.reason,
                    raw_score = outcome.raw_score,
                    remaining_seconds = outcome.remaining_seconds,
                    "round ended"
                ),
                _ => {}
            }
        }
        self.state = Some(state);
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedSequence;
    use crate::round::effects::SoundCue;

    fn config() -> RoundConfig {
        RoundConfig::from_text("a, b, c, d, e", 180).unwrap()
    }

    fn instant_rules() -> RoundRules {
        RoundRules::default().with_countdown_steps(0)
    }

    #[test]
    fn test_actions_before_start_are_ignored() {
        let mut engine = RoundEngine::new(1);
        assert!(engine.mark_correct(Duration::ZERO).is_empty());
        assert!(engine.tick(Duration::ZERO).is_empty());
        assert!(engine.snapshot().is_none());
    }

    #[test]
    fn test_same_seed_same_deck() {
        let mut a = RoundEngine::new(42);
        let mut b = RoundEngine::new(42);
        a.start(&config());
        b.start(&config());

        assert_eq!(a.state().map(RoundState::deck), b.state().map(RoundState::deck));
    }

    #[test]
    fn test_restart_discards_previous_round() {
        let mut engine = RoundEngine::new(3).with_rules(instant_rules());
        engine.start(&config());
        engine.mark_correct(Duration::ZERO);
        engine.end_early(Duration::from_secs(1));
        assert!(engine.is_finished());

        engine.start(&config());
        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.index, 0);
        assert!(!snap.finished);
    }

    #[test]
    fn test_injected_source() {
        let mut engine =
            RoundEngine::with_source(FixedSequence::new(vec![0])).with_rules(instant_rules());
        engine.start(&config());

        // All-zero draws rotate the list left by one.
        let snap = engine.snapshot().unwrap();
        assert_eq!(snap.current_word.as_deref(), Some("b"));
    }

    #[test]
    fn test_end_early_reports_once() {
        let mut engine = RoundEngine::new(5).with_rules(instant_rules());
        engine.start(&config());

        let first = engine.end_early(Duration::ZERO);
        assert!(first.iter().any(Effect::is_round_end));
        assert!(first.contains(&Effect::PlaySound(SoundCue::TimesUp)));
        assert!(engine.end_early(Duration::from_secs(1)).is_empty());
    }
}
