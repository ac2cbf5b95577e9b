//! Round state and its pure transitions.
//!
//! ## RoundState
//!
//! One value holds everything a round owns:
//! - The word deck and the current word index
//! - Score, combo streak and power-up ledger
//! - The countdown clock and the input cooldown
//!
//! Transitions take `&self` and return a fresh `RoundState` plus the
//! effects that happened, in order. The deck is an `im` structure, so
//! cloning a state is cheap.
//!
//! ## Phases
//!
//! `Countdown` (ticks advance the labels) -> `Active` (guesses, skips and
//! clock ticks) -> `Finished` (every call is ignored).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::effects::{Award, Effect, GameMessage, SoundCue};
use crate::clock::{Clock, ClockTick};
use crate::core::RoundRules;
use crate::deck::{LuckyMultiplier, WordDeck};
use crate::scoring::{ComboState, PowerUpReward, PowerUpState};

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    DeckExhausted,
    TimeExpired,
    EarlyExit,
}

/// Terminal result of a round, handed to the score finalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub reason: EndReason,
    pub raw_score: u32,
    /// Seconds credited to the time bonus. Zero unless the deck ran out.
    pub remaining_seconds: u32,
    /// Word showing when the round ended; the deck length if it ran out.
    pub word_index: usize,
}

/// Round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Pre-round countdown showing label `step`.
    Countdown { step: u8 },
    Active,
    Finished(RoundOutcome),
}

/// Why an action was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    NotStarted,
    CountingDown,
    CoolingDown,
    TimeExpired,
    Finished,
}

/// New state plus the effects produced on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: RoundState,
    pub effects: Vec<Effect>,
}

/// Complete state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    deck: WordDeck,
    phase: RoundPhase,
    index: usize,
    score: u32,
    combo: ComboState,
    power_ups: PowerUpState,
    clock: Clock,
    cooldown_until: Option<Duration>,
}

impl RoundState {
    /// Start a round over `deck` with `time_limit_secs` on the clock.
    pub fn start(deck: WordDeck, time_limit_secs: u32, rules: &RoundRules) -> Transition {
        let mut state = Self {
            deck,
            phase: RoundPhase::Countdown { step: 0 },
            index: 0,
            score: 0,
            combo: ComboState::new(),
            power_ups: PowerUpState::new(),
            clock: Clock::new(time_limit_secs),
            cooldown_until: None,
        };

        let mut effects = Vec::new();
        if rules.countdown_steps > 0 {
            effects.push(Effect::PlaySound(SoundCue::CountdownGo));
            effects.push(Effect::Countdown {
                label: rules.countdown_label(0),
            });
        } else {
            state.go_live(&mut effects);
        }

        Transition { state, effects }
    }

    // === Accessors ===

    #[must_use]
    pub fn deck(&self) -> &WordDeck {
        &self.deck
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn combo(&self) -> &ComboState {
        &self.combo
    }

    #[must_use]
    pub fn power_ups(&self) -> &PowerUpState {
        &self.power_ups
    }

    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Input is ignored before this instant.
    #[must_use]
    pub fn cooldown_until(&self) -> Option<Duration> {
        self.cooldown_until
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, RoundPhase::Finished(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The word to guess, while one is showing.
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        if self.is_finished() {
            None
        } else {
            self.deck.word(self.index)
        }
    }

    #[must_use]
    pub fn current_multiplier(&self) -> Option<LuckyMultiplier> {
        if self.is_finished() {
            None
        } else {
            self.deck.multiplier(self.index)
        }
    }

    /// Read-only view for the UI.
    #[must_use]
    pub fn snapshot(&self, rules: &RoundRules) -> RoundSnapshot {
        let countdown_label = match self.phase {
            RoundPhase::Countdown { step } => Some(rules.countdown_label(step)),
            _ => None,
        };

        RoundSnapshot {
            current_word: self.current_word().map(str::to_string),
            index: self.index,
            word_count: self.deck.len(),
            score: self.score,
            remaining_seconds: self.clock.remaining(),
            streak: self.combo.streak,
            combo_active: self.combo.active,
            skip_freebies: self.power_ups.skip_freebies,
            doubler_pending: self.power_ups.doubler_pending,
            frozen: self.clock.is_frozen(),
            lucky: self.current_multiplier(),
            countdown_label,
            finished: self.is_finished(),
        }
    }

    // === Transitions ===

    /// Mark the current word as guessed.
    pub fn mark_correct(&self, now: Duration, rules: &RoundRules) -> Result<Transition, Ignored> {
        self.accepting_input(now)?;

        let mut next = self.clone();
        let mut effects = vec![Effect::PlaySound(SoundCue::Correct)];

        let lucky = next.deck.multiplier(next.index);
        let base = rules
            .base_points
            .saturating_mul(lucky.map_or(1, LuckyMultiplier::factor));

        let combo = next.combo.on_correct(&rules.combo);
        if combo.activated {
            effects.push(Effect::PlaySound(SoundCue::PowerUpCollected));
            effects.push(Effect::ShowMessage(GameMessage::ComboActivated {
                streak: combo.streak,
            }));
        }
        if let Some(seconds) = combo.time_bonus_secs {
            next.clock.add_seconds(seconds);
            effects.push(Effect::PlaySound(SoundCue::TimeFreeze));
            effects.push(Effect::ShowMessage(GameMessage::TimeBonus { seconds }));
        }

        let (points, doubled) = next
            .power_ups
            .consume_doubler_if_pending(base.saturating_add(combo.point_bonus));
        if doubled {
            effects.push(Effect::PlaySound(SoundCue::PointsDoublerApplied));
        }

        let before = next.score;
        next.score = before.saturating_add(points);
        effects.push(Effect::PointsAwarded(Award {
            points,
            lucky,
            combo: combo.point_bonus > 0,
            doubled,
        }));

        let rewards = next
            .power_ups
            .evaluate(combo.streak, before, next.score, &rules.power_ups);
        for reward in rewards {
            next.apply_reward(reward, now, &mut effects);
        }

        next.advance(now, rules, &mut effects);
        Ok(Transition {
            state: next,
            effects,
        })
    }

    /// Skip the current word, spending a freebie if one is banked.
    pub fn mark_skip(&self, now: Duration, rules: &RoundRules) -> Result<Transition, Ignored> {
        self.accepting_input(now)?;

        let mut next = self.clone();
        let mut effects = Vec::new();

        let freebie_used = next.power_ups.try_spend_skip_freebie();
        next.combo.on_skip(freebie_used);
        if freebie_used {
            effects.push(Effect::PlaySound(SoundCue::SkipFreebieUsed));
            effects.push(Effect::ShowMessage(GameMessage::SkipFreebieUsed));
        } else {
            effects.push(Effect::PlaySound(SoundCue::Skip));
        }
        effects.push(Effect::WordSkipped { freebie_used });

        next.advance(now, rules, &mut effects);
        Ok(Transition {
            state: next,
            effects,
        })
    }

    /// End the round now, forfeiting the time bonus.
    pub fn end_early(&self, now: Duration) -> Result<Transition, Ignored> {
        self.accepting_input(now)?;

        let mut next = self.clone();
        let mut effects = Vec::new();
        next.finish(EndReason::EarlyExit, 0, &mut effects);
        Ok(Transition {
            state: next,
            effects,
        })
    }

    /// One second of real time passed.
    ///
    /// Advances the countdown labels before play and the game clock during
    /// play. The clock holds while a guess or skip is settling.
    pub fn tick(&self, now: Duration, rules: &RoundRules) -> Result<Transition, Ignored> {
        let mut next = self.clone();
        let mut effects = Vec::new();

        match self.phase {
            RoundPhase::Finished(_) => return Err(Ignored::Finished),
            RoundPhase::Active if self.is_cooling_down(now) => return Err(Ignored::CoolingDown),
            RoundPhase::Countdown { step } => {
                let step = step.saturating_add(1);
                if step >= rules.countdown_steps {
                    next.go_live(&mut effects);
                } else {
                    next.phase = RoundPhase::Countdown { step };
                    effects.push(Effect::Countdown {
                        label: rules.countdown_label(step),
                    });
                }
            }
            RoundPhase::Active => {
                if next.clock.tick(now) == ClockTick::Expired {
                    next.finish(EndReason::TimeExpired, 0, &mut effects);
                }
            }
        }

        Ok(Transition {
            state: next,
            effects,
        })
    }

    // === Internals ===

    fn accepting_input(&self, now: Duration) -> Result<(), Ignored> {
        match self.phase {
            RoundPhase::Finished(_) => Err(Ignored::Finished),
            RoundPhase::Countdown { .. } => Err(Ignored::CountingDown),
            RoundPhase::Active if self.clock.is_expired() => Err(Ignored::TimeExpired),
            RoundPhase::Active if self.is_cooling_down(now) => Err(Ignored::CoolingDown),
            RoundPhase::Active => Ok(()),
        }
    }

    fn is_cooling_down(&self, now: Duration) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }

    fn go_live(&mut self, effects: &mut Vec<Effect>) {
        self.phase = RoundPhase::Active;
        effects.push(Effect::RoundLive);
        if self.deck.is_empty() {
            self.finish(EndReason::DeckExhausted, self.clock.remaining(), effects);
        }
    }

    fn apply_reward(&mut self, reward: PowerUpReward, now: Duration, effects: &mut Vec<Effect>) {
        match reward {
            PowerUpReward::TimeFreeze {
                bonus_seconds,
                freeze_for,
            } => {
                self.clock.add_seconds(bonus_seconds);
                self.clock.freeze(now + freeze_for);
                effects.push(Effect::PlaySound(SoundCue::TimeFreeze));
                effects.push(Effect::ShowMessage(GameMessage::TimeFreeze {
                    seconds: bonus_seconds,
                }));
            }
            PowerUpReward::SkipFreebie { .. } => {
                effects.push(Effect::PlaySound(SoundCue::PowerUpCollected));
                effects.push(Effect::ShowMessage(GameMessage::SkipFreebieEarned));
            }
            PowerUpReward::PointsDoubler { .. } => {
                effects.push(Effect::PlaySound(SoundCue::PowerUpCollected));
                effects.push(Effect::ShowMessage(GameMessage::PointsDoublerActive));
            }
        }
    }

    fn advance(&mut self, now: Duration, rules: &RoundRules, effects: &mut Vec<Effect>) {
        self.index += 1;
        if self.index >= self.deck.len() {
            self.finish(EndReason::DeckExhausted, self.clock.remaining(), effects);
        } else {
            self.cooldown_until = Some(now + rules.settle_delay);
        }
    }

    fn finish(&mut self, reason: EndReason, remaining_seconds: u32, effects: &mut Vec<Effect>) {
        let outcome = RoundOutcome {
            reason,
            raw_score: self.score,
            remaining_seconds,
            word_index: self.index,
        };
        self.phase = RoundPhase::Finished(outcome);
        self.cooldown_until = None;
        self.clock.unfreeze();

        let cue = if remaining_seconds == 0 {
            SoundCue::TimesUp
        } else {
            SoundCue::GameOver
        };
        effects.push(Effect::PlaySound(cue));
        effects.push(Effect::RoundEnded(outcome));
    }
}

/// What the UI shows for a round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub current_word: Option<String>,
    pub index: usize,
    pub word_count: usize,
    pub score: u32,
    pub remaining_seconds: u32,
    pub streak: u32,
    pub combo_active: bool,
    pub skip_freebies: u32,
    pub doubler_pending: bool,
    pub frozen: bool,
    pub lucky: Option<LuckyMultiplier>,
    pub countdown_label: Option<String>,
    pub finished: bool,
}
