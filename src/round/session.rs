//! UI-facing driver: engine, real time and the outside collaborators.
//!
//! `RoundSession` reads monotonic time from a `TimeSource`, delivers due
//! clock ticks before each input, routes sound cues to a `SoundSink`, and
//! finalizes the score exactly once when the round ends.

use tracing::debug;

use super::effects::{Effect, SoundCue};
use super::engine::RoundEngine;
use super::state::{RoundOutcome, RoundSnapshot};
use crate::clock::{TickCadence, TimeSource};
use crate::core::{GameRng, RandomSource, RoundConfig};
use crate::deck::WordDeck;
use crate::scoring::{finalize_at_rate, FinalScore};

/// Plays logical sound cues. Playback is fire-and-forget.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue.
impl SoundSink for () {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Records cues in order.
impl SoundSink for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}

/// Receives round notifications.
pub trait RoundObserver {
    /// Called for every effect, in order. Defaults to ignoring it.
    fn on_effect(&mut self, _effect: &Effect) {}

    /// Called once per round with the raw outcome and the finalized score.
    fn on_round_end(&mut self, outcome: &RoundOutcome, score: &FinalScore);
}

impl RoundObserver for () {
    fn on_round_end(&mut self, _outcome: &RoundOutcome, _score: &FinalScore) {}
}

/// A round wired to real time and its collaborators.
pub struct RoundSession<T, S, O, R = GameRng>
where
    T: TimeSource,
    S: SoundSink,
    O: RoundObserver,
    R: RandomSource,
{
    engine: RoundEngine<R>,
    time: T,
    sound: S,
    observer: O,
    cadence: TickCadence,
    result: Option<FinalScore>,
}

impl<T, S, O, R> RoundSession<T, S, O, R>
where
    T: TimeSource,
    S: SoundSink,
    O: RoundObserver,
    R: RandomSource,
{
    pub fn new(engine: RoundEngine<R>, time: T, sound: S, observer: O) -> Self {
        Self {
            engine,
            time,
            sound,
            observer,
            cadence: TickCadence::default(),
            result: None,
        }
    }

    /// Start a new round from a validated config.
    pub fn start(&mut self, config: &RoundConfig) {
        self.result = None;
        let effects = self.engine.start(config);
        self.arm_and_dispatch(effects);
    }

    /// Start a new round over a prepared deck.
    pub fn start_with_deck(&mut self, deck: WordDeck, time_limit_secs: u32) {
        self.result = None;
        let effects = self.engine.start_with_deck(deck, time_limit_secs);
        self.arm_and_dispatch(effects);
    }

    pub fn mark_correct(&mut self) {
        let now = self.poll();
        let effects = self.engine.mark_correct(now);
        self.dispatch(effects);
    }

    pub fn mark_skip(&mut self) {
        let now = self.poll();
        let effects = self.engine.mark_skip(now);
        self.dispatch(effects);
    }

    pub fn end_early(&mut self) {
        let now = self.poll();
        let effects = self.engine.end_early(now);
        self.dispatch(effects);
    }

    /// Deliver every clock tick that has come due. Returns the current time.
    ///
    /// Hosts call this from their frame or timer loop; input methods call
    /// it first so an expired clock wins over a late click. Each tick is
    /// stamped with the instant it fell due, not the time of the poll.
    pub fn poll(&mut self) -> std::time::Duration {
        let now = self.time.now();
        while let Some(at) = self.cadence.next_tick(now) {
            let effects = self.engine.tick(at);
            self.dispatch(effects);
        }
        now
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.engine.snapshot()
    }

    /// Finalized score of the last finished round.
    #[must_use]
    pub fn final_score(&self) -> Option<FinalScore> {
        self.result
    }

    #[must_use]
    pub fn engine(&self) -> &RoundEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut S {
        &mut self.sound
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[must_use]
    pub fn time(&self) -> &T {
        &self.time
    }

    /// True while clock ticks are still scheduled.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.cadence.is_armed()
    }

    fn arm_and_dispatch(&mut self, effects: Vec<Effect>) {
        self.cadence.start(self.time.now());
        self.dispatch(effects);
    }

    fn dispatch(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.observer.on_effect(&effect);
            match effect {
                Effect::PlaySound(cue) => self.sound.play(cue),
                Effect::RoundEnded(outcome) => self.conclude(&outcome),
                _ => {}
            }
        }
    }

    fn conclude(&mut self, outcome: &RoundOutcome) {
        self.cadence.cancel();
        if self.result.is_some() {
            return;
        }

        let score = finalize_at_rate(
            outcome.raw_score,
            outcome.remaining_seconds,
            self.engine.rules().time_bonus_per_second,
        );
        debug!(final_score = score.final_score, time_bonus = score.time_bonus, "score finalized");
        self.result = Some(score);
        self.observer.on_round_end(outcome, &score);
    }
}
