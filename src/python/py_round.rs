//! Round bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::clock::MonotonicTime;
use crate::core::{parse_word_list, GameRng, RoundConfig, RoundRules};
use crate::round::{Effect, RoundEngine, RoundObserver, RoundOutcome, RoundSession, SoundCue};
use crate::scoring::{FinalScore, ScoreRating};

/// Collects banner texts for the host to display.
#[derive(Default)]
struct MessageFeed {
    messages: Vec<String>,
    countdown: Vec<String>,
}

impl RoundObserver for MessageFeed {
    fn on_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::ShowMessage(message) => self.messages.push(message.to_string()),
            Effect::Countdown { label } => self.countdown.push(label.clone()),
            _ => {}
        }
    }

    fn on_round_end(&mut self, _outcome: &RoundOutcome, _score: &FinalScore) {}
}

type Session = RoundSession<MonotonicTime, Vec<SoundCue>, MessageFeed, GameRng>;

/// Python wrapper for a real-time round.
///
/// The round starts on construction. Call `poll()` regularly (for example
/// from a UI timer) so the clock advances; input methods poll first.
#[pyclass(name = "RoundEngine")]
pub struct PyRoundEngine {
    session: Session,
}

#[pymethods]
impl PyRoundEngine {
    /// Create and start a round.
    ///
    /// # Arguments
    /// - words: Word list (at least 3 words, each under 50 characters)
    /// - total_time_limit_secs: Round length, 60 to 600 seconds
    /// - seed: RNG seed; None draws one from the OS
    /// - countdown: Show "3", "2", "1", "GO!" before play
    #[new]
    #[pyo3(signature = (words, total_time_limit_secs = 180, seed = None, countdown = true))]
    fn new(
        words: Vec<String>,
        total_time_limit_secs: u32,
        seed: Option<u64>,
        countdown: bool,
    ) -> PyResult<Self> {
        let config = RoundConfig::new(words, total_time_limit_secs)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut rules = RoundRules::default();
        if !countdown {
            rules = rules.with_countdown_steps(0);
        }

        let engine = RoundEngine::with_source(rng).with_rules(rules);
        let mut session = RoundSession::new(
            engine,
            MonotonicTime::new(),
            Vec::new(),
            MessageFeed::default(),
        );
        session.start(&config);
        Ok(Self { session })
    }

    /// Split free-form text into words (newline or comma separated).
    #[staticmethod]
    fn parse_words(text: &str) -> Vec<String> {
        parse_word_list(text)
    }

    fn mark_correct(&mut self) {
        self.session.mark_correct();
    }

    fn mark_skip(&mut self) {
        self.session.mark_skip();
    }

    fn end_early(&mut self) {
        self.session.end_early();
    }

    /// Deliver clock ticks that have come due.
    fn poll(&mut self) {
        self.session.poll();
    }

    #[getter]
    fn current_word(&self) -> Option<String> {
        self.snapshot_field(|s| s.current_word.clone())
    }

    #[getter]
    fn index(&self) -> usize {
        self.snapshot_field(|s| s.index)
    }

    #[getter]
    fn score(&self) -> u32 {
        self.snapshot_field(|s| s.score)
    }

    #[getter]
    fn remaining_seconds(&self) -> u32 {
        self.snapshot_field(|s| s.remaining_seconds)
    }

    #[getter]
    fn streak(&self) -> u32 {
        self.snapshot_field(|s| s.streak)
    }

    #[getter]
    fn combo_active(&self) -> bool {
        self.snapshot_field(|s| s.combo_active)
    }

    #[getter]
    fn skip_freebies(&self) -> u32 {
        self.snapshot_field(|s| s.skip_freebies)
    }

    #[getter]
    fn doubler_pending(&self) -> bool {
        self.snapshot_field(|s| s.doubler_pending)
    }

    #[getter]
    fn frozen(&self) -> bool {
        self.snapshot_field(|s| s.frozen)
    }

    /// Multiplier of the current word (2 or 3), or None.
    #[getter]
    fn lucky_multiplier(&self) -> Option<u32> {
        self.snapshot_field(|s| s.lucky.map(|m| m.factor()))
    }

    #[getter]
    fn countdown_label(&self) -> Option<String> {
        self.snapshot_field(|s| s.countdown_label.clone())
    }

    #[getter]
    fn finished(&self) -> bool {
        self.snapshot_field(|s| s.finished)
    }

    /// (base_score, time_bonus, final_score) once the round has ended.
    #[getter]
    fn final_score(&self) -> Option<(u32, u32, u32)> {
        self.session
            .final_score()
            .map(|f| (f.base_score, f.time_bonus, f.final_score))
    }

    /// Results-screen message once the round has ended.
    #[getter]
    fn rating_message(&self) -> Option<&'static str> {
        self.session
            .final_score()
            .map(|f| ScoreRating::from_final(&f).message())
    }

    /// Sound cues since the last call, oldest first.
    fn drain_sounds(&mut self) -> Vec<String> {
        self.session
            .sound_mut()
            .drain(..)
            .map(|cue| format!("{cue:?}"))
            .collect()
    }

    /// Banner messages since the last call, oldest first.
    fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.session.observer_mut().messages)
    }

    /// Countdown labels since the last call, oldest first.
    fn drain_countdown(&mut self) -> Vec<String> {
        std::mem::take(&mut self.session.observer_mut().countdown)
    }

    fn __repr__(&self) -> String {
        let snap = self.session.snapshot().unwrap_or_default();
        let status = if snap.finished { "finished" } else { "playing" };
        format!(
            "RoundEngine(word={}/{}, score={}, remaining={}s, status={})",
            snap.index, snap.word_count, snap.score, snap.remaining_seconds, status
        )
    }
}

impl PyRoundEngine {
    fn snapshot_field<T: Default>(&self, f: impl FnOnce(&crate::round::RoundSnapshot) -> T) -> T {
        self.session.snapshot().as_ref().map(f).unwrap_or_default()
    }
}

/// Compute (base_score, time_bonus, final_score) for a finished round.
#[pyfunction]
pub fn finalize_score(raw_score: u32, remaining_seconds: u32) -> (u32, u32, u32) {
    let f = crate::scoring::finalize(raw_score, remaining_seconds);
    (f.base_score, f.time_bonus, f.final_score)
}
