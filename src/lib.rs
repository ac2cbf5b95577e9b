//! # word-rush
//!
//! Round engine for a timed party word-guessing game.
//!
//! A host enters a word list and a time budget. After a short countdown the
//! player marks each word as guessed or skipped until the clock runs out or
//! the list is exhausted, and the score is finalized with a time bonus.
//!
//! ## Design Principles
//!
//! 1. **One immutable state**: `RoundState` holds the deck, score, combo,
//!    power-ups and clock. Every action is a pure transition returning a new
//!    state and a list of side-effect intents (sounds, banners, round end).
//!
//! 2. **No runtime errors**: invalid input is rejected when building a
//!    `RoundConfig`. Once a round runs, actions outside their valid state
//!    are silent no-ops.
//!
//! 3. **Injected collaborators**: randomness (`RandomSource`), time
//!    (`TimeSource`), sound (`SoundSink`) and storage (`SettingsStore`) are
//!    traits, so rounds are reproducible in tests.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, rules and errors
//! - `deck`: shuffled word deck with lucky multipliers
//! - `scoring`: combo streaks, milestone power-ups, final score
//! - `clock`: freezable countdown and real-time tick cadence
//! - `round`: round state, engine and session driver
//! - `settings`: persisted host settings with fallback to defaults

pub mod core;
pub mod deck;
pub mod scoring;
pub mod clock;
pub mod round;
pub mod settings;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    parse_word_list, ConfigError, FixedSequence, GameRng, RandomSource,
    RoundConfig, RoundRules, SettingsError,
};

pub use crate::deck::{LuckyMultiplier, WordDeck};

pub use crate::scoring::{
    finalize, ComboState, FinalScore, Milestone, MilestoneSet, PowerUpState, ScoreRating,
};

pub use crate::clock::{Clock, ClockStatus, MonotonicTime, TickCadence, TimeSource};

pub use crate::round::{
    Award, Effect, EndReason, GameMessage, RoundEngine, RoundObserver, RoundOutcome,
    RoundPhase, RoundSession, RoundSnapshot, RoundState, SoundCue, SoundSink,
};

pub use crate::settings::{
    FileSettingsStore, MemorySettingsStore, PersistedSettings, SettingsStore,
};
