//! Core building blocks: random source, configuration, errors.
//!
//! Everything here is free of round state. The deck, scoring and clock
//! modules build on these types; the round engine wires them together.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{FixedSequence, GameRng, RandomSource};
pub use config::{
    parse_word_list, ComboRules, PowerUpRules, RoundConfig, RoundRules, DEFAULT_MUSIC_VOLUME,
    DEFAULT_TIME_LIMIT_SECS, MAX_TIME_LIMIT_SECS, MAX_WORD_CHARS, MIN_TIME_LIMIT_SECS, MIN_WORDS,
};
pub use error::{ConfigError, SettingsError};
