//! Error types for round setup and settings persistence.
//!
//! The round engine itself has no fallible operations: calls made in the
//! wrong state are no-ops. Errors only arise before a round exists
//! (configuration) or at the persistence boundary.

use thiserror::Error;

use super::config::{MAX_TIME_LIMIT_SECS, MIN_TIME_LIMIT_SECS, MIN_WORDS};

/// Rejected round configuration. The `Display` text is shown to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Please enter at least {} valid words (max 50 characters each). Got {count}.", MIN_WORDS)]
    TooFewWords { count: usize },

    #[error("Word {index} is empty.")]
    EmptyWord { index: usize },

    #[error("Word {index} is {chars} characters long (max 50 characters each).")]
    WordTooLong { index: usize, chars: usize },

    #[error(
        "Game time must be between {} and {} minutes (got {seconds} seconds).",
        MIN_TIME_LIMIT_SECS / 60,
        MAX_TIME_LIMIT_SECS / 60
    )]
    TimeLimitOutOfRange { seconds: u32 },
}

/// Failure to write persisted settings.
///
/// Reads never fail: malformed data falls back to defaults.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings encoding failed: {0}")]
    Codec(#[from] bincode::Error),
}
