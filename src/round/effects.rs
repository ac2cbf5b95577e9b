//! Side-effect intents returned by round transitions.
//!
//! Transitions never play sounds or touch the UI themselves. They return a
//! list of `Effect`s in the order they happened; the caller executes them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::RoundOutcome;
use crate::deck::LuckyMultiplier;

/// Logical sound cue. Mapping to audio assets is up to the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    CountdownGo,
    Correct,
    Skip,
    PowerUpCollected,
    TimeFreeze,
    SkipFreebieUsed,
    PointsDoublerApplied,
    TimesUp,
    GameOver,
}

/// Banner shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMessage {
    ComboActivated { streak: u32 },
    TimeBonus { seconds: u32 },
    TimeFreeze { seconds: u32 },
    SkipFreebieEarned,
    SkipFreebieUsed,
    PointsDoublerActive,
}

impl fmt::Display for GameMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMessage::ComboActivated { streak } => write!(f, "COMBO {streak}x ACTIVE!"),
            GameMessage::TimeBonus { seconds } => write!(f, "+{seconds} SECONDS!"),
            GameMessage::TimeFreeze { seconds } => write!(f, "TIME FREEZE! +{seconds}s"),
            GameMessage::SkipFreebieEarned => f.write_str("SKIP FREEBIE EARNED!"),
            GameMessage::SkipFreebieUsed => f.write_str("SKIP FREEBIE USED!"),
            GameMessage::PointsDoublerActive => f.write_str("POINTS DOUBLER ACTIVE!"),
        }
    }
}

/// Breakdown of the points for one correct guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    /// Total added to the score.
    pub points: u32,
    /// Multiplier of the guessed word, if lucky.
    pub lucky: Option<LuckyMultiplier>,
    /// True if the combo bonus was included.
    pub combo: bool,
    /// True if a pending doubler was applied.
    pub doubled: bool,
}

/// Something the caller should do after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    PlaySound(SoundCue),
    ShowMessage(GameMessage),
    /// Show a pre-round countdown label.
    Countdown { label: String },
    /// The countdown finished and input is accepted.
    RoundLive,
    PointsAwarded(Award),
    WordSkipped { freebie_used: bool },
    /// Terminal notification, emitted exactly once per round.
    RoundEnded(RoundOutcome),
}

impl Effect {
    #[must_use]
    pub fn is_round_end(&self) -> bool {
        matches!(self, Effect::RoundEnded(_))
    }
}
