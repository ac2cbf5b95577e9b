//! The round engine.
//!
//! ## Layers
//!
//! - `state`: `RoundState` and its pure transitions. Each call returns a new
//!   state plus the `Effect`s it produced, or the reason it was ignored.
//! - `engine`: `RoundEngine` owns the rules, the random source and the
//!   current state; actions outside their valid state are silent no-ops.
//! - `session`: `RoundSession` adds real time, sound playback and the
//!   end-of-round notification with the finalized score.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use word_rush::core::RoundRules;
//! use word_rush::deck::WordDeck;
//! use word_rush::round::{Effect, RoundEngine};
//!
//! let words = vec!["red".to_string(), "green".into(), "blue".into()];
//! let deck = WordDeck::with_lucky(words, std::iter::empty());
//! let mut engine = RoundEngine::new(0).with_rules(RoundRules::default().with_countdown_steps(0));
//!
//! engine.start_with_deck(deck, 60);
//! let effects = engine.end_early(Duration::ZERO);
//! assert!(effects.iter().any(Effect::is_round_end));
//! ```

pub mod effects;
pub mod engine;
pub mod session;
pub mod state;

pub use effects::{Award, Effect, GameMessage, SoundCue};
pub use engine::RoundEngine;
pub use session::{RoundObserver, RoundSession, SoundSink};
pub use state::{EndReason, Ignored, RoundOutcome, RoundPhase, RoundSnapshot, RoundState, Transition};
